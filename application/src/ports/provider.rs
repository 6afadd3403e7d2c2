//! Shared error type for the structured sources.
//!
//! Sources report "nothing found" as an empty `Ok` value. An `Err` means the
//! source itself broke, and the router stops trying further sources.

use thiserror::Error;

/// Errors a structured source can raise
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Malformed upstream data: {0}")]
    Malformed(String),

    #[error("Credential unavailable: {0}")]
    Credential(String),

    #[error("Other error: {0}")]
    Other(String),
}
