//! Application-level configuration.
//!
//! - [`GenerationParams`]: sampling parameters for the generative fallback

pub mod generation_params;

pub use generation_params::GenerationParams;
