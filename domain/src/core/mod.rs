//! Core value objects shared across the assistant.
//!
//! - [`query::Query`]: the raw question typed by a patron
//! - [`string`]: small UTF-8 safe helpers

pub mod query;
pub mod string;
