//! Prompt templates
//!
//! System and user prompts for the generative fallback.

mod template;

pub use template::PromptTemplate;
