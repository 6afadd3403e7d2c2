//! Language model gateways
//!
//! - [`OpenAiGateway`]: `LlmGateway` over an OpenAI-compatible chat completions API

mod openai;

pub use openai::OpenAiGateway;
