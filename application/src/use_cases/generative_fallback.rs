//! Generative fallback.
//!
//! Last stop of the chain. Picks the regular or the apologetic system prompt,
//! sends one completion request and re-flows the reply into the numbered
//! display style. A failing model call turns into a fixed apology, so this
//! never returns an error.

use crate::config::GenerationParams;
use crate::ports::llm_gateway::{CompletionRequest, LlmGateway};
use assistant_domain::{PromptTemplate, Query, ResponseFormatter, truncate_str};
use std::sync::Arc;
use tracing::{debug, error};

pub struct GenerativeFallback {
    gateway: Arc<dyn LlmGateway>,
    params: GenerationParams,
}

impl Clone for GenerativeFallback {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            params: self.params.clone(),
        }
    }
}

impl GenerativeFallback {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            params: GenerationParams::default(),
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Build the request for the given mode
    pub fn request_for(&self, query: &Query, is_error: bool) -> CompletionRequest {
        CompletionRequest::new(
            PromptTemplate::system(is_error),
            PromptTemplate::user(query.text(), is_error),
        )
        .with_temperature(self.params.temperature)
        .with_max_tokens(self.params.max_tokens_for(is_error))
    }

    /// Ask the model about `query`.
    ///
    /// `is_error` selects the apologetic prompt used after a source failed.
    pub async fn ask(&self, query: &Query, is_error: bool) -> String {
        let request = self.request_for(query, is_error);
        debug!(
            "Generative fallback (error mode: {}): {}",
            is_error,
            truncate_str(query.text(), 100)
        );

        match self.gateway.complete(&request).await {
            Ok(text) => ResponseFormatter::format_generative(&text),
            Err(e) => {
                error!("Generative fallback failed: {}", e);
                PromptTemplate::apology().to_string()
            }
        }
    }
}
