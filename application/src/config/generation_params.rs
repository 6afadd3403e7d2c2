//! Generation parameters for the fallback model call.
//!
//! [`GenerationParams`] holds the sampling knobs used by
//! [`GenerativeFallback`](crate::use_cases::generative_fallback::GenerativeFallback).
//! Endpoint and credentials stay with the gateway adapter.

use assistant_domain::GenerativeSettings;
use serde::{Deserialize, Serialize};

/// Sampling parameters for the two fallback modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f32,
    /// Token budget for a regular answer.
    pub max_tokens: u32,
    /// Token budget for an answer after a source failed.
    pub error_max_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 500,
            error_max_tokens: 300,
        }
    }
}

impl GenerationParams {
    pub fn max_tokens_for(&self, is_error: bool) -> u32 {
        if is_error {
            self.error_max_tokens
        } else {
            self.max_tokens
        }
    }
}

impl From<&GenerativeSettings> for GenerationParams {
    fn from(settings: &GenerativeSettings) -> Self {
        Self {
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
            error_max_tokens: settings.error_max_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_settings_defaults() {
        let from_settings = GenerationParams::from(&GenerativeSettings::default());
        assert_eq!(from_settings, GenerationParams::default());
    }

    #[test]
    fn test_error_mode_uses_smaller_budget() {
        let params = GenerationParams::default();
        assert!(params.max_tokens_for(true) < params.max_tokens_for(false));
    }
}
