//! OpenAI-compatible chat completions gateway

use crate::http::{LIBRARY_USER_AGENT, build_client};
use assistant_application::{CompletionRequest, GatewayError, LlmGateway};
use assistant_domain::{GenerativeSettings, truncate_str};
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{debug, warn};

pub struct OpenAiGateway {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl OpenAiGateway {
    /// Create a gateway; the key is read from config first, then from
    /// the environment variable named by `api_key_env`
    pub fn new(settings: &GenerativeSettings) -> reqwest::Result<Self> {
        let api_key = resolve_api_key(settings, |name| std::env::var(name).ok());
        if api_key.is_none() {
            warn!(
                "No API key configured for the generative fallback (set {})",
                settings.api_key_env
            );
        }
        Self::with_api_key(settings, api_key)
    }

    pub fn with_api_key(
        settings: &GenerativeSettings,
        api_key: Option<String>,
    ) -> reqwest::Result<Self> {
        Ok(Self {
            http: build_client(settings.request_timeout, LIBRARY_USER_AGENT)?,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: settings.model.clone(),
        })
    }
}

fn resolve_api_key(
    settings: &GenerativeSettings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    settings
        .api_key
        .clone()
        .filter(|k| !k.trim().is_empty())
        .or_else(|| lookup(&settings.api_key_env).filter(|k| !k.trim().is_empty()))
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GatewayError::Configuration("API key not set".to_string()))?;

        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": request.system_prompt },
                { "role": "user", "content": request.user_prompt },
            ],
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
        });

        debug!("POST {} (model {})", url, self.model);
        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GatewayError::Http {
                status: status.as_u16(),
                message: truncate_str(&message, 200).to_string(),
            });
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("invalid response body: {}", e)))?;

        json.pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .ok_or(GatewayError::EmptyResponse)
    }
}
