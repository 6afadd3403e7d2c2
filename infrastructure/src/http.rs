//! Shared HTTP plumbing for the source adapters.

use assistant_application::ProviderError;
use std::time::Duration;

/// User agent sent to the library's own services
pub const LIBRARY_USER_AGENT: &str = "BatmanLibrary/1.0";

/// Browser-like user agent for scraping the public website
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Build a client with a per-request timeout and user agent
pub fn build_client(timeout: Duration, user_agent: &str) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
}

/// Map a reqwest failure onto the provider error space
pub fn transport_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Transport(format!("request timed out: {}", e))
    } else {
        ProviderError::Transport(e.to_string())
    }
}

/// GET `url` and return the body of a successful response
pub async fn get_text(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, &str)],
) -> Result<String, ProviderError> {
    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(transport_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::Http {
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }

    response.text().await.map_err(transport_error)
}
