//! YORDAM catalog web service client
//!
//! The service answers `islem=arama` searches in one of two JSON shapes:
//! a bare array of `{title, year}` objects, or a Solr-style
//! `{"response": {"docs": [...]}}` envelope with YORDAM field names.
//! Anything else, including `{"status": "error"}`, counts as no result.

use crate::http::{LIBRARY_USER_AGENT, build_client, transport_error};
use assistant_application::{CatalogProvider, Credential, ProviderError};
use assistant_domain::{CatalogRecord, CatalogSettings, Query, truncate_str};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CACHE_CONTROL};
use serde_json::Value;
use tracing::{debug, info, warn};

const MISSING_TITLE: &str = "Başlık bulunamadı";
const MISSING_YEAR: &str = "Yıl yok";

pub struct YordamCatalogClient {
    http: reqwest::Client,
    endpoint: String,
    limit: u32,
}

impl YordamCatalogClient {
    pub fn new(settings: &CatalogSettings) -> reqwest::Result<Self> {
        Ok(Self {
            http: build_client(settings.request_timeout, LIBRARY_USER_AGENT)?,
            endpoint: settings.endpoint.clone(),
            limit: settings.limit,
        })
    }

    async fn fetch(&self, query: &Query, credential: &Credential) -> Result<String, ProviderError> {
        let limit = self.limit.to_string();
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("token", credential.as_str()),
                ("islem", "arama"),
                ("q", query.text()),
                ("limit", limit.as_str()),
                ("format", "json"),
            ])
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;
        debug!("Catalog responded {} ({} bytes)", status, body.len());

        if status != reqwest::StatusCode::OK {
            return Err(ProviderError::Http {
                status: status.as_u16(),
                message: truncate_str(&body, 200).to_string(),
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl CatalogProvider for YordamCatalogClient {
    async fn search(
        &self,
        query: &Query,
        credential: &Credential,
    ) -> Result<Vec<CatalogRecord>, ProviderError> {
        if query.is_blank() || credential.as_str().trim().is_empty() {
            warn!("Catalog search skipped: empty query or token");
            return Ok(Vec::new());
        }

        let body = match self.fetch(query, credential).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Catalog request failed: {}", e);
                return Ok(Vec::new());
            }
        };

        let records = parse_response(&body);
        info!("Catalog returned {} records", records.len());
        Ok(records)
    }
}

/// Decode a catalog response body
pub(crate) fn parse_response(body: &str) -> Vec<CatalogRecord> {
    if body.trim().is_empty() {
        warn!("Catalog returned an empty body (token may be invalid)");
        return Vec::new();
    }

    let data: Value = match serde_json::from_str(body) {
        Ok(data) => data,
        Err(e) => {
            warn!(
                "Catalog response is not JSON: {} ({})",
                e,
                truncate_str(body, 200)
            );
            return Vec::new();
        }
    };

    match &data {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| {
                CatalogRecord::try_new(
                    field_text(item, "title").unwrap_or_default(),
                    field_text(item, "year"),
                )
            })
            .collect(),
        Value::Object(map) if map.get("status").and_then(Value::as_str) == Some("error") => {
            let message = map
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error");
            warn!("Catalog reported an error: {}", message);
            Vec::new()
        }
        Value::Object(_) => match data.pointer("/response/docs").and_then(Value::as_array) {
            Some(docs) => docs
                .iter()
                .filter_map(|doc| {
                    CatalogRecord::try_new(
                        field_text(doc, "kunyeEserAdiYazarlar_txt")
                            .unwrap_or_else(|| MISSING_TITLE.to_string()),
                        Some(
                            field_text(doc, "qYayinTarihi_str")
                                .unwrap_or_else(|| MISSING_YEAR.to_string()),
                        ),
                    )
                })
                .collect(),
            None => {
                warn!("Unexpected catalog response shape");
                Vec::new()
            }
        },
        _ => {
            warn!("Unexpected catalog response type");
            Vec::new()
        }
    }
}

/// Read a string or number field as text
fn field_text(item: &Value, key: &str) -> Option<String> {
    match item.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{header, method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> YordamCatalogClient {
        YordamCatalogClient::new(&CatalogSettings {
            endpoint: format!("{}/webservis.php", server.uri()),
            request_timeout: Duration::from_secs(2),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_parse_plain_array() {
        let records =
            parse_response(r#"[{"title": "Nutuk", "year": 1927}, {"title": "Çalıkuşu"}]"#);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Nutuk");
        assert_eq!(records[0].year.as_deref(), Some("1927"));
        assert_eq!(records[1].year, None);
    }

    #[test]
    fn test_parse_docs_envelope_with_defaults() {
        let body = r#"{"response": {"docs": [
            {"kunyeEserAdiYazarlar_txt": "Sinekli Bakkal / Halide Edib", "qYayinTarihi_str": "1936"},
            {}
        ]}}"#;
        let records = parse_response(body);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Sinekli Bakkal / Halide Edib");
        assert_eq!(records[0].year.as_deref(), Some("1936"));
        assert_eq!(records[1].title, MISSING_TITLE);
        assert_eq!(records[1].year.as_deref(), Some(MISSING_YEAR));
    }

    #[test]
    fn test_parse_error_and_garbage_yield_nothing() {
        assert!(parse_response(r#"{"status": "error", "message": "token"}"#).is_empty());
        assert!(parse_response(r#"{"status": "error", "message": 7}"#).is_empty());
        assert!(parse_response(r#"{"status": "error"}"#).is_empty());
        assert!(parse_response(r#"{"something": "else"}"#).is_empty());
        assert!(parse_response("<html>bakım</html>").is_empty());
        assert!(parse_response("   ").is_empty());
        assert!(parse_response("42").is_empty());
    }

    #[tokio::test]
    async fn test_search_sends_expected_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("token", "tok"))
            .and(query_param("islem", "arama"))
            .and(query_param("q", "yapay zeka"))
            .and(query_param("limit", "10"))
            .and(query_param("format", "json"))
            .and(header("accept", "application/json"))
            .and(header("user-agent", LIBRARY_USER_AGENT))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"[{"title": "Yapay Zeka", "year": "2021"}]"#),
            )
            .mount(&server)
            .await;

        let records = client_for(&server)
            .search(&Query::new("yapay zeka"), &Credential::new("tok"))
            .await
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Yapay Zeka");
    }

    #[tokio::test]
    async fn test_http_error_is_absorbed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&server)
            .await;

        let records = client_for(&server)
            .search(&Query::new("kitap"), &Credential::new("tok"))
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_blank_query_skips_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"title": "x"}]"#))
            .expect(0)
            .mount(&server)
            .await;

        let records = client_for(&server)
            .search(&Query::new("  "), &Credential::new("tok"))
            .await
            .unwrap();
        assert!(records.is_empty());
    }
}
