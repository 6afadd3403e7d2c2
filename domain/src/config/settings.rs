//! Source and router settings (format-neutral, serde-free).
//!
//! These describe what each adapter needs without tying the domain to any
//! file format. The infrastructure config layer fills them from TOML and the
//! environment.

use std::time::Duration;

/// Everything needed to wire the assistant
#[derive(Debug, Clone, Default)]
pub struct AssistantSettings {
    pub router: RouterSettings,
    pub catalog: CatalogSettings,
    pub academic: AcademicSettings,
    pub website: WebsiteSettings,
    pub generative: GenerativeSettings,
}

/// Fallback chain behaviour
#[derive(Debug, Clone)]
pub struct RouterSettings {
    /// Upper bound on a single source stage (default: 10s).
    ///
    /// Source request timeouts stay below this so an adapter can give up on
    /// one upstream and still try the next within the stage.
    pub provider_timeout: Duration,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(10),
        }
    }
}

/// YORDAM catalog web service
#[derive(Debug, Clone)]
pub struct CatalogSettings {
    pub endpoint: String,
    /// Token set directly in config (takes precedence over `token_env`)
    pub token: Option<String>,
    /// Environment variable holding the static token
    pub token_env: String,
    /// Maximum number of hits requested (default: 10)
    pub limit: u32,
    pub request_timeout: Duration,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://katalog.yordamdestek.com/yordam/webservis/webservis.php"
                .to_string(),
            token: None,
            token_env: "STATIC_YORDAM_TOKEN".to_string(),
            limit: 10,
            request_timeout: Duration::from_secs(8),
        }
    }
}

/// OAI-PMH repository
#[derive(Debug, Clone)]
pub struct AcademicSettings {
    pub endpoint: String,
    /// Endpoints tried, in order, when `endpoint` does not answer `Identify`
    pub fallback_endpoints: Vec<String>,
    /// Maximum number of matching records returned (default: 5)
    pub max_results: usize,
    pub request_timeout: Duration,
}

impl Default for AcademicSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://earsiv.batman.edu.tr/server/oai/request".to_string(),
            fallback_endpoints: vec![
                "https://earsiv.batman.edu.tr/oai/request".to_string(),
                "https://earsiv.batman.edu.tr/oai".to_string(),
            ],
            max_results: 5,
            request_timeout: Duration::from_secs(3),
        }
    }
}

/// Library website pages
#[derive(Debug, Clone)]
pub struct WebsiteSettings {
    pub base_url: String,
    /// Contact page; defaults to `{base_url}/sayfalar/17995`
    pub contact_url: Option<String>,
    /// Maximum number of announcements read from the listing (default: 5)
    pub max_announcements: usize,
    pub request_timeout: Duration,
}

impl WebsiteSettings {
    pub fn announcements_url(&self) -> String {
        format!("{}/tum-duyurular", self.base_url.trim_end_matches('/'))
    }

    pub fn staff_url(&self) -> String {
        format!("{}/idari-kadro", self.base_url.trim_end_matches('/'))
    }

    pub fn contact_url(&self) -> String {
        self.contact_url.clone().unwrap_or_else(|| {
            format!("{}/sayfalar/17995", self.base_url.trim_end_matches('/'))
        })
    }
}

impl Default for WebsiteSettings {
    fn default() -> Self {
        Self {
            base_url: "https://batman.edu.tr/Birimler/kutuphane".to_string(),
            contact_url: None,
            max_announcements: 5,
            request_timeout: Duration::from_secs(3),
        }
    }
}

/// OpenAI-compatible chat completion API
#[derive(Debug, Clone)]
pub struct GenerativeSettings {
    pub base_url: String,
    /// Direct API key (not recommended, use `api_key_env`)
    pub api_key: Option<String>,
    pub api_key_env: String,
    pub model: String,
    pub temperature: f32,
    /// Token budget for a regular answer
    pub max_tokens: u32,
    /// Token budget for an answer after a source failed
    pub error_max_tokens: u32,
    pub request_timeout: Duration,
}

impl Default for GenerativeSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            api_key: None,
            api_key_env: "OPENAI_API_KEY".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.7,
            max_tokens: 500,
            error_max_tokens: 300,
            request_timeout: Duration::from_secs(30),
        }
    }
}
