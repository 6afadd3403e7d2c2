//! Application layer for library-assistant
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationParams;
pub use ports::{
    academic::AcademicProvider,
    catalog::{CatalogProvider, Credential, TokenSource},
    llm_gateway::{CompletionRequest, GatewayError, LlmGateway},
    progress::{NoProgress, RouteProgressNotifier, StageStatus},
    provider::ProviderError,
    site_info::SiteInfoSource,
};
pub use use_cases::generative_fallback::GenerativeFallback;
pub use use_cases::route_query::{QueryResponse, RouteFault, RouteQueryUseCase, StructuredSources};
pub use use_cases::site_info_lookup::{SiteInfoLookup, SiteInfoOutcome};
