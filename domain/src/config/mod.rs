//! Configuration value objects for the domain layer
//!
//! Settings shared by the application wiring and the adapters.

mod output_format;
mod settings;

pub use output_format::OutputFormat;
pub use settings::{
    AcademicSettings, AssistantSettings, CatalogSettings, GenerativeSettings, RouterSettings,
    WebsiteSettings,
};
