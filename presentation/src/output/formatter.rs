//! Output formatter trait

use assistant_domain::{OutputFormat, RouteOutcome};

/// Trait for rendering an answer to the terminal
pub trait OutputFormatter {
    /// Human-readable text
    fn format_text(&self, outcome: &RouteOutcome) -> String;

    /// The response string as a web client would receive it
    fn format_html(&self, outcome: &RouteOutcome) -> String;

    /// `{"response": ...}`
    fn format_json(&self, outcome: &RouteOutcome) -> String;

    /// Dispatch on the selected format
    fn render(&self, outcome: &RouteOutcome, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.format_text(outcome),
            OutputFormat::Html => self.format_html(outcome),
            OutputFormat::Json => self.format_json(outcome),
        }
    }
}
