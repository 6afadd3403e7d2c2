//! Console output formatter for answers

use crate::output::formatter::OutputFormatter;
use assistant_application::QueryResponse;
use assistant_domain::{AnswerSource, LINE_BREAK, RouteOutcome};
use colored::Colorize;

/// Formats answers for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn `<br/>` tokens into newlines
    pub fn to_plain(response: &str) -> String {
        response.replace(LINE_BREAK, "\n").trim_end().to_string()
    }

    /// Format an answer as terminal text with a source footer
    pub fn format(outcome: &RouteOutcome) -> String {
        let body = Self::to_plain(&outcome.response);
        format!("{}\n\n{}", body, Self::source_label(outcome.source))
    }

    /// Format as JSON, the same object a web client receives
    pub fn format_json(outcome: &RouteOutcome) -> String {
        let response = QueryResponse {
            response: outcome.response.clone(),
        };
        serde_json::to_string_pretty(&response).unwrap_or_else(|_| "{}".to_string())
    }

    fn source_label(source: AnswerSource) -> String {
        let label = match source {
            AnswerSource::Catalog => "Kaynak: kütüphane kataloğu".to_string(),
            AnswerSource::Academic => "Kaynak: akademik arşiv".to_string(),
            AnswerSource::SiteInfo(kind) => format!("Kaynak: kütüphane web sitesi ({})", kind),
            AnswerSource::Generative => "Kaynak: yapay zekâ asistanı".to_string(),
            AnswerSource::GenerativeError => "Kaynak: yapay zekâ asistanı (hata modu)".to_string(),
        };
        match source {
            AnswerSource::GenerativeError => label.yellow().to_string(),
            _ => label.dimmed().to_string(),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_text(&self, outcome: &RouteOutcome) -> String {
        ConsoleFormatter::format(outcome)
    }

    fn format_html(&self, outcome: &RouteOutcome) -> String {
        outcome.response.clone()
    }

    fn format_json(&self, outcome: &RouteOutcome) -> String {
        ConsoleFormatter::format_json(outcome)
    }
}
