//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use assistant_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show a spinner while the chain runs
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// CLI flag first, then the config file, then text
    pub fn resolve(
        cli_format: Option<OutputFormat>,
        file_format: Option<OutputFormat>,
        color: bool,
        quiet: bool,
    ) -> Self {
        Self {
            format: cli_format.or(file_format).unwrap_or_default(),
            color,
            show_progress: !quiet,
        }
    }

    /// Turn off ANSI colors process-wide when disabled
    pub fn apply_color_preference(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
