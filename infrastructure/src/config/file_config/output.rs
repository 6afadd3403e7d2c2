//! `[output]` section: how answers are printed by the CLI.
//!
//! `format` is only a default; `--output` on the command line wins.

use assistant_domain::OutputFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// `text`, `html` or `json`; unset falls through to text
    pub format: Option<OutputFormat>,
    /// ANSI colors in text output and the spinner
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::FileConfig;
    use super::*;

    #[test]
    fn test_html_without_color() {
        let config: FileConfig = toml::from_str(
            r#"
[output]
format = "html"
color = false
"#,
        )
        .unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Html));
        assert!(!config.output.color);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result: Result<FileConfig, _> = toml::from_str("[output]\nformat = \"pdf\"\n");
        assert!(result.is_err());
    }
}
