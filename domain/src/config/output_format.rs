//! Output format value object

use serde::{Deserialize, Serialize};

/// How an answer is written to the terminal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Line-break tokens turned into newlines (default)
    #[default]
    Text,
    /// The response string exactly as a web page would receive it
    Html,
    /// `{"response": "..."}`
    Json,
}
