//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one line per entry
    Text,
    /// The raw response string with `<br/>` line breaks
    Html,
    /// `{"response": ...}` JSON object
    Json,
}

impl From<OutputFormat> for assistant_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => assistant_domain::OutputFormat::Text,
            OutputFormat::Html => assistant_domain::OutputFormat::Html,
            OutputFormat::Json => assistant_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for library-assistant
#[derive(Parser, Debug)]
#[command(name = "library-assistant")]
#[command(
    author,
    version,
    about = "University library assistant - catalog, repository and website answers"
)]
#[command(long_about = r#"
Library Assistant answers a patron's question from the first source that has
something to say:

1. Library catalog (YORDAM)
2. Academic repository (OAI-PMH)
3. Library website (announcements, staff, contact)
4. A language model, as a last resort

Configuration files are loaded from (in priority order):
1. LIBRARY_ASSISTANT_* environment variables
2. --config <path>                Explicit config file
3. ./library-assistant.toml       Project-level config
4. ~/.config/library-assistant/config.toml   Global config

Example:
  library-assistant "yapay zeka kitapları"
  library-assistant -o json "kütüphane iletişim bilgileri"
  library-assistant --chat
"#)]
pub struct Cli {
    /// The question to ask (not required in chat mode)
    pub query: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
