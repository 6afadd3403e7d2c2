//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::config::OutputConfig;
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::OutputFormatter;
use crate::progress::reporter::ProgressReporter;
use assistant_application::RouteQueryUseCase;
use assistant_domain::Query;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// What a slash command asks the loop to do
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Quit,
    Help,
    Unknown,
}

impl Command {
    fn parse(line: &str) -> Self {
        match line {
            "/quit" | "/exit" | "/q" => Command::Quit,
            "/help" | "/h" | "/?" => Command::Help,
            _ => Command::Unknown,
        }
    }
}

/// Interactive chat REPL
pub struct ChatRepl {
    use_case: RouteQueryUseCase,
    output: OutputConfig,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(use_case: RouteQueryUseCase) -> Self {
        Self {
            use_case,
            output: OutputConfig::default(),
        }
    }

    /// Set output format and progress display
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path =
            dirs::data_dir().map(|p| p.join("library-assistant").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        match Command::parse(line) {
                            Command::Quit => {
                                println!("Güle güle!");
                                break;
                            }
                            Command::Help => Self::print_help(),
                            Command::Unknown => {
                                println!("Bilinmeyen komut: {}", line);
                                println!("Komutlar için /help yazın");
                            }
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);
                    self.process_query(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Güle güle!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Kütüphane Asistanı - Sohbet          │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Kitap, tez, duyuru, personel veya iletişim bilgisi sorabilirsiniz.");
        Self::print_help();
    }

    fn print_help() {
        println!();
        println!("Komutlar:");
        println!("  /help, /h, /?    - Bu yardımı göster");
        println!("  /quit, /exit, /q - Çıkış");
        println!();
    }

    async fn process_query(&self, line: &str) {
        println!();
        let query = Query::new(line);

        let outcome = if self.output.show_progress {
            let progress = ProgressReporter::new();
            self.use_case.route_with_progress(&query, &progress).await
        } else {
            self.use_case.route(&query).await
        };

        println!("{}", ConsoleFormatter.render(&outcome, self.output.format));
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("/quit"), Command::Quit);
        assert_eq!(Command::parse("/q"), Command::Quit);
        assert_eq!(Command::parse("/help"), Command::Help);
        assert_eq!(Command::parse("/models"), Command::Unknown);
    }
}
