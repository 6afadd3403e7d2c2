//! CLI entrypoint for Library Assistant
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use assistant_application::{
    GenerationParams, GenerativeFallback, RouteQueryUseCase, StructuredSources,
};
use assistant_domain::{AssistantSettings, Query};
use assistant_infrastructure::{
    ConfigLoader, LibraryWebScraper, OaiPmhClient, OpenAiGateway, StaticTokenSource,
    YordamCatalogClient,
};
use assistant_presentation::{
    ChatRepl, Cli, ConsoleFormatter, OutputConfig, OutputFormatter, ProgressReporter,
};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    info!("Starting Library Assistant");

    // Load configuration
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    file_config.validate().context("Invalid configuration")?;

    let output = OutputConfig::resolve(
        cli.output.map(Into::into),
        file_config.output.format,
        file_config.output.color,
        cli.quiet,
    );
    output.apply_color_preference();

    // === Dependency Injection ===
    let use_case = build_use_case(&file_config.to_settings())?;

    // Chat mode
    if cli.chat {
        ChatRepl::new(use_case).with_output(output).run().await?;
        return Ok(());
    }

    // Single query mode - query is required
    let query = match cli.query {
        Some(q) if !q.trim().is_empty() => Query::new(q),
        _ => bail!("A query is required. Use --chat for interactive mode."),
    };

    let outcome = if output.show_progress {
        let progress = ProgressReporter::new();
        use_case.route_with_progress(&query, &progress).await
    } else {
        use_case.route(&query).await
    };
    info!("Answered from {}", outcome.source);

    println!("{}", ConsoleFormatter.render(&outcome, output.format));

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Cannot create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

/// Create the adapters and assemble the routing use case
fn build_use_case(settings: &AssistantSettings) -> Result<RouteQueryUseCase> {
    let sources = StructuredSources {
        token_source: Arc::new(StaticTokenSource::from_settings(&settings.catalog)),
        catalog: Arc::new(
            YordamCatalogClient::new(&settings.catalog).context("Failed to create catalog client")?,
        ),
        academic: Arc::new(
            OaiPmhClient::new(&settings.academic).context("Failed to create OAI-PMH client")?,
        ),
        site_info: Arc::new(
            LibraryWebScraper::new(&settings.website).context("Failed to create website scraper")?,
        ),
    };

    let gateway = Arc::new(
        OpenAiGateway::new(&settings.generative).context("Failed to create model gateway")?,
    );
    let fallback = GenerativeFallback::new(gateway)
        .with_params(GenerationParams::from(&settings.generative));

    Ok(RouteQueryUseCase::new(sources, fallback)
        .with_provider_timeout(settings.router.provider_timeout))
}
