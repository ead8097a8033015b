//! Ask Our Docs CLI
//!
//! Main entry point for the askdocs command-line tool: a RAG bot that
//! answers questions against a directory of markdown documentation with
//! mandatory citations.

mod commands;

use clap::{Parser, Subcommand};
use commands::{AskCommand, ChatCommand, DemoCommand};
use askdocs_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// Ask Our Docs - cited answers from your documentation
#[derive(Parser, Debug)]
#[command(name = "askdocs")]
#[command(about = "RAG bot answering questions from local documentation", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory containing the documentation corpus (.md files)
    #[arg(short, long, global = true, env = "ASKDOCS_DOCS_DIR")]
    docs_dir: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true, env = "ASKDOCS_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    /// Model provider (currently ollama)
    #[arg(short, long, global = true, env = "ASKDOCS_PROVIDER")]
    provider: Option<String>,

    /// Generative model identifier
    #[arg(short, long, global = true, env = "ASKDOCS_MODEL")]
    model: Option<String>,

    /// Provider endpoint URL
    #[arg(short, long, global = true, env = "ASKDOCS_ENDPOINT")]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a single question
    Ask(AskCommand),

    /// Run the built-in demo questions
    Demo(DemoCommand),

    /// Interactive question loop
    Chat(ChatCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load base configuration from environment
    let config = AppConfig::load()?;

    // Apply CLI overrides
    let config = config.with_overrides(
        cli.docs_dir,
        cli.config,
        cli.provider,
        cli.model,
        cli.endpoint,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("Ask Our Docs starting up");
    tracing::debug!("Docs dir: {:?}", config.docs_dir);
    tracing::debug!("Provider: {}", config.provider);
    tracing::debug!("Model: {}", config.model);

    config.validate()?;

    let command_name = match &cli.command {
        Commands::Ask(_) => "ask",
        Commands::Demo(_) => "demo",
        Commands::Chat(_) => "chat",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers
    let result = match cli.command {
        Commands::Ask(cmd) => cmd.execute(&config).await,
        Commands::Demo(cmd) => cmd.execute(&config).await,
        Commands::Chat(cmd) => cmd.execute(&config).await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
