//! CLI adapter for scheme search
//!
//! Provides the command-line front end: one-shot questions, an
//! interactive chat loop, and catalog/config inspection. Only this
//! module prints; `core/` never does.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (search logic)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              | (clap adapter)   |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scheme Search - find government schemes in plain language
///
/// Ask a question such as "loan for farmers in Maharashtra" and get the
/// best-matching schemes from the catalog.
#[derive(Parser, Debug)]
#[command(name = "scheme-search")]
#[command(version)]
#[command(about = "Natural-language search over government schemes", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Catalog file (overrides configuration)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask a single question
    Ask(commands::AskArgs),

    /// Interactive question loop (one question per line)
    Chat(commands::ChatArgs),

    /// Load and validate the catalog, then summarize it
    Catalog(commands::CatalogArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  scheme-search completions bash > ~/.local/share/bash-completion/completions/scheme-search
    ///   zsh:   scheme-search completions zsh > ~/.zfunc/_scheme-search
    ///   fish:  scheme-search completions fish > ~/.config/fish/completions/scheme-search.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let xdg = XdgDirs::new();
    xdg.log_paths();

    let mut config = Config::load_with_xdg(&xdg)?;
    if let Some(path) = cli.catalog {
        config.catalog.path = path;
    }
    config.log_config();

    // show-config works without a catalog
    if let Commands::ShowConfig(args) = cli.command {
        return commands::config::execute(args, &config, cli.format).await;
    }

    let services = Arc::new(Services::load(config)?);
    for rejected in services.rejected.iter() {
        output::print_warning(&rejected.message());
    }

    match cli.command {
        Commands::Ask(args) => commands::ask::execute(args, &services, cli.format).await,
        Commands::Chat(args) => commands::chat::execute(args, &services, cli.format).await,
        Commands::Catalog(args) => commands::catalog::execute(args, &services, cli.format).await,
        Commands::ShowConfig(_) | Commands::Completions(_) => unreachable!(), // Handled above
    }
}
