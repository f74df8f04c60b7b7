//! Scheme Search CLI - ask for government schemes in plain language
//!
//! # Examples
//!
//! ```bash
//! # One-shot question
//! scheme-search ask "loan for farmers in Maharashtra" --catalog data/schemes.json
//!
//! # Interactive loop
//! scheme-search chat
//!
//! # Validate the catalog
//! scheme-search catalog --list
//!
//! # Show configuration
//! scheme-search show-config --all
//! ```

use clap::Parser;
use scheme_search::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(verbose: bool, json: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries answers, logs go to stderr
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
