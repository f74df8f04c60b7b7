//! Config command - show current configuration

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::matcher::{
    CATEGORY_WEIGHT, DESCRIPTION_WEIGHT, MATCH_THRESHOLD, NAME_WEIGHT, STATE_WEIGHT,
};
use crate::core::normalize::REGION_THRESHOLD;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show the fixed scoring weights and thresholds
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse<'a> {
    pub config_file: String,
    #[serde(flatten)]
    pub config: &'a Config,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoring: Option<ScoringInfo>,
}

/// Fixed scoring constants
#[derive(Debug, Serialize)]
pub struct ScoringInfo {
    pub name_weight: f64,
    pub category_weight: f64,
    pub state_weight: f64,
    pub description_weight: f64,
    pub match_threshold: f64,
    pub region_threshold: f64,
}

impl ScoringInfo {
    fn current() -> Self {
        Self {
            name_weight: NAME_WEIGHT,
            category_weight: CATEGORY_WEIGHT,
            state_weight: STATE_WEIGHT,
            description_weight: DESCRIPTION_WEIGHT,
            match_threshold: MATCH_THRESHOLD,
            region_threshold: REGION_THRESHOLD,
        }
    }
}

/// Execute the show-config command
pub async fn execute(
    args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let xdg = XdgDirs::new();
    let response = ConfigResponse {
        config_file: xdg.config_file().to_string_lossy().into_owned(),
        config,
        scoring: args.all.then(ScoringInfo::current),
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!(
                "  config_file: {}",
                colors::file_path(&response.config_file)
            );
            println!("  catalog:");
            println!(
                "    path: {}",
                colors::file_path(&config.catalog.path.display().to_string())
            );
            println!("  search:");
            println!("    max_results: {}", config.search.max_results);
            println!("    suggestion_cutoff: {}", config.search.suggestion_cutoff);
            println!("    parallel_threshold: {}", config.search.parallel_threshold);
            println!("  normalizer:");
            println!(
                "    strip_punctuation: {}",
                config.normalizer.strip_punctuation
            );
            println!("    greeting_mode: {}", config.normalizer.greeting_mode);
            if let Some(scoring) = &response.scoring {
                println!("  scoring:");
                println!("    name_weight: {}", scoring.name_weight);
                println!("    category_weight: {}", scoring.category_weight);
                println!("    state_weight: {}", scoring.state_weight);
                println!("    description_weight: {}", scoring.description_weight);
                println!("    match_threshold: {}", scoring.match_threshold);
                println!("    region_threshold: {}", scoring.region_threshold);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
