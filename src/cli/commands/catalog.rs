//! Catalog command - validate and summarize the loaded catalog

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Arguments for the catalog command
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// List every scheme name
    #[arg(long, short = 'l')]
    pub list: bool,
}

/// Catalog summary
#[derive(Debug, Serialize)]
pub struct CatalogSummary {
    pub path: String,
    pub schemes: usize,
    pub rejected: usize,
    pub categories: BTreeMap<String, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
}

impl CatalogSummary {
    pub fn from_services(services: &Services, list: bool) -> Self {
        let catalog = &services.catalog;
        Self {
            path: services.config.catalog.path.display().to_string(),
            schemes: catalog.len(),
            rejected: services.rejected.len(),
            categories: catalog.category_counts(),
            names: list.then(|| catalog.records().iter().map(|r| r.name.clone()).collect()),
        }
    }
}

/// Execute the catalog command
pub async fn execute(
    args: CatalogArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let summary = CatalogSummary::from_services(services, args.list);

    match format {
        OutputFormat::Human => {
            output::print_header("Catalog:");
            println!("  path: {}", colors::file_path(&summary.path));
            println!(
                "  schemes: {}",
                colors::number(&summary.schemes.to_string())
            );
            if summary.rejected > 0 {
                println!(
                    "  rejected: {}",
                    colors::warning(&summary.rejected.to_string())
                );
            }
            println!("  categories:");
            for (category, count) in &summary.categories {
                println!("    {}: {}", category, colors::number(&count.to_string()));
            }
            if let Some(names) = &summary.names {
                println!("  schemes:");
                for name in names {
                    println!("    {}", colors::scheme(name));
                }
            }
            if summary.rejected == 0 {
                output::print_success("Catalog OK");
            }
        }
        OutputFormat::Json => output::print_output(&summary, format),
    }

    Ok(())
}
