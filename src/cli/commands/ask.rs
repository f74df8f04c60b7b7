//! Ask command - answer a single question

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::engine::Answer;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the ask command
#[derive(Args, Debug)]
pub struct AskArgs {
    /// Question in plain language, e.g. "loan for farmers in Maharashtra"
    pub query: String,

    /// Show the normalized query and per-field scores
    #[arg(long)]
    pub explain: bool,
}

/// Ask response
#[derive(Debug, Serialize)]
pub struct AskResponse<'a> {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
    pub answer: Answer<'a>,
    pub text: String,
}

/// Execute the ask command
pub async fn execute(
    args: AskArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = build_response(&args.query, services);

    match format {
        OutputFormat::Human => {
            if args.explain {
                print_explanation(&response);
            }
            println!("{}", response.text);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

/// Run one query through the engine
pub fn build_response<'a>(query: &str, services: &'a Services) -> AskResponse<'a> {
    let (normalized, answer) = services.engine.answer_normalized(query);
    let text = answer.render();

    AskResponse {
        query: query.to_string(),
        normalized,
        answer,
        text,
    }
}

fn print_explanation(response: &AskResponse<'_>) {
    if let Some(normalized) = &response.normalized {
        println!(
            "{} {}",
            colors::label("Normalized:"),
            colors::dim(normalized)
        );
    }

    if let Answer::Matches { results } = &response.answer {
        for (i, result) in results.iter().enumerate() {
            println!(
                "[{}] {} {}",
                colors::rank(&(i + 1).to_string()),
                colors::scheme(&result.record.name),
                colors::score(&format!("(score: {})", output::format_score(result.score)))
            );
            println!(
                "    {}",
                colors::dim(&output::format_field_scores(&result.fields))
            );
        }
    }
    println!();
}
