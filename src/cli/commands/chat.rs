//! Chat command - interactive question loop
//!
//! Reads one question per line from stdin and answers each in turn.
//! The loop ends on EOF or when the user types `exit` or `quit`.

use crate::cli::commands::ask::build_response;
use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

const EXIT_WORDS: &[&str] = &["exit", "quit"];

/// Arguments for the chat command
#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Do not print the banner and input prompt
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Execute the chat command against stdin/stdout
pub async fn execute(
    args: ChatArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let reader = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let answered = execute_with(reader, &mut stdout, services, format, !args.quiet).await?;
    tracing::info!("Chat session ended after {} question(s)", answered);
    Ok(())
}

/// Run the question loop over any line source and sink.
///
/// Returns the number of questions answered. Blank lines are skipped.
pub async fn execute_with<R, W>(
    reader: R,
    out: &mut W,
    services: &Services,
    format: OutputFormat,
    interactive: bool,
) -> Result<usize, Box<dyn std::error::Error>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let show_prompt = interactive && format == OutputFormat::Human;
    if show_prompt {
        writeln!(
            out,
            "{} {}",
            colors::label("Scheme Search"),
            colors::dim("(type 'exit' to quit)")
        )?;
    }

    let mut lines = reader.lines();
    let mut answered = 0;

    loop {
        if show_prompt {
            write!(out, "{} ", colors::success(">"))?;
            out.flush()?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if EXIT_WORDS.contains(&question.to_lowercase().as_str()) {
            break;
        }

        let response = build_response(question, services);
        match format {
            OutputFormat::Human => writeln!(out, "{}\n", response.text)?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&response)?)?,
        }
        answered += 1;
    }

    out.flush()?;
    Ok(answered)
}
