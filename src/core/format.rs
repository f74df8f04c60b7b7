//! Markdown rendering of answers.
//!
//! Each matching scheme is rendered as a fixed four-line block:
//!
//! ```text
//! **<name>** (<state>)
//! **Category**: <Title Cased Category>
//! <description>
//! [🔗 Link](<link>)
//! ```
//!
//! Blocks are separated by a blank line. [`parse_block`] reads a block
//! back into its fields.

use crate::core::catalog::SchemeRecord;
use crate::core::matcher::ScoredResult;
use once_cell::sync::Lazy;
use regex::Regex;

/// Reply to a greeting-only query
pub const GREETING_PROMPT: &str = "Hello! 😊 How can I assist you today with government schemes? Please type a scheme you're looking for.";

/// Reply when nothing matches and no close name exists
pub const NO_MATCH_MESSAGE: &str = "I couldn't find any relevant schemes for your query. 😔\n\n\
You can try searching for schemes related to:\n\
- Finance\n\
- Education\n\
- Health\n\
- Employment\n\
- Housing\n\n\
Example: 'finance scheme for farmers in Maharashtra'.";

const BLOCK_SEPARATOR: &str = "\n\n";

static HEADER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\*(?P<name>.*)\*\* \((?P<state>.*)\)$").unwrap());

static CATEGORY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\*Category\*\*: (?P<category>.*)$").unwrap());

static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[🔗 Link\]\((?P<link>.*)\)$").unwrap());

/// Title-case a string: upper-case the first letter after any non-letter,
/// lower-case every other letter.
///
/// # Examples
///
/// ```
/// use scheme_search::core::format::title_case;
///
/// assert_eq!(title_case("women and child development"), "Women And Child Development");
/// assert_eq!(title_case("HEALTH"), "Health");
/// ```
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// Render one scheme as a result block
pub fn format_record(record: &SchemeRecord) -> String {
    format!(
        "**{}** ({})\n**Category**: {}\n{}\n[🔗 Link]({})",
        record.name,
        record.state,
        title_case(&record.category),
        record.description,
        record.link
    )
}

/// Render ranked results, best first
pub fn format_results(results: &[ScoredResult<'_>]) -> String {
    results
        .iter()
        .map(|r| format_record(r.record))
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

/// "Did you mean" reply for a close record name
pub fn format_suggestion(name: &str) -> String {
    format!("I couldn't find an exact match. Did you mean **{name}**?")
}

/// Parse a rendered result block back into a record.
///
/// The category comes back title-cased. Returns `None` when the text
/// does not have the block layout.
pub fn parse_block(block: &str) -> Option<SchemeRecord> {
    let lines: Vec<&str> = block.lines().collect();
    if lines.len() < 4 {
        return None;
    }

    let header = HEADER_PATTERN.captures(lines[0])?;
    let category = CATEGORY_PATTERN.captures(lines[1])?;
    let link = LINK_PATTERN.captures(lines[lines.len() - 1])?;
    let description = lines[2..lines.len() - 1].join("\n");

    Some(SchemeRecord {
        name: header["name"].to_string(),
        state: header["state"].to_string(),
        category: category["category"].to_string(),
        description,
        link: link["link"].to_string(),
    })
}

/// Split rendered results into blocks and parse each one
pub fn parse_results(text: &str) -> Vec<SchemeRecord> {
    text.split(BLOCK_SEPARATOR).filter_map(parse_block).collect()
}
