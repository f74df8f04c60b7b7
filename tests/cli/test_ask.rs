//! Tests for the ask CLI command
//!
//! Tests the ask command handler with various scenarios:
//! - Matching queries in both output formats
//! - Greeting and fallback answers
//! - The structured response used for JSON output

use crate::common::{create_test_services, scenario_records};
use scheme_search::cli::commands::ask::{build_response, execute, AskArgs};
use scheme_search::cli::OutputFormat;
use scheme_search::Answer;

/// Test a matching query in human format with score breakdown
#[tokio::test]
async fn test_ask_explain_human() {
    let services = create_test_services(scenario_records());
    let args = AskArgs {
        query: "hospital scheme".to_string(),
        explain: true,
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Ask should succeed: {:?}", result.err());
}

/// Test a matching query in JSON format
#[tokio::test]
async fn test_ask_json() {
    let services = create_test_services(scenario_records());
    let args = AskArgs {
        query: "loan for farmers in Maharashtra".to_string(),
        explain: false,
    };

    let result = execute(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "JSON ask should succeed: {:?}", result.err());
}

/// Test that an unanswerable query is still a successful command
#[tokio::test]
async fn test_ask_no_match_is_not_an_error() {
    let services = create_test_services(vec![]);
    let args = AskArgs {
        query: "zzzz".to_string(),
        explain: true,
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

/// Test the structured response behind JSON output
#[test]
fn test_ask_response_fields() {
    let services = create_test_services(scenario_records());
    let response = build_response("hi, I need a loan for farming in Maharashtra", &services);

    assert_eq!(
        response.normalized.as_deref(),
        Some("i need a finance for farming in maharashtra maharashtra")
    );
    match &response.answer {
        Answer::Matches { results } => assert_eq!(results[0].record.name, "Kisan Credit Card"),
        other => panic!("Expected matches, got {other:?}"),
    }
    assert_eq!(response.text, response.answer.render());
}
