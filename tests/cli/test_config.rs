//! Tests for the show-config CLI command

use scheme_search::cli::commands::config::{execute, ConfigArgs};
use scheme_search::cli::OutputFormat;
use scheme_search::Config;

/// Test show-config in human format
#[tokio::test]
async fn test_config_human() {
    let config = Config::default();
    let result = execute(ConfigArgs { all: true }, &config, OutputFormat::Human).await;
    assert!(result.is_ok(), "show-config should succeed: {:?}", result.err());
}

/// Test show-config in JSON format
#[tokio::test]
async fn test_config_json() {
    let config = Config::default();
    let result = execute(ConfigArgs { all: false }, &config, OutputFormat::Json).await;
    assert!(result.is_ok());
}
