// Test fixtures for integration testing

use scheme_search::SchemeRecord;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Build a record with a placeholder link
#[allow(dead_code)] // Used in integration tests
pub fn record(name: &str, state: &str, category: &str, description: &str) -> SchemeRecord {
    SchemeRecord {
        name: name.to_string(),
        state: state.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        link: format!(
            "https://example.gov.in/{}",
            name.to_lowercase().replace(' ', "-")
        ),
    }
}

/// Small catalog covering the finance, health, and employment queries
#[allow(dead_code)] // Used in integration tests
pub fn scenario_records() -> Vec<SchemeRecord> {
    vec![
        record(
            "Skill India",
            "Punjab",
            "employment",
            "Skill training and certification for youth.",
        ),
        record(
            "Kisan Credit Card",
            "Maharashtra",
            "finance",
            "Short-term credit for farmers.",
        ),
        record(
            "National Health Insurance Scheme",
            "All India",
            "Health",
            "Health insurance cover for poor families.",
        ),
    ]
}

/// Path of the sample catalog shipped in `data/`
#[allow(dead_code)] // Used in integration tests
pub fn sample_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/schemes.json")
}

/// A catalog written to a temporary JSON file
#[allow(dead_code)] // Used in integration tests
pub struct CatalogFile {
    pub file: NamedTempFile,
}

impl CatalogFile {
    /// Serialize records into a temporary catalog file
    #[allow(dead_code)] // Used in integration tests
    pub fn from_records(records: &[SchemeRecord]) -> Self {
        let json = serde_json::to_string_pretty(records).expect("Failed to serialize records");
        Self::from_json(&json)
    }

    /// Write raw JSON into a temporary catalog file
    #[allow(dead_code)] // Used in integration tests
    pub fn from_json(json: &str) -> Self {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(json.as_bytes())
            .expect("Failed to write catalog");
        Self { file }
    }

    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> PathBuf {
        self.file.path().to_path_buf()
    }
}
