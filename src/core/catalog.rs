//! Scheme catalog: record type, validation, and JSON loading.
//!
//! The catalog file is a JSON array of objects carrying five text
//! fields (`name`, `state`, `category`, `description`, `link`). Entries
//! are validated one at a time: a bad entry is reported and skipped,
//! the rest of the catalog still loads.

use crate::core::error::{Result, SchemeSearchError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A single government scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeRecord {
    /// Scheme name
    pub name: String,

    /// State or territory the scheme applies to
    pub state: String,

    /// Category (finance, education, health, ...)
    pub category: String,

    /// Short description
    pub description: String,

    /// URL with details
    pub link: String,
}

/// Lowercased copies of the scored fields
#[derive(Debug, Clone)]
pub struct FoldedFields {
    pub name: String,
    pub state: String,
    pub category: String,
    pub description: String,
}

impl From<&SchemeRecord> for FoldedFields {
    fn from(record: &SchemeRecord) -> Self {
        Self {
            name: record.name.to_lowercase(),
            state: record.state.to_lowercase(),
            category: record.category.to_lowercase(),
            description: record.description.to_lowercase(),
        }
    }
}

/// Immutable, ordered collection of scheme records
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<SchemeRecord>,
    folded: Vec<FoldedFields>,
}

/// Outcome of loading a catalog: the valid records and what was skipped
#[derive(Debug)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    pub rejected: Vec<SchemeSearchError>,
}

impl Catalog {
    /// Build a catalog from already-validated records
    pub fn new(records: Vec<SchemeRecord>) -> Self {
        let folded = records.iter().map(FoldedFields::from).collect();
        Self { records, folded }
    }

    /// Parse a JSON catalog, skipping invalid entries
    pub fn from_json_str(json: &str) -> Result<CatalogLoad> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let entries = match value {
            serde_json::Value::Array(entries) => entries,
            other => {
                return Err(SchemeSearchError::CatalogError(format!(
                    "Expected a JSON array of schemes, found {}",
                    json_kind(&other)
                )))
            }
        };

        let mut records = Vec::with_capacity(entries.len());
        let mut rejected = Vec::new();

        for (index, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<SchemeRecord>(entry) {
                Ok(record) => records.push(record),
                Err(e) => {
                    let err = SchemeSearchError::InvalidRecord {
                        index,
                        message: e.to_string(),
                    };
                    tracing::warn!("Skipping catalog entry: {}", err);
                    rejected.push(err);
                }
            }
        }

        Ok(CatalogLoad {
            catalog: Self::new(records),
            rejected,
        })
    }

    /// Load a JSON catalog file, skipping invalid entries
    pub fn load(path: impl AsRef<Path>) -> Result<CatalogLoad> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SchemeSearchError::CatalogNotFound(
                path.display().to_string(),
            ));
        }

        let contents = fs::read_to_string(path)?;
        let load = Self::from_json_str(&contents)?;

        tracing::info!(
            "Loaded {} scheme(s) from {:?} ({} rejected)",
            load.catalog.len(),
            path,
            load.rejected.len()
        );

        Ok(load)
    }

    /// All records, in catalog order
    pub fn records(&self) -> &[SchemeRecord] {
        &self.records
    }

    /// Lowercased scored fields, parallel to [`Catalog::records`]
    pub fn folded(&self) -> &[FoldedFields] {
        &self.folded
    }

    /// Record and its lowercased fields, in catalog order
    pub fn entries(&self) -> impl Iterator<Item = (&SchemeRecord, &FoldedFields)> {
        self.records.iter().zip(self.folded.iter())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records per lowercased category, sorted by category
    pub fn category_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for folded in &self.folded {
            *counts.entry(folded.category.clone()).or_insert(0) += 1;
        }
        counts
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
