//! Error types and error handling for the scheme search engine.
//!
//! A query that finds nothing is not an error: the engine answers it
//! with a fallback message. The errors here cover the ambient concerns
//! around the core (catalog loading, configuration, I/O).

use thiserror::Error;

/// Result type alias for scheme search operations
pub type Result<T> = std::result::Result<T, SchemeSearchError>;

/// Main error type for the scheme search engine
#[derive(Error, Debug)]
pub enum SchemeSearchError {
    #[error("Catalog not found: {0}")]
    CatalogNotFound(String),

    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("Invalid record at index {index}: {message}")]
    InvalidRecord { index: usize, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl SchemeSearchError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, SchemeSearchError::CatalogNotFound(_))
    }

    /// Check if this error describes a single bad catalog record.
    ///
    /// Record errors are skipped by the loader; everything else aborts
    /// the load.
    pub fn is_record_error(&self) -> bool {
        matches!(self, SchemeSearchError::InvalidRecord { .. })
    }
}
