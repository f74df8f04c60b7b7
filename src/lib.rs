//! Scheme Search - natural-language lookup of government schemes
//!
//! Answers free-text questions ("hi, I need a loan for farming in
//! Maharashtra") against a static catalog of assistance schemes and
//! returns the best matches as markdown.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Search logic (presentation-agnostic)
//!   - normalize (greetings, synonyms, region detection)
//!   - fuzz (token-sort, partial, and close-match similarity)
//!   - matcher (weighted four-field ranking)
//!   - format, engine (rendering and the `respond` entry point)
//!   - catalog, config, error, xdg, services
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! # Example
//!
//! ```
//! use scheme_search::{Catalog, Config, SchemeRecord, SchemeSearch};
//! use std::sync::Arc;
//!
//! let catalog = Catalog::new(vec![SchemeRecord {
//!     name: "Kisan Credit Card".to_string(),
//!     state: "Maharashtra".to_string(),
//!     category: "finance".to_string(),
//!     description: "Short-term credit for farmers.".to_string(),
//!     link: "https://example.gov.in/kcc".to_string(),
//! }]);
//!
//! let engine = SchemeSearch::new(Arc::new(catalog), &Config::default());
//! let answer = engine.respond("loan for farmers in Maharashtra");
//! assert!(answer.starts_with("**Kisan Credit Card** (Maharashtra)"));
//! ```

// Core domain logic (presentation-agnostic)
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::catalog::{Catalog, SchemeRecord};
pub use crate::core::config::Config;
pub use crate::core::engine::{Answer, SchemeSearch};
pub use crate::core::error::{Result, SchemeSearchError};
pub use crate::core::services::Services;
