//! Core domain logic (presentation-agnostic)
//!
//! This module contains all search logic that is independent of how
//! queries arrive or how answers are displayed.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **xdg**: XDG directory handling
//! - **catalog**: Scheme records, validation, JSON loading
//! - **lexicon**: Synonym, greeting, and region tables
//! - **fuzz**: String similarity primitives
//! - **normalize**: Query normalization
//! - **matcher**: Weighted multi-field ranking
//! - **format**: Markdown rendering of answers
//! - **engine**: Query entry point (`respond`)
//! - **services**: Unified service container

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod fuzz;
pub mod lexicon;
pub mod matcher;
pub mod normalize;
pub mod services;
pub mod xdg;

// Re-export key types for convenience
pub use catalog::{Catalog, SchemeRecord};
pub use config::Config;
pub use engine::{Answer, SchemeSearch};
pub use error::{Result, SchemeSearchError};
pub use services::Services;
