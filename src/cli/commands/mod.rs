//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod ask;
pub mod catalog;
pub mod chat;
pub mod completions;
pub mod config;

// Re-export argument types for use in mod.rs
pub use ask::AskArgs;
pub use catalog::CatalogArgs;
pub use chat::ChatArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
