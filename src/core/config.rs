//! Configuration management for the scheme search engine.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.
//! Scoring weights and thresholds are fixed constants in
//! [`crate::core::matcher`] and are not part of the configuration.

use crate::core::error::{Result, SchemeSearchError};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub normalizer: NormalizerConfig,
}

/// Catalog configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Path to the JSON catalog file
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Maximum number of schemes returned per query
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Minimum normalized Levenshtein similarity for "did you mean"
    #[serde(default = "default_suggestion_cutoff")]
    pub suggestion_cutoff: f64,

    /// Catalog size from which records are scored in parallel
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

/// Query normalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NormalizerConfig {
    /// Trim punctuation from the edges of each query word
    #[serde(default = "default_strip_punctuation")]
    pub strip_punctuation: bool,

    /// How greeting-only queries are detected
    #[serde(default)]
    pub greeting_mode: GreetingMode,
}

/// Greeting detection policy
///
/// `Exclusive` is the default: mixed queries such as "hi, farming scheme"
/// are searched. `Substring` is the literal rule, where any greeting
/// phrase anywhere in the text short-circuits to the greeting prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GreetingMode {
    /// The query is nothing but greeting words and phrases
    #[default]
    Exclusive,
    /// Any greeting phrase occurs anywhere in the query text
    Substring,
}

impl fmt::Display for GreetingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GreetingMode::Exclusive => write!(f, "exclusive"),
            GreetingMode::Substring => write!(f, "substring"),
        }
    }
}

impl FromStr for GreetingMode {
    type Err = SchemeSearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "exclusive" => Ok(GreetingMode::Exclusive),
            "substring" => Ok(GreetingMode::Substring),
            other => Err(SchemeSearchError::ConfigError(format!(
                "Unknown greeting mode '{other}' (expected 'exclusive' or 'substring')"
            ))),
        }
    }
}

// Default value functions
fn default_catalog_path() -> PathBuf {
    PathBuf::from("./schemes.json")
}

fn default_max_results() -> usize {
    5
}

fn default_suggestion_cutoff() -> f64 {
    0.6
}

fn default_parallel_threshold() -> usize {
    1024
}

fn default_strip_punctuation() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            suggestion_cutoff: default_suggestion_cutoff(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            strip_punctuation: default_strip_punctuation(),
            greeting_mode: GreetingMode::default(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            SchemeSearchError::ConfigError(format!("Failed to read config file: {e}"))
        })?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// This method uses XDG Base Directory specification for file locations.
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. SCHEME_SEARCH_CONFIG env var
    /// 2. XDG config file (~/.config/scheme-search/config.toml)
    /// 3. ./scheme-search.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("SCHEME_SEARCH_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("scheme-search.toml").exists() {
                Self::from_file("scheme-search.toml")?
            } else {
                Self::default()
            }
        };

        // Catalog lives in the XDG data directory unless set explicitly
        if config.catalog.path == default_catalog_path() {
            config.catalog.path = xdg.catalog_file();
        }

        config.merge_env()?;
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    ///
    /// Unparseable numeric values are ignored; an unknown greeting mode
    /// is an error.
    pub fn merge_env(&mut self) -> Result<()> {
        if let Ok(path) = env::var("SCHEME_SEARCH_CATALOG") {
            self.catalog.path = PathBuf::from(path);
        }

        if let Ok(max_results) = env::var("SCHEME_SEARCH_MAX_RESULTS") {
            if let Ok(n) = max_results.parse() {
                self.search.max_results = n;
            }
        }
        if let Ok(cutoff) = env::var("SCHEME_SEARCH_SUGGESTION_CUTOFF") {
            if let Ok(c) = cutoff.parse() {
                self.search.suggestion_cutoff = c;
            }
        }
        if let Ok(threshold) = env::var("SCHEME_SEARCH_PARALLEL_THRESHOLD") {
            if let Ok(t) = threshold.parse() {
                self.search.parallel_threshold = t;
            }
        }

        if let Ok(strip) = env::var("SCHEME_SEARCH_STRIP_PUNCTUATION") {
            if let Ok(s) = strip.parse() {
                self.normalizer.strip_punctuation = s;
            }
        }
        if let Ok(mode) = env::var("SCHEME_SEARCH_GREETING_MODE") {
            self.normalizer.greeting_mode = mode.parse()?;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.search.max_results == 0 {
            return Err(SchemeSearchError::ConfigError(
                "Max results must be non-zero".to_string(),
            ));
        }

        let cutoff = self.search.suggestion_cutoff;
        if !(cutoff > 0.0 && cutoff <= 1.0) {
            return Err(SchemeSearchError::ConfigError(format!(
                "Suggestion cutoff must be in (0, 1], got {cutoff}"
            )));
        }

        if self.search.parallel_threshold == 0 {
            return Err(SchemeSearchError::ConfigError(
                "Parallel threshold must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Catalog: {:?}", self.catalog.path);
        tracing::info!("  Max results: {}", self.search.max_results);
        tracing::info!("  Suggestion cutoff: {}", self.search.suggestion_cutoff);
        tracing::info!("  Parallel threshold: {}", self.search.parallel_threshold);
        tracing::info!(
            "  Strip punctuation: {}",
            self.normalizer.strip_punctuation
        );
        tracing::info!("  Greeting mode: {}", self.normalizer.greeting_mode);
    }
}
