//! Unified service container for scheme search
//!
//! Provides shared access to the configuration, the catalog, and the
//! search engine.

use crate::core::catalog::{Catalog, CatalogLoad};
use crate::core::config::Config;
use crate::core::engine::SchemeSearch;
use crate::core::error::{Result, SchemeSearchError};
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Application configuration
    pub config: Arc<Config>,

    /// Validated scheme catalog
    pub catalog: Arc<Catalog>,

    /// Query engine over the catalog
    pub engine: Arc<SchemeSearch>,

    /// Catalog entries skipped during loading
    pub rejected: Arc<Vec<SchemeSearchError>>,
}

impl Services {
    /// Create services over an in-memory catalog
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self::from_load(
            config,
            CatalogLoad {
                catalog,
                rejected: Vec::new(),
            },
        )
    }

    /// Create services, loading the catalog from the configured path
    pub fn load(config: Config) -> Result<Self> {
        let load = Catalog::load(&config.catalog.path)?;
        Ok(Self::from_load(config, load))
    }

    fn from_load(config: Config, load: CatalogLoad) -> Self {
        let catalog = Arc::new(load.catalog);
        let engine = Arc::new(SchemeSearch::new(Arc::clone(&catalog), &config));

        Self {
            config: Arc::new(config),
            catalog,
            engine,
            rejected: Arc::new(load.rejected),
        }
    }
}
