// Test helper functions

use scheme_search::core::lexicon::{Lexicon, GREETINGS, SYNONYMS};
use scheme_search::{Catalog, Config, SchemeRecord, SchemeSearch, Services};
use std::sync::Arc;

/// Create test services over an in-memory catalog
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services(records: Vec<SchemeRecord>) -> Arc<Services> {
    Arc::new(Services::new(Config::default(), Catalog::new(records)))
}

/// Create an engine with the built-in lexicon and default config
#[allow(dead_code)] // Used in integration tests
pub fn create_test_engine(records: Vec<SchemeRecord>) -> SchemeSearch {
    SchemeSearch::new(Arc::new(Catalog::new(records)), &Config::default())
}

/// Create an engine whose lexicon knows no regions, so queries are
/// never augmented with a state name
#[allow(dead_code)] // Used in integration tests
pub fn engine_without_regions(records: Vec<SchemeRecord>) -> SchemeSearch {
    let lexicon = Arc::new(Lexicon::new(SYNONYMS, GREETINGS, &[]));
    SchemeSearch::with_lexicon(Arc::new(Catalog::new(records)), lexicon, &Config::default())
}
