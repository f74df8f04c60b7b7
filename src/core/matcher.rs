//! Weighted multi-field ranking of catalog records.
//!
//! Every record is scored against the normalized query on four fields:
//!
//! | field       | scorer             | weight |
//! |-------------|--------------------|--------|
//! | name        | token-sort ratio   | 0.40   |
//! | category    | partial ratio      | 0.25   |
//! | state       | partial ratio      | 0.20   |
//! | description | partial ratio      | 0.15   |
//!
//! Records whose weighted total exceeds [`MATCH_THRESHOLD`] are kept,
//! stable-sorted by total (catalog order breaks ties), and truncated.

use crate::core::catalog::{Catalog, FoldedFields, SchemeRecord};
use crate::core::fuzz::{close_match, partial_ratio, token_sort_ratio};
use rayon::prelude::*;
use serde::Serialize;

pub const NAME_WEIGHT: f64 = 0.40;
pub const CATEGORY_WEIGHT: f64 = 0.25;
pub const STATE_WEIGHT: f64 = 0.20;
pub const DESCRIPTION_WEIGHT: f64 = 0.15;

/// Minimum (exclusive) weighted total for a record to be a candidate
pub const MATCH_THRESHOLD: f64 = 50.0;

/// Per-field similarity scores, each in `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldScores {
    pub name: f64,
    pub category: f64,
    pub state: f64,
    pub description: f64,
}

impl FieldScores {
    /// Score a query against a record's lowercased fields
    pub fn compute(query: &str, fields: &FoldedFields) -> Self {
        Self {
            name: token_sort_ratio(query, &fields.name),
            category: partial_ratio(query, &fields.category),
            state: partial_ratio(query, &fields.state),
            description: partial_ratio(query, &fields.description),
        }
    }

    /// Weighted total, in `[0, 100]`
    pub fn total(&self) -> f64 {
        NAME_WEIGHT * self.name
            + CATEGORY_WEIGHT * self.category
            + STATE_WEIGHT * self.state
            + DESCRIPTION_WEIGHT * self.description
    }
}

/// A record that passed the threshold
#[derive(Debug, Clone, Serialize)]
pub struct ScoredResult<'a> {
    /// Weighted total
    pub score: f64,

    /// Individual field scores
    pub fields: FieldScores,

    pub record: &'a SchemeRecord,
}

/// Whether a weighted total qualifies a record as a candidate
pub fn is_candidate(total: f64) -> bool {
    total > MATCH_THRESHOLD
}

/// Ranks catalog records against normalized queries
#[derive(Debug, Clone)]
pub struct Matcher {
    max_results: usize,
    parallel_threshold: usize,
}

impl Matcher {
    pub fn new(max_results: usize, parallel_threshold: usize) -> Self {
        Self {
            max_results,
            parallel_threshold,
        }
    }

    /// Score every record and return the top candidates, best first
    pub fn rank<'a>(&self, query: &str, catalog: &'a Catalog) -> Vec<ScoredResult<'a>> {
        let mut candidates = self.score_all(query, catalog);
        let total = candidates.len();

        // Stable: equal scores keep catalog order
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
        candidates.truncate(self.max_results);

        tracing::debug!(
            "Query {:?}: {} candidate(s) of {} record(s), returning {}",
            query,
            total,
            catalog.len(),
            candidates.len()
        );
        candidates
    }

    /// Candidates above the threshold, in catalog order
    fn score_all<'a>(&self, query: &str, catalog: &'a Catalog) -> Vec<ScoredResult<'a>> {
        let score = |(record, folded): (&'a SchemeRecord, &'a FoldedFields)| {
            let fields = FieldScores::compute(query, folded);
            let total = fields.total();
            is_candidate(total).then_some(ScoredResult {
                score: total,
                fields,
                record,
            })
        };

        if catalog.len() >= self.parallel_threshold {
            // Indexed parallel iterators collect in input order
            catalog
                .records()
                .par_iter()
                .zip(catalog.folded().par_iter())
                .filter_map(score)
                .collect()
        } else {
            catalog.entries().filter_map(score).collect()
        }
    }

    /// "Did you mean" lookup over record names.
    ///
    /// Compares the normalized query with every lowercased name and
    /// returns the closest record at or above `cutoff`.
    pub fn suggest<'a>(
        &self,
        query: &str,
        catalog: &'a Catalog,
        cutoff: f64,
    ) -> Option<&'a SchemeRecord> {
        let names = catalog.folded().iter().map(|f| f.name.as_str());
        close_match(query, names, cutoff).map(|index| &catalog.records()[index])
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(5, 1024)
    }
}
