//! Query entry point.
//!
//! [`SchemeSearch::respond`] is the single operation a presentation layer
//! needs: greeting check, normalization, ranking, then either formatted
//! results or a two-tier fallback (close name, then generic guidance).

use crate::core::catalog::{Catalog, SchemeRecord};
use crate::core::config::Config;
use crate::core::format::{
    format_results, format_suggestion, GREETING_PROMPT, NO_MATCH_MESSAGE,
};
use crate::core::lexicon::Lexicon;
use crate::core::matcher::{Matcher, ScoredResult};
use crate::core::normalize::Normalizer;
use serde::Serialize;
use std::sync::Arc;

/// Structured outcome of a query
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Answer<'a> {
    /// The query was only a greeting
    Greeting,

    /// Ranked matches, best first
    Matches { results: Vec<ScoredResult<'a>> },

    /// Nothing matched, but a record name is close to the query
    Suggestion { record: &'a SchemeRecord },

    /// Nothing matched
    NoMatch,
}

impl Answer<'_> {
    /// Render the answer as the markdown text returned to users
    pub fn render(&self) -> String {
        match self {
            Answer::Greeting => GREETING_PROMPT.to_string(),
            Answer::Matches { results } => format_results(results),
            Answer::Suggestion { record } => format_suggestion(&record.name),
            Answer::NoMatch => NO_MATCH_MESSAGE.to_string(),
        }
    }
}

/// Scheme search engine over an immutable catalog.
///
/// Cheap to share: all state is read-only, so one instance can serve
/// concurrent queries from many threads.
#[derive(Debug, Clone)]
pub struct SchemeSearch {
    catalog: Arc<Catalog>,
    normalizer: Normalizer,
    matcher: Matcher,
    suggestion_cutoff: f64,
}

impl SchemeSearch {
    /// Create an engine with the built-in lexicon
    pub fn new(catalog: Arc<Catalog>, config: &Config) -> Self {
        Self::with_lexicon(catalog, Arc::new(Lexicon::builtin().clone()), config)
    }

    /// Create an engine with a custom lexicon
    pub fn with_lexicon(catalog: Arc<Catalog>, lexicon: Arc<Lexicon>, config: &Config) -> Self {
        Self {
            catalog,
            normalizer: Normalizer::new(lexicon, &config.normalizer),
            matcher: Matcher::new(config.search.max_results, config.search.parallel_threshold),
            suggestion_cutoff: config.search.suggestion_cutoff,
        }
    }

    /// Answer a raw query with markdown text
    pub fn respond(&self, raw_query: &str) -> String {
        self.answer(raw_query).render()
    }

    /// Answer a raw query with a structured [`Answer`]
    pub fn answer(&self, raw_query: &str) -> Answer<'_> {
        self.answer_normalized(raw_query).1
    }

    /// Answer a raw query, also returning the normalized query it was
    /// ranked with. Greeting-only input is never normalized and yields
    /// `None`.
    pub fn answer_normalized(&self, raw_query: &str) -> (Option<String>, Answer<'_>) {
        if self.normalizer.is_greeting(raw_query) {
            tracing::debug!("Greeting-only query {:?}", raw_query);
            return (None, Answer::Greeting);
        }

        let query = self.normalizer.normalize(raw_query);
        let answer = self.rank_or_fallback(&query);
        (Some(query), answer)
    }

    fn rank_or_fallback(&self, query: &str) -> Answer<'_> {
        let results = self.matcher.rank(query, &self.catalog);
        if !results.is_empty() {
            return Answer::Matches { results };
        }

        match self
            .matcher
            .suggest(query, &self.catalog, self.suggestion_cutoff)
        {
            Some(record) => {
                tracing::debug!("No match for {:?}, suggesting {:?}", query, record.name);
                Answer::Suggestion { record }
            }
            None => {
                tracing::debug!("No match for {:?}", query);
                Answer::NoMatch
            }
        }
    }
}
