//! Query normalization.
//!
//! Turns a raw utterance into the canonical search string the matcher
//! scores against:
//!
//! 1. lowercase
//! 2. split on whitespace (optionally trimming punctuation off each word)
//! 3. drop greeting words and phrases
//! 4. fold synonyms into their canonical category
//! 5. append the best-matching region when it scores above
//!    [`REGION_THRESHOLD`] against the full lowercased query
//! 6. join with single spaces
//!
//! Greeting-only detection is a separate operation ([`Normalizer::is_greeting`])
//! used by the entry point before normalizing.

use crate::core::config::{GreetingMode, NormalizerConfig};
use crate::core::fuzz::partial_ratio;
use crate::core::lexicon::Lexicon;
use std::sync::Arc;

/// Minimum (exclusive) partial ratio for a region to be appended
pub const REGION_THRESHOLD: f64 = 75.0;

/// Query normalizer over a shared, read-only lexicon
#[derive(Debug, Clone)]
pub struct Normalizer {
    lexicon: Arc<Lexicon>,
    strip_punctuation: bool,
    greeting_mode: GreetingMode,
}

/// Best region for a query and its partial ratio
#[derive(Debug, Clone, PartialEq)]
pub struct RegionMatch {
    pub region: String,
    pub score: f64,
}

impl Normalizer {
    pub fn new(lexicon: Arc<Lexicon>, config: &NormalizerConfig) -> Self {
        Self {
            lexicon,
            strip_punctuation: config.strip_punctuation,
            greeting_mode: config.greeting_mode,
        }
    }

    /// Normalizer over the built-in lexicon with default settings
    pub fn builtin() -> Self {
        Self::new(
            Arc::new(Lexicon::builtin().clone()),
            &NormalizerConfig::default(),
        )
    }

    /// Whether the utterance should be answered with the greeting prompt.
    ///
    /// In [`GreetingMode::Exclusive`] the query must contain at least one
    /// greeting and nothing else. In [`GreetingMode::Substring`] any
    /// greeting phrase occurring anywhere in the lowercased text counts.
    pub fn is_greeting(&self, raw: &str) -> bool {
        let lowered = raw.to_lowercase();
        match self.greeting_mode {
            GreetingMode::Substring => self.lexicon.contains_greeting(&lowered),
            GreetingMode::Exclusive => {
                let tokens = self.tokenize(&lowered);
                !tokens.is_empty() && self.strip_greetings(&tokens).is_empty()
            }
        }
    }

    /// Normalize a raw query into the canonical search string
    pub fn normalize(&self, raw: &str) -> String {
        let lowered = raw.to_lowercase();
        let tokens = self.tokenize(&lowered);
        let tokens = self.strip_greetings(&tokens);
        let mut normalized = self.fold_synonyms(&tokens);

        if let Some(found) = self.detect_region(&lowered) {
            normalized.push(found.region);
        }

        let query = normalized.join(" ");
        tracing::debug!("Normalized {:?} -> {:?}", raw, query);
        query
    }

    /// Best region above [`REGION_THRESHOLD`] for an already-lowercased
    /// query. The earliest region wins ties.
    pub fn detect_region(&self, lowered: &str) -> Option<RegionMatch> {
        self.best_region(lowered)
            .filter(|found| found.score > REGION_THRESHOLD)
    }

    /// Best-scoring region regardless of threshold
    pub fn best_region(&self, lowered: &str) -> Option<RegionMatch> {
        let mut best: Option<RegionMatch> = None;
        for region in self.lexicon.regions() {
            let score = partial_ratio(lowered, region);
            if best.as_ref().map_or(true, |b| score > b.score) {
                best = Some(RegionMatch {
                    region: region.clone(),
                    score,
                });
            }
        }
        best
    }

    fn tokenize(&self, lowered: &str) -> Vec<String> {
        lowered
            .split_whitespace()
            .map(|word| {
                if self.strip_punctuation {
                    word.trim_matches(|c: char| !c.is_alphanumeric())
                } else {
                    word
                }
            })
            .filter(|word| !word.is_empty())
            .map(String::from)
            .collect()
    }

    fn strip_greetings(&self, tokens: &[String]) -> Vec<String> {
        let mut kept = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            match self.lexicon.match_greeting(&tokens[i..]) {
                Some(len) => i += len,
                None => {
                    kept.push(tokens[i].clone());
                    i += 1;
                }
            }
        }
        kept
    }

    fn fold_synonyms(&self, tokens: &[String]) -> Vec<String> {
        let mut folded = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            match self.lexicon.match_synonym(&tokens[i..]) {
                Some((canonical, len)) => {
                    folded.push(canonical.to_string());
                    i += len;
                }
                None => {
                    folded.push(tokens[i].clone());
                    i += 1;
                }
            }
        }
        folded
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::builtin()
    }
}
