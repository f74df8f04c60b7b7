//! Static vocabulary used by the normalizer.
//!
//! The built-in tables (synonyms, greetings, regions) are constructed
//! once per process and never mutated afterwards, so they can be shared
//! freely between threads. A custom [`Lexicon`] can be built for
//! deployments (and tests) that need a different vocabulary.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Canonical categories and the surface words that fold into them
pub const SYNONYMS: &[(&str, &[&str])] = &[
    (
        "education",
        &["school", "college", "student", "scholarship", "study", "learning"],
    ),
    (
        "health",
        &["hospital", "medical", "doctor", "insurance", "treatment", "clinic"],
    ),
    (
        "farming",
        &["agriculture", "farmer", "crop", "irrigation", "tractor", "kisan"],
    ),
    (
        "finance",
        &["money", "loan", "subsidy", "pension", "support", "fund", "bank"],
    ),
    (
        "employment",
        &["job", "work", "skill", "training", "internship"],
    ),
    (
        "housing",
        &["home", "house", "shelter", "pradhan mantri awas", "pmay"],
    ),
];

/// Greeting words and phrases
pub const GREETINGS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "namaste",
    "good morning",
    "good evening",
    "greetings",
];

/// Indian states and union territories, in lookup order
pub const REGIONS: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Delhi",
    "Jammu and Kashmir",
    "Ladakh",
    "Puducherry",
    "Chandigarh",
    "Dadra and Nagar Haveli and Daman and Diu",
    "Lakshadweep",
    "Andaman and Nicobar Islands",
];

static BUILTIN: Lazy<Lexicon> = Lazy::new(|| Lexicon::new(SYNONYMS, GREETINGS, REGIONS));

/// A word or multi-word phrase stored as lowercase tokens
type Phrase = Vec<String>;

/// Immutable vocabulary tables
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Surface phrase -> canonical category
    reverse_synonyms: HashMap<Phrase, String>,

    /// Greeting phrases
    greetings: Vec<Phrase>,

    /// Greeting phrases as plain strings (substring detection)
    greeting_text: Vec<String>,

    /// Region names, lowercased, in lookup order
    regions: Vec<String>,

    /// Longest synonym phrase, in tokens
    max_synonym_len: usize,
}

impl Lexicon {
    /// Build a lexicon from a synonym table, greeting list, and region list.
    ///
    /// The synonym table is inverted into a surface -> canonical map. When
    /// a surface phrase is listed under two categories, the first wins.
    pub fn new(synonyms: &[(&str, &[&str])], greetings: &[&str], regions: &[&str]) -> Self {
        let mut reverse_synonyms = HashMap::new();
        for (canonical, surfaces) in synonyms {
            for surface in surfaces.iter() {
                let phrase = phrase_of(surface);
                if phrase.is_empty() {
                    continue;
                }
                reverse_synonyms
                    .entry(phrase)
                    .or_insert_with(|| canonical.to_lowercase());
            }
        }

        let max_synonym_len = reverse_synonyms.keys().map(Vec::len).max().unwrap_or(0);

        let mut greetings: Vec<Phrase> = greetings
            .iter()
            .map(|g| phrase_of(g))
            .filter(|p| !p.is_empty())
            .collect();
        // Longest phrases first so "good morning" beats a bare "good"
        greetings.sort_by(|a, b| b.len().cmp(&a.len()));
        let greeting_text = greetings.iter().map(|p| p.join(" ")).collect();

        Self {
            reverse_synonyms,
            greetings,
            greeting_text,
            regions: regions.iter().map(|r| r.to_lowercase()).collect(),
            max_synonym_len,
        }
    }

    /// The process-wide default lexicon
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    /// Longest synonym phrase starting at `tokens[0]`.
    ///
    /// Returns the canonical category and the number of tokens consumed.
    pub fn match_synonym(&self, tokens: &[String]) -> Option<(&str, usize)> {
        let longest = self.max_synonym_len.min(tokens.len());
        (1..=longest).rev().find_map(|len| {
            self.reverse_synonyms
                .get(&tokens[..len])
                .map(|canonical| (canonical.as_str(), len))
        })
    }

    /// Length in tokens of the greeting phrase starting at `tokens[0]`
    pub fn match_greeting(&self, tokens: &[String]) -> Option<usize> {
        self.greetings
            .iter()
            .find(|phrase| tokens.starts_with(phrase))
            .map(Vec::len)
    }

    /// Whether any greeting phrase occurs anywhere in `text`
    pub fn contains_greeting(&self, text: &str) -> bool {
        self.greeting_text.iter().any(|g| text.contains(g.as_str()))
    }

    /// Lowercased region names
    pub fn regions(&self) -> &[String] {
        &self.regions
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

fn phrase_of(text: &str) -> Phrase {
    text.split_whitespace().map(str::to_lowercase).collect()
}
