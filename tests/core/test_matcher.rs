//! Weighted ranking tests

use crate::common::{record, sample_catalog_path, scenario_records};
use scheme_search::core::matcher::{FieldScores, Matcher, MATCH_THRESHOLD};
use scheme_search::Catalog;

#[test]
fn test_hospital_query_ranks_health_scheme_first() {
    let catalog = Catalog::new(scenario_records());
    let results = Matcher::default().rank("health scheme", &catalog);

    assert!(!results.is_empty());
    assert_eq!(results[0].record.name, "National Health Insurance Scheme");
    assert!(results[0].score > MATCH_THRESHOLD);
    assert_eq!(results[0].fields.category, 100.0);
}

#[test]
fn test_top_five_in_catalog_order_on_ties() {
    let records: Vec<_> = (1..=8)
        .map(|i| record(&format!("Health Scheme {i}"), "", "health", "health cover"))
        .collect();
    let catalog = Catalog::new(records);

    let results = Matcher::default().rank("health", &catalog);
    let names: Vec<&str> = results.iter().map(|r| r.record.name.as_str()).collect();

    assert_eq!(
        names,
        vec![
            "Health Scheme 1",
            "Health Scheme 2",
            "Health Scheme 3",
            "Health Scheme 4",
            "Health Scheme 5"
        ]
    );
}

#[test]
fn test_results_sorted_and_above_threshold() {
    let catalog = Catalog::load(sample_catalog_path()).unwrap().catalog;
    let matcher = Matcher::default();

    for query in [
        "farming",
        "health maharashtra maharashtra",
        "finance for farmers",
        "education for girls in west bengal west bengal",
        "employment",
    ] {
        let results = matcher.rank(query, &catalog);
        assert!(results.len() <= 5, "query {query:?}");
        assert!(results.iter().all(|r| r.score > MATCH_THRESHOLD));
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }
}

#[test]
fn test_totals_stay_in_range() {
    let catalog = Catalog::load(sample_catalog_path()).unwrap().catalog;

    for query in ["", "a", "pension", "kisan credit card", "zzzz zzzz zzzz zzzz"] {
        for folded in catalog.folded() {
            let total = FieldScores::compute(query, folded).total();
            assert!((0.0..=100.0).contains(&total), "{query:?}: {total}");
        }
    }
}

#[test]
fn test_parallel_and_sequential_agree() {
    let records: Vec<_> = (0..64)
        .map(|i| {
            let category = if i % 3 == 0 { "health" } else { "finance" };
            record(&format!("Scheme {i}"), "All India", category, "support for families")
        })
        .collect();
    let catalog = Catalog::new(records);

    let sequential = Matcher::new(5, usize::MAX).rank("health scheme", &catalog);
    let parallel = Matcher::new(5, 1).rank("health scheme", &catalog);

    let names = |results: &[scheme_search::core::matcher::ScoredResult<'_>]| {
        results
            .iter()
            .map(|r| r.record.name.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(names(&sequential), names(&parallel));
}

#[test]
fn test_suggest_picks_closest_name() {
    let catalog = Catalog::new(vec![
        record("Kisan Credit Card", "", "", ""),
        record("Ayushman Bharat", "", "", ""),
        record("Skill India", "", "", ""),
    ]);
    let matcher = Matcher::default();

    let suggestion = matcher.suggest("skil india", &catalog, 0.6);
    assert_eq!(suggestion.map(|r| r.name.as_str()), Some("Skill India"));
    assert!(matcher.suggest("zzzz qqqq", &catalog, 0.6).is_none());
}
