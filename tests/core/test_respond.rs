//! End-to-end answer tests

use crate::common::{create_test_engine, engine_without_regions, record, scenario_records};
use scheme_search::core::config::GreetingMode;
use scheme_search::core::format::{
    format_record, parse_block, parse_results, title_case, GREETING_PROMPT, NO_MATCH_MESSAGE,
};
use scheme_search::{Answer, Catalog, Config, SchemeSearch};
use std::sync::Arc;

#[test]
fn test_greetings_get_the_prompt() {
    let engine = create_test_engine(scenario_records());

    for greeting in ["Hello!", "hi", "Good morning", "Namaste, hey"] {
        assert_eq!(engine.respond(greeting), GREETING_PROMPT, "{greeting:?}");
    }
}

#[test]
fn test_loan_query_ranks_finance_record_first() {
    let engine = create_test_engine(scenario_records());
    let text = engine.respond("hi, I need a loan for farming in Maharashtra");

    assert!(
        text.starts_with("**Kisan Credit Card** (Maharashtra)\n**Category**: Finance\n"),
        "unexpected answer: {text}"
    );
    let records = parse_results(&text);
    assert_eq!(records[0].link, "https://example.gov.in/kisan-credit-card");
}

#[test]
fn test_hospital_query() {
    let engine = create_test_engine(scenario_records());

    match engine.answer("hospital scheme") {
        Answer::Matches { results } => {
            assert_eq!(results[0].record.name, "National Health Insurance Scheme");
            assert!(results[0].score > 50.0);
        }
        other => panic!("Expected matches, got {other:?}"),
    }
}

#[test]
fn test_empty_catalog_always_falls_back() {
    let engine = create_test_engine(vec![]);

    for query in ["loan for farmers", "hospital", "Ayushman Bharat", ""] {
        assert_eq!(engine.respond(query), NO_MATCH_MESSAGE);
    }
    assert_eq!(engine.respond("hello"), GREETING_PROMPT);
}

#[test]
fn test_near_name_gets_suggestion() {
    let engine = engine_without_regions(vec![
        record("Kisan Credit Card", "", "", ""),
        record("Ayushman Bharat", "", "", ""),
        record("Skill India", "", "", ""),
    ]);

    assert_eq!(
        engine.respond("Skil India"),
        "I couldn't find an exact match. Did you mean **Skill India**?"
    );
    assert_eq!(
        engine.respond("ayushman bharath"),
        "I couldn't find an exact match. Did you mean **Ayushman Bharat**?"
    );
    assert_eq!(engine.respond("zzzz qqqq"), NO_MATCH_MESSAGE);
}

#[test]
fn test_suggestion_uses_normalized_query() {
    let engine = create_test_engine(vec![
        record("Kisan Credit Card", "", "", ""),
        record("Ayushman Bharat", "", "", ""),
        record("Skill India", "", "", ""),
    ]);

    assert_eq!(
        engine.respond("Skil India"),
        "I couldn't find an exact match. Did you mean **Skill India**?"
    );

    // "kisan" folds to "farming" before the name comparison
    let (normalized, answer) = engine.answer_normalized("Kisan Credit Crad");
    assert_eq!(normalized.as_deref(), Some("farming credit crad"));
    assert!(matches!(answer, Answer::NoMatch), "got {answer:?}");
    assert_eq!(engine.respond("Kisan Credit Crad"), NO_MATCH_MESSAGE);
}

#[test]
fn test_formatted_block_parses_back() {
    for original in scenario_records() {
        let block = format_record(&original);
        let parsed = parse_block(&block).unwrap();

        assert_eq!(parsed.name, original.name);
        assert_eq!(parsed.state, original.state);
        assert_eq!(parsed.category, title_case(&original.category));
        assert_eq!(parsed.description, original.description);
        assert_eq!(parsed.link, original.link);
    }
}

#[test]
fn test_substring_greeting_mode_answers_prompt_for_mixed_query() {
    let mut config = Config::default();
    config.normalizer.greeting_mode = GreetingMode::Substring;
    let engine = SchemeSearch::new(Arc::new(Catalog::new(scenario_records())), &config);

    assert_eq!(
        engine.respond("hi, I need a loan for farming in Maharashtra"),
        GREETING_PROMPT
    );
}

#[test]
fn test_max_results_from_config() {
    let records: Vec<_> = (1..=4)
        .map(|i| record(&format!("Health Scheme {i}"), "", "health", "health cover"))
        .collect();
    let mut config = Config::default();
    config.search.max_results = 2;
    let engine = SchemeSearch::new(Arc::new(Catalog::new(records)), &config);

    let text = engine.respond("health");
    assert_eq!(parse_results(&text).len(), 2);
}

#[test]
fn test_engine_shared_across_threads() {
    let engine = Arc::new(create_test_engine(scenario_records()));
    let expected = engine.respond("hospital scheme");

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let engine = Arc::clone(&engine);
            let expected = &expected;
            scope.spawn(move || {
                assert_eq!(&engine.respond("hospital scheme"), expected);
            });
        }
    });
}
