//! Catalog loading tests

use crate::common::{sample_catalog_path, scenario_records, CatalogFile};
use scheme_search::{Catalog, SchemeSearchError};

#[test]
fn test_sample_catalog_loads_cleanly() {
    let load = Catalog::load(sample_catalog_path()).unwrap();

    assert_eq!(load.catalog.len(), 12);
    assert!(load.rejected.is_empty());
    assert_eq!(load.catalog.records()[0].name, "Kisan Credit Card");
}

#[test]
fn test_catalog_round_trips_through_file() {
    let records = scenario_records();
    let file = CatalogFile::from_records(&records);

    let load = Catalog::load(file.path()).unwrap();
    assert_eq!(load.catalog.records(), records.as_slice());
}

#[test]
fn test_bad_entries_are_skipped() {
    let file = CatalogFile::from_json(
        r#"[
            {"name": "Skill India", "state": "All India", "category": "employment",
             "description": "Training.", "link": "https://example.gov.in/skill"},
            {"name": "Missing Link", "state": "Goa", "category": "health", "description": ""},
            {"name": 42, "state": "Goa", "category": "health", "description": "", "link": ""},
            "not an object",
            {"name": "Atal Pension Yojana", "state": "All India", "category": "finance",
             "description": "Pension.", "link": "https://example.gov.in/apy"}
        ]"#,
    );

    let load = Catalog::load(file.path()).unwrap();
    let names: Vec<&str> = load
        .catalog
        .records()
        .iter()
        .map(|r| r.name.as_str())
        .collect();

    assert_eq!(names, vec!["Skill India", "Atal Pension Yojana"]);
    assert_eq!(load.rejected.len(), 3);
    assert!(load.rejected.iter().all(|e| e.is_record_error()));
    assert!(matches!(
        load.rejected[0],
        SchemeSearchError::InvalidRecord { index: 1, .. }
    ));
}

#[test]
fn test_top_level_must_be_array() {
    let file = CatalogFile::from_json(r#"{"name": "Skill India"}"#);
    let result = Catalog::load(file.path());
    assert!(matches!(result, Err(SchemeSearchError::CatalogError(_))));
}

#[test]
fn test_missing_file() {
    let result = Catalog::load("/definitely/not/here/schemes.json");
    assert!(matches!(result, Err(ref e) if e.is_not_found()));
}

#[test]
fn test_category_counts_are_lowercased() {
    let catalog = Catalog::new(scenario_records());
    let counts = catalog.category_counts();

    assert_eq!(counts.get("health"), Some(&1));
    assert_eq!(counts.get("finance"), Some(&1));
    assert_eq!(counts.get("Health"), None);
}
