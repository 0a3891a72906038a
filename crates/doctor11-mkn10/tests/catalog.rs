use doctor11_mkn10::{CatalogEntry, DataLoadError, DiagnosisCatalog};

const DATASET: &str = r#"{
    "I63": { "d": "Mozkový infarkt", "c": ["I63.9"] },
    "I63.9": { "d": "Mozkový infarkt NS" },
    "R10": { "d": "Bolest břicha a pánve" },
    "J18": {}
}"#;

fn catalog() -> DiagnosisCatalog {
    DiagnosisCatalog::from_json(DATASET).unwrap()
}

#[test]
fn describe_is_case_insensitive() {
    let catalog = catalog();
    assert_eq!(catalog.describe("I63"), Some("Mozkový infarkt"));
    assert_eq!(catalog.describe("i63"), catalog.describe("I63"));
    assert_eq!(catalog.describe(" r10 "), Some("Bolest břicha a pánve"));
}

#[test]
fn unknown_code_is_a_miss_not_an_error() {
    let catalog = catalog();
    assert_eq!(catalog.describe("Z99"), None);
    assert_eq!(catalog.describe(""), None);
}

#[test]
fn entry_without_description_is_known_but_undescribed() {
    let catalog = catalog();
    assert!(catalog.contains("j18"));
    assert_eq!(catalog.describe("J18"), None);
}

#[test]
fn all_codes_lists_exactly_the_dataset() {
    let catalog = catalog();
    assert_eq!(catalog.all_codes(), ["I63", "I63.9", "R10", "J18"]);
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.all_codes(), catalog.all_codes());
}

#[test]
fn codes_keep_dataset_order() {
    let catalog = DiagnosisCatalog::from_json(
        r#"{ "Z99": { "d": "Závislost na přístrojích" }, "A00": { "d": "Cholera" }, "M10": { "d": "Dna" } }"#,
    )
    .unwrap();
    assert_eq!(catalog.all_codes(), ["Z99", "A00", "M10"]);
    assert_eq!(catalog.complete("", 10), ["Z99", "A00", "M10"]);
}

#[test]
fn complete_scans_in_dataset_order() {
    let catalog = DiagnosisCatalog::from_json(
        r#"{ "I63.9": {}, "R10": {}, "I10": {}, "I63": {} }"#,
    )
    .unwrap();
    assert_eq!(catalog.complete("i", 10), ["I63.9", "I10", "I63"]);
    assert_eq!(catalog.complete("I6", 1), ["I63.9"]);
}

#[test]
fn codes_differing_only_in_case_are_rejected() {
    let err = DiagnosisCatalog::from_json(
        r#"{ "I63": { "d": "upper" }, "i63": { "d": "lower" } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, DataLoadError::DuplicateCode(ref code) if code == "I63"), "{err}");
}

#[test]
fn collecting_keeps_first_of_duplicate_codes() {
    let entry = |d: &str| CatalogEntry {
        description: Some(d.to_string()),
    };
    let catalog: DiagnosisCatalog = [
        ("I63".to_string(), entry("upper")),
        ("i63".to_string(), entry("lower")),
    ]
    .into_iter()
    .collect();

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.describe("I63"), Some("upper"));
}

#[test]
fn lowercase_dataset_keys_are_normalized() {
    let catalog = DiagnosisCatalog::from_json(r#"{ "r55": { "d": "Synkopa a kolaps" } }"#).unwrap();
    assert_eq!(catalog.all_codes(), ["R55"]);
    assert_eq!(catalog.describe("R55"), Some("Synkopa a kolaps"));
}

#[test]
fn complete_matches_prefix_in_order() {
    let catalog = catalog();
    assert_eq!(catalog.complete("i6", 10), ["I63", "I63.9"]);
    assert_eq!(catalog.complete("I63", 1), ["I63"]);
    assert_eq!(catalog.complete("X", 10), Vec::<&str>::new());
    assert_eq!(catalog.complete("", 2), ["I63", "I63.9"]);
}

#[test]
fn malformed_json_is_a_load_error() {
    for bad in ["{ not json", "[]", r#"{ "I63": "Mozkový infarkt" }"#] {
        let err = DiagnosisCatalog::from_json(bad).unwrap_err();
        assert!(matches!(err, DataLoadError::Malformed(_)), "{bad}: {err}");
    }
}

#[test]
fn empty_catalog_misses_everything() {
    let catalog = DiagnosisCatalog::empty();
    assert!(catalog.is_empty());
    assert_eq!(catalog.describe("I63"), None);
    assert!(catalog.all_codes().is_empty());
}

#[test]
fn collects_from_entries() {
    let catalog: DiagnosisCatalog = [(
        "t58".to_string(),
        CatalogEntry {
            description: Some("Toxický účinek oxidu uhelnatého".to_string()),
        },
    )]
    .into_iter()
    .collect();

    assert_eq!(catalog.describe("T58"), Some("Toxický účinek oxidu uhelnatého"));
}
