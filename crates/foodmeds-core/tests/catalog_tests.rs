//! Catalog loading integration tests.

use std::fs;

use foodmeds_core::{Catalog, CatalogError};

#[test]
fn test_load_bundled_catalog() {
    let catalog =
        Catalog::load(concat!(env!("CARGO_MANIFEST_DIR"), "/data/diseases.json")).unwrap();

    assert_eq!(catalog.len(), 11);

    let anemia = catalog.get("Anemia").unwrap();
    assert_eq!(anemia.symptoms[0], "fatigue");
    assert!(!anemia.vitamins.is_empty());
    assert!(!anemia.general_advice.is_empty());
}

#[test]
fn test_load_from_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("diseases.json");
    fs::write(
        &path,
        r#"[{"name": "Anemia", "symptoms": ["fatigue"], "generalAdvice": "Eat iron-rich foods."}]"#,
    )
    .unwrap();

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get("Anemia").unwrap().symptoms, vec!["fatigue"]);
}

#[test]
fn test_record_without_symptoms_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("diseases.json");
    fs::write(
        &path,
        r#"[{"name": "Mystery Condition"}, {"name": "Asthma", "symptoms": ["cough"]}]"#,
    )
    .unwrap();

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert!(catalog.get("Mystery Condition").unwrap().symptoms.is_empty());
    assert_eq!(catalog.get("Asthma").unwrap().symptoms, vec!["cough"]);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Catalog::load(dir.path().join("nope.json"));
    assert!(matches!(result, Err(CatalogError::Io(_))));
}

#[test]
fn test_malformed_file_is_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("diseases.json");
    fs::write(&path, "{ definitely not a catalog").unwrap();

    let result = Catalog::load(&path);
    assert!(matches!(result, Err(CatalogError::Json(_))));
}
