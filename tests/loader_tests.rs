//! Tests for loading the catalog and engine configuration from files.

use pantry_chef::{
    process_detections, Catalog, CatalogError, ConfigError, Detection, DetectionPostProcessor, EngineConfig,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_catalog_from_file() {
    let file = write_temp(
        r#"[{"id":"pb","name":"PB Sandwich","cuisine":"American","description":"",
            "tags":["lunch"],"baseServings":1,
            "ingredients":[{"name":"bread","quantity":2,"unit":"slices"},
                           {"name":"peanut butter","quantity":2,"unit":"tbsp"}],
            "instructions":["Spread and close."]}]"#,
    );

    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog.len(), 1);
    let recipe = catalog.get("pb").unwrap();
    assert_eq!(recipe.base_servings, 1);
    assert!(recipe.has_tag("lunch"));
}

#[test]
fn test_load_catalog_missing_file() {
    let result = Catalog::load(std::path::Path::new("/nonexistent/recipes.json"));
    assert!(matches!(result, Err(CatalogError::Io(_))));
}

#[test]
fn test_load_invalid_catalog_file() {
    let file = write_temp(r#"[{"id":"x"}]"#);
    assert!(matches!(Catalog::load(file.path()), Err(CatalogError::Json(_))));
}

#[test]
fn test_config_file_changes_detection() {
    let file = write_temp(r#"{"detection":{"confidenceThreshold":0.8}}"#);
    let config = EngineConfig::load(file.path()).unwrap();

    let detections = [Detection::new("apple", 0.6)];
    assert_eq!(process_detections(&detections).items.len(), 1);

    let outcome = DetectionPostProcessor::with_config(config.detection).process(&detections);
    assert!(outcome.is_empty());
    assert_eq!(outcome.aggregate_confidence, 0.0);
}

#[test]
fn test_config_file_with_mixed_case_labels() {
    let file = write_temp(r#"{"detection":{"allowedLabels":["Lemon","Hot Dog"]}}"#);
    let config = EngineConfig::load(file.path()).unwrap();

    let outcome = DetectionPostProcessor::with_config(config.detection)
        .process(&[Detection::new("Lemon", 0.9), Detection::new("hot dog", 0.5)]);
    assert_eq!(outcome.items.len(), 2);
    assert_eq!(outcome.items[0].name, "lemon");
}

#[test]
fn test_invalid_config_file_is_a_config_error() {
    let file = write_temp(r#"{"detection":{"confidenceThreshold":1.5}}"#);
    let error = EngineConfig::load(file.path()).unwrap_err();
    assert!(matches!(error, ConfigError::Invalid(_)));
    assert!(!error.to_string().contains("catalog"));

    let missing = EngineConfig::load(std::path::Path::new("/nonexistent/config.json"));
    assert!(matches!(missing, Err(ConfigError::Io(_))));
}

#[test]
fn test_detections_deserialize_from_json() {
    let detections: Vec<Detection> =
        serde_json::from_str(r#"[{"label":"Carrot","confidence":0.75}]"#).unwrap();
    let outcome = process_detections(&detections);
    assert_eq!(outcome.items[0].name, "carrot");
    assert_eq!(outcome.items[0].quantity, Some(1.5));
}
