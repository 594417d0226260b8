//! Tests of the `pantry-chef` command line host.

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pantry-chef"))
        .args(args)
        .env_remove("PANTRY_CATALOG")
        .env_remove("PANTRY_CONFIG")
        .output()
        .expect("binary should run")
}

fn detections_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_recommend_json_with_detections_is_valid_json() {
    let file = detections_file(r#"[{"label":"Banana","confidence":0.9}]"#);
    let path = file.path().to_str().unwrap();

    let output = run(&["recommend", "--items", "milk", "--detections", path, "--json"]);
    assert!(output.status.success());

    let ranked: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ranked = ranked.as_array().unwrap();
    assert_eq!(ranked[0]["recipe"]["id"], "banana-smoothie");
    assert_eq!(ranked[0]["matchedIngredients"], serde_json::json!(["banana", "milk"]));

    let status = String::from_utf8_lossy(&output.stderr);
    assert!(status.contains("Detected 1 items"));
}

#[test]
fn test_recommend_json_without_confident_detection() {
    let file = detections_file(r#"[{"label":"person","confidence":0.99}]"#);
    let path = file.path().to_str().unwrap();

    let output = run(&["recommend", "--detections", path, "--json", "--limit", "2"]);
    assert!(output.status.success());

    let ranked: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(ranked.as_array().unwrap().len(), 2);
    assert!(String::from_utf8_lossy(&output.stderr).contains("No confident detection"));
}

#[test]
fn test_parse_prints_items_before_merging() {
    let output = run(&["parse", "2 egg, Egg, 3"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["2 egg", "egg", "3 "]);
}

#[test]
fn test_scale_rejects_unknown_recipe() {
    let output = run(&["scale", "no-such-recipe", "2"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no-such-recipe"));
}
