//! End-to-end tests: structural gate plus both semantic passes over raw JSON.

use serde_json::{Value, json};
use xflow_validator::validate;

fn minimal() -> Value {
    serde_json::from_str(include_str!("fixtures/minimal_flow.json")).unwrap()
}

#[test]
fn canonical_minimal_document_is_valid() {
    let result = validate::validate(&minimal());
    assert!(result.valid);
    assert!(result.errors.is_empty(), "got: {:?}", result.errors);
}

#[test]
fn branching_document_is_valid() {
    let value: Value = serde_json::from_str(include_str!("fixtures/branching_flow.json")).unwrap();
    let result = validate::validate(&value);
    assert!(result.valid);
    assert!(result.errors.is_empty(), "got: {:?}", result.errors);
}

#[test]
fn dangling_edge_reports_unknown_node_reference() {
    let mut value = minimal();
    value["edges"] = json!([[1, 3]]);
    let result = validate::validate(&value);
    assert!(!result.valid);
    let unknown: Vec<_> = result
        .errors
        .iter()
        .filter(|e| e.code == "UNKNOWN_NODE_REFERENCE")
        .collect();
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].path, "/edges/0");
}

#[test]
fn bad_number_literal_reports_type_mismatch() {
    let mut value = minimal();
    value["variables"]["local"] = json!([{ "name": "x", "vtype": "number", "value": "abc" }]);
    let result = validate::validate(&value);
    assert!(!result.valid);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, "TYPE_MISMATCH");
    assert_eq!(result.errors[0].path, "/variables/local/0");
}

#[test]
fn duplicate_input_variable_reports_once() {
    let mut value = minimal();
    value["variables"]["input"] = json!([
        { "name": "x", "vtype": "string", "value": "a" },
        { "name": "x", "vtype": "string", "value": "b" }
    ]);
    let result = validate::validate(&value);
    assert!(!result.valid);
    let dupes: Vec<_> = result
        .errors
        .iter()
        .filter(|e| e.code == "DUPLICATE_VARIABLE_NAME")
        .collect();
    assert_eq!(dupes.len(), 1);
    assert_eq!(dupes[0].path, "/variables/input/1");
}

#[test]
fn all_problems_reported_in_one_run() {
    // One referential and one type problem in the same document.
    let mut value = minimal();
    value["edges"] = json!([[1, 2], [1, 3]]);
    value["variables"]["local"] = json!([{ "name": "x", "vtype": "boolean", "value": "maybe" }]);
    let result = validate::validate(&value);
    assert!(!result.valid);
    let codes: Vec<&str> = result.errors.iter().map(|e| e.code).collect();
    assert!(codes.contains(&"UNKNOWN_NODE_REFERENCE"), "got: {:?}", codes);
    assert!(codes.contains(&"TYPE_MISMATCH"), "got: {:?}", codes);
}

#[test]
fn validation_is_idempotent() {
    let mut value = minimal();
    value["edges"] = json!([[1, 3]]);
    let first = validate::validate(&value);
    let second = validate::validate(&value);
    assert_eq!(first, second);
}

#[test]
fn non_object_input_is_rejected() {
    let result = validate::validate(&json!([1, 2, 3]));
    assert!(!result.valid);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, "INVALID_INPUT");
}

#[test]
fn invalid_json_text_is_rejected() {
    let result = validate::validate_str("{ not json");
    assert!(!result.valid);
    assert_eq!(result.errors[0].code, "INVALID_INPUT");
}

#[test]
fn validate_str_accepts_valid_text() {
    let result = validate::validate_str(include_str!("fixtures/minimal_flow.json"));
    assert!(result.valid);
    assert!(result.errors.is_empty());
}
