//! Structural validation against the embedded xflow document schema.

use std::sync::OnceLock;

use jsonschema::Validator;
use serde_json::Value;

use crate::error::Diagnostic;

const SCHEMA_JSON: &str = include_str!("../../schemas/xflow.schema.json");

static VALIDATOR: OnceLock<Validator> = OnceLock::new();

fn validator() -> &'static Validator {
    VALIDATOR.get_or_init(|| {
        let schema: Value =
            serde_json::from_str(SCHEMA_JSON).expect("embedded xflow schema is valid JSON");
        jsonschema::validator_for(&schema).expect("embedded xflow schema compiles")
    })
}

/// Check a raw JSON value against the closed document schema. Returns one
/// diagnostic per violation, carrying the violating instance path.
pub fn check(value: &Value) -> Vec<Diagnostic> {
    validator()
        .iter_errors(value)
        .map(|error| Diagnostic::structural(error.to_string(), error.instance_path.to_string()))
        .collect()
}
