//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::error::Diagnostic;
use crate::validate;

/// Validate an xflow document JSON string.
/// Returns a JSON object with `valid` and an `errors` array.
#[wasm_bindgen]
pub fn validate_document(json: &str) -> JsValue {
    let result = validate::validate_str(json);
    let dto = ResultDto {
        valid: result.valid,
        errors: result.errors.iter().map(DiagnosticDto::from).collect(),
    };
    serde_wasm_bindgen::to_value(&dto).unwrap_or(JsValue::NULL)
}

/// Render an xflow document JSON string as a Graphviz digraph.
/// Returns the dot source, or null when the document does not parse.
#[wasm_bindgen]
pub fn document_to_dot(json: &str) -> JsValue {
    match crate::document::parse(json) {
        Ok(doc) => JsValue::from_str(&crate::generate::dot::document_to_dot(&doc)),
        Err(_) => JsValue::NULL,
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize, serde::Deserialize)]
struct DiagnosticDto {
    code: String,
    severity: String,
    category: String,
    message: String,
    path: String,
}

impl From<&Diagnostic> for DiagnosticDto {
    fn from(d: &Diagnostic) -> Self {
        DiagnosticDto {
            code: d.code.to_string(),
            severity: d.severity.to_string(),
            category: d.category.to_string(),
            message: d.message.clone(),
            path: d.path.clone(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct ResultDto {
    valid: bool,
    errors: Vec<DiagnosticDto>,
}
