//! Document model: serde types plus graph construction.

pub mod graph;
pub mod types;

pub use graph::FlowGraph;
pub use types::*;

use thiserror::Error;

/// Failure to turn JSON text into an [`XflowDocument`].
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse xflow JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Deserialize an xflow JSON string into an `XflowDocument`.
pub fn parse(json: &str) -> Result<XflowDocument, ParseError> {
    Ok(serde_json::from_str(json)?)
}
