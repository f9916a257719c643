//! Output generation from flow documents.

pub mod dot;
