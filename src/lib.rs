pub mod document;
pub mod error;
pub mod generate;
pub mod validate;
pub mod wasm;
