//! Error types for catalog generation.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::Diagnostic;

/// Result type for generation operations.
pub type GenerateResult<T> = Result<T, GenerateError>;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A static table names a shared attribute that does not exist.
    #[error("Unknown shared attribute \"{name}\" referenced by {owner}")]
    UnknownSharedAttribute { name: String, owner: String },

    /// A static table references an attribute set before it is defined.
    #[error("Attribute set \"{name}\" referenced by {owner} is not available")]
    UnknownAttributeSet { name: String, owner: String },

    /// No value set with this name exists in the catalog or the host data.
    #[error("Unknown value set \"{value_set}\" referenced by attribute \"{attribute}\"")]
    UnknownValueSet { value_set: String, attribute: String },

    #[error("Catalog failed validation with {} error(s): {}", .0.len(), summarize(.0))]
    Invalid(Vec<Diagnostic>),
}

fn summarize(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("[{}] {}", d.code, d.message))
        .collect::<Vec<_>>()
        .join("; ")
}
