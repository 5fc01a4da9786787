//! Error types for loading and querying family trees

use thiserror::Error;

/// Result type alias for tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors that can occur while loading or querying a family tree
#[derive(Error, Debug)]
pub enum TreeError {
    /// I/O error reading a document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Document is structurally unusable
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// Person id not present in the document
    #[error("Unknown person: {0}")]
    UnknownPerson(String),

    /// Layout engine failure
    #[error("Layout error: {0}")]
    Layout(String),
}
