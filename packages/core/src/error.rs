//! Error types for the orgchart core pipeline

use thiserror::Error;

/// Main error type for hierarchy operations
#[derive(Error, Debug)]
pub enum HierarchyError {
    /// No row qualifies as the hierarchy root
    #[error("No root team found in hierarchy")]
    NoRootFound,

    /// Circular reference detected while building the tree
    #[error("Circular reference detected: {0}")]
    CircularReference(String),

    /// CSV parse error
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error (reading uploaded data)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for hierarchy operations
pub type Result<T> = std::result::Result<T, HierarchyError>;
