//! Error types for HFR ingestion

use thiserror::Error;

/// Result type alias for HFR operations
pub type Result<T> = std::result::Result<T, HfrError>;

/// Main error type for HFR ingestion
///
/// Parse-stage variants carry the 1-based line number and the offending
/// token so failures can be diagnosed against the source file.
#[derive(Error, Debug)]
pub enum HfrError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("no `%TableStart:` marker line found in document")]
    TableMarkerNotFound,

    #[error("data row at line {line} has {actual} columns, expected {expected}")]
    RowArity {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("data row at line {line}, column {column}: token `{token}` is not a finite number")]
    NumericParse {
        line: usize,
        column: &'static str,
        token: String,
    },

    #[error("table contains no usable data rows, statistics are undefined")]
    EmptyTable,

    #[error("header `TableRows` value `{value}` is not an integer")]
    SeriesCount { value: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl HfrError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
