//! Error types for the fixture harness

use thiserror::Error;

/// Fixture error type
#[derive(Error, Debug)]
pub enum FixtureError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Fixture field could not be interpreted
    #[error("Parse error: {0}")]
    Parse(String),

    /// Execution diverged from the expectation
    #[error("Assertion failed: {0}")]
    Assertion(String),
}

/// Fixture result type
pub type FixtureResult<T> = Result<T, FixtureError>;
