//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Fixture construction failed
    #[error("failed to build fixture '{name}': {source}")]
    Fixture {
        name: &'static str,
        #[source]
        source: fieldaug_core::Error,
    },

    /// Fixture parameter out of range
    #[error("invalid fixture parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
