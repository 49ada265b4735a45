//! Central error types for BigCursor.
//!
//! The motion pipeline itself never fails: degenerate samples are ignored and
//! scales are clamped. Errors only come from the host glue around it
//! (display enumeration, canvas allocation, configuration, runtime startup).

use thiserror::Error;

/// Main error type for BigCursor operations.
#[derive(Error, Debug)]
pub enum BigCursorError {
    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Monitor enumeration failed
    #[error("Display enumeration failed: {0}")]
    DisplayEnumeration(String),

    /// Overlay canvas could not be allocated or drawn
    #[error("Canvas error: {0}")]
    Canvas(String),

    /// Showing or hiding the system pointer failed
    #[error("System cursor error: {0}")]
    SystemCursor(String),

    /// Event loop could not be started or crashed
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// JSON deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::io::Error> for BigCursorError {
    fn from(err: std::io::Error) -> Self {
        BigCursorError::Runtime(err.to_string())
    }
}

/// Type alias for Results using BigCursorError.
pub type BigCursorResult<T> = Result<T, BigCursorError>;
