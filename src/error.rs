use thiserror::Error;

/// Custom error types for spatnav
#[derive(Debug, Error)]
pub enum NavError {
    #[error("Unknown direction: {0:?} (expected left, up, right or down)")]
    UnknownDirection(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
