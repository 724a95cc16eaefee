//! Error handling for reqopt

use thiserror::Error;

/// Main error type for reqopt operations
#[derive(Error, Debug)]
pub enum ReqoptError {
    /// A mutator was applied against an incompatible or absent prerequisite,
    /// e.g. TLS settings with no transport installed.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for reqopt operations
pub type Result<T> = std::result::Result<T, ReqoptError>;
