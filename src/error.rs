//! Configuration errors
//!
//! The simulation itself is total; only loading settings can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid difficulty curve: {0}")]
    Invalid(String),
}
