//! Error types for the CLI.

use prng_core::DiagnosticError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Diagnostic run failed
    #[error("Diagnostic error: {0}")]
    Diagnostic(#[from] DiagnosticError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
