//! CLI error types.

use cart_engine_core::ConfigError;
use thiserror::Error;

/// Errors that stop a command. Cart outcomes are never errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Output serialization failed.
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}
