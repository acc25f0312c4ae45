//! Error types for til-core

use thiserror::Error;

/// Result type alias using til-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in til-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Supabase is not configured for this build
    #[error("Supabase is not configured for this build.")]
    NotConfigured,

    /// Configuration values are present but unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response payload could not be decoded
    #[error("Failed to parse JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The table API answered with a non-success status
    #[error("Table API error: {0}")]
    Api(String),

    /// Fact not found
    #[error("Fact not found: {0}")]
    NotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
