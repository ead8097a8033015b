//! Error types for the Ask Our Docs bot.
//!
//! This module defines a unified error enum covering all error categories
//! in the application: corpus loading, chunk configuration, embedding,
//! answer generation, prompt rendering, and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for the Ask Our Docs bot.
///
/// All fallible functions in the application return `Result<T, AppError>`.
/// We never panic; errors must be represented and propagated.
///
/// Propagation policy: `NoDocumentsFound` and `ChunkConfig` are startup
/// failures and abort initialization. `Embedding` and `Generation` are
/// per-question failures surfaced to the immediate caller; a long-running
/// host treats each question as an independent unit of failure.
#[derive(Error, Debug)]
pub enum AppError {
    /// No eligible documents were found in the corpus directory.
    /// Fatal at startup: with nothing to index there is nothing to answer from.
    #[error("No documents found in {0:?}. Place .md files in the documents directory before starting.")]
    NoDocumentsFound(PathBuf),

    /// Invalid chunking parameters (overlap must be smaller than the window).
    #[error("Invalid chunk configuration: overlap {overlap} must be less than window size {window}")]
    ChunkConfig { window: usize, overlap: usize },

    /// Embedding computation failed. Deterministic failures won't succeed
    /// on retry, so none is attempted.
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// The generative-model call failed (network, auth, rate limit, or a
    /// malformed response). The query fails outright rather than returning
    /// a fabricated answer.
    #[error("Generation error: {0}")]
    Generation(String),

    /// Prompt rendering errors
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
