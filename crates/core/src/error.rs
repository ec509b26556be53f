//! Error types for the promptroot workspace.
//!
//! This module defines a unified error enum covering the error categories
//! of the workspace: prompt lookup, I/O, configuration, and serialization.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for the promptroot workspace.
///
/// All fallible functions in the workspace return `Result<T, AppError>`.
/// We never panic; errors must be represented and propagated.
#[derive(Error, Debug)]
pub enum AppError {
    /// A prompt was requested but the computed path does not exist.
    /// The message carries the full attempted path to aid diagnosis.
    #[error("Prompt not found: {}", path.display())]
    PromptNotFound { path: PathBuf },

    /// I/O and filesystem errors, surfaced untranslated
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
