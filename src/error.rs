//! Error types for ragcheck operations.
//!
//! This module defines [`RagCheckError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Missing `.env` files, unset keys and missing packages are *findings*,
//!   recorded in a [`CheckReport`](crate::check::CheckReport), not errors
//! - `RagCheckError` covers faults while gathering those findings
//! - Use `anyhow::Error` (via `RagCheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ragcheck operations.
#[derive(Debug, Error)]
pub enum RagCheckError {
    /// The project directory to check does not exist.
    #[error("Project directory not found: {path}")]
    ProjectNotFound { path: PathBuf },

    /// No Python interpreter could be located.
    #[error("No Python interpreter found (tried {tried})")]
    InterpreterNotFound { tried: String },

    /// The interpreter was found but could not be run or gave unusable output.
    #[error("Interpreter '{interpreter}' failed: {message}")]
    InterpreterFailed {
        interpreter: PathBuf,
        message: String,
    },

    /// The env file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    EnvFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Report serialization failed.
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for ragcheck operations.
pub type Result<T> = std::result::Result<T, RagCheckError>;
