//! Error types for envcheck operations.
//!
//! This module defines [`EnvCheckError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Per-requirement problems are never errors; they become report lines
//! - Use `EnvCheckError` for problems that stop a run before or after the scan

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envcheck operations.
#[derive(Debug, Error)]
pub enum EnvCheckError {
    /// Environment file not found at expected location.
    #[error("Environment file not found: {path}")]
    EnvironmentNotFound { path: PathBuf },

    /// Failed to parse the environment file.
    #[error("Failed to parse environment file at {path}: {message}")]
    EnvironmentParseError { path: PathBuf, message: String },

    /// The Python interpreter could not be run or gave unusable output.
    #[error("Cannot query Python interpreter '{python}': {message}")]
    InterpreterUnavailable { python: String, message: String },

    /// An external command could not be started.
    #[error("Failed to run {command}: {message}")]
    CommandFailed { command: String, message: String },

    /// One or more requirements failed in strict mode.
    #[error("Environment failed inspection: {}", .failures.join(", "))]
    InspectionFailed { failures: Vec<String> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for envcheck operations.
pub type Result<T> = std::result::Result<T, EnvCheckError>;
