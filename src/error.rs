//! Error types for envstamp operations.
//!
//! This module defines [`StampError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Fatal preconditions (`MissingEnvFile`, `NoTargetFilesFound`) stop a run
//! - `TargetWriteFailed` is reported per file; the standard pipeline keeps going
//! - Use `anyhow::Error` (via `StampError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envstamp operations.
#[derive(Debug, Error)]
pub enum StampError {
    /// The environment-definition file does not exist.
    #[error("Environment file not found: {path}")]
    MissingEnvFile { path: PathBuf },

    /// None of the configured target files exist.
    #[error("No target files found (checked {checked} paths)")]
    NoTargetFilesFound { checked: usize },

    /// Reading, rendering or writing a single target failed.
    #[error("Failed to update {path}: {message}")]
    TargetWriteFailed { path: PathBuf, message: String },

    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// External command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for envstamp operations.
pub type Result<T> = std::result::Result<T, StampError>;
