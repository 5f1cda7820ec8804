//! Core error types for objtimer-core.
//!
//! Errors here cover storage, configuration, and boundary validation.
//! Notifier failures are deliberately not represented: delivery is
//! best-effort and a failed notification never propagates into the tick
//! path (see `notify`).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for objtimer-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors raised at the objective/edit boundary.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Objective label is empty
    #[error("Objective label must not be empty")]
    EmptyLabel,

    /// Repeat interval below one second
    #[error("Repeat interval for '{label}' must be at least 1 second")]
    ZeroRepeat { label: String },

    /// Edit buffer seconds field out of range
    #[error("Seconds must be below 60, got {seconds}")]
    SecondsOutOfRange { seconds: u64 },

    /// Built-in objectives cannot be removed
    #[error("Objective '{label}' is built-in and cannot be removed")]
    BuiltinObjective { label: String },

    /// No objective at the given position
    #[error("No objective named '{label}'")]
    UnknownObjective { label: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
