//! Core error types for habitrack-core.
//!
//! The fail-soft paths (duplicate add, unknown-id mutation, corrupt store,
//! advisory failure) never surface here; these types cover the remaining
//! hard failures, mostly I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habitrack-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Habit store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Advisory gateway errors
    #[error("Advisor error: {0}")]
    Advisor(#[from] AdvisorError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Habit-store-specific errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Data directory could not be resolved or created
    #[error("Failed to prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored collection could not be read
    #[error("Failed to read habit collection from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Collection could not be written back
    #[error("Failed to write habit collection to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Collection could not be serialized
    #[error("Failed to serialize habit collection: {0}")]
    SerializeFailed(#[from] serde_json::Error),
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

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration schema
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Advisory-gateway errors. These are internal to the advisor module:
/// the public `motivation` entry point converts every one of them into
/// a fixed fallback string.
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// No API key in the keyring or the environment
    #[error("Advisor API key not configured")]
    MissingCredentials,

    /// Transport-level failure
    #[error("Advisor request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("Advisor service error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Service answered 200 with no usable text
    #[error("Advisor returned an empty response")]
    EmptyResponse,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
