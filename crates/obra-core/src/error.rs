//! Error types for obra-core

use thiserror::Error;

/// Core error type for Obra
///
/// Store and budget operations never fail; invalid edits are rejected
/// silently. Errors only come out of loading configuration and seed data.
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Invalid configuration value
    #[error("[E002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E003: Seed file not found
    #[error("[E003] Seed file not found: {path}")]
    SeedNotFound { path: String },

    /// E004: Seed file has an extension we cannot parse
    #[error("[E004] Unsupported seed format '{extension}' for {path}. Use .yml, .yaml or .json")]
    UnsupportedSeedFormat { path: String, extension: String },

    /// E005: Duplicate project id in seed data
    #[error("[E005] Duplicate project id: {id}")]
    DuplicateProject { id: String },

    /// E006: Project record breaks a model invariant
    #[error("[E006] Invalid project '{id}': {reason}")]
    InvalidProject { id: String, reason: String },

    /// E007: Progress percentage outside 0..=100
    #[error("[E007] Progress must be between 0 and 100, got {value}")]
    ProgressOutOfRange { value: i64 },

    /// E008: IO error
    #[error("[E008] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E009: IO error with file path context
    #[error("[E009] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E010: YAML parse error
    #[error("[E010] YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
