use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for mvn-invoke operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A configured path is unusable, or a required value is blank.
    #[error("{0}")]
    Configuration(String),

    /// An explicitly requested configuration file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    /// Configuration file content could not be parsed.
    #[error("Malformed config {}: {details}", path.display())]
    ConfigParse { path: PathBuf, details: String },

    /// The Maven process could not be started or awaited.
    #[error("Maven invocation failed ({command}): {details}")]
    Invocation { command: String, details: String },

    /// Artifact coordinates are incomplete.
    #[error("Invalid artifact coordinates: {0}")]
    InvalidCoordinates(String),

    /// Artifact file to install or deploy is missing.
    #[error("Artifact file not found: {}", .0.display())]
    ArtifactNotFound(PathBuf),

    /// Result could not be rendered as JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Remote repository URL does not parse.
    #[error("Invalid repository URL '{url}': {details}")]
    InvalidUrl { url: String, details: String },
}

impl AppError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        AppError::Configuration(message.into())
    }
}
