//! Error handling for folio.
//!
//! This module provides:
//! - [`FolioError`]: The main error enum for all folio operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`Result`]: Result alias used throughout the crate

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for folio operations.
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("Remote query failed: {0}")]
    RemoteQuery(String),

    #[error("Skill not found: {0}")]
    SkillNotFound(i64),

    #[error("Project not found: {0}")]
    ProjectNotFound(i64),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// Machine-readable error codes, stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    DatabaseError,
    StorageError,
    IoError,
    SerializationError,
    HttpError,
    ConfigInvalid,
    ConfigMissingRequired,
    RemoteQueryFailed,
    SkillNotFound,
    ProjectNotFound,
    ValidationFailed,
    RuntimeError,
}

impl ErrorCode {
    /// Numeric code for scripts that prefer integers over names.
    #[must_use]
    pub const fn numeric(self) -> u16 {
        match self {
            Self::DatabaseError => 201,
            Self::IoError => 202,
            Self::SerializationError => 203,
            Self::StorageError => 204,
            Self::ConfigInvalid => 301,
            Self::ConfigMissingRequired => 302,
            Self::HttpError => 501,
            Self::RemoteQueryFailed => 502,
            Self::SkillNotFound => 101,
            Self::ProjectNotFound => 102,
            Self::ValidationFailed => 103,
            Self::RuntimeError => 901,
        }
    }

    /// Error category (e.g. "storage", "config", "remote").
    #[must_use]
    pub const fn category(self) -> &'static str {
        match self {
            Self::DatabaseError | Self::StorageError | Self::IoError | Self::SerializationError => {
                "storage"
            }
            Self::ConfigInvalid | Self::ConfigMissingRequired => "config",
            Self::HttpError | Self::RemoteQueryFailed => "remote",
            Self::SkillNotFound | Self::ProjectNotFound | Self::ValidationFailed => "content",
            Self::RuntimeError => "runtime",
        }
    }

    /// Whether the user can plausibly recover by changing input or config.
    #[must_use]
    pub const fn is_recoverable(self) -> bool {
        !matches!(
            self,
            Self::DatabaseError | Self::StorageError | Self::RuntimeError
        )
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E{}", self.numeric())
    }
}

impl FolioError {
    /// Get the error code for this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Database(_) => ErrorCode::DatabaseError,
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::SerializationError,
            Self::Storage(_) => ErrorCode::StorageError,
            Self::Http(_) => ErrorCode::HttpError,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::MissingConfig(_) => ErrorCode::ConfigMissingRequired,
            Self::RemoteQuery(_) => ErrorCode::RemoteQueryFailed,
            Self::SkillNotFound(_) => ErrorCode::SkillNotFound,
            Self::ProjectNotFound(_) => ErrorCode::ProjectNotFound,
            Self::Validation(_) => ErrorCode::ValidationFailed,
            Self::Runtime(_) => ErrorCode::RuntimeError,
        }
    }
}

/// Result type alias using FolioError.
pub type Result<T> = std::result::Result<T, FolioError>;
