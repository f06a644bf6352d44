//! Error types for the Scalenty site state layer
//!
//! This module defines all custom error types used throughout the crate.
//! Error types are organized by category: storage and environment limits,
//! provider composition mistakes, value parsing, catalog integrity,
//! configuration, and downstream submissions.

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type encompassing all error categories
#[derive(Error, Debug)]
pub enum AppError {
    /// Durable storage errors
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Provider composition errors
    #[error(transparent)]
    Context(#[from] ContextError),

    /// Invalid value supplied by a caller
    #[error(transparent)]
    Value(#[from] ValueError),

    /// Message catalog integrity errors
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Generic unexpected error
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Durable storage errors
///
/// None of these ever reach a user: the preference layer swallows them and
/// keeps the in-memory value authoritative for the session.
#[derive(Error, Debug)]
pub enum StorageError {
    /// No storage in this environment (disabled, or rendering without a client)
    #[error("Storage is not available in this environment")]
    Unavailable,

    /// Error reading the backing store
    #[error("Could not read preference store: {path}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error writing the backing store
    #[error("Could not write preference store: {path}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backing store exists but is not a JSON object of strings
    #[error("Preference store is malformed: {path}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Provider composition errors
///
/// These are programmer errors: a view asked for state that the root never
/// composed, or asked before the root finished mounting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// Hook used without the provider in the state tree
    #[error("{hook} must be used within a {provider}")]
    MissingProvider {
        hook: &'static str,
        provider: &'static str,
    },

    /// Hook used before the provider finished initialization
    #[error("{provider} is not ready yet")]
    NotReady { provider: &'static str },
}

/// Invalid values handed to the state layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Locale code outside the supported set
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Theme name outside light/dark/system
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// FAQ category selector that matches nothing
    #[error("Unknown FAQ category: {0}")]
    UnknownCategory(String),

    /// Consent status outside pending/accepted/declined
    #[error("Unknown consent status: {0}")]
    UnknownConsentStatus(String),
}

/// Message catalog integrity errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A view referenced a key that the locale table does not define
    #[error("Missing translation for {key} in locale {locale}")]
    MissingKey { locale: &'static str, key: String },
}

/// Configuration related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error loading configuration file
    #[error("Could not load configuration: {0}")]
    LoadError(String),

    /// Error parsing configuration
    #[error("Invalid configuration format: {0}")]
    ParseError(String),

    /// Configuration directory error
    #[error("Could not access configuration directory")]
    DirectoryError,
}

/// Downstream form or newsletter submission failures
///
/// Network clients convert their failures into this type before handing
/// them to views.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The request never reached the service
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a failure status
    #[error("Service rejected the submission ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Input failed validation before sending
    #[error("Invalid field {field}: {reason}")]
    Invalid { field: String, reason: String },
}

/// Result type alias for operations that can fail with AppError
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for hook lookups
pub type ContextResult<T> = Result<T, ContextError>;

impl StorageError {
    /// Create an operator-friendly message for CLI output
    pub fn user_message(&self) -> String {
        match self {
            StorageError::Unavailable => {
                "Preferences cannot be saved here. Changes last for this session only.".to_string()
            }
            StorageError::WriteError { .. } => {
                "Could not save preferences. Check disk space and permissions.".to_string()
            }
            StorageError::Malformed { .. } => {
                "The preference file is damaged. It will be rewritten on the next change."
                    .to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl SubmissionError {
    /// Create a user-friendly message suitable for a form status line
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::Network(_) => {
                "We could not reach the server. Please try again.".to_string()
            }
            SubmissionError::Rejected { .. } => {
                "Something went wrong while sending. Please try again later.".to_string()
            }
            SubmissionError::Invalid { field, .. } => format!("Please check the {} field.", field),
        }
    }
}
