//! Error handling utilities for the workjournal application.
//!
//! This module provides the central error type `AppError` which represents all
//! error conditions that can reach the application boundary, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Most of the journal core never fails: malformed persisted data and malformed
//! duration tokens degrade to empty defaults instead of producing errors. The
//! errors here cover the edges of the system, such as writing blobs to disk,
//! loading configuration, and rejecting unparsable command-line input.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents specific error cases that can occur in the blob store.
///
/// # Examples
///
/// ```
/// use workjournal::errors::StorageError;
///
/// let error = StorageError::InvalidKey {
///     key: "../entries".to_string(),
/// };
///
/// assert!(format!("{}", error).contains("../entries"));
/// ```
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key contains characters that cannot be mapped to a blob location.
    #[error("Invalid storage key '{key}'. Keys may only contain letters, digits, '-' and '_'.")]
    InvalidKey {
        /// The rejected key
        key: String,
    },

    /// The in-memory value could not be encoded as JSON.
    #[error("Failed to serialize value for key '{key}': {source}")]
    Serialize {
        /// The key being written
        key: String,
        /// The underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// Reading the blob from its backing location failed.
    #[error("Failed to read blob for key '{key}' at {path}: {source}")]
    Read {
        /// The key being read
        key: String,
        /// The file backing the key
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Writing the blob to its backing location failed.
    #[error("Failed to write blob for key '{key}' at {path}: {source}. Please check that the data directory is writable.")]
    Write {
        /// The key being written
        key: String,
        /// The file backing the key
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents all possible errors that can occur in the workjournal application.
///
/// Note: This type does not implement `Clone` to avoid losing error context when
/// cloning `std::io::Error` values.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use workjournal::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use workjournal::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors in journal logic (e.g., invalid date formats, unknown entries).
    #[error("Journal logic error: {0}")]
    Journal(String),

    /// Errors related to persisting journal state.
    ///
    /// This variant uses a dedicated StorageError type to provide detailed
    /// information about which key failed and why.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use workjournal::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Journal("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
