//! Configuration management for the workjournal application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults. It supports configuring the directory where
//! journal blobs are stored and the number of entries shown per page.
//!
//! # Environment Variables
//!
//! - `WORKJOURNAL_DIR`: Path to the data directory (defaults to ~/.local/share/workjournal)
//! - `WORKJOURNAL_PAGE_SIZE`: Entries per page when listing (defaults to 20)
//! - `HOME`: Used for expanding the default data directory path

use crate::constants;
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the workjournal application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use workjournal::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/journal"),
///     page_size: 10,
/// };
/// assert!(config.validate().is_ok());
/// ```
///
/// Loading configuration from environment variables:
/// ```no_run
/// use workjournal::Config;
/// use std::env;
///
/// env::set_var("WORKJOURNAL_DIR", "/custom/journal/path");
///
/// let config = Config::load().expect("Failed to load configuration");
/// assert_eq!(config.data_dir.to_str(), Some("/custom/journal/path"));
/// ```
pub struct Config {
    /// Directory where the `entries` and `ideas` blobs are stored.
    ///
    /// This is loaded from the WORKJOURNAL_DIR environment variable with a fallback
    /// to ~/.local/share/workjournal if not specified.
    pub data_dir: PathBuf,

    /// Number of entries per page in listings.
    pub page_size: usize,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &constants::REDACTED_PLACEHOLDER)
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(""),
            page_size: constants::DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The data directory path is expanded using `shellexpand` to handle `~` and
    /// environment variable references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The data directory path expansion fails or yields an empty path
    /// - `WORKJOURNAL_PAGE_SIZE` is not a positive integer
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use workjournal::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Showing {} entries per page", config.page_size),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(constants::ENV_VAR_WORKJOURNAL_DIR).unwrap_or_else(|_| {
            let home = env::var(constants::ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, constants::DEFAULT_DATA_SUBDIR)
        });
        let data_dir = Self::expand_dir(&data_dir_str)?;

        let page_size = match env::var(constants::ENV_VAR_WORKJOURNAL_PAGE_SIZE) {
            Ok(raw) => Self::parse_page_size(&raw)?,
            Err(_) => constants::DEFAULT_PAGE_SIZE,
        };

        Ok(Config {
            data_dir,
            page_size,
        })
    }

    /// Replaces the data directory with an explicitly requested one.
    ///
    /// Used for the `--data-dir` command-line flag, which takes precedence over
    /// `WORKJOURNAL_DIR`. The path goes through the same expansion as `load`.
    pub fn with_data_dir(mut self, raw: &str) -> AppResult<Self> {
        self.data_dir = Self::expand_dir(raw)?;
        Ok(self)
    }

    fn expand_dir(raw: &str) -> AppResult<PathBuf> {
        let expanded_path = shellexpand::full(raw)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let dir = PathBuf::from(expanded_path.into_owned());
        if dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }
        Ok(dir)
    }

    fn parse_page_size(raw: &str) -> AppResult<usize> {
        match raw.trim().parse::<usize>() {
            Ok(size) if size > 0 => Ok(size),
            _ => Err(AppError::Config(format!(
                "{} must be a positive integer, got '{}'",
                constants::ENV_VAR_WORKJOURNAL_PAGE_SIZE,
                raw
            ))),
        }
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Data directory path is empty" if the data directory path is empty
    /// - "Data directory must be an absolute path" if the path is relative
    /// - "Page size must be greater than zero" if the page size is zero
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        if self.page_size == 0 {
            return Err(AppError::Config(
                "Page size must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
