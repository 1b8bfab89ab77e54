//! Constants used throughout the application.
//!
//! This module contains all constants used in the workjournal application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "workjournal";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A local work journal for todos, time logs and learnings";

// Logging
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "workjournal";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the data directory.
pub const ENV_VAR_WORKJOURNAL_DIR: &str = "WORKJOURNAL_DIR";
/// Environment variable for the number of entries shown per page.
pub const ENV_VAR_WORKJOURNAL_PAGE_SIZE: &str = "WORKJOURNAL_PAGE_SIZE";
/// Environment variable selecting the log output format.
pub const ENV_VAR_WORKJOURNAL_LOG_FORMAT: &str = "WORKJOURNAL_LOG_FORMAT";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Environment variable often used to indicate a Continuous Integration environment.
pub const ENV_VAR_CI: &str = "CI";
/// Default sub-directory name for journal data within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".local/share/workjournal";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Persistence
/// Storage key holding the JSON array of entries.
pub const ENTRIES_STORAGE_KEY: &str = "entries";
/// Storage key holding the JSON object of ideas.
pub const IDEAS_STORAGE_KEY: &str = "ideas";
/// File extension for blobs in the file store.
pub const BLOB_FILE_EXTENSION: &str = "json";

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
/// Minutes in one hour.
pub const MINUTES_PER_HOUR: f64 = 60.0;
/// Hours in one workday, the unit behind the `d` duration suffix.
pub const HOURS_PER_WORKDAY: f64 = 8.0;
/// Total logged minutes at which a day counts as full (one workday).
pub const FULL_DAY_MINUTES: f64 = MINUTES_PER_HOUR * HOURS_PER_WORKDAY;

// Views
/// Number of entries shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 20;
/// Group label for time logs without a project code.
pub const NO_PROJECT_LABEL: &str = "No Project";

// Export
/// Prefix of exported CSV filenames.
pub const EXPORT_FILENAME_PREFIX: &str = "work-journal";
/// Timestamp format embedded in exported CSV filenames.
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";
/// Separator between items inside a single CSV cell.
pub const CSV_ITEM_SEPARATOR: &str = "; ";
