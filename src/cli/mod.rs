//! Command-line interface for the workjournal application.
//!
//! Arguments are declared with clap's derive API. Every subcommand maps onto
//! one handler in [`crate::ops`]; parsing helpers for dates and time-log
//! triples live here so the handlers only see validated values.

use crate::constants::{APP_DESCRIPTION, APP_NAME, DATE_FORMAT_COMPACT, DATE_FORMAT_ISO};
use crate::errors::{AppError, AppResult};
use crate::journal_core::{IdeasField, TimeLogRecord};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

pub mod prompt;

/// A local work journal for todos, time logs and learnings
#[derive(Parser, Debug)]
#[command(name = APP_NAME, author, version, about = APP_DESCRIPTION, long_about = None)]
pub struct CliArgs {
    /// Print verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Directory holding the journal data (overrides WORKJOURNAL_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List entries, newest first
    List {
        /// Page to show (1-indexed)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Show a single entry
    Show {
        /// Entry date (YYYY-MM-DD or YYYYMMDD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Append items to an entry, creating it if needed
    Add(AddArgs),
    /// Change the date of an entry or clear its content
    Edit {
        /// Entry date (YYYY-MM-DD or YYYYMMDD), defaults to the newest entry
        #[arg(short, long)]
        date: Option<String>,
        /// Move the entry to this date, keeping its content
        #[arg(long)]
        new_date: Option<String>,
        /// Remove every todo, log and bullet from the entry
        #[arg(long)]
        clear: bool,
    },
    /// Flip the completion state of a todo
    Toggle {
        /// Entry date (YYYY-MM-DD or YYYYMMDD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Position of the todo as shown by `show` (1-indexed)
        #[arg(short, long)]
        index: usize,
    },
    /// Delete an entry
    Delete {
        /// Entry date (YYYY-MM-DD or YYYYMMDD)
        #[arg(short, long)]
        date: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show the total logged time of an entry
    Total {
        /// Entry date (YYYY-MM-DD or YYYYMMDD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Manage improvement ideas and learning topics
    Ideas {
        #[command(subcommand)]
        action: IdeasCommand,
    },
    /// Export all entries and ideas to a CSV file
    Export {
        /// Directory to write the file into, defaults to the current directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },
}

/// Items to append with `add`.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct AddArgs {
    /// Entry date (YYYY-MM-DD or YYYYMMDD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// Add an open todo
    #[arg(long = "todo", value_name = "TEXT")]
    pub todos: Vec<String>,
    /// Add a completed todo
    #[arg(long = "done", value_name = "TEXT")]
    pub done: Vec<String>,
    /// Add a time log as "TIME|DESCRIPTION|PROJECT", e.g. "1.5h|review|OPS"
    #[arg(long = "log", value_name = "LOG")]
    pub logs: Vec<String>,
    /// Add a "today I learned" bullet
    #[arg(long = "til", value_name = "TEXT")]
    pub til: Vec<String>,
    /// Add a big-theme bullet
    #[arg(long = "theme", value_name = "TEXT")]
    pub themes: Vec<String>,
    /// Add a major-contribution bullet
    #[arg(long = "contribution", value_name = "TEXT")]
    pub contributions: Vec<String>,
}

impl AddArgs {
    /// Whether no item flag was given.
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
            && self.done.is_empty()
            && self.logs.is_empty()
            && self.til.is_empty()
            && self.themes.is_empty()
            && self.contributions.is_empty()
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum IdeasCommand {
    /// Show both lists
    List,
    /// Append an item to a list
    Add {
        #[arg(value_enum)]
        list: IdeasList,
        text: String,
    },
    /// Replace the item at a position (1-indexed)
    Update {
        #[arg(value_enum)]
        list: IdeasList,
        index: usize,
        text: String,
    },
    /// Remove the item at a position (1-indexed)
    Remove {
        #[arg(value_enum)]
        list: IdeasList,
        index: usize,
    },
    /// Empty both lists
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Which ideas list a command targets.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdeasList {
    /// Improvement ideas
    #[value(alias = "improvement")]
    Ideas,
    /// Learning topics
    #[value(alias = "learning")]
    Topics,
}

impl From<IdeasList> for IdeasField {
    fn from(list: IdeasList) -> Self {
        match list {
            IdeasList::Ideas => IdeasField::ImprovementIdeas,
            IdeasList::Topics => IdeasField::LearningTopics,
        }
    }
}

/// Parses a user-supplied date into the canonical `YYYY-MM-DD` form.
///
/// Accepts `YYYY-MM-DD` and `YYYYMMDD`.
///
/// # Errors
///
/// Returns `AppError::Journal` if the string is neither format.
///
/// # Examples
///
/// ```
/// use workjournal::cli::parse_date_arg;
///
/// assert_eq!(parse_date_arg("20240301").unwrap(), "2024-03-01");
/// assert_eq!(parse_date_arg("2024-03-01").unwrap(), "2024-03-01");
/// assert!(parse_date_arg("March 1st").is_err());
/// ```
pub fn parse_date_arg(raw: &str) -> AppResult<String> {
    let trimmed = raw.trim();
    NaiveDate::from_str(trimmed)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, DATE_FORMAT_COMPACT))
        .map(|date| date.format(DATE_FORMAT_ISO).to_string())
        .map_err(|e| {
            AppError::Journal(format!(
                "Invalid date format: {}. Use YYYY-MM-DD or YYYYMMDD ({})",
                raw, e
            ))
        })
}

/// Splits a `TIME|DESCRIPTION|PROJECT` argument into a time log.
///
/// Missing trailing parts are left empty; `|` inside the project part is kept.
/// The time token is stored verbatim, so a malformed one simply counts as zero
/// minutes in totals.
///
/// # Examples
///
/// ```
/// use workjournal::cli::parse_log_arg;
///
/// let log = parse_log_arg("3h|rollout|OPS");
/// assert_eq!(log.time_spent, "3h");
/// assert_eq!(log.description, "rollout");
/// assert_eq!(log.project_code, "OPS");
///
/// let log = parse_log_arg("45m|standup");
/// assert_eq!(log.project_code, "");
/// ```
pub fn parse_log_arg(raw: &str) -> TimeLogRecord {
    let mut parts = raw.splitn(3, '|').map(str::trim);
    let time_spent = parts.next().unwrap_or_default();
    let description = parts.next().unwrap_or_default();
    let project_code = parts.next().unwrap_or_default();
    TimeLogRecord::new(time_spent, description, project_code)
}

/// Converts a 1-indexed position from the command line into a list index.
///
/// # Errors
///
/// Returns `AppError::Journal` for position zero.
pub fn to_index(position: usize) -> AppResult<usize> {
    position
        .checked_sub(1)
        .ok_or_else(|| AppError::Journal("Positions start at 1".to_string()))
}
