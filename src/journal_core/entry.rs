//! The journal data model: entries, their todos, time logs and bullet lists.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single todo item owned by an entry.
/// Fields missing from a persisted blob load as empty or `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Todo {
    pub text: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(text: impl Into<String>, completed: bool) -> Self {
        Todo {
            text: text.into(),
            completed,
        }
    }
}

/// One block of logged time, e.g. `3h` spent on `PROJ` doing `description`.
///
/// `time_spent` keeps the duration token exactly as entered; it is only
/// interpreted when totals are computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeLogRecord {
    pub time_spent: String,
    pub description: String,
    pub project_code: String,
}

impl TimeLogRecord {
    pub fn new(
        time_spent: impl Into<String>,
        description: impl Into<String>,
        project_code: impl Into<String>,
    ) -> Self {
        TimeLogRecord {
            time_spent: time_spent.into(),
            description: description.into(),
            project_code: project_code.into(),
        }
    }

    /// Replaces the value of one field.
    pub fn set(&mut self, field: LogField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LogField::TimeSpent => self.time_spent = value,
            LogField::Description => self.description = value,
            LogField::ProjectCode => self.project_code = value,
        }
    }
}

/// The editable fields of a [`TimeLogRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogField {
    TimeSpent,
    Description,
    ProjectCode,
}

/// The three free-text bullet lists attached to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BulletField {
    /// Today I learned.
    Til,
    BigTheme,
    MajorContribution,
}

impl BulletField {
    /// All bullet fields in display and export order.
    pub const ALL: [BulletField; 3] = [
        BulletField::Til,
        BulletField::BigTheme,
        BulletField::MajorContribution,
    ];

    /// Human-readable heading, matching the CSV column names.
    pub fn label(self) -> &'static str {
        match self {
            BulletField::Til => "TIL",
            BulletField::BigTheme => "Big Theme",
            BulletField::MajorContribution => "Major Contribution",
        }
    }
}

/// One calendar day's work journal.
///
/// `date` is an ISO-8601 `YYYY-MM-DD` string and acts as the primary key: a
/// collection never holds two entries with the same date. List fields missing
/// from a persisted blob load as empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub date: String,
    #[serde(default)]
    pub todos: Vec<Todo>,
    #[serde(default)]
    pub logs: Vec<TimeLogRecord>,
    #[serde(default)]
    pub til: Vec<String>,
    #[serde(default)]
    pub big_theme: Vec<String>,
    #[serde(default)]
    pub major_contribution: Vec<String>,
}

impl Entry {
    /// Creates an entry with no content for the given date.
    ///
    /// # Examples
    ///
    /// ```
    /// use workjournal::journal_core::Entry;
    ///
    /// let entry = Entry::empty("2024-03-01");
    /// assert_eq!(entry.date, "2024-03-01");
    /// assert!(entry.todos.is_empty() && entry.logs.is_empty());
    /// ```
    pub fn empty(date: impl Into<String>) -> Self {
        Entry {
            date: date.into(),
            ..Entry::default()
        }
    }

    /// Returns the bullet list for `field`.
    pub fn bullets(&self, field: BulletField) -> &[String] {
        match field {
            BulletField::Til => &self.til,
            BulletField::BigTheme => &self.big_theme,
            BulletField::MajorContribution => &self.major_contribution,
        }
    }

    /// Returns the bullet list for `field` for in-place editing.
    pub fn bullets_mut(&mut self, field: BulletField) -> &mut Vec<String> {
        match field {
            BulletField::Til => &mut self.til,
            BulletField::BigTheme => &mut self.big_theme,
            BulletField::MajorContribution => &mut self.major_contribution,
        }
    }

    /// True when the entry has no todos, logs or bullets.
    pub fn is_blank(&self) -> bool {
        self.todos.is_empty()
            && self.logs.is_empty()
            && BulletField::ALL.iter().all(|f| self.bullets(*f).is_empty())
    }
}

/// Replaces the element at `index`. Out-of-range indices leave the list untouched.
///
/// Returns whether a replacement happened.
pub(crate) fn replace_at<T>(items: &mut [T], index: usize, value: T) -> bool {
    match items.get_mut(index) {
        Some(slot) => {
            *slot = value;
            true
        }
        None => {
            debug!(index, len = items.len(), "ignoring update at out-of-range index");
            false
        }
    }
}

/// Removes the element at `index`. Out-of-range indices leave the list untouched.
pub(crate) fn remove_at<T>(items: &mut Vec<T>, index: usize) -> Option<T> {
    if index < items.len() {
        Some(items.remove(index))
    } else {
        debug!(index, len = items.len(), "ignoring removal at out-of-range index");
        None
    }
}
