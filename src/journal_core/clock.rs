//! Injectable source of the current date and time.

use crate::constants;
use chrono::{Local, NaiveDateTime};

/// Supplies "now" to the parts of the journal that depend on it: the default
/// date of a new entry and the timestamp in export filenames.
pub trait Clock {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Today's date as an ISO-8601 `YYYY-MM-DD` string.
    fn today(&self) -> String {
        self.now().format(constants::DATE_FORMAT_ISO).to_string()
    }
}

/// Reads the system's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use workjournal::journal_core::{Clock, FixedClock};
///
/// let at = NaiveDate::from_ymd_opt(2024, 3, 2)
///     .unwrap()
///     .and_hms_opt(9, 5, 7)
///     .unwrap();
/// let clock = FixedClock(at);
/// assert_eq!(clock.today(), "2024-03-02");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
