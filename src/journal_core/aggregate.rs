//! Read-time views over an entry's time logs.

use super::entry::TimeLogRecord;
use super::time::{format_duration, parse_duration};
use crate::constants::{FULL_DAY_MINUTES, NO_PROJECT_LABEL};

/// Sums the duration of every log, in minutes. Malformed tokens count as zero.
pub fn total_time(logs: &[TimeLogRecord]) -> f64 {
    logs.iter().map(|log| parse_duration(&log.time_spent)).sum()
}

/// Whether `minutes` add up to at least one workday.
pub fn is_full_day(minutes: f64) -> bool {
    minutes >= FULL_DAY_MINUTES
}

/// Full-day flag computed on the displayed total.
///
/// The total is first rendered with one decimal of hours and then read back,
/// so the flag always agrees with the number shown next to it: 479.9 minutes
/// display as `8.0h` and count as a full day.
pub fn is_full_day_displayed(logs: &[TimeLogRecord]) -> bool {
    is_full_day(parse_duration(&format_duration(total_time(logs))))
}

/// Time logs sharing one project label.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectGroup<'a> {
    pub label: String,
    pub logs: Vec<&'a TimeLogRecord>,
}

/// Groups logs by their trimmed project code.
///
/// Groups appear in the order their label is first seen, and logs keep their
/// original order inside each group. Logs with an empty or whitespace-only
/// project code fall under `"No Project"`.
///
/// # Examples
///
/// ```
/// use workjournal::journal_core::{group_by_project, TimeLogRecord};
///
/// let logs = vec![
///     TimeLogRecord::new("1h", "triage", ""),
///     TimeLogRecord::new("2h", "feature", "A"),
///     TimeLogRecord::new("30m", "email", " "),
/// ];
///
/// let groups = group_by_project(&logs);
/// let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
/// assert_eq!(labels, ["No Project", "A"]);
/// assert_eq!(groups[0].logs.len(), 2);
/// ```
pub fn group_by_project(logs: &[TimeLogRecord]) -> Vec<ProjectGroup<'_>> {
    let mut groups: Vec<ProjectGroup<'_>> = Vec::new();
    for log in logs {
        let code = log.project_code.trim();
        let label = if code.is_empty() { NO_PROJECT_LABEL } else { code };
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.logs.push(log),
            None => groups.push(ProjectGroup {
                label: label.to_string(),
                logs: vec![log],
            }),
        }
    }
    groups
}
