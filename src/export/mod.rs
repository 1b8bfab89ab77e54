//! CSV export of the whole journal.
//!
//! The export is a single document: one row per entry under a header row,
//! followed by an "Improvement Ideas" section and a "Learning Topics" section.
//! Every field is double-quoted with embedded quotes doubled, and lines are
//! separated by `\n`. Nested lists are flattened into `; `-joined cells, so
//! the export cannot be read back into entries; JSON persistence is the
//! lossless format.

use crate::constants::{CSV_ITEM_SEPARATOR, EXPORT_FILENAME_PREFIX, EXPORT_TIMESTAMP_FORMAT};
use crate::journal_core::{BulletField, Clock, Entry, IdeasField, IdeasState, TimeLogRecord, Todo};
use chrono::NaiveDateTime;
use tracing::debug;

const ENTRY_HEADERS: [&str; 6] = ["Date", "Todos", "Logs", "TIL", "Big Theme", "Major Contribution"];

/// A rendered export ready to be saved under its suggested name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub content: String,
}

impl ExportFile {
    pub fn bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }
}

fn csv_escape(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

fn csv_row<S: AsRef<str>>(cells: &[S]) -> String {
    cells
        .iter()
        .map(|cell| csv_escape(cell.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

fn format_todo(todo: &Todo) -> String {
    let mark = if todo.completed { 'x' } else { ' ' };
    format!("[{}] {}", mark, todo.text)
}

fn format_log(log: &TimeLogRecord) -> String {
    if log.project_code.is_empty() {
        format!("{} - {}", log.time_spent, log.description)
    } else {
        format!("[{}] {} - {}", log.project_code, log.time_spent, log.description)
    }
}

fn entry_cells(entry: &Entry) -> Vec<String> {
    let mut cells = Vec::with_capacity(ENTRY_HEADERS.len());
    cells.push(entry.date.clone());
    cells.push(
        entry
            .todos
            .iter()
            .map(format_todo)
            .collect::<Vec<_>>()
            .join(CSV_ITEM_SEPARATOR),
    );
    cells.push(
        entry
            .logs
            .iter()
            .map(format_log)
            .collect::<Vec<_>>()
            .join(CSV_ITEM_SEPARATOR),
    );
    for field in BulletField::ALL {
        cells.push(entry.bullets(field).join(CSV_ITEM_SEPARATOR));
    }
    cells
}

/// Renders entries and ideas as one CSV document.
///
/// Entries are written in the order given. The output is deterministic: equal
/// inputs always produce identical text.
///
/// # Examples
///
/// ```
/// use workjournal::export::export_csv;
/// use workjournal::journal_core::{Entry, IdeasState, Todo};
///
/// let mut entry = Entry::empty("2024-03-01");
/// entry.todos.push(Todo::new("say \"hi\"", true));
///
/// let csv = export_csv(&[entry], &IdeasState::default());
/// let lines: Vec<&str> = csv.lines().collect();
/// assert_eq!(lines[1], r#""2024-03-01","[x] say ""hi""","","","","""#);
/// ```
pub fn export_csv(entries: &[Entry], ideas: &IdeasState) -> String {
    let mut lines = Vec::with_capacity(entries.len() + ideas.improvement_ideas.len() + ideas.learning_topics.len() + 5);

    lines.push(csv_row(&ENTRY_HEADERS));
    lines.extend(entries.iter().map(|entry| csv_row(&entry_cells(entry))));

    for field in IdeasField::ALL {
        lines.push(csv_row(&[""]));
        lines.push(csv_row(&[field.label()]));
        lines.extend(ideas.items(field).iter().map(|item| csv_row(&[item])));
    }

    lines.join("\n")
}

/// Suggested filename for an export made at local time `now`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use workjournal::export::export_filename;
///
/// let now = NaiveDate::from_ymd_opt(2024, 3, 2)
///     .unwrap()
///     .and_hms_opt(9, 5, 7)
///     .unwrap();
/// assert_eq!(export_filename(now), "work-journal_2024-03-02_09-05-07.csv");
/// ```
pub fn export_filename(now: NaiveDateTime) -> String {
    format!(
        "{}_{}.csv",
        EXPORT_FILENAME_PREFIX,
        now.format(EXPORT_TIMESTAMP_FORMAT)
    )
}

/// Renders the export and names it after the current time from `clock`.
pub fn export(entries: &[Entry], ideas: &IdeasState, clock: &dyn Clock) -> ExportFile {
    let file = ExportFile {
        filename: export_filename(clock.now()),
        content: export_csv(entries, ideas),
    };
    debug!(
        filename = %file.filename,
        entries = entries.len(),
        bytes = file.content.len(),
        "rendered CSV export"
    );
    file
}
