//! Edit-isolated working copies of entries.
//!
//! A draft holds a deep clone of the entry being edited plus the date it was
//! loaded from. Nothing touches the stored collection until [`EntryDraft::commit`].

use super::aggregate::total_time;
use super::clock::Clock;
use super::entry::{remove_at, replace_at, BulletField, Entry, LogField, TimeLogRecord, Todo};
use super::store::{clone_entry, find, upsert};

/// An entry being edited, detached from the stored collection.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    entry: Entry,
    original_key: Option<String>,
}

impl EntryDraft {
    /// Starts a draft for `date`: a clone of the stored entry when one exists,
    /// otherwise a blank entry that will be inserted on commit.
    pub fn new_for(entries: &[Entry], date: &str) -> Self {
        match find(entries, date) {
            Some(existing) => EntryDraft::edit(existing),
            None => EntryDraft {
                entry: Entry::empty(date),
                original_key: None,
            },
        }
    }

    /// Starts a draft for today's date according to `clock`.
    pub fn open_today(entries: &[Entry], clock: &dyn Clock) -> Self {
        EntryDraft::new_for(entries, &clock.today())
    }

    /// Starts a draft editing a clone of `entry`.
    pub fn edit(entry: &Entry) -> Self {
        EntryDraft {
            entry: clone_entry(entry),
            original_key: Some(entry.date.clone()),
        }
    }

    /// Starts a draft editing the most recent entry, if there is one.
    ///
    /// `entries` is expected to be sorted newest first.
    pub fn edit_latest(entries: &[Entry]) -> Option<Self> {
        entries.first().map(EntryDraft::edit)
    }

    /// Points the draft at another date, discarding unsaved changes.
    ///
    /// Picking a date that already has an entry loads that entry for editing;
    /// any other date starts a blank entry.
    pub fn change_date(&mut self, entries: &[Entry], next_date: &str) {
        *self = EntryDraft::new_for(entries, next_date);
    }

    /// Moves the draft's content to another date, keeping unsaved changes.
    ///
    /// On commit the entry at the original date is re-keyed, or overwritten
    /// at `next_date` if that date is already taken.
    pub fn set_date(&mut self, next_date: impl Into<String>) {
        self.entry.date = next_date.into();
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn date(&self) -> &str {
        &self.entry.date
    }

    /// The date this draft was loaded from, when editing a stored entry.
    pub fn original_key(&self) -> Option<&str> {
        self.original_key.as_deref()
    }

    /// Live total of the draft's logs in minutes.
    pub fn total_time(&self) -> f64 {
        total_time(&self.entry.logs)
    }

    pub fn add_todo(&mut self, text: impl Into<String>) {
        self.entry.todos.push(Todo::new(text, false));
    }

    pub fn update_todo_text(&mut self, index: usize, text: impl Into<String>) {
        if let Some(todo) = self.entry.todos.get(index) {
            let updated = Todo::new(text, todo.completed);
            replace_at(&mut self.entry.todos, index, updated);
        }
    }

    pub fn set_todo_completed(&mut self, index: usize, completed: bool) {
        if let Some(todo) = self.entry.todos.get(index) {
            let updated = Todo::new(todo.text.clone(), completed);
            replace_at(&mut self.entry.todos, index, updated);
        }
    }

    pub fn remove_todo(&mut self, index: usize) {
        remove_at(&mut self.entry.todos, index);
    }

    pub fn add_log(&mut self, log: TimeLogRecord) {
        self.entry.logs.push(log);
    }

    pub fn update_log(&mut self, index: usize, field: LogField, value: impl Into<String>) {
        if let Some(log) = self.entry.logs.get(index) {
            let mut updated = log.clone();
            updated.set(field, value);
            replace_at(&mut self.entry.logs, index, updated);
        }
    }

    pub fn remove_log(&mut self, index: usize) {
        remove_at(&mut self.entry.logs, index);
    }

    pub fn add_bullet(&mut self, field: BulletField, value: impl Into<String>) {
        self.entry.bullets_mut(field).push(value.into());
    }

    pub fn update_bullet(&mut self, field: BulletField, index: usize, value: impl Into<String>) {
        replace_at(self.entry.bullets_mut(field), index, value.into());
    }

    pub fn remove_bullet(&mut self, field: BulletField, index: usize) {
        remove_at(self.entry.bullets_mut(field), index);
    }

    /// Clears every list while keeping the date.
    pub fn clear(&mut self) {
        self.entry = Entry::empty(self.entry.date.clone());
    }

    /// Writes the draft into `entries` and returns the new collection.
    pub fn commit(self, entries: Vec<Entry>) -> Vec<Entry> {
        upsert(entries, self.entry, self.original_key.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal_core::clock::FixedClock;
    use chrono::NaiveDate;

    fn stored() -> Vec<Entry> {
        let mut latest = Entry::empty("2024-03-02");
        latest.todos.push(Todo::new("ship release", false));
        latest.til.push("git bisect".to_string());
        vec![latest, Entry::empty("2024-03-01")]
    }

    #[test]
    fn test_new_for_existing_date_clones() {
        let entries = stored();
        let draft = EntryDraft::new_for(&entries, "2024-03-02");

        assert_eq!(draft.original_key(), Some("2024-03-02"));
        assert_eq!(draft.entry(), &entries[0]);
    }

    #[test]
    fn test_new_for_missing_date_is_blank() {
        let draft = EntryDraft::new_for(&stored(), "2024-03-05");

        assert_eq!(draft.original_key(), None);
        assert!(draft.entry().is_blank());
        assert_eq!(draft.date(), "2024-03-05");
    }

    #[test]
    fn test_open_today_uses_clock() {
        let clock = FixedClock(
            NaiveDate::from_ymd_opt(2024, 3, 2)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
        );

        let draft = EntryDraft::open_today(&stored(), &clock);

        assert_eq!(draft.original_key(), Some("2024-03-02"));
        assert_eq!(draft.entry().til, vec!["git bisect"]);
    }

    #[test]
    fn test_edit_latest() {
        assert_eq!(
            EntryDraft::edit_latest(&stored()).map(|d| d.date().to_string()),
            Some("2024-03-02".to_string())
        );
        assert!(EntryDraft::edit_latest(&[]).is_none());
    }

    #[test]
    fn test_edits_do_not_touch_stored_entries() {
        let entries = stored();
        let mut draft = EntryDraft::new_for(&entries, "2024-03-02");

        draft.set_todo_completed(0, true);
        draft.update_bullet(BulletField::Til, 0, "rebase --onto");
        draft.add_bullet(BulletField::BigTheme, "release");

        assert!(!entries[0].todos[0].completed);
        assert_eq!(entries[0].til, vec!["git bisect"]);
        assert!(entries[0].big_theme.is_empty());
    }

    #[test]
    fn test_item_edits() {
        let mut draft = EntryDraft::new_for(&[], "2024-03-03");

        draft.add_todo("");
        draft.update_todo_text(0, "write tests");
        draft.set_todo_completed(0, true);
        draft.add_todo("review PR");
        draft.remove_todo(1);

        draft.add_log(TimeLogRecord::default());
        draft.update_log(0, LogField::TimeSpent, "1.5h");
        draft.update_log(0, LogField::Description, "tests");
        draft.update_log(0, LogField::ProjectCode, "CORE");

        draft.add_bullet(BulletField::MajorContribution, "a");
        draft.add_bullet(BulletField::MajorContribution, "b");
        draft.remove_bullet(BulletField::MajorContribution, 0);

        let entry = draft.entry();
        assert_eq!(entry.todos, vec![Todo::new("write tests", true)]);
        assert_eq!(entry.logs, vec![TimeLogRecord::new("1.5h", "tests", "CORE")]);
        assert_eq!(entry.major_contribution, vec!["b"]);
        assert_eq!(draft.total_time(), 90.0);
    }

    #[test]
    fn test_out_of_range_edits_are_noops() {
        let entries = stored();
        let mut draft = EntryDraft::new_for(&entries, "2024-03-02");
        let before = draft.clone();

        draft.update_todo_text(4, "x");
        draft.set_todo_completed(4, true);
        draft.remove_todo(4);
        draft.update_log(0, LogField::Description, "x");
        draft.remove_log(0);
        draft.update_bullet(BulletField::BigTheme, 0, "x");
        draft.remove_bullet(BulletField::Til, 3);

        assert_eq!(draft, before);
    }

    #[test]
    fn test_change_date_switches_to_existing_entry() {
        let entries = stored();
        let mut draft = EntryDraft::new_for(&entries, "2024-03-09");
        draft.add_todo("unsaved");

        draft.change_date(&entries, "2024-03-02");
        assert_eq!(draft.original_key(), Some("2024-03-02"));
        assert_eq!(draft.entry().todos[0].text, "ship release");

        draft.change_date(&entries, "2024-03-10");
        assert_eq!(draft.original_key(), None);
        assert!(draft.entry().is_blank());
    }

    #[test]
    fn test_commit_new_entry() {
        let mut draft = EntryDraft::new_for(&stored(), "2024-03-03");
        draft.add_todo("plan");

        let entries = draft.commit(stored());

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].date, "2024-03-03");
    }

    #[test]
    fn test_commit_with_set_date_renames() {
        let entries = stored();
        let mut draft = EntryDraft::new_for(&entries, "2024-03-01");
        draft.set_date("2024-02-28");

        let entries = draft.commit(entries);

        let dates: Vec<&str> = entries.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-03-02", "2024-02-28"]);
    }

    #[test]
    fn test_clear_keeps_date() {
        let mut draft = EntryDraft::new_for(&stored(), "2024-03-02");
        draft.clear();
        assert!(draft.entry().is_blank());
        assert_eq!(draft.date(), "2024-03-02");
        assert_eq!(draft.original_key(), Some("2024-03-02"));
    }
}
