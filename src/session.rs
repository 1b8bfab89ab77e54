//! The journal session: owned state plus its persistence and clock.
//!
//! A [`JournalSession`] hydrates [`JournalState`] from a [`BlobStore`] once and
//! then applies every committed mutation in memory before writing the affected
//! key back. Writes are last-write-wins; a failed write is reported to the
//! caller but the in-memory state keeps the change.

use crate::errors::{AppError, AppResult};
use crate::export::{self, ExportFile};
use crate::journal_core::{
    clamp_page, find, page_count, paginate, remove, upsert, Clock, Entry, EntryDraft, IdeasState,
};
use crate::storage::{self, BlobStore};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Everything the journal knows: all entries (newest first) and the ideas record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JournalState {
    pub entries: Vec<Entry>,
    pub ideas: IdeasState,
}

/// Proof that deletion of one entry was requested.
///
/// Returned by [`JournalSession::request_delete`]; the entry is only removed
/// once the same token is passed to [`JournalSession::confirm_delete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteToken {
    id: Uuid,
    date: String,
}

impl DeleteToken {
    /// Date of the entry this token would delete.
    pub fn date(&self) -> &str {
        &self.date
    }
}

/// Owns the journal state for one user session.
pub struct JournalSession {
    state: JournalState,
    store: Box<dyn BlobStore>,
    clock: Box<dyn Clock>,
    pending_delete: Option<DeleteToken>,
}

impl JournalSession {
    /// Hydrates a session from `store`. Missing or malformed blobs start empty.
    pub fn open(store: Box<dyn BlobStore>, clock: Box<dyn Clock>) -> Self {
        let state = JournalState {
            entries: storage::load_entries(store.as_ref()),
            ideas: storage::load_ideas(store.as_ref()),
        };
        info!(
            entries = state.entries.len(),
            ideas = state.ideas.improvement_ideas.len() + state.ideas.learning_topics.len(),
            "journal hydrated"
        );
        JournalSession {
            state,
            store,
            clock,
            pending_delete: None,
        }
    }

    pub fn state(&self) -> &JournalState {
        &self.state
    }

    pub fn entries(&self) -> &[Entry] {
        &self.state.entries
    }

    pub fn ideas(&self) -> &IdeasState {
        &self.state.ideas
    }

    pub fn entry(&self, date: &str) -> Option<&Entry> {
        find(&self.state.entries, date)
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn store(&self) -> &dyn BlobStore {
        self.store.as_ref()
    }

    /// Today's date according to the session clock.
    pub fn today(&self) -> String {
        self.clock.today()
    }

    /// A draft for today's entry: the stored one if it exists, else a blank one.
    pub fn draft_today(&self) -> EntryDraft {
        EntryDraft::open_today(&self.state.entries, self.clock.as_ref())
    }

    /// A draft for `date`: the stored one if it exists, else a blank one.
    pub fn draft_for(&self, date: &str) -> EntryDraft {
        EntryDraft::new_for(&self.state.entries, date)
    }

    /// Commits `draft` into the collection and persists the entries.
    pub fn save_entry(&mut self, draft: EntryDraft) -> AppResult<()> {
        let date = draft.date().to_string();
        let entries = std::mem::take(&mut self.state.entries);
        self.state.entries = draft.commit(entries);
        info!(date = %date, "entry saved");
        self.persist_entries()
    }

    /// Flips the completion flag of todo `index` on the stored entry at `date`.
    ///
    /// Returns the new completion state.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Journal` when there is no entry at `date` or the
    /// entry has no todo at `index`.
    pub fn toggle_todo(&mut self, date: &str, index: usize) -> AppResult<bool> {
        let entry = self
            .state
            .entries
            .iter()
            .find(|e| e.date == date)
            .ok_or_else(|| AppError::Journal(format!("No entry for {}", date)))?;
        let todo = entry.todos.get(index).ok_or_else(|| {
            AppError::Journal(format!("Entry {} has no todo #{}", date, index + 1))
        })?;

        // Rebuild the entry rather than patching the stored one.
        let mut updated = entry.clone();
        let completed = !todo.completed;
        updated.todos[index].completed = completed;
        let entries = std::mem::take(&mut self.state.entries);
        self.state.entries = upsert(entries, updated, Some(date));

        debug!(date, index, completed, "todo toggled");
        self.persist_entries()?;
        Ok(completed)
    }

    /// First step of deleting the entry at `date`.
    ///
    /// Returns `None` when there is nothing to delete. A new request replaces
    /// any earlier pending one.
    pub fn request_delete(&mut self, date: &str) -> Option<DeleteToken> {
        find(&self.state.entries, date)?;
        let token = DeleteToken {
            id: Uuid::new_v4(),
            date: date.to_string(),
        };
        debug!(date, "delete requested");
        self.pending_delete = Some(token.clone());
        Some(token)
    }

    /// Second step of deleting an entry. Applies the removal when `token` is
    /// the pending request and returns whether anything was deleted.
    pub fn confirm_delete(&mut self, token: &DeleteToken) -> AppResult<bool> {
        if self.pending_delete.as_ref() != Some(token) {
            warn!(date = %token.date, "ignoring stale or unknown delete token");
            return Ok(false);
        }
        self.pending_delete = None;

        let entries = std::mem::take(&mut self.state.entries);
        self.state.entries = remove(entries, &token.date);
        info!(date = %token.date, "entry deleted");
        self.persist_entries()?;
        Ok(true)
    }

    /// Drops a pending delete request, leaving the entries untouched.
    pub fn cancel_delete(&mut self, token: &DeleteToken) {
        if self.pending_delete.as_ref() == Some(token) {
            debug!(date = %token.date, "delete cancelled");
            self.pending_delete = None;
        }
    }

    /// Replaces the ideas record with `update(current)` and persists it.
    ///
    /// # Examples
    ///
    /// ```
    /// use workjournal::journal_core::{add_item, IdeasField, SystemClock};
    /// use workjournal::session::JournalSession;
    /// use workjournal::storage::MemoryBlobStore;
    ///
    /// let mut session = JournalSession::open(
    ///     Box::new(MemoryBlobStore::new()),
    ///     Box::new(SystemClock),
    /// );
    /// session
    ///     .update_ideas(|ideas| add_item(ideas, IdeasField::ImprovementIdeas, "pair more"))
    ///     .unwrap();
    /// assert_eq!(session.ideas().improvement_ideas, vec!["pair more".to_string()]);
    /// ```
    pub fn update_ideas<F>(&mut self, update: F) -> AppResult<()>
    where
        F: FnOnce(&IdeasState) -> IdeasState,
    {
        self.state.ideas = update(&self.state.ideas);
        self.persist_ideas()
    }

    /// Empties both idea lists.
    pub fn reset_ideas(&mut self) -> AppResult<()> {
        self.update_ideas(|_| IdeasState::reset())
    }

    /// Renders the CSV export of the current state.
    pub fn export(&self) -> ExportFile {
        export::export(&self.state.entries, &self.state.ideas, self.clock.as_ref())
    }

    /// Number of pages of entries at `page_size` per page.
    pub fn page_count(&self, page_size: usize) -> usize {
        page_count(self.state.entries.len(), page_size)
    }

    /// Entries on page `page_number` (1-indexed). Out-of-range pages are empty.
    pub fn page(&self, page_size: usize, page_number: usize) -> &[Entry] {
        paginate(&self.state.entries, page_size, page_number)
    }

    /// Clamps `page_number` to the pages that exist at `page_size`.
    pub fn clamp_page(&self, page_size: usize, page_number: usize) -> usize {
        clamp_page(page_number, self.page_count(page_size))
    }

    fn persist_entries(&mut self) -> AppResult<()> {
        storage::save_entries(self.store.as_mut(), &self.state.entries).map_err(|e| {
            warn!(error = %e, "failed to persist entries");
            AppError::from(e)
        })
    }

    fn persist_ideas(&mut self) -> AppResult<()> {
        storage::save_ideas(self.store.as_mut(), &self.state.ideas).map_err(|e| {
            warn!(error = %e, "failed to persist ideas");
            AppError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ENTRIES_STORAGE_KEY;
    use crate::errors::StorageError;
    use crate::journal_core::{add_item, BulletField, FixedClock, IdeasField, TimeLogRecord, Todo};
    use crate::storage::MemoryBlobStore;
    use chrono::NaiveDate;

    fn clock() -> Box<dyn Clock> {
        Box::new(FixedClock(
            NaiveDate::from_ymd_opt(2024, 3, 2)
                .unwrap()
                .and_hms_opt(17, 30, 0)
                .unwrap(),
        ))
    }

    fn session() -> JournalSession {
        JournalSession::open(Box::new(MemoryBlobStore::new()), clock())
    }

    fn stored_entries(session: &JournalSession) -> Vec<Entry> {
        let blob = session.store().load(ENTRIES_STORAGE_KEY).unwrap().unwrap();
        serde_json::from_str(&blob).unwrap()
    }

    /// Rejects every write.
    struct ReadOnlyStore;

    impl BlobStore for ReadOnlyStore {
        fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn save(&mut self, key: &str, _blob: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                path: "/read-only".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }

    #[test]
    fn test_save_today_persists() {
        let mut session = session();
        let mut draft = session.draft_today();
        draft.add_todo("standup");
        draft.add_log(TimeLogRecord::new("30m", "standup", "TEAM"));

        session.save_entry(draft).unwrap();

        assert_eq!(session.entries().len(), 1);
        assert_eq!(session.entries()[0].date, "2024-03-02");
        assert_eq!(stored_entries(&session), session.entries());
    }

    #[test]
    fn test_hydration_sorts_and_survives_malformed_ideas() {
        let mut store = MemoryBlobStore::new();
        storage::save_entries(
            &mut store,
            &[Entry::empty("2024-01-01"), Entry::empty("2024-02-01")],
        )
        .unwrap();
        store.save("ideas", "not json").unwrap();

        let session = JournalSession::open(Box::new(store), clock());

        assert_eq!(session.entries()[0].date, "2024-02-01");
        assert_eq!(session.ideas(), &IdeasState::default());
    }

    #[test]
    fn test_draft_isolation_until_save() {
        let mut session = session();
        let mut draft = session.draft_for("2024-03-01");
        draft.add_bullet(BulletField::Til, "first");
        session.save_entry(draft).unwrap();

        let mut editing = session.draft_for("2024-03-01");
        editing.update_bullet(BulletField::Til, 0, "changed");

        assert_eq!(session.entry("2024-03-01").unwrap().til, vec!["first"]);
        session.save_entry(editing).unwrap();
        assert_eq!(session.entry("2024-03-01").unwrap().til, vec!["changed"]);
    }

    #[test]
    fn test_toggle_todo() {
        let mut session = session();
        let mut draft = session.draft_for("2024-03-01");
        draft.add_todo("review");
        session.save_entry(draft).unwrap();

        assert!(session.toggle_todo("2024-03-01", 0).unwrap());
        assert_eq!(stored_entries(&session)[0].todos[0], Todo::new("review", true));
        assert!(!session.toggle_todo("2024-03-01", 0).unwrap());
    }

    #[test]
    fn test_toggle_todo_errors() {
        let mut session = session();
        session.save_entry(session.draft_for("2024-03-01")).unwrap();

        assert!(matches!(
            session.toggle_todo("2024-01-01", 0),
            Err(AppError::Journal(_))
        ));
        match session.toggle_todo("2024-03-01", 2) {
            Err(AppError::Journal(msg)) => assert!(msg.contains("no todo #3")),
            _ => panic!("Expected Journal error"),
        }
    }

    #[test]
    fn test_two_step_delete() {
        let mut session = session();
        session.save_entry(session.draft_for("2024-03-01")).unwrap();

        let token = session.request_delete("2024-03-01").unwrap();
        assert_eq!(token.date(), "2024-03-01");
        assert_eq!(session.entries().len(), 1);

        assert!(session.confirm_delete(&token).unwrap());
        assert!(session.entries().is_empty());
        assert!(stored_entries(&session).is_empty());

        // The token is spent.
        assert!(!session.confirm_delete(&token).unwrap());
    }

    #[test]
    fn test_cancelled_or_stale_delete_leaves_state() {
        let mut session = session();
        session.save_entry(session.draft_for("2024-03-01")).unwrap();
        session.save_entry(session.draft_for("2024-02-01")).unwrap();

        let token = session.request_delete("2024-03-01").unwrap();
        session.cancel_delete(&token);
        assert!(!session.confirm_delete(&token).unwrap());

        let first = session.request_delete("2024-03-01").unwrap();
        let second = session.request_delete("2024-02-01").unwrap();
        assert!(!session.confirm_delete(&first).unwrap());
        assert_eq!(session.entries().len(), 2);
        assert!(session.confirm_delete(&second).unwrap());
        assert_eq!(session.entries()[0].date, "2024-03-01");
    }

    #[test]
    fn test_request_delete_for_missing_date() {
        let mut session = session();
        assert!(session.request_delete("2024-03-01").is_none());
    }

    #[test]
    fn test_ideas_persist_and_reset() {
        let mut session = session();
        session
            .update_ideas(|ideas| add_item(ideas, IdeasField::LearningTopics, "profiling"))
            .unwrap();

        let blob = session.store().load("ideas").unwrap().unwrap();
        assert!(blob.contains("profiling"));

        session.reset_ideas().unwrap();
        assert_eq!(session.ideas(), &IdeasState::default());
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let mut session = JournalSession::open(Box::new(ReadOnlyStore), clock());

        let result = session.save_entry(session.draft_for("2024-03-01"));

        assert!(matches!(result, Err(AppError::Storage(StorageError::Write { .. }))));
        assert_eq!(session.entries().len(), 1);
    }

    #[test]
    fn test_pages() {
        let mut session = session();
        for day in 1..=25 {
            let date = format!("2024-01-{:02}", day);
            session.save_entry(session.draft_for(&date)).unwrap();
        }

        assert_eq!(session.page_count(20), 2);
        assert_eq!(session.page(20, 1).len(), 20);
        assert_eq!(session.page(20, 1)[0].date, "2024-01-25");
        assert_eq!(session.page(20, 2).len(), 5);
        assert!(session.page(20, 3).is_empty());
        assert_eq!(session.clamp_page(20, 7), 2);
    }

    #[test]
    fn test_export_names_file_from_clock() {
        let session = session();
        let file = session.export();
        assert_eq!(file.filename, "work-journal_2024-03-02_17-30-00.csv");
    }
}
