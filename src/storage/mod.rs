//! Persistence of journal state as JSON blobs under named keys.
//!
//! The journal is stored as two opaque blobs: `entries` (a JSON array of
//! entries) and `ideas` (a JSON object). [`BlobStore`] is the seam between the
//! journal and whatever holds those blobs; [`FileBlobStore`] keeps one file per
//! key and [`MemoryBlobStore`] keeps them in a map.
//!
//! Loading never fails: a missing, unreadable or malformed blob is logged as a
//! warning and replaced with an empty default.

mod file;
mod memory;

pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;

use crate::constants::{ENTRIES_STORAGE_KEY, IDEAS_STORAGE_KEY};
use crate::errors::{AppError, AppResult, StorageError};
use crate::journal_core::{sort_descending_by_date, Entry, IdeasState};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
#[cfg(unix)]
use std::fs::Permissions;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tracing::{debug, warn};

/// A key-value store of opaque string blobs.
pub trait BlobStore {
    /// Returns the blob stored under `key`, or `None` when nothing was saved yet.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `blob` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, blob: &str) -> Result<(), StorageError>;
}

/// Keys map directly to file names, so they are limited to a safe alphabet.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey {
            key: key.to_string(),
        })
    }
}

fn load_json<T: DeserializeOwned>(store: &dyn BlobStore, key: &str) -> Option<T> {
    let blob = match store.load(key) {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            debug!(key, "no stored data, using default");
            return None;
        }
        Err(e) => {
            warn!(key, error = %e, "Failed to read stored data, using default");
            return None;
        }
    };

    if blob.trim().is_empty() {
        return None;
    }

    match serde_json::from_str(&blob) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "Failed to parse stored data, using default");
            None
        }
    }
}

fn save_json<T: Serialize + ?Sized>(
    store: &mut dyn BlobStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let blob = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
        key: key.to_string(),
        source,
    })?;
    store.save(key, &blob)?;
    debug!(key, bytes = blob.len(), "persisted blob");
    Ok(())
}

/// Hydrates the entry collection, sorted newest first.
pub fn load_entries(store: &dyn BlobStore) -> Vec<Entry> {
    load_json::<Vec<Entry>>(store, ENTRIES_STORAGE_KEY)
        .map(sort_descending_by_date)
        .unwrap_or_default()
}

/// Hydrates the ideas record.
pub fn load_ideas(store: &dyn BlobStore) -> IdeasState {
    load_json(store, IDEAS_STORAGE_KEY).unwrap_or_default()
}

pub fn save_entries(store: &mut dyn BlobStore, entries: &[Entry]) -> Result<(), StorageError> {
    save_json(store, ENTRIES_STORAGE_KEY, entries)
}

pub fn save_ideas(store: &mut dyn BlobStore, ideas: &IdeasState) -> Result<(), StorageError> {
    save_json(store, IDEAS_STORAGE_KEY, ideas)
}

/// Ensures the data directory exists, creating it if necessary.
///
/// Newly created directories get owner-only permissions on Unix.
///
/// # Errors
///
/// Returns:
/// - `AppError::Journal` if the provided path is not an absolute path
/// - `AppError::Io` if the directory creation fails due to permission issues,
///   invalid paths, or other filesystem errors
pub fn ensure_data_dir_exists(data_dir: &Path) -> AppResult<()> {
    if !data_dir.is_absolute() {
        return Err(AppError::Journal(format!(
            "Data directory path must be absolute: {}",
            data_dir.display()
        )));
    }

    if !data_dir.exists() {
        fs::create_dir_all(data_dir).map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create data directory: {}", e),
            ))
        })?;

        #[cfg(unix)]
        {
            fs::set_permissions(data_dir, Permissions::from_mode(0o700)).map_err(|e| {
                AppError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to set secure permissions on data directory: {}", e),
                ))
            })?;
            debug!("Set 0o700 permissions on data directory");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal_core::{TimeLogRecord, Todo};
    use tempfile::tempdir;

    fn sample_entries() -> Vec<Entry> {
        let mut newer = Entry::empty("2024-03-02");
        newer.todos.push(Todo::new("ship \"v2\"", true));
        newer.logs.push(TimeLogRecord::new("4h", "release, notes", "REL"));
        newer.til.push("unicode: ünïcødé".to_string());
        let mut older = Entry::empty("2024-03-01");
        older.big_theme.push("planning".to_string());
        vec![newer, older]
    }

    #[test]
    fn test_validate_key() {
        assert!(validate_key("entries").is_ok());
        assert!(validate_key("ideas_v2-backup").is_ok());
        for bad in ["", "../entries", "a/b", "a.json", "with space"] {
            assert!(
                matches!(validate_key(bad), Err(StorageError::InvalidKey { .. })),
                "key {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_entries_round_trip_exactly() {
        let mut store = MemoryBlobStore::new();
        let entries = sample_entries();

        save_entries(&mut store, &entries).unwrap();

        assert_eq!(load_entries(&store), entries);
    }

    #[test]
    fn test_ideas_round_trip() {
        let mut store = MemoryBlobStore::new();
        let ideas = IdeasState {
            improvement_ideas: vec!["a".to_string()],
            learning_topics: vec!["b".to_string(), "c".to_string()],
        };

        save_ideas(&mut store, &ideas).unwrap();

        assert_eq!(load_ideas(&store), ideas);
    }

    #[test]
    fn test_load_sorts_entries() {
        let mut store = MemoryBlobStore::new();
        store
            .save(
                "entries",
                r#"[{"date":"2024-01-01","todos":[],"logs":[],"til":[],"bigTheme":[],"majorContribution":[]},
                    {"date":"2024-02-01","todos":[],"logs":[],"til":[],"bigTheme":[],"majorContribution":[]}]"#,
            )
            .unwrap();

        let dates: Vec<String> = load_entries(&store).into_iter().map(|e| e.date).collect();
        assert_eq!(dates, vec!["2024-02-01", "2024-01-01"]);
    }

    #[test]
    fn test_missing_blobs_load_as_defaults() {
        let store = MemoryBlobStore::new();
        assert!(load_entries(&store).is_empty());
        assert_eq!(load_ideas(&store), IdeasState::default());
    }

    #[test]
    fn test_malformed_blobs_load_as_defaults() {
        let mut store = MemoryBlobStore::new();
        store.save("entries", "{not json").unwrap();
        store.save("ideas", "[1, 2, 3]").unwrap();

        assert!(load_entries(&store).is_empty());
        assert_eq!(load_ideas(&store), IdeasState::default());
    }

    #[test]
    fn test_incomplete_records_keep_history() {
        let mut store = MemoryBlobStore::new();
        store
            .save(
                "entries",
                r#"[{"date":"2024-02-01","todos":[{"text":"keep me"}]},
                    {"date":"2024-01-15","logs":[{"timeSpent":"3h","description":"x"}]}]"#,
            )
            .unwrap();

        let mut entries = load_entries(&store);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].todos, vec![Todo::new("keep me", false)]);
        assert_eq!(entries[1].logs, vec![TimeLogRecord::new("3h", "x", "")]);

        let mut today = Entry::empty("2024-03-02");
        today.todos.push(Todo::new("new", false));
        entries.insert(0, today);
        save_entries(&mut store, &entries).unwrap();

        let dates: Vec<String> = load_entries(&store).into_iter().map(|e| e.date).collect();
        assert_eq!(dates, vec!["2024-03-02", "2024-02-01", "2024-01-15"]);
    }

    #[test]
    fn test_blank_blob_loads_as_default() {
        let mut store = MemoryBlobStore::new();
        store.save("entries", "").unwrap();
        assert!(load_entries(&store).is_empty());
    }

    #[test]
    fn test_ensure_data_dir_creates_directory() {
        let temp_dir = tempdir().unwrap();
        let dir_path = temp_dir.path().join("nested").join("journal");

        assert!(!dir_path.exists());
        ensure_data_dir_exists(&dir_path).unwrap();
        assert!(dir_path.is_dir());

        #[cfg(unix)]
        {
            let mode = fs::metadata(&dir_path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o700);
        }
    }

    #[test]
    fn test_ensure_data_dir_rejects_relative_path() {
        match ensure_data_dir_exists(Path::new("relative/dir")) {
            Err(AppError::Journal(msg)) => assert!(msg.contains("must be absolute")),
            _ => panic!("Expected Journal error for relative path"),
        }
    }
}
