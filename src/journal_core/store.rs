//! Operations over a collection of dated entries.
//!
//! All functions take the collection by value or reference and return the new
//! collection; none of them keep state between calls. The date is the
//! collection's primary key and the conventional order is newest first.

use super::entry::Entry;
use tracing::debug;

/// Sorts entries newest first.
///
/// Dates are ISO-8601 strings, so reverse lexicographic order is reverse
/// chronological order without any calendar parsing. Sorting is stable and
/// idempotent.
pub fn sort_descending_by_date(mut entries: Vec<Entry>) -> Vec<Entry> {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries
}

/// Inserts or replaces `new_entry`, keyed by date.
///
/// Resolution order:
/// 1. An entry already stored at `new_entry.date` is overwritten in place.
///    When this happens while editing an entry whose date changed, the edited
///    original is dropped as well, so the collision target wins and nothing is
///    merged.
/// 2. Otherwise, when editing (`original_key` is set) and the original is still
///    present, it is replaced, which renames its date.
/// 3. Otherwise the entry is prepended.
///
/// The result is always sorted newest first.
///
/// # Examples
///
/// ```
/// use workjournal::journal_core::{upsert, Entry};
///
/// let entries = vec![Entry::empty("2024-01-02"), Entry::empty("2024-01-01")];
///
/// let mut edited = Entry::empty("2024-01-02");
/// edited.til.push("moved".to_string());
///
/// let entries = upsert(entries, edited, Some("2024-01-01"));
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].til, vec!["moved".to_string()]);
/// ```
pub fn upsert(mut entries: Vec<Entry>, new_entry: Entry, original_key: Option<&str>) -> Vec<Entry> {
    if let Some(existing) = entries.iter().position(|e| e.date == new_entry.date) {
        debug!(date = %new_entry.date, "overwriting entry with matching date");
        let target_date = new_entry.date.clone();
        entries[existing] = new_entry;
        if let Some(original) = original_key.filter(|key| *key != target_date) {
            debug!(original = %original, "dropping edited entry after date collision");
            entries.retain(|e| e.date != original);
        }
        return sort_descending_by_date(entries);
    }

    if let Some(original) = original_key {
        if let Some(editing) = entries.iter().position(|e| e.date == original) {
            debug!(from = %original, to = %new_entry.date, "re-keying edited entry");
            entries[editing] = new_entry;
            return sort_descending_by_date(entries);
        }
    }

    debug!(date = %new_entry.date, "adding new entry");
    entries.insert(0, new_entry);
    sort_descending_by_date(entries)
}

/// Removes the entry stored at `date`. Unknown dates are a no-op.
pub fn remove(mut entries: Vec<Entry>, date: &str) -> Vec<Entry> {
    entries.retain(|e| e.date != date);
    entries
}

/// Makes a fully independent copy of `entry` for editing.
///
/// Every nested list is copied, so changes to the clone never reach the
/// stored original until it is committed through [`upsert`].
pub fn clone_entry(entry: &Entry) -> Entry {
    entry.clone()
}

/// Looks up the entry stored at `date`.
pub fn find<'a>(entries: &'a [Entry], date: &str) -> Option<&'a Entry> {
    entries.iter().find(|e| e.date == date)
}
