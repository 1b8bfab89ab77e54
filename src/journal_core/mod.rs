//! Core journal functionality without I/O operations.
//!
//! This module contains the entry data model and every computation derived
//! from it: duration parsing, sorting and upserting entries by date, time
//! aggregation, pagination, the ideas lists, and edit-isolated drafts. Nothing
//! here touches the filesystem; persistence lives in [`crate::storage`].

pub mod aggregate;
pub mod clock;
pub mod draft;
pub mod entry;
pub mod ideas;
pub mod paginate;
pub mod store;
pub mod time;

pub use aggregate::{group_by_project, is_full_day, is_full_day_displayed, total_time, ProjectGroup};
pub use clock::{Clock, FixedClock, SystemClock};
pub use draft::EntryDraft;
pub use entry::{BulletField, Entry, LogField, TimeLogRecord, Todo};
pub use ideas::{add_item, remove_item, update_item, IdeasField, IdeasState};
pub use paginate::{clamp_page, page_count, paginate};
pub use store::{clone_entry, find, remove, sort_descending_by_date, upsert};
pub use time::{format_duration, parse_duration};
