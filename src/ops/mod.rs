//! High-level operations behind each CLI subcommand.
//!
//! Handlers take the open [`JournalSession`](crate::session::JournalSession)
//! and write their human-readable output to a caller-supplied writer, so the
//! same code serves the binary and the tests.

pub mod entries;
pub mod export;
pub mod ideas;

pub use entries::{add_items, delete_entry, edit_entry, list_entries, show_entry, show_total, toggle_todo};
pub use export::export_to_dir;
pub use ideas::{add_idea, list_ideas, remove_idea, reset_ideas, update_idea};
