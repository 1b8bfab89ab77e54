//! Operations on the improvement-ideas and learning-topics lists.

use crate::cli::to_index;
use crate::errors::{AppError, AppResult};
use crate::journal_core::{add_item, remove_item, update_item, IdeasField};
use crate::session::JournalSession;
use std::io::Write;

/// Maps a 1-indexed position onto an existing item of `field`.
fn existing_index(session: &JournalSession, field: IdeasField, position: usize) -> AppResult<usize> {
    let index = to_index(position)?;
    if index >= session.ideas().items(field).len() {
        return Err(AppError::Journal(format!(
            "No item #{} in {}",
            position,
            field.label()
        )));
    }
    Ok(index)
}

/// Prints both lists with 1-indexed positions.
pub fn list_ideas(session: &JournalSession, out: &mut dyn Write) -> AppResult<()> {
    for (n, field) in IdeasField::ALL.into_iter().enumerate() {
        if n > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}:", field.label())?;
        let items = session.ideas().items(field);
        if items.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for (i, item) in items.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, item)?;
        }
    }
    Ok(())
}

pub fn add_idea(
    session: &mut JournalSession,
    field: IdeasField,
    text: &str,
    out: &mut dyn Write,
) -> AppResult<()> {
    session.update_ideas(|ideas| add_item(ideas, field, text))?;
    let count = session.ideas().items(field).len();
    writeln!(out, "Added #{} to {}", count, field.label())?;
    Ok(())
}

pub fn update_idea(
    session: &mut JournalSession,
    field: IdeasField,
    position: usize,
    text: &str,
    out: &mut dyn Write,
) -> AppResult<()> {
    let index = existing_index(session, field, position)?;
    session.update_ideas(|ideas| update_item(ideas, field, index, text))?;
    writeln!(out, "Updated #{} in {}", position, field.label())?;
    Ok(())
}

pub fn remove_idea(
    session: &mut JournalSession,
    field: IdeasField,
    position: usize,
    out: &mut dyn Write,
) -> AppResult<()> {
    let index = existing_index(session, field, position)?;
    session.update_ideas(|ideas| remove_item(ideas, field, index))?;
    writeln!(out, "Removed #{} from {}", position, field.label())?;
    Ok(())
}

/// Empties both lists once `confirm` agrees.
pub fn reset_ideas(
    session: &mut JournalSession,
    confirm: &mut dyn FnMut(&str) -> AppResult<bool>,
    out: &mut dyn Write,
) -> AppResult<()> {
    if !confirm("Clear all improvement ideas and learning topics?")? {
        writeln!(out, "Ideas left unchanged")?;
        return Ok(());
    }
    session.reset_ideas()?;
    writeln!(out, "Cleared all ideas")?;
    Ok(())
}
