//! Entry operations: listing, showing, adding to, editing, toggling and
//! deleting journal entries.

use crate::cli::{parse_date_arg, parse_log_arg, to_index, AddArgs};
use crate::errors::{AppError, AppResult};
use crate::journal_core::{
    format_duration, group_by_project, is_full_day_displayed, total_time, BulletField, Entry,
    EntryDraft, Todo,
};
use crate::session::JournalSession;
use std::io::Write;
use tracing::{debug, info};

/// Resolves an optional date argument, falling back to the session's today.
fn date_or_today(session: &JournalSession, date: Option<&str>) -> AppResult<String> {
    match date {
        Some(raw) => parse_date_arg(raw),
        None => Ok(session.today()),
    }
}

fn total_label(entry: &Entry) -> String {
    let total = format_duration(total_time(&entry.logs));
    if is_full_day_displayed(&entry.logs) {
        format!("{} (full day)", total)
    } else {
        total
    }
}

fn write_entry(out: &mut dyn Write, entry: &Entry) -> AppResult<()> {
    writeln!(out, "== {} ==  {}", entry.date, total_label(entry))?;

    if !entry.todos.is_empty() {
        writeln!(out, "Todos:")?;
        for (i, todo) in entry.todos.iter().enumerate() {
            let mark = if todo.completed { 'x' } else { ' ' };
            writeln!(out, "  {}. [{}] {}", i + 1, mark, todo.text)?;
        }
    }

    if !entry.logs.is_empty() {
        writeln!(out, "Time logs:")?;
        for group in group_by_project(&entry.logs) {
            writeln!(out, "  {}", group.label)?;
            for log in group.logs {
                writeln!(out, "    {:>6}  {}", log.time_spent, log.description)?;
            }
        }
    }

    for field in BulletField::ALL {
        let bullets = entry.bullets(field);
        if bullets.is_empty() {
            continue;
        }
        writeln!(out, "{}:", field.label())?;
        for bullet in bullets {
            writeln!(out, "  - {}", bullet)?;
        }
    }

    Ok(())
}

/// Prints one page of entry summaries, newest first.
///
/// Page numbers past either end are clamped to the nearest existing page.
pub fn list_entries(
    session: &JournalSession,
    page_size: usize,
    page: usize,
    out: &mut dyn Write,
) -> AppResult<()> {
    if session.entries().is_empty() {
        writeln!(out, "No entries yet.")?;
        return Ok(());
    }

    let page = session.clamp_page(page_size, page);
    for entry in session.page(page_size, page) {
        let done = entry.todos.iter().filter(|t| t.completed).count();
        writeln!(
            out,
            "{}  {:<16}  {}/{} todos",
            entry.date,
            total_label(entry),
            done,
            entry.todos.len()
        )?;
    }

    let pages = session.page_count(page_size);
    if pages > 1 {
        writeln!(
            out,
            "Page {} of {} ({} entries)",
            page,
            pages,
            session.entries().len()
        )?;
    }
    Ok(())
}

/// Prints the full entry for `date` (default today).
pub fn show_entry(session: &JournalSession, date: Option<&str>, out: &mut dyn Write) -> AppResult<()> {
    let date = date_or_today(session, date)?;
    match session.entry(&date) {
        Some(entry) => write_entry(out, entry),
        None => {
            writeln!(out, "No entry for {}", date)?;
            Ok(())
        }
    }
}

/// Prints the total logged time for `date` (default today).
pub fn show_total(session: &JournalSession, date: Option<&str>, out: &mut dyn Write) -> AppResult<()> {
    let date = date_or_today(session, date)?;
    let label = match session.entry(&date) {
        Some(entry) => total_label(entry),
        None => format_duration(0.0),
    };
    writeln!(out, "{}: {}", date, label)?;
    Ok(())
}

/// Appends the items in `args` to the entry for its date, creating the entry
/// when the date has none.
///
/// # Errors
///
/// Returns `AppError::Journal` when no item was given or the date is invalid,
/// and any persistence error from saving.
pub fn add_items(session: &mut JournalSession, args: &AddArgs, out: &mut dyn Write) -> AppResult<()> {
    if args.is_empty() {
        return Err(AppError::Journal(
            "Nothing to add: pass --todo, --done, --log, --til, --theme or --contribution"
                .to_string(),
        ));
    }

    let date = date_or_today(session, args.date.as_deref())?;
    let mut draft = session.draft_for(&date);

    for text in &args.todos {
        draft.add_todo(text.as_str());
    }
    for text in &args.done {
        let index = draft.entry().todos.len();
        draft.add_todo(text.as_str());
        draft.set_todo_completed(index, true);
    }
    for raw in &args.logs {
        draft.add_log(parse_log_arg(raw));
    }
    let bullets = [
        (BulletField::Til, &args.til),
        (BulletField::BigTheme, &args.themes),
        (BulletField::MajorContribution, &args.contributions),
    ];
    for (field, values) in bullets {
        for value in values {
            draft.add_bullet(field, value.as_str());
        }
    }

    debug!(date = %date, "adding items");
    session.save_entry(draft)?;
    writeln!(out, "Saved entry for {}", date)?;
    Ok(())
}

/// Re-dates or clears an existing entry (default: the newest one).
///
/// Moving onto a date that already has an entry overwrites that entry.
pub fn edit_entry(
    session: &mut JournalSession,
    date: Option<&str>,
    new_date: Option<&str>,
    clear: bool,
    out: &mut dyn Write,
) -> AppResult<()> {
    if new_date.is_none() && !clear {
        return Err(AppError::Journal(
            "Nothing to change: pass --new-date or --clear".to_string(),
        ));
    }

    let mut draft = match date {
        Some(raw) => {
            let date = parse_date_arg(raw)?;
            let entry = session
                .entry(&date)
                .ok_or_else(|| AppError::Journal(format!("No entry for {}", date)))?;
            EntryDraft::edit(entry)
        }
        None => EntryDraft::edit_latest(session.entries())
            .ok_or_else(|| AppError::Journal("No entries to edit".to_string()))?,
    };

    if clear {
        draft.clear();
    }
    if let Some(raw) = new_date {
        let next = parse_date_arg(raw)?;
        if draft.original_key() != Some(next.as_str()) && session.entry(&next).is_some() {
            info!(date = %next, "edit replaces an existing entry");
            writeln!(out, "Replacing existing entry for {}", next)?;
        }
        draft.set_date(next);
    }

    let saved = draft.date().to_string();
    session.save_entry(draft)?;
    writeln!(out, "Saved entry for {}", saved)?;
    Ok(())
}

/// Flips todo `position` (1-indexed) on the entry for `date` (default today).
pub fn toggle_todo(
    session: &mut JournalSession,
    date: Option<&str>,
    position: usize,
    out: &mut dyn Write,
) -> AppResult<()> {
    let date = date_or_today(session, date)?;
    let index = to_index(position)?;
    let completed = session.toggle_todo(&date, index)?;
    let todo: Option<&Todo> = session.entry(&date).and_then(|e| e.todos.get(index));
    let text = todo.map(|t| t.text.as_str()).unwrap_or_default();
    let state = if completed { "done" } else { "open" };
    writeln!(out, "Todo #{} ({}) is now {}", position, text, state)?;
    Ok(())
}

/// Deletes the entry for `date` once `confirm` agrees.
///
/// `confirm` receives the question to ask and returns the answer.
pub fn delete_entry(
    session: &mut JournalSession,
    date: &str,
    confirm: &mut dyn FnMut(&str) -> AppResult<bool>,
    out: &mut dyn Write,
) -> AppResult<()> {
    let date = parse_date_arg(date)?;
    let token = session
        .request_delete(&date)
        .ok_or_else(|| AppError::Journal(format!("No entry for {}", date)))?;

    if confirm(&format!("Delete the entry for {}?", date))? {
        session.confirm_delete(&token)?;
        writeln!(out, "Deleted entry for {}", date)?;
    } else {
        session.cancel_delete(&token);
        writeln!(out, "Kept entry for {}", date)?;
    }
    Ok(())
}
