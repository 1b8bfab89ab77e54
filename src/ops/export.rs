//! Writes the CSV export to disk.

use crate::errors::AppResult;
use crate::session::JournalSession;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Saves the export into `dir` under its timestamped name and returns the path.
///
/// # Errors
///
/// Returns `AppError::Io` if `dir` does not exist or the file cannot be written.
pub fn export_to_dir(session: &JournalSession, dir: &Path, out: &mut dyn Write) -> AppResult<PathBuf> {
    let file = session.export();
    let path = dir.join(&file.filename);
    fs::write(&path, file.bytes())?;

    info!(path = %path.display(), "journal exported");
    writeln!(out, "Exported to {}", path.display())?;
    Ok(path)
}
