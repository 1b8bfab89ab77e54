/*!
# Workjournal

Workjournal is a local, single-user work journal. Each calendar day gets one
entry holding todos, time logs tagged with project codes, and three bullet
lists (today-I-learned, big themes, major contributions). Two standing lists
of improvement ideas and learning topics live alongside the entries.

## Core Features

- Create and edit the entry for any date, keyed by its ISO date
- Human duration tokens (`1.5h`, `45m`, `1d`) summed into daily totals
- Per-project grouping of time logs and a full-workday indicator
- Paginated listing, newest entry first
- CSV export of every entry and both idea lists
- JSON persistence under two storage keys, `entries` and `ideas`

## Architecture

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `journal_core`: Entry model and pure journal logic, free of I/O
- `storage`: Key-value blob persistence (file-backed and in-memory)
- `export`: CSV rendering
- `session`: Owned journal state bound to a store and a clock
- `ops`: High-level operations behind each subcommand

## Usage Example

```rust,no_run
use workjournal::journal_core::SystemClock;
use workjournal::session::JournalSession;
use workjournal::storage::{self, FileBlobStore};
use workjournal::Config;

fn main() -> workjournal::AppResult<()> {
    let config = Config::load()?;
    config.validate()?;
    storage::ensure_data_dir_exists(&config.data_dir)?;

    let mut session = JournalSession::open(
        Box::new(FileBlobStore::new(&config.data_dir)),
        Box::new(SystemClock),
    );

    let mut draft = session.draft_today();
    draft.add_todo("review the release checklist");
    session.save_entry(draft)
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// CSV export of entries and ideas
pub mod export;
/// Entry model and pure journal logic
pub mod journal_core;
/// Handlers behind each CLI subcommand
pub mod ops;
/// Journal state bound to persistence and a clock
pub mod session;
/// Key-value blob persistence
pub mod storage;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
