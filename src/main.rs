/*!
# Workjournal - A Local Work Journal

Workjournal keeps one entry per day with todos, time logs, and learnings, plus
two standing lists of improvement ideas and learning topics. Everything is
stored as JSON in a local data directory.

This file contains the main application flow: logging setup, argument
parsing, configuration, and dispatch to the handlers in `workjournal::ops`.

## Usage

```
workjournal [OPTIONS] [COMMAND]

Commands:
  list    List entries, newest first
  show    Show a single entry
  add     Append items to an entry, creating it if needed
  edit    Change the date of an entry or clear its content
  toggle  Flip the completion state of a todo
  delete  Delete an entry
  total   Show the total logged time of an entry
  ideas   Manage improvement ideas and learning topics
  export  Export all entries and ideas to a CSV file

Options:
  -v, --verbose         Print verbose output
      --data-dir <DIR>  Directory holding the journal data (overrides WORKJOURNAL_DIR)
  -h, --help            Print help
  -V, --version         Print version
```

## Configuration

- `WORKJOURNAL_DIR`: The directory holding the journal data (defaults to "~/.local/share/workjournal")
- `WORKJOURNAL_PAGE_SIZE`: Entries per page in `list` (defaults to 20)
- `WORKJOURNAL_LOG_FORMAT`: `text` or `json` log output on stderr (defaults to `json` when `CI` is set)
- `RUST_LOG`: Overrides the log filter
*/

use clap::Parser;
use std::env;
use std::io::{self, Write};
use tracing::{debug, info, info_span, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;
use workjournal::cli::prompt::prompt_yes_no;
use workjournal::cli::{CliArgs, Command, IdeasCommand};
use workjournal::config::Config;
use workjournal::constants::{
    DEFAULT_LOG_LEVEL, ENV_VAR_CI, ENV_VAR_WORKJOURNAL_LOG_FORMAT, LOG_FORMAT_JSON,
    LOG_FORMAT_TEXT, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME,
};
use workjournal::errors::AppResult;
use workjournal::journal_core::SystemClock;
use workjournal::ops;
use workjournal::session::JournalSession;
use workjournal::storage::{self, FileBlobStore};

/// Installs the global tracing subscriber. Logs always go to stderr so they
/// never mix with command output.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { DEFAULT_LOG_LEVEL };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let requested_format = env::var(ENV_VAR_WORKJOURNAL_LOG_FORMAT).ok();
    let use_json = match requested_format.as_deref() {
        Some(format) => format.eq_ignore_ascii_case(LOG_FORMAT_JSON),
        None => env::var(ENV_VAR_CI).is_ok(),
    };

    let registry = tracing_subscriber::registry().with(filter);
    if use_json {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(io::stderr))
            .init();
    }

    if let Some(format) = requested_format {
        if !format.eq_ignore_ascii_case(LOG_FORMAT_JSON)
            && !format.eq_ignore_ascii_case(LOG_FORMAT_TEXT)
        {
            warn!(format = %format, "unknown log format, using text");
        }
    }
}

fn confirm_or_prompt(skip: bool) -> impl FnMut(&str) -> AppResult<bool> {
    move |question: &str| {
        if skip {
            Ok(true)
        } else {
            prompt_yes_no(question, false)
        }
    }
}

/// The main entry point for the workjournal application.
///
/// This function coordinates the overall application flow:
/// 1. Parses command-line arguments
/// 2. Initializes logging
/// 3. Loads and validates configuration
/// 4. Ensures the data directory exists
/// 5. Hydrates the journal session from the data directory
/// 6. Runs the requested command
///
/// # Errors
///
/// This function can return various types of errors, including:
/// - Configuration errors (invalid data directory or page size)
/// - I/O errors (data directory or export file not writable)
/// - Journal logic errors (invalid date, missing entry or item)
/// - Storage errors (blob could not be written)
fn main() -> AppResult<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %Uuid::new_v4()
    );
    let _guard = span.enter();

    info!("Starting workjournal");
    debug!("CLI arguments: {:?}", args);

    let mut config = Config::load()?;
    if let Some(dir) = args.data_dir.as_deref() {
        config = config.with_data_dir(dir)?;
    }
    config.validate()?;
    debug!("Configuration: {:?}", config);

    storage::ensure_data_dir_exists(&config.data_dir)?;

    let mut session = JournalSession::open(
        Box::new(FileBlobStore::new(&config.data_dir)),
        Box::new(SystemClock),
    );

    let mut out = io::stdout();
    let command = args.command.unwrap_or(Command::List { page: 1 });

    match command {
        Command::List { page } => ops::list_entries(&session, config.page_size, page, &mut out)?,
        Command::Show { date } => ops::show_entry(&session, date.as_deref(), &mut out)?,
        Command::Add(add) => ops::add_items(&mut session, &add, &mut out)?,
        Command::Edit {
            date,
            new_date,
            clear,
        } => ops::edit_entry(
            &mut session,
            date.as_deref(),
            new_date.as_deref(),
            clear,
            &mut out,
        )?,
        Command::Toggle { date, index } => {
            ops::toggle_todo(&mut session, date.as_deref(), index, &mut out)?
        }
        Command::Delete { date, yes } => {
            let mut confirm = confirm_or_prompt(yes);
            ops::delete_entry(&mut session, &date, &mut confirm, &mut out)?
        }
        Command::Total { date } => ops::show_total(&session, date.as_deref(), &mut out)?,
        Command::Ideas { action } => match action {
            IdeasCommand::List => ops::list_ideas(&session, &mut out)?,
            IdeasCommand::Add { list, text } => {
                ops::add_idea(&mut session, list.into(), &text, &mut out)?
            }
            IdeasCommand::Update { list, index, text } => {
                ops::update_idea(&mut session, list.into(), index, &text, &mut out)?
            }
            IdeasCommand::Remove { list, index } => {
                ops::remove_idea(&mut session, list.into(), index, &mut out)?
            }
            IdeasCommand::Reset { yes } => {
                let mut confirm = confirm_or_prompt(yes);
                ops::reset_ideas(&mut session, &mut confirm, &mut out)?
            }
        },
        Command::Export { output } => {
            let dir = match output {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            ops::export_to_dir(&session, &dir, &mut out)?;
        }
    }

    out.flush()?;
    info!("Done");
    Ok(())
}
