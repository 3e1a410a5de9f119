/*!
# siplog - A Personal Drink Journal

siplog is a command-line tool for keeping a journal of the drinks you
have: coffees, matchas, and everything else, with attributes, photos,
derived statistics, and CSV export.

This file contains the main application flow, coordinating the various
components to implement the journal functionality.

## Usage

```
siplog <COMMAND>

Commands:
  add       Log a new drink
  list      List entries, newest first
  show      Show a single entry in full
  edit      Rewrite fields of an existing entry
  delete    Delete an entry
  clear     Delete every entry
  stats     Show derived statistics
  export    Export every entry as CSV
  settings  Show or change user settings
```

## Configuration

The application can be configured with the following environment variables:
- `SIPLOG_DIR`: The directory holding the entry database and settings
  (defaults to "~/.local/share/siplog")
- `RUST_LOG`: Log filter for diagnostic output (e.g. "siplog=debug")
*/

use chrono::Utc;
use clap::Parser;
use siplog::cli::{Cli, Command, SettingsCommand};
use siplog::config::Config;
use siplog::errors::AppResult;
use siplog::ops;
use siplog::settings::Settings;
use siplog::store::EntryStore;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// The main entry point for the siplog application.
///
/// This function coordinates the overall application flow:
/// 1. Parses command-line arguments
/// 2. Initializes logging
/// 3. Loads and validates configuration
/// 4. Opens the entry store and loads settings
/// 5. Dispatches to the requested operation
///
/// # Errors
///
/// This function can return various types of errors, including:
/// - Configuration errors (missing or invalid configuration)
/// - I/O errors (file not found, permission denied, etc.)
/// - Validation errors (rejected field values)
/// - Database errors (storage failure, unknown entry id)
fn main() -> AppResult<()> {
    // Obtain the current date/time once at the beginning so every
    // computation in this invocation agrees on "now"
    let current_datetime = Utc::now();
    let today = current_datetime.date_naive();

    let args = Cli::parse();

    // Diagnostics go to stderr so stdout stays clean for command output
    let filter = if args.verbose {
        EnvFilter::new("siplog=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting siplog");

    let config = Config::load()?;
    config.validate()?;
    config.ensure_data_dir()?;
    debug!("Data directory: {:?}", config.data_dir);

    let mut store = EntryStore::open(&config.database_path())?;
    let mut settings = Settings::load(&config.settings_path())?;

    match args.command {
        Command::Add(add_args) => {
            ops::add_entry(&mut store, &settings, add_args)?;
        }
        Command::List(list_args) => {
            ops::list_entries(&store, list_args)?;
        }
        Command::Show(show_args) => {
            ops::show_entry(&store, show_args)?;
        }
        Command::Edit(edit_args) => {
            ops::edit_entry(&mut store, edit_args)?;
        }
        Command::Delete { id } => {
            ops::delete_entry(&mut store, &id)?;
        }
        Command::Clear { yes } => {
            ops::clear_entries(&mut store, yes)?;
        }
        Command::Stats => {
            ops::show_stats(&store, today)?;
        }
        Command::Export { output } => {
            ops::export_entries(&store, output)?;
        }
        Command::Settings(settings_command) => match settings_command {
            SettingsCommand::Show => {
                ops::show_settings(&settings);
            }
            SettingsCommand::Set(set_args) => {
                ops::set_settings(&mut settings, &config.settings_path(), set_args)?;
            }
        },
    }

    debug!("Done");
    Ok(())
}
