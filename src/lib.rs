/*!
# siplog

siplog is a personal drink journal: photograph a drink, record its
attributes (type, temperature, milk, price, rating, mood, tags, notes),
and browse, search, and edit the history from the command line.

## Core Features

- Log drinks with optional inline photos
- List, filter by drink type, and search entries
- Derived statistics: streaks, favorite drink, averages, monthly counts
- CSV export of the whole journal
- User preferences (default drink, reminder, display identity)

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `model`: The entry data model and its validation
- `db` / `store`: SQLite persistence and the single write path
- `filter` / `stats`: Pure derivation over entry snapshots
- `export` / `settings`: CSV export and the preferences collaborator
- `ops`: The operations behind each subcommand

## Usage Example

```rust,no_run
use siplog::{Config, EntryStore};
use siplog::model::EntryDraft;

fn main() -> siplog::AppResult<()> {
    let config = Config::load()?;
    config.ensure_data_dir()?;

    let mut store = EntryStore::open(&config.database_path())?;
    let entry = store.create(EntryDraft {
        specific_drink: "Latte".to_string(),
        ..EntryDraft::default()
    })?;
    println!("logged {}", entry.id);
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Constants used throughout the application
pub mod constants;
/// Database persistence for entries
pub mod db;
/// Error types and utilities for error handling
pub mod errors;
/// CSV export of entry snapshots
pub mod export;
/// Pure filter and search over entry snapshots
pub mod filter;
/// The entry data model
pub mod model;
/// User-facing operations behind the CLI subcommands
pub mod ops;
/// User preference collaborator
pub mod settings;
/// Pure statistics over entry snapshots
pub mod stats;
/// The entry store: the single write path
pub mod store;

// Re-export important types for convenience
pub use cli::Cli;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use model::{Entry, EntryDraft};
pub use settings::Settings;
pub use store::{ChangeEvent, EntryStore};
