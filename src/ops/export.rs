//! CSV export of the whole journal.

use crate::errors::AppResult;
use crate::export;
use crate::store::EntryStore;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

/// Writes the full entry snapshot as CSV to a file, or to stdout when no
/// output path is given.
///
/// Rows appear in the same order as `list`: newest first.
///
/// # Errors
///
/// Returns an error if the store read fails or the output cannot be
/// written.
pub fn export_entries(store: &EntryStore, output: Option<PathBuf>) -> AppResult<()> {
    let entries = store.all()?;

    match output {
        Some(path) => {
            let mut file = File::create(&path)?;
            export::write_csv(&entries, &mut file)?;
            file.flush()?;
            info!("Exported {} entries to {:?}", entries.len(), path);
            println!("Exported {} entries to {}", entries.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            export::write_csv(&entries, &mut handle)?;
        }
    }

    Ok(())
}
