//! File-backed logging.
//!
//! The terminal is in raw mode on the alternate screen while the game runs,
//! so log records go to ~/.grums_lair/grums_lair.log instead of stderr.
//! The filter comes from `RUST_LOG` and defaults to `info`.

use crate::error::StorageError;
use crate::utils::persistence::save_path;
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::path::PathBuf;

pub const LOG_FILE: &str = "grums_lair.log";

/// Install the global logger, appending to the log file. Returns the file
/// path so the caller can mention it.
pub fn init() -> Result<PathBuf, StorageError> {
    let path = save_path(LOG_FILE)?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    // A second init (e.g. from tests) keeps the first logger
    let _ = Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init();

    Ok(path)
}
