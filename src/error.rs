//! Error types for the storage and configuration layers.
//!
//! The simulation itself has no failure modes; only the collaborators that
//! touch the filesystem can fail.

use std::io;
use thiserror::Error;

/// Failure while reading or writing a file under the game directory.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not determine home directory")]
    NoHomeDir,

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

/// A configuration value that would break the simulation's invariants.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    #[error("gap of {gap_height} with {min_edge} margins does not fit a field {field_height} tall")]
    GapDoesNotFit {
        gap_height: f64,
        min_edge: f64,
        field_height: f64,
    },

    #[error("avatar of height {avatar_height} does not fit a gap of {gap_height}")]
    AvatarDoesNotFitGap { avatar_height: f64, gap_height: f64 },

    #[error("impulse velocity must point upward (negative), got {0}")]
    ImpulseNotUpward(f64),

    #[error("ticks_per_second must be at least 1")]
    ZeroTickRate,

    #[error("death delay of {death_delay_ms} ms at {ticks_per_second} ticks/s is too long")]
    DeathDelayTooLong {
        death_delay_ms: u64,
        ticks_per_second: u32,
    },
}
