//! High score persistence.
//!
//! A single integer survives between runs. The store is loaded once at
//! startup and written when a run ends above the previous best. Storage
//! trouble never reaches the simulation: loads degrade to zero and failed
//! writes keep the in-memory value.

use crate::error::StorageError;
use crate::utils::persistence::{read_json, save_path, write_json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// High score file name inside the game directory.
pub const HIGH_SCORE_FILE: &str = "highscore.json";

/// Get/set access to the persisted best score.
pub trait HighScoreStore {
    fn load(&mut self) -> Result<u32, StorageError>;
    fn save(&mut self, score: u32) -> Result<(), StorageError>;
}

/// On-disk shape of the high score file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub high_score: u32,
    /// Unix timestamp (seconds) of the run that set it.
    #[serde(default)]
    pub achieved_at: Option<i64>,
}

/// Stores the high score as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonHighScoreStore {
    path: PathBuf,
}

impl JsonHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at ~/.grums_lair/highscore.json.
    pub fn in_game_dir() -> Result<Self, StorageError> {
        Ok(Self::new(save_path(HIGH_SCORE_FILE)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the file so the next load starts from zero.
    pub fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl HighScoreStore for JsonHighScoreStore {
    fn load(&mut self) -> Result<u32, StorageError> {
        if !self.path.exists() {
            return Ok(0);
        }
        let record: HighScoreRecord = read_json(&self.path)?;
        Ok(record.high_score)
    }

    fn save(&mut self, score: u32) -> Result<(), StorageError> {
        let record = HighScoreRecord {
            high_score: score,
            achieved_at: Some(Utc::now().timestamp()),
        };
        write_json(&self.path, &record)
    }
}

/// Keeps the high score in memory only. Used when the home directory is
/// unavailable and as a test double.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    value: u32,
}

impl MemoryHighScoreStore {
    pub fn new(value: u32) -> Self {
        Self { value }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&mut self) -> Result<u32, StorageError> {
        Ok(self.value)
    }

    fn save(&mut self, score: u32) -> Result<(), StorageError> {
        self.value = score;
        Ok(())
    }
}

/// Load the high score, treating any storage failure as "no score yet".
pub fn load_or_zero(store: &mut dyn HighScoreStore) -> u32 {
    match store.load() {
        Ok(score) => score,
        Err(e) => {
            log::warn!("High score unavailable, starting from 0: {}", e);
            0
        }
    }
}
