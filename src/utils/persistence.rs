//! JSON persistence helpers for files under ~/.grums_lair/.

use crate::error::StorageError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-user game directory inside $HOME.
pub const GAME_DIR_NAME: &str = ".grums_lair";

/// Get the ~/.grums_lair/ directory path, creating it if needed.
pub fn game_dir() -> Result<PathBuf, StorageError> {
    let home_dir = dirs::home_dir().ok_or(StorageError::NoHomeDir)?;
    let dir = home_dir.join(GAME_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.grums_lair/.
pub fn save_path(filename: &str) -> Result<PathBuf, StorageError> {
    Ok(game_dir()?.join(filename))
}

/// Load a JSON file from ~/.grums_lair/, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + DeserializeOwned>(filename: &str) -> T {
    match save_path(filename) {
        Ok(path) => read_json(&path).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// Read and parse a JSON file at an explicit path.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Write a value as pretty-printed JSON, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "grums_lair_persistence_{}_{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_write_and_read_roundtrip() {
        let dir = scratch_dir("roundtrip");
        let path = dir.join("values.json");
        let data = vec![3u32, 1, 4];

        write_json(&path, &data).expect("write should succeed");
        let loaded: Vec<u32> = read_json(&path).expect("read should succeed");
        assert_eq!(loaded, data);

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = scratch_dir("nested");
        let path = dir.join("a").join("b").join("value.json");

        write_json(&path, &7u32).expect("write should succeed");
        assert!(path.exists());

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = scratch_dir("missing");
        let result: Result<u32, _> = read_json(&dir.join("nope.json"));
        assert!(matches!(result, Err(StorageError::Io(_))));

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_read_garbage_is_json_error() {
        let dir = scratch_dir("garbage");
        let path = dir.join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let result: Result<u32, _> = read_json(&path);
        assert!(matches!(result, Err(StorageError::Json(_))));

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_load_missing_returns_default() {
        let val: Vec<String> = load_json_or_default("nonexistent_test_file_12345.json");
        assert!(val.is_empty());
    }
}
