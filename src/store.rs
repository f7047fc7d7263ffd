//! Trivial JSON-file persistence.
//!
//! One `<key>.json` file per key in a fixed directory. Failures are logged
//! and swallowed: `read` yields `None` and `write` yields `false`, so
//! callers never handle I/O errors themselves.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// Internal store error, surfaced only through log lines.
#[derive(Debug, Error)]
enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key/value store backed by a directory of JSON files.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Creates a store over `dir`. The directory is created lazily on the
    /// first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory backing this store.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Reads and parses the value stored under `key`.
    ///
    /// Returns `None` when the file is absent, unreadable, or not valid
    /// JSON; the cause is logged, never propagated.
    #[must_use]
    pub fn read(&self, key: &str) -> Option<Value> {
        match self.try_read(key) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::error!(key, %err, "failed to read from store");
                None
            }
        }
    }

    /// Writes `value` under `key`, creating the directory if needed.
    ///
    /// Returns `false` on failure; the cause is logged, never propagated.
    pub fn write(&self, key: &str, value: &Value) -> bool {
        match self.try_write(key, value) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(key, %err, "failed to write to store");
                false
            }
        }
    }

    fn try_read(&self, key: &str) -> Result<Value, StoreError> {
        let raw = fs::read_to_string(self.path_for(key))?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn try_write(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let raw = serde_json::to_string_pretty(value)?;
        fs::write(self.path_for(key), raw)?;
        Ok(())
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

// ============================================================================
// Tests
// ============================================================================
