//! File-backed string-list store.
//!
//! A minimal persistence helper holding an ordered list of strings in a
//! plain file, one JSON-encoded string per line. The encoding keeps embedded
//! newlines intact across a round-trip.
//!
//! [`save_one`](FileStringStore::save_one) appends within a single file
//! acquisition (the handle is released on every exit path when it drops),
//! so concurrent appenders cannot lose each other's entries the way a
//! load-modify-save cycle would.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// An ordered list of strings persisted to a single file.
pub struct FileStringStore {
    path: PathBuf,
}

impl FileStringStore {
    /// Open a store at `path`, creating an empty backing file when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the file cannot be created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let store = Self { path: path.into() };
        if !store.path.exists() {
            store.save_all(&[])?;
        }
        Ok(store)
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full stored sequence, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] on read failure or
    /// [`StorageError::Json`] when a line cannot be decoded.
    pub fn load(&self) -> Result<Vec<String>, StorageError> {
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut items = Vec::new();
        for line in reader.lines() {
            items.push(serde_json::from_str(&line?)?);
        }
        Ok(items)
    }

    /// Overwrite the entire stored sequence.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] on write failure.
    pub fn save_all(&self, items: &[String]) -> Result<(), StorageError> {
        let mut file = File::create(&self.path)?;
        for item in items {
            writeln!(file, "{}", serde_json::to_string(item)?)?;
        }
        Ok(())
    }

    /// Append one item to the stored sequence.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] on write failure.
    pub fn save_one(&self, item: &str) -> Result<(), StorageError> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        writeln!(file, "{}", serde_json::to_string(item)?)?;
        Ok(())
    }
}
