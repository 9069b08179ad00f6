//! Collection slot persistence
//!
//! Saves and loads the book collection as a JSON array in a single file
//! under the configured data directory. Uses atomic writes (write to temp
//! file, then rename) so a crash mid-write cannot corrupt the slot.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::models::Book;
use crate::storage::error::{StorageError, StorageResult};

/// Persistence handler for the collection slot
pub struct ShelfPersistence {
    config: Config,
}

impl ShelfPersistence {
    /// Create a new persistence handler with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check if a collection exists on disk
    pub fn exists(&self) -> bool {
        self.config.books_path().exists()
    }

    /// Write the entire collection to the slot, replacing prior contents
    pub fn save(&self, books: &[Book]) -> StorageResult<()> {
        let bytes = serde_json::to_vec_pretty(books).map_err(StorageError::Serialize)?;
        atomic_write(&self.config.books_path(), &bytes)
    }

    /// Read the collection from the slot
    ///
    /// Returns `None` when the slot does not exist yet. Returns an error
    /// when the slot exists but cannot be read or parsed.
    pub fn load(&self) -> StorageResult<Option<Vec<Book>>> {
        let path = self.config.books_path();

        if !path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(&path).map_err(|e| StorageError::read(e, path.clone()))?;

        let books: Vec<Book> =
            serde_json::from_str(&content).map_err(|source| StorageError::Parse {
                path: path.clone(),
                source,
            })?;

        Ok(Some(books))
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file onto the target path
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StorageError::CreateDirectory {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    // Temp file lives in the same directory so the rename stays atomic
    let temp_path = path.with_extension("tmp");

    let mut file =
        File::create(&temp_path).map_err(|e| StorageError::write(e, temp_path.clone()))?;

    file.write_all(data)
        .map_err(|e| StorageError::write(e, temp_path.clone()))?;

    file.sync_all()
        .map_err(|e| StorageError::write(e, temp_path.clone()))?;

    fs::rename(&temp_path, path).map_err(|source| StorageError::AtomicWriteFailed {
        from: temp_path,
        to: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
