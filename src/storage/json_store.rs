//! JSON file storage for the address book.

use super::BookStore;
use crate::error::StorageResult;
use crate::models::AddressBook;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stores the whole address book as a JSON array of records.
///
/// The schema is the book's serde form: one object per record with
/// `name`, optional `phones`, and optional `birthday` (`DD.MM.YYYY`).
/// Field values are re-validated on load, so a hand-edited file with
/// malformed data fails the load instead of smuggling bad values in.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> StorageResult<AddressBook> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "book file absent, starting empty");
            return Ok(AddressBook::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let book = serde_json::from_str(&contents)?;
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let contents = serde_json::to_string_pretty(book)?;
        fs::write(&self.path, contents)?;
        debug!(path = %self.path.display(), records = book.len(), "book saved");
        Ok(())
    }
}
