//! Whole-book persistence.
//!
//! The book is loaded once at startup and written once at shutdown.
//! The trait abstracts over the storage backend so tests can swap in
//! an in-memory implementation.

pub mod json_store;

pub use json_store::JsonFileStore;

use crate::error::StorageResult;
use crate::models::AddressBook;

/// Storage backend for the address book.
pub trait BookStore {
    /// Load the whole book. A missing backing store yields an empty
    /// book, not an error.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Persist the whole book, replacing any previous state.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
