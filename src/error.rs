//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Domain field validation errors live in [`crate::domain::errors`]; everything here
//! wraps or sits above them.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors surfaced by address book and record operations.
///
/// Validation failures come from field construction; the NotFound
/// variants cover operations whose caller asserted presence. Lookups
/// where absence is a normal outcome (`AddressBook::find`) return
/// `Option` instead.
#[derive(Error, Debug)]
pub enum BookError {
    /// A field failed format validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A phone number was required to exist but is absent
    #[error("Phone number {0} not found")]
    PhoneNotFound(String),

    /// A record was required to exist but is absent
    #[error("Record with name {0} not found")]
    RecordNotFound(String),
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the book file failed
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// The book file does not contain a valid serialized book
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors produced by the command layer.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The command word was recognized but its arguments are incomplete
    #[error("Not enough arguments provided")]
    NotEnoughArguments,

    /// An underlying book operation failed
    #[error(transparent)]
    Book(#[from] BookError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::Book(BookError::Validation(err))
    }
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
