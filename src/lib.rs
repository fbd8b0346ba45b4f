//! Contact Assistant - an interactive command-line manager for contacts,
//! phone numbers, and birthdays.
//!
//! State is validated at construction time, held in memory during a
//! session, and persisted to a JSON file between sessions.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects (Name, Phone, Birthday)
//! - **models**: The Record aggregate and the AddressBook container
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **storage**: Whole-book load/save to a JSON file
//! - **commands**: Input parsing and dispatch for the interactive loop

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;

pub use commands::Command;
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use storage::{BookStore, JsonFileStore};
