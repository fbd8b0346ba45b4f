//! Configuration management for the contact assistant.
//!
//! This module handles loading configuration from environment variables.
//! A `.env` file is picked up if present; every variable has a default,
//! so the assistant runs with no configuration at all.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default path of the persisted address book file.
const DEFAULT_BOOK_PATH: &str = "addressbook.json";

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the address book file (default: "addressbook.json")
    pub book_path: String,

    /// Log level filter (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: Path of the book file (default: "addressbook.json")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load a .env file if one exists, without failing when it doesn't.
        let _ = dotenvy::dotenv();

        let book_path =
            env::var("ADDRESS_BOOK_PATH").unwrap_or_else(|_| DEFAULT_BOOK_PATH.to_string());

        if book_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_path,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: DEFAULT_BOOK_PATH.to_string(),
            log_level: "error".to_string(),
        }
    }
}
