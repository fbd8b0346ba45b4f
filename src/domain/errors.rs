//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty after trimming.
    EmptyName,

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided birthday string does not parse as DD.MM.YYYY.
    InvalidDateFormat(String),

    /// The provided birthday lies in the future.
    BirthdayInFuture(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Phone number must contain exactly 10 digits: {}", phone)
            }
            Self::InvalidDateFormat(raw) => {
                write!(f, "Invalid date format (expected DD.MM.YYYY): {}", raw)
            }
            Self::BirthdayInFuture(raw) => {
                write!(f, "Birthday from the future is not allowed: {}", raw)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
