//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date pattern used for parsing and rendering birthdays.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for birthdays.
///
/// A birthday is parsed from a `DD.MM.YYYY` string at construction
/// time and stored as a calendar date. Dates later than the current
/// date are rejected.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("15.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.06.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday from a `DD.MM.YYYY` string.
    ///
    /// The input is trimmed before parsing. The parsed date is checked
    /// against the current local date.
    ///
    /// # Errors
    ///
    /// - `ValidationError::InvalidDateFormat` if the input does not
    ///   parse as `DD.MM.YYYY`.
    /// - `ValidationError::BirthdayInFuture` if the parsed date is
    ///   strictly after today.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        Self::parse(raw, Local::now().date_naive())
    }

    fn parse(raw: impl Into<String>, today: NaiveDate) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let trimmed = raw.trim();

        let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDateFormat(raw.clone()))?;

        if date > today {
            return Err(ValidationError::BirthdayInFuture(raw));
        }

        Ok(Self(date))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

// Serde support - serialize as a DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support - renders back into DD.MM.YYYY
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
