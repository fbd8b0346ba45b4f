//! Phone value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10}$").expect("phone pattern is a valid regex"));

/// A type-safe wrapper for phone numbers.
///
/// This ensures that phone numbers are validated at construction time.
/// A valid phone number is exactly 10 ASCII decimal digits with no
/// separators. Equality is exact string equality, not numeric.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Phone;
///
/// let phone = Phone::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// The input is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the trimmed input is
    /// not exactly 10 digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        let trimmed = phone.trim();

        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Validate phone format: exactly 10 decimal digits.
    fn is_valid(phone: &str) -> bool {
        PHONE_PATTERN.is_match(phone)
    }

    /// Replace the stored value in place, re-validating the new input.
    ///
    /// On error the stored value is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the replacement is
    /// not exactly 10 digits.
    pub fn edit(&mut self, new_phone: impl Into<String>) -> Result<(), ValidationError> {
        let new_phone = new_phone.into();
        let trimmed = new_phone.trim();

        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidPhone(new_phone));
        }

        self.0 = trimmed.to_string();
        Ok(())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = Phone::new("0501234567").unwrap();
        assert_eq!(phone.as_str(), "0501234567");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(Phone::new("").is_err());
        assert!(Phone::new("123456789").is_err()); // 9 digits
        assert!(Phone::new("12345678901").is_err()); // 11 digits
        assert!(Phone::new("050-123-4567").is_err()); // separators
        assert!(Phone::new("05O1234567").is_err()); // letter O
        assert!(Phone::new("+380501234").is_err()); // plus sign
        assert!(Phone::new("0501234567").is_ok());
        assert!(Phone::new("0000000000").is_ok());
    }

    #[test]
    fn test_phone_trims_whitespace() {
        let phone = Phone::new(" 0501234567 ").unwrap();
        assert_eq!(phone.as_str(), "0501234567");
    }

    #[test]
    fn test_phone_equality_is_exact_string_match() {
        let a = Phone::new("0501234567").unwrap();
        let b = Phone::new("0501234567").unwrap();
        let c = Phone::new("0507654321").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_phone_edit_replaces_value() {
        let mut phone = Phone::new("0501234567").unwrap();
        phone.edit("0509999999").unwrap();
        assert_eq!(phone.as_str(), "0509999999");
    }

    #[test]
    fn test_phone_edit_invalid_leaves_value_unchanged() {
        let mut phone = Phone::new("0501234567").unwrap();
        let result = phone.edit("bad");
        assert!(result.is_err());
        assert_eq!(phone.as_str(), "0501234567");
    }

    #[test]
    fn test_phone_display() {
        let phone = Phone::new("0501234567").unwrap();
        assert_eq!(format!("{}", phone), "0501234567");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = Phone::new("0501234567").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"0501234567\"");
    }

    #[test]
    fn test_phone_deserialization() {
        let phone: Phone = serde_json::from_str("\"0501234567\"").unwrap();
        assert_eq!(phone.as_str(), "0501234567");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<Phone, _> = serde_json::from_str("\"not-a-phone\"");
        assert!(result.is_err());
    }
}
