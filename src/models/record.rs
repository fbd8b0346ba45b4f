//! Record model: one contact entry in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: one name, an ordered list of phone numbers, and
/// an optional birthday.
///
/// The name is fixed at construction. Phones keep insertion order and
/// may contain duplicates; the birthday can be set and overwritten.
/// All field values are validated wrappers, so a constructed record
/// never holds malformed data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    name: Name,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with the given name, no phones, and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The stored phone numbers, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// Duplicates are permitted: adding the same number twice stores it twice.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the input is malformed.
    pub fn add_phone(&mut self, raw: impl Into<String>) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    /// Find a stored phone by exact value match.
    ///
    /// The query string is validated first, so a malformed query fails
    /// with a validation error before any search runs.
    ///
    /// # Errors
    ///
    /// - `BookError::Validation` if the query is malformed.
    /// - `BookError::PhoneNotFound` if no stored phone matches.
    pub fn find_phone(&self, raw: impl Into<String>) -> BookResult<&Phone> {
        let query = Phone::new(raw)?;
        self.phones
            .iter()
            .find(|p| **p == query)
            .ok_or_else(|| BookError::PhoneNotFound(query.into_inner()))
    }

    /// Remove the first stored phone equal to the given value.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Record::find_phone`].
    pub fn remove_phone(&mut self, raw: impl Into<String>) -> BookResult<()> {
        let query = Phone::new(raw)?;
        let position = self
            .phones
            .iter()
            .position(|p| *p == query)
            .ok_or_else(|| BookError::PhoneNotFound(query.into_inner()))?;
        self.phones.remove(position);
        Ok(())
    }

    /// Replace a stored phone value in place, preserving its position.
    ///
    /// Failure is atomic: if `new_raw` is malformed, the matched phone
    /// is left unchanged.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` if `old_raw` matches no stored phone.
    /// - `BookError::Validation` if `old_raw` or `new_raw` is malformed.
    pub fn edit_phone(
        &mut self,
        old_raw: impl Into<String>,
        new_raw: impl Into<String>,
    ) -> BookResult<()> {
        let query = Phone::new(old_raw)?;
        let phone = self
            .phones
            .iter_mut()
            .find(|p| **p == query)
            .ok_or_else(|| BookError::PhoneNotFound(query.into_inner()))?;
        phone.edit(new_raw)?;
        Ok(())
    }

    /// Validate and set the birthday, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed or future-dated input.
    pub fn set_birthday(&mut self, raw: impl Into<String>) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
