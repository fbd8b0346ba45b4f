//! AddressBook model: the name-keyed collection of records.

use crate::domain::birthday::DATE_FORMAT;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of days in the congratulation window, counting the reference
/// date itself.
const UPCOMING_WINDOW_DAYS: i64 = 7;

/// A contact selected by the upcoming-birthdays query.
///
/// `congratulation_date` is the birthday's next occurrence on the
/// calendar, which may fall in the year after the reference date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// The contact's name
    pub name: String,

    /// The date on which to congratulate the contact
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.name,
            self.congratulation_date.format(DATE_FORMAT)
        )
    }
}

/// The address book: a collection of records keyed by contact name.
///
/// Names are unique; a stored record is always reachable under its own
/// name. Iteration follows insertion order. Records are stored in a
/// vector with linear name lookup, which keeps insertion-order
/// iteration exact and is plenty for an interactive book.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own name.
    ///
    /// If a record with the same name already exists, it is replaced in
    /// place and the prior record is silently discarded.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Look up a record by exact name.
    ///
    /// Absence is a normal outcome for this read, so it is modeled as
    /// `None` rather than an error.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|index| &self.records[index])
    }

    /// Mutable variant of [`AddressBook::find`].
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.position(name).map(|index| &mut self.records[index])
    }

    /// Remove a record by exact name.
    ///
    /// # Errors
    ///
    /// Returns `BookError::RecordNotFound` if no record has that name.
    pub fn delete(&mut self, name: &str) -> BookResult<()> {
        let index = self
            .position(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))?;
        self.records.remove(index);
        Ok(())
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose next birthday occurrence falls within the 7-day
    /// window starting at `today`, inclusive on both ends.
    ///
    /// Each stored birthday is projected onto `today`'s year; if that
    /// occurrence already passed, it rolls forward to the next year.
    /// Feb 29 birthdays projected onto a non-leap year resolve to
    /// Mar 1 of that year. Output follows the book's insertion order,
    /// not chronological order.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let window_end = today + Duration::days(UPCOMING_WINDOW_DAYS - 1);
        let mut upcoming = Vec::new();

        for record in self.iter() {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let mut occurrence = occurrence_in_year(birthday.date(), today.year());
            if occurrence < today {
                occurrence = occurrence_in_year(birthday.date(), today.year() + 1);
            }

            if occurrence <= window_end {
                upcoming.push(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: occurrence,
                });
            }
        }

        upcoming
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

/// Project a birthday's month and day onto the given year.
///
/// Feb 29 is the only month/day combination that can be missing from
/// the target year; it falls back to Mar 1.
fn occurrence_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year"))
}

// Serde support - the book persists as a flat sequence of records, so
// the on-disk schema stays portable and carries no redundant name keys.
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.records.serialize(serializer)
    }
}

// Serde support - records are re-inserted one by one, which re-checks
// field validity and re-establishes the unique-name invariant.
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        Ok(book)
    }
}
