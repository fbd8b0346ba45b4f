//! Command handlers: one function per user-facing operation.

use crate::error::{BookError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;

/// Add a phone number to a contact, creating the contact if needed.
pub fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<String> {
    match book.find_mut(name) {
        Some(record) => record.add_phone(phone)?,
        None => {
            let mut record = Record::new(name)?;
            record.add_phone(phone)?;
            book.add_record(record);
        }
    }
    Ok(format!(
        "Contact '{}' added with phone number {}.",
        name, phone
    ))
}

/// Replace one of a contact's phone numbers in place.
pub fn change_contact(
    book: &mut AddressBook,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> CommandResult<String> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::RecordNotFound(name.to_string()))?;
    record.edit_phone(old_phone, new_phone)?;
    Ok(format!(
        "Contact '{}' updated to phone number {}.",
        name, new_phone
    ))
}

/// Show a contact's phone numbers.
pub fn show_phone(book: &AddressBook, name: &str) -> CommandResult<String> {
    let record = book
        .find(name)
        .ok_or_else(|| BookError::RecordNotFound(name.to_string()))?;
    let phones = record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Ok(format!("{}'s phone number is {}.", name, phones))
}

/// Render every contact, one line each.
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts found.".to_string();
    }
    let lines = book
        .iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    format!("All contacts:\n{}", lines)
}

/// Set a contact's birthday, creating the contact if needed.
pub fn add_birthday(book: &mut AddressBook, name: &str, birthday: &str) -> CommandResult<String> {
    match book.find_mut(name) {
        Some(record) => record.set_birthday(birthday)?,
        None => {
            let mut record = Record::new(name)?;
            record.set_birthday(birthday)?;
            book.add_record(record);
        }
    }
    Ok(format!("Added birthday {} for {}.", birthday, name))
}

/// Show a contact's birthday.
pub fn show_birthday(book: &AddressBook, name: &str) -> CommandResult<String> {
    let record = book
        .find(name)
        .ok_or_else(|| BookError::RecordNotFound(name.to_string()))?;
    match record.birthday() {
        Some(birthday) => Ok(format!("{}'s birthday is on {}.", name, birthday)),
        None => Ok(format!("{} does not have a birthday recorded.", name)),
    }
}

/// List contacts with birthdays in the 7-day window starting at `today`.
pub fn birthdays(book: &AddressBook, today: NaiveDate) -> String {
    let upcoming = book.get_upcoming_birthdays(today);
    if upcoming.is_empty() {
        return "No upcoming birthdays within the next week.".to_string();
    }
    upcoming
        .iter()
        .map(|entry| entry.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remove a contact from the book.
pub fn delete_contact(book: &mut AddressBook, name: &str) -> CommandResult<String> {
    book.delete(name)?;
    Ok(format!("Contact '{}' deleted.", name))
}

/// The help text shown for the `help` command.
pub fn help_text() -> &'static str {
    "Available commands:\n\
     - hello: Greet the assistant.\n\
     - add <name> <phone>: Add a new contact or another phone number.\n\
     - change <name> <old_phone> <new_phone>: Change an existing contact's phone number.\n\
     - phone <name>: Show the phone numbers of a contact.\n\
     - all: Show all contacts.\n\
     - add-birthday <name> <DD.MM.YYYY>: Add a birthday for a contact.\n\
     - show-birthday <name>: Show the birthday of a contact.\n\
     - birthdays: Show upcoming birthdays within the next week.\n\
     - delete <name>: Remove a contact.\n\
     - close or exit: Save and exit.\n\
     - help: Show this help message."
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_add_contact_creates_record() {
        let mut book = AddressBook::new();
        let message = add_contact(&mut book, "John", "0501234567").unwrap();
        assert_eq!(message, "Contact 'John' added with phone number 0501234567.");
        assert_eq!(book.find("John").unwrap().phones().len(), 1);
    }

    #[test]
    fn test_add_contact_appends_to_existing_record() {
        let mut book = AddressBook::new();
        add_contact(&mut book, "John", "0501234567").unwrap();
        add_contact(&mut book, "John", "0507654321").unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.find("John").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_contact_invalid_phone_leaves_book_unchanged() {
        let mut book = AddressBook::new();
        assert!(add_contact(&mut book, "John", "bad").is_err());
        assert!(book.is_empty());
    }

    #[test]
    fn test_change_contact() {
        let mut book = AddressBook::new();
        add_contact(&mut book, "John", "0501234567").unwrap();
        let message = change_contact(&mut book, "John", "0501234567", "0509999999").unwrap();
        assert_eq!(message, "Contact 'John' updated to phone number 0509999999.");
        assert_eq!(book.find("John").unwrap().phones()[0].as_str(), "0509999999");
    }

    #[test]
    fn test_change_contact_unknown_name() {
        let mut book = AddressBook::new();
        let err = change_contact(&mut book, "John", "0501234567", "0509999999").unwrap_err();
        assert!(matches!(
            err,
            CommandError::Book(BookError::RecordNotFound(_))
        ));
    }

    #[test]
    fn test_show_phone() {
        let mut book = AddressBook::new();
        add_contact(&mut book, "John", "0501234567").unwrap();
        add_contact(&mut book, "John", "0507654321").unwrap();
        assert_eq!(
            show_phone(&book, "John").unwrap(),
            "John's phone number is 0501234567; 0507654321."
        );
    }

    #[test]
    fn test_show_all_empty() {
        let book = AddressBook::new();
        assert_eq!(show_all(&book), "No contacts found.");
    }

    #[test]
    fn test_show_all_lists_contacts() {
        let mut book = AddressBook::new();
        add_contact(&mut book, "John", "0501234567").unwrap();
        add_contact(&mut book, "Jane", "0507654321").unwrap();
        assert_eq!(
            show_all(&book),
            "All contacts:\n\
             Contact name: John, phones: 0501234567\n\
             Contact name: Jane, phones: 0507654321"
        );
    }

    #[test]
    fn test_add_birthday_creates_record_when_absent() {
        let mut book = AddressBook::new();
        let message = add_birthday(&mut book, "John", "15.06.1990").unwrap();
        assert_eq!(message, "Added birthday 15.06.1990 for John.");
        assert!(book.find("John").unwrap().birthday().is_some());
    }

    #[test]
    fn test_show_birthday_none_recorded() {
        let mut book = AddressBook::new();
        add_contact(&mut book, "John", "0501234567").unwrap();
        assert_eq!(
            show_birthday(&book, "John").unwrap(),
            "John does not have a birthday recorded."
        );
    }

    #[test]
    fn test_show_birthday() {
        let mut book = AddressBook::new();
        add_birthday(&mut book, "John", "15.06.1990").unwrap();
        assert_eq!(
            show_birthday(&book, "John").unwrap(),
            "John's birthday is on 15.06.1990."
        );
    }

    #[test]
    fn test_birthdays_empty_window() {
        let book = AddressBook::new();
        assert_eq!(
            birthdays(&book, date(2024, 6, 10)),
            "No upcoming birthdays within the next week."
        );
    }

    #[test]
    fn test_birthdays_lists_window() {
        let mut book = AddressBook::new();
        add_birthday(&mut book, "John", "15.06.1990").unwrap();
        assert_eq!(birthdays(&book, date(2024, 6, 10)), "John - 15.06.2024");
    }

    #[test]
    fn test_delete_contact() {
        let mut book = AddressBook::new();
        add_contact(&mut book, "John", "0501234567").unwrap();
        assert_eq!(
            delete_contact(&mut book, "John").unwrap(),
            "Contact 'John' deleted."
        );
        assert!(book.is_empty());
    }

    #[test]
    fn test_delete_contact_unknown() {
        let mut book = AddressBook::new();
        let err = delete_contact(&mut book, "John").unwrap_err();
        assert!(matches!(
            err,
            CommandError::Book(BookError::RecordNotFound(_))
        ));
    }
}
