//! Integration tests for record and address book operations through
//! the public API.

use contact_assistant::{AddressBook, BookError, Record};

fn record_with_phones(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name).unwrap();
    for phone in phones {
        record.add_phone(*phone).unwrap();
    }
    record
}

#[test]
fn test_add_then_find_phone_returns_equal_value() {
    let record = record_with_phones("John", &["0501234567"]);
    let found = record.find_phone("0501234567").unwrap();
    assert_eq!(found.as_str(), "0501234567");
}

#[test]
fn test_remove_after_add_restores_phone_count() {
    let mut record = record_with_phones("John", &["0507654321"]);
    let before = record.phones().len();

    record.add_phone("0501234567").unwrap();
    record.remove_phone("0501234567").unwrap();

    assert_eq!(record.phones().len(), before);
}

#[test]
fn test_edit_phone_with_malformed_new_value_is_atomic() {
    let mut record = record_with_phones("John", &["0501234567", "0507654321"]);

    let result = record.edit_phone("0507654321", "055-123");
    assert!(result.is_err());

    let phones: Vec<_> = record.phones().iter().map(|p| p.as_str()).collect();
    assert_eq!(phones, vec!["0501234567", "0507654321"]);
}

#[test]
fn test_duplicate_phones_are_stored_twice() {
    let record = record_with_phones("John", &["0501234567", "0501234567"]);
    assert_eq!(record.phones().len(), 2);
}

#[test]
fn test_book_find_unknown_is_sentinel_delete_unknown_is_error() {
    let mut book = AddressBook::new();
    book.add_record(record_with_phones("John", &["0501234567"]));

    assert!(book.find("Jane").is_none());
    assert!(matches!(
        book.delete("Jane").unwrap_err(),
        BookError::RecordNotFound(_)
    ));
    // The failed delete left the book untouched.
    assert_eq!(book.len(), 1);
}

#[test]
fn test_add_record_overwrite_discards_prior_record() {
    let mut book = AddressBook::new();
    book.add_record(record_with_phones("John", &["0501234567"]));

    let mut replacement = Record::new("John").unwrap();
    replacement.set_birthday("15.06.1990").unwrap();
    book.add_record(replacement);

    let record = book.find("John").unwrap();
    assert!(record.phones().is_empty());
    assert_eq!(record.birthday().unwrap().to_string(), "15.06.1990");
}

#[test]
fn test_record_lookup_key_matches_record_name() {
    let mut book = AddressBook::new();
    book.add_record(record_with_phones("John Doe", &["0501234567"]));

    let record = book.find("John Doe").unwrap();
    assert_eq!(record.name().as_str(), "John Doe");
}

#[test]
fn test_mutation_through_find_mut_is_visible_on_next_find() {
    let mut book = AddressBook::new();
    book.add_record(Record::new("John").unwrap());

    book.find_mut("John").unwrap().add_phone("0501234567").unwrap();

    assert_eq!(book.find("John").unwrap().phones().len(), 1);
}
