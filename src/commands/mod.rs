//! Command layer: parsing free-text input and dispatching operations
//! on the address book.
//!
//! Every handler returns a one-line, user-facing response. Errors are
//! never fatal; the caller maps them to a message and keeps the input
//! loop running.

pub mod handlers;
pub mod parser;

pub use parser::Command;

use crate::error::CommandResult;
use crate::models::AddressBook;
use chrono::Local;
use tracing::debug;

/// Execute a parsed command against the book and produce the response line.
pub fn dispatch(command: Command, book: &mut AddressBook) -> CommandResult<String> {
    debug!(?command, "dispatching command");
    match command {
        Command::Hello => Ok("Hello! How can I assist you?".to_string()),
        Command::Add { name, phone } => handlers::add_contact(book, &name, &phone),
        Command::Change {
            name,
            old_phone,
            new_phone,
        } => handlers::change_contact(book, &name, &old_phone, &new_phone),
        Command::Phone { name } => handlers::show_phone(book, &name),
        Command::All => Ok(handlers::show_all(book)),
        Command::AddBirthday { name, birthday } => {
            handlers::add_birthday(book, &name, &birthday)
        }
        Command::ShowBirthday { name } => handlers::show_birthday(book, &name),
        Command::Birthdays => Ok(handlers::birthdays(book, Local::now().date_naive())),
        Command::Delete { name } => handlers::delete_contact(book, &name),
        Command::Help => Ok(handlers::help_text().to_string()),
        Command::Exit => Ok("Good bye!".to_string()),
        Command::Unknown(_) => {
            Ok("Invalid command. Type 'help' to see available commands.".to_string())
        }
    }
}
