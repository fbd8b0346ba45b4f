//! Contact Assistant - Main entry point
//!
//! Loads the address book, runs the interactive command loop on stdin,
//! and saves the book back to disk on exit.

use anyhow::Result;
use contact_assistant::commands::{self, Command};
use contact_assistant::storage::BookStore;
use contact_assistant::{Config, JsonFileStore};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can feed the default filter.
    let config = Config::from_env()?;

    // Logging goes to stderr so stdout stays clean for the prompt.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(book_path = %config.book_path, "configuration loaded");

    let store = JsonFileStore::new(&config.book_path);
    let mut book = match store.load() {
        Ok(book) => {
            info!(records = book.len(), "address book loaded");
            book
        }
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };

    println!("Welcome to the assistant bot!");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Enter a command: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // EOF on stdin is treated like an exit so the book still saves.
            break;
        };
        let line = line?;

        match Command::parse(&line) {
            Ok(Command::Exit) => break,
            Ok(command) => match commands::dispatch(command, &mut book) {
                Ok(message) => println!("{}", message),
                Err(e) => println!("{}", e),
            },
            Err(e) => println!("{}", e),
        }
    }

    store.save(&book)?;
    info!(records = book.len(), "address book saved");
    println!("Good bye!");

    Ok(())
}
