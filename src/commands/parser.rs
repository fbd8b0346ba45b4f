//! Free-text command parsing.
//!
//! Input is split on whitespace; the first token is the command word
//! (case-insensitive) and the rest are arguments. Contact names may
//! span several tokens, so commands that also take a phone or date
//! read those from the end of the argument list.

use crate::error::{CommandError, CommandResult};

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,
    /// `add <name> <phone>`
    Add { name: String, phone: String },
    /// `change <name> <old_phone> <new_phone>`
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    /// `phone <name>`
    Phone { name: String },
    /// `all`
    All,
    /// `add-birthday <name> <DD.MM.YYYY>`
    AddBirthday { name: String, birthday: String },
    /// `show-birthday <name>`
    ShowBirthday { name: String },
    /// `birthdays`
    Birthdays,
    /// `delete <name>`
    Delete { name: String },
    /// `help`
    Help,
    /// `close` or `exit`
    Exit,
    /// Anything unrecognized, including blank input
    Unknown(String),
}

impl Command {
    /// Parse one input line.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::NotEnoughArguments` when the command word
    /// is recognized but the argument list is incomplete.
    pub fn parse(line: &str) -> CommandResult<Self> {
        let mut parts = line.split_whitespace();
        let word = parts.next().unwrap_or("").to_lowercase();
        let args: Vec<&str> = parts.collect();

        let command = match word.as_str() {
            "hello" => Self::Hello,
            "add" => {
                let (name, rest) = split_trailing(&args, 1)?;
                Self::Add {
                    name,
                    phone: rest[0].to_string(),
                }
            }
            "change" => {
                let (name, rest) = split_trailing(&args, 2)?;
                Self::Change {
                    name,
                    old_phone: rest[0].to_string(),
                    new_phone: rest[1].to_string(),
                }
            }
            "phone" => Self::Phone {
                name: joined_name(&args)?,
            },
            "all" => Self::All,
            "add-birthday" => {
                let (name, rest) = split_trailing(&args, 1)?;
                Self::AddBirthday {
                    name,
                    birthday: rest[0].to_string(),
                }
            }
            "show-birthday" => Self::ShowBirthday {
                name: joined_name(&args)?,
            },
            "birthdays" => Self::Birthdays,
            "delete" => Self::Delete {
                name: joined_name(&args)?,
            },
            "help" => Self::Help,
            "close" | "exit" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        };

        Ok(command)
    }
}

/// Split a multi-word name from `trailing` fixed arguments at the end.
fn split_trailing(args: &[&str], trailing: usize) -> CommandResult<(String, Vec<String>)> {
    if args.len() < trailing + 1 {
        return Err(CommandError::NotEnoughArguments);
    }
    let split = args.len() - trailing;
    let name = args[..split].join(" ");
    let rest = args[split..].iter().map(|s| s.to_string()).collect();
    Ok((name, rest))
}

/// Join all arguments into a single contact name.
fn joined_name(args: &[&str]) -> CommandResult<String> {
    if args.is_empty() {
        return Err(CommandError::NotEnoughArguments);
    }
    Ok(args.join(" "))
}
