//! Command parsing and dispatch.
//!
//! This is the boundary between the console dialogue and the core: a line
//! of input parses into a [`Command`], [`execute`] runs it against an
//! [`AddressBook`], and every outcome (success or recoverable error) is
//! rendered as a display string. No error type crosses this boundary.

use crate::book::AddressBook;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::NaiveDate;
use std::fmt;
use tracing::debug;

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,
    /// `add NAME PHONE`
    Add { name: String, phone: String },
    /// `change NAME OLD_PHONE NEW_PHONE`
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    /// `phone NAME`
    Phone { name: String },
    /// `all`
    All,
    /// `add-birthday NAME DD.MM.YYYY`
    AddBirthday { name: String, birthday: String },
    /// `show-birthday NAME`
    ShowBirthday { name: String },
    /// `birthdays`
    Birthdays,
    /// `close` or `exit`
    Close,
}

/// Why a line of input failed to parse into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line was empty or whitespace only
    EmptyInput,
    /// The verb is not a known command
    UnknownCommand,
    /// The verb is known but its arguments are missing or malformed
    BadArguments,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input cannot be empty. Please try again."),
            Self::UnknownCommand => write!(f, "Invalid command. Please try again."),
            Self::BadArguments => write!(f, "Invalid input. Please try again"),
        }
    }
}

impl Command {
    /// Parse a line of input.
    ///
    /// The first whitespace-separated token selects the command,
    /// case-insensitively; the remaining tokens are arguments taken
    /// verbatim. Trailing extra arguments are ignored except for `change`,
    /// which takes exactly three.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next().ok_or(ParseError::EmptyInput)?.to_lowercase();
        let args: Vec<&str> = tokens.collect();

        match verb.as_str() {
            "hello" => Ok(Self::Hello),
            "add" => match args.as_slice() {
                [name, phone, ..] => Ok(Self::Add {
                    name: name.to_string(),
                    phone: phone.to_string(),
                }),
                _ => Err(ParseError::BadArguments),
            },
            "change" => match args.as_slice() {
                [name, old_phone, new_phone] => Ok(Self::Change {
                    name: name.to_string(),
                    old_phone: old_phone.to_string(),
                    new_phone: new_phone.to_string(),
                }),
                _ => Err(ParseError::BadArguments),
            },
            "phone" => match args.as_slice() {
                [name, ..] => Ok(Self::Phone {
                    name: name.to_string(),
                }),
                _ => Err(ParseError::BadArguments),
            },
            "all" => Ok(Self::All),
            "add-birthday" => match args.as_slice() {
                [name, birthday, ..] => Ok(Self::AddBirthday {
                    name: name.to_string(),
                    birthday: birthday.to_string(),
                }),
                _ => Err(ParseError::BadArguments),
            },
            "show-birthday" => match args.as_slice() {
                [name, ..] => Ok(Self::ShowBirthday {
                    name: name.to_string(),
                }),
                _ => Err(ParseError::BadArguments),
            },
            "birthdays" => Ok(Self::Birthdays),
            "close" | "exit" => Ok(Self::Close),
            _ => Err(ParseError::UnknownCommand),
        }
    }
}

/// Execute a command against the book and render the outcome.
///
/// `today` anchors the `birthdays` query; the binary passes the current
/// local date.
pub fn execute(book: &mut AddressBook, command: &Command, today: NaiveDate) -> String {
    debug!(?command, "executing command");

    let result = match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add { name, phone } => add_contact(book, name, phone),
        Command::Change {
            name,
            old_phone,
            new_phone,
        } => change_phone(book, name, old_phone, new_phone),
        Command::Phone { name } => show_phone(book, name),
        Command::All => Ok(show_all(book)),
        Command::AddBirthday { name, birthday } => add_birthday(book, name, birthday),
        Command::ShowBirthday { name } => show_birthday(book, name),
        Command::Birthdays => Ok(birthdays(book, today)),
        Command::Close => Ok("Good bye!".to_string()),
    };

    match result {
        Ok(reply) => reply,
        Err(err) => format!("Error: {}", err),
    }
}

/// Parse and execute a line in one step, rendering parse failures too.
pub fn respond(book: &mut AddressBook, line: &str, today: NaiveDate) -> String {
    match Command::parse(line) {
        Ok(command) => execute(book, &command, today),
        Err(err) => err.to_string(),
    }
}

fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> BookResult<String> {
    let existing = book.find(name).is_some();
    if !existing {
        book.add_record(Record::new(name)?);
    }
    // The record stays even when the phone is rejected below.
    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
    }
    Ok(if existing {
        "Contact updated.".to_string()
    } else {
        "Contact added.".to_string()
    })
}

fn change_phone(
    book: &mut AddressBook,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> BookResult<String> {
    match book.find_mut(name) {
        Some(record) => {
            record.edit_phone(old_phone, new_phone)?;
            Ok(format!("Phone number updated for {}", name))
        }
        None => Err(BookError::NotFound(format!("Contact {}", name))),
    }
}

fn show_phone(book: &AddressBook, name: &str) -> BookResult<String> {
    match book.find(name) {
        Some(record) => Ok(record.phone_list()),
        None => Err(BookError::NotFound(format!("Contact {}", name))),
    }
}

fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts found".to_string();
    }
    book.records()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn add_birthday(book: &mut AddressBook, name: &str, birthday: &str) -> BookResult<String> {
    match book.find_mut(name) {
        Some(record) => {
            record.set_birthday(birthday)?;
            Ok(format!("Birthday added for {}", name))
        }
        None => Err(BookError::NotFound(format!("Contact {}", name))),
    }
}

fn show_birthday(book: &AddressBook, name: &str) -> BookResult<String> {
    match book.find(name) {
        Some(record) => match record.birthday() {
            Some(birthday) => Ok(format!("Birthday for {}: {}", name, birthday)),
            None => Ok(format!("No birthday set for {}", name)),
        },
        None => Err(BookError::NotFound(format!("Contact {}", name))),
    }
}

fn birthdays(book: &AddressBook, today: NaiveDate) -> String {
    let upcoming = book.upcoming_birthdays(today);
    if upcoming.is_empty() {
        return "No upcoming birthdays in the next week".to_string();
    }

    let mut reply = String::from("Upcoming birthdays in the next week:");
    for congratulation in &upcoming {
        reply.push('\n');
        reply.push_str(&congratulation.name);
        reply.push_str(": ");
        reply.push_str(&congratulation.date_string());
    }
    reply
}
