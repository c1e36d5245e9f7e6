//! Rolodex - a personal contact book with validated fields and
//! upcoming-birthday reminders.
//!
//! The core stores named contacts, each with validated 10-digit phone
//! numbers and an optional `DD.MM.YYYY` birthday, and can compute which
//! contacts have a birthday within the next seven days, shifting weekend
//! dates to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact record aggregate
//! - **book**: The in-memory address book and the birthday query
//! - **commands**: Command parsing and dispatch for the console dialogue
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

// Re-export commonly used types
pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, Congratulation};
pub use commands::{Command, ParseError};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError, ConfigResult};
pub use models::Record;
