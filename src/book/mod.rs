//! In-memory address book.
//!
//! Maps contact names to records, preserving insertion order for listing,
//! and hosts the upcoming-birthday query.

pub mod birthdays;

pub use birthdays::Congratulation;

use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::debug;

/// The address book: a name-keyed store of contact records.
///
/// Keys are unique; re-adding a name replaces the old record wholesale but
/// keeps its original listing position. Iteration follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    // Listing order; every entry has a matching key in `records`.
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record keyed by its name.
    ///
    /// An existing record under the same name is silently replaced,
    /// last-write-wins; no merge is attempted.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().as_str().to_string();
        if self.records.insert(name.clone(), record).is_some() {
            debug!(%name, "record replaced");
        } else {
            debug!(%name, "record added");
            self.order.push(name);
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name, mutably.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Delete the record for `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if no record has that name.
    pub fn delete(&mut self, name: &str) -> BookResult<()> {
        match self.records.remove(name) {
            Some(_) => {
                self.order.retain(|n| n != name);
                debug!(%name, "record deleted");
                Ok(())
            }
            None => Err(BookError::NotFound(format!("Contact {}", name))),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    /// Contacts whose birthday falls within `[today, today + 7 days]`,
    /// with weekend dates shifted to the following Monday.
    ///
    /// Results follow the book's insertion order. Records whose birthday
    /// cannot be projected onto the relevant year are skipped.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<Congratulation> {
        birthdays::upcoming(self.records(), today)
    }
}
