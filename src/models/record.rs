//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: one validated name, an ordered list of validated
/// phone numbers, and an optional birthday.
///
/// The name is immutable after construction and identifies the record
/// within an [`AddressBook`](crate::book::AddressBook). Phones keep
/// insertion order and duplicates are not prevented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with a name only.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` if the name is empty.
    pub fn new(name: impl Into<String>) -> BookResult<Self> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// Get the contact name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Get the phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Get the birthday, if one is set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` as a phone number and append it.
    ///
    /// Duplicates are not checked; adding the same number twice stores it
    /// twice.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` if `raw` is not a 10-digit number.
    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone whose value equals `raw`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if no phone matches.
    pub fn remove_phone(&mut self, raw: &str) -> BookResult<()> {
        match self.phones.iter().position(|p| p.as_str() == raw) {
            Some(index) => {
                self.phones.remove(index);
                Ok(())
            }
            None => Err(BookError::NotFound(format!("Phone number {}", raw))),
        }
    }

    /// Replace the first phone equal to `old_raw` with `new_raw`, keeping
    /// its position in the list.
    ///
    /// `new_raw` is validated before `old_raw` is looked up, so a bad new
    /// number is reported even when the old number does not exist.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` if `new_raw` is invalid, or
    /// `BookError::NotFound` if `old_raw` is not present.
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> BookResult<()> {
        let new_phone = PhoneNumber::new(new_raw)?;

        match self.phones.iter().position(|p| p.as_str() == old_raw) {
            Some(index) => {
                self.phones[index] = new_phone;
                Ok(())
            }
            None => Err(BookError::NotFound(format!("Phone {}", old_raw))),
        }
    }

    /// Find the first phone whose value equals `raw`.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Parse `raw` as a `DD.MM.YYYY` date and set it as the birthday,
    /// overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` if `raw` is not a valid date.
    pub fn set_birthday(&mut self, raw: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// Semicolon-joined phone values, as shown by the `phone` command.
    pub fn phone_list(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phone_list()
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
