//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date layout used for parsing and rendering birthdays.
pub(crate) const DATE_FORMAT: &str = "%d.%m.%Y";

// chrono's %d/%m accept single-digit values, so the 2+2+4 digit layout
// is enforced separately before parsing.
static DATE_LAYOUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("date layout regex is valid"));

/// A type-safe wrapper for contact birthdays.
///
/// A birthday is constructed by parsing a `DD.MM.YYYY` string and stores the
/// parsed calendar date, not the original text. Rendering regenerates the
/// same layout, so parse/render round-trips exactly.
///
/// # Example
///
/// ```
/// use rolodex::domain::Birthday;
///
/// let birthday = Birthday::parse("15.11.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.11.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the layout is wrong
    /// (`5.1.1990`, `1990-01-05`) or the date does not exist on the calendar
    /// (`30.02.2001`).
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !DATE_LAYOUT.is_match(raw) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }

        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Project this birthday's month and day onto another year.
    ///
    /// Returns `None` when the combination does not exist, which happens
    /// for a Feb 29 birthday projected onto a non-leap year.
    pub fn on_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
    }
}

// Serde support - serialize as a DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::parse("15.11.1990").unwrap();
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(1990, 11, 15).unwrap()
        );
    }

    #[test]
    fn test_birthday_round_trip() {
        for raw in ["15.11.1990", "01.01.2000", "29.02.2004", "31.12.1999"] {
            let birthday = Birthday::parse(raw).unwrap();
            assert_eq!(birthday.to_string(), raw);
        }
    }

    #[test]
    fn test_birthday_rejects_bad_layout() {
        assert!(Birthday::parse("").is_err());
        assert!(Birthday::parse("5.1.1990").is_err());
        assert!(Birthday::parse("1990-01-05").is_err());
        assert!(Birthday::parse("15/11/1990").is_err());
        assert!(Birthday::parse("15.11.90").is_err());
        assert!(Birthday::parse("15.11.1990 ").is_err());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::parse("30.02.2001").is_err());
        assert!(Birthday::parse("29.02.2001").is_err()); // not a leap year
        assert!(Birthday::parse("31.04.2024").is_err());
        assert!(Birthday::parse("00.01.2024").is_err());
        assert!(Birthday::parse("01.13.2024").is_err());
    }

    #[test]
    fn test_birthday_on_year() {
        let birthday = Birthday::parse("15.11.1990").unwrap();
        assert_eq!(
            birthday.on_year(2024),
            NaiveDate::from_ymd_opt(2024, 11, 15)
        );

        let leap = Birthday::parse("29.02.2004").unwrap();
        assert_eq!(leap.on_year(2024), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(leap.on_year(2025), None);
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::parse("15.11.1990").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"15.11.1990\"");
    }

    #[test]
    fn test_birthday_deserialization() {
        let birthday: Birthday = serde_json::from_str("\"15.11.1990\"").unwrap();
        assert_eq!(birthday.to_string(), "15.11.1990");
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"1990-11-15\"");
        assert!(result.is_err());
    }
}
