//! End-to-end tests for the address book core.
//!
//! These tests drive the public library surface: validated construction,
//! record phone management, book CRUD, and the upcoming-birthday query
//! with a fixed anchor date.

use chrono::NaiveDate;
use rolodex::{AddressBook, Birthday, BookError, ContactName, PhoneNumber, Record};

/// Sunday, 10.11.2024, the anchor date used by the dated scenarios.
fn anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, 10).unwrap()
}

fn record_with(name: &str, phone: &str, birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).unwrap();
    record.add_phone(phone).unwrap();
    if let Some(raw) = birthday {
        record.set_birthday(raw).unwrap();
    }
    record
}

#[test]
fn test_phone_construction_contract() {
    // Wrong length or non-digit content fails; exactly ten digits succeeds
    // and the stored value equals the input.
    for bad in ["", "123", "123456789", "12345678901", "05012345a7", "050 12345"] {
        assert!(PhoneNumber::new(bad).is_err(), "accepted: {:?}", bad);
    }
    let phone = PhoneNumber::new("0501234567").unwrap();
    assert_eq!(phone.as_str(), "0501234567");
}

#[test]
fn test_name_construction_contract() {
    assert!(ContactName::new("").is_err());
    assert!(ContactName::new("J").is_ok());
}

#[test]
fn test_birthday_round_trips_exactly() {
    let birthday = Birthday::parse("15.11.1990").unwrap();
    assert_eq!(birthday.to_string(), "15.11.1990");
    assert_eq!(Birthday::parse(&birthday.to_string()).unwrap(), birthday);
}

#[test]
fn test_edit_phone_reports_bad_new_number_before_missing_old() {
    let mut record = Record::new("John").unwrap();
    // "abc" is invalid and "0501234567" is absent; validation wins.
    let err = record.edit_phone("0501234567", "abc").unwrap_err();
    assert!(matches!(err, BookError::Validation(_)));
}

#[test]
fn test_phone_lookups_on_absent_value() {
    let mut record = Record::new("John").unwrap();
    record.add_phone("0971234567").unwrap();

    assert!(matches!(
        record.remove_phone("0501234567").unwrap_err(),
        BookError::NotFound(_)
    ));
    assert!(matches!(
        record.edit_phone("0501234567", "0661112233").unwrap_err(),
        BookError::NotFound(_)
    ));
    assert!(record.find_phone("0501234567").is_none());
}

#[test]
fn test_add_record_replaces_wholesale() {
    let mut book = AddressBook::new();
    book.add_record(record_with("John", "0501234567", Some("15.11.1990")));
    book.add_record(Record::new("John").unwrap());

    let replaced = book.find("John").unwrap();
    assert!(replaced.phones().is_empty());
    assert!(replaced.birthday().is_none());
}

#[test]
fn test_delete_contract() {
    let mut book = AddressBook::new();
    assert!(matches!(
        book.delete("John").unwrap_err(),
        BookError::NotFound(_)
    ));

    book.add_record(Record::new("John").unwrap());
    book.delete("John").unwrap();
    assert!(book.find("John").is_none());
}

#[test]
fn test_upcoming_birthdays_scenarios() {
    // Jane's birthday is today (Sunday) and shifts to Monday; John's is
    // Friday within the window; Bob's has passed and advances to next
    // January, outside the window.
    let mut book = AddressBook::new();
    book.add_record(record_with("Jane", "0501234567", Some("10.11.1995")));
    book.add_record(record_with("John", "0971234567", Some("15.11.1990")));
    book.add_record(record_with("Bob", "0661112233", Some("01.01.1990")));

    let upcoming = book.upcoming_birthdays(anchor_date());

    assert_eq!(upcoming.len(), 2);
    assert_eq!(upcoming[0].name, "Jane");
    assert_eq!(upcoming[0].date_string(), "11.11.2024");
    assert_eq!(upcoming[1].name, "John");
    assert_eq!(upcoming[1].date_string(), "15.11.2024");
}

#[test]
fn test_upcoming_birthdays_serializes_rendered_dates() {
    let mut book = AddressBook::new();
    book.add_record(record_with("Jane", "0501234567", Some("10.11.1995")));

    let upcoming = book.upcoming_birthdays(anchor_date());
    let json = serde_json::to_string(&upcoming).unwrap();
    assert_eq!(
        json,
        r#"[{"name":"Jane","congratulation_date":"11.11.2024"}]"#
    );
}

#[test]
fn test_listing_follows_insertion_order_after_churn() {
    let mut book = AddressBook::new();
    book.add_record(record_with("Alpha", "0000000001", None));
    book.add_record(record_with("Beta", "0000000002", None));
    book.add_record(record_with("Gamma", "0000000003", None));
    book.delete("Beta").unwrap();
    book.add_record(record_with("Delta", "0000000004", None));

    let names: Vec<&str> = book.records().map(|r| r.name().as_str()).collect();
    assert_eq!(names, ["Alpha", "Gamma", "Delta"]);
}
