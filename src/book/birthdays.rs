//! Upcoming-birthday query.
//!
//! Projects each stored birthday onto the current year, keeps the ones
//! falling within the next seven days, and moves weekend dates to the
//! following Monday.

use crate::domain::birthday::DATE_FORMAT;
use crate::domain::Birthday;
use crate::models::Record;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Serialize, Serializer};
use tracing::debug;

/// Length of the forward window, inclusive on both ends.
const WINDOW_DAYS: u64 = 7;

/// One upcoming-birthday result: who to congratulate and on which date.
///
/// The congratulation date serializes and renders as `DD.MM.YYYY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Congratulation {
    /// Contact name
    pub name: String,

    /// Date to congratulate on, already shifted off weekends
    #[serde(serialize_with = "serialize_date")]
    pub congratulation_date: NaiveDate,
}

impl Congratulation {
    /// The congratulation date rendered as `DD.MM.YYYY`.
    pub fn date_string(&self) -> String {
        self.congratulation_date.format(DATE_FORMAT).to_string()
    }
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    date.format(DATE_FORMAT).to_string().serialize(serializer)
}

/// Collect congratulations for every record whose birthday falls within
/// `[today, today + 7 days]`.
///
/// Records whose birthday cannot be projected onto the relevant year
/// (Feb 29 onto a non-leap year) are skipped, never fatal. Output order
/// follows the input iteration order; no secondary sort.
pub(crate) fn upcoming<'a>(
    records: impl Iterator<Item = &'a Record>,
    today: NaiveDate,
) -> Vec<Congratulation> {
    let window_end = today + Days::new(WINDOW_DAYS);

    records
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let occurrence = match next_occurrence(birthday, today) {
                Some(date) => date,
                None => {
                    debug!(name = %record.name(), "skipping birthday with no date this year");
                    return None;
                }
            };

            if occurrence < today || occurrence > window_end {
                return None;
            }

            Some(Congratulation {
                name: record.name().as_str().to_string(),
                congratulation_date: shift_off_weekend(occurrence),
            })
        })
        .collect()
}

/// Project a birthday onto this year, or onto next year when it has
/// already passed.
fn next_occurrence(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = birthday.on_year(today.year())?;
    if this_year < today {
        birthday.on_year(today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Move Saturday two days and Sunday one day forward, both onto Monday.
///
/// The shifted date is not clipped back into the query window.
fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Days::new(2),
        Weekday::Sun => date + Days::new(1),
        _ => date,
    }
}
