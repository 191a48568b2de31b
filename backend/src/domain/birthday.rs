//! Birthday date arithmetic.
//!
//! Pure calendar math for recurring annual birthdays: the next occurrence of
//! a birth date relative to a reference date, and the day count until it.
//! Nothing here reads the system clock; callers supply the reference date,
//! which keeps the arithmetic deterministic and testable.

use chrono::{Datelike, NaiveDate};

use crate::domain::models::member::InvalidDateError;

/// Date format used wherever a date crosses a text boundary (ISO 8601)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` string into a date
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, InvalidDateError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| InvalidDateError(value.to_string()))
}

/// Format a date as `YYYY-MM-DD`
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// The date `birth_date`'s anniversary falls on in `year`.
///
/// Feb 29 birth dates observe their anniversary on Feb 28 in non-leap years,
/// keeping the occurrence in the birth month.
fn occurrence_in_year(birth_date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth_date.month(), birth_date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .expect("Feb 28 exists in every year")
}

/// The next occurrence of `birth_date` on or after `reference_date`.
///
/// If this year's occurrence has already passed, the result is next year's.
pub fn next_occurrence(birth_date: NaiveDate, reference_date: NaiveDate) -> NaiveDate {
    let this_year = occurrence_in_year(birth_date, reference_date.year());
    if this_year >= reference_date {
        this_year
    } else {
        occurrence_in_year(birth_date, reference_date.year() + 1)
    }
}

/// Whole days from `reference_date` until the next occurrence of
/// `birth_date`. Never negative; exactly 0 on the birthday itself.
pub fn days_until(birth_date: NaiveDate, reference_date: NaiveDate) -> i64 {
    (next_occurrence(birth_date, reference_date) - reference_date).num_days()
}
