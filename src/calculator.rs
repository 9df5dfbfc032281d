//! Turns a fully typed `DD/MM/YYYY` string into an [`AgeBreakdown`].
//!
//! "Today" is always passed in by the caller; nothing in here reads the clock.

use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;
use thiserror::Error;

use crate::age::AgeBreakdown;

/// Earliest accepted birth year (inclusive).
pub const MIN_YEAR: i32 = 1900;

/// Why a complete date string produced no age. Every variant is recoverable
/// by editing the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeError {
    #[error("Please enter a valid date.")]
    MalformedInput,
    #[error("That date hasn't arrived yet.")]
    FutureDate,
    #[error("Please enter a valid date.")]
    OutOfRange,
}

/// How day/month values that do not exist on the calendar are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CalendarPolicy {
    /// `31/04/2000` is rejected as malformed.
    #[default]
    Strict,
    /// Overflow rolls forward and zero rolls back: `31/04/2000` is
    /// 1 May 2000, `00/01/2000` is 31 December 1999.
    Lenient,
}

/// Splits and parses `DD/MM/YYYY` into a calendar date.
pub fn parse_birth_date(input: &str, policy: CalendarPolicy) -> Result<NaiveDate, AgeError> {
    let parts: Vec<&str> = input.split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(AgeError::MalformedInput);
    };

    let day: u32 = parse_part(day)?;
    let month: u32 = parse_part(month)?;
    let year: i32 = parse_part(year)?;

    let date = match policy {
        CalendarPolicy::Strict => NaiveDate::from_ymd_opt(year, month, day),
        CalendarPolicy::Lenient => roll_over(year, month, day),
    };
    date.ok_or(AgeError::MalformedInput)
}

fn parse_part<T: FromStr>(part: &str) -> Result<T, AgeError> {
    // `str::parse` would also take a leading '+'
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AgeError::MalformedInput);
    }
    part.parse().map_err(|_| AgeError::MalformedInput)
}

fn roll_over(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let new_year = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let first_of_month = match month {
        0 => new_year.checked_sub_months(Months::new(1))?,
        m => new_year.checked_add_months(Months::new(m - 1))?,
    };
    match day {
        0 => first_of_month.checked_sub_days(Days::new(1)),
        d => first_of_month.checked_add_days(Days::new(u64::from(d - 1))),
    }
}

/// Validates the birth date against `today` and computes the elapsed time.
pub fn calculate_age(
    input: &str,
    today: NaiveDate,
    policy: CalendarPolicy,
) -> Result<AgeBreakdown, AgeError> {
    let birth = parse_birth_date(input, policy)?;

    if birth > today {
        return Err(AgeError::FutureDate);
    }
    if birth.year() < MIN_YEAR || birth.year() > today.year() {
        return Err(AgeError::OutOfRange);
    }

    AgeBreakdown::between(birth, today).ok_or(AgeError::FutureDate)
}
