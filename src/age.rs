//! age.rs
//!
//! Elapsed time between a birth date and "today", broken down as
//!     "X years, Y months, Z days"
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python’s
//! relativedelta), so we implement the calendar-aware borrowing rules manually.
//!
//! This logic correctly handles:
//!   • month underflow (borrowing from years)
//!   • day underflow (borrowing from the month before today's month)
//!   • leap years
//!   • varying month lengths

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Years, months and days elapsed since a birth date.
///
/// `months` is always in `0..=11` and `days` in `0..=30`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBreakdown {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl AgeBreakdown {
    /// Computes the breakdown, or `None` if `birth` is after `today`.
    pub fn between(birth: NaiveDate, today: NaiveDate) -> Option<Self> {
        if birth > today {
            return None;
        }

        let mut years = today.year() - birth.year();
        let mut months = today.month() as i32 - birth.month() as i32;
        let mut days = today.day() as i32 - birth.day() as i32;

        // Fix day underflow. A single borrow is not always enough: born on
        // the 31st and today is the 1st of March leaves days at -2 after
        // borrowing February, so keep walking back.
        let (mut year, mut month) = (today.year(), today.month());
        while days < 0 {
            months -= 1;
            (year, month) = previous_month(year, month);
            days += days_in_month(year, month) as i32;
        }

        // Fix month underflow
        if months < 0 {
            years -= 1;
            months += 12;
        }

        Some(Self {
            years: u32::try_from(years).ok()?,
            months: u32::try_from(months).ok()?,
            days: u32::try_from(days).ok()?,
        })
    }

    /// Headline form, e.g. "24 years old".
    pub fn years_old_line(&self) -> String {
        format!("{} years old", self.years)
    }
}

impl fmt::Display for AgeBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} years, {} months, {} days",
            self.years, self.months, self.days
        )
    }
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Returns number of days in a given year/month (handles leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
