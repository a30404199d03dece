//! Date-range rules for bookings.
//!
//! A booking spans at least one night: the end date is strictly after the
//! start date. Pickers additionally refuse dates in the past.

use chrono::{Days, NaiveDate};

use crate::error::DateRangeError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn check_range(start: NaiveDate, end: NaiveDate) -> Result<(), DateRangeError> {
    if end <= start {
        return Err(DateRangeError::EndNotAfterStart { start, end });
    }
    Ok(())
}

/// Earliest date a start picker offers.
pub fn earliest_start(today: NaiveDate) -> NaiveDate {
    today
}

/// Earliest date an end picker offers: the day after the chosen start, or
/// today while no start is chosen.
pub fn earliest_end(start: Option<NaiveDate>, today: NaiveDate) -> NaiveDate {
    match start {
        Some(start) => start.checked_add_days(Days::new(1)).unwrap_or(start),
        None => today,
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
}

#[cfg(test)]
#[path = "tests/dates_tests.rs"]
mod tests;
