use jiff::{Zoned, civil::Date};

use crate::clock::{Clock, SystemClock};

/// Formats a calendar date as `YYYY-MM-DD`.
///
/// The year is padded to at least four digits, month and day to two. A
/// negative year is written as is, with its sign and without padding.
pub fn format_date(date: Date) -> String {
    let year = date.year();
    if year < 0 {
        format!("{}-{:02}-{:02}", year, date.month(), date.day())
    } else {
        format!("{:04}-{:02}-{:02}", year, date.month(), date.day())
    }
}

/// Formats the date an instant falls on in its own time zone.
pub fn format_instant(instant: &Zoned) -> String {
    format_date(instant.date())
}

/// Formats the current date as reported by `clock`.
pub fn today<C: Clock + ?Sized>(clock: &C) -> String {
    format_instant(&clock.now())
}

/// Formats `instant`, or the current local date when none is given.
pub fn to_local_yyyymmdd(instant: Option<&Zoned>) -> String {
    match instant {
        Some(instant) => format_instant(instant),
        None => today(&SystemClock),
    }
}
