//! date.rs
//!
//! The host date abstraction. Every public function accepts its birth date as
//! anything implementing [`DateInput`], which resolves to a
//! [`chrono::NaiveDateTime`] holding local wall-clock fields. Interval
//! arithmetic is done on the difference of two such values, so no timezone
//! or DST adjustment ever enters the calculation.
//!
//! Accepted inputs:
//!   • `NaiveDateTime` as-is
//!   • `NaiveDate` at midnight
//!   • `DateTime<Tz>` by its local wall-clock fields
//!   • strings in RFC 3339, `YYYY-MM-DDTHH:MM:SS[.fff]`,
//!     `YYYY-MM-DD HH:MM:SS[.fff]` or `YYYY-MM-DD` form
//!   • `Option<T>`, where `None` stands for an absent date

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use tracing::{debug, trace};

use crate::error::AgeError;

/// A value that can be read as a calendar date.
pub trait DateInput {
    /// Resolves the value to a wall-clock date-time.
    ///
    /// Returns [`AgeError::InvalidDate`] when the value is absent or is not a
    /// recognizable date.
    fn to_date_time(&self) -> Result<NaiveDateTime, AgeError>;
}

impl DateInput for NaiveDateTime {
    fn to_date_time(&self) -> Result<NaiveDateTime, AgeError> {
        Ok(*self)
    }
}

impl DateInput for NaiveDate {
    fn to_date_time(&self) -> Result<NaiveDateTime, AgeError> {
        Ok(self.and_time(NaiveTime::MIN))
    }
}

impl<Tz: TimeZone> DateInput for DateTime<Tz> {
    fn to_date_time(&self) -> Result<NaiveDateTime, AgeError> {
        Ok(self.naive_local())
    }
}

impl DateInput for str {
    fn to_date_time(&self) -> Result<NaiveDateTime, AgeError> {
        parse_date_time(self)
    }
}

impl DateInput for String {
    fn to_date_time(&self) -> Result<NaiveDateTime, AgeError> {
        parse_date_time(self)
    }
}

impl<T: DateInput> DateInput for Option<T> {
    fn to_date_time(&self) -> Result<NaiveDateTime, AgeError> {
        match self {
            Some(value) => value.to_date_time(),
            None => Err(AgeError::InvalidDate),
        }
    }
}

impl<T: DateInput + ?Sized> DateInput for &T {
    fn to_date_time(&self) -> Result<NaiveDateTime, AgeError> {
        (**self).to_date_time()
    }
}

fn parse_date_time(raw: &str) -> Result<NaiveDateTime, AgeError> {
    let s = raw.trim();

    if let Ok(dt) = s.parse::<DateTime<FixedOffset>>() {
        return Ok(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.to_date_time();
    }

    debug!(input = raw, "unrecognized date string");
    Err(AgeError::InvalidDate)
}

/// Returns `current`, or the local wall clock when no reference date was given.
///
/// The clock is read on every call.
pub(crate) fn reference_or_now(current: Option<NaiveDateTime>) -> NaiveDateTime {
    current.unwrap_or_else(|| {
        let now = Local::now().naive_local();
        trace!(%now, "reading wall clock");
        now
    })
}

/// Milliseconds elapsed from `from` to `to`.
pub(crate) fn elapsed_millis(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_milliseconds()
}

/// The (year, month) immediately before the given month.
pub(crate) fn previous_month(year: i32, month: u32) -> (i32, u32) {
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
