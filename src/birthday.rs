//! Next-birthday lookups.
//!
//! A birthday falling on February 29 is observed on March 1 in years without
//! that day. Birthdays are returned as plain dates and compared against the
//! reference date at midnight, so on the birthday itself any time after
//! midnight already points at the following year.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::date::{self, DateInput};
use crate::error::AgeError;
use crate::unit::MS_PER_DAY;

/// Returns the first birthday on or after `current_date` (now when `None`).
///
/// Unlike the age functions, a birth date after the reference date is
/// accepted; its month and day are all that matter here.
pub fn get_next_birthday(
    date_of_birth: impl DateInput,
    current_date: Option<NaiveDateTime>,
) -> Result<NaiveDate, AgeError> {
    let dob = date_of_birth.to_date_time()?;
    let current = date::reference_or_now(current_date);

    let this_year = birthday_in(current.year(), dob.month(), dob.day())?;
    if this_year.and_time(NaiveTime::MIN) >= current {
        return Ok(this_year);
    }

    let next_year = current.year() + 1;
    birthday_in(next_year, dob.month(), dob.day())
}

/// Whole days until the next birthday, rounding any partial day up.
pub fn get_days_until_next_birthday(
    date_of_birth: impl DateInput,
    current_date: Option<NaiveDateTime>,
) -> Result<i64, AgeError> {
    let current = date::reference_or_now(current_date);
    let next = get_next_birthday(date_of_birth, Some(current))?;

    let remaining = date::elapsed_millis(current, next.and_time(NaiveTime::MIN));
    Ok((remaining + MS_PER_DAY - 1) / MS_PER_DAY)
}

fn birthday_in(year: i32, month: u32, day: u32) -> Result<NaiveDate, AgeError> {
    let (month, day) = if month == 2 && day == 29 && !date::is_leap_year(year) {
        debug!(year, "no February 29, birthday rolls over to March 1");
        (3, 1)
    } else {
        (month, day)
    };
    NaiveDate::from_ymd_opt(year, month, day).ok_or(AgeError::OutOfRange { year })
}
