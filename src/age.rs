//! age.rs
//!
//! This module provides the calendar age of a person as a
//! years / months / days breakdown, plus scalar ages in a chosen unit.
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python’s
//! relativedelta), so we implement the calendar-aware borrowing rules manually.
//!
//! This logic correctly handles:
//!   • month underflow (borrowing from years)
//!   • day underflow (borrowing from previous month)
//!   • leap years
//!   • varying month lengths

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::date::{self, DateInput};
use crate::error::AgeError;
use crate::unit::{AgeUnit, UnitInput};

/// Age, in whole years, from which [`is_adult`] holds.
pub const ADULT_AGE: i64 = 18;

/// Calendar decomposition of the time between a birth date and a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AgeResult {
    pub years: i32,
    /// Always in `0..=11`.
    pub months: i32,
    /// Always shorter than the month it was borrowed from.
    pub days: i32,
}

impl AgeResult {
    /// Whole months covered by the age, ignoring the trailing days.
    pub fn total_months(&self) -> i64 {
        i64::from(self.years) * 12 + i64::from(self.months)
    }
}

/// Resolves both dates and rejects a birth date after the reference date.
fn checked_interval(
    date_of_birth: impl DateInput,
    current_date: Option<NaiveDateTime>,
) -> Result<(NaiveDateTime, NaiveDateTime), AgeError> {
    let dob = date_of_birth.to_date_time()?;
    let current = date::reference_or_now(current_date);
    if dob > current {
        return Err(AgeError::FutureDate);
    }
    Ok((dob, current))
}

/// Returns the calendar age at `current_date` (now when `None`).
///
/// Fails with [`AgeError::InvalidDate`] for an unreadable birth date and
/// [`AgeError::FutureDate`] when the birth date lies after the reference date.
pub fn get_age(
    date_of_birth: impl DateInput,
    current_date: Option<NaiveDateTime>,
) -> Result<AgeResult, AgeError> {
    let (dob, today) = checked_interval(date_of_birth, current_date)?;

    let mut years = today.year() - dob.year();
    let mut months = today.month() as i32 - dob.month() as i32;
    let mut days = today.day() as i32 - dob.day() as i32;

    // Fix day underflow
    if days < 0 {
        months -= 1;

        // Add days from the month before `today` (28–31 depending on month & leap year)
        let (prev_year, prev_month) = date::previous_month(today.year(), today.month());
        days += date::days_in_month(prev_year, prev_month) as i32;

        // Birth day past the end of that month (Jan 31 -> Mar 1): the
        // anniversary has not come round yet.
        days = days.max(0);
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    let age = AgeResult {
        years,
        months,
        days,
    };
    trace!(?age, %dob, %today, "computed calendar age");
    Ok(age)
}

/// Returns the age at `current_date` (now when `None`) as a whole number of `unit`.
///
/// Every unit except months truncates the elapsed milliseconds; years divide by
/// the 365.25-day Julian year. Months subtract the year and month fields and
/// ignore the day of month.
///
/// Date checks run before the unit is resolved, so an unknown unit tag only
/// surfaces as [`AgeError::InvalidUnit`] for a valid, non-future birth date.
pub fn get_age_in(
    date_of_birth: impl DateInput,
    unit: impl UnitInput,
    current_date: Option<NaiveDateTime>,
) -> Result<i64, AgeError> {
    let (dob, current) = checked_interval(date_of_birth, current_date)?;
    let unit = unit.to_unit()?;

    let value = match unit.millis() {
        Some(unit_ms) => date::elapsed_millis(dob, current) / unit_ms,
        None => {
            let years = i64::from(current.year() - dob.year());
            let months = i64::from(current.month()) - i64::from(dob.month());
            years * 12 + months
        }
    };
    Ok(value)
}

/// Whether the person is at least [`ADULT_AGE`] years old at `current_date`.
pub fn is_adult(
    date_of_birth: impl DateInput,
    current_date: Option<NaiveDateTime>,
) -> Result<bool, AgeError> {
    Ok(get_age_in(date_of_birth, AgeUnit::Years, current_date)? >= ADULT_AGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn age(dob: NaiveDateTime, today: NaiveDateTime) -> AgeResult {
        get_age(dob, Some(today)).unwrap()
    }

    #[test]
    fn borrows_days_from_previous_month() {
        // Feb 2024 has 29 days: 10 - 20 + 29
        let a = age(at(2000, 1, 20), at(2024, 3, 10));
        assert_eq!(
            a,
            AgeResult {
                years: 24,
                months: 1,
                days: 19
            }
        );
    }

    #[test]
    fn borrows_from_december_in_january() {
        let a = age(at(2000, 12, 15), at(2024, 1, 5));
        assert_eq!(
            a,
            AgeResult {
                years: 23,
                months: 0,
                days: 21
            }
        );
    }

    #[test]
    fn borrows_months_from_years() {
        let a = age(at(2000, 9, 1), at(2024, 3, 1));
        assert_eq!(
            a,
            AgeResult {
                years: 23,
                months: 6,
                days: 0
            }
        );
    }

    #[test]
    fn day_past_end_of_short_month_clamps_to_zero() {
        let a = age(at(2023, 1, 31), at(2023, 3, 1));
        assert_eq!(
            a,
            AgeResult {
                years: 0,
                months: 1,
                days: 0
            }
        );
        let b = age(at(2023, 1, 31), at(2023, 3, 2));
        assert_eq!(b.days, 0);
        let c = age(at(2023, 1, 31), at(2023, 3, 4));
        assert_eq!(c.days, 1);
    }

    #[test]
    fn time_of_day_does_not_change_calendar_age() {
        let dob = at(1990, 1, 1);
        let today = at(2024, 7, 4).date().and_hms_opt(23, 59, 59).unwrap();
        assert_eq!(age(dob, today), age(dob, at(2024, 7, 4)));
    }

    #[test]
    fn later_time_on_the_same_day_is_future() {
        let dob = at(2024, 1, 1).date().and_hms_opt(12, 0, 0).unwrap();
        assert_eq!(get_age(dob, Some(at(2024, 1, 1))), Err(AgeError::FutureDate));
    }

    #[test]
    fn total_months_ignores_days() {
        let a = age(at(1990, 1, 1), at(2024, 7, 4));
        assert_eq!(a.total_months(), 414);
    }

    #[test]
    fn months_unit_ignores_day_of_month() {
        // one day apart across a month boundary still counts one month
        let months = get_age_in(at(2024, 1, 31), AgeUnit::Months, Some(at(2024, 2, 1))).unwrap();
        assert_eq!(months, 1);
    }

    #[test]
    fn years_unit_uses_julian_year() {
        // 365 days is six hours short of a Julian year
        let years = get_age_in(at(2023, 1, 1), AgeUnit::Years, Some(at(2024, 1, 1))).unwrap();
        assert_eq!(years, 0);
        let years = get_age_in(at(2023, 1, 1), AgeUnit::Years, Some(at(2024, 1, 2))).unwrap();
        assert_eq!(years, 1);
    }

    #[test]
    fn invalid_date_wins_over_invalid_unit() {
        let err = get_age_in("not a date", "bogus", Some(at(2024, 1, 1))).unwrap_err();
        assert_eq!(err, AgeError::InvalidDate);
    }

    #[test]
    fn adult_threshold_is_inclusive() {
        // 18 Julian years after 2000-01-01 is noon on 2017-12-31
        assert!(is_adult(at(2000, 1, 1), Some(at(2018, 1, 1))).unwrap());
        assert!(!is_adult(at(2000, 1, 1), Some(at(2017, 12, 31))).unwrap());
    }
}
