//! Calendar ages, next birthdays and zodiac signs.
//!
//! Every function takes the birth date as any [`DateInput`] (chrono dates and
//! date-times, date strings, or an `Option` of those) and, where it needs one,
//! a reference date as `Option<NaiveDateTime>`. Passing `None` reads the local
//! wall clock at call time.
//!
//! | Function | Result |
//! |----------|--------|
//! | [`get_age`] | years / months / days, calendar accurate |
//! | [`get_age_in`] | whole years, months, weeks, days, hours, minutes or seconds |
//! | [`is_adult`] | at least [`ADULT_AGE`] years old |
//! | [`get_next_birthday`] | date of the next birthday |
//! | [`get_days_until_next_birthday`] | days left, partial days rounded up |
//! | [`get_zodiac_sign`] | Western tropical sign |
//!
//! # Quick start
//!
//! ```
//! use agecalc::{AgeResult, AgeUnit, get_age, get_age_in};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 7, 4)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 0)
//!     .unwrap();
//!
//! let age = get_age("1990-01-01", Some(today)).unwrap();
//! assert_eq!(age, AgeResult { years: 34, months: 6, days: 3 });
//!
//! let months = get_age_in("1990-01-01", AgeUnit::Months, Some(today)).unwrap();
//! assert_eq!(months, 414);
//! ```
//!
//! `get_age_in` with [`AgeUnit::Years`] divides elapsed time by a 365.25-day
//! year, so it can disagree with `get_age(..).years` by one around birthdays.

pub mod age;
pub mod birthday;
pub mod date;
pub mod error;
pub mod unit;
pub mod zodiac;

pub use age::{ADULT_AGE, AgeResult, get_age, get_age_in, is_adult};
pub use birthday::{get_days_until_next_birthday, get_next_birthday};
pub use date::{DateInput, days_in_month, is_leap_year};
pub use error::AgeError;
pub use unit::{AgeUnit, UnitInput};
pub use zodiac::{ZodiacSign, get_zodiac_sign};
