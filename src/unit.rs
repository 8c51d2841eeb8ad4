//! Units for scalar age queries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AgeError;

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
pub const MS_PER_WEEK: i64 = 7 * MS_PER_DAY;
/// 365.25 days, the average Julian year.
pub const MS_PER_JULIAN_YEAR: i64 = 36_525 * MS_PER_DAY / 100;

/// The unit an age is expressed in by [`get_age_in`](crate::get_age_in).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeUnit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl AgeUnit {
    pub const ALL: [AgeUnit; 7] = [
        AgeUnit::Years,
        AgeUnit::Months,
        AgeUnit::Weeks,
        AgeUnit::Days,
        AgeUnit::Hours,
        AgeUnit::Minutes,
        AgeUnit::Seconds,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AgeUnit::Years => "years",
            AgeUnit::Months => "months",
            AgeUnit::Weeks => "weeks",
            AgeUnit::Days => "days",
            AgeUnit::Hours => "hours",
            AgeUnit::Minutes => "minutes",
            AgeUnit::Seconds => "seconds",
        }
    }

    /// Length of one unit in milliseconds.
    ///
    /// `None` for [`AgeUnit::Months`], which is counted by calendar fields
    /// rather than elapsed time.
    pub fn millis(self) -> Option<i64> {
        match self {
            AgeUnit::Years => Some(MS_PER_JULIAN_YEAR),
            AgeUnit::Months => None,
            AgeUnit::Weeks => Some(MS_PER_WEEK),
            AgeUnit::Days => Some(MS_PER_DAY),
            AgeUnit::Hours => Some(MS_PER_HOUR),
            AgeUnit::Minutes => Some(MS_PER_MINUTE),
            AgeUnit::Seconds => Some(MS_PER_SECOND),
        }
    }
}

impl fmt::Display for AgeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeUnit {
    type Err = AgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgeUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| AgeError::InvalidUnit(s.to_string()))
    }
}

/// A value that names an [`AgeUnit`], either the enum itself or its tag.
pub trait UnitInput {
    fn to_unit(&self) -> Result<AgeUnit, AgeError>;
}

impl UnitInput for AgeUnit {
    fn to_unit(&self) -> Result<AgeUnit, AgeError> {
        Ok(*self)
    }
}

impl UnitInput for str {
    fn to_unit(&self) -> Result<AgeUnit, AgeError> {
        self.parse()
    }
}

impl UnitInput for String {
    fn to_unit(&self) -> Result<AgeUnit, AgeError> {
        self.parse()
    }
}

impl<T: UnitInput + ?Sized> UnitInput for &T {
    fn to_unit(&self) -> Result<AgeUnit, AgeError> {
        (**self).to_unit()
    }
}
