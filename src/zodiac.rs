//! Western tropical zodiac signs.

use std::fmt;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::date::DateInput;
use crate::error::AgeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// First and last (month, day) of each sign, inclusive, in lookup order.
/// Pisces takes whatever is left.
const SIGN_RANGES: [(ZodiacSign, (u32, u32), (u32, u32)); 11] = [
    (ZodiacSign::Aries, (3, 21), (4, 19)),
    (ZodiacSign::Taurus, (4, 20), (5, 20)),
    (ZodiacSign::Gemini, (5, 21), (6, 20)),
    (ZodiacSign::Cancer, (6, 21), (7, 22)),
    (ZodiacSign::Leo, (7, 23), (8, 22)),
    (ZodiacSign::Virgo, (8, 23), (9, 22)),
    (ZodiacSign::Libra, (9, 23), (10, 22)),
    (ZodiacSign::Scorpio, (10, 23), (11, 21)),
    (ZodiacSign::Sagittarius, (11, 22), (12, 21)),
    (ZodiacSign::Capricorn, (12, 22), (1, 19)),
    (ZodiacSign::Aquarius, (1, 20), (2, 18)),
];

impl ZodiacSign {
    /// The sign for a month (1–12) and day of month.
    pub fn from_month_day(month: u32, day: u32) -> ZodiacSign {
        SIGN_RANGES
            .iter()
            .find(|(_, (start_month, start_day), (end_month, end_day))| {
                (month == *start_month && day >= *start_day)
                    || (month == *end_month && day <= *end_day)
            })
            .map(|(sign, _, _)| *sign)
            .unwrap_or(ZodiacSign::Pisces)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the zodiac sign for a birth date. Only month and day are used.
pub fn get_zodiac_sign(date_of_birth: impl DateInput) -> Result<ZodiacSign, AgeError> {
    let dob = date_of_birth.to_date_time()?;
    Ok(ZodiacSign::from_month_day(dob.month(), dob.day()))
}
