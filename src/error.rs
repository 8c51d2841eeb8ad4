//! Error types for the agecalc crate.

/// Error type for all fallible operations in the agecalc crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgeError {
    /// The birth date was absent or could not be read as a date.
    #[error("Invalid date of birth provided")]
    InvalidDate,

    /// The birth date lies after the reference date.
    #[error("Date of birth cannot be in the future")]
    FutureDate,

    /// The unit tag is not one of the recognized age units.
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    /// A computed date fell outside the range chrono can represent.
    #[error("Date out of supported range: year {year}")]
    OutOfRange {
        /// The year that could not be represented.
        year: i32,
    },
}
