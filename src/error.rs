//! Error types for solar geometry calculations.

/// Result type alias for operations in this crate.
pub type Result<T> = std::result::Result<T, SolarError>;

/// Input-domain failures. Degenerate geometry never ends up here; those
/// operations substitute documented sentinel values instead.
#[derive(Debug, thiserror::Error)]
pub enum SolarError {
    #[error("invalid date: month {month}, day {day}")]
    InvalidDate { month: u32, day: u32 },
    #[error("day number {0} outside 1..=366")]
    DayNumberOutOfRange(i32),
    #[error("coordinate {axis} is not a number")]
    NonNumericCoordinate { axis: char },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl SolarError {
    #[must_use]
    pub const fn invalid_date(month: u32, day: u32) -> Self {
        Self::InvalidDate { month, day }
    }
}

/// Validates that a day number lies in a (possibly leap) year.
pub fn check_day_number(n: i32) -> Result<i32> {
    if !(1..=366).contains(&n) {
        return Err(SolarError::DayNumberOutOfRange(n));
    }
    Ok(n)
}
