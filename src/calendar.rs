use std::fmt;

use chrono::Datelike;

use crate::error::{Result, SolarError};

/// Days elapsed before the first of each month in a common year.
pub const CUMULATIVE_DAYS: [i32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Recommended average day of each month for daily-mean calculations.
pub const RECOMMENDED_DAYS: [(u32, u32); 12] = [
    (1, 17),
    (2, 16),
    (3, 16),
    (4, 15),
    (5, 15),
    (6, 11),
    (7, 17),
    (8, 16),
    (9, 15),
    (10, 15),
    (11, 14),
    (12, 10),
];

/// The usual set of days drawn on a sun-path diagram.
pub const SEVEN_DAYS: [(u32, u32); 7] = [
    (1, 21),
    (2, 20),
    (3, 20),
    (4, 20),
    (5, 21),
    (6, 21),
    (12, 21),
];

pub const SOLSTICE_EQUINOX_DAYS: [(u32, u32); 3] = [(3, 22), (6, 21), (12, 21)];

fn ordinal(month: u32, day: u32) -> i32 {
    CUMULATIVE_DAYS[(month - 1) as usize] + day as i32
}

/// Day number of `(month, day)` in a common year.
///
/// Only a coarse check is made: month in 1..=12 and day in 1..=31. Whether
/// the day exists in that month is left to the caller.
pub fn day_number(month: u32, day: u32) -> Result<i32> {
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(SolarError::invalid_date(month, day));
    }
    Ok(ordinal(month, day))
}

/// Vector form of [`day_number`]. Fails on the first invalid pair.
pub fn day_numbers(dates: &[(u32, u32)]) -> Result<Vec<i32>> {
    dates.iter().map(|&(m, d)| day_number(m, d)).collect()
}

/// Common-year day number of a chrono date. February 29 shares its number
/// with March 1.
pub fn day_number_of<D: Datelike>(date: &D) -> i32 {
    ordinal(date.month(), date.day())
}

pub fn month_day_from_day_number(n: i32) -> Result<(u32, u32)> {
    if !(1..=365).contains(&n) {
        return Err(SolarError::DayNumberOutOfRange(n));
    }
    let month = CUMULATIVE_DAYS.iter().rposition(|&before| before < n).unwrap_or(0);
    Ok((month as u32 + 1, (n - CUMULATIVE_DAYS[month]) as u32))
}

/// A decimal hour split into hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hms {
    pub negative: bool,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: f64,
}

impl Hms {
    pub fn from_decimal_hours(time: f64) -> Self {
        let abs = time.abs();
        let hours = abs.trunc();
        // Rounded so that e.g. 0.1 h does not come out as 5 min 59.999 s.
        let minutes = ((abs - hours) * 60.0 * 1e9).round() / 1e9;
        let whole_minutes = minutes.trunc();
        let seconds = (minutes - whole_minutes) * 60.0;
        if whole_minutes >= 60.0 {
            return Self {
                negative: time < 0.0,
                hours: hours as u32 + 1,
                minutes: 0,
                seconds: 0.0,
            };
        }
        Self {
            negative: time < 0.0,
            hours: hours as u32,
            minutes: whole_minutes as u32,
            seconds,
        }
    }

    pub fn to_decimal_hours(&self) -> f64 {
        let value = self.hours as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0;
        if self.negative {
            -value
        } else {
            value
        }
    }
}

/// Formats as `[-]HH:MM:SS`; the formatter precision applies to seconds.
impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(0);
        let width = if prec > 0 { prec + 3 } else { 2 };
        let sign = if self.negative { "-" } else { "" };
        let (mut hours, mut minutes) = (self.hours, self.minutes);
        let mut seconds = if prec == 0 {
            self.seconds.trunc()
        } else {
            let scale = 10f64.powi(prec.min(15) as i32);
            (self.seconds * scale).round() / scale
        };
        // Seconds rounded up to a full minute carry into minutes and hours.
        if seconds >= 60.0 {
            seconds = 0.0;
            minutes += 1;
        }
        if minutes >= 60 {
            minutes -= 60;
            hours += 1;
        }
        write!(
            f,
            "{}{:02}:{:02}:{:0width$.prec$}",
            sign,
            hours,
            minutes,
            seconds,
            width = width,
            prec = prec
        )
    }
}
