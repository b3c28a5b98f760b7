//! Calendar date value stored as a `"M-D-YYYY"` string.
//!
//! # Responsibility
//! - Hold the month/day/year triple attached to tasks and goals.
//! - Convert between the struct and its canonical storage string.
//!
//! # Invariants
//! - The storage form is `month-day-year` with no zero padding.
//! - Calendar validity (month range, days-in-month) is deliberately not
//!   enforced; the storage layer round-trips whatever it is given.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Month/day/year triple used for deadlines and creation dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Date {
    /// Month of the year, nominally 1-12.
    pub month: u32,
    /// Day of the month, nominally 1-31.
    pub day: u32,
    /// Full year, e.g. 2024.
    pub year: i32,
}

impl Date {
    pub fn new(month: u32, day: u32, year: i32) -> Self {
        Self { month, day, year }
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.month, self.day, self.year)
    }
}

/// Failure to parse a persisted or user-supplied date string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParseError {
    input: String,
}

impl DateParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl Display for DateParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid date `{}`; expected `M-D-YYYY` with numeric fields",
            self.input
        )
    }
}

impl Error for DateParseError {}

impl FromStr for Date {
    type Err = DateParseError;

    /// Parses the canonical `"M-D-YYYY"` form.
    ///
    /// Three `-`-separated integer fields are required; anything else is a
    /// parse error.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.splitn(3, '-');
        let month = parse_field(&mut parts, value)?;
        let day = parse_field(&mut parts, value)?;
        let year = parse_field(&mut parts, value)?;
        Ok(Self { month, day, year })
    }
}

fn parse_field<'a, T: FromStr>(
    parts: &mut impl Iterator<Item = &'a str>,
    original: &str,
) -> Result<T, DateParseError> {
    parts
        .next()
        .and_then(|field| field.trim().parse::<T>().ok())
        .ok_or_else(|| DateParseError::new(original))
}

#[cfg(test)]
mod tests {
    use super::Date;

    #[test]
    fn formats_without_zero_padding() {
        let date = Date::new(3, 7, 2024);
        assert_eq!(date.to_string(), "3-7-2024");
    }

    #[test]
    fn parses_canonical_form() {
        let date: Date = "12-31-2025".parse().unwrap();
        assert_eq!(date, Date::new(12, 31, 2025));
    }

    #[test]
    fn round_trips_through_string_form() {
        let date = Date::new(1, 1, 1999);
        let parsed: Date = date.to_string().parse().unwrap();
        assert_eq!(parsed, date);
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!("".parse::<Date>().is_err());
        assert!("12-2024".parse::<Date>().is_err());
        assert!("a-b-c".parse::<Date>().is_err());
    }

    #[test]
    fn does_not_enforce_calendar_validity() {
        // Out-of-range fields round-trip untouched; validity is not a
        // storage-layer concern.
        let date: Date = "13-40-2024".parse().unwrap();
        assert_eq!(date, Date::new(13, 40, 2024));
    }
}
