use crate::ParseError;
use crate::consts::{MAX_MONTH, MAX_YEAR, MONTH_NAMES};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A month of the year, `1..=MAX_MONTH` (January..=December).
///
/// Displays, serializes and parses as the English full month name
/// (`"April"`), which is the key the catalog groups by and the optimizer
/// filters on. Parsing also accepts the month number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Month a concrete date falls in
    pub fn of(date: NaiveDate) -> Self {
        // month0 is 0..=11, so this never saturates
        let offset = u8::try_from(date.month0()).unwrap_or(MAX_MONTH - 1);
        Self(NonZeroU8::MIN.saturating_add(offset))
    }

    /// Looks a month up by English name, ignoring case
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` if the name matches no month.
    pub fn from_name(name: &str) -> Result<Self, ParseError> {
        let trimmed = name.trim();
        MONTH_NAMES
            .iter()
            .position(|candidate| !candidate.is_empty() && candidate.eq_ignore_ascii_case(trimmed))
            .and_then(|index| u8::try_from(index).ok())
            .map_or_else(|| Err(ParseError::InvalidFormat(trimmed.to_owned())), Self::new)
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// English full month name, e.g. `"February"`
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.0.get() as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl FromStr for Month {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            let value = trimmed
                .parse::<u8>()
                .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;
            return Self::new(value);
        }
        Self::from_name(trimmed)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Month {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(2026).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid() {
        assert!(matches!(Year::new(0), Err(ParseError::InvalidYear(0))));
        assert!(matches!(Year::new(10000), Err(ParseError::InvalidYear(10000))));
    }

    #[test]
    fn test_year_display_pads() {
        assert_eq!(Year::new(2026).unwrap().to_string(), "2026");
        assert_eq!(Year::new(42).unwrap().to_string(), "0042");
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2026).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "2026");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);

        let result: Result<Year, _> = serde_json::from_str("0");
        assert!(result.is_err());
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(Month::new(1).unwrap().name(), "January");
        assert_eq!(Month::new(4).unwrap().name(), "April");
        assert_eq!(Month::new(12).unwrap().to_string(), "December");
    }

    #[test]
    fn test_month_of_date() {
        assert_eq!(Month::of(date(2026, 1, 1)).get(), 1);
        assert_eq!(Month::of(date(2026, 4, 30)).get(), 4);
        assert_eq!(Month::of(date(2026, 12, 31)).get(), 12);
    }

    #[test]
    fn test_month_from_str_cases() {
        struct TestCase {
            input:    &'static str,
            expected: Option<u8>,
        }

        let cases = [
            TestCase { input: "February", expected: Some(2) },
            TestCase { input: "february", expected: Some(2) },
            TestCase { input: " November ", expected: Some(11) },
            TestCase { input: "7", expected: Some(7) },
            TestCase { input: "13", expected: None },
            TestCase { input: "Feb", expected: None },
            TestCase { input: "", expected: None },
        ];

        for case in &cases {
            let parsed = case.input.parse::<Month>().ok().map(Month::get);
            assert_eq!(parsed, case.expected, "input {:?}", case.input);
        }
    }

    #[test]
    fn test_month_serde_uses_name() {
        let month = Month::new(10).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, r#""October""#);

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);

        let result: Result<Month, _> = serde_json::from_str(r#""Smarch""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_month_ordering() {
        let m1 = Month::new(3).unwrap();
        let m2 = Month::new(8).unwrap();
        assert!(m1 < m2);
    }
}
