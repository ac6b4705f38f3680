mod catalog;
mod consts;
mod data;
mod i18n;
mod optimizer;
mod prelude;
mod range;
#[cfg(test)]
mod test_utils;
mod types;

pub use catalog::{
    CatalogError, Category, Holiday, HolidayCatalog, SubstituteWorkDay, catalog, format_date,
    format_date_range, group_holidays_by_month, holiday_days, holidays_by_category, is_weekend,
    total_holiday_days, upcoming_holidays,
};
pub use consts::*;
pub use i18n::{Locale, localize_number, savings_text};
pub use optimizer::{
    Difficulty, Efficiency, LeaveSuggestion, OptimizationOptions, Strategy, TemplateError,
    all_leave_suggestions, default_leave_suggestions, generate_leave_suggestions,
    leave_suggestions_by_difficulty, leave_suggestions_by_month,
};
pub use range::{DateRange, RangeError};
pub use types::{Month, Year};

use crate::prelude::*;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// A holiday date as published by the authorities.
///
/// Most dates are fixed in advance. Holidays tied to the lunar calendar or
/// to moon sighting may still be unannounced; those carry only the year
/// (when known) and are left out of every day count and date computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayDate {
    /// Announced calendar date
    Resolved(NaiveDate),
    /// Not yet announced (`2026-TBD`, or `YYYY-TBD` when even the year is open)
    Unresolved { year: Option<Year> },
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl HolidayDate {
    /// Creates a resolved date from its components
    ///
    /// # Errors
    /// Returns the matching `ParseError` variant for an out-of-range component.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        NaiveDate::from_ymd_opt(i32::from(year.get()), u32::from(month.get()), u32::from(day))
            .map(Self::Resolved)
            .ok_or(ParseError::InvalidDay {
                month: month.get(),
                day,
                year: year.get(),
            })
    }

    /// Creates an unresolved date for a known year
    pub const fn unresolved(year: Year) -> Self {
        Self::Unresolved { year: Some(year) }
    }

    /// Returns the concrete date, if announced
    pub const fn date(&self) -> Option<NaiveDate> {
        match *self {
            Self::Resolved(date) => Some(date),
            Self::Unresolved { .. } => None,
        }
    }

    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Month of a resolved date
    pub fn month(&self) -> Option<Month> {
        self.date().map(Month::of)
    }
}

impl From<NaiveDate> for HolidayDate {
    fn from(date: NaiveDate) -> Self {
        Self::Resolved(date)
    }
}

impl fmt::Display for HolidayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Unresolved { year: Some(year) } => {
                write!(f, "{year}{DATE_SEPARATOR}{TBD_MARKER}")
            }
            Self::Unresolved { year: None } => {
                write!(f, "{UNKNOWN_YEAR}{DATE_SEPARATOR}{TBD_MARKER}")
            }
        }
    }
}

impl FromStr for HolidayDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // Anything mentioning TBD is unresolved; keep the year only if it parses
        if trimmed.contains(TBD_MARKER) {
            let year = trimmed
                .split(DATE_SEPARATOR)
                .next()
                .and_then(|part| part.trim().parse::<u16>().ok())
                .and_then(|value| Year::new(value).ok());
            return Ok(Self::Unresolved { year });
        }

        parse_iso_date(trimmed).map(Self::Resolved)
    }
}

/// Parses a strict `YYYY-MM-DD` date
pub(crate) fn parse_iso_date(s: &str) -> Result<NaiveDate, ParseError> {
    let parts: Vec<&str> = s.trim().split(DATE_SEPARATOR).collect();
    if parts.len() != 3 {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    }

    // Parse components - InvalidFormat if not numeric
    let year = parts[0]
        .parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))?;
    let month = parts[1]
        .parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))?;
    let day = parts[2]
        .parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))?;

    match HolidayDate::from_ymd(year, month, day)? {
        HolidayDate::Resolved(date) => Ok(date),
        HolidayDate::Unresolved { .. } => Err(ParseError::InvalidFormat(s.to_owned())),
    }
}

impl serde::Serialize for HolidayDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for HolidayDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
