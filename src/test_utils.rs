//! Builders shared by the unit tests.

use crate::{Category, Holiday, HolidayDate, Month};
use chrono::NaiveDate;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid test date {year}-{month:02}-{day:02}"))
}

pub fn month(value: u8) -> Month {
    Month::new(value).expect("invalid test month")
}

/// Minimal holiday spanning `start..=end` (or a single day when `end` is `None`)
pub fn holiday(id: &'static str, start: &str, end: Option<&str>) -> Holiday {
    Holiday {
        id,
        name: id,
        name_local: None,
        start_date: start.parse::<HolidayDate>().expect("invalid test start date"),
        end_date: end.map(|e| e.parse::<HolidayDate>().expect("invalid test end date")),
        day: "",
        category: Category::National,
        description: None,
        lunar_dependent: false,
        icon: "",
    }
}
