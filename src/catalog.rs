//! The holiday catalog: typed holiday records for one year and the derived
//! views a calendar page needs (day counts, month grouping, upcoming
//! holidays, category filters).

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::data::{self, HolidayRow, SubstituteRow};
use crate::{DateRange, HolidayDate, Locale, Month, ParseError, TBD_MARKER, prelude::*};

static CATALOG: LazyLock<HolidayCatalog> = LazyLock::new(data::myanmar_2026);

/// The bundled catalog, built on first use and shared read-only afterwards
pub fn catalog() -> &'static HolidayCatalog {
    &CATALOG
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[display(fmt = "National")]
    National,
    #[display(fmt = "Religious")]
    Religious,
    #[display(fmt = "Cultural")]
    Cultural,
    #[display(fmt = "International")]
    International,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::National, Self::Religious, Self::Cultural, Self::International];

    /// Lowercase key, as serialized
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::National => "national",
            Self::Religious => "religious",
            Self::Cultural => "cultural",
            Self::International => "international",
        }
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::InvalidFormat(trimmed.to_owned()))
    }
}

/// A public holiday. Without an end date it lasts one day; with one, it
/// covers `start_date..=end_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub id:              &'static str,
    pub name:            &'static str,
    /// Myanmar name
    pub name_local:      Option<&'static str>,
    pub start_date:      HolidayDate,
    pub end_date:        Option<HolidayDate>,
    /// Weekday label as published, e.g. `"Thu - Fri"`
    pub day:             &'static str,
    pub category:        Category,
    pub description:     Option<&'static str>,
    pub lunar_dependent: bool,
    pub icon:            &'static str,
}

impl Holiday {
    /// Number of days off, counting both ends.
    ///
    /// Unannounced bounds make the span unknowable, so such a holiday counts
    /// as a single day here; `HolidayCatalog::total_holiday_days` drops
    /// unannounced holidays altogether.
    pub fn days(&self) -> u32 {
        match self.end_date {
            None => 1,
            Some(_) => self.date_range().map_or(1, |range| range.len_days()),
        }
    }

    /// Concrete span of the holiday, if every bound is announced
    pub fn date_range(&self) -> Option<DateRange> {
        let start = self.start_date.date()?;
        match self.end_date {
            None => Some(DateRange::single(start)),
            Some(end) => DateRange::new(start, end.date()?).ok(),
        }
    }

    /// Last day of the holiday: the end date, or the start date for one-day holidays
    pub fn effective_end(&self) -> HolidayDate {
        self.end_date.unwrap_or(self.start_date)
    }

    pub fn is_resolved(&self) -> bool {
        self.start_date.is_resolved() && self.end_date.is_none_or(|end| end.is_resolved())
    }

    pub fn covers(&self, date: NaiveDate) -> bool {
        self.date_range().is_some_and(|range| range.contains(date))
    }

    /// Month the holiday starts in
    pub fn month(&self) -> Option<Month> {
        self.start_date.month()
    }

    pub fn display_name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => self.name,
            Locale::Myanmar => self.name_local.unwrap_or(self.name),
        }
    }
}

/// A weekend day redesignated as a working day to offset a holiday that fell
/// on a weekend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstituteWorkDay {
    pub id:           &'static str,
    pub date:         NaiveDate,
    pub day:          &'static str,
    pub reason:       &'static str,
    pub reason_local: &'static str,
    /// Id of the compensated holiday
    pub for_holiday:  &'static str,
}

/// A catalog row that could not be turned into a typed record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("{id}: {source}")]
    Date {
        id:     &'static str,
        #[source]
        source: ParseError,
    },

    #[error("{id}: end date {end} is before start date {start}")]
    InvertedRange {
        id:    &'static str,
        start: NaiveDate,
        end:   NaiveDate,
    },

    #[error("{id}: substitute workday {date} is not a weekend")]
    NotAWeekend { id: &'static str, date: NaiveDate },
}

impl TryFrom<&HolidayRow> for Holiday {
    type Error = CatalogError;

    fn try_from(row: &HolidayRow) -> Result<Self, Self::Error> {
        let parse = |s: &str| {
            s.parse::<HolidayDate>()
                .map_err(|source| CatalogError::Date { id: row.id, source })
        };
        let start_date = parse(row.start)?;
        let end_date = row.end.map(parse).transpose()?;

        if let (Some(start), Some(end)) = (start_date.date(), end_date.and_then(|e| e.date())) {
            if end < start {
                return Err(CatalogError::InvertedRange { id: row.id, start, end });
            }
        }

        Ok(Self {
            id: row.id,
            name: row.name,
            name_local: row.name_local,
            start_date,
            end_date,
            day: row.day,
            category: row.category,
            description: row.description,
            lunar_dependent: row.lunar_dependent,
            icon: row.icon,
        })
    }
}

impl TryFrom<&SubstituteRow> for SubstituteWorkDay {
    type Error = CatalogError;

    fn try_from(row: &SubstituteRow) -> Result<Self, Self::Error> {
        let date = crate::parse_iso_date(row.date)
            .map_err(|source| CatalogError::Date { id: row.id, source })?;
        if !is_weekend(date) {
            return Err(CatalogError::NotAWeekend { id: row.id, date });
        }

        Ok(Self {
            id: row.id,
            date,
            day: row.day,
            reason: row.reason,
            reason_local: row.reason_local,
            for_holiday: row.for_holiday,
        })
    }
}

/// An ordered, immutable list of holidays for one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayCatalog {
    year:                 u16,
    holidays:             Vec<Holiday>,
    substitute_work_days: Vec<SubstituteWorkDay>,
}

impl HolidayCatalog {
    pub const fn new(year: u16, holidays: Vec<Holiday>, substitute_work_days: Vec<SubstituteWorkDay>) -> Self {
        Self { year, holidays, substitute_work_days }
    }

    /// Builds a catalog from literal rows. A malformed row is an authoring
    /// mistake: it is logged and left out rather than failing the whole table.
    pub(crate) fn from_rows(year: u16, holiday_rows: &[HolidayRow], substitute_rows: &[SubstituteRow]) -> Self {
        let holidays = holiday_rows
            .iter()
            .filter_map(|row| {
                Holiday::try_from(row)
                    .inspect_err(|err| tracing::warn!(%err, "skipping malformed holiday row"))
                    .ok()
            })
            .collect();
        let substitute_work_days = substitute_rows
            .iter()
            .filter_map(|row| {
                SubstituteWorkDay::try_from(row)
                    .inspect_err(|err| tracing::warn!(%err, "skipping malformed substitute workday row"))
                    .ok()
            })
            .collect();

        Self::new(year, holidays, substitute_work_days)
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    pub fn substitute_work_days(&self) -> &[SubstituteWorkDay] {
        &self.substitute_work_days
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Holiday> {
        self.holidays.iter()
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Looks a holiday up by id
    pub fn get(&self, id: &str) -> Option<&Holiday> {
        self.holidays.iter().find(|holiday| holiday.id == id)
    }

    /// Days off across the whole catalog; holidays whose start is still TBD
    /// contribute nothing.
    pub fn total_holiday_days(&self) -> u32 {
        self.holidays
            .iter()
            .filter(|holiday| holiday.start_date.is_resolved())
            .map(Holiday::days)
            .sum()
    }

    /// Holidays grouped by the month they start in. Months appear in the
    /// order first encountered; holidays keep catalog order within a month.
    /// Holidays without an announced start belong to no month and are skipped.
    pub fn group_by_month(&self) -> Vec<(Month, Vec<&Holiday>)> {
        let mut groups: Vec<(Month, Vec<&Holiday>)> = Vec::new();
        for holiday in &self.holidays {
            let Some(month) = holiday.month() else {
                continue;
            };
            match groups.iter_mut().find(|(m, _)| *m == month) {
                Some((_, members)) => members.push(holiday),
                None => groups.push((month, vec![holiday])),
            }
        }
        groups
    }

    /// Up to `count` holidays that have not finished before `today`, in
    /// catalog order. Holidays with an unannounced end never qualify.
    pub fn upcoming(&self, today: NaiveDate, count: usize) -> Vec<&Holiday> {
        self.holidays
            .iter()
            .filter(|holiday| holiday.effective_end().date().is_some_and(|end| end >= today))
            .take(count)
            .collect()
    }

    pub fn by_category(&self, category: Category) -> Vec<&Holiday> {
        self.holidays.iter().filter(|holiday| holiday.category == category).collect()
    }

    /// True if any announced holiday covers `date`
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.iter().any(|holiday| holiday.covers(date))
    }

    pub fn is_substitute_work_day(&self, date: NaiveDate) -> bool {
        self.substitute_work_days.iter().any(|sub| sub.date == date)
    }
}

impl<'a> IntoIterator for &'a HolidayCatalog {
    type IntoIter = std::slice::Iter<'a, Holiday>;
    type Item = &'a Holiday;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// See [`Holiday::days`]
pub fn holiday_days(holiday: &Holiday) -> u32 {
    holiday.days()
}

/// Short `en-US` date such as `"Apr 11"`; unannounced dates read `"TBD"`
pub fn format_date(date: &HolidayDate) -> String {
    match date.date() {
        Some(date) => date.format("%b %-d").to_string(),
        None => TBD_MARKER.to_owned(),
    }
}

/// `"Apr 11"` for one-day holidays, `"Apr 11 - Apr 19"` for spans
pub fn format_date_range(holiday: &Holiday) -> String {
    match &holiday.end_date {
        None => format_date(&holiday.start_date),
        Some(end) => format!("{} - {}", format_date(&holiday.start_date), format_date(end)),
    }
}

/// Total days off in the bundled catalog
pub fn total_holiday_days() -> u32 {
    catalog().total_holiday_days()
}

pub fn group_holidays_by_month() -> Vec<(Month, Vec<&'static Holiday>)> {
    catalog().group_by_month()
}

/// Up to `count` bundled holidays not yet over, as of the local date
pub fn upcoming_holidays(count: usize) -> Vec<&'static Holiday> {
    catalog().upcoming(Local::now().date_naive(), count)
}

pub fn holidays_by_category(category: Category) -> Vec<&'static Holiday> {
    catalog().by_category(category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, holiday, month};
    use crate::{DEFAULT_UPCOMING_COUNT, Year};

    fn ids(holidays: &[&Holiday]) -> Vec<&'static str> {
        holidays.iter().map(|h| h.id).collect()
    }

    #[test]
    fn test_bundled_catalog_loads_every_row() {
        let catalog = catalog();
        assert_eq!(catalog.year(), 2026);
        assert_eq!(catalog.len(), data::HOLIDAYS_2026.len());
        assert_eq!(catalog.len(), 18);
        assert_eq!(catalog.substitute_work_days().len(), 1);
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let catalog = catalog();
        for holiday in catalog {
            let matches = catalog.iter().filter(|h| h.id == holiday.id).count();
            assert_eq!(matches, 1, "duplicate id {}", holiday.id);
        }
    }

    #[test]
    fn test_holiday_days_cases() {
        struct TestCase {
            start:    &'static str,
            end:      Option<&'static str>,
            expected: u32,
        }

        let cases = [
            TestCase { start: "2026-05-01", end: None, expected: 1 },
            TestCase { start: "2026-05-01", end: Some("2026-05-01"), expected: 1 },
            TestCase { start: "2026-01-01", end: Some("2026-01-02"), expected: 2 },
            TestCase { start: "2026-04-11", end: Some("2026-04-19"), expected: 9 },
            TestCase { start: "2026-02-27", end: Some("2026-03-02"), expected: 4 },
            TestCase { start: "2026-TBD", end: None, expected: 1 },
            TestCase { start: "2026-TBD", end: Some("2026-TBD"), expected: 1 },
        ];

        for case in &cases {
            let h = holiday("case", case.start, case.end);
            assert_eq!(holiday_days(&h), case.expected, "{} .. {:?}", case.start, case.end);
        }
    }

    #[test]
    fn test_every_single_day_holiday_counts_one() {
        for h in catalog().iter().filter(|h| h.end_date.is_none()) {
            assert_eq!(h.days(), 1, "{}", h.id);
        }
    }

    #[test]
    fn test_total_holiday_days_bundled() {
        assert_eq!(total_holiday_days(), 33);
    }

    #[test]
    fn test_total_holiday_days_skips_tbd() {
        let catalog = HolidayCatalog::new(
            2026,
            vec![
                holiday("thingyan", "2026-04-11", Some("2026-04-19")),
                holiday("eid", "2026-TBD", None),
                holiday("deepavali", "YYYY-TBD", Some("YYYY-TBD")),
                holiday("labour-day", "2026-05-01", None),
            ],
            Vec::new(),
        );
        assert_eq!(catalog.total_holiday_days(), 10);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&HolidayDate::Resolved(date(2026, 4, 11))), "Apr 11");
        assert_eq!(format_date(&HolidayDate::Resolved(date(2026, 1, 4))), "Jan 4");
        assert_eq!(format_date(&HolidayDate::unresolved(Year::new(2026).unwrap())), "TBD");
    }

    #[test]
    fn test_format_date_range() {
        let thingyan = catalog().get("thingyan").unwrap();
        assert_eq!(format_date_range(thingyan), "Apr 11 - Apr 19");

        let labour = catalog().get("labour-day").unwrap();
        assert_eq!(format_date_range(labour), "May 1");
    }

    #[test]
    fn test_group_by_month_order() {
        let groups = group_holidays_by_month();
        let months: Vec<&str> = groups.iter().map(|(m, _)| m.name()).collect();
        assert_eq!(
            months,
            vec![
                "January", "February", "March", "April", "May", "July", "October", "November",
                "December"
            ]
        );

        let (_, march) = groups.iter().find(|(m, _)| *m == month(3)).unwrap();
        assert_eq!(ids(march), vec!["peasants-day", "armed-forces-day", "eid-al-fitr"]);
    }

    #[test]
    fn test_group_by_month_skips_tbd() {
        let catalog = HolidayCatalog::new(
            2026,
            vec![holiday("eid", "2026-TBD", None), holiday("labour-day", "2026-05-01", None)],
            Vec::new(),
        );
        let groups = catalog.group_by_month();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, month(5));
    }

    #[test]
    fn test_upcoming_cases() {
        struct TestCase {
            today:    NaiveDate,
            count:    usize,
            expected: Vec<&'static str>,
        }

        let cases = [
            TestCase {
                today:    date(2026, 10, 16),
                count:    DEFAULT_UPCOMING_COUNT,
                expected: vec!["thadingyut", "deepavali", "tazaungdaing"],
            },
            TestCase {
                // Thingyan is still running on the 15th
                today:    date(2026, 4, 15),
                count:    2,
                expected: vec!["thingyan", "full-moon-kasone"],
            },
            TestCase {
                today:    date(2026, 12, 1),
                count:    5,
                expected: vec!["national-day", "christmas"],
            },
            TestCase {
                today:    date(2026, 12, 26),
                count:    3,
                expected: vec![],
            },
            TestCase {
                today:    date(2026, 1, 1),
                count:    0,
                expected: vec![],
            },
        ];

        for case in &cases {
            let upcoming = catalog().upcoming(case.today, case.count);
            assert_eq!(ids(&upcoming), case.expected, "as of {}", case.today);
        }
    }

    #[test]
    fn test_upcoming_skips_unresolved_end() {
        let catalog = HolidayCatalog::new(
            2026,
            vec![holiday("eid", "2026-TBD", None), holiday("christmas", "2026-12-25", None)],
            Vec::new(),
        );
        assert_eq!(ids(&catalog.upcoming(date(2026, 1, 1), 3)), vec!["christmas"]);
    }

    #[test]
    fn test_by_category() {
        assert_eq!(
            ids(&holidays_by_category(Category::Cultural)),
            vec!["chinese-new-year", "thingyan"]
        );
        assert_eq!(
            ids(&holidays_by_category(Category::International)),
            vec!["new-year-2026", "labour-day", "christmas"]
        );
    }

    #[test]
    fn test_is_holiday_and_substitute() {
        let catalog = catalog();
        assert!(catalog.is_holiday(date(2026, 4, 15)));
        assert!(catalog.is_holiday(date(2026, 12, 25)));
        assert!(!catalog.is_holiday(date(2026, 4, 20)));

        assert!(catalog.is_substitute_work_day(date(2026, 1, 10)));
        assert!(!catalog.is_substitute_work_day(date(2026, 1, 11)));
    }

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend(date(2026, 1, 10)));
        assert!(is_weekend(date(2026, 1, 4)));
        assert!(!is_weekend(date(2026, 1, 5)));
    }

    #[test]
    fn test_holiday_accessors() {
        let thadingyut = catalog().get("thadingyut").unwrap();
        assert_eq!(thadingyut.effective_end(), HolidayDate::Resolved(date(2026, 10, 27)));
        assert!(thadingyut.covers(date(2026, 10, 26)));
        assert!(thadingyut.is_resolved());
        assert_eq!(thadingyut.display_name(Locale::Myanmar), "သီတင်းကျွတ်ပွဲတော်");
        assert_eq!(thadingyut.display_name(Locale::English), "Thadingyut Festival");

        let tbd = holiday("eid", "2026-TBD", None);
        assert!(!tbd.is_resolved());
        assert_eq!(tbd.date_range(), None);
        assert_eq!(tbd.display_name(Locale::Myanmar), "eid");
    }

    #[test]
    fn test_from_rows_skips_malformed() {
        let rows = [
            HolidayRow {
                id:              "good",
                name:            "Good",
                name_local:      None,
                start:           "2026-05-01",
                end:             None,
                day:             "Fri",
                category:        Category::National,
                description:     None,
                lunar_dependent: false,
                icon:            "",
            },
            HolidayRow {
                id:              "bad-date",
                name:            "Bad",
                name_local:      None,
                start:           "2026-02-30",
                end:             None,
                day:             "",
                category:        Category::National,
                description:     None,
                lunar_dependent: false,
                icon:            "",
            },
            HolidayRow {
                id:              "inverted",
                name:            "Inverted",
                name_local:      None,
                start:           "2026-05-03",
                end:             Some("2026-05-01"),
                day:             "",
                category:        Category::National,
                description:     None,
                lunar_dependent: false,
                icon:            "",
            },
        ];
        let subs = [SubstituteRow {
            id:           "weekday",
            date:         "2026-01-12",
            day:          "Mon",
            reason:       "",
            reason_local: "",
            for_holiday:  "good",
        }];

        let catalog = HolidayCatalog::from_rows(2026, &rows, &subs);
        assert_eq!(catalog.iter().map(|h| h.id).collect::<Vec<_>>(), vec!["good"]);
        assert!(catalog.substitute_work_days().is_empty());

        assert!(matches!(
            Holiday::try_from(&rows[2]),
            Err(CatalogError::InvertedRange { id: "inverted", .. })
        ));
        assert!(matches!(
            SubstituteWorkDay::try_from(&subs[0]),
            Err(CatalogError::NotAWeekend { .. })
        ));
    }

    #[test]
    fn test_category_parse_and_display() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert_eq!("Religious".parse::<Category>(), Ok(Category::Religious));
        assert!("festival".parse::<Category>().is_err());
        assert_eq!(Category::International.to_string(), "International");
    }

    #[test]
    fn test_holiday_serializes_camel_case() {
        let json = serde_json::to_value(catalog().get("thingyan").unwrap()).unwrap();
        assert_eq!(json["id"], "thingyan");
        assert_eq!(json["startDate"], "2026-04-11");
        assert_eq!(json["endDate"], "2026-04-19");
        assert_eq!(json["category"], "cultural");
        assert_eq!(json["lunarDependent"], false);
    }
}
