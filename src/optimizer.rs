//! Leave optimizer: curated suggestions for turning holidays and weekends
//! into long breaks with as few leave days as possible.
//!
//! The suggestions are hand-authored against the 2026 calendar, not found by
//! searching it. Each template names the holidays it builds on, its date
//! range, and the days of leave to request; the day counts and efficiency
//! are computed from those when the template is materialized against a
//! catalog. A template whose holidays are missing from the catalog is
//! dropped.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{catalog, is_weekend};
use crate::i18n::savings_text;
use crate::{
    DateRange, Holiday, HolidayCatalog, Locale, Month, ParseError, RangeError, parse_iso_date,
    prelude::*,
};

static DEFAULT_SUGGESTIONS: LazyLock<Vec<LeaveSuggestion<'static>>> =
    LazyLock::new(|| all_leave_suggestions(&OptimizationOptions::default()));

/// Days off gained per leave day taken.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Efficiency {
    /// The break needs no leave at all
    Unbounded,
    Ratio(f64),
}

impl Efficiency {
    pub fn new(total_days_off: u32, leave_required: u32) -> Self {
        if leave_required == 0 {
            Self::Unbounded
        } else {
            Self::Ratio(f64::from(total_days_off) / f64::from(leave_required))
        }
    }

    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    pub const fn ratio(&self) -> Option<f64> {
        match *self {
            Self::Unbounded => None,
            Self::Ratio(ratio) => Some(ratio),
        }
    }

    /// Inclusive lower-bound check; unbounded always passes
    pub fn at_least(&self, min: f64) -> bool {
        match *self {
            Self::Unbounded => true,
            Self::Ratio(ratio) => ratio >= min,
        }
    }
}

impl fmt::Display for Efficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => f.write_str("∞"),
            Self::Ratio(ratio) => write!(f, "{ratio:.1}x"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Holidays and weekends already line up
    #[display(fmt = "natural")]
    Natural,
    /// A day or two of leave joins a holiday to a weekend
    #[display(fmt = "bridge")]
    Bridge,
    /// Leave stretches a multi-day holiday
    #[display(fmt = "extension")]
    Extension,
    #[display(fmt = "long-break")]
    LongBreak,
    #[display(fmt = "ambitious")]
    Ambitious,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[display(fmt = "easy")]
    Easy,
    #[display(fmt = "moderate")]
    Moderate,
    #[display(fmt = "ambitious")]
    Ambitious,
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "moderate" => Ok(Self::Moderate),
            "ambitious" => Ok(Self::Ambitious),
            other => Err(ParseError::InvalidFormat(other.to_owned())),
        }
    }
}

/// A recommended break, borrowing the holidays it builds on from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveSuggestion<'a> {
    pub id:                 &'static str,
    pub title:              &'static str,
    pub title_local:        &'static str,
    pub leave_required:     u32,
    pub total_days_off:     u32,
    pub efficiency:         Efficiency,
    pub range:              DateRange,
    /// Days to request off, in order
    pub leave_dates:        Vec<NaiveDate>,
    pub related_holidays:   Vec<&'a Holiday>,
    pub strategy:           Strategy,
    pub difficulty:         Difficulty,
    pub savings_text:       String,
    pub savings_text_local: String,
    pub primary_month:      Month,
    pub months_spanned:     Vec<Month>,
    pub is_best_value:      bool,
}

impl LeaveSuggestion<'_> {
    pub const fn start_date(&self) -> NaiveDate {
        self.range.start()
    }

    pub const fn end_date(&self) -> NaiveDate {
        self.range.end()
    }

    pub fn spans(&self, month: Month) -> bool {
        self.months_spanned.contains(&month)
    }

    pub fn title_in(&self, locale: Locale) -> &str {
        match locale {
            Locale::English => self.title,
            Locale::Myanmar => self.title_local,
        }
    }

    pub fn savings_text_in(&self, locale: Locale) -> &str {
        match locale {
            Locale::English => &self.savings_text,
            Locale::Myanmar => &self.savings_text_local,
        }
    }
}

/// Caller-side filters. Every field is optional and the filters combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptimizationOptions {
    /// Upper bound (inclusive) on leave days
    pub max_leave_days:    Option<u32>,
    /// Lower bound (inclusive) on efficiency; free breaks always pass
    pub min_efficiency:    Option<f64>,
    /// Skip the ambitious generator entirely
    pub exclude_ambitious: bool,
    /// Keep breaks touching any of these months; empty keeps everything
    pub selected_months:   Vec<Month>,
}

impl OptimizationOptions {
    #[must_use]
    pub fn with_max_leave_days(mut self, days: u32) -> Self {
        self.max_leave_days = Some(days);
        self
    }

    #[must_use]
    pub fn with_min_efficiency(mut self, ratio: f64) -> Self {
        self.min_efficiency = Some(ratio);
        self
    }

    #[must_use]
    pub fn excluding_ambitious(mut self) -> Self {
        self.exclude_ambitious = true;
        self
    }

    #[must_use]
    pub fn with_months(mut self, months: impl IntoIterator<Item = Month>) -> Self {
        self.selected_months = months.into_iter().collect();
        self
    }

    fn admits(&self, suggestion: &LeaveSuggestion<'_>) -> bool {
        self.max_leave_days.is_none_or(|max| suggestion.leave_required <= max)
            && self.min_efficiency.is_none_or(|min| suggestion.efficiency.at_least(min))
            && (self.selected_months.is_empty()
                || self.selected_months.iter().any(|month| suggestion.spans(*month)))
    }
}

/// A suggestion template could not be turned into a suggestion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("{suggestion} needs holiday {holiday}, which is not in the catalog")]
    MissingHoliday {
        suggestion: &'static str,
        holiday:    &'static str,
    },

    #[error("{suggestion}: {source}")]
    Parse {
        suggestion: &'static str,
        #[source]
        source:     ParseError,
    },

    #[error("{suggestion}: {source}")]
    Range {
        suggestion: &'static str,
        #[source]
        source:     RangeError,
    },

    #[error("{suggestion}: leave date {date} falls outside the break")]
    LeaveOutsideRange {
        suggestion: &'static str,
        date:       NaiveDate,
    },
}

/// Which days of leave a template asks for
enum LeavePlan {
    None,
    Dates(&'static [&'static str]),
    /// Every working day in the window: not a weekend, holiday or substitute workday
    Workdays { from: &'static str, to: &'static str },
}

struct Template {
    id:            &'static str,
    title:         &'static str,
    title_local:   &'static str,
    holidays:      &'static [&'static str],
    start:         &'static str,
    end:           &'static str,
    leave:         LeavePlan,
    strategy:      Strategy,
    difficulty:    Difficulty,
    primary_month: &'static str,
    best_value:    bool,
}

const NATURAL_BRIDGES: &[Template] = &[
    Template {
        id:            "union-chinese-natural",
        title:         "Union Day + Chinese New Year",
        title_local:   "ပြည်ထောင်စုနေ့ + တရုတ်နှစ်သစ်ကူး",
        holidays:      &["union-day", "chinese-new-year"],
        start:         "2026-02-12",
        end:           "2026-02-17",
        leave:         LeavePlan::None,
        strategy:      Strategy::Natural,
        difficulty:    Difficulty::Easy,
        primary_month: "February",
        best_value:    false,
    },
    Template {
        id:            "labour-weekend-natural",
        title:         "Labour Day Long Weekend",
        title_local:   "အလုပ်သမားနေ့ ရက်သားရှည်",
        holidays:      &["full-moon-kasone", "labour-day"],
        start:         "2026-04-30",
        end:           "2026-05-03",
        leave:         LeavePlan::None,
        strategy:      Strategy::Natural,
        difficulty:    Difficulty::Easy,
        primary_month: "May",
        best_value:    false,
    },
];

const SHORT_BRIDGES: &[Template] = &[Template {
    id:            "new-year-bridge",
    title:         "New Year Bridge",
    title_local:   "နှစ်သစ်ကူး ကြားထဲအလုပ်ရက်",
    holidays:      &["new-year-2026", "independence-day"],
    start:         "2026-01-01",
    end:           "2026-01-07",
    leave:         LeavePlan::Dates(&["2026-01-05", "2026-01-06"]),
    strategy:      Strategy::Bridge,
    difficulty:    Difficulty::Easy,
    primary_month: "January",
    best_value:    false,
}];

const EXTENSIONS: &[Template] = &[
    Template {
        id:            "thingyan-extension",
        title:         "Thingyan Super Break",
        title_local:   "သင်္ကြန် စူပါအနားရက်",
        holidays:      &["thingyan"],
        start:         "2026-04-11",
        end:           "2026-04-26",
        leave:         LeavePlan::Dates(&["2026-04-20", "2026-04-21", "2026-04-22", "2026-04-23", "2026-04-24"]),
        strategy:      Strategy::Extension,
        difficulty:    Difficulty::Moderate,
        primary_month: "April",
        best_value:    true,
    },
    Template {
        id:            "thadingyut-extension",
        title:         "Thadingyut Long Weekend",
        title_local:   "သီတင်းကျွတ် ရက်သားရှည်",
        holidays:      &["thadingyut"],
        start:         "2026-10-24",
        end:           "2026-11-01",
        leave:         LeavePlan::Dates(&["2026-10-28", "2026-10-29", "2026-10-30"]),
        strategy:      Strategy::Extension,
        difficulty:    Difficulty::Easy,
        primary_month: "October",
        best_value:    false,
    },
];

const AMBITIOUS_BREAKS: &[Template] = &[Template {
    id:            "december-mega-break",
    title:         "December Mega Break",
    title_local:   "ဒီဇင်ဘာ စူပါအနားရက်",
    holidays:      &["national-day", "christmas"],
    start:         "2026-12-04",
    end:           "2026-12-28",
    leave:         LeavePlan::Workdays { from: "2026-12-05", to: "2026-12-28" },
    strategy:      Strategy::Ambitious,
    difficulty:    Difficulty::Ambitious,
    primary_month: "December",
    best_value:    false,
}];

impl Template {
    fn materialize<'a>(&self, catalog: &'a HolidayCatalog) -> Result<LeaveSuggestion<'a>, TemplateError> {
        let related_holidays = self
            .holidays
            .iter()
            .map(|&holiday| {
                catalog.get(holiday).ok_or(TemplateError::MissingHoliday {
                    suggestion: self.id,
                    holiday,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let range = self.window(self.start, self.end)?;
        let leave_dates = match self.leave {
            LeavePlan::None => Vec::new(),
            LeavePlan::Dates(dates) => dates.iter().map(|d| self.date(d)).collect::<Result<Vec<_>, _>>()?,
            LeavePlan::Workdays { from, to } => self
                .window(from, to)?
                .iter_days()
                .filter(|day| needs_leave(catalog, *day))
                .collect(),
        };
        if let Some(&date) = leave_dates.iter().find(|date| !range.contains(**date)) {
            return Err(TemplateError::LeaveOutsideRange { suggestion: self.id, date });
        }

        let primary_month = Month::from_name(self.primary_month).map_err(|source| TemplateError::Parse {
            suggestion: self.id,
            source,
        })?;

        let leave_required = u32::try_from(leave_dates.len()).unwrap_or(u32::MAX);
        let total_days_off = range.len_days();

        Ok(LeaveSuggestion {
            id: self.id,
            title: self.title,
            title_local: self.title_local,
            leave_required,
            total_days_off,
            efficiency: Efficiency::new(total_days_off, leave_required),
            range,
            leave_dates,
            related_holidays,
            strategy: self.strategy,
            difficulty: self.difficulty,
            savings_text: savings_text(Locale::English, leave_required, total_days_off),
            savings_text_local: savings_text(Locale::Myanmar, leave_required, total_days_off),
            primary_month,
            months_spanned: range.months_spanned(),
            is_best_value: self.best_value,
        })
    }

    fn date(&self, s: &str) -> Result<NaiveDate, TemplateError> {
        parse_iso_date(s).map_err(|source| TemplateError::Parse {
            suggestion: self.id,
            source,
        })
    }

    fn window(&self, start: &str, end: &str) -> Result<DateRange, TemplateError> {
        DateRange::new(self.date(start)?, self.date(end)?).map_err(|source| TemplateError::Range {
            suggestion: self.id,
            source,
        })
    }
}

/// A day that has to be taken as leave to be off
fn needs_leave(catalog: &HolidayCatalog, date: NaiveDate) -> bool {
    !is_weekend(date) && !catalog.is_holiday(date) && !catalog.is_substitute_work_day(date)
}

fn materialize_all<'a>(templates: &[Template], catalog: &'a HolidayCatalog) -> Vec<LeaveSuggestion<'a>> {
    templates
        .iter()
        .filter_map(|template| match template.materialize(catalog) {
            Ok(suggestion) => Some(suggestion),
            Err(err @ TemplateError::MissingHoliday { .. }) => {
                tracing::debug!(%err, "omitting leave suggestion");
                None
            },
            Err(err) => {
                tracing::warn!(%err, "omitting malformed leave suggestion");
                None
            },
        })
        .collect()
}

/// Zero-leave breaks from adjacent holidays and weekends
fn natural_bridges(catalog: &HolidayCatalog) -> Vec<LeaveSuggestion<'_>> {
    materialize_all(NATURAL_BRIDGES, catalog)
}

/// One or two leave days joining a holiday to a weekend
fn short_bridges(catalog: &HolidayCatalog) -> Vec<LeaveSuggestion<'_>> {
    materialize_all(SHORT_BRIDGES, catalog)
}

/// Three to five leave days stretching a multi-day holiday
fn extensions(catalog: &HolidayCatalog) -> Vec<LeaveSuggestion<'_>> {
    materialize_all(EXTENSIONS, catalog)
}

/// Long leave blocks, with leave dates enumerated from the calendar
fn ambitious_breaks(catalog: &HolidayCatalog) -> Vec<LeaveSuggestion<'_>> {
    materialize_all(AMBITIOUS_BREAKS, catalog)
}

/// Free breaks first (longest first), then by efficiency, highest first
fn rank(a: &LeaveSuggestion<'_>, b: &LeaveSuggestion<'_>) -> Ordering {
    match (a.efficiency, b.efficiency) {
        (Efficiency::Unbounded, Efficiency::Unbounded) => b.total_days_off.cmp(&a.total_days_off),
        (Efficiency::Unbounded, Efficiency::Ratio(_)) => Ordering::Less,
        (Efficiency::Ratio(_), Efficiency::Unbounded) => Ordering::Greater,
        (Efficiency::Ratio(x), Efficiency::Ratio(y)) => y.total_cmp(&x),
    }
}

/// Builds every suggestion the catalog supports, keeps those passing all of
/// `options`, and orders them best first. An empty result is a normal answer.
pub fn generate_leave_suggestions<'a>(
    catalog: &'a HolidayCatalog,
    options: &OptimizationOptions,
) -> Vec<LeaveSuggestion<'a>> {
    let mut suggestions = natural_bridges(catalog);
    suggestions.extend(short_bridges(catalog));
    suggestions.extend(extensions(catalog));
    if !options.exclude_ambitious {
        suggestions.extend(ambitious_breaks(catalog));
    }

    let generated = suggestions.len();
    suggestions.retain(|suggestion| options.admits(suggestion));
    suggestions.sort_by(rank);

    tracing::debug!(generated, kept = suggestions.len(), "generated leave suggestions");
    suggestions
}

/// Suggestions for the bundled catalog
pub fn all_leave_suggestions(options: &OptimizationOptions) -> Vec<LeaveSuggestion<'static>> {
    generate_leave_suggestions(catalog(), options)
}

/// Suggestions touching `month`; any months already in `options` are replaced
pub fn leave_suggestions_by_month(month: Month, options: &OptimizationOptions) -> Vec<LeaveSuggestion<'static>> {
    let options = options.clone().with_months([month]);
    generate_leave_suggestions(catalog(), &options)
}

pub fn leave_suggestions_by_difficulty(
    difficulty: Difficulty,
    options: &OptimizationOptions,
) -> Vec<LeaveSuggestion<'static>> {
    let mut suggestions = all_leave_suggestions(options);
    suggestions.retain(|suggestion| suggestion.difficulty == difficulty);
    suggestions
}

/// Unfiltered suggestions for the bundled catalog, computed once
pub fn default_leave_suggestions() -> &'static [LeaveSuggestion<'static>] {
    &DEFAULT_SUGGESTIONS
}
