//! The two display languages carried by the catalog and suggestion records.

use crate::MYANMAR_DIGITS;
use crate::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[display(fmt = "en")]
    #[serde(rename = "en")]
    English,
    #[display(fmt = "my")]
    #[serde(rename = "my")]
    Myanmar,
}

/// Renders a count with the locale's numerals (`16` -> `၁၆` in Myanmar)
pub fn localize_number(locale: Locale, value: u32) -> String {
    let digits = value.to_string();
    match locale {
        Locale::English => digits,
        Locale::Myanmar => digits
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .and_then(|d| MYANMAR_DIGITS.get(d as usize).copied())
                    .unwrap_or(c)
            })
            .collect(),
    }
}

/// "Take N days, get M days off" in the given locale; free breaks say so
pub fn savings_text(locale: Locale, leave_required: u32, total_days_off: u32) -> String {
    let leave = localize_number(locale, leave_required);
    let total = localize_number(locale, total_days_off);
    let free = leave_required == 0;
    match locale {
        Locale::English if free => format!("Take {leave} days, get {total} days off (FREE!)"),
        Locale::English => format!("Take {leave} days, get {total} days off"),
        Locale::Myanmar if free => format!("ရက် {leave} ယူပြီး ရက် {total} အနားရ (အခမဲ့!)"),
        Locale::Myanmar => format!("ရက် {leave} ယူပြီး ရက် {total} အနားရ"),
    }
}
