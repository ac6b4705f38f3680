//! Hand-entered holiday table for 2026, per government announcements.
//!
//! Rows stay as plain string literals so the table reads like the published
//! calendar; `HolidayCatalog::from_rows` turns them into typed records.

use crate::catalog::{Category, HolidayCatalog};
use crate::consts::CATALOG_YEAR;

pub(crate) struct HolidayRow {
    pub id:              &'static str,
    pub name:            &'static str,
    pub name_local:      Option<&'static str>,
    pub start:           &'static str,
    pub end:             Option<&'static str>,
    pub day:             &'static str,
    pub category:        Category,
    pub description:     Option<&'static str>,
    pub lunar_dependent: bool,
    pub icon:            &'static str,
}

pub(crate) struct SubstituteRow {
    pub id:           &'static str,
    pub date:         &'static str,
    pub day:          &'static str,
    pub reason:       &'static str,
    pub reason_local: &'static str,
    pub for_holiday:  &'static str,
}

/// Weekend days that must be worked to make up for a holiday falling on a weekend
pub(crate) const SUBSTITUTE_WORK_DAYS_2026: &[SubstituteRow] = &[SubstituteRow {
    id:           "sub-jan-10",
    date:         "2026-01-10",
    day:          "Sat",
    reason:       "Substitute for Independence Day (Jan 4, Sunday)",
    reason_local: "လွတ်လပ်ရေးနေ့ (တနင်္ဂနွေနေ့) အစားထိုးအလုပ်လုပ်ရက်",
    for_holiday:  "independence-day",
}];

pub(crate) const HOLIDAYS_2026: &[HolidayRow] = &[
    HolidayRow {
        id:              "new-year-2026",
        name:            "New Year's Day & Holiday",
        name_local:      Some("နှစ်သစ်ကူးနေ့"),
        start:           "2026-01-01",
        end:             Some("2026-01-02"),
        day:             "Thu - Fri",
        category:        Category::International,
        description:     Some("Celebration of the Gregorian New Year"),
        lunar_dependent: false,
        icon:            "🎊",
    },
    HolidayRow {
        id:              "independence-day",
        name:            "Independence Day",
        name_local:      Some("လွတ်လပ်ရေးနေ့"),
        start:           "2026-01-04",
        end:             None,
        day:             "Sun",
        category:        Category::National,
        description:     Some("Commemorates independence from British rule in 1948"),
        lunar_dependent: false,
        icon:            "🇲🇲",
    },
    HolidayRow {
        id:              "union-day",
        name:            "Union Day & Holiday",
        name_local:      Some("ပြည်ထောင်စုနေ့"),
        start:           "2026-02-12",
        end:             Some("2026-02-13"),
        day:             "Thu - Fri",
        category:        Category::National,
        description:     Some("Celebrates the Panglong Agreement signed in 1947"),
        lunar_dependent: false,
        icon:            "🤝",
    },
    HolidayRow {
        id:              "chinese-new-year",
        name:            "Chinese New Year & Holiday",
        name_local:      Some("တရုတ်နှစ်သစ်ကူး"),
        start:           "2026-02-16",
        end:             Some("2026-02-17"),
        day:             "Mon - Tue",
        category:        Category::Cultural,
        description:     Some("Lunar New Year celebration, Year of the Horse"),
        lunar_dependent: false,
        icon:            "🐴",
    },
    HolidayRow {
        id:              "peasants-day",
        name:            "Peasants' Day & Full Moon of Tabaung",
        name_local:      Some("တောင်သူလယ်သမားနေ့"),
        start:           "2026-03-02",
        end:             None,
        day:             "Mon",
        category:        Category::National,
        description:     Some("Honours agricultural workers; coincides with Full Moon of Tabaung"),
        lunar_dependent: false,
        icon:            "🌾",
    },
    HolidayRow {
        id:              "armed-forces-day",
        name:            "Armed Forces Day",
        name_local:      Some("တပ်မတော်နေ့"),
        start:           "2026-03-27",
        end:             None,
        day:             "Fri",
        category:        Category::National,
        description:     Some("Commemorates the resistance against Japanese occupation in 1945"),
        lunar_dependent: false,
        icon:            "⭐",
    },
    HolidayRow {
        id:              "thingyan",
        name:            "Thingyan Water Festival & Myanmar New Year",
        name_local:      Some("သင်္ကြန်ပွဲတော်"),
        start:           "2026-04-11",
        end:             Some("2026-04-19"),
        day:             "Sat - Sun",
        category:        Category::Cultural,
        description:     Some("Traditional New Year water festival - 9 consecutive days of celebration"),
        lunar_dependent: false,
        icon:            "💧",
    },
    HolidayRow {
        id:              "full-moon-kasone",
        name:            "Full Moon Day of Kasone",
        name_local:      Some("ကဆုန်လပြည့်နေ့"),
        start:           "2026-04-30",
        end:             None,
        day:             "Thu",
        category:        Category::Religious,
        description:     Some("Buddha Day - commemorates Buddha's birth, enlightenment, and passing"),
        lunar_dependent: false,
        icon:            "🪷",
    },
    HolidayRow {
        id:              "labour-day",
        name:            "Labour Day",
        name_local:      Some("အလုပ်သမားနေ့"),
        start:           "2026-05-01",
        end:             None,
        day:             "Fri",
        category:        Category::International,
        description:     Some("International Workers' Day"),
        lunar_dependent: false,
        icon:            "👷",
    },
    HolidayRow {
        id:              "eid-al-adha",
        name:            "Eid al-Adha",
        name_local:      Some("အိဒ်အလ်အဒ်ဟာ"),
        start:           "2026-05-27",
        end:             None,
        day:             "Wed",
        category:        Category::Religious,
        description:     Some("Festival of Sacrifice - date subject to moon sighting"),
        lunar_dependent: true,
        icon:            "🕌",
    },
    HolidayRow {
        id:              "martyrs-day",
        name:            "Martyrs' Day",
        name_local:      Some("အာဇာနည်နေ့"),
        start:           "2026-07-19",
        end:             None,
        day:             "Sun",
        category:        Category::National,
        description:     Some("Honours Aung San and other leaders assassinated in 1947"),
        lunar_dependent: false,
        icon:            "🕯️",
    },
    HolidayRow {
        id:              "full-moon-waso",
        name:            "Full Moon Day of Waso",
        name_local:      Some("ဝါဆိုလပြည့်နေ့"),
        start:           "2026-07-29",
        end:             None,
        day:             "Wed",
        category:        Category::Religious,
        description:     Some("Start of Buddhist Lent (Vassa) - monks begin rain retreat"),
        lunar_dependent: false,
        icon:            "☸️",
    },
    HolidayRow {
        id:              "thadingyut",
        name:            "Thadingyut Festival",
        name_local:      Some("သီတင်းကျွတ်ပွဲတော်"),
        start:           "2026-10-25",
        end:             Some("2026-10-27"),
        day:             "Sun - Tue",
        category:        Category::Religious,
        description:     Some("Festival of Lights - end of Buddhist Lent"),
        lunar_dependent: false,
        icon:            "🪔",
    },
    HolidayRow {
        id:              "deepavali",
        name:            "Deepavali",
        name_local:      Some("ဒီပါဝလီ"),
        start:           "2026-11-08",
        end:             None,
        day:             "Sun",
        category:        Category::Religious,
        description:     Some("Hindu Festival of Lights - date subject to moon sighting"),
        lunar_dependent: true,
        icon:            "✨",
    },
    HolidayRow {
        id:              "tazaungdaing",
        name:            "Tazaungdaing Festival",
        name_local:      Some("တန်ဆောင်တိုင်ပွဲတော်"),
        start:           "2026-11-23",
        end:             Some("2026-11-24"),
        day:             "Mon - Tue",
        category:        Category::Religious,
        description:     Some("Festival of Lights with robe-weaving ceremony"),
        lunar_dependent: false,
        icon:            "🎆",
    },
    HolidayRow {
        id:              "national-day",
        name:            "National Day",
        name_local:      Some("အမျိုးသားနေ့"),
        start:           "2026-12-04",
        end:             None,
        day:             "Fri",
        category:        Category::National,
        description:     Some("Commemorates the 1920 student boycott against British rule"),
        lunar_dependent: false,
        icon:            "🎗️",
    },
    HolidayRow {
        id:              "eid-al-fitr",
        name:            "Eid al-Fitr",
        name_local:      Some("အိဒ်အလ်ဖစ်တာ"),
        start:           "2026-03-06",
        end:             Some("2026-03-07"),
        day:             "Fri - Sat",
        category:        Category::Religious,
        description:     Some("Festival of Breaking the Fast - date subject to moon sighting"),
        lunar_dependent: true,
        icon:            "🌙",
    },
    // Karen (Kayin) New Year falls on 2025-12-19 and next in early 2027, so 2026 has none
    HolidayRow {
        id:              "christmas",
        name:            "Christmas Day",
        name_local:      Some("ခရစ္စမတ်နေ့"),
        start:           "2026-12-25",
        end:             None,
        day:             "Fri",
        category:        Category::International,
        description:     Some("Christian celebration of the birth of Jesus Christ"),
        lunar_dependent: false,
        icon:            "🎄",
    },
];

/// The bundled 2026 catalog
pub(crate) fn myanmar_2026() -> HolidayCatalog {
    HolidayCatalog::from_rows(CATALOG_YEAR, HOLIDAYS_2026, SUBSTITUTE_WORK_DAYS_2026)
}
