/// Calendar year covered by the bundled holiday catalog
pub const CATALOG_YEAR: u16 = 2026;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Marker for a date that authorities have not fixed yet
pub const TBD_MARKER: &str = "TBD";

/// Placeholder year used by unresolved dates with no known year
pub const UNKNOWN_YEAR: &str = "YYYY";

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';

/// Number of holidays returned by `upcoming_holidays` when the caller has no preference
pub const DEFAULT_UPCOMING_COUNT: usize = 3;

/// English month names (index 0 is unused, months are 1-indexed)
pub const MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Myanmar numerals, indexed by decimal digit
pub const MYANMAR_DIGITS: [char; 10] = ['၀', '၁', '၂', '၃', '၄', '၅', '၆', '၇', '၈', '၉'];
