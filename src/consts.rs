/// Number of labels in a week
pub const DAYS_PER_WEEK: u32 = 7;

/// Number of months in a year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Largest month index (December), months are 0-indexed
pub const MAX_MONTH: u32 = MONTHS_PER_YEAR - 1;

/// Largest hour of the day in 24-hour time
pub const MAX_HOUR: u32 = 23;

/// Largest minute of the hour
pub const MAX_MINUTE: u32 = 59;

/// Days in a year without a leap day
pub(crate) const DAYS_PER_COMMON_YEAR: i64 = 365;

/// Hours in each A.M./P.M. half of the day
pub const HOURS_PER_HALF_DAY: u32 = 12;

/// Canonical day count for each month, indexed by month (January = 0).
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u32; MONTHS_PER_YEAR as usize] = [
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years. There is no century correction and
/// year 0 is never a leap year.
pub(crate) const LEAP_YEAR_CYCLE: u32 = 4;

/// Marker appended to 12-hour strings for hours 0-11
pub const ANTE_MERIDIEM: &str = "A.M.";
/// Marker appended to 12-hour strings for hours 12-23
pub const POST_MERIDIEM: &str = "P.M.";
