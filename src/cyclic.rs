use crate::UnitError;
use crate::consts::{DAYS_IN_MONTH, DAYS_PER_WEEK, MONTHS_PER_YEAR};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A fixed set of labels that wrap around at both ends.
///
/// Implementors only supply the label table and names; stepping and
/// offsetting are shared and always reduce with a floored modulo, so the
/// ordinal stays in `0..LENGTH` for any offset.
pub trait Cyclic: Copy + Eq + Sized + 'static {
    /// Every label, in ordinal order
    const ALL: &'static [Self];
    /// Cardinality of the set
    const LENGTH: u32;
    /// Human-readable name of the set, used in errors
    const LABEL: &'static str;

    /// Position of the label in the set
    fn value(self) -> u32;

    /// Canonical label name
    fn as_str(self) -> &'static str;

    /// Number of labels in the set
    fn length() -> u32 {
        Self::LENGTH
    }

    /// Builds a label from its ordinal
    ///
    /// # Errors
    /// Returns `UnitError::InvalidIndex` if `index` is not below `LENGTH`.
    fn from_index(index: u32) -> Result<Self, UnitError> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(UnitError::InvalidIndex {
                label: Self::LABEL,
                index,
                max: Self::LENGTH - 1,
            })
    }

    /// Label `n` positions away, wrapping in either direction
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn offset(self, n: i64) -> Self {
        let length = i64::from(Self::LENGTH);
        let index = (i64::from(self.value()) + n.rem_euclid(length)).rem_euclid(length);
        // rem_euclid keeps index in 0..LENGTH
        Self::ALL[index as usize]
    }

    /// Next label, wrapping past the last one
    fn increment(self) -> Self {
        self.offset(1)
    }

    /// Previous label, wrapping past the first one
    fn decrement(self) -> Self {
        self.offset(-1)
    }
}

/// Day of the week (`Sunday` = 0 through `Saturday` = 6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Cyclic for DayOfWeek {
    const ALL: &'static [Self] = &[
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];
    const LENGTH: u32 = DAYS_PER_WEEK;
    const LABEL: &'static str = "day of week";

    fn value(self) -> u32 {
        self as u32
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "SUNDAY",
            Self::Monday => "MONDAY",
            Self::Tuesday => "TUESDAY",
            Self::Wednesday => "WEDNESDAY",
            Self::Thursday => "THURSDAY",
            Self::Friday => "FRIDAY",
            Self::Saturday => "SATURDAY",
        }
    }
}

/// Month of the year (`January` = 0 through `December` = 11)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MonthOfYear {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl MonthOfYear {
    /// Number of days in this month, with one extra day for February in a leap year
    pub const fn days(self, is_leap_year: bool) -> u32 {
        let days = DAYS_IN_MONTH[self as usize];
        if is_leap_year && matches!(self, Self::February) {
            days + 1
        } else {
            days
        }
    }
}

impl Cyclic for MonthOfYear {
    const ALL: &'static [Self] = &[
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];
    const LENGTH: u32 = MONTHS_PER_YEAR;
    const LABEL: &'static str = "month of year";

    fn value(self) -> u32 {
        self as u32
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::January => "JANUARY",
            Self::February => "FEBRUARY",
            Self::March => "MARCH",
            Self::April => "APRIL",
            Self::May => "MAY",
            Self::June => "JUNE",
            Self::July => "JULY",
            Self::August => "AUGUST",
            Self::September => "SEPTEMBER",
            Self::October => "OCTOBER",
            Self::November => "NOVEMBER",
            Self::December => "DECEMBER",
        }
    }
}

macro_rules! impl_cyclic_ops {
    ($($ty:ty),*) => {$(
        impl Add<i64> for $ty {
            type Output = Self;

            fn add(self, rhs: i64) -> Self {
                self.offset(rhs)
            }
        }

        impl Sub<i64> for $ty {
            type Output = Self;

            fn sub(self, rhs: i64) -> Self {
                self.offset(-rhs.rem_euclid(i64::from(<$ty as Cyclic>::LENGTH)))
            }
        }

        impl TryFrom<u32> for $ty {
            type Error = UnitError;

            fn try_from(value: u32) -> Result<Self, Self::Error> {
                Self::from_index(value)
            }
        }

        impl From<$ty> for u32 {
            fn from(label: $ty) -> Self {
                label.value()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    )*};
}

impl_cyclic_ops!(DayOfWeek, MonthOfYear);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length() {
        assert_eq!(DayOfWeek::length(), 7);
        assert_eq!(MonthOfYear::length(), 12);
        assert_eq!(DayOfWeek::ALL.len(), 7);
        assert_eq!(MonthOfYear::ALL.len(), 12);
    }

    #[test]
    fn test_ordinals_match_table() {
        for (i, day) in DayOfWeek::ALL.iter().enumerate() {
            assert_eq!(day.value() as usize, i, "{day} has the wrong ordinal");
        }
        for (i, month) in MonthOfYear::ALL.iter().enumerate() {
            assert_eq!(month.value() as usize, i, "{month} has the wrong ordinal");
        }
    }

    #[test]
    fn test_increment_wraps() {
        assert_eq!(DayOfWeek::Monday.increment(), DayOfWeek::Tuesday);
        assert_eq!(DayOfWeek::Saturday.increment(), DayOfWeek::Sunday);
        assert_eq!(MonthOfYear::December.increment(), MonthOfYear::January);
    }

    #[test]
    fn test_decrement_wraps() {
        assert_eq!(DayOfWeek::Tuesday.decrement(), DayOfWeek::Monday);
        assert_eq!(DayOfWeek::Sunday.decrement(), DayOfWeek::Saturday);
        assert_eq!(MonthOfYear::January.decrement(), MonthOfYear::December);
    }

    #[test]
    fn test_offset_positive_and_negative() {
        assert_eq!(DayOfWeek::Monday + 3, DayOfWeek::Thursday);
        assert_eq!(DayOfWeek::Monday + 7, DayOfWeek::Monday);
        assert_eq!(DayOfWeek::Monday + -2, DayOfWeek::Saturday);
        assert_eq!(DayOfWeek::Monday - 2, DayOfWeek::Saturday);
        assert_eq!(DayOfWeek::Wednesday + 700_003, DayOfWeek::Saturday);
        assert_eq!(MonthOfYear::March + -15, MonthOfYear::December);
        assert_eq!(MonthOfYear::March - 27, MonthOfYear::December);
    }

    #[test]
    fn test_offset_extreme_values() {
        // Must not overflow for the widest offsets
        let forward = DayOfWeek::Friday.offset(i64::MAX);
        let backward = DayOfWeek::Friday.offset(i64::MIN);
        assert!(forward.value() < 7);
        assert!(backward.value() < 7);
        // i64::MIN is 4 (mod 12)
        assert_eq!(MonthOfYear::May - i64::MIN, MonthOfYear::January);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(DayOfWeek::from_index(0).unwrap(), DayOfWeek::Sunday);
        assert_eq!(MonthOfYear::from_index(11).unwrap(), MonthOfYear::December);

        let result = DayOfWeek::from_index(7);
        assert!(matches!(
            result,
            Err(UnitError::InvalidIndex {
                index: 7,
                max: 6,
                ..
            })
        ));
        assert!(MonthOfYear::try_from(12).is_err());
    }

    #[test]
    fn test_as_str_and_display() {
        assert_eq!(DayOfWeek::Sunday.as_str(), "SUNDAY");
        assert_eq!(MonthOfYear::September.to_string(), "SEPTEMBER");
    }

    #[test]
    fn test_days_in_month() {
        struct TestCase {
            month: MonthOfYear,
            days: u32,
        }

        let cases = [
            TestCase { month: MonthOfYear::January, days: 31 },
            TestCase { month: MonthOfYear::February, days: 28 },
            TestCase { month: MonthOfYear::April, days: 30 },
            TestCase { month: MonthOfYear::November, days: 30 },
            TestCase { month: MonthOfYear::December, days: 31 },
        ];

        for case in &cases {
            assert_eq!(
                case.month.days(false),
                case.days,
                "{} should have {} days",
                case.month,
                case.days
            );
        }
    }

    #[test]
    fn test_leap_year_only_affects_february() {
        assert_eq!(MonthOfYear::February.days(true), 29);
        assert_eq!(MonthOfYear::February.days(false), 28);
        for month in MonthOfYear::ALL.iter().filter(|m| **m != MonthOfYear::February) {
            assert_eq!(month.days(true), month.days(false), "{month} changed in a leap year");
        }
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&DayOfWeek::Monday).unwrap();
        assert_eq!(json, r#""MONDAY""#);

        let parsed: MonthOfYear = serde_json::from_str(r#""FEBRUARY""#).unwrap();
        assert_eq!(parsed, MonthOfYear::February);
    }
}
