use crate::UnitError;
use crate::any::{AnyUnit, UnitKind};
use crate::consts::{
    ANTE_MERIDIEM, DAYS_PER_COMMON_YEAR, HOURS_PER_HALF_DAY, LEAP_YEAR_CYCLE, MAX_HOUR,
    MAX_MINUTE, MAX_MONTH, POST_MERIDIEM,
};
use crate::cyclic::{Cyclic, DayOfWeek, MonthOfYear};
use crate::prelude::*;
use crate::unit::{self, LoopingTimeUnit, TimeUnit};
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// A year number (A.D.), the root of the chain.
/// Unbounded above and clamped at 0 below.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Display)]
#[serde(from = "u32", into = "u32")]
#[display(fmt = "{:04}", _0)]
pub struct Year(u32);

impl Year {
    /// Creates a new Year
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns whether this year is a leap year
    pub const fn is_leap_year(self) -> bool {
        is_leap_year(self.0)
    }
}

impl TimeUnit for Year {
    const KIND: UnitKind = UnitKind::Year;

    fn value(&self) -> u32 {
        self.0
    }

    fn unit_up(&self) -> Option<AnyUnit> {
        None
    }

    fn plus(&self, other: &Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    fn increment(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    fn decrement(&self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl From<u32> for Year {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Year> for u32 {
    fn from(year: Year) -> Self {
        year.0
    }
}

/// A month of a particular year. Loops 0-11 and carries into the year.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Display)]
#[display(fmt = "{}-{:02}", year, "month.value() + 1")]
pub struct Month {
    month: MonthOfYear,
    year: Year,
}

impl Month {
    /// Creates a month in year 0
    ///
    /// # Errors
    /// Returns `UnitError::OutOfRange` if `value` is above 11.
    pub fn new(value: u32) -> Result<Self, UnitError> {
        Self::with_year(value, Year::default())
    }

    /// Creates a month in the given year
    ///
    /// # Errors
    /// Returns `UnitError::OutOfRange` if `value` is above 11.
    pub fn with_year(value: u32, year: Year) -> Result<Self, UnitError> {
        let value = unit::check_bound::<Self>(value, &year)?;
        Ok(Self::at(value, year))
    }

    /// Creates a month from its label, which is always in range
    pub const fn from_month_of_year(month: MonthOfYear, year: Year) -> Self {
        Self { month, year }
    }

    /// Getter for the `MonthOfYear` label
    pub const fn month_of_year(&self) -> MonthOfYear {
        self.month
    }

    /// Getter for the owned Year
    pub const fn year(&self) -> Year {
        self.year
    }

    fn at(value: u32, year: Year) -> Self {
        Self {
            month: MonthOfYear::January.offset(i64::from(value)),
            year,
        }
    }
}

impl Default for Month {
    fn default() -> Self {
        Self::from_month_of_year(MonthOfYear::January, Year::default())
    }
}

impl TimeUnit for Month {
    const KIND: UnitKind = UnitKind::Month;

    fn value(&self) -> u32 {
        self.month.value()
    }

    fn unit_up(&self) -> Option<AnyUnit> {
        Some(self.year.into())
    }

    fn plus(&self, other: &Self) -> Self {
        let (value, year) = unit::add(self, other);
        Self::at(value, year)
    }

    fn increment(&self) -> Self {
        let (value, year) = unit::step_up(self);
        Self::at(value, year)
    }

    fn decrement(&self) -> Self {
        let (value, year) = unit::step_down(self);
        Self::at(value, year)
    }
}

impl LoopingTimeUnit for Month {
    type Parent = Year;

    fn parent(&self) -> &Year {
        &self.year
    }

    fn max_under(_year: &Year) -> u32 {
        MAX_MONTH
    }
}

/// A day of a particular month, 0-based.
///
/// The bound follows the month's length in its year. An optional day of
/// the week moves by the same offset as the day number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Display)]
#[serde(try_from = "RawDay")]
#[display(fmt = "{}-{:02}", month, "value + 1")]
pub struct Day {
    value: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    day_of_week: Option<DayOfWeek>,
    month: Month,
}

#[derive(Deserialize)]
struct RawDay {
    value: u32,
    #[serde(default)]
    day_of_week: Option<DayOfWeek>,
    month: Month,
}

impl TryFrom<RawDay> for Day {
    type Error = UnitError;

    fn try_from(raw: RawDay) -> Result<Self, Self::Error> {
        Self::build(raw.value, raw.day_of_week, raw.month)
    }
}

impl Day {
    /// Creates a day in January of year 0, without a day of the week
    ///
    /// # Errors
    /// Returns `UnitError::OutOfRange` if `value` is above 30.
    pub fn new(value: u32) -> Result<Self, UnitError> {
        Self::with_month(value, Month::default())
    }

    /// Creates a day in the given month, without a day of the week
    ///
    /// # Errors
    /// Returns `UnitError::OutOfRange` if `value` is past the end of `month`.
    pub fn with_month(value: u32, month: Month) -> Result<Self, UnitError> {
        Self::build(value, None, month)
    }

    /// Creates a day in the given month that tracks its day of the week
    ///
    /// # Errors
    /// Returns `UnitError::OutOfRange` if `value` is past the end of `month`.
    pub fn with_day_of_week(
        value: u32,
        day_of_week: DayOfWeek,
        month: Month,
    ) -> Result<Self, UnitError> {
        Self::build(value, Some(day_of_week), month)
    }

    fn build(value: u32, day_of_week: Option<DayOfWeek>, month: Month) -> Result<Self, UnitError> {
        let value = unit::check_bound::<Self>(value, &month)?;
        Ok(Self {
            value,
            day_of_week,
            month,
        })
    }

    /// Getter for the day of the week, if tracked
    pub const fn day_of_week(&self) -> Option<DayOfWeek> {
        self.day_of_week
    }

    /// Getter for the owned Month
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Days elapsed since the first day of year 0
    fn ordinal(&self) -> i64 {
        let year = self.month.year().value();
        let days_before_month: u32 = MonthOfYear::ALL
            .iter()
            .take(self.month.value() as usize)
            .map(|&month| days_in_month(month, year))
            .sum();
        days_before_year(year) + i64::from(days_before_month) + i64::from(self.value)
    }
}

impl Default for Day {
    fn default() -> Self {
        Self {
            value: 0,
            day_of_week: None,
            month: Month::default(),
        }
    }
}

impl TimeUnit for Day {
    const KIND: UnitKind = UnitKind::Day;

    fn value(&self) -> u32 {
        self.value
    }

    fn unit_up(&self) -> Option<AnyUnit> {
        Some(self.month.into())
    }

    fn plus(&self, other: &Self) -> Self {
        let (value, month) = unit::add(self, other);
        let sum = Self {
            value,
            day_of_week: None,
            month,
        };
        // The tag follows the days actually travelled, which differs from
        // `other.value` once a month is added or the day is clamped
        let travelled = sum.ordinal() - self.ordinal();
        Self {
            day_of_week: self.day_of_week.map(|d| d + travelled),
            ..sum
        }
    }

    fn increment(&self) -> Self {
        let (value, month) = unit::step_up(self);
        Self {
            value,
            day_of_week: self.day_of_week.map(Cyclic::increment),
            month,
        }
    }

    fn decrement(&self) -> Self {
        let (value, month) = unit::step_down(self);
        Self {
            value,
            day_of_week: self.day_of_week.map(Cyclic::decrement),
            month,
        }
    }
}

impl LoopingTimeUnit for Day {
    type Parent = Month;

    fn parent(&self) -> &Month {
        &self.month
    }

    fn max_under(month: &Month) -> u32 {
        days_in_month(month.month_of_year(), month.year().value()) - 1
    }
}

/// An hour of a particular day, in 24-hour time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Display)]
#[serde(try_from = "RawHour")]
#[display(fmt = "{} {:02}h", day, value)]
pub struct Hour {
    value: u32,
    day: Day,
}

#[derive(Deserialize)]
struct RawHour {
    value: u32,
    day: Day,
}

impl TryFrom<RawHour> for Hour {
    type Error = UnitError;

    fn try_from(raw: RawHour) -> Result<Self, Self::Error> {
        Self::with_day(raw.value, raw.day)
    }
}

impl Hour {
    /// Creates an hour on the first day of year 0
    ///
    /// # Errors
    /// Returns `UnitError::OutOfRange` if `value` is above 23.
    pub fn new(value: u32) -> Result<Self, UnitError> {
        Self::with_day(value, Day::default())
    }

    /// Creates an hour on the given day
    ///
    /// # Errors
    /// Returns `UnitError::OutOfRange` if `value` is above 23.
    pub fn with_day(value: u32, day: Day) -> Result<Self, UnitError> {
        let value = unit::check_bound::<Self>(value, &day)?;
        Ok(Self { value, day })
    }

    /// Getter for the owned Day
    pub const fn day(&self) -> Day {
        self.day
    }

    /// Hour in 24-hour (military) time, 0-23
    pub const fn military(&self) -> u32 {
        self.value
    }

    /// Hour on a 12-hour clock, 1-12. Midnight and noon both read 12.
    pub const fn twelve(&self) -> u32 {
        match self.value % HOURS_PER_HALF_DAY {
            0 => HOURS_PER_HALF_DAY,
            hour => hour,
        }
    }

    /// "A.M." for hours 0-11, "P.M." for hours 12-23
    pub const fn meridiem(&self) -> &'static str {
        if self.value < HOURS_PER_HALF_DAY {
            ANTE_MERIDIEM
        } else {
            POST_MERIDIEM
        }
    }

    /// 24-hour time as a bare number, e.g. "17"
    pub fn as_military_string(&self) -> String {
        self.military().to_string()
    }

    /// 12-hour time with its marker, e.g. "5 P.M."
    pub fn as_twelve_string(&self) -> String {
        format!("{} {}", self.twelve(), self.meridiem())
    }
}

impl Default for Hour {
    fn default() -> Self {
        Self {
            value: 0,
            day: Day::default(),
        }
    }
}

impl TimeUnit for Hour {
    const KIND: UnitKind = UnitKind::Hour;

    fn value(&self) -> u32 {
        self.value
    }

    fn unit_up(&self) -> Option<AnyUnit> {
        Some(self.day.into())
    }

    fn plus(&self, other: &Self) -> Self {
        let (value, day) = unit::add(self, other);
        Self { value, day }
    }

    fn increment(&self) -> Self {
        let (value, day) = unit::step_up(self);
        Self { value, day }
    }

    fn decrement(&self) -> Self {
        let (value, day) = unit::step_down(self);
        Self { value, day }
    }
}

impl LoopingTimeUnit for Hour {
    type Parent = Day;

    fn parent(&self) -> &Day {
        &self.day
    }

    fn max_under(_day: &Day) -> u32 {
        MAX_HOUR
    }
}

/// A minute of a particular hour.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Display)]
#[serde(try_from = "RawMinute")]
#[display(fmt = "{} {:02}:{:02}", "hour.day()", "hour.military()", value)]
pub struct Minute {
    value: u32,
    hour: Hour,
}

#[derive(Deserialize)]
struct RawMinute {
    value: u32,
    hour: Hour,
}

impl TryFrom<RawMinute> for Minute {
    type Error = UnitError;

    fn try_from(raw: RawMinute) -> Result<Self, Self::Error> {
        Self::with_hour(raw.value, raw.hour)
    }
}

impl Minute {
    /// Creates a minute in hour 0 of the first day of year 0
    ///
    /// # Errors
    /// Returns `UnitError::OutOfRange` if `value` is above 59.
    pub fn new(value: u32) -> Result<Self, UnitError> {
        Self::with_hour(value, Hour::default())
    }

    /// Creates a minute in the given hour
    ///
    /// # Errors
    /// Returns `UnitError::OutOfRange` if `value` is above 59.
    pub fn with_hour(value: u32, hour: Hour) -> Result<Self, UnitError> {
        let value = unit::check_bound::<Self>(value, &hour)?;
        Ok(Self { value, hour })
    }

    /// Getter for the owned Hour
    pub const fn hour(&self) -> Hour {
        self.hour
    }
}

impl Default for Minute {
    fn default() -> Self {
        Self {
            value: 0,
            hour: Hour::default(),
        }
    }
}

impl TimeUnit for Minute {
    const KIND: UnitKind = UnitKind::Minute;

    fn value(&self) -> u32 {
        self.value
    }

    fn unit_up(&self) -> Option<AnyUnit> {
        Some(self.hour.into())
    }

    fn plus(&self, other: &Self) -> Self {
        let (value, hour) = unit::add(self, other);
        Self { value, hour }
    }

    fn increment(&self) -> Self {
        let (value, hour) = unit::step_up(self);
        Self { value, hour }
    }

    fn decrement(&self) -> Self {
        let (value, hour) = unit::step_down(self);
        Self { value, hour }
    }
}

impl LoopingTimeUnit for Minute {
    type Parent = Hour;

    fn parent(&self) -> &Hour {
        &self.hour
    }

    fn max_under(_hour: &Hour) -> u32 {
        MAX_MINUTE
    }
}

unit::impl_chain_eq!(Year, Month, Day, Hour, Minute);

macro_rules! impl_add {
    ($($ty:ty),*) => {$(
        impl Add for $ty {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                self.plus(&rhs)
            }
        }
    )*};
}

impl_add!(Year, Month, Day, Hour, Minute);

// Helper functions

/// Every fourth year is a leap year, except year 0. There is no century rule.
pub const fn is_leap_year(year: u32) -> bool {
    year % LEAP_YEAR_CYCLE == 0 && year != 0
}

pub const fn days_in_month(month: MonthOfYear, year: u32) -> u32 {
    month.days(is_leap_year(year))
}

/// Days in years 0 through `year - 1`
fn days_before_year(year: u32) -> i64 {
    let year = i64::from(year);
    // Leap years in 1..year; year 0 is not one
    let leap_days = (year - 1).max(0) / i64::from(LEAP_YEAR_CYCLE);
    year * DAYS_PER_COMMON_YEAR + leap_days
}
