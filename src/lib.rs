//! Calendar arithmetic over a chain of wraparound units.
//!
//! `Minute` → `Hour` → `Day` → `Month` → `Year`: each unit owns the next
//! larger one, and overflow or underflow carries up the chain. Month
//! lengths follow a four-year leap cycle in which year 0 is not a leap year.

mod any;
mod consts;
mod counter;
mod cyclic;
mod prelude;
mod types;
mod unit;

pub use any::{AnyUnit, UnitKind};
pub use consts::*;
pub use counter::LoopingNumber;
pub use cyclic::{Cyclic, DayOfWeek, MonthOfYear};
pub use types::{Day, Hour, Minute, Month, Year, days_in_month, is_leap_year};
pub use unit::{LoopingTimeUnit, TimeUnit};

/// Error type for building units and combining them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
    /// A looping unit was built with a value above its maximum.
    #[error("Invalid {kind} value: {value} (must be 0-{max})")]
    OutOfRange { kind: UnitKind, value: u32, max: u32 },

    /// A cyclic label was requested by an ordinal outside the set.
    #[error("Invalid {label} index: {index} (must be 0-{max})")]
    InvalidIndex {
        label: &'static str,
        index: u32,
        max: u32,
    },

    /// Two units of different kinds were added together.
    #[error("Cannot add {found} to {expected}")]
    KindMismatch { expected: UnitKind, found: UnitKind },
}
