use crate::UnitError;
use crate::prelude::*;
use crate::types::{Day, Hour, Minute, Month, Year};
use crate::unit::{LoopingTimeUnit, TimeUnit};
use std::fmt;

/// The link of the chain a unit occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum UnitKind {
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

/// Any unit of the chain, tagged by kind.
///
/// Arithmetic between two tagged units checks the kinds at runtime,
/// so adding a `Day` to an `Hour` is an error instead of a coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From)]
pub enum AnyUnit {
    Year(Year),
    Month(Month),
    Day(Day),
    Hour(Hour),
    Minute(Minute),
}

macro_rules! each {
    ($self:expr, $unit:ident => $body:expr) => {
        match $self {
            AnyUnit::Year($unit) => $body,
            AnyUnit::Month($unit) => $body,
            AnyUnit::Day($unit) => $body,
            AnyUnit::Hour($unit) => $body,
            AnyUnit::Minute($unit) => $body,
        }
    };
}

impl AnyUnit {
    /// Returns which kind of unit this is
    pub const fn kind(&self) -> UnitKind {
        match self {
            Self::Year(_) => UnitKind::Year,
            Self::Month(_) => UnitKind::Month,
            Self::Day(_) => UnitKind::Day,
            Self::Hour(_) => UnitKind::Hour,
            Self::Minute(_) => UnitKind::Minute,
        }
    }

    /// Returns the magnitude of the wrapped unit
    pub fn value(&self) -> u32 {
        each!(self, unit => unit.value())
    }

    /// Returns the inclusive maximum, or `None` for the unbounded year
    pub fn max(&self) -> Option<u32> {
        match self {
            Self::Year(_) => None,
            Self::Month(unit) => Some(unit.max()),
            Self::Day(unit) => Some(unit.max()),
            Self::Hour(unit) => Some(unit.max()),
            Self::Minute(unit) => Some(unit.max()),
        }
    }

    /// Returns the next-larger unit, or `None` for a year
    pub fn unit_up(&self) -> Option<Self> {
        each!(self, unit => unit.unit_up())
    }

    /// Advances the wrapped unit by one
    #[must_use]
    pub fn increment(&self) -> Self {
        each!(self, unit => unit.increment().into())
    }

    /// Retreats the wrapped unit by one
    #[must_use]
    pub fn decrement(&self) -> Self {
        each!(self, unit => unit.decrement().into())
    }

    /// Adds two units of the same kind
    ///
    /// # Errors
    /// Returns `UnitError::KindMismatch` if `other` is a different kind of unit.
    pub fn try_plus(&self, other: &Self) -> Result<Self, UnitError> {
        match (self, other) {
            (Self::Year(a), Self::Year(b)) => Ok(a.plus(b).into()),
            (Self::Month(a), Self::Month(b)) => Ok(a.plus(b).into()),
            (Self::Day(a), Self::Day(b)) => Ok(a.plus(b).into()),
            (Self::Hour(a), Self::Hour(b)) => Ok(a.plus(b).into()),
            (Self::Minute(a), Self::Minute(b)) => Ok(a.plus(b).into()),
            _ => Err(UnitError::KindMismatch {
                expected: self.kind(),
                found: other.kind(),
            }),
        }
    }
}

impl fmt::Display for AnyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        each!(self, unit => fmt::Display::fmt(unit, f))
    }
}
