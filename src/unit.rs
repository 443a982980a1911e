//! Shared contracts for the unit chain and the arithmetic every looping
//! unit delegates to.

use crate::UnitError;
use crate::any::{AnyUnit, UnitKind};
use crate::counter::LoopingNumber;
use crate::prelude::*;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

/// A magnitude that may own the next-larger unit in the chain.
///
/// Every operation returns a new value; nothing is mutated in place.
pub trait TimeUnit: Copy + Debug + Into<AnyUnit> {
    /// Which link of the chain this is
    const KIND: UnitKind;

    /// Returns the magnitude of this unit
    fn value(&self) -> u32;

    /// Returns the next-larger unit, or `None` at the root
    fn unit_up(&self) -> Option<AnyUnit>;

    /// Adds another unit of the same kind, carrying into the parent chain.
    /// The addend's own parent chain is added as well.
    #[must_use]
    fn plus(&self, other: &Self) -> Self;

    /// Advances by one, carrying into the parent on overflow
    #[must_use]
    fn increment(&self) -> Self;

    /// Retreats by one, borrowing from the parent on underflow
    #[must_use]
    fn decrement(&self) -> Self;
}

/// A unit whose magnitude wraps at a bound derived from its parent.
pub trait LoopingTimeUnit: TimeUnit {
    /// The next-larger unit
    type Parent: TimeUnit;

    /// Returns the owned parent unit
    fn parent(&self) -> &Self::Parent;

    /// Inclusive maximum of this unit when placed under `parent`
    fn max_under(parent: &Self::Parent) -> u32;

    /// Inclusive maximum, always taken from the current parent
    fn max(&self) -> u32 {
        Self::max_under(self.parent())
    }

    /// Counter mirroring the current value and bound
    fn counter(&self) -> LoopingNumber {
        LoopingNumber::new(self.value(), self.max())
    }
}

/// Equality over the magnitude and the whole remaining chain.
pub(crate) fn chain_eq<U: TimeUnit>(a: &U, b: &U) -> bool {
    a.value() == b.value() && a.unit_up() == b.unit_up()
}

pub(crate) fn chain_hash<U: TimeUnit, H: Hasher>(unit: &U, state: &mut H) {
    unit.value().hash(state);
    unit.unit_up().hash(state);
}

/// Validates `value` against the bound the unit would have under `parent`.
pub(crate) fn check_bound<U: LoopingTimeUnit>(
    value: u32,
    parent: &U::Parent,
) -> Result<u32, UnitError> {
    let max = U::max_under(parent);
    if value > max {
        return Err(UnitError::OutOfRange {
            kind: U::KIND,
            value,
            max,
        });
    }
    Ok(value)
}

/// Next value and parent after one increment.
pub(crate) fn step_up<U: LoopingTimeUnit>(unit: &U) -> (u32, U::Parent) {
    let counter = unit.counter();
    let parent = if counter.will_overflow() {
        trace!(kind = %U::KIND, value = counter.get(), "carry into parent");
        unit.parent().increment()
    } else {
        *unit.parent()
    };
    (u32::from(counter + 1), parent)
}

/// Next value and parent after one decrement.
pub(crate) fn step_down<U: LoopingTimeUnit>(unit: &U) -> (u32, U::Parent) {
    let counter = unit.counter();
    if counter.will_underflow() {
        trace!(kind = %U::KIND, "borrow from parent");
        let parent = unit.parent().decrement();
        // Wrap to the bound of the new parent, which may be shorter
        (U::max_under(&parent), parent)
    } else {
        (u32::from(counter - 1), *unit.parent())
    }
}

/// Value and parent of `unit + other`.
///
/// Parent chains are summed first, then `other`'s magnitude is added one
/// wrap at a time so a variable bound is recomputed after every carry.
pub(crate) fn add<U: LoopingTimeUnit>(unit: &U, other: &U) -> (u32, U::Parent) {
    let mut parent = unit.parent().plus(other.parent());
    let max = U::max_under(&parent);
    if unit.value() > max {
        debug!(kind = %U::KIND, value = unit.value(), max, "clamping to shorter parent");
    }

    let mut counter = LoopingNumber::new(unit.value().min(max), max);
    let mut remaining = other.value();
    while remaining > counter.headroom() {
        remaining -= counter.headroom() + 1;
        trace!(kind = %U::KIND, remaining, "carry into parent");
        parent = parent.increment();
        counter = LoopingNumber::new(0, U::max_under(&parent));
    }
    (u32::from(counter + remaining), parent)
}

macro_rules! impl_chain_eq {
    ($($ty:ty),*) => {$(
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::unit::chain_eq(self, other)
            }
        }

        impl Eq for $ty {}

        impl ::std::hash::Hash for $ty {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                $crate::unit::chain_hash(self, state);
            }
        }
    )*};
}

pub(crate) use impl_chain_eq;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Day, DayOfWeek, Hour, Minute, Month, MonthOfYear, Year};

    fn month(month: MonthOfYear, year: u32) -> Month {
        Month::from_month_of_year(month, Year::new(year))
    }

    #[test]
    fn test_check_bound() {
        let feb = month(MonthOfYear::February, 2023);
        assert_eq!(check_bound::<Day>(27, &feb), Ok(27));
        assert_eq!(
            check_bound::<Day>(28, &feb),
            Err(UnitError::OutOfRange {
                kind: UnitKind::Day,
                value: 28,
                max: 27
            })
        );
        assert!(check_bound::<Minute>(59, &Hour::default()).is_ok());
        assert!(check_bound::<Minute>(60, &Hour::default()).is_err());
    }

    #[test]
    fn test_step_up_carries_only_at_max() {
        let minute = Minute::new(58).unwrap();
        let (value, hour) = step_up(&minute);
        assert_eq!(value, 59);
        assert_eq!(hour, Hour::default());

        let minute = Minute::new(59).unwrap();
        let (value, hour) = step_up(&minute);
        assert_eq!(value, 0);
        assert_eq!(hour.value(), 1);
    }

    #[test]
    fn test_step_down_wraps_to_new_parent_bound() {
        let first_of_march = Day::with_month(0, month(MonthOfYear::March, 2024)).unwrap();
        let (value, parent) = step_down(&first_of_march);
        assert_eq!(parent, month(MonthOfYear::February, 2024));
        assert_eq!(value, 28);

        let first_of_march = Day::with_month(0, month(MonthOfYear::March, 2023)).unwrap();
        let (value, _) = step_down(&first_of_march);
        assert_eq!(value, 27);
    }

    #[test]
    fn test_add_single_carry() {
        let a = Minute::new(45).unwrap();
        let b = Minute::new(30).unwrap();
        let (value, hour) = add(&a, &b);
        assert_eq!(value, 15);
        assert_eq!(hour.value(), 1);
    }

    #[test]
    fn test_add_sums_parent_chains() {
        let a = Minute::with_hour(10, Hour::new(3).unwrap()).unwrap();
        let b = Minute::with_hour(55, Hour::new(4).unwrap()).unwrap();
        let (value, hour) = add(&a, &b);
        assert_eq!(value, 5);
        assert_eq!(hour.value(), 8);
    }

    #[test]
    fn test_add_recomputes_variable_bound_per_wrap() {
        // Day 28 of a non-leap February plus 30 days lands on day 30 of March
        let start = Day::with_month(27, month(MonthOfYear::February, 2001)).unwrap();
        let offset = Day::new(30).unwrap();
        let (value, parent) = add(&start, &offset);
        assert_eq!(parent, month(MonthOfYear::March, 2001));
        assert_eq!(value, 29);
    }

    #[test]
    fn test_add_repeated_month_crossings() {
        // February, March and April each have a different length
        let start = Day::with_month(27, month(MonthOfYear::February, 2001)).unwrap();
        let mut total = start;
        for _ in 0..3 {
            total = total.plus(&Day::new(30).unwrap());
        }
        assert_eq!(total.month().month_of_year(), MonthOfYear::May);
        assert_eq!(total.value(), 28);
    }

    #[test]
    fn test_add_clamps_when_parent_shortens() {
        let end_of_january = Day::with_month(30, month(MonthOfYear::January, 2001)).unwrap();
        let one_month = Day::with_month(0, Month::new(1).unwrap()).unwrap();
        let (value, parent) = add(&end_of_january, &one_month);
        assert_eq!(parent, month(MonthOfYear::February, 2001));
        assert_eq!(value, 27);
    }

    #[test]
    fn test_chain_eq_ignores_day_of_week() {
        let tagged = Day::with_day_of_week(3, DayOfWeek::Friday, Month::default()).unwrap();
        let untagged = Day::new(3).unwrap();
        assert!(chain_eq(&tagged, &untagged));
    }
}
