use std::ops::{Add, Sub};

/// A bounded integer that wraps around an inclusive maximum.
///
/// The counter does not validate its input: callers must keep
/// `value <= max`. The overflow predicates describe the *next* step, so
/// they are read before the step is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoopingNumber {
    value: u32,
    max: u32,
}

impl LoopingNumber {
    /// Creates a counter at `value` that wraps after `max`
    pub const fn new(value: u32, max: u32) -> Self {
        debug_assert!(value <= max);
        Self { value, max }
    }

    /// Returns the current value
    #[inline]
    pub const fn get(self) -> u32 {
        self.value
    }

    /// Returns the inclusive maximum
    #[inline]
    pub const fn max(self) -> u32 {
        self.max
    }

    /// Whether the next increment wraps back to zero
    pub const fn will_overflow(self) -> bool {
        self.value == self.max
    }

    /// Whether the next decrement wraps up to `max`
    pub const fn will_underflow(self) -> bool {
        self.value == 0
    }

    /// Steps left before the next increment wraps
    pub const fn headroom(self) -> u32 {
        self.max - self.value
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn shift(self, n: i64) -> Self {
        let radix = i64::from(self.max) + 1;
        let next = (i64::from(self.value) + n.rem_euclid(radix)).rem_euclid(radix);
        // next is in 0..=max
        Self::new(next as u32, self.max)
    }
}

impl Add<u32> for LoopingNumber {
    type Output = Self;

    fn add(self, rhs: u32) -> Self {
        self.shift(i64::from(rhs))
    }
}

impl Sub<u32> for LoopingNumber {
    type Output = Self;

    fn sub(self, rhs: u32) -> Self {
        self.shift(-i64::from(rhs))
    }
}

impl From<LoopingNumber> for u32 {
    fn from(number: LoopingNumber) -> Self {
        number.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_without_wrap() {
        let n = LoopingNumber::new(3, 59);
        assert_eq!((n + 10).get(), 13);
        assert_eq!((n + 10).max(), 59);
    }

    #[test]
    fn test_add_wraps_at_max() {
        assert_eq!((LoopingNumber::new(59, 59) + 1).get(), 0);
        assert_eq!((LoopingNumber::new(50, 59) + 15).get(), 5);
        assert_eq!((LoopingNumber::new(0, 23) + 48).get(), 0);
    }

    #[test]
    fn test_sub_wraps_below_zero() {
        assert_eq!((LoopingNumber::new(0, 59) - 1).get(), 59);
        assert_eq!((LoopingNumber::new(5, 11) - 7).get(), 10);
        assert_eq!((LoopingNumber::new(5, 11) - 5).get(), 0);
    }

    #[test]
    fn test_wide_operands() {
        assert_eq!((LoopingNumber::new(u32::MAX, u32::MAX) + 1).get(), 0);
        assert_eq!((LoopingNumber::new(0, u32::MAX) - u32::MAX).get(), 1);
        assert_eq!((LoopingNumber::new(1, 6) + u32::MAX).get(), (1 + u32::MAX % 7) % 7);
    }

    #[test]
    fn test_overflow_predicates_read_current_state() {
        let top = LoopingNumber::new(23, 23);
        assert!(top.will_overflow());
        assert!(!top.will_underflow());
        assert!(!(top + 1).will_overflow());
        assert!((top + 1).will_underflow());

        let middle = LoopingNumber::new(12, 23);
        assert!(!middle.will_overflow());
        assert!(!middle.will_underflow());
    }

    #[test]
    fn test_single_value_range() {
        let n = LoopingNumber::new(0, 0);
        assert!(n.will_overflow());
        assert!(n.will_underflow());
        assert_eq!((n + 5).get(), 0);
        assert_eq!(n.headroom(), 0);
    }

    #[test]
    fn test_headroom() {
        assert_eq!(LoopingNumber::new(0, 30).headroom(), 30);
        assert_eq!(LoopingNumber::new(27, 27).headroom(), 0);
    }
}
