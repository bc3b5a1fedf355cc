//! Overflow guard.
//!
//! Folding one more digit `d` into `acc` overflows iff
//! `acc > MAX / base`, or `acc == MAX / base` and `d > MAX % base`.
//! The test is exact for every width and base and never multiplies.

use crate::int::UnsignedInt;

/// Returns true iff `acc * base + digit` would exceed `T`'s maximum.
#[inline]
#[must_use]
pub fn would_overflow<T: UnsignedInt>(acc: T, digit: u32, base: u32) -> bool {
    let (limit, rem) = T::overflow_limit(base);
    acc > limit || (acc == limit && T::from_digit(digit) > rem)
}

/// Number of base-`base` digits needed to write `max`.
#[must_use]
pub const fn digit_count(max: u64, base: u64) -> usize {
    let mut n = max;
    let mut count = 0;
    while n > 0 {
        n /= base;
        count += 1;
    }
    count
}

/// Digits that can be folded into a `max`-bounded accumulator without consulting the guard.
///
/// Any run of `digit_count(max) - 1` digits is strictly below `base^(digit_count - 1) <= max`.
#[must_use]
pub const fn guard_free_digits(max: u64, base: u64) -> usize {
    digit_count(max, base) - 1
}
