//! Digit-run accumulation.
//!
//! Every tier implements the same contract over one digit run:
//!
//! - a non-digit ends the run; the units before it are `consumed`,
//! - a run of zero digits is [`ErrorCode::Empty`],
//! - a digit whose fold would exceed the target width is [`ErrorCode::Overflow`] at that digit's offset.
//!
//! The tiers differ only in where the overflow guard runs. With `W` the digit count of the target
//! maximum, the first `W - 1` digits can never overflow, so only digits from index `W - 1` onward
//! need the guard.

use crate::digit::Radix;
use crate::guard::{guard_free_digits, would_overflow};
use crate::int::UnsignedInt;
use crate::unit::CodeUnit;
use crate::{ErrorCode, ParseError, Parsed};

/// Performance tier for digit accumulation.
///
/// All tiers return identical results for identical input; they exist only as alternative code
/// paths. Public entry points use [`Strategy::Segmented`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Consult the overflow guard before every fold.
    Naive,
    /// Fold the guard-free prefix unchecked, guard only the remainder.
    #[default]
    Segmented,
    /// Dispatch short inputs to fixed-length branch-minimized folds; otherwise segmented.
    Unrolled,
}

impl Strategy {
    /// Every tier, in declaration order.
    pub const ALL: [Self; 3] = [Self::Naive, Self::Segmented, Self::Unrolled];
}

/// Guard-free digit count for an (accumulator, alphabet) pair, fixed at compile time.
trait GuardFree {
    const GUARD_FREE: usize;
}

impl<T: UnsignedInt, R: Radix> GuardFree for (T, R) {
    const GUARD_FREE: usize = guard_free_digits(T::MAX_U64, R::BASE as u64);
}

/// Accumulate the leading digit run of `units` using `strategy`.
#[inline]
pub fn accumulate<T, R, U>(units: &[U], strategy: Strategy) -> Result<Parsed<T>, ParseError>
where
    T: UnsignedInt,
    R: Radix,
    U: CodeUnit,
{
    match strategy {
        Strategy::Naive => naive::<T, R, U>(units),
        Strategy::Segmented => segmented::<T, R, U>(units),
        Strategy::Unrolled => unrolled::<T, R, U>(units),
    }
}

#[inline]
fn finish<T>(value: T, consumed: usize) -> Result<Parsed<T>, ParseError> {
    if consumed == 0 {
        Err(ParseError::new(ErrorCode::Empty, 0))
    } else {
        Ok(Parsed::new(value, consumed))
    }
}

#[inline]
const fn overflow(offset: usize) -> ParseError {
    ParseError::new(ErrorCode::Overflow, offset)
}

pub(crate) fn naive<T, R, U>(units: &[U]) -> Result<Parsed<T>, ParseError>
where
    T: UnsignedInt,
    R: Radix,
    U: CodeUnit,
{
    let mut acc = T::ZERO;
    for (i, unit) in units.iter().enumerate() {
        let Some(digit) = R::digit(unit.code_point()) else {
            return finish(acc, i);
        };
        if would_overflow(acc, digit, R::BASE) {
            return Err(overflow(i));
        }
        acc = acc.fold(R::BASE, digit);
    }
    finish(acc, units.len())
}

#[inline]
pub(crate) fn segmented<T, R, U>(units: &[U]) -> Result<Parsed<T>, ParseError>
where
    T: UnsignedInt,
    R: Radix,
    U: CodeUnit,
{
    let (head, tail) = units.split_at(units.len().min(<(T, R) as GuardFree>::GUARD_FREE));

    let mut acc = T::ZERO;
    for (i, unit) in head.iter().enumerate() {
        let Some(digit) = R::digit(unit.code_point()) else {
            return finish(acc, i);
        };
        acc = acc.fold(R::BASE, digit);
    }

    for (i, unit) in tail.iter().enumerate() {
        let offset = head.len() + i;
        let Some(digit) = R::digit(unit.code_point()) else {
            return finish(acc, offset);
        };
        if would_overflow(acc, digit, R::BASE) {
            return Err(overflow(offset));
        }
        acc = acc.fold(R::BASE, digit);
    }

    finish(acc, units.len())
}

macro_rules! dispatch_fixed {
    ($units:ident; $($n:literal)+) => {
        match $units.len() {
            $(
                $n => {
                    if let Ok(run) = <&[U; $n]>::try_from($units) {
                        return fixed::<T, R, U, $n>(run);
                    }
                }
            )+
            _ => {}
        }
    };
}

fn unrolled<T, R, U>(units: &[U]) -> Result<Parsed<T>, ParseError>
where
    T: UnsignedInt,
    R: Radix,
    U: CodeUnit,
{
    if units.len() < <(T, R) as GuardFree>::GUARD_FREE {
        // Guard-free lengths top out at 18 (u64 decimal allows 19 unchecked digits).
        dispatch_fixed!(units; 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18);
    }
    segmented::<T, R, U>(units)
}

/// Fold exactly `N < W - 1` units with no early exit: once a non-digit is seen the
/// accumulator and count stop advancing.
#[inline]
fn fixed<T, R, U, const N: usize>(run: &[U; N]) -> Result<Parsed<T>, ParseError>
where
    T: UnsignedInt,
    R: Radix,
    U: CodeUnit,
{
    debug_assert!(N < <(T, R) as GuardFree>::GUARD_FREE);

    let mut acc = T::ZERO;
    let mut consumed = 0_usize;
    let mut valid = true;
    for unit in run {
        let digit = R::digit(unit.code_point());
        valid &= digit.is_some();
        acc = if valid {
            acc.fold(R::BASE, digit.unwrap_or(0))
        } else {
            acc
        };
        consumed += usize::from(valid);
    }
    finish(acc, consumed)
}
