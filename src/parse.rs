use crate::digit::Radix;
use crate::int::UnsignedInt;
use crate::strategy::{self, Strategy};
use crate::unit::CodeUnit;
use crate::{ParseError, Parsed};

/// Parse the leading digit run of `units` and return only the value.
///
/// A run that stops at a non-digit still succeeds; use [`parse_prefix`] when the caller needs to
/// know where it stopped.
///
/// # Errors
///
/// Returns `Empty` if `units` does not start with a digit, or `Overflow` if the run does not fit `T`.
#[inline]
pub fn parse<T, R, U>(units: &[U]) -> Result<T, ParseError>
where
    T: UnsignedInt,
    R: Radix,
    U: CodeUnit,
{
    parse_prefix::<T, R, U>(units).map(Parsed::into_value)
}

/// Parse the leading digit run of `units`, returning the value and the count of units consumed.
///
/// This is an allocation-free hot-path parser using the default [`Strategy`].
///
/// # Errors
///
/// Returns `Empty` if `units` does not start with a digit, or `Overflow` if the run does not fit `T`.
#[inline]
pub fn parse_prefix<T, R, U>(units: &[U]) -> Result<Parsed<T>, ParseError>
where
    T: UnsignedInt,
    R: Radix,
    U: CodeUnit,
{
    strategy::segmented::<T, R, U>(units)
}

/// Like [`parse_prefix`], with an explicit accumulation tier.
///
/// Every tier returns the same result; this exists for benchmarking and verification.
///
/// # Errors
///
/// Same as [`parse_prefix`].
#[inline]
pub fn parse_prefix_with<T, R, U>(units: &[U], strategy: Strategy) -> Result<Parsed<T>, ParseError>
where
    T: UnsignedInt,
    R: Radix,
    U: CodeUnit,
{
    strategy::accumulate::<T, R, U>(units, strategy)
}
