//! Single-unit digit decoding.
//!
//! Decoding works on the unit's code point widened to `u32`, so the same
//! routine serves UTF-8 bytes and UTF-16 code units. Anything outside the
//! ASCII digit/letter ranges is simply "not a digit", which ends a run.

const ASCII_ZERO: u32 = 0x30;
const ASCII_LOWER_A: u32 = 0x61;
// Setting this bit maps 'A'..='F' onto 'a'..='f' and leaves 'a'..='f' unchanged.
const ASCII_CASE_BIT: u32 = 0x20;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Decimal {}
    impl Sealed for super::Hex {}
}

/// A digit alphabet: numeric base plus the unit-to-digit mapping.
///
/// Implemented by [`Decimal`] and [`Hex`]; sealed.
pub trait Radix: sealed::Sealed {
    /// Numeric base of the alphabet.
    const BASE: u32;

    /// Map one code point to its digit value in `0..BASE`, or `None` if it is not a digit.
    fn digit(unit: u32) -> Option<u32>;
}

/// Decimal alphabet `0-9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decimal;

/// Hexadecimal alphabet `0-9A-Fa-f` (case-insensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hex;

impl Radix for Decimal {
    const BASE: u32 = 10;

    #[inline]
    fn digit(unit: u32) -> Option<u32> {
        decimal_digit(unit)
    }
}

impl Radix for Hex {
    const BASE: u32 = 16;

    #[inline]
    fn digit(unit: u32) -> Option<u32> {
        hex_digit(unit)
    }
}

/// Decode a decimal digit with one subtraction and one unsigned range compare.
#[inline]
#[must_use]
pub const fn decimal_digit(unit: u32) -> Option<u32> {
    let d = unit.wrapping_sub(ASCII_ZERO);
    if d <= 9 {
        Some(d)
    } else {
        None
    }
}

/// Decode a hex digit, accepting both letter cases.
#[inline]
#[must_use]
pub const fn hex_digit(unit: u32) -> Option<u32> {
    if let Some(d) = decimal_digit(unit) {
        return Some(d);
    }
    let d = (unit | ASCII_CASE_BIT).wrapping_sub(ASCII_LOWER_A);
    if d <= 5 {
        Some(d + 10)
    } else {
        None
    }
}
