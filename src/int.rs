use core::fmt::Debug;

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width unsigned accumulator the digit engine can fold into.
///
/// Implemented for `u8`, `u16`, `u32` and `u64`; sealed.
pub trait UnsignedInt: Copy + Ord + Debug + sealed::Sealed {
    /// Zero; the starting accumulator.
    const ZERO: Self;
    /// The maximum representable value, widened to `u64`.
    const MAX_U64: u64;

    /// `self * base + digit` without overflow checks.
    ///
    /// Callers guarantee the result fits, either by digit count or by consulting the overflow
    /// guard first.
    fn fold(self, base: u32, digit: u32) -> Self;

    /// `(MAX / base, MAX % base)`.
    fn overflow_limit(base: u32) -> (Self, Self);

    /// Widen a digit (`< base <= 16`) into `Self`.
    fn from_digit(digit: u32) -> Self;
}

macro_rules! unsigned_int {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            #[allow(clippy::cast_possible_truncation)]
            impl UnsignedInt for $ty {
                const ZERO: Self = 0;
                const MAX_U64: u64 = <$ty>::MAX as u64;

                #[inline]
                fn fold(self, base: u32, digit: u32) -> Self {
                    self * (base as $ty) + (digit as $ty)
                }

                #[inline]
                fn overflow_limit(base: u32) -> (Self, Self) {
                    let base = base as $ty;
                    (<$ty>::MAX / base, <$ty>::MAX % base)
                }

                #[inline]
                fn from_digit(digit: u32) -> Self {
                    digit as $ty
                }
            }
        )+
    };
}

unsigned_int!(u8, u16, u32, u64);
