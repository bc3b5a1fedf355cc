/// Log a composite-parser rejection (with the `log` feature) and evaluate to the error.
macro_rules! reject {
    ($err:expr) => {{
        let err: $crate::ParseError = $err;
        #[cfg(feature = "log")]
        log::trace!(
            target: "text_primitives",
            "rejected at offset {}: {:?}",
            err.offset,
            err.code
        );
        err
    }};
}

/// Emit the fixed-width entry points for one code-unit type and alphabet.
macro_rules! entry_points {
    ($unit:ty, $radix:ty, $what:literal) => {
        entry_points!(@width $unit, $radix, $what, u8, parse_u8, parse_u8_prefix);
        entry_points!(@width $unit, $radix, $what, u16, parse_u16, parse_u16_prefix);
        entry_points!(@width $unit, $radix, $what, u32, parse_u32, parse_u32_prefix);
        entry_points!(@width $unit, $radix, $what, u64, parse_u64, parse_u64_prefix);
    };
    (@width $unit:ty, $radix:ty, $what:literal, $int:ty, $name:ident, $prefix:ident) => {
        #[doc = concat!("Parse the leading ", $what, " run of `text` as `", stringify!($int), "`.")]
        ///
        /// A run that stops at a non-digit still succeeds.
        ///
        /// # Errors
        ///
        /// Returns `Empty` if `text` does not start with a digit, or `Overflow` if the run does not fit.
        #[inline]
        pub fn $name(text: &[$unit]) -> Result<$int, $crate::ParseError> {
            $crate::parse::<$int, $radix, $unit>(text)
        }

        #[doc = concat!("Parse the leading ", $what, " run of `text` as `", stringify!($int), "`, reporting units consumed.")]
        ///
        /// # Errors
        ///
        /// Returns `Empty` if `text` does not start with a digit, or `Overflow` if the run does not fit.
        #[inline]
        pub fn $prefix(text: &[$unit]) -> Result<$crate::Parsed<$int>, $crate::ParseError> {
            $crate::parse_prefix::<$int, $radix, $unit>(text)
        }
    };
}
