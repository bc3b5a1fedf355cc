//! Entry points over UTF-8 text (`&[u8]`).
//!
//! ```
//! use text_primitives::utf8;
//!
//! let p = utf8::parse_u32_prefix(b"8080/index").unwrap();
//! assert_eq!((p.value, p.consumed), (8080, 4));
//! assert_eq!(utf8::hex::parse_u32(b"1A").unwrap(), 26);
//! ```

#[cfg(feature = "simdutf8")]
use simdutf8::basic as simd_utf8;

use crate::digit::Decimal;
use crate::{ParseError, Parsed, Uri, UriLimits};

entry_points!(u8, Decimal, "decimal");

/// Hexadecimal (`0-9A-Fa-f`) entry points over UTF-8 text.
pub mod hex {
    use crate::digit::Hex;

    entry_points!(u8, Hex, "hexadecimal");
}

/// Parse a URI at the start of `text` with default [`UriLimits`].
///
/// # Errors
///
/// See [`parse_uri`](crate::parse_uri).
#[inline]
pub fn parse_uri(text: &[u8]) -> Result<Parsed<Uri<'_, u8>>, ParseError> {
    crate::parse_uri(text, UriLimits::default())
}

/// Validates UTF-8 bytes and returns a borrowed `&str` on success.
#[inline]
pub(crate) fn validate(bytes: &[u8]) -> Result<&str, ()> {
    #[cfg(feature = "simdutf8")]
    {
        simd_utf8::from_utf8(bytes).map_err(|_| ())
    }

    #[cfg(not(feature = "simdutf8"))]
    {
        core::str::from_utf8(bytes).map_err(|_| ())
    }
}
