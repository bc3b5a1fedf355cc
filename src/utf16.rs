//! Entry points over UTF-16 text (`&[u16]`).
//!
//! Each code unit is decoded on its own; surrogates and any other non-ASCII unit simply end a
//! digit run.

use crate::digit::Decimal;
use crate::{ParseError, Parsed, Uri, UriLimits};

entry_points!(u16, Decimal, "decimal");

/// Hexadecimal (`0-9A-Fa-f`) entry points over UTF-16 text.
pub mod hex {
    use crate::digit::Hex;

    entry_points!(u16, Hex, "hexadecimal");
}

/// Parse a URI at the start of `text` with default [`UriLimits`].
///
/// # Errors
///
/// See [`parse_uri`](crate::parse_uri).
#[inline]
pub fn parse_uri(text: &[u16]) -> Result<Parsed<Uri<'_, u16>>, ParseError> {
    crate::parse_uri(text, UriLimits::default())
}
