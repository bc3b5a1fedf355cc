//! Percent-decoding of UTF-8 URL text.
//!
//! Each `%XX` escape is parsed by the hex engine over an exactly-two-byte span. Every other byte
//! is copied through unchanged. Output is never longer than input.

#[cfg(feature = "alloc")]
use alloc::vec;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::digit::Hex;
use crate::{parse_prefix, ErrorCode, ParseError};

/// Decode the byte at `pos`, returning it and the number of input bytes it used.
#[inline]
fn decode_at(input: &[u8], pos: usize) -> Result<(u8, usize), ParseError> {
    let b = input[pos];
    if b != b'%' {
        return Ok((b, 1));
    }
    let escape = input.get(pos + 1..pos + 3).unwrap_or_default();
    match parse_prefix::<u8, Hex, u8>(escape) {
        Ok(p) if p.consumed == 2 => Ok((p.value, 3)),
        _ => Err(reject!(ParseError::new(
            ErrorCode::InvalidPercentEscape,
            pos
        ))),
    }
}

/// Percent-decode `input` into `dest`, returning the number of bytes written.
///
/// `dest` never needs to be longer than `input`.
///
/// ```
/// use text_primitives::percent_decode;
///
/// let mut out = [0u8; 32];
/// let n = percent_decode(b"%C3%84ra%20Benetton", &mut out).unwrap();
/// assert_eq!(core::str::from_utf8(&out[..n]).unwrap(), "Ära Benetton");
/// ```
///
/// # Errors
///
/// Returns `InvalidPercentEscape` at the `%` offset if it is not followed by two hex digits, or
/// `BufferTooSmall` at the input offset whose output did not fit.
pub fn percent_decode(input: &[u8], dest: &mut [u8]) -> Result<usize, ParseError> {
    let mut read = 0;
    let mut written = 0;
    while read < input.len() {
        let (byte, used) = decode_at(input, read)?;
        let slot = dest
            .get_mut(written)
            .ok_or_else(|| reject!(ParseError::new(ErrorCode::BufferTooSmall, read)))?;
        *slot = byte;
        written += 1;
        read += used;
    }
    Ok(written)
}

/// Percent-decode `buf` in place, returning the decoded length.
///
/// On error the buffer contents are unspecified.
///
/// # Errors
///
/// Returns `InvalidPercentEscape` at the `%` offset if it is not followed by two hex digits.
pub fn percent_decode_in_place(buf: &mut [u8]) -> Result<usize, ParseError> {
    let mut read = 0;
    let mut written = 0;
    while read < buf.len() {
        let (byte, used) = decode_at(buf, read)?;
        // written <= read, so the write never clobbers unread input.
        buf[written] = byte;
        written += 1;
        read += used;
    }
    Ok(written)
}

/// Percent-decode `input` into a new vector.
///
/// # Errors
///
/// Returns `InvalidPercentEscape` at the `%` offset if it is not followed by two hex digits.
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn percent_decode_to_vec(input: &[u8]) -> Result<Vec<u8>, ParseError> {
    let mut out = vec![0; input.len()];
    let n = percent_decode(input, &mut out)?;
    out.truncate(n);
    Ok(out)
}
