//! # text-primitives
//!
//! Allocation-free parsing of unsigned integers and URIs directly from encoded text buffers
//! (UTF-8 bytes, UTF-16 code units, decimal or hexadecimal digits).
//!
//! ## Design principles
//!
//! - **No intermediate strings.**
//!   Parsers read the caller's slice in place and report how many units they consumed, so a caller
//!   holding a network or file buffer can advance its own cursor.
//! - **One canonical engine.**
//!   Every entry point, whatever the encoding or alphabet, funnels into [`parse_prefix`] over a
//!   slice of [`CodeUnit`]s.
//! - **Exact overflow detection.**
//!   Accumulation never wraps. A run that does not fit the target width is an error; no
//!   truncated value is ever returned.
//!
//! ## Parse contract
//!
//! - A digit run is the longest prefix of valid digits for the alphabet.
//! - A run that stops at a non-digit is a **success** covering the digits before it.
//! - Zero leading digits is [`ErrorCode::Empty`]; a run exceeding the width is [`ErrorCode::Overflow`].
//! - Leading zeros are ordinary digits.
//! - On error there is no value and no consumed count.
//!
//! ```
//! use text_primitives::{utf16, utf8, ErrorCode};
//!
//! let p = utf8::parse_u32_prefix(b"123abc").unwrap();
//! assert_eq!((p.value, p.consumed), (123, 3));
//!
//! let wide: Vec<u16> = "4294967295".encode_utf16().collect();
//! assert_eq!(utf16::parse_u32(&wide).unwrap(), u32::MAX);
//!
//! let err = utf8::parse_u32(b"4294967296").unwrap_err();
//! assert_eq!(err.code, ErrorCode::Overflow);
//! ```
//!
//! ## Accumulation tiers
//!
//! [`Strategy`] selects between equivalent accumulation paths. Public entry points always use
//! [`Strategy::Segmented`]; [`parse_prefix_with`] exists to benchmark and cross-check the others.
//!
//! ## Composite parsers
//!
//! - [`parse_uri`] splits a URI into borrowed components, parsing the port with the digit engine.
//! - [`percent_decode`] decodes `%XX` escapes with the hex engine.
//!
//! ## Feature flags
//!
//! - `std` *(default)*: implements `std::error::Error` for [`ParseError`].
//! - `alloc` *(default)*: enables owned helpers ([`percent_decode_to_vec`], `Uri::to_string_lossy`).
//! - `simdutf8`: enables SIMD-accelerated UTF-8 validation in `Uri::as_str`.
//! - `log`: emits `trace` records when a composite parser rejects input.
//!
//! ## `no_std`
//!
//! The crate is `no_std` compatible. Everything except the owned helpers works without `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod macros;

mod digit;
mod error;
mod guard;
mod int;
mod limits;
mod parse;
mod parsed;
mod percent;
mod strategy;
mod unit;
mod uri;

pub mod utf16;
pub mod utf8;

pub use crate::digit::{Decimal, Hex, Radix};
pub use crate::error::{ErrorCode, ParseError};
pub use crate::int::UnsignedInt;
pub use crate::limits::{UriLimits, DEFAULT_MAX_URI_LEN};
pub use crate::parse::{parse, parse_prefix, parse_prefix_with};
pub use crate::parsed::Parsed;
pub use crate::percent::{percent_decode, percent_decode_in_place};
pub use crate::strategy::Strategy;
pub use crate::unit::CodeUnit;
pub use crate::uri::{parse_uri, Authority, Uri};

#[cfg(feature = "alloc")]
pub use crate::percent::percent_decode_to_vec;
