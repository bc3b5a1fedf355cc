//! Allocation-free URI splitting over any code-unit encoding.
//!
//! The parser splits `scheme ":" ["//" authority] path ["?" query] ["#" fragment]` and borrows
//! every component from the input. It does not normalize, percent-decode, or validate host syntax.
//! The port is the one numeric component and is parsed with the digit engine.

#[cfg(feature = "alloc")]
use alloc::string::String;

use crate::digit::Decimal;
use crate::limits::UriLimits;
use crate::unit::{eq_ignore_ascii_case, CodeUnit};
use crate::{parse_prefix, ErrorCode, ParseError, Parsed};

const KNOWN_PORTS: [(&[u8], u16); 5] = [
    (b"http", 80),
    (b"https", 443),
    (b"ws", 80),
    (b"wss", 443),
    (b"ftp", 21),
];

/// The authority component `[userinfo "@"] host [":" port]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Authority<'a, U> {
    raw: &'a [U],
    userinfo: Option<&'a [U]>,
    host: &'a [U],
    port: Option<u16>,
}

impl<'a, U: CodeUnit> Authority<'a, U> {
    /// The whole authority text.
    #[must_use]
    pub const fn as_units(&self) -> &'a [U] {
        self.raw
    }

    /// Text before the last `@`, if any.
    #[must_use]
    pub const fn userinfo(&self) -> Option<&'a [U]> {
        self.userinfo
    }

    /// The host, including brackets for IP literals. May be empty.
    #[must_use]
    pub const fn host(&self) -> &'a [U] {
        self.host
    }

    /// The explicit port, if one was given and non-empty.
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }
}

/// A URI borrowed from an encoded input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uri<'a, U> {
    text: &'a [U],
    scheme: &'a [U],
    authority: Option<Authority<'a, U>>,
    path: &'a [U],
    query: Option<&'a [U]>,
    fragment: Option<&'a [U]>,
}

impl<'a, U: CodeUnit> Uri<'a, U> {
    /// The whole URI text.
    #[must_use]
    pub const fn as_units(&self) -> &'a [U] {
        self.text
    }

    /// Length of the URI in code units.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` iff the URI is empty (this never happens for a parsed URI).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The scheme, without the trailing `:`.
    #[must_use]
    pub const fn scheme(&self) -> &'a [U] {
        self.scheme
    }

    /// The authority, present iff the scheme is followed by `//`.
    #[must_use]
    pub const fn authority(&self) -> Option<Authority<'a, U>> {
        self.authority
    }

    /// Shorthand for the authority's userinfo.
    #[must_use]
    pub fn userinfo(&self) -> Option<&'a [U]> {
        self.authority.and_then(|a| a.userinfo)
    }

    /// Shorthand for the authority's host.
    #[must_use]
    pub fn host(&self) -> Option<&'a [U]> {
        self.authority.map(|a| a.host)
    }

    /// Shorthand for the authority's explicit port.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.authority.and_then(|a| a.port)
    }

    /// The explicit port, or the well-known port for `http`, `https`, `ws`, `wss` and `ftp`.
    #[must_use]
    pub fn port_or_known_default(&self) -> Option<u16> {
        self.port().or_else(|| {
            KNOWN_PORTS
                .iter()
                .find(|(scheme, _)| eq_ignore_ascii_case(self.scheme, scheme))
                .map(|&(_, port)| port)
        })
    }

    /// The path. May be empty.
    #[must_use]
    pub const fn path(&self) -> &'a [U] {
        self.path
    }

    /// The query, without the leading `?`.
    #[must_use]
    pub const fn query(&self) -> Option<&'a [U]> {
        self.query
    }

    /// The fragment, without the leading `#`.
    #[must_use]
    pub const fn fragment(&self) -> Option<&'a [U]> {
        self.fragment
    }
}

impl<'a> Uri<'a, u8> {
    /// The URI as `&str`.
    ///
    /// # Errors
    ///
    /// Returns `Utf8Invalid` if the URI bytes are not valid UTF-8.
    pub fn as_str(&self) -> Result<&'a str, ParseError> {
        crate::utf8::validate(self.text).map_err(|()| ParseError::new(ErrorCode::Utf8Invalid, 0))
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl Uri<'_, u16> {
    /// Decode the URI into a `String`, replacing unpaired surrogates with U+FFFD.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        char::decode_utf16(self.text.iter().copied())
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}

/// Parse a URI at the start of `units`.
///
/// The URI runs to the end of input or to the first unit that cannot appear in a URI
/// (ASCII control, space, `"`, `<`, `>`, `\`, `^`, `` ` ``, `{`, `|`, `}`); `consumed` is its length.
///
/// ```
/// use text_primitives::{parse_uri, UriLimits};
///
/// let text = b"http://example.com:8080/a?b#c and more";
/// let parsed = parse_uri(text.as_slice(), UriLimits::default()).unwrap();
/// assert_eq!(parsed.consumed, 29);
/// assert_eq!(parsed.value.port(), Some(8080));
/// assert_eq!(parsed.value.host(), Some(b"example.com".as_slice()));
/// ```
///
/// # Errors
///
/// Returns `UriTooLong` if the URI exceeds `limits.max_len`, `MissingScheme`/`InvalidScheme` for a
/// bad scheme, `UnterminatedIpLiteral` for an unclosed `[`, or `InvalidPort` if the port is not a
/// decimal `u16`.
pub fn parse_uri<U: CodeUnit>(
    units: &[U],
    limits: UriLimits,
) -> Result<Parsed<Uri<'_, U>>, ParseError> {
    let end = units
        .iter()
        .position(|&u| is_terminator(u))
        .unwrap_or(units.len());
    if end > limits.max_len {
        return Err(reject!(ParseError::new(
            ErrorCode::UriTooLong,
            limits.max_len
        )));
    }
    let text = &units[..end];

    let colon = scheme_len(text)?;
    let mut pos = colon + 1;

    let authority = if text[pos..].starts_with_ascii(b"//") {
        let start = pos + 2;
        pos = start + find_any(&text[start..], b"/?#");
        Some(parse_authority(&text[start..pos], start)?)
    } else {
        None
    };

    let path_start = pos;
    pos += find_any(&text[pos..], b"?#");
    let path = &text[path_start..pos];

    let query = if text.get(pos).is_some_and(|u| u.is(b'?')) {
        let start = pos + 1;
        pos = start + find_any(&text[start..], b"#");
        Some(&text[start..pos])
    } else {
        None
    };

    let fragment = text
        .get(pos)
        .is_some_and(|u| u.is(b'#'))
        .then(|| &text[pos + 1..]);

    let uri = Uri {
        text,
        scheme: &text[..colon],
        authority,
        path,
        query,
        fragment,
    };
    Ok(Parsed::new(uri, end))
}

fn is_terminator<U: CodeUnit>(unit: U) -> bool {
    unit.ascii().is_some_and(|b| {
        b.is_ascii_control()
            || matches!(
                b,
                b' ' | b'"' | b'<' | b'>' | b'\\' | b'^' | b'`' | b'{' | b'|' | b'}'
            )
    })
}

const fn is_scheme_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}

trait StartsWithAscii {
    fn starts_with_ascii(&self, lit: &[u8]) -> bool;
}

impl<U: CodeUnit> StartsWithAscii for [U] {
    fn starts_with_ascii(&self, lit: &[u8]) -> bool {
        self.len() >= lit.len() && self.iter().zip(lit).all(|(u, &b)| u.is(b))
    }
}

/// Offset of the first unit in `set`, or `units.len()`.
fn find_any<U: CodeUnit>(units: &[U], set: &[u8]) -> usize {
    units
        .iter()
        .position(|u| u.ascii().is_some_and(|b| set.contains(&b)))
        .unwrap_or(units.len())
}

fn scheme_len<U: CodeUnit>(text: &[U]) -> Result<usize, ParseError> {
    let Some(first) = text.first() else {
        return Err(reject!(ParseError::new(ErrorCode::MissingScheme, 0)));
    };
    if !first.ascii().is_some_and(|b| b.is_ascii_alphabetic()) {
        return Err(reject!(ParseError::new(ErrorCode::InvalidScheme, 0)));
    }

    for (i, unit) in text.iter().enumerate().skip(1) {
        match unit.ascii() {
            Some(b':') => return Ok(i),
            Some(b) if is_scheme_char(b) => {}
            _ => return Err(reject!(ParseError::new(ErrorCode::MissingScheme, i))),
        }
    }
    Err(reject!(ParseError::new(ErrorCode::MissingScheme, text.len())))
}

fn parse_authority<U: CodeUnit>(raw: &[U], offset: usize) -> Result<Authority<'_, U>, ParseError> {
    let (userinfo, hostport, hostport_off) = match raw.iter().rposition(|u| u.is(b'@')) {
        Some(at) => (Some(&raw[..at]), &raw[at + 1..], offset + at + 1),
        None => (None, raw, offset),
    };

    let (host, port_text) = if hostport.first().is_some_and(|u| u.is(b'[')) {
        let close = hostport.iter().position(|u| u.is(b']')).ok_or_else(|| {
            reject!(ParseError::new(
                ErrorCode::UnterminatedIpLiteral,
                hostport_off
            ))
        })?;
        let (host, rest) = hostport.split_at(close + 1);
        match rest.split_first() {
            None => (host, None),
            Some((colon, port)) if colon.is(b':') => (host, Some(port)),
            Some(_) => {
                return Err(reject!(ParseError::new(
                    ErrorCode::InvalidPort,
                    hostport_off + close + 1
                )))
            }
        }
    } else {
        match hostport.iter().position(|u| u.is(b':')) {
            Some(colon) => (&hostport[..colon], Some(&hostport[colon + 1..])),
            None => (hostport, None),
        }
    };

    let port = match port_text {
        Some(text) if !text.is_empty() => Some(parse_port(text, hostport_off + host.len() + 1)?),
        _ => None,
    };

    Ok(Authority {
        raw,
        userinfo,
        host,
        port,
    })
}

/// The port must be one whole decimal run that fits `u16`.
fn parse_port<U: CodeUnit>(text: &[U], offset: usize) -> Result<u16, ParseError> {
    match parse_prefix::<u16, Decimal, U>(text) {
        Ok(p) if p.consumed == text.len() => Ok(p.value),
        Ok(p) => Err(reject!(ParseError::new(
            ErrorCode::InvalidPort,
            offset + p.consumed
        ))),
        Err(err) => Err(reject!(ParseError::new(
            ErrorCode::InvalidPort,
            offset + err.offset
        ))),
    }
}
