use core::fmt;

/// A structured error code identifying why a parse was rejected.
///
/// This enum is intentionally stable and string-free to support `no_std` and to remain hot-path friendly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// No valid digit at the start of the input.
    Empty,
    /// The digit run does not fit the target integer width.
    Overflow,

    /// Invalid configured limits.
    InvalidLimits,
    /// Input exceeds the configured URI length limit.
    UriTooLong,
    /// No `:` terminates the URI scheme.
    MissingScheme,
    /// The URI scheme is empty or contains a disallowed character.
    InvalidScheme,
    /// A bracketed IP literal in the authority has no closing `]`.
    UnterminatedIpLiteral,
    /// The authority port is not a decimal number in `0..=65535`.
    InvalidPort,

    /// A `%` is not followed by two hex digits.
    InvalidPercentEscape,
    /// The destination buffer is too small for the decoded output.
    BufferTooSmall,

    /// Text is not valid UTF-8.
    Utf8Invalid,
}

impl ErrorCode {
    const fn message(self) -> &'static str {
        match self {
            Self::Empty => "no digits",
            Self::Overflow => "integer overflow",

            Self::InvalidLimits => "invalid parse limits",
            Self::UriTooLong => "uri exceeds length limit",
            Self::MissingScheme => "uri scheme is not terminated by ':'",
            Self::InvalidScheme => "invalid uri scheme",
            Self::UnterminatedIpLiteral => "unterminated ip literal in authority",
            Self::InvalidPort => "invalid port",

            Self::InvalidPercentEscape => "invalid percent escape",
            Self::BufferTooSmall => "destination buffer too small",

            Self::Utf8Invalid => "text must be valid UTF-8",
        }
    }
}

/// A parse error with a stable code and the offset (in code units) where it was detected.
///
/// Failure never carries a value or a consumed count: callers only observe those on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseError {
    /// The error code.
    pub code: ErrorCode,
    /// Code-unit offset into the input where the error was detected.
    pub offset: usize,
}

impl ParseError {
    /// Construct an error at `offset`.
    #[inline]
    #[must_use]
    pub const fn new(code: ErrorCode, offset: usize) -> Self {
        Self { code, offset }
    }

    /// Returns true iff this error came from the digit engine (`Empty` or `Overflow`).
    #[inline]
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self.code, ErrorCode::Empty | ErrorCode::Overflow)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse failed at {}: {}", self.offset, self.code.message())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
