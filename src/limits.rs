use crate::{ErrorCode, ParseError};

/// Default maximum URI length in code units.
pub const DEFAULT_MAX_URI_LEN: usize = 8 * 1024;

/// Resource limits for the composite URI parser.
///
/// Limits are enforced deterministically before any component is split out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UriLimits {
    /// Maximum URI length in code units (bytes for UTF-8, code units for UTF-16).
    pub max_len: usize,
}

impl UriLimits {
    /// Construct limits accepting URIs up to `max_len` units.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLimits` if `max_len` is zero.
    pub const fn new(max_len: usize) -> Result<Self, ParseError> {
        if max_len == 0 {
            return Err(ParseError::new(ErrorCode::InvalidLimits, 0));
        }
        Ok(Self { max_len })
    }

    /// Limits sized to a known input buffer length.
    #[must_use]
    pub const fn for_len(len: usize) -> Self {
        Self { max_len: len }
    }
}

impl Default for UriLimits {
    fn default() -> Self {
        Self::for_len(DEFAULT_MAX_URI_LEN)
    }
}
