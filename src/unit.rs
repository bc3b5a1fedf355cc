mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
}

/// One encoded text unit: a UTF-8 byte (`u8`) or a UTF-16 code unit (`u16`).
///
/// Parsers only ever read units through this trait, so every encoding funnels into the same
/// canonical implementation. Sealed.
pub trait CodeUnit: Copy + Eq + core::fmt::Debug + sealed::Sealed {
    /// The unit's numeric value.
    fn code_point(self) -> u32;

    /// Returns true iff this unit is exactly the ASCII byte `b`.
    #[inline]
    fn is(self, b: u8) -> bool {
        self.code_point() == u32::from(b)
    }

    /// The unit as an ASCII byte, or `None` outside `0..=0x7f`.
    #[inline]
    fn ascii(self) -> Option<u8> {
        u8::try_from(self.code_point()).ok().filter(u8::is_ascii)
    }
}

impl CodeUnit for u8 {
    #[inline]
    fn code_point(self) -> u32 {
        u32::from(self)
    }
}

impl CodeUnit for u16 {
    #[inline]
    fn code_point(self) -> u32 {
        u32::from(self)
    }
}

/// ASCII case-insensitive comparison of a unit slice against a literal.
pub(crate) fn eq_ignore_ascii_case<U: CodeUnit>(units: &[U], lit: &[u8]) -> bool {
    units.len() == lit.len()
        && units
            .iter()
            .zip(lit)
            .all(|(u, b)| u.ascii().is_some_and(|a| a.eq_ignore_ascii_case(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_projection() {
        assert_eq!(b'a'.ascii(), Some(b'a'));
        assert_eq!(0x80_u8.ascii(), None);
        assert_eq!(0x0161_u16.ascii(), None);
        assert!(0x3a_u16.is(b':'));
        assert!(!0x013a_u16.is(b':'));
    }

    #[test]
    fn case_insensitive_match() {
        let wide = [0x48_u16, 0x74, 0x54, 0x70, 0x53]; // "HtTpS"
        assert!(eq_ignore_ascii_case(&wide, b"https"));
        assert!(eq_ignore_ascii_case(b"HTTP".as_slice(), b"http"));
        assert!(!eq_ignore_ascii_case(b"http".as_slice(), b"https"));
    }
}
