use text_primitives::{
    parse_prefix_with, utf16, utf8, Decimal, ErrorCode, Hex, ParseError, Parsed, Strategy,
};

fn wide(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

fn assert_overflow(result: Result<Parsed<u32>, ParseError>) {
    assert_eq!(result.unwrap_err().code, ErrorCode::Overflow);
}

#[test]
fn u32_max_boundary() {
    assert_eq!(
        utf8::parse_u32_prefix(b"4294967295"),
        Ok(Parsed::new(u32::MAX, 10))
    );
    assert_overflow(utf8::parse_u32_prefix(b"4294967296"));
    assert_overflow(utf8::parse_u32_prefix(b"42949672950"));
    assert_overflow(utf8::parse_u32_prefix(b"99999999999999999999999"));
}

#[test]
fn partial_match_is_success() {
    assert_eq!(utf8::parse_u32_prefix(b"123abc"), Ok(Parsed::new(123, 3)));
    assert_eq!(utf8::parse_u32(b"123abc"), Ok(123));
    assert_eq!(
        utf16::parse_u32_prefix(&wide("123abc")),
        Ok(Parsed::new(123, 3))
    );
}

#[test]
fn empty_input_fails_with_zero_offset() {
    let empty = Err(ParseError::new(ErrorCode::Empty, 0));
    assert_eq!(utf8::parse_u32_prefix(b""), empty);
    assert_eq!(utf8::parse_u32_prefix(b"-1"), empty);
    assert_eq!(utf16::parse_u32_prefix(&[]), empty);
    assert_eq!(utf8::hex::parse_u32_prefix(b"x1"), empty);
}

#[test]
fn leading_zeros_are_digits() {
    assert_eq!(utf8::parse_u32_prefix(b"00042"), Ok(Parsed::new(42, 5)));
    assert_eq!(
        utf8::parse_u32_prefix(b"000000000000004294967295"),
        Ok(Parsed::new(u32::MAX, 24))
    );
}

#[test]
fn hex_mode() {
    assert_eq!(utf8::hex::parse_u32_prefix(b"1A"), Ok(Parsed::new(26, 2)));
    assert_eq!(utf8::hex::parse_u32_prefix(b"1a"), Ok(Parsed::new(26, 2)));
    assert_eq!(
        utf8::hex::parse_u32_prefix(b"FFFFFFFF"),
        Ok(Parsed::new(u32::MAX, 8))
    );
    assert_overflow(utf8::hex::parse_u32_prefix(b"100000000"));
    assert_eq!(
        utf16::hex::parse_u32_prefix(&wide("deadBEEFz")),
        Ok(Parsed::new(0xdead_beef, 8))
    );
}

#[test]
fn other_widths() {
    assert_eq!(utf8::parse_u8(b"255"), Ok(255));
    assert_eq!(
        utf8::parse_u8(b"256"),
        Err(ParseError::new(ErrorCode::Overflow, 2))
    );
    assert_eq!(utf8::parse_u16(b"65535"), Ok(u16::MAX));
    assert_eq!(utf8::hex::parse_u8(b"ff"), Ok(0xff));
    assert_eq!(
        utf8::parse_u64_prefix(b"18446744073709551615 "),
        Ok(Parsed::new(u64::MAX, 20))
    );
    assert_eq!(
        utf16::hex::parse_u64(&wide("FFFFFFFFFFFFFFFF0")).unwrap_err().code,
        ErrorCode::Overflow
    );
}

#[test]
fn utf16_non_ascii_units_terminate() {
    // U+0661 ARABIC-INDIC DIGIT ONE and U+FF11 FULLWIDTH DIGIT ONE are not ASCII digits.
    assert_eq!(
        utf16::parse_u32_prefix(&[0x31, 0x0661]),
        Ok(Parsed::new(1, 1))
    );
    assert_eq!(
        utf16::parse_u32_prefix(&[0xff11]),
        Err(ParseError::new(ErrorCode::Empty, 0))
    );
    // Low byte is '1' but the unit is not.
    assert_eq!(
        utf16::parse_u32_prefix(&[0x32, 0x0131]),
        Ok(Parsed::new(2, 1))
    );
}

#[test]
fn tiers_agree_on_boundaries() {
    for text in [
        "",
        "0",
        "9",
        "123456789",
        "1234567890",
        "4294967295",
        "4294967296",
        "429496729x",
        "00000000000",
        "12a",
    ] {
        let expected = utf8::parse_u32_prefix(text.as_bytes());
        for strategy in Strategy::ALL {
            assert_eq!(
                parse_prefix_with::<u32, Decimal, u8>(text.as_bytes(), strategy),
                expected,
                "{strategy:?} on {text:?}"
            );
            assert_eq!(
                parse_prefix_with::<u32, Decimal, u16>(&wide(text), strategy),
                expected,
                "{strategy:?} on wide {text:?}"
            );
        }
    }

    for text in ["", "f", "fffffff", "ffffffff", "100000000", "7fffffffg"] {
        let expected = utf8::hex::parse_u32_prefix(text.as_bytes());
        for strategy in Strategy::ALL {
            assert_eq!(
                parse_prefix_with::<u32, Hex, u8>(text.as_bytes(), strategy),
                expected,
                "{strategy:?} on {text:?}"
            );
        }
    }
}

#[test]
fn error_display() {
    let err = utf8::parse_u32(b"").unwrap_err();
    assert_eq!(err.to_string(), "parse failed at 0: no digits");
}
