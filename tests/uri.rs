use text_primitives::{parse_uri, utf16, utf8, ErrorCode, ParseError, UriLimits};

const WIKI: &str = "https://my.uri.djkadjald.org/wiki/This_is_a_Universal#Resource_Identifier";

fn wide(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

#[test]
fn parses_whole_uri_from_utf8() {
    let parsed = utf8::parse_uri(WIKI.as_bytes()).unwrap();
    assert_eq!(parsed.consumed, 73);

    let uri = parsed.value;
    assert_eq!(uri.as_str().unwrap(), WIKI);
    assert_eq!(uri.scheme(), b"https");
    assert_eq!(uri.host(), Some(b"my.uri.djkadjald.org".as_slice()));
    assert_eq!(uri.port(), None);
    assert_eq!(uri.port_or_known_default(), Some(443));
    assert_eq!(uri.path(), b"/wiki/This_is_a_Universal");
    assert_eq!(uri.query(), None);
    assert_eq!(uri.fragment(), Some(b"Resource_Identifier".as_slice()));
}

#[test]
fn utf16_matches_utf8() {
    let units = wide(WIKI);
    let wide_parsed = utf16::parse_uri(&units).unwrap();
    let narrow_parsed = utf8::parse_uri(WIKI.as_bytes()).unwrap();

    assert_eq!(wide_parsed.consumed, narrow_parsed.consumed);
    assert_eq!(wide_parsed.value.to_string_lossy(), WIKI);
    assert_eq!(wide_parsed.value.scheme(), wide("https").as_slice());
    assert_eq!(
        wide_parsed.value.host(),
        Some(wide("my.uri.djkadjald.org").as_slice())
    );
    assert_eq!(
        wide_parsed.value.fragment(),
        Some(wide("Resource_Identifier").as_slice())
    );
}

#[test]
fn consumed_lets_caller_advance() {
    let text = b"<http://a.example:81/x> rest";
    let parsed = utf8::parse_uri(&text[1..]).unwrap();
    assert_eq!(parsed.consumed, 21);
    assert_eq!(text[1 + parsed.consumed], b'>');
    assert_eq!(parsed.value.port(), Some(81));
}

#[test]
fn port_parsed_identically_across_encodings() {
    for text in ["ws://h:0/", "ws://h:65535", "ws://h:00080?q"] {
        let narrow = utf8::parse_uri(text.as_bytes()).unwrap();
        let units = wide(text);
        let wide_parsed = utf16::parse_uri(&units).unwrap();
        assert_eq!(narrow.value.port(), wide_parsed.value.port(), "{text}");
        assert_eq!(narrow.consumed, wide_parsed.consumed, "{text}");
    }

    let units = wide("ws://h:65536");
    assert_eq!(
        utf16::parse_uri(&units).unwrap_err(),
        ParseError::new(ErrorCode::InvalidPort, 11)
    );
}

#[test]
fn non_ascii_units_stay_in_components() {
    let text = "http://bücher.example/straße?q=ü";
    let parsed = utf8::parse_uri(text.as_bytes()).unwrap();
    assert_eq!(parsed.consumed, text.len());
    assert_eq!(parsed.value.host(), Some("bücher.example".as_bytes()));

    let units = wide(text);
    let parsed = utf16::parse_uri(&units).unwrap();
    assert_eq!(parsed.consumed, units.len());
    assert_eq!(parsed.value.path(), wide("/straße").as_slice());
}

#[test]
fn invalid_utf8_is_reported_by_as_str() {
    let bytes = b"a:\xff";
    let parsed = utf8::parse_uri(bytes).unwrap();
    assert_eq!(
        parsed.value.as_str().unwrap_err().code,
        ErrorCode::Utf8Invalid
    );
}

#[test]
fn limits() {
    assert_eq!(
        UriLimits::new(0).unwrap_err().code,
        ErrorCode::InvalidLimits
    );
    let limits = UriLimits::new(4).unwrap();
    assert!(parse_uri(b"a:bc".as_slice(), limits).is_ok());
    assert_eq!(
        parse_uri(b"a:bcd".as_slice(), limits).unwrap_err().code,
        ErrorCode::UriTooLong
    );
    // Text after the terminator does not count against the limit.
    assert!(parse_uri(b"a:bc and more".as_slice(), limits).is_ok());
}
