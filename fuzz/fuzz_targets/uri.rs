#![no_main]

use libfuzzer_sys::fuzz_target;

use text_primitives::{percent_decode_to_vec, utf16, utf8};

fuzz_target!(|data: &[u8]| {
    if let Ok(parsed) = utf8::parse_uri(data) {
        assert!(parsed.consumed <= data.len());
        assert_eq!(parsed.value.len(), parsed.consumed);

        let wide: Vec<u16> = data.iter().map(|&b| u16::from(b)).collect();
        if data.is_ascii() {
            let wide_parsed = utf16::parse_uri(&wide).unwrap();
            assert_eq!(wide_parsed.consumed, parsed.consumed);
            assert_eq!(wide_parsed.value.port(), parsed.value.port());
        }
    }

    if let Ok(decoded) = percent_decode_to_vec(data) {
        assert!(decoded.len() <= data.len());
    }
});
