#![no_main]

use libfuzzer_sys::fuzz_target;

use text_primitives::{parse_prefix_with, Decimal, Hex, Radix, Strategy, UnsignedInt};

fn tiers_agree<T: UnsignedInt, R: Radix>(data: &[u8]) {
    let wide: Vec<u16> = data.iter().map(|&b| u16::from(b)).collect();
    let expected = parse_prefix_with::<T, R, u8>(data, Strategy::Naive);
    for strategy in Strategy::ALL {
        assert_eq!(parse_prefix_with::<T, R, u8>(data, strategy), expected);
        assert_eq!(parse_prefix_with::<T, R, u16>(&wide, strategy), expected);
    }
}

fuzz_target!(|data: &[u8]| {
    tiers_agree::<u8, Decimal>(data);
    tiers_agree::<u32, Decimal>(data);
    tiers_agree::<u64, Decimal>(data);
    tiers_agree::<u16, Hex>(data);
    tiers_agree::<u64, Hex>(data);
});
