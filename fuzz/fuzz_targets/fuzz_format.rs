//! Fuzz target for display formatting.
//!
//! Tests that formatting functions never panic on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use payment_inputs::{format, CardBrand};

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = format::format_card_number(data, None);
    let _ = format::format_expiry(data);
    let _ = format::mask_card_number(data);
    let _ = format::strip_digits(data);

    // Test with all brands
    for brand in CardBrand::ALL {
        let _ = format::format_card_number(data, Some(brand));
    }

    // Formatting preserves digits up to the cap
    let formatted = format::format_card_number(data, None);
    let mut original = format::strip_digits(data);
    original.truncate(payment_inputs::MAX_CARD_DIGITS);
    assert_eq!(
        format::strip_digits(&formatted),
        original,
        "Formatting should preserve digits"
    );

    // Formatting is idempotent
    let twice = format::format_card_number(&formatted, None);
    assert_eq!(formatted, twice, "Formatting should be idempotent");

    let expiry = format::format_expiry(data);
    assert_eq!(format::format_expiry(&expiry), expiry, "Expiry formatting should be idempotent");
});
