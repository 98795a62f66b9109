//! Fuzz target for the Luhn checksum.

#![no_main]

use libfuzzer_sys::fuzz_target;
use payment_inputs::luhn;

fuzz_target!(|data: &[u8]| {
    // Clamp values to valid digit range
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();

    let _ = luhn::passes(&digits);
    let checksum = luhn::checksum(&digits);

    // passes() and checksum() must agree
    assert_eq!(
        luhn::passes(&digits),
        !digits.is_empty() && checksum % 10 == 0,
        "passes/checksum mismatch"
    );

    // The string form agrees with the digit form
    let as_str: String = digits.iter().map(|&d| char::from(b'0' + d)).collect();
    assert_eq!(luhn::passes_str(&as_str), luhn::passes(&digits));
});
