//! Fuzz target for brand detection.

#![no_main]

use libfuzzer_sys::fuzz_target;
use payment_inputs::detect;

fuzz_target!(|data: &[u8]| {
    // Clamp values to valid digit range
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();

    let detected = detect::detect_brand(&digits);

    // Detection is monotonic: appending a digit never drops to None
    if detected.is_some() {
        for extra in 0..10 {
            let mut longer = digits.clone();
            longer.push(extra);
            assert!(
                detect::detect_brand(&longer).is_some(),
                "Detection lost a brand on appended digit"
            );
        }
    }

    let as_str: String = digits.iter().map(|&d| char::from(b'0' + d)).collect();
    assert_eq!(detect::detect_from_str(&as_str), detected);
});
