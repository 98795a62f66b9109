//! Fuzz target for expiry parsing and validation.

#![no_main]

use libfuzzer_sys::fuzz_target;
use payment_inputs::{expiry, validator};

fuzz_target!(|data: &str| {
    // Parsing never panics, and a parsed date always has a sane month
    if let Ok(date) = expiry::parse(data) {
        assert!((1..=12).contains(&date.month()));
        let _ = date.is_past();
        let _ = date.to_string();
    }

    let messages = validator::ErrorMessages::default();
    let _ = validator::expiry_error(data, &messages);
});
