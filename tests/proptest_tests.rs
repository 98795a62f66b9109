//! Property-based tests using proptest.
//!
//! These verify invariants that should hold for all inputs, helping
//! discover edge cases that manual tests might miss.

use proptest::prelude::*;

use payment_inputs::{
    detect::detect_from_str,
    format::{format_card_number, format_expiry, mask_card_number, strip_digits},
    luhn,
    validator::{card_number_error, cvc_error, expiry_error, zip_error, ErrorMessages},
    CardBrand, Engine, Field, MAX_CARD_DIGITS,
};

/// A random digit string of a given length.
fn digit_string(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::char::range('0', '9'), len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// A random digit string of a length within range.
fn digit_string_range(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    range.prop_flat_map(digit_string)
}

proptest! {
    /// Formatting never panics and preserves the digit sequence up to
    /// the brand's maximum length.
    #[test]
    fn format_preserves_digits(input in ".{0,40}") {
        for brand in [None, Some(CardBrand::Visa), Some(CardBrand::Amex), Some(CardBrand::Maestro)] {
            let formatted = format_card_number(&input, brand);
            let max = brand.map_or(MAX_CARD_DIGITS, |b| b.max_length());
            let mut expected = strip_digits(&input);
            expected.truncate(max);
            prop_assert_eq!(strip_digits(&formatted), expected);
        }
    }

    /// Formatting is idempotent for every brand.
    #[test]
    fn format_is_idempotent(digits in digit_string_range(0..=25)) {
        for brand in [None, Some(CardBrand::Visa), Some(CardBrand::Amex), Some(CardBrand::DinersClub)] {
            let once = format_card_number(&digits, brand);
            prop_assert_eq!(format_card_number(&once, brand), once);
        }
    }

    /// Expiry formatting never panics, is idempotent, and always yields
    /// a month of at most 12 once two month digits exist.
    #[test]
    fn format_expiry_well_formed(input in ".{0,12}") {
        let formatted = format_expiry(&input);
        prop_assert_eq!(format_expiry(&formatted), formatted.clone());
        if let Some(month) = formatted.get(..2).and_then(|m| m.parse::<u8>().ok()) {
            prop_assert!(month <= 12, "month {} in {:?}", month, formatted);
        }
    }

    /// Detection is monotonic: appending digits never loses a brand in
    /// favor of nothing once a full valid-length number matched.
    #[test]
    fn detection_stable_over_known_prefixes(digits in digit_string_range(1..=19)) {
        let full = detect_from_str(&digits);
        if full.is_some() {
            // Every extension of a detected number still detects something.
            for extra in ['0', '5', '9'] {
                let mut longer = digits.clone();
                longer.push(extra);
                prop_assert!(detect_from_str(&longer).is_some());
            }
        }
    }

    /// The masked form keeps at most four real digits.
    #[test]
    fn mask_hides_all_but_four(input in ".{0,30}") {
        let masked = mask_card_number(&input);
        let visible = masked.chars().filter(char::is_ascii_digit).count();
        prop_assert!(visible <= 4);
    }

    /// Mutating any single digit of a Luhn-valid number breaks the check.
    #[test]
    fn luhn_detects_single_digit_mutations(
        pos in 0usize..16,
        delta in 1u8..10,
    ) {
        let card = "4242424242424242";
        let mut digits: Vec<u8> = card.bytes().map(|b| b - b'0').collect();
        prop_assume!(luhn::passes(&digits));
        digits[pos] = (digits[pos] + delta) % 10;
        prop_assert!(!luhn::passes(&digits));
    }

    /// No validator panics on arbitrary input.
    #[test]
    fn validators_never_panic(input in ".{0,60}") {
        let messages = ErrorMessages::default();
        let _ = card_number_error(&input, &messages);
        let _ = expiry_error(&input, &messages);
        let _ = cvc_error(&input, None, &messages);
        let _ = cvc_error(&input, Some(CardBrand::Amex), &messages);
        let _ = zip_error(&input, true, &messages);
    }

    /// The engine survives any sequence of raw inputs and keeps its
    /// stored card number consistent with the last input's digits.
    #[test]
    fn engine_accepts_arbitrary_input(
        card in ".{0,30}",
        exp in ".{0,10}",
        cvc in ".{0,8}",
        zip in ".{0,10}",
    ) {
        let mut engine = Engine::new();
        let outcome = engine.card_number_input(&card);
        prop_assert_eq!(engine.value(Field::CardNumber), outcome.formatted_value);
        engine.expiry_input(&exp);
        engine.cvc_input(&cvc);
        engine.zip_input(&zip);
        let _ = engine.snapshot();
    }
}
