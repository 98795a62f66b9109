//! Card brand detection from BIN/IIN prefixes.
//!
//! Detection scans the registry in [`CardBrand::ALL`] order and selects
//! the brand whose matching prefix range is the longest (most specific).
//! Ranges shorter than the typed input never stop matching as more digits
//! arrive, so detection is monotonic: it may go from `None` to a brand,
//! or from a less specific brand to a more specific one, but once the
//! longest applicable prefix has matched the result is stable.

use crate::brand::CardBrand;

/// Detects the card brand from a sequence of digits.
///
/// Digits are values 0-9, most significant first. Returns `None` when no
/// registered brand matches, including for inputs still too short to
/// reach any range's prefix length.
///
/// # Example
///
/// ```
/// use payment_inputs::{detect::detect_brand, CardBrand};
///
/// assert_eq!(detect_brand(&[4]), Some(CardBrand::Visa));
/// assert_eq!(detect_brand(&[3, 4, 0, 0]), Some(CardBrand::Amex));
/// assert_eq!(detect_brand(&[1, 2, 3]), None);
/// ```
pub fn detect_brand(digits: &[u8]) -> Option<CardBrand> {
    let mut best: Option<(CardBrand, u8)> = None;

    for brand in CardBrand::ALL {
        for r in brand.prefix_ranges() {
            let len = r.len as usize;
            if digits.len() < len {
                continue;
            }
            let mut prefix: u32 = 0;
            for &d in &digits[..len] {
                prefix = prefix * 10 + u32::from(d);
            }
            if prefix >= r.low && prefix <= r.high {
                match best {
                    Some((_, l)) if l >= r.len => {}
                    _ => best = Some((brand, r.len)),
                }
            }
        }
    }

    best.map(|(brand, _)| brand)
}

/// Detects the card brand from a string, ignoring any non-digit characters.
///
/// # Example
///
/// ```
/// use payment_inputs::{detect::detect_from_str, CardBrand};
///
/// assert_eq!(detect_from_str("4111 1111"), Some(CardBrand::Visa));
/// assert_eq!(detect_from_str("5500 0000"), Some(CardBrand::Mastercard));
/// ```
pub fn detect_from_str(input: &str) -> Option<CardBrand> {
    let digits: Vec<u8> = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .map(|c| (c as u8) - b'0')
        .collect();
    detect_brand(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(s: &str) -> Vec<u8> {
        s.bytes().map(|b| b - b'0').collect()
    }

    #[test]
    fn test_visa_detection() {
        assert_eq!(detect_brand(&digits("4")), Some(CardBrand::Visa));
        assert_eq!(detect_brand(&digits("4111111111111111")), Some(CardBrand::Visa));
        assert_eq!(detect_brand(&digits("4222222222222")), Some(CardBrand::Visa));
    }

    #[test]
    fn test_mastercard_detection() {
        assert_eq!(detect_brand(&digits("51")), Some(CardBrand::Mastercard));
        assert_eq!(detect_brand(&digits("5500000000000004")), Some(CardBrand::Mastercard));
        // 2-series range
        assert_eq!(detect_brand(&digits("2221")), Some(CardBrand::Mastercard));
        assert_eq!(detect_brand(&digits("2720000000000005")), Some(CardBrand::Mastercard));
    }

    #[test]
    fn test_amex_detection() {
        assert_eq!(detect_brand(&digits("34")), Some(CardBrand::Amex));
        assert_eq!(detect_brand(&digits("340000000000009")), Some(CardBrand::Amex));
        assert_eq!(detect_brand(&digits("378282246310005")), Some(CardBrand::Amex));
    }

    #[test]
    fn test_discover_beats_maestro_on_longer_prefix() {
        // "60" alone is Maestro, but "6011" is Discover's more specific range.
        assert_eq!(detect_brand(&digits("60")), Some(CardBrand::Maestro));
        assert_eq!(detect_brand(&digits("6011")), Some(CardBrand::Discover));
        assert_eq!(detect_brand(&digits("644")), Some(CardBrand::Discover));
        assert_eq!(detect_brand(&digits("65")), Some(CardBrand::Discover));
    }

    #[test]
    fn test_elo_beats_maestro_and_discover() {
        assert_eq!(detect_brand(&digits("509")), Some(CardBrand::Elo));
        assert_eq!(detect_brand(&digits("6362")), Some(CardBrand::Elo));
        assert_eq!(detect_brand(&digits("6363")), Some(CardBrand::Elo));
        // Plain 50 / 63 stay Maestro.
        assert_eq!(detect_brand(&digits("50")), Some(CardBrand::Maestro));
        assert_eq!(detect_brand(&digits("63")), Some(CardBrand::Maestro));
    }

    #[test]
    fn test_verve_beats_maestro() {
        assert_eq!(detect_brand(&digits("506")), Some(CardBrand::Verve));
        assert_eq!(detect_brand(&digits("507")), Some(CardBrand::Verve));
    }

    #[test]
    fn test_mir_beats_mastercard() {
        assert_eq!(detect_brand(&digits("2200")), Some(CardBrand::Mir));
        assert_eq!(detect_brand(&digits("2204")), Some(CardBrand::Mir));
        assert_eq!(detect_brand(&digits("2221")), Some(CardBrand::Mastercard));
    }

    #[test]
    fn test_diners_and_jcb() {
        assert_eq!(detect_brand(&digits("36")), Some(CardBrand::DinersClub));
        assert_eq!(detect_brand(&digits("300")), Some(CardBrand::DinersClub));
        assert_eq!(detect_brand(&digits("305")), Some(CardBrand::DinersClub));
        assert_eq!(detect_brand(&digits("3528")), Some(CardBrand::Jcb));
        assert_eq!(detect_brand(&digits("3589")), Some(CardBrand::Jcb));
    }

    #[test]
    fn test_troy_and_bc_card() {
        assert_eq!(detect_brand(&digits("9792")), Some(CardBrand::Troy));
        assert_eq!(detect_brand(&digits("94")), Some(CardBrand::BcCard));
        // 97 without the full Troy prefix matches nothing.
        assert_eq!(detect_brand(&digits("97")), None);
    }

    #[test]
    fn test_unionpay_and_rupay() {
        assert_eq!(detect_brand(&digits("62")), Some(CardBrand::UnionPay));
        assert_eq!(detect_brand(&digits("81")), Some(CardBrand::RuPay));
        assert_eq!(detect_brand(&digits("82")), Some(CardBrand::RuPay));
    }

    #[test]
    fn test_unknown_prefixes() {
        assert_eq!(detect_brand(&[]), None);
        assert_eq!(detect_brand(&digits("0000")), None);
        assert_eq!(detect_brand(&digits("1")), None);
        assert_eq!(detect_brand(&digits("90")), None);
    }

    #[test]
    fn test_short_input_does_not_match_long_ranges() {
        // One digit of "3" could become Amex, Diners, or JCB; undecided.
        assert_eq!(detect_brand(&digits("3")), None);
        assert_eq!(detect_brand(&digits("35")), None);
        assert_eq!(detect_brand(&digits("352")), None);
        assert_eq!(detect_brand(&digits("3528")), Some(CardBrand::Jcb));
    }

    #[test]
    fn test_every_brand_reachable_from_its_own_table() {
        // The low bound of each brand's first range detects that brand.
        for brand in CardBrand::ALL {
            let r = brand.prefix_ranges()[0];
            let prefix: Vec<u8> = format!("{:0width$}", r.low, width = r.len as usize)
                .bytes()
                .map(|b| b - b'0')
                .collect();
            assert_eq!(detect_brand(&prefix), Some(brand), "for {brand:?}");
        }
    }

    #[test]
    fn test_detect_from_str() {
        assert_eq!(detect_from_str("4111 1111 1111 1111"), Some(CardBrand::Visa));
        assert_eq!(detect_from_str("3400-0000"), Some(CardBrand::Amex));
        assert_eq!(detect_from_str(""), None);
        assert_eq!(detect_from_str("abc"), None);
    }

    #[test]
    fn test_processor_test_cards() {
        assert_eq!(detect_from_str("4111111111111111"), Some(CardBrand::Visa));
        assert_eq!(detect_from_str("5500000000000004"), Some(CardBrand::Mastercard));
        assert_eq!(detect_from_str("340000000000009"), Some(CardBrand::Amex));
    }
}
