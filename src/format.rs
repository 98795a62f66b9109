//! Display formatting for card number and expiry inputs.
//!
//! Formatting is a pure function of the raw digits and the detected
//! brand, and it is idempotent: feeding a formatted string back through
//! the formatter yields the same result.
//!
//! # Format conventions
//!
//! - **Most brands** (16 digits): `XXXX XXXX XXXX XXXX`
//! - **American Express** (15 digits): `XXXX XXXXXX XXXXX`
//! - **Diners Club** (14 digits): `XXXX XXXXXX XXXX`
//! - **Expiry date**: `MM / YY`

use crate::brand::{CardBrand, MAX_CARD_DIGITS};

/// Strips all non-digit characters from an input.
///
/// # Example
///
/// ```
/// use payment_inputs::format::strip_digits;
///
/// assert_eq!(strip_digits("4111 1111-1111.1111"), "4111111111111111");
/// assert_eq!(strip_digits("12 / 29"), "1229");
/// ```
pub fn strip_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats a card number for display, grouped per the brand's convention.
///
/// Non-digits are stripped first and the digits are truncated to the
/// brand's maximum valid length (19 when the brand is unknown).
///
/// # Example
///
/// ```
/// use payment_inputs::{format::format_card_number, CardBrand};
///
/// assert_eq!(
///     format_card_number("4111111111111111", Some(CardBrand::Visa)),
///     "4111 1111 1111 1111"
/// );
/// assert_eq!(
///     format_card_number("378282246310005", Some(CardBrand::Amex)),
///     "3782 822463 10005"
/// );
/// assert_eq!(format_card_number("41111", None), "4111 1");
/// ```
pub fn format_card_number(input: &str, brand: Option<CardBrand>) -> String {
    let mut digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();

    let max = brand.map_or(MAX_CARD_DIGITS, |b| b.max_length());
    digits.truncate(max);

    if digits.is_empty() {
        return String::new();
    }

    let groups: &[usize] = match brand {
        Some(b) => b.grouping(digits.len()),
        None => &[4, 4, 4, 4, 3],
    };

    let mut out = String::with_capacity(digits.len() + groups.len());
    let mut pos = 0;
    for &size in groups {
        if pos >= digits.len() {
            break;
        }
        if pos > 0 {
            out.push(' ');
        }
        let end = (pos + size).min(digits.len());
        out.extend(&digits[pos..end]);
        pos = end;
    }
    // Anything past the grouping pattern continues in fours.
    while pos < digits.len() {
        out.push(' ');
        let end = (pos + 4).min(digits.len());
        out.extend(&digits[pos..end]);
        pos = end;
    }

    out
}

/// Formats an expiry input as `MM / YY` while the user types.
///
/// Rules, in order:
///
/// - non-digits are stripped and input is capped at four digits (MMYY);
/// - a single leading digit of 2-9 can only be the second digit of a
///   month, so it is zero-prefixed (`"2"` becomes `"02 / "`);
/// - two leading digits above 12 are re-split the same way (`"13"`
///   becomes `"01 / 3"`);
/// - a complete month is followed by the ` / ` separator.
///
/// # Example
///
/// ```
/// use payment_inputs::format::format_expiry;
///
/// assert_eq!(format_expiry("1"), "1");
/// assert_eq!(format_expiry("2"), "02 / ");
/// assert_eq!(format_expiry("123"), "12 / 3");
/// assert_eq!(format_expiry("13"), "01 / 3");
/// assert_eq!(format_expiry("1229"), "12 / 29");
/// ```
pub fn format_expiry(input: &str) -> String {
    let mut digits: Vec<u8> = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .map(|c| (c as u8) - b'0')
        .collect();

    if digits.is_empty() {
        return String::new();
    }

    // "2".."9" can only mean month 02-09.
    if digits[0] >= 2 {
        digits.insert(0, 0);
    } else if digits.len() >= 2 && digits[0] * 10 + digits[1] > 12 {
        // "13".."19" is no month; re-read as 01 / 3...
        digits.insert(0, 0);
    }
    digits.truncate(4);

    let mut out = String::with_capacity(9);
    for &d in &digits[..digits.len().min(2)] {
        out.push((b'0' + d) as char);
    }
    if digits.len() >= 2 {
        out.push_str(" / ");
        for &d in &digits[2..] {
            out.push((b'0' + d) as char);
        }
    }
    out
}

/// Masks a card number for safe display or logging.
///
/// All but the last four digits are replaced with `*`, keeping four-digit
/// grouping: `**** **** **** 1111`. Inputs of four digits or fewer are
/// fully masked.
///
/// # Example
///
/// ```
/// use payment_inputs::format::mask_card_number;
///
/// assert_eq!(mask_card_number("4111 1111 1111 1111"), "**** **** **** 1111");
/// ```
pub fn mask_card_number(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() <= 4 {
        return "*".repeat(digits.len());
    }

    let keep_from = digits.len() - 4;
    let mut out = String::with_capacity(digits.len() + digits.len() / 4);
    for (i, &c) in digits.iter().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(if i < keep_from { '*' } else { c });
    }
    out
}
