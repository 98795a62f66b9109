//! Luhn ("modulus 10") checksum.
//!
//! Used to catch typos in card numbers: starting from the rightmost
//! digit, every second digit is doubled (subtracting 9 when the result
//! exceeds 9) and the total must be divisible by 10.

/// Doubled-digit lookup: `2 * d`, minus 9 when that exceeds 9.
const DOUBLED: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Returns true if `digits` pass the Luhn check.
///
/// Digits are values 0-9, most significant first. An empty slice fails.
///
/// # Example
///
/// ```
/// use payment_inputs::luhn;
///
/// assert!(luhn::passes(&[4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2]));
/// assert!(!luhn::passes(&[4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 1]));
/// ```
#[inline]
pub fn passes(digits: &[u8]) -> bool {
    !digits.is_empty() && checksum(digits) % 10 == 0
}

/// Computes the raw Luhn sum (not reduced modulo 10).
#[inline]
pub fn checksum(digits: &[u8]) -> u32 {
    let mut sum: u32 = 0;
    // Walk right to left; the check digit (rightmost) is never doubled.
    for (i, &digit) in digits.iter().rev().enumerate() {
        sum += if i % 2 == 1 {
            u32::from(DOUBLED[digit as usize])
        } else {
            u32::from(digit)
        };
    }
    sum
}

/// Returns true if the digit characters of `input` pass the Luhn check.
///
/// Non-digit characters (separators) are ignored; an input with no
/// digits fails.
#[inline]
pub fn passes_str(input: &str) -> bool {
    let digits: Vec<u8> = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .map(|c| (c as u8) - b'0')
        .collect();
    passes(&digits)
}
