//! Expiry date parsing and plausibility checks.
//!
//! Accepts the display format the engine produces (`MM / YY`) as well as
//! raw digit input (`MMYY`, `MMYYYY`). The "in the past" check compares
//! against the wall clock at call time; a card is considered expired
//! starting the month after the one printed on it.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A parsed expiry date: month 1-12 and a four-digit year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryDate {
    month: u8,
    year: u16,
}

impl ExpiryDate {
    /// Creates an expiry date, returning `None` when month is not 1-12.
    pub fn new(month: u8, year: u16) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { month, year })
    }

    /// Month, 1-12.
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Four-digit year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns true if this date precedes the current calendar month.
    ///
    /// Evaluated against the wall clock on every call, never cached.
    pub fn is_past(&self) -> bool {
        let (year, month) = current_year_month();
        self.year < year || (self.year == year && self.month < month)
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02} / {:02}", self.month, self.year % 100)
    }
}

/// Why an expiry input failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryError {
    /// Fewer than four digits entered; the value cannot be judged yet.
    Incomplete,
    /// The month component is not in 1-12.
    InvalidMonth(u8),
    /// The digit count fits no supported layout (MMYY or MMYYYY).
    InvalidFormat,
}

impl fmt::Display for ExpiryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete => write!(f, "expiry date is incomplete"),
            Self::InvalidMonth(m) => write!(f, "invalid month {m}: must be 1-12"),
            Self::InvalidFormat => write!(f, "invalid expiry format (expected MMYY or MMYYYY)"),
        }
    }
}

impl std::error::Error for ExpiryError {}

/// Parses an expiry input.
///
/// Non-digit characters (the ` / ` separator, dashes, spaces) are
/// ignored. Four digits are read as `MMYY` with the year normalized to
/// 2000-2099; six digits as `MMYYYY`.
///
/// # Example
///
/// ```
/// use payment_inputs::expiry::parse;
///
/// let date = parse("12 / 30").unwrap();
/// assert_eq!(date.month(), 12);
/// assert_eq!(date.year(), 2030);
///
/// assert_eq!(parse("012029").unwrap().year(), 2029);
/// ```
pub fn parse(input: &str) -> Result<ExpiryDate, ExpiryError> {
    let digits: Vec<u8> = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .map(|c| (c as u8) - b'0')
        .collect();

    if digits.len() < 4 {
        return Err(ExpiryError::Incomplete);
    }

    let month = digits[0] * 10 + digits[1];
    if !(1..=12).contains(&month) {
        return Err(ExpiryError::InvalidMonth(month));
    }

    let year = match digits.len() {
        4 => 2000 + u16::from(digits[2]) * 10 + u16::from(digits[3]),
        6 => digits[2..6]
            .iter()
            .fold(0u16, |acc, &d| acc * 10 + u16::from(d)),
        _ => return Err(ExpiryError::InvalidFormat),
    };

    Ok(ExpiryDate { month, year })
}

/// Current (year, month) in UTC, derived from the system clock.
pub(crate) fn current_year_month() -> (u16, u8) {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    civil_from_days(secs / 86_400)
}

/// Converts days since 1970-01-01 to (year, month), proleptic Gregorian.
fn civil_from_days(days: u64) -> (u16, u8) {
    // Shift epoch to 0000-03-01 so leap days land at the end of the year.
    let z = days as i64 + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = era * 400 + yoe + i64::from(month <= 2);
    (year as u16, month as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mm_yy_digits() {
        let date = parse("1225").unwrap();
        assert_eq!(date.month(), 12);
        assert_eq!(date.year(), 2025);
    }

    #[test]
    fn test_parse_display_format() {
        let date = parse("06 / 28").unwrap();
        assert_eq!(date.month(), 6);
        assert_eq!(date.year(), 2028);
    }

    #[test]
    fn test_parse_four_digit_year() {
        let date = parse("012030").unwrap();
        assert_eq!(date.month(), 1);
        assert_eq!(date.year(), 2030);
    }

    #[test]
    fn test_incomplete() {
        assert_eq!(parse(""), Err(ExpiryError::Incomplete));
        assert_eq!(parse("1"), Err(ExpiryError::Incomplete));
        assert_eq!(parse("12 / 3"), Err(ExpiryError::Incomplete));
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(parse("0029"), Err(ExpiryError::InvalidMonth(0)));
        assert_eq!(parse("1329"), Err(ExpiryError::InvalidMonth(13)));
        assert_eq!(parse("9929"), Err(ExpiryError::InvalidMonth(99)));
    }

    #[test]
    fn test_invalid_digit_count() {
        assert_eq!(parse("12345"), Err(ExpiryError::InvalidFormat));
        assert_eq!(parse("1234567"), Err(ExpiryError::InvalidFormat));
    }

    #[test]
    fn test_is_past() {
        assert!(ExpiryDate::new(1, 2020).unwrap().is_past());
        assert!(!ExpiryDate::new(12, 2099).unwrap().is_past());
    }

    #[test]
    fn test_current_month_is_not_past() {
        let (year, month) = current_year_month();
        assert!(!ExpiryDate::new(month, year).unwrap().is_past());
    }

    #[test]
    fn test_expiry_date_new() {
        assert!(ExpiryDate::new(1, 2025).is_some());
        assert!(ExpiryDate::new(12, 2025).is_some());
        assert!(ExpiryDate::new(0, 2025).is_none());
        assert!(ExpiryDate::new(13, 2025).is_none());
    }

    #[test]
    fn test_display() {
        let date = ExpiryDate::new(3, 2025).unwrap();
        assert_eq!(date.to_string(), "03 / 25");
    }

    #[test]
    fn test_civil_from_days() {
        assert_eq!(civil_from_days(0), (1970, 1));
        // 2000-02-29 is day 11016; 2000-03-01 is day 11017.
        assert_eq!(civil_from_days(11_016), (2000, 2));
        assert_eq!(civil_from_days(11_017), (2000, 3));
        // 2024-01-01 is day 19723.
        assert_eq!(civil_from_days(19_723), (2024, 1));
    }
}
