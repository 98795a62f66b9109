//! Card brand registry.
//!
//! Each brand carries the static data the rest of the engine needs:
//! BIN/IIN prefix ranges for detection, the set of valid total lengths,
//! the digit grouping used for display formatting, and the expected
//! CVC length.
//!
//! The table is fixed at compile time and never mutated.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Maximum number of digits in a card number.
pub const MAX_CARD_DIGITS: usize = 19;

/// Minimum number of digits in a card number.
pub const MIN_CARD_DIGITS: usize = 12;

/// An inclusive numeric prefix range over a fixed number of leading digits.
///
/// `low..=high` interpreted over the first `len` digits of the card number.
/// A range only matches once at least `len` digits have been typed, which
/// is what makes incremental detection monotonic: a longer range cannot
/// match, un-match, and match again as digits are appended.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PrefixRange {
    pub low: u32,
    pub high: u32,
    pub len: u8,
}

const fn range(low: u32, high: u32, len: u8) -> PrefixRange {
    PrefixRange { low, high, len }
}

const VISA_RANGES: &[PrefixRange] = &[range(4, 4, 1)];
const MASTERCARD_RANGES: &[PrefixRange] = &[range(51, 55, 2), range(2221, 2720, 4)];
const AMEX_RANGES: &[PrefixRange] = &[range(34, 34, 2), range(37, 37, 2)];
const DISCOVER_RANGES: &[PrefixRange] =
    &[range(6011, 6011, 4), range(644, 649, 3), range(65, 65, 2)];
const DINERS_RANGES: &[PrefixRange] = &[
    range(300, 305, 3),
    range(309, 309, 3),
    range(36, 36, 2),
    range(38, 38, 2),
];
const JCB_RANGES: &[PrefixRange] = &[range(3528, 3589, 4)];
const UNIONPAY_RANGES: &[PrefixRange] = &[range(62, 62, 2)];
const MAESTRO_RANGES: &[PrefixRange] = &[
    range(50, 50, 2),
    range(56, 58, 2),
    range(60, 61, 2),
    range(63, 63, 2),
    range(66, 69, 2),
];
const MIR_RANGES: &[PrefixRange] = &[range(2200, 2204, 4)];
const RUPAY_RANGES: &[PrefixRange] = &[range(81, 82, 2)];
const VERVE_RANGES: &[PrefixRange] = &[range(506, 507, 3)];
const ELO_RANGES: &[PrefixRange] = &[range(509, 509, 3), range(6362, 6363, 4)];
const TROY_RANGES: &[PrefixRange] = &[range(9792, 9792, 4)];
const BCCARD_RANGES: &[PrefixRange] = &[range(94, 94, 2)];

/// Supported card brands/networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum CardBrand {
    /// Visa - prefix 4, lengths 13, 16, 19
    Visa,
    /// Mastercard - prefix 51-55, 2221-2720, length 16
    Mastercard,
    /// American Express - prefix 34, 37, length 15
    Amex,
    /// Discover - prefix 6011, 644-649, 65, length 16-19
    Discover,
    /// Diners Club - prefix 36, 38, 300-305, 309, length 14-19
    DinersClub,
    /// JCB - prefix 3528-3589, length 16-19
    Jcb,
    /// UnionPay - prefix 62, length 16-19
    UnionPay,
    /// Maestro - prefix 50, 56-58, 60-61, 63, 66-69, length 12-19
    Maestro,
    /// Mir - Russian payment system, prefix 2200-2204, length 16-19
    Mir,
    /// RuPay - Indian payment system, prefix 81, 82, length 16
    RuPay,
    /// Verve - Nigerian payment system, prefix 506, 507, length 16-19
    Verve,
    /// Elo - Brazilian payment system, prefix 509, 6362-6363, length 16
    Elo,
    /// Troy - Turkish payment system, prefix 9792, length 16
    Troy,
    /// BC Card - South Korean payment system, prefix 94, length 16
    BcCard,
}

impl CardBrand {
    /// Every registered brand, in detection tie-break order.
    ///
    /// When two brands match prefixes of the same length, the one listed
    /// first wins. Longer prefixes always beat shorter ones regardless of
    /// position (see [`crate::detect::detect_brand`]).
    pub const ALL: [CardBrand; 14] = [
        CardBrand::Mir,
        CardBrand::Mastercard,
        CardBrand::Amex,
        CardBrand::DinersClub,
        CardBrand::Jcb,
        CardBrand::Visa,
        CardBrand::Verve,
        CardBrand::Elo,
        CardBrand::Discover,
        CardBrand::UnionPay,
        CardBrand::Maestro,
        CardBrand::RuPay,
        CardBrand::Troy,
        CardBrand::BcCard,
    ];

    /// The prefix ranges that identify this brand.
    pub(crate) const fn prefix_ranges(&self) -> &'static [PrefixRange] {
        match self {
            Self::Visa => VISA_RANGES,
            Self::Mastercard => MASTERCARD_RANGES,
            Self::Amex => AMEX_RANGES,
            Self::Discover => DISCOVER_RANGES,
            Self::DinersClub => DINERS_RANGES,
            Self::Jcb => JCB_RANGES,
            Self::UnionPay => UNIONPAY_RANGES,
            Self::Maestro => MAESTRO_RANGES,
            Self::Mir => MIR_RANGES,
            Self::RuPay => RUPAY_RANGES,
            Self::Verve => VERVE_RANGES,
            Self::Elo => ELO_RANGES,
            Self::Troy => TROY_RANGES,
            Self::BcCard => BCCARD_RANGES,
        }
    }

    /// Returns the valid total lengths for this brand, ascending.
    #[inline]
    pub const fn valid_lengths(&self) -> &'static [u8] {
        match self {
            Self::Visa => &[13, 16, 19],
            Self::Mastercard => &[16],
            Self::Amex => &[15],
            Self::Discover => &[16, 17, 18, 19],
            Self::DinersClub => &[14, 15, 16, 17, 18, 19],
            Self::Jcb => &[16, 17, 18, 19],
            Self::UnionPay => &[16, 17, 18, 19],
            Self::Maestro => &[12, 13, 14, 15, 16, 17, 18, 19],
            Self::Mir => &[16, 17, 18, 19],
            Self::RuPay => &[16],
            Self::Verve => &[16, 17, 18, 19],
            Self::Elo => &[16],
            Self::Troy => &[16],
            Self::BcCard => &[16],
        }
    }

    /// Shortest valid length for this brand.
    #[inline]
    pub const fn min_length(&self) -> usize {
        self.valid_lengths()[0] as usize
    }

    /// Longest valid length for this brand.
    #[inline]
    pub const fn max_length(&self) -> usize {
        let lengths = self.valid_lengths();
        lengths[lengths.len() - 1] as usize
    }

    /// Returns true if `length` is a valid total length for this brand.
    #[inline]
    pub const fn is_valid_length(&self, length: usize) -> bool {
        let valid = self.valid_lengths();
        let mut i = 0;
        while i < valid.len() {
            if valid[i] as usize == length {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Expected CVC length for this brand.
    ///
    /// American Express prints a 4-digit code on the front; everyone else
    /// uses 3 digits on the back.
    #[inline]
    pub const fn cvc_length(&self) -> usize {
        match self {
            Self::Amex => 4,
            _ => 3,
        }
    }

    /// What the brand calls its security code (useful as a placeholder).
    #[inline]
    pub const fn cvc_name(&self) -> &'static str {
        match self {
            Self::Visa => "CVV",
            Self::Amex | Self::Discover => "CID",
            _ => "CVC",
        }
    }

    /// Digit grouping used when formatting a number of `length` digits.
    #[inline]
    pub fn grouping(&self, length: usize) -> &'static [usize] {
        match self {
            Self::Amex => &[4, 6, 5],
            Self::DinersClub if length == 14 => &[4, 6, 4],
            _ => &[4, 4, 4, 4, 3],
        }
    }

    /// Human-readable brand name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::DinersClub => "Diners Club",
            Self::Jcb => "JCB",
            Self::UnionPay => "UnionPay",
            Self::Maestro => "Maestro",
            Self::Mir => "Mir",
            Self::RuPay => "RuPay",
            Self::Verve => "Verve",
            Self::Elo => "Elo",
            Self::Troy => "Troy",
            Self::BcCard => "BC Card",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_lengths() {
        assert!(CardBrand::Visa.is_valid_length(13));
        assert!(CardBrand::Visa.is_valid_length(16));
        assert!(CardBrand::Visa.is_valid_length(19));
        assert!(!CardBrand::Visa.is_valid_length(15));

        assert!(CardBrand::Amex.is_valid_length(15));
        assert!(!CardBrand::Amex.is_valid_length(16));
    }

    #[test]
    fn test_min_max_length() {
        assert_eq!(CardBrand::Visa.min_length(), 13);
        assert_eq!(CardBrand::Visa.max_length(), 19);
        assert_eq!(CardBrand::Amex.min_length(), 15);
        assert_eq!(CardBrand::Amex.max_length(), 15);
        assert_eq!(CardBrand::Maestro.min_length(), 12);
    }

    #[test]
    fn test_cvc_length() {
        assert_eq!(CardBrand::Amex.cvc_length(), 4);
        assert_eq!(CardBrand::Visa.cvc_length(), 3);
        assert_eq!(CardBrand::Mastercard.cvc_length(), 3);
    }

    #[test]
    fn test_grouping() {
        assert_eq!(CardBrand::Amex.grouping(15), &[4, 6, 5]);
        assert_eq!(CardBrand::DinersClub.grouping(14), &[4, 6, 4]);
        assert_eq!(CardBrand::DinersClub.grouping(16), &[4, 4, 4, 4, 3]);
        assert_eq!(CardBrand::Visa.grouping(16), &[4, 4, 4, 4, 3]);
    }

    #[test]
    fn test_cvc_names() {
        assert_eq!(CardBrand::Visa.cvc_name(), "CVV");
        assert_eq!(CardBrand::Amex.cvc_name(), "CID");
        assert_eq!(CardBrand::Mastercard.cvc_name(), "CVC");
    }

    #[test]
    fn test_names() {
        assert_eq!(CardBrand::Visa.name(), "Visa");
        assert_eq!(CardBrand::Amex.name(), "American Express");
        assert_eq!(CardBrand::Mastercard.to_string(), "Mastercard");
    }

    #[test]
    fn test_prefix_ranges_are_well_formed() {
        for brand in CardBrand::ALL {
            for r in brand.prefix_ranges() {
                assert!(r.low <= r.high, "{brand:?}: low > high");
                assert!(r.len >= 1 && r.len <= 6, "{brand:?}: odd prefix length");
                // Both bounds must actually have `len` digits.
                let width = 10u32.pow(r.len as u32 - 1);
                assert!(r.low >= width || r.len == 1, "{brand:?}: low too short");
                assert!(r.high < width * 10, "{brand:?}: high too long");
            }
        }
    }
}
