//! Per-field validation.
//!
//! Each field has a `*_error` operation that returns `None` when the
//! value is acceptable or `Some(FieldError)` describing why it is not.
//! Bad input is never an `Err`: every condition here is recoverable by
//! further typing, so the verdict is a value.
//!
//! Default error messages can be overridden per `{field}_{reason}` key
//! via [`ErrorMessages`]; unknown keys are rejected when the engine is
//! built, not silently ignored.

use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::brand::{CardBrand, MIN_CARD_DIGITS};
use crate::detect::detect_brand;
use crate::expiry::{self, ExpiryError};
use crate::luhn;

/// Maximum ZIP / postal code length accepted by the default rule.
pub const MAX_ZIP_LENGTH: usize = 6;

/// Why a field value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ErrorKind {
    /// The value is too short to be judged; keep typing.
    Incomplete,
    /// The value is complete but structurally wrong.
    Invalid,
    /// The expiry date precedes the current month.
    PastDate,
    /// The card number's prefix matches no known brand.
    UnrecognizedBrand,
}

/// A field validation failure: a machine-readable kind plus the message
/// the UI should show.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FieldError {
    kind: ErrorKind,
    message: Cow<'static, str>,
}

impl FieldError {
    pub(crate) fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The error category.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The display message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Invalid engine configuration, surfaced at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An error-message override used a key the engine does not know.
    UnknownMessageKey(String),
    /// An error-message override mapped a key to an empty string.
    EmptyMessage(String),
    /// The error priority order repeats or omits a field.
    InvalidPriority,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMessageKey(key) => write!(f, "unknown error message key: {key:?}"),
            Self::EmptyMessage(key) => write!(f, "empty error message for key: {key:?}"),
            Self::InvalidPriority => {
                write!(f, "error priority must list each field exactly once")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// The message shown for each field/reason pair.
///
/// Defaults match the engine's stock wording; individual entries are
/// overridable by key, e.g. `card_number_incomplete` or `expiry_past`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessages {
    card_number_incomplete: Cow<'static, str>,
    card_number_invalid: Cow<'static, str>,
    expiry_incomplete: Cow<'static, str>,
    expiry_invalid: Cow<'static, str>,
    expiry_past: Cow<'static, str>,
    cvc_incomplete: Cow<'static, str>,
    cvc_invalid: Cow<'static, str>,
    zip_incomplete: Cow<'static, str>,
    zip_invalid: Cow<'static, str>,
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            card_number_incomplete: Cow::Borrowed("Card number is incomplete"),
            card_number_invalid: Cow::Borrowed("Card number is invalid"),
            expiry_incomplete: Cow::Borrowed("Expiry date is incomplete"),
            expiry_invalid: Cow::Borrowed("Expiry date is invalid"),
            expiry_past: Cow::Borrowed("Expiry date is in the past"),
            cvc_incomplete: Cow::Borrowed("CVC is incomplete"),
            cvc_invalid: Cow::Borrowed("CVC is invalid"),
            zip_incomplete: Cow::Borrowed("ZIP is incomplete"),
            zip_invalid: Cow::Borrowed("ZIP is invalid"),
        }
    }
}

impl ErrorMessages {
    /// All recognized override keys.
    pub const KEYS: [&'static str; 9] = [
        "card_number_incomplete",
        "card_number_invalid",
        "expiry_incomplete",
        "expiry_invalid",
        "expiry_past",
        "cvc_incomplete",
        "cvc_invalid",
        "zip_incomplete",
        "zip_invalid",
    ];

    /// Overrides one message by key.
    pub fn set(&mut self, key: &str, message: String) -> Result<(), ConfigError> {
        if message.is_empty() {
            return Err(ConfigError::EmptyMessage(key.to_owned()));
        }
        let slot = match key {
            "card_number_incomplete" => &mut self.card_number_incomplete,
            "card_number_invalid" => &mut self.card_number_invalid,
            "expiry_incomplete" => &mut self.expiry_incomplete,
            "expiry_invalid" => &mut self.expiry_invalid,
            "expiry_past" => &mut self.expiry_past,
            "cvc_incomplete" => &mut self.cvc_incomplete,
            "cvc_invalid" => &mut self.cvc_invalid,
            "zip_incomplete" => &mut self.zip_incomplete,
            "zip_invalid" => &mut self.zip_invalid,
            _ => return Err(ConfigError::UnknownMessageKey(key.to_owned())),
        };
        *slot = Cow::Owned(message);
        Ok(())
    }

    /// Builds a message table from `(key, message)` override pairs.
    pub fn from_overrides<I, K, V>(overrides: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut messages = Self::default();
        for (key, value) in overrides {
            messages.set(key.as_ref(), value.into())?;
        }
        Ok(messages)
    }

    fn incomplete(&self, message: &Cow<'static, str>) -> FieldError {
        FieldError::new(ErrorKind::Incomplete, message.clone())
    }

    fn invalid(&self, message: &Cow<'static, str>) -> FieldError {
        FieldError::new(ErrorKind::Invalid, message.clone())
    }
}

/// Validates a card number (raw or display-formatted).
///
/// Returns `Incomplete` while more digits could still complete the
/// number, `UnrecognizedBrand` when the prefix matches no brand after
/// twelve digits, and `Invalid` when the length fits no valid length of
/// the detected brand or the Luhn checksum fails.
///
/// # Example
///
/// ```
/// use payment_inputs::validator::{card_number_error, ErrorMessages};
///
/// let messages = ErrorMessages::default();
/// assert!(card_number_error("4242 4242 4242 4242", &messages).is_none());
/// assert!(card_number_error("4242 4242 4242 4241", &messages).is_some());
/// ```
pub fn card_number_error(value: &str, messages: &ErrorMessages) -> Option<FieldError> {
    let digits: Vec<u8> = value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .map(|c| (c as u8) - b'0')
        .collect();

    if digits.is_empty() {
        return Some(messages.incomplete(&messages.card_number_incomplete));
    }

    match detect_brand(&digits) {
        Some(brand) => {
            if digits.len() < brand.min_length() {
                return Some(messages.incomplete(&messages.card_number_incomplete));
            }
            if !brand.is_valid_length(digits.len()) {
                return if digits.len() < brand.max_length() {
                    Some(messages.incomplete(&messages.card_number_incomplete))
                } else {
                    Some(messages.invalid(&messages.card_number_invalid))
                };
            }
            if !luhn::passes(&digits) {
                return Some(messages.invalid(&messages.card_number_invalid));
            }
            None
        }
        // No brand: still typing below the global minimum, hopeless above it.
        None if digits.len() < MIN_CARD_DIGITS => {
            Some(messages.incomplete(&messages.card_number_incomplete))
        }
        None => Some(FieldError::new(
            ErrorKind::UnrecognizedBrand,
            messages.card_number_invalid.clone(),
        )),
    }
}

/// Validates an expiry value (raw digits or `MM / YY`).
///
/// The past-date check runs against the wall clock on every call.
pub fn expiry_error(value: &str, messages: &ErrorMessages) -> Option<FieldError> {
    match expiry::parse(value) {
        Ok(date) => {
            if date.is_past() {
                Some(FieldError::new(
                    ErrorKind::PastDate,
                    messages.expiry_past.clone(),
                ))
            } else {
                None
            }
        }
        Err(ExpiryError::Incomplete) => Some(messages.incomplete(&messages.expiry_incomplete)),
        Err(ExpiryError::InvalidMonth(_)) | Err(ExpiryError::InvalidFormat) => {
            Some(messages.invalid(&messages.expiry_invalid))
        }
    }
}

/// Validates a CVC for an optionally-known brand.
///
/// With a known brand the code must be exactly the brand's CVC length
/// (4 for American Express, 3 otherwise); with no brand, 3 or 4 digits
/// are accepted.
pub fn cvc_error(
    value: &str,
    brand: Option<CardBrand>,
    messages: &ErrorMessages,
) -> Option<FieldError> {
    if value.is_empty() {
        return Some(messages.incomplete(&messages.cvc_incomplete));
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Some(messages.invalid(&messages.cvc_invalid));
    }

    match brand {
        Some(brand) => {
            let required = brand.cvc_length();
            if value.len() < required {
                Some(messages.incomplete(&messages.cvc_incomplete))
            } else if value.len() > required {
                Some(messages.invalid(&messages.cvc_invalid))
            } else {
                None
            }
        }
        None if value.len() < 3 => Some(messages.incomplete(&messages.cvc_incomplete)),
        None if value.len() > 4 => Some(messages.invalid(&messages.cvc_invalid)),
        None => None,
    }
}

/// Validates a ZIP / postal code.
///
/// The default rule: non-empty (when `required`), at most
/// [`MAX_ZIP_LENGTH`] characters, ASCII alphanumeric only. Formats
/// beyond that are the caller's business via a custom validator.
pub fn zip_error(value: &str, required: bool, messages: &ErrorMessages) -> Option<FieldError> {
    if value.is_empty() {
        return required.then(|| messages.incomplete(&messages.zip_incomplete));
    }
    if value.len() > MAX_ZIP_LENGTH || !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Some(messages.invalid(&messages.zip_invalid));
    }
    None
}
