//! The engine facade a UI layer drives.
//!
//! One [`Engine`] instance backs one rendered set of payment inputs.
//! On every text change the UI calls the matching `*_input` method with
//! the new raw value; the engine formats it, validates it, folds the
//! verdict into the aggregate state, and hands back everything the UI
//! needs to update the input. Focus and blur signals keep the `focused`
//! and touched state current. `snapshot()` returns the aggregate state
//! for rendering summary UI.
//!
//! The engine is synchronous and single-owner: calls run to completion
//! and callers serialize them, which is the natural shape of an
//! event-driven UI loop.
//!
//! # Example
//!
//! ```
//! use payment_inputs::Engine;
//!
//! let mut engine = Engine::new();
//! let outcome = engine.card_number_input("4242424242424242");
//! assert_eq!(outcome.formatted_value, "4242 4242 4242 4242");
//! assert!(outcome.error.is_none());
//! assert!(outcome.advance_focus);
//!
//! engine.expiry_input("1");
//! assert_eq!(engine.snapshot().error().unwrap().message(), "Expiry date is incomplete");
//! ```

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::brand::CardBrand;
use crate::detect::detect_from_str;
use crate::format::{format_card_number, format_expiry, mask_card_number};
use crate::state::{AggregateState, Field};
use crate::validator::{
    self, ConfigError, ErrorKind, ErrorMessages, FieldError,
};

/// A caller-supplied validator for one field.
///
/// Receives the current raw value and the detected brand (always `None`
/// for fields other than card number and CVC). A returned string is the
/// error to show verbatim; `None` means the value is valid. Custom
/// validators fully replace the default logic for their field. Panics
/// inside a custom validator are not caught and propagate to the caller.
pub type CustomValidator = Box<dyn Fn(&str, Option<CardBrand>) -> Option<String> + Send + Sync>;

/// What one input operation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputOutcome {
    /// The display string the UI should write back into the input.
    pub formatted_value: String,
    /// The field's verdict; `None` means valid.
    pub error: Option<FieldError>,
    /// The brand detected from the card number, when relevant.
    pub brand: Option<CardBrand>,
    /// True when the field just became valid and the engine's
    /// `auto_focus_next` policy suggests moving focus to the next field.
    /// The UI layer performs the actual move.
    pub advance_focus: bool,
}

struct Config {
    auto_focus_next: bool,
    zip_required: bool,
    messages: ErrorMessages,
    priority: [Field; 4],
    card_number_validator: Option<CustomValidator>,
    expiry_validator: Option<CustomValidator>,
    cvc_validator: Option<CustomValidator>,
    zip_validator: Option<CustomValidator>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auto_focus_next: true,
            zip_required: true,
            messages: ErrorMessages::default(),
            priority: Field::ALL,
            card_number_validator: None,
            expiry_validator: None,
            cvc_validator: None,
            zip_validator: None,
        }
    }
}

/// Builder for a configured [`Engine`].
///
/// Configuration mistakes (unknown message keys, a bad priority order)
/// surface here as [`ConfigError`], never later during input handling.
#[derive(Default)]
pub struct EngineBuilder {
    config: Config,
    message_overrides: Vec<(String, String)>,
    priority: Option<[Field; 4]>,
}

impl EngineBuilder {
    /// Starts from the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a field that just became valid should signal the UI to
    /// advance focus. Defaults to true.
    pub fn auto_focus_next(mut self, enabled: bool) -> Self {
        self.config.auto_focus_next = enabled;
        self
    }

    /// Whether an empty ZIP is an error. Defaults to true.
    pub fn zip_required(mut self, required: bool) -> Self {
        self.config.zip_required = required;
        self
    }

    /// Overrides one error message by `{field}_{reason}` key,
    /// e.g. `"card_number_invalid"`. Validated by [`Self::build`].
    pub fn error_message(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.message_overrides.push((key.into(), message.into()));
        self
    }

    /// Overrides the order used to pick the overall error when a field
    /// clears its own. Must list each field exactly once.
    pub fn error_priority(mut self, priority: [Field; 4]) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the default card number validation entirely.
    pub fn card_number_validator(
        mut self,
        validator: impl Fn(&str, Option<CardBrand>) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.config.card_number_validator = Some(Box::new(validator));
        self
    }

    /// Replaces the default expiry validation entirely.
    pub fn expiry_validator(
        mut self,
        validator: impl Fn(&str, Option<CardBrand>) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.config.expiry_validator = Some(Box::new(validator));
        self
    }

    /// Replaces the default CVC validation entirely.
    pub fn cvc_validator(
        mut self,
        validator: impl Fn(&str, Option<CardBrand>) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.config.cvc_validator = Some(Box::new(validator));
        self
    }

    /// Replaces the default ZIP validation entirely.
    pub fn zip_validator(
        mut self,
        validator: impl Fn(&str, Option<CardBrand>) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.config.zip_validator = Some(Box::new(validator));
        self
    }

    /// Validates the configuration and builds the engine.
    pub fn build(mut self) -> Result<Engine, ConfigError> {
        for (key, message) in self.message_overrides.drain(..) {
            self.config.messages.set(&key, message)?;
        }
        if let Some(priority) = self.priority {
            for field in Field::ALL {
                if priority.iter().filter(|&&f| f == field).count() != 1 {
                    return Err(ConfigError::InvalidPriority);
                }
            }
            self.config.priority = priority;
        }
        Ok(Engine {
            config: self.config,
            state: AggregateState::default(),
            values: FieldValues::default(),
        })
    }
}

/// Current raw/formatted values, zeroized on reset and drop so card data
/// does not linger in memory.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
struct FieldValues {
    card_number: String,
    expiry: String,
    cvc: String,
    zip: String,
}

/// The payment-input engine: formatting, validation, and aggregate
/// state behind a set of card inputs. See the [module docs](self).
pub struct Engine {
    config: Config,
    state: AggregateState,
    values: FieldValues,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// An engine with the default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            state: AggregateState::default(),
            values: FieldValues::default(),
        }
    }

    /// Starts building a configured engine.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Handles a card number change: detects the brand, formats the
    /// digits, validates, and updates aggregate state.
    pub fn card_number_input(&mut self, raw: &str) -> InputOutcome {
        let brand = detect_from_str(raw);
        self.state.set_card_type(brand);

        let formatted = format_card_number(raw, brand);
        let error = match &self.config.card_number_validator {
            Some(validator) => custom_error(validator(&formatted, brand)),
            None => validator::card_number_error(&formatted, &self.config.messages),
        };
        self.store(Field::CardNumber, formatted.clone());
        self.apply(Field::CardNumber, error.clone());

        InputOutcome {
            formatted_value: formatted,
            advance_focus: error.is_none() && self.config.auto_focus_next,
            error,
            brand,
        }
    }

    /// Handles an expiry date change: formats as `MM / YY` and validates
    /// against the wall clock.
    pub fn expiry_input(&mut self, raw: &str) -> InputOutcome {
        let formatted = format_expiry(raw);
        let error = match &self.config.expiry_validator {
            Some(validator) => custom_error(validator(&formatted, None)),
            None => validator::expiry_error(&formatted, &self.config.messages),
        };
        self.store(Field::ExpiryDate, formatted.clone());
        self.apply(Field::ExpiryDate, error.clone());

        InputOutcome {
            formatted_value: formatted,
            advance_focus: error.is_none() && self.config.auto_focus_next,
            error,
            brand: None,
        }
    }

    /// Handles a CVC change, validated against the brand most recently
    /// detected from the card number.
    ///
    /// Input is reduced to digits and capped at the brand's CVC length
    /// (4 when the brand is unknown) - the cap applies to the prospective
    /// value, so a 3-digit brand admits exactly 3 digits.
    pub fn cvc_input(&mut self, raw: &str) -> InputOutcome {
        let brand = self.state.card_type();
        let cap = brand.map_or(4, |b| b.cvc_length());
        let mut formatted: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        formatted.truncate(cap);

        let error = match &self.config.cvc_validator {
            Some(validator) => custom_error(validator(&formatted, brand)),
            None => validator::cvc_error(&formatted, brand, &self.config.messages),
        };
        self.store(Field::Cvc, formatted.clone());
        self.apply(Field::Cvc, error.clone());

        InputOutcome {
            formatted_value: formatted,
            advance_focus: error.is_none() && self.config.auto_focus_next,
            error,
            brand,
        }
    }

    /// Handles a ZIP / postal code change. The value is kept verbatim;
    /// over-long or malformed input surfaces as a validation error
    /// rather than being silently trimmed.
    pub fn zip_input(&mut self, raw: &str) -> InputOutcome {
        let error = match &self.config.zip_validator {
            Some(validator) => custom_error(validator(raw, None)),
            None => validator::zip_error(raw, self.config.zip_required, &self.config.messages),
        };
        self.store(Field::Zip, raw.to_owned());
        self.apply(Field::Zip, error.clone());

        InputOutcome {
            formatted_value: raw.to_owned(),
            // The ZIP is the last field; nothing to advance to.
            advance_focus: false,
            error,
            brand: None,
        }
    }

    /// Records that `field` gained focus.
    pub fn focus(&mut self, field: Field) {
        self.state.set_focused(Some(field));
    }

    /// Records that `field` lost focus; a blurred field counts as
    /// touched regardless of its content.
    pub fn blur(&mut self, field: Field) {
        self.state.set_focused(None);
        self.state.set_field_touched(field, true);
    }

    /// The aggregate state as of the last operation.
    pub fn snapshot(&self) -> AggregateState {
        self.state.clone()
    }

    /// The brand detected from the card number input, if any.
    pub fn card_type(&self) -> Option<CardBrand> {
        self.state.card_type()
    }

    /// The current formatted value of one field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::CardNumber => &self.values.card_number,
            Field::ExpiryDate => &self.values.expiry,
            Field::Cvc => &self.values.cvc,
            Field::Zip => &self.values.zip,
        }
    }

    /// The stored card number with all but the last four digits masked.
    /// Safe to log.
    pub fn masked_card_number(&self) -> String {
        mask_card_number(&self.values.card_number)
    }

    /// Clears all values (zeroizing card data) and aggregate state.
    /// Configuration is kept.
    pub fn reset(&mut self) {
        self.values.zeroize();
        self.state.reset();
    }

    fn store(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::CardNumber => &mut self.values.card_number,
            Field::ExpiryDate => &mut self.values.expiry,
            Field::Cvc => &mut self.values.cvc,
            Field::Zip => &mut self.values.zip,
        };
        slot.zeroize();
        *slot = value;
    }

    /// The shared tail of every input operation: a field is touched
    /// while valid, and its verdict feeds the overall error.
    fn apply(&mut self, field: Field, error: Option<FieldError>) {
        self.state.set_field_touched(field, error.is_none());
        self.state.set_field_error(field, error, &self.config.priority);
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Card data is masked; only the last four digits ever appear.
        f.debug_struct("Engine")
            .field("card_number", &self.masked_card_number())
            .field("card_type", &self.state.card_type())
            .field("focused", &self.state.focused())
            .field("error", &self.state.error())
            .finish_non_exhaustive()
    }
}

fn custom_error(message: Option<String>) -> Option<FieldError> {
    message.map(|m| FieldError::new(ErrorKind::Invalid, m))
}
