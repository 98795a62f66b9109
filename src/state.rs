//! Aggregate touched/error/focus state across the input set.
//!
//! The aggregator holds one touched flag and one optional error per
//! field and derives the overall summary the UI renders: the single
//! `error` to show in a banner, whether anything has been touched, the
//! detected brand, and which field currently has focus.
//!
//! The overall `error` policy: when a field reports a non-empty error it
//! becomes the overall error immediately; when a field clears its error,
//! the overall error is recomputed by scanning the remaining fields in
//! priority order and taking the first non-empty one.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::brand::CardBrand;
use crate::validator::FieldError;

/// One of the four payment inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Field {
    /// The card number input.
    CardNumber,
    /// The expiry date input.
    ExpiryDate,
    /// The CVC / security code input.
    Cvc,
    /// The ZIP / postal code input.
    Zip,
}

impl Field {
    /// All fields in visual (and default error-priority) order.
    pub const ALL: [Field; 4] = [Field::CardNumber, Field::ExpiryDate, Field::Cvc, Field::Zip];

    /// The field after this one, if any. UI layers use this together
    /// with [`crate::engine::InputOutcome::advance_focus`] to move focus
    /// forward when a field completes.
    pub const fn next(self) -> Option<Field> {
        match self {
            Field::CardNumber => Some(Field::ExpiryDate),
            Field::ExpiryDate => Some(Field::Cvc),
            Field::Cvc => Some(Field::Zip),
            Field::Zip => None,
        }
    }

    /// The field before this one, if any. Used by UI layers that move
    /// focus back on backspace in an empty input.
    pub const fn previous(self) -> Option<Field> {
        match self {
            Field::CardNumber => None,
            Field::ExpiryDate => Some(Field::CardNumber),
            Field::Cvc => Some(Field::ExpiryDate),
            Field::Zip => Some(Field::Cvc),
        }
    }

    /// Stable identifier, matching the input's conventional name.
    pub const fn name(self) -> &'static str {
        match self {
            Field::CardNumber => "cardNumber",
            Field::ExpiryDate => "expiryDate",
            Field::Cvc => "cvc",
            Field::Zip => "zip",
        }
    }

    const fn index(self) -> usize {
        match self {
            Field::CardNumber => 0,
            Field::ExpiryDate => 1,
            Field::Cvc => 2,
            Field::Zip => 3,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Snapshot of the aggregate input state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AggregateState {
    errored: [Option<FieldError>; 4],
    touched: [bool; 4],
    error: Option<FieldError>,
    card_type: Option<CardBrand>,
    focused: Option<Field>,
}

impl AggregateState {
    /// The stored error for one field.
    pub fn field_error(&self, field: Field) -> Option<&FieldError> {
        self.errored[field.index()].as_ref()
    }

    /// Whether one field has been touched.
    pub fn is_field_touched(&self, field: Field) -> bool {
        self.touched[field.index()]
    }

    /// The overall error to surface, per the priority policy.
    pub fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }

    /// True if any field has been touched.
    pub fn is_touched(&self) -> bool {
        self.touched.iter().any(|&t| t)
    }

    /// The brand detected from the card number input, if any.
    pub fn card_type(&self) -> Option<CardBrand> {
        self.card_type
    }

    /// The field that currently has focus, if any.
    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    /// Stores a field's error and recomputes the overall error.
    ///
    /// No-op (returns false) when the error is unchanged, so callers can
    /// skip redundant notifications. A non-empty error becomes the
    /// overall error immediately; clearing an error rescans `priority`.
    pub(crate) fn set_field_error(
        &mut self,
        field: Field,
        error: Option<FieldError>,
        priority: &[Field; 4],
    ) -> bool {
        if self.errored[field.index()] == error {
            return false;
        }
        self.errored[field.index()] = error.clone();
        self.error = match error {
            Some(error) => Some(error),
            None => priority
                .iter()
                .find_map(|f| self.errored[f.index()].clone()),
        };
        true
    }

    /// Stores a field's touched flag; no-op when unchanged.
    pub(crate) fn set_field_touched(&mut self, field: Field, touched: bool) -> bool {
        if self.touched[field.index()] == touched {
            return false;
        }
        self.touched[field.index()] = touched;
        true
    }

    pub(crate) fn set_card_type(&mut self, brand: Option<CardBrand>) {
        self.card_type = brand;
    }

    pub(crate) fn set_focused(&mut self, field: Option<Field>) {
        self.focused = field;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
