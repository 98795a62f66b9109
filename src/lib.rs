//! Framework-agnostic engine for payment card input fields.
//!
//! `payment_inputs` implements everything behind a card entry form that
//! is not rendering: brand detection from the number prefix, as-you-type
//! formatting for the card number and expiry date, per-field validation
//! with configurable messages, and the aggregate touched/error/focus
//! state a UI needs to drive a summary banner and focus movement. Any UI
//! layer (desktop toolkit, TUI, web via wasm) can sit on top.
//!
//! # Quick start
//!
//! ```
//! use payment_inputs::{CardBrand, Engine, Field};
//!
//! let mut engine = Engine::new();
//!
//! // Feed the engine each change; write `formatted_value` back to the input.
//! let outcome = engine.card_number_input("4242424242424242");
//! assert_eq!(outcome.formatted_value, "4242 4242 4242 4242");
//! assert_eq!(outcome.brand, Some(CardBrand::Visa));
//! assert!(outcome.advance_focus);
//!
//! engine.expiry_input("12 / 30");
//! engine.cvc_input("123");
//! engine.zip_input("90210");
//!
//! let state = engine.snapshot();
//! assert_eq!(state.error(), None);
//! assert!(state.is_field_touched(Field::CardNumber));
//! ```
//!
//! # Configuration
//!
//! ```
//! use payment_inputs::Engine;
//!
//! let mut engine = Engine::builder()
//!     .zip_required(false)
//!     .error_message("card_number_invalid", "That card number doesn't look right")
//!     .build()
//!     .unwrap();
//!
//! let outcome = engine.card_number_input("4242424242424241");
//! assert_eq!(
//!     outcome.error.unwrap().message(),
//!     "That card number doesn't look right"
//! );
//! ```
//!
//! The lower-level pieces ([`detect`], [`format`], [`luhn`], [`expiry`],
//! [`validator`]) are public for callers that want them without the
//! engine's state tracking.
//!
//! # Features
//!
//! - `serde`: derives `Serialize` on the public state types.

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod brand;
pub mod detect;
pub mod engine;
pub mod expiry;
pub mod format;
pub mod luhn;
pub mod state;
pub mod validator;

pub use brand::{CardBrand, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
pub use engine::{CustomValidator, Engine, EngineBuilder, InputOutcome};
pub use state::{AggregateState, Field};
pub use validator::{ConfigError, ErrorKind, ErrorMessages, FieldError, MAX_ZIP_LENGTH};
