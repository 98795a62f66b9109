//! Fuzz target for the full engine: arbitrary sequences of input and
//! focus events must never panic and must keep the snapshot coherent.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use payment_inputs::{Engine, Field};

#[derive(Arbitrary, Debug)]
enum Event {
    CardNumber(String),
    Expiry(String),
    Cvc(String),
    Zip(String),
    Focus(u8),
    Blur(u8),
    Reset,
}

fn field(i: u8) -> Field {
    Field::ALL[usize::from(i) % 4]
}

fuzz_target!(|events: Vec<Event>| {
    let mut engine = Engine::new();

    for event in events {
        match event {
            Event::CardNumber(s) => {
                let outcome = engine.card_number_input(&s);
                assert_eq!(engine.value(Field::CardNumber), outcome.formatted_value);
            }
            Event::Expiry(s) => {
                let _ = engine.expiry_input(&s);
            }
            Event::Cvc(s) => {
                let _ = engine.cvc_input(&s);
            }
            Event::Zip(s) => {
                let _ = engine.zip_input(&s);
            }
            Event::Focus(i) => engine.focus(field(i)),
            Event::Blur(i) => engine.blur(field(i)),
            Event::Reset => engine.reset(),
        }

        // The overall error is always one of the per-field errors.
        let state = engine.snapshot();
        if let Some(error) = state.error() {
            assert!(
                Field::ALL.iter().any(|&f| state.field_error(f) == Some(error)),
                "Overall error not attributable to any field"
            );
        }
    }
});
