//! Configured engine: message overrides, custom validators, optional ZIP.
//!
//! Run with: `cargo run --example custom_rules`

use payment_inputs::{Engine, Field};

fn main() {
    println!("=== Custom Validation Rules ===\n");

    let mut engine = Engine::builder()
        .zip_required(false)
        .error_message("card_number_invalid", "That card number doesn't look right")
        .error_message("expiry_past", "This card has expired")
        .error_priority([Field::ExpiryDate, Field::CardNumber, Field::Cvc, Field::Zip])
        .cvc_validator(|value, brand| {
            let required = brand.map_or(3, |b| b.cvc_length());
            (value.len() != required || !value.chars().all(|c| c.is_ascii_digit()))
                .then(|| format!("Security code must be {required} digits"))
        })
        .build()
        .expect("configuration is valid");

    // A bad checksum triggers the overridden message.
    let outcome = engine.card_number_input("4242424242424241");
    println!("Bad checksum:  {}", outcome.error.unwrap().message());

    // An expired card triggers the overridden past-date message.
    let outcome = engine.expiry_input("01 / 20");
    println!("Expired card:  {}", outcome.error.unwrap().message());

    // The custom CVC rule replaces the stock one.
    let outcome = engine.cvc_input("12");
    println!("Short CVC:     {}", outcome.error.unwrap().message());

    // Fixing the CVC leaves the card number and expiry errored; the
    // custom priority order picks the expiry as the overall error.
    engine.cvc_input("123");
    let state = engine.snapshot();
    println!("\nOverall error: {}", state.error().unwrap().message());

    // ZIP is optional here.
    let outcome = engine.zip_input("");
    println!(
        "Empty ZIP:     {}",
        outcome
            .error
            .map_or("accepted".to_owned(), |e| e.message().to_owned())
    );
}
