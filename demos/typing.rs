//! Simulated typing session against the engine.
//!
//! Run with: `cargo run --example typing`

use payment_inputs::{Engine, Field};

fn main() {
    println!("=== Payment Input Typing Session ===\n");

    let mut engine = Engine::new();

    // Type a card number keystroke by keystroke.
    let number = "4242424242424242";
    println!("Typing card number:");
    let mut typed = String::new();
    for ch in number.chars() {
        typed.push(ch);
        let outcome = engine.card_number_input(&typed);
        typed = outcome.formatted_value.clone();
        println!(
            "  {:22} brand: {:10} error: {}",
            outcome.formatted_value,
            outcome
                .brand
                .map_or("unknown".to_owned(), |b| b.name().to_owned()),
            outcome
                .error
                .map_or("none".to_owned(), |e| e.message().to_owned()),
        );
    }
    println!();

    // Expiry formatting as you type.
    println!("Typing expiry date:");
    for raw in ["1", "12", "123", "1230"] {
        let outcome = engine.expiry_input(raw);
        println!(
            "  typed {:5} -> shown {:8} error: {}",
            format!("{raw:?}"),
            format!("{:?}", outcome.formatted_value),
            outcome
                .error
                .map_or("none".to_owned(), |e| e.message().to_owned()),
        );
    }
    println!();

    // CVC and ZIP.
    engine.cvc_input("123");
    engine.zip_input("90210");

    let state = engine.snapshot();
    println!("Final state:");
    println!("  overall error: {:?}", state.error());
    println!("  any touched:   {}", state.is_touched());
    println!("  masked number: {}", engine.masked_card_number());
    for field in Field::ALL {
        println!("  {:12} = {:?}", field.name(), engine.value(field));
    }
}
