//! Light Switch State Machine
//!
//! This example demonstrates the smallest useful configuration: two
//! states and two events, driven from JSON.
//!
//! Key concepts:
//! - Deserializing a configuration from its JSON shape
//! - Event-driven transitions with `trigger`
//! - Single-step undo and redo
//!
//! Run with: cargo run --example light_switch

use turnstile::{Fsm, MachineConfig};

fn main() {
    println!("=== Light Switch State Machine ===\n");

    let config: MachineConfig = serde_json::from_str(
        r#"{
            "initial": "off",
            "states": {
                "off": { "transitions": { "switchOn": "on" } },
                "on": { "transitions": { "switchOff": "off" } }
            }
        }"#,
    )
    .expect("config should parse");

    let mut fsm = Fsm::new(&config);
    println!("Initial state: {}", fsm.state());

    fsm.trigger("switchOn").expect("off handles switchOn");
    println!("After switchOn: {}", fsm.state());

    let undone = fsm.undo();
    println!("undo() -> {undone}, state: {}", fsm.state());

    let redone = fsm.redo();
    println!("redo() -> {redone}, state: {}", fsm.state());

    let redone_again = fsm.redo();
    println!("redo() again -> {redone_again}, state: {}\n", fsm.state());

    println!("A trigger the current state does not handle fails cleanly:");
    match fsm.trigger("switchOn") {
        Ok(()) => println!("  unexpectedly transitioned"),
        Err(err) => println!("  {err}"),
    }
    println!("State unchanged: {}", fsm.state());

    println!("\n=== Example Complete ===");
}
