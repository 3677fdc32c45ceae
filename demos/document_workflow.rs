//! Document Workflow State Machine
//!
//! This example demonstrates a three-state editorial workflow built with
//! the fluent builder.
//!
//! Key concepts:
//! - Fluent configuration construction
//! - Declaration-order state queries
//! - Reset vs. clear_history
//! - The single-slot history and its oscillation on repeated undo
//!
//! Run with: cargo run --example document_workflow

use turnstile::{Fsm, MachineConfig};

fn main() {
    println!("=== Document Workflow State Machine ===\n");

    let config = MachineConfig::builder()
        .initial("draft")
        .transition("draft", "submit", "review")
        .transition("review", "approve", "published")
        .transition("review", "reject", "draft")
        .state("published")
        .build()
        .expect("initial state was set");

    let mut fsm = Fsm::new(&config);

    println!("Declared states (declaration order): {:?}", fsm.states());
    println!(
        "States handling 'submit': {:?}",
        fsm.states_handling("submit")
    );
    println!(
        "States handling 'approve': {:?}\n",
        fsm.states_handling("approve")
    );

    fsm.trigger("submit").expect("draft handles submit");
    fsm.trigger("approve").expect("review handles approve");
    println!("After submit, approve: {}", fsm.state());
    println!("Change count: {}", fsm.change_count());

    println!("\nThe history is a single slot, not a stack:");
    fsm.undo();
    println!("  undo -> {}", fsm.state());
    fsm.undo();
    println!("  undo -> {} (oscillates, does not reach draft)", fsm.state());

    println!("\nReset returns to the initial state and zeroes the count:");
    fsm.reset().expect("initial state is declared");
    println!("  state: {}, change count: {}", fsm.state(), fsm.change_count());
    println!("  undo after reset -> {} (ineligible)", fsm.undo());

    println!("\nclear_history additionally forgets the previous state:");
    fsm.trigger("submit").expect("draft handles submit");
    fsm.clear_history();
    println!(
        "  state: {}, previous: {:?}",
        fsm.state(),
        fsm.previous_state()
    );

    println!("\n=== Example Complete ===");
}
