//! Minimal Two-State Machine
//!
//! The smallest useful machine: an initial state that does one unit of
//! work and hands off to a final state.
//!
//! Key concepts:
//! - The poll loop a host wraps around a cursor
//! - Output-register latching as the transition guard
//! - Acceptance via the final-state set
//!
//! Run with: cargo run --example two_state

use mealy::{Lifecycle, MachineBuilder, StateBuilder, StateId};

#[derive(Clone, PartialEq, Debug)]
enum Signal {
    Finish,
}

#[derive(Clone, PartialEq, Debug, Default)]
enum Latch {
    #[default]
    Neutral,
    Ok,
}

const INITIAL: StateId = StateId(1);
const FINAL: StateId = StateId(2);

fn main() {
    println!("=== Minimal Two-State Machine ===\n");

    let machine = MachineBuilder::new()
        .initial(INITIAL)
        .state(
            StateBuilder::new(INITIAL)
                .named("initial")
                .on_poll(|latch: &mut Latch, _: &mut ()| {
                    println!("initial -> final");
                    *latch = Latch::Ok;
                    Some(Signal::Finish)
                })
                .transition(Signal::Finish, Latch::Ok, FINAL),
        )
        .expect("initial state builds")
        .state(
            StateBuilder::new(FINAL)
                .named("final")
                .on_poll(|_: &mut Latch, _: &mut ()| {
                    println!("parked in final");
                    None
                }),
        )
        .expect("final state builds")
        .final_state(FINAL)
        .build()
        .expect("two-state table validates");

    let mut cursor = machine.initialize(());

    loop {
        match cursor.poll() {
            Lifecycle::None | Lifecycle::StateChanged => {}
            Lifecycle::Accepted => {
                println!("\naccepted in state {}", cursor.current_state());
                break;
            }
            Lifecycle::Faulted => {
                eprintln!("\nfault: {}", cursor.fault().describe());
                break;
            }
        }
    }

    println!("\n=== Example Complete ===");
}
