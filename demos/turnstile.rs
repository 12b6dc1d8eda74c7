//! Coin-Operated Turnstile
//!
//! A classic Mealy machine driven by scripted input: the register carries
//! the outcome of reading one input, and the transition tables route on
//! (event, outcome) pairs. Demonstrates enter/exit hooks and the fault
//! path when the script ends unexpectedly.
//!
//! Run with: cargo run --example turnstile

use mealy::{Lifecycle, MachineBuilder, StateBuilder, StateId};
use std::collections::VecDeque;

#[derive(Clone, PartialEq, Debug)]
enum Input {
    Coin,
    Push,
}

#[derive(Clone, PartialEq, Debug)]
enum Signal {
    Handled,
    Drained,
}

/// Outcome of the last input, latched into the output register.
#[derive(Clone, PartialEq, Debug, Default)]
enum Outcome {
    #[default]
    Idle,
    Paid,
    Denied,
    Passed,
}

struct Gate {
    script: VecDeque<Input>,
}

const LOCKED: StateId = StateId(1);
const UNLOCKED: StateId = StateId(2);
const CLOSED: StateId = StateId(3);

fn locked() -> StateBuilder<Outcome, Signal, Gate> {
    StateBuilder::new(LOCKED)
        .named("locked")
        .on_poll(|outcome: &mut Outcome, gate: &mut Gate| match gate.script.pop_front() {
            Some(Input::Coin) => {
                println!("coin accepted");
                *outcome = Outcome::Paid;
                Some(Signal::Handled)
            }
            Some(Input::Push) => {
                println!("push denied");
                *outcome = Outcome::Denied;
                Some(Signal::Handled)
            }
            None => {
                *outcome = Outcome::Idle;
                Some(Signal::Drained)
            }
        })
        .on_enter(|_, _, _: &mut Gate| println!("  [latch engaged]"))
        .transition(Signal::Handled, Outcome::Paid, UNLOCKED)
        .transition(Signal::Handled, Outcome::Denied, LOCKED)
        .transition(Signal::Drained, Outcome::Idle, CLOSED)
}

fn unlocked() -> StateBuilder<Outcome, Signal, Gate> {
    StateBuilder::new(UNLOCKED)
        .named("unlocked")
        .on_poll(|outcome: &mut Outcome, gate: &mut Gate| match gate.script.pop_front() {
            Some(Input::Push) => {
                println!("visitor passes through");
                *outcome = Outcome::Passed;
                Some(Signal::Handled)
            }
            Some(Input::Coin) => {
                println!("extra coin returned");
                *outcome = Outcome::Paid;
                Some(Signal::Handled)
            }
            None => {
                *outcome = Outcome::Idle;
                Some(Signal::Drained)
            }
        })
        .on_exit(|_, _, _: &mut Gate| println!("  [latch released]"))
        .transition(Signal::Handled, Outcome::Passed, LOCKED)
        .transition(Signal::Handled, Outcome::Paid, UNLOCKED)
        .transition(Signal::Drained, Outcome::Idle, CLOSED)
}

fn main() {
    println!("=== Coin-Operated Turnstile ===\n");

    let machine = MachineBuilder::new()
        .initial(LOCKED)
        .state(locked())
        .expect("locked state builds")
        .state(unlocked())
        .expect("unlocked state builds")
        .state(
            StateBuilder::new(CLOSED)
                .named("closed")
                .on_poll(|_: &mut Outcome, _: &mut Gate| None),
        )
        .expect("closed state builds")
        .final_state(CLOSED)
        .deny_ambiguity()
        .build()
        .expect("turnstile table validates");

    let gate = Gate {
        script: VecDeque::from([
            Input::Push,
            Input::Coin,
            Input::Coin,
            Input::Push,
            Input::Push,
        ]),
    };

    let mut cursor = machine.initialize(gate);

    loop {
        match cursor.poll() {
            Lifecycle::None | Lifecycle::StateChanged => {}
            Lifecycle::Accepted => {
                println!("\nscript drained, turnstile closed for the night");
                break;
            }
            Lifecycle::Faulted => {
                eprintln!("\nfault: {}", cursor.fault().describe());
                break;
            }
        }
    }

    println!("states visited: {:?}", cursor.history().path());
    println!("\n=== Example Complete ===");
}
