//! Checkpoint and Resume
//!
//! Runs a three-stage pipeline machine halfway, snapshots the cursor to
//! JSON, then resumes a fresh cursor from the snapshot and drives it to
//! acceptance. The snapshot carries only run-time state; the machine
//! definition (and its callbacks) is rebuilt by the host.
//!
//! Run with: cargo run --example checkpoint_resume

use mealy::builder::idle_state;
use mealy::{Lifecycle, MachineBuilder, Snapshot, StateBuilder, StateId};

#[derive(Clone, PartialEq, Debug)]
enum Signal {
    StageDone,
}

const EXTRACT: StateId = StateId(1);
const TRANSFORM: StateId = StateId(2);
const LOAD: StateId = StateId(3);
const DONE: StateId = StateId(4);

fn stage(id: StateId, label: &'static str, next: StateId) -> StateBuilder<u32, Signal, ()> {
    StateBuilder::new(id)
        .named(label)
        .on_poll(move |stages_run: &mut u32, _: &mut ()| {
            *stages_run += 1;
            println!("running stage: {label}");
            Some(Signal::StageDone)
        })
        .transition(Signal::StageDone, id.0, next)
}

fn build_machine() -> mealy::Machine<u32, Signal, ()> {
    MachineBuilder::new()
        .initial(EXTRACT)
        .state(stage(EXTRACT, "extract", TRANSFORM))
        .expect("extract builds")
        .state(stage(TRANSFORM, "transform", LOAD))
        .expect("transform builds")
        .state(stage(LOAD, "load", DONE))
        .expect("load builds")
        .state(idle_state(DONE))
        .expect("done builds")
        .final_state(DONE)
        .build()
        .expect("pipeline table validates")
}

fn main() {
    println!("=== Checkpoint and Resume ===\n");

    let machine = build_machine();
    let mut cursor = machine.initialize(());

    // Run the first stage only.
    assert_eq!(cursor.poll(), Lifecycle::StateChanged);

    let json = cursor
        .snapshot()
        .to_json()
        .expect("snapshot serializes");
    println!("\nsnapshot taken in state {}:", cursor.current_state());
    println!("{json}\n");
    drop(cursor);

    // Later, possibly in another process: rebuild the machine, decode the
    // snapshot, and pick up where the first cursor stopped.
    let snapshot: Snapshot<u32> = Snapshot::from_json(&json).expect("snapshot decodes");
    let mut resumed = machine.resume(snapshot, ()).expect("snapshot fits machine");

    loop {
        match resumed.poll() {
            Lifecycle::None | Lifecycle::StateChanged => {}
            Lifecycle::Accepted => {
                println!("\npipeline accepted after {} stages", resumed.register());
                break;
            }
            Lifecycle::Faulted => {
                eprintln!("\nfault: {}", resumed.fault().describe());
                break;
            }
        }
    }

    println!("states visited: {:?}", resumed.history().path());
    println!("\n=== Example Complete ===");
}
