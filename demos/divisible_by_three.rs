//! Divisible by Three
//!
//! This example sweeps every 4-bit binary number through an automaton that
//! tracks the remainder mod 3, printing each input and its outcome.
//!
//! Key concepts:
//! - Building an automaton from a transition table
//! - A console reporter implementing only the events it needs
//! - Structured logging through `TracingReporter`
//!
//! Run with: cargo run --example divisible_by_three
//! Set RUST_LOG=dfa_engine=debug to see the tracing events.

use dfa_engine::core::{Outcome, State, Symbol};
use dfa_engine::engine::{BatchOptions, BatchSummary};
use dfa_engine::report::{Reporter, TracingReporter};
use dfa_engine::{transitions, AutomatonBuilder};
use tracing_subscriber::EnvFilter;

/// Prints one line per input, plus steps when they are enabled.
struct ConsoleReporter {
    width: usize,
}

impl<S: State, A: Symbol> Reporter<S, A> for ConsoleReporter {
    fn step(&mut self, index: usize, from: &S, symbol: &A, to: Option<&S>) {
        match to {
            Some(to) => println!("  Step {index}: {from} --[{symbol}]--> {to}"),
            None => println!("  Step {index}: {from} --[{symbol}]--> (none)"),
        }
    }

    fn stalled(&mut self, state: &S, symbol: &A) {
        println!("  State {state} has no outgoing edge with value {symbol}");
    }

    fn input_started(&mut self, input: &str) {
        print!("{:<width$}", format!("{input}:"), width = self.width);
    }

    fn input_finished(&mut self, _input: &str, outcome: Outcome) {
        println!("{outcome}");
    }

    fn summary(&mut self, summary: &BatchSummary) {
        println!("\nOverall Results: {}/{} accepted", summary.accepted, summary.decided());
        println!("{} inputs failed", summary.failed);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Divisible by Three Example ===\n");

    let automaton = AutomatonBuilder::<String, char>::new()
        .start("S0")
        .accept("S0")
        .transitions(transitions![
            "S0", '0' => "S0";
            "S0", '1' => "S1";
            "S1", '0' => "S2";
            "S1", '1' => "S0";
            "S2", '0' => "S1";
            "S2", '1' => "S2";
        ])
        .build()
        .expect("mod-3 table has a valid start state");

    println!("{automaton}");

    let options = BatchOptions::new(4);
    let mut console = ConsoleReporter {
        width: options.bits as usize + 2,
    };
    let summary = automaton
        .test_all_binary(&options, &mut console)
        .expect("4-bit sweep is within range");
    println!("Sweep took {:?}", summary.elapsed());

    println!("\n=== Tracing a single input ===\n");
    let outcome = automaton.travel("1001".chars(), true, TracingReporter);
    println!("1001 -> {outcome}");

    let trace = automaton.trace("1001".chars());
    let path: Vec<String> = trace.path().into_iter().cloned().collect();
    println!("Path: {}", path.join(" -> "));

    println!("\n=== Example Complete ===");
}
