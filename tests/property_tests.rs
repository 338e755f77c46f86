//! Property-based tests for the automaton engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated transition tables and inputs.

use dfa_engine::core::{Outcome, Transition};
use dfa_engine::engine::{Automaton, BatchOptions};
use dfa_engine::report::{NoopReporter, Recorder};
use proptest::prelude::*;
use std::collections::HashSet;

type Edge = Transition<String, char>;

prop_compose! {
    fn arbitrary_state()(index in 0..4u8) -> String {
        format!("q{index}")
    }
}

prop_compose! {
    fn arbitrary_symbol()(symbol in prop::sample::select(vec!['0', '1', 'a'])) -> char {
        symbol
    }
}

prop_compose! {
    fn arbitrary_edge()(
        from in arbitrary_state(),
        to in arbitrary_state(),
        value in arbitrary_symbol(),
    ) -> Edge {
        Transition::new(from, to, value)
    }
}

prop_compose! {
    fn arbitrary_automaton()(
        edges in prop::collection::vec(arbitrary_edge(), 0..12),
        start in arbitrary_state(),
        accepted in prop::collection::vec(arbitrary_state(), 0..4),
    ) -> Automaton<String, char> {
        Automaton::new(edges, start, accepted)
    }
}

fn endpoints(edges: &[Edge]) -> HashSet<String> {
    edges
        .iter()
        .flat_map(|edge| [edge.from_state.clone(), edge.to_state.clone()])
        .collect()
}

proptest! {
    #[test]
    fn travel_is_deterministic(
        automaton in arbitrary_automaton(),
        input in prop::collection::vec(arbitrary_symbol(), 0..10),
    ) {
        let mut first = Recorder::new();
        let mut second = Recorder::new();

        let outcome1 = automaton.travel(input.iter().copied(), true, &mut first);
        let outcome2 = automaton.travel(input.iter().copied(), true, &mut second);

        prop_assert_eq!(outcome1, outcome2);
        prop_assert_eq!(first.events(), second.events());
    }

    #[test]
    fn insertion_is_idempotent(
        automaton in arbitrary_automaton(),
        edge in arbitrary_edge(),
    ) {
        let mut automaton = automaton;
        automaton.add_transition(edge.clone());
        let transitions = automaton.transitions().to_vec();
        let states = automaton.states().to_vec();

        let added = automaton.add_transition(edge);

        prop_assert!(!added);
        prop_assert_eq!(automaton.transitions(), transitions.as_slice());
        prop_assert_eq!(automaton.states(), states.as_slice());
    }

    #[test]
    fn states_track_transition_endpoints(
        edges in prop::collection::vec(arbitrary_edge(), 0..16),
    ) {
        let mut automaton: Automaton<String, char> =
            Automaton::new(Vec::new(), "q0", Vec::<String>::new());

        for edge in edges {
            automaton.add_transition(edge);
            let states: HashSet<String> = automaton.states().iter().cloned().collect();
            prop_assert_eq!(states.len(), automaton.states().len());
            prop_assert_eq!(states, endpoints(automaton.transitions()));
        }
    }

    #[test]
    fn incomplete_exactly_when_stalled(
        automaton in arbitrary_automaton(),
        input in "[01a-z]{0,12}",
    ) {
        let trace = automaton.trace(input.chars());
        let outcome = automaton.run(input.chars());

        prop_assert_eq!(trace.outcome(), outcome);
        prop_assert_eq!(outcome == Outcome::Incomplete, trace.stall().is_some());
        if let Some(state) = trace.final_state() {
            prop_assert_eq!(outcome.is_accepted(), automaton.is_accepting(state));
        }
    }

    #[test]
    fn empty_input_is_decided_by_start(automaton in arbitrary_automaton()) {
        let outcome = automaton.run("".chars());

        prop_assert_ne!(outcome, Outcome::Incomplete);
        prop_assert_eq!(outcome.is_accepted(), automaton.is_accepting(automaton.start_state()));
    }

    #[test]
    fn binary_sweep_conserves_inputs(
        automaton in arbitrary_automaton(),
        bits in 0..7u32,
        padding in any::<bool>(),
    ) {
        let options = BatchOptions::new(bits).padding(padding);
        let summary = automaton.test_all_binary(&options, NoopReporter).unwrap();

        prop_assert_eq!(summary.accepted + summary.rejected + summary.failed, 1u64 << bits);
        prop_assert_eq!(summary.decided(), summary.accepted + summary.rejected);
    }
}
