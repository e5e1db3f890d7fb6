use log::trace;

use crate::automaton::Automaton;
use crate::state::{StateGraph, StateId};

/// One simulation step: every state reachable from `active` by consuming `c`,
/// sorted and deduplicated.
fn advance(graph: &StateGraph, active: &[StateId], c: char, visited: &mut [bool]) -> Vec<StateId> {
    let mut next = Vec::new();
    visited.fill(false);
    for &state in active {
        graph.step(state, c, visited, &mut next);
    }
    next.sort_unstable();
    next.dedup();
    next
}

// Breadth-first simulation: `active` holds every state the automaton could be
// positioned at after the symbols consumed so far.
pub fn match_automaton(automaton: &Automaton, input: &str) -> bool {
    let graph = automaton.graph();
    let mut visited = vec![false; graph.len()];
    let mut active = vec![automaton.entry()];

    for c in input.chars() {
        if active.is_empty() {
            return false;
        }
        active = advance(graph, &active, c, &mut visited);
        trace!("after {c:?}: {} active states", active.len());
    }

    visited.fill(false);
    active.iter().any(|&state| graph.reaches_end(state, &mut visited))
}

/// States active after each input symbol, starting with the entry set.
/// Once the set is empty it stays empty, so the history stops growing early.
pub fn trace_states(automaton: &Automaton, input: &str) -> Vec<Vec<StateId>> {
    let graph = automaton.graph();
    let mut visited = vec![false; graph.len()];
    let mut active = vec![automaton.entry()];
    let mut history = Vec::new();

    for c in input.chars() {
        if active.is_empty() {
            break;
        }
        let next = advance(graph, &active, c, &mut visited);
        history.push(std::mem::replace(&mut active, next));
    }
    history.push(active);
    history
}
