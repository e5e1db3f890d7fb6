use std::fmt;

use crate::matcher;
use crate::state::{State, StateGraph, StateId};

/// A finished NFA: an immutable arena with a `Start` entry and an `End`
/// terminal reachable from it.
///
/// Matching only reads the graph, so one automaton can be shared between
/// threads and matched against many inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    graph: StateGraph,
}

impl Automaton {
    pub(crate) fn new(graph: StateGraph) -> Self {
        Self { graph }
    }

    pub fn entry(&self) -> StateId {
        StateId::START
    }

    pub fn terminal(&self) -> StateId {
        StateId::END
    }

    /// Number of states, including `Start` and `End`.
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    /// Always `false`: `Start` and `End` exist in every automaton.
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    pub fn state(&self, id: StateId) -> &State {
        self.graph.get(id)
    }

    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.graph.iter()
    }

    pub fn successors(&self, id: StateId) -> &[StateId] {
        self.graph.get(id).next_states()
    }

    /// Anchored, case-sensitive match of the whole `input`.
    pub fn is_match(&self, input: &str) -> bool {
        matcher::match_automaton(self, input)
    }

    pub(crate) fn graph(&self) -> &StateGraph {
        &self.graph
    }
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in self.graph.iter() {
            write!(f, "{state} ->")?;
            for next in state.next_states() {
                write!(f, " {next}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
