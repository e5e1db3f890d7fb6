use crate::state::{StateGraph, StateId, StateKind, Symbol};

/// A view of a sub-automaton inside a [`StateGraph`]: one entry state and one
/// exit state, with `exit` reachable from `entry`.
///
/// Fragments own nothing. The combinators below are the only code that adds
/// edges to the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub entry: StateId,
    pub exit: StateId,
}

impl Fragment {
    /// A single `Char` state serving as both entry and exit.
    pub fn literal(graph: &mut StateGraph, symbol: Symbol) -> Self {
        let id = graph.push(StateKind::Char(symbol));
        Self { entry: id, exit: id }
    }

    /// A single `Split` state, matching the empty string.
    pub fn empty(graph: &mut StateGraph) -> Self {
        let id = graph.push(StateKind::Split);
        Self { entry: id, exit: id }
    }

    /// Two fresh, unconnected `Split` states used as a container for `wrap`.
    pub fn split_pair(graph: &mut StateGraph) -> Self {
        let entry = graph.push(StateKind::Split);
        let exit = graph.push(StateKind::Split);
        Self { entry, exit }
    }

    /// Concatenation: `self.exit -> next.entry`.
    pub fn connect(self, graph: &mut StateGraph, next: Fragment) -> Self {
        graph.add_next(self.exit, next.entry);
        Self {
            entry: self.entry,
            exit: next.exit,
        }
    }

    /// `exit -> entry`, allowing repeated traversal.
    pub fn loop_back(self, graph: &mut StateGraph) -> Self {
        graph.add_next(self.exit, self.entry);
        self
    }

    /// `entry -> exit`, allowing zero traversals.
    pub fn bypass(self, graph: &mut StateGraph) -> Self {
        graph.add_next(self.entry, self.exit);
        self
    }

    /// Splices `inner` in parallel between this fragment's entry and exit.
    pub fn wrap(self, graph: &mut StateGraph, inner: Fragment) -> Self {
        graph.add_next(self.entry, inner.entry);
        graph.add_next(inner.exit, self.exit);
        self
    }

    /// `inner?`
    pub fn zero_or_one(graph: &mut StateGraph, inner: Fragment) -> Self {
        Self::split_pair(graph).wrap(graph, inner).bypass(graph)
    }

    /// `inner*`
    pub fn zero_or_more(graph: &mut StateGraph, inner: Fragment) -> Self {
        Self::split_pair(graph)
            .wrap(graph, inner)
            .bypass(graph)
            .loop_back(graph)
    }

    /// `inner+`. No container: at least one traversal is mandatory.
    pub fn one_or_more(graph: &mut StateGraph, inner: Fragment) -> Self {
        inner.loop_back(graph)
    }

    /// N-ary alternation. A single branch is returned as is.
    pub fn alternation(graph: &mut StateGraph, branches: Vec<Fragment>) -> Option<Self> {
        match branches.len() {
            0 => None,
            1 => branches.into_iter().next(),
            _ => {
                let container = Self::split_pair(graph);
                Some(
                    branches
                        .into_iter()
                        .fold(container, |container, branch| container.wrap(graph, branch)),
                )
            }
        }
    }
}
