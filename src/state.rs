use std::fmt;

/// Index of a state inside its automaton's arena.
///
/// Identities are local to one build: `Start` and `End` always take the
/// first two slots, everything else follows in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(pub(crate) usize);

impl StateId {
    pub const START: StateId = StateId(0);
    pub const END: StateId = StateId(1);

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a `Char` state consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Literal(char),
    Any,
}

impl Symbol {
    pub fn from_pattern_char(c: char) -> Self {
        if c == '.' {
            Symbol::Any
        } else {
            Symbol::Literal(c)
        }
    }

    pub fn matches(self, c: char) -> bool {
        match self {
            Symbol::Literal(expected) => expected == c,
            Symbol::Any => true,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Literal(c) => write!(f, "{c}"),
            Symbol::Any => f.write_str("."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    /// Consumes one input symbol.
    Char(Symbol),
    /// Epsilon branch point.
    Split,
    /// The entry split of a finished automaton.
    Start,
    /// Accepting sink, never has successors.
    End,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub(crate) id: StateId,
    pub(crate) kind: StateKind,
    pub(crate) next: Vec<StateId>,
}

impl State {
    pub fn id(&self) -> StateId {
        self.id
    }

    pub fn kind(&self) -> StateKind {
        self.kind
    }

    /// Outgoing edges in insertion order. Duplicates are allowed.
    pub fn next_states(&self) -> &[StateId] {
        &self.next
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (id, count) = (self.id, self.next.len());
        match self.kind {
            StateKind::Char(symbol) => {
                write!(f, "Char{{id: {id}, char: {symbol}, next_states: {count}}}")
            }
            StateKind::Split => write!(f, "Split{{id: {id}, next_states: {count}}}"),
            StateKind::Start => write!(f, "Start{{id: {id}, next_states: {count}}}"),
            StateKind::End => write!(f, "End{{id: {id}, next_states: {count}}}"),
        }
    }
}

/// Arena owning every state of one automaton. Edges are plain indices, so
/// loops and shared successors need no ownership tricks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateGraph {
    states: Vec<State>,
}

impl StateGraph {
    /// A fresh arena holding only the fixed `Start` and `End` states.
    pub fn new() -> Self {
        let mut graph = Self { states: Vec::new() };
        graph.push(StateKind::Start);
        graph.push(StateKind::End);
        graph
    }

    pub fn push(&mut self, kind: StateKind) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(State {
            id,
            kind,
            next: Vec::new(),
        });
        id
    }

    pub fn add_next(&mut self, from: StateId, to: StateId) {
        let state = &mut self.states[from.0];
        debug_assert!(state.kind != StateKind::End, "End has no successors");
        state.next.push(to);
    }

    pub fn get(&self, id: StateId) -> &State {
        &self.states[id.0]
    }

    /// Number of states, never less than two: `Start` and `End` are
    /// allocated up front.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`, see [`StateGraph::len`].
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &State> {
        self.states.iter()
    }

    /// Appends to `out` every state that could be active right after `from`
    /// consumes `c`. Epsilon states are walked with an explicit stack;
    /// `visited` guards against epsilon cycles and must have one slot per
    /// state.
    pub(crate) fn step(
        &self,
        from: StateId,
        c: char,
        visited: &mut [bool],
        out: &mut Vec<StateId>,
    ) {
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            let state = &self.states[id.0];
            match state.kind {
                StateKind::Char(symbol) => {
                    if symbol.matches(c) {
                        out.extend_from_slice(&state.next);
                    }
                }
                StateKind::End => {}
                StateKind::Split | StateKind::Start => {
                    if !std::mem::replace(&mut visited[id.0], true) {
                        stack.extend(state.next.iter().rev());
                    }
                }
            }
        }
    }

    /// Whether `End` is reachable from `from` without consuming input.
    pub(crate) fn reaches_end(&self, from: StateId, visited: &mut [bool]) -> bool {
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            let state = &self.states[id.0];
            match state.kind {
                StateKind::End => return true,
                StateKind::Char(_) => {}
                StateKind::Split | StateKind::Start => {
                    if !std::mem::replace(&mut visited[id.0], true) {
                        stack.extend(state.next.iter().rev());
                    }
                }
            }
        }
        false
    }
}

impl Default for StateGraph {
    fn default() -> Self {
        Self::new()
    }
}
