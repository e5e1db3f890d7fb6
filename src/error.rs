use thiserror::Error;

/// Errors reported while turning a pattern into an automaton.
///
/// Every variant carries `pos`, the byte offset into the pattern of the
/// offending character, or the pattern length when the problem is only
/// visible at the end.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// `?`, `*` or `+` with nothing before it in the current group.
    #[error("dangling quantifier '{quantifier}' at position {pos}")]
    DanglingQuantifier { quantifier: char, pos: usize },

    /// A `)` without an open group, or a `(` never closed.
    #[error("unbalanced group at position {pos}")]
    UnbalancedGroup { pos: usize },

    /// An alternation branch with no operand, e.g. `a|` or `(a|)`.
    #[error("empty alternation branch at position {pos}")]
    TrailingAlternation { pos: usize },
}

impl ParseError {
    pub fn pos(&self) -> usize {
        match *self {
            ParseError::DanglingQuantifier { pos, .. }
            | ParseError::UnbalancedGroup { pos }
            | ParseError::TrailingAlternation { pos } => pos,
        }
    }
}
