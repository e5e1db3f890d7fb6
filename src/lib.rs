pub mod automaton;
pub mod error;
pub mod fragment;
pub mod matcher;
pub mod parser;
pub mod state;

pub use automaton::Automaton;
pub use error::ParseError;
pub use state::{State, StateId, StateKind, Symbol};

/// Compile `pattern` into an automaton.
pub fn build(pattern: &str) -> Result<Automaton, ParseError> {
    parser::Parser::new(pattern).parse()
}

/// Whether the whole of `input` matches `pattern`.
pub fn is_match(pattern: &str, input: &str) -> Result<bool, ParseError> {
    Ok(build(pattern)?.is_match(input))
}
