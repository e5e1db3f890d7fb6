use log::debug;

use crate::automaton::Automaton;
use crate::error::ParseError;
use crate::fragment::Fragment;
use crate::state::{StateGraph, StateId, Symbol};

/// Pending operands for one nesting level: the top level or one `( ... )`.
#[derive(Debug, Default)]
struct Frame {
    /// Byte offset of the `(` that opened this frame, `None` at top level.
    open: Option<usize>,
    /// Concatenation of the current branch, minus its last operand.
    concat: Option<Fragment>,
    /// Most recent operand, still open to quantifiers. Kept apart from
    /// `concat` so `ab*` quantifies only `b`, not the whole run as `(ab)*`.
    operand: Option<Fragment>,
    /// Branches already closed by `|`.
    alternatives: Vec<Fragment>,
    /// Position of the last `|` seen in this frame.
    last_bar: Option<usize>,
}

impl Frame {
    fn group(open: usize) -> Self {
        Self {
            open: Some(open),
            ..Self::default()
        }
    }

    /// Append an operand to the current branch.
    fn push_operand(&mut self, graph: &mut StateGraph, fragment: Fragment) {
        self.seal(graph);
        self.operand = Some(fragment);
    }

    /// Fold the pending operand into the concatenation.
    fn seal(&mut self, graph: &mut StateGraph) {
        if let Some(operand) = self.operand.take() {
            self.concat = Some(match self.concat.take() {
                Some(concat) => concat.connect(graph, operand),
                None => operand,
            });
        }
    }

    fn take_branch(&mut self, graph: &mut StateGraph) -> Option<Fragment> {
        self.seal(graph);
        self.concat.take()
    }

    /// Close the current branch at a `|`.
    fn alternate(&mut self, graph: &mut StateGraph, pos: usize) -> Result<(), ParseError> {
        let branch = self
            .take_branch(graph)
            .ok_or(ParseError::TrailingAlternation { pos })?;
        self.alternatives.push(branch);
        self.last_bar = Some(pos);
        Ok(())
    }

    /// Collapse the frame into one fragment. `None` means the frame was
    /// empty and matches only the empty string.
    fn finish(mut self, graph: &mut StateGraph) -> Result<Option<Fragment>, ParseError> {
        match self.take_branch(graph) {
            Some(branch) => self.alternatives.push(branch),
            None => {
                if let Some(pos) = self.last_bar {
                    return Err(ParseError::TrailingAlternation { pos });
                }
            }
        }
        Ok(Fragment::alternation(graph, self.alternatives))
    }
}

/// Single left-to-right scan of a pattern into an [`Automaton`].
///
/// The parser owns its arena, so identities start from zero on every build
/// and a failed build leaves nothing behind.
pub struct Parser<'a> {
    pattern: &'a str,
    pos: usize,
    graph: StateGraph,
    root: Frame,
    groups: Vec<Frame>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given pattern.
    pub fn new(pattern: &'a str) -> Self {
        Self {
            pattern,
            pos: 0,
            graph: StateGraph::new(),
            root: Frame::default(),
            groups: Vec::new(),
        }
    }

    /// Advance the parser by one character and return it.
    fn advance(&mut self) -> Option<char> {
        let ch = self.pattern[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// The arena together with the innermost open frame.
    fn current(&mut self) -> (&mut StateGraph, &mut Frame) {
        let frame = self.groups.last_mut().unwrap_or(&mut self.root);
        (&mut self.graph, frame)
    }

    /// Build the automaton.
    ///
    /// Example:
    /// - Pattern: `ab`  → Start → Char(a) → Char(b) → End
    /// - Pattern: `a|b` → Start → Split ⇉ {Char(a), Char(b)} → Split → End
    pub fn parse(mut self) -> Result<Automaton, ParseError> {
        while let Some(ch) = self.advance() {
            let pos = self.pos - ch.len_utf8();
            match ch {
                '?' | '*' | '+' => self.quantify(ch, pos)?,
                '|' => {
                    let (graph, frame) = self.current();
                    frame.alternate(graph, pos)?;
                }
                '(' => self.groups.push(Frame::group(pos)),
                ')' => self.close_group(pos)?,
                _ => {
                    let (graph, frame) = self.current();
                    let literal = Fragment::literal(graph, Symbol::from_pattern_char(ch));
                    frame.push_operand(graph, literal);
                }
            }
        }

        if let Some(unclosed) = self.groups.last() {
            return Err(ParseError::UnbalancedGroup {
                pos: unclosed.open.unwrap_or(self.pos),
            });
        }

        let Self {
            pattern,
            mut graph,
            root,
            ..
        } = self;
        let start = Fragment {
            entry: StateId::START,
            exit: StateId::START,
        };
        let end = Fragment {
            entry: StateId::END,
            exit: StateId::END,
        };
        let body = match root.finish(&mut graph)? {
            Some(body) => start.connect(&mut graph, body),
            None => start,
        };
        body.connect(&mut graph, end);

        debug!("built {} states for pattern {:?}", graph.len(), pattern);
        Ok(Automaton::new(graph))
    }

    /// Apply `?`, `*` or `+` to the most recent operand of the current frame.
    fn quantify(&mut self, quantifier: char, pos: usize) -> Result<(), ParseError> {
        let (graph, frame) = self.current();
        let operand = frame
            .operand
            .take()
            .ok_or(ParseError::DanglingQuantifier { quantifier, pos })?;
        let quantified = match quantifier {
            '?' => Fragment::zero_or_one(graph, operand),
            '*' => Fragment::zero_or_more(graph, operand),
            _ => Fragment::one_or_more(graph, operand),
        };
        frame.operand = Some(quantified);
        Ok(())
    }

    /// Pop the innermost group and hand its fragment to the parent frame.
    fn close_group(&mut self, pos: usize) -> Result<(), ParseError> {
        let frame = self
            .groups
            .pop()
            .ok_or(ParseError::UnbalancedGroup { pos })?;
        let (graph, parent) = self.current();
        let fragment = match frame.finish(graph)? {
            Some(fragment) => fragment,
            None => Fragment::empty(graph),
        };
        parent.push_operand(graph, fragment);
        Ok(())
    }
}
