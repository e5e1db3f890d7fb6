use quickcheck::{QuickCheck, TestResult};
use thompson_grep::{build, is_match, ParseError, StateKind};

const METACHARACTERS: &[char] = &['?', '*', '+', '|', '(', ')', '.'];

fn matches(pattern: &str, input: &str) -> bool {
    is_match(pattern, input).unwrap()
}

#[test]
fn single_literal_laws() {
    fn prop(c: char) -> TestResult {
        if METACHARACTERS.contains(&c) {
            return TestResult::discard();
        }
        let once = c.to_string();
        let twice = format!("{c}{c}");
        TestResult::from_bool(
            matches(&once, &once) && !matches(&once, "") && !matches(&once, &twice),
        )
    }
    QuickCheck::new().quickcheck(prop as fn(char) -> TestResult);
}

#[test]
fn wildcard_matches_any_single_symbol() {
    fn prop(c: char) -> bool {
        matches(".", &c.to_string()) && !matches(".", &format!("{c}{c}"))
    }
    QuickCheck::new().quickcheck(prop as fn(char) -> bool);
    assert!(!matches(".", ""));
}

#[test]
fn builds_are_deterministic() {
    fn prop(letters: Vec<u8>) -> bool {
        // Map arbitrary bytes onto a small well-formed alphabet.
        let pattern: String = letters
            .iter()
            .map(|b| match b % 6 {
                0 => "a",
                1 => "b",
                2 => "c*",
                3 => "(a|b)",
                4 => "d+",
                _ => ".?",
            })
            .collect();
        let first = build(&pattern).unwrap();
        build("(x|y)*z").unwrap();
        first == build(&pattern).unwrap()
    }
    QuickCheck::new().quickcheck(prop as fn(Vec<u8>) -> bool);
}

#[test]
fn concatenation() {
    assert!(matches("ab", "ab"));
    assert!(!matches("ab", "a"));
    assert!(!matches("ab", "abc"));
    assert!(!matches("ab", "ba"));
}

#[test]
fn alternation() {
    assert!(matches("a|b", "a"));
    assert!(matches("a|b", "b"));
    assert!(!matches("a|b", "c"));
    assert!(!matches("a|b", "ab"));
    assert!(matches("a|(bc)", "bc"));
    assert!(matches("(a|b)|(ab)|c", "ab"));
}

#[test]
fn quantifiers() {
    assert!(matches("a*", ""));
    assert!(matches("a*", "aaaa"));
    assert!(matches("a+", "a"));
    assert!(!matches("a+", ""));
    assert!(matches("a+", "aaa"));
    assert!(!matches("a+", "ab"));
    assert!(matches("a?", ""));
    assert!(!matches("a?", "aa"));
    assert!(matches("a+a+", "aaa"));
    assert!(matches("a*a+", "aaa"));
    assert!(!matches("a+a+", "a"));
}

#[test]
fn quantified_groups() {
    assert!(matches("(a|b)+", "abba"));
    assert!(!matches("(a|b)+", ""));
    assert!(matches("(a|b)*|(ab)|c", ""));
    assert!(matches("(a|b)?|(ab)|c", "c"));
    assert!(matches("(a|b)+?|(ab)|c", ""));
    assert!(!matches("(a|b)?", "ab"));
}

#[test]
fn empty_pattern() {
    assert!(matches("", ""));
    assert!(!matches("", "a"));
}

#[test]
fn case_sensitive() {
    assert!(!matches("a", "A"));
    assert!(matches("A.c", "Abc"));
}

#[test]
fn composite() {
    let pattern = "(ca*t|lion)+.*(dog)?";
    assert!(matches(pattern, "catsdog"));
    assert!(matches(pattern, "caaatlion"));
    assert!(matches(pattern, "ct"));
    assert!(matches(pattern, "lion and more"));
    assert!(!matches(pattern, "dog"));
    assert!(!matches(pattern, ""));
}

#[test]
fn non_ascii_symbols() {
    assert!(matches("é+", "ééé"));
    assert!(matches("..", "日本"));
    assert!(!matches(".", "日本"));
}

#[test]
fn automaton_is_reusable() {
    let automaton = build("x(yz)*").unwrap();
    assert!(automaton.is_match("x"));
    assert!(automaton.is_match("xyzyz"));
    assert!(!automaton.is_match("xy"));
    assert_eq!(automaton.state(automaton.entry()).kind(), StateKind::Start);
    assert_eq!(automaton.state(automaton.terminal()).kind(), StateKind::End);
    assert!(automaton.successors(automaton.terminal()).is_empty());
}

#[test]
fn automaton_is_shareable_across_threads() {
    let automaton = build("(ab|cd)+").unwrap();
    std::thread::scope(|scope| {
        for input in ["ab", "cdab", "abc"] {
            let automaton = &automaton;
            scope.spawn(move || {
                assert_eq!(automaton.is_match(input), input != "abc");
            });
        }
    });
}

#[test]
fn malformed_patterns() {
    let err = |pattern| build(pattern).unwrap_err();
    assert!(matches!(err("*"), ParseError::DanglingQuantifier { pos: 0, .. }));
    assert_eq!(err("(a"), ParseError::UnbalancedGroup { pos: 0 });
    assert_eq!(err("a)"), ParseError::UnbalancedGroup { pos: 1 });
    assert_eq!(err("a|"), ParseError::TrailingAlternation { pos: 1 });
    assert_eq!(err("(a|)b"), ParseError::TrailingAlternation { pos: 2 });

    let dangling = ParseError::DanglingQuantifier {
        quantifier: '+',
        pos: 0,
    };
    assert_eq!(is_match("+", "a"), Err(dangling));
}

#[test]
fn error_messages() {
    assert_eq!(
        build("a(|b)").unwrap_err().to_string(),
        "empty alternation branch at position 2"
    );
    let message = build("?").unwrap_err().to_string();
    assert_eq!(message, "dangling quantifier '?' at position 0");
    assert_eq!(build("((a)").unwrap_err().pos(), 0);
}

#[test]
fn display_lists_every_state() {
    let automaton = build("a|b").unwrap();
    let text = automaton.to_string();
    assert_eq!(text.lines().count(), automaton.len());
    assert!(text.starts_with("Start{id: 0, next_states: 1} -> 4"));
    assert!(text.contains("End{id: 1, next_states: 0} ->"));
    assert!(text.contains("Char{id: 2, char: a, next_states: 1} -> 5"));
}

#[test]
fn long_optional_chain() {
    let pattern = "a?".repeat(100_000);
    assert!(matches(&pattern, ""));
    assert!(matches(&pattern, "a"));
    assert!(matches(&pattern, "aaa"));
    assert!(!matches(&pattern, "b"));
}

#[test]
fn long_star_and_empty_group_chains() {
    assert!(matches(&"a*".repeat(50_000), "aa"));
    assert!(matches(&"()".repeat(50_000), ""));
    assert!(!matches(&"()".repeat(50_000), "a"));
}

#[test]
fn deeply_nested_groups() {
    let depth = 10_000;
    let pattern = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));
    assert!(matches(&pattern, "a"));
    assert!(!matches(&pattern, "aa"));

    let pattern = format!("{}a{}", "(".repeat(depth), ")?".repeat(depth));
    assert!(matches(&pattern, ""));
    assert!(matches(&pattern, "a"));
}
