use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use thompson_grep::{build, matcher, Automaton};

const DEMO_PATTERNS: &[&str] = &[
    "a",
    "ab",
    "a|b",
    "a|(bc)",
    "(a)",
    "(a|b)",
    "(a|b)|(ab)",
    "(a|b)|(ab)|c",
    "(a|b)+|(ab)|c",
    "(a|b)+?|(ab)|c",
    "(a|b)*|(ab)|c",
    "(a|b)?|(ab)|c",
    "(ca*t|lion)+.*(dog)?",
];

const DEMO_MATCHES: &[(&str, &str)] = &[
    ("a", "a"),
    ("a", "ab"),
    ("ab", "ab"),
    ("a+", "ab"),
    ("a+", "aa"),
    ("a+", "aaa"),
    ("a+a+", "aaa"),
    ("a*a+", "aaa"),
    ("(ca*t|lion)+.*(dog)?", "catsdog"),
];

/// Match one line of stdin against a pattern, anchored at both ends.
#[derive(Parser, Debug)]
#[command(name = "thompson-grep")]
struct Args {
    /// Pattern to match against the input line
    #[arg(short = 'E', value_name = "PATTERN", required_unless_present = "demo")]
    pattern: Option<String>,

    /// Run the built-in sample patterns instead of reading stdin
    #[arg(long)]
    demo: bool,

    /// Print the automaton and the active states after each symbol
    #[arg(short, long)]
    verbose: bool,
}

fn run_demo() -> Result<()> {
    let mut last = None;
    for pattern in DEMO_PATTERNS {
        let automaton = build(pattern).with_context(|| format!("building {pattern:?}"))?;
        last = Some(automaton);
    }
    if let Some(automaton) = last {
        print!("{automaton}");
    }
    for (pattern, input) in DEMO_MATCHES {
        let matched = build(pattern)?.is_match(input);
        println!("{pattern} {input} -> {matched}");
    }
    Ok(())
}

fn print_trace(automaton: &Automaton, input: &str) {
    print!("{automaton}");
    for (step, states) in matcher::trace_states(automaton, input).iter().enumerate() {
        let ids: Vec<String> = states.iter().map(ToString::to_string).collect();
        println!("{step}: [{}]", ids.join(", "));
    }
}

// Usage: echo <input_text> | thompson-grep -E <pattern>
fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.demo {
        return run_demo();
    }
    let Some(pattern) = args.pattern else {
        return Ok(());
    };

    let automaton = match build(&pattern) {
        Ok(automaton) => automaton,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    let mut input_line = String::new();
    io::stdin()
        .read_line(&mut input_line)
        .context("failed to read input line")?;
    let input = input_line.trim_end_matches('\n').trim_end_matches('\r');

    if args.verbose {
        print_trace(&automaton, input);
    }

    if automaton.is_match(input) {
        process::exit(0)
    } else {
        process::exit(1)
    }
}
