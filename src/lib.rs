//! strmatch: exact single-pattern string matching engines
//!
//! Four independent engines share one contract: given a pattern and a text
//! (byte slices), return every zero-based offset where the pattern occurs as
//! a contiguous substring, in increasing order, overlaps included.
//!
//! - [`naive`]: window scan, no preprocessing, O(n*m) worst case
//! - [`rabin_karp`]: double rolling hash, expected O(n+m)
//! - [`kmp`]: prefix-function matcher, O(n+m) worst case
//! - [`automaton`]: DFA over a declared alphabet, O(n) after table build
//!
//! ```
//! use strmatch::{kmp, naive};
//!
//! let hits = kmp::find_all(b"ana", b"banana").unwrap();
//! assert_eq!(hits, vec![1, 3]);
//! assert_eq!(naive::find_all(b"ana", b"banana").unwrap(), hits);
//! ```
//!
//! Every engine is a pure function over immutable inputs; calls are
//! independent and safe to issue from any number of threads. A built
//! [`automaton::TransitionTable`] is never mutated after construction and can
//! be shared across threads and reused against many texts:
//!
//! ```
//! use strmatch::automaton::TransitionTable;
//!
//! let table = TransitionTable::build(b"ab", b"ab").unwrap();
//! assert_eq!(table.find_all(b"abab").unwrap(), vec![0, 2]);
//! assert!(table.find_all(b"bbba").unwrap().is_empty());
//! ```
//!
//! [`testcase::TestCases`] generates seeded best/worst/average-case inputs;
//! the criterion harness in `benches/engines.rs` times the engines over them
//! and renders the comparative runtime-versus-text-length charts.

pub mod automaton;
pub mod kmp;
pub mod naive;
pub mod rabin_karp;
pub mod testcase;

use std::fmt;

pub use testcase::TestCases;

/// Errors a match or generation call can fail with.
///
/// A failing call returns no occurrence list at all; an empty `Vec` is only
/// ever the genuine "no occurrences" answer for well-formed inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// The pattern has length zero.
    EmptyPattern,
    /// Test-case generation was asked for a pattern that cannot fit in the
    /// text.
    PatternLongerThanText {
        pattern_len: usize,
        text_len: usize,
    },
    /// A symbol fell outside the alphabet declared to the automaton engine.
    /// `position` indexes the offending byte in the text (or, at build time,
    /// in the pattern).
    AlphabetViolation { symbol: u8, position: usize },
    /// The automaton engine was given an empty alphabet.
    EmptyAlphabet,
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::EmptyPattern => write!(f, "pattern must not be empty"),
            MatchError::PatternLongerThanText {
                pattern_len,
                text_len,
            } => write!(
                f,
                "pattern length {} exceeds text length {}",
                pattern_len, text_len
            ),
            MatchError::AlphabetViolation { symbol, position } => write!(
                f,
                "symbol 0x{:02x} at position {} is outside the declared alphabet",
                symbol, position
            ),
            MatchError::EmptyAlphabet => write!(f, "alphabet must not be empty"),
        }
    }
}

impl std::error::Error for MatchError {}

/// Uniform handle over the four engines, for callers that select an
/// algorithm at runtime (the benchmark harness, differential tests).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Engine {
    Naive,
    RabinKarp,
    Kmp,
    FiniteAutomaton,
}

impl Engine {
    /// All four engines, in the order the benchmark reports use.
    pub const ALL: [Engine; 4] = [
        Engine::Naive,
        Engine::RabinKarp,
        Engine::Kmp,
        Engine::FiniteAutomaton,
    ];

    /// Short stable name, used as a benchmark label.
    pub fn name(&self) -> &'static str {
        match self {
            Engine::Naive => "naive",
            Engine::RabinKarp => "rabin_karp",
            Engine::Kmp => "kmp",
            Engine::FiniteAutomaton => "finite_automaton",
        }
    }

    /// Run this engine over `pattern` and `text`.
    ///
    /// For [`Engine::FiniteAutomaton`] the alphabet is derived here from the
    /// distinct bytes of pattern and text, so the call cannot violate the
    /// alphabet contract. Callers wanting an explicit alphabet (or table
    /// reuse) use [`automaton`] directly.
    pub fn find_all(&self, pattern: &[u8], text: &[u8]) -> Result<Vec<usize>, MatchError> {
        match self {
            Engine::Naive => naive::find_all(pattern, text),
            Engine::RabinKarp => rabin_karp::find_all(pattern, text),
            Engine::Kmp => kmp::find_all(pattern, text),
            Engine::FiniteAutomaton => {
                let alphabet = derive_alphabet(pattern, text);
                automaton::find_all(pattern, text, &alphabet)
            }
        }
    }
}

/// The distinct bytes occurring in `pattern` or `text`.
fn derive_alphabet(pattern: &[u8], text: &[u8]) -> Vec<u8> {
    let mut seen = [false; 256];
    let mut alphabet = Vec::new();
    for &byte in pattern.iter().chain(text) {
        if !seen[byte as usize] {
            seen[byte as usize] = true;
            alphabet.push(byte);
        }
    }
    alphabet
}
