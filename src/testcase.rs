//! Synthetic best/worst/average-case input generation.
//!
//! One generated bundle drives both the differential correctness tests and
//! the benchmark harness. The three cases target distinct runtime regimes:
//!
//! - best: a repeated-symbol pattern planted at offset 0, so engines that
//!   exploit early matches get one immediately
//! - worst: the same repeated-symbol pattern against fully random text,
//!   maximizing near-miss backtracking with no guaranteed occurrence
//! - average: independently random pattern and text, where occurrences
//!   follow the expected small-probability distribution
//!
//! Generation takes an explicit seed so a given case bundle is reproducible
//! run to run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::MatchError;

/// Alphabet all generated patterns and texts draw from.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Symbol the best- and worst-case patterns repeat.
const FILL_SYMBOL: u8 = b'a';

/// One best/worst/average bundle of (pattern, text) pairs.
#[derive(Clone, Debug)]
pub struct TestCases {
    pub best_pattern: Vec<u8>,
    pub best_text: Vec<u8>,
    pub worst_pattern: Vec<u8>,
    pub worst_text: Vec<u8>,
    pub avg_pattern: Vec<u8>,
    pub avg_text: Vec<u8>,
}

impl TestCases {
    /// Generate a case bundle for the given sizes from `seed`.
    ///
    /// Identical arguments always produce identical bundles. Fails with
    /// [`MatchError::EmptyPattern`] for a zero pattern length and
    /// [`MatchError::PatternLongerThanText`] when the pattern would not fit
    /// in the text.
    pub fn generate(
        pattern_len: usize,
        text_len: usize,
        seed: u64,
    ) -> Result<Self, MatchError> {
        if pattern_len == 0 {
            return Err(MatchError::EmptyPattern);
        }
        if pattern_len > text_len {
            return Err(MatchError::PatternLongerThanText {
                pattern_len,
                text_len,
            });
        }

        let mut rng = StdRng::seed_from_u64(seed);

        let repeated = vec![FILL_SYMBOL; pattern_len];
        let mut best_text = repeated.clone();
        best_text.extend(random_symbols(&mut rng, text_len - pattern_len));

        Ok(Self {
            best_pattern: repeated.clone(),
            best_text,
            worst_pattern: repeated,
            worst_text: random_symbols(&mut rng, text_len),
            avg_pattern: random_symbols(&mut rng, pattern_len),
            avg_text: random_symbols(&mut rng, text_len),
        })
    }

    /// The three (pattern, text) pairs with a label each, for callers that
    /// iterate the cases uniformly.
    pub fn cases(&self) -> [(&'static str, &[u8], &[u8]); 3] {
        [
            ("best", &self.best_pattern, &self.best_text),
            ("worst", &self.worst_pattern, &self.worst_text),
            ("average", &self.avg_pattern, &self.avg_text),
        ]
    }
}

fn random_symbols(rng: &mut StdRng, len: usize) -> Vec<u8> {
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}
