//! Finite-automaton matching.
//!
//! The pattern is compiled into a dense DFA transition table over a declared
//! alphabet: one row per state `0..=m`, one column per alphabet symbol, where
//! state `q` means "the last `q` text bytes read are a prefix of the pattern"
//! and state `m` is the accepting state. Matching is then a single O(n) walk
//! of the text with no backtracking.
//!
//! Construction uses the direct formulation: for each `(state, symbol)` pair,
//! scan down from the longest candidate prefix until one is a suffix of the
//! consumed input. That is O(m^3 * |alphabet|), fine for the short patterns
//! this crate targets; the KMP failure function would bring it down to
//! O(m * |alphabet|) without changing the table produced.

use rustc_hash::FxHashMap;

use crate::MatchError;

/// A compiled DFA transition table for one pattern over one alphabet.
///
/// Immutable once built; a single table can be shared across threads and
/// reused against any number of texts without repeating construction.
#[derive(Debug)]
pub struct TransitionTable {
    /// Maps each alphabet symbol to its column in `transitions`.
    columns: FxHashMap<u8, usize>,
    alphabet_len: usize,
    /// Row-major `(m + 1) * alphabet_len` next-state entries.
    transitions: Vec<usize>,
    /// The accepting state, equal to the pattern length.
    accepting: usize,
}

impl TransitionTable {
    /// Compile `pattern` into a transition table over `alphabet`.
    ///
    /// Duplicate alphabet symbols are collapsed. Every pattern byte must be
    /// covered by the alphabet; otherwise the accepting state would be
    /// unreachable and the table useless, so this fails with
    /// [`MatchError::AlphabetViolation`] instead.
    pub fn build(pattern: &[u8], alphabet: &[u8]) -> Result<Self, MatchError> {
        if pattern.is_empty() {
            return Err(MatchError::EmptyPattern);
        }
        if alphabet.is_empty() {
            return Err(MatchError::EmptyAlphabet);
        }

        let mut columns = FxHashMap::default();
        for &symbol in alphabet {
            let next_column = columns.len();
            columns.entry(symbol).or_insert(next_column);
        }
        for (position, &symbol) in pattern.iter().enumerate() {
            if !columns.contains_key(&symbol) {
                return Err(MatchError::AlphabetViolation { symbol, position });
            }
        }

        let m = pattern.len();
        let alphabet_len = columns.len();
        let mut transitions = vec![0usize; (m + 1) * alphabet_len];
        for q in 0..=m {
            for (&symbol, &column) in &columns {
                let mut k = m.min(q + 1);
                while k > 0 && !prefix_is_suffix(&pattern[..k], &pattern[..q], symbol) {
                    k -= 1;
                }
                transitions[q * alphabet_len + column] = k;
            }
        }

        Ok(Self {
            columns,
            alphabet_len,
            transitions,
            accepting: m,
        })
    }

    /// Find every occurrence of the compiled pattern in `text`.
    ///
    /// A text byte outside the declared alphabet is a caller contract
    /// violation and fails with [`MatchError::AlphabetViolation`]; it is not
    /// silently treated as a non-match.
    pub fn find_all(&self, text: &[u8]) -> Result<Vec<usize>, MatchError> {
        let mut occurrences = Vec::new();
        let mut q = 0;
        for (i, &symbol) in text.iter().enumerate() {
            let column = *self
                .columns
                .get(&symbol)
                .ok_or(MatchError::AlphabetViolation {
                    symbol,
                    position: i,
                })?;
            q = self.transitions[q * self.alphabet_len + column];
            if q == self.accepting {
                occurrences.push(i + 1 - self.accepting);
            }
        }
        Ok(occurrences)
    }

    /// Number of states, `m + 1`.
    pub fn state_count(&self) -> usize {
        self.accepting + 1
    }

    /// Number of distinct alphabet symbols.
    pub fn alphabet_len(&self) -> usize {
        self.alphabet_len
    }

    /// Next state for `(state, symbol)`, or `None` for a symbol outside the
    /// alphabet.
    pub fn next_state(&self, state: usize, symbol: u8) -> Option<usize> {
        let column = *self.columns.get(&symbol)?;
        Some(self.transitions[state * self.alphabet_len + column])
    }
}

/// Is `prefix` a suffix of `stem` followed by `last`? `prefix` is non-empty
/// and at most one longer than `stem`.
fn prefix_is_suffix(prefix: &[u8], stem: &[u8], last: u8) -> bool {
    let k = prefix.len();
    if k > stem.len() + 1 {
        return false;
    }
    if prefix[k - 1] != last {
        return false;
    }
    let head = &prefix[..k - 1];
    head == &stem[stem.len() - head.len()..]
}

/// Build a table for `pattern` over `alphabet` and run it over `text`.
///
/// One-shot convenience; callers matching many texts against one pattern
/// should build a [`TransitionTable`] once and reuse it, since construction
/// dominates the O(n) scan for short texts.
pub fn find_all(pattern: &[u8], text: &[u8], alphabet: &[u8]) -> Result<Vec<usize>, MatchError> {
    TransitionTable::build(pattern, alphabet)?.find_all(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const AB: &[u8] = b"ab";
    const ABC: &[u8] = b"abc";

    #[test]
    fn test_basic_match() {
        assert_eq!(find_all(b"abc", b"xxabcyy", b"abcxy").unwrap(), vec![2]);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(
            find_all(b"xyz", b"abcabcabc", b"abcxyz").unwrap(),
            Vec::<usize>::new()
        );
    }

    #[test]
    fn test_overlapping() {
        assert_eq!(find_all(b"aa", b"aaaa", AB).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_single_byte_pattern() {
        assert_eq!(find_all(b"a", b"banana", b"ban").unwrap(), vec![1, 3, 5]);
    }

    #[test]
    fn test_table_totality() {
        // Every (state, symbol) pair has an entry in 0..=m.
        let pattern = b"ababaca";
        let table = TransitionTable::build(pattern, ABC).unwrap();
        assert_eq!(table.state_count(), pattern.len() + 1);
        assert_eq!(table.alphabet_len(), ABC.len());
        for q in 0..table.state_count() {
            for &symbol in ABC {
                let next = table.next_state(q, symbol).unwrap();
                assert!(next <= pattern.len());
            }
        }
    }

    #[test]
    fn test_transition_semantics() {
        // transition(q, c) is the length of the longest pattern prefix that
        // is a suffix of pattern[..q] + c. Spot-check "ab" over {a, b}.
        let table = TransitionTable::build(b"ab", AB).unwrap();
        assert_eq!(table.next_state(0, b'a'), Some(1));
        assert_eq!(table.next_state(0, b'b'), Some(0));
        assert_eq!(table.next_state(1, b'a'), Some(1));
        assert_eq!(table.next_state(1, b'b'), Some(2));
        assert_eq!(table.next_state(2, b'a'), Some(1));
        assert_eq!(table.next_state(2, b'b'), Some(0));
    }

    #[test]
    fn test_table_reuse_across_texts() {
        let table = TransitionTable::build(b"ab", AB).unwrap();
        assert_eq!(table.find_all(b"abab").unwrap(), vec![0, 2]);
        assert_eq!(table.find_all(b"bbbb").unwrap(), Vec::<usize>::new());
        assert_eq!(table.find_all(b"aab").unwrap(), vec![1]);
    }

    #[test]
    fn test_duplicate_alphabet_symbols_collapsed() {
        let table = TransitionTable::build(b"ab", b"aabba").unwrap();
        assert_eq!(table.alphabet_len(), 2);
        assert_eq!(table.find_all(b"abab").unwrap(), vec![0, 2]);
    }

    #[test]
    fn test_out_of_alphabet_text_symbol() {
        let table = TransitionTable::build(b"ab", AB).unwrap();
        let err = table.find_all(b"abz").unwrap_err();
        assert!(matches!(
            err,
            MatchError::AlphabetViolation {
                symbol: b'z',
                position: 2
            }
        ));
    }

    #[test]
    fn test_pattern_not_covered_by_alphabet() {
        let err = TransitionTable::build(b"abz", AB).unwrap_err();
        assert!(matches!(
            err,
            MatchError::AlphabetViolation {
                symbol: b'z',
                position: 2
            }
        ));
    }

    #[test]
    fn test_table_is_debug() {
        // unwrap_err on build results needs the table to be Debug.
        fn assert_debug<T: std::fmt::Debug>() {}
        assert_debug::<TransitionTable>();
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        assert!(matches!(
            TransitionTable::build(b"a", b""),
            Err(MatchError::EmptyAlphabet)
        ));
    }

    #[test]
    fn test_empty_pattern_rejected() {
        assert!(matches!(
            TransitionTable::build(b"", ABC),
            Err(MatchError::EmptyPattern)
        ));
    }
}
