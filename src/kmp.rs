//! Knuth-Morris-Pratt matching.
//!
//! A prefix table (failure function) built once per pattern lets the matcher
//! fall back after a mismatch without re-reading text bytes, giving O(n+m)
//! worst case independent of the alphabet.

use crate::MatchError;

/// Compute the failure function for `pattern`.
///
/// `pi[q]` is the length of the longest proper prefix of `pattern[..=q]` that
/// is also a suffix of it, so `0 <= pi[q] <= q` for every position.
///
/// ```
/// let pi = strmatch::kmp::prefix_table(b"ababaca").unwrap();
/// assert_eq!(pi, vec![0, 0, 1, 2, 3, 0, 1]);
/// ```
pub fn prefix_table(pattern: &[u8]) -> Result<Vec<usize>, MatchError> {
    if pattern.is_empty() {
        return Err(MatchError::EmptyPattern);
    }
    let m = pattern.len();
    let mut pi = vec![0usize; m];
    let mut k = 0;
    for q in 1..m {
        while k > 0 && pattern[k] != pattern[q] {
            k = pi[k - 1];
        }
        if pattern[k] == pattern[q] {
            k += 1;
        }
        pi[q] = k;
    }
    Ok(pi)
}

/// Find every occurrence of `pattern` in `text` in O(n+m).
///
/// After a full match the matcher falls back through the prefix table rather
/// than restarting, so overlapping occurrences are all reported.
pub fn find_all(pattern: &[u8], text: &[u8]) -> Result<Vec<usize>, MatchError> {
    let pi = prefix_table(pattern)?;
    let m = pattern.len();
    let mut occurrences = Vec::new();

    let mut q = 0;
    for (i, &byte) in text.iter().enumerate() {
        while q > 0 && pattern[q] != byte {
            q = pi[q - 1];
        }
        if pattern[q] == byte {
            q += 1;
        }
        if q == m {
            occurrences.push(i + 1 - m);
            q = pi[q - 1];
        }
    }
    Ok(occurrences)
}
