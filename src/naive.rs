//! Naive window-scan matching.
//!
//! Compares the pattern against every candidate window of the text, bailing
//! out of a window at the first mismatching byte. No preprocessing, O(n*m)
//! worst case, and the baseline the other engines are measured against.

use crate::MatchError;

/// Find every occurrence of `pattern` in `text` by direct comparison.
///
/// Returns the zero-based start offsets in increasing order. Overlapping
/// occurrences are all reported.
///
/// ```
/// let hits = strmatch::naive::find_all(b"ana", b"banana").unwrap();
/// assert_eq!(hits, vec![1, 3]);
/// ```
pub fn find_all(pattern: &[u8], text: &[u8]) -> Result<Vec<usize>, MatchError> {
    if pattern.is_empty() {
        return Err(MatchError::EmptyPattern);
    }
    let m = pattern.len();
    let n = text.len();
    let mut occurrences = Vec::new();
    if m > n {
        return Ok(occurrences);
    }

    for i in 0..=n - m {
        let mut j = 0;
        while j < m && text[i + j] == pattern[j] {
            j += 1;
        }
        if j == m {
            occurrences.push(i);
        }
    }
    Ok(occurrences)
}
