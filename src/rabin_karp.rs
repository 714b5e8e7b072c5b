//! Rabin-Karp matching with a true rolling hash.
//!
//! Each window's hash is derived from the previous window's in O(1): subtract
//! the outgoing byte's contribution, multiply by the base, add the incoming
//! byte. Two independent prime moduli are used so that a spurious collision
//! under one is vanishingly unlikely to also collide under the other; a hash
//! hit is still verified byte-by-byte before an offset is recorded, so a
//! collision only costs a rejected candidate, never a wrong answer.

use crate::MatchError;

/// First hash modulus. Large prime, `256 * MOD_A` fits comfortably in u64.
const MOD_A: u64 = 1_000_000_007;
/// Second hash modulus, independent of the first.
const MOD_B: u64 = 998_244_353;
/// Polynomial base; one position shift multiplies a byte's weight by this.
const BASE: u64 = 256;

/// Polynomial rolling hash of a byte window under one modulus.
struct RollingHash {
    modulus: u64,
    /// BASE^(m-1) mod modulus, the weight of the window's leading byte.
    lead_weight: u64,
    value: u64,
}

impl RollingHash {
    fn new(window: &[u8], modulus: u64) -> Self {
        let mut lead_weight = 1;
        for _ in 1..window.len() {
            lead_weight = lead_weight * BASE % modulus;
        }
        let mut value = 0;
        for &byte in window {
            value = (value * BASE + u64::from(byte)) % modulus;
        }
        Self {
            modulus,
            lead_weight,
            value,
        }
    }

    /// Shift the window one position: drop `outgoing`, append `incoming`.
    fn roll(&mut self, outgoing: u8, incoming: u8) {
        let dropped = u64::from(outgoing) * self.lead_weight % self.modulus;
        // + modulus keeps the subtraction from wrapping below zero.
        self.value = (self.value + self.modulus - dropped) % self.modulus;
        self.value = (self.value * BASE + u64::from(incoming)) % self.modulus;
    }
}

/// Find every occurrence of `pattern` in `text` via rolling-hash comparison.
///
/// Expected O(n+m); degrades to O(n*m) only under pathological collisions,
/// which the double modulus makes negligible in practice.
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

    let pattern_a = RollingHash::new(pattern, MOD_A);
    let pattern_b = RollingHash::new(pattern, MOD_B);
    let mut window_a = RollingHash::new(&text[..m], MOD_A);
    let mut window_b = RollingHash::new(&text[..m], MOD_B);

    for i in 0..=n - m {
        if i > 0 {
            window_a.roll(text[i - 1], text[i + m - 1]);
            window_b.roll(text[i - 1], text[i + m - 1]);
        }
        if window_a.value == pattern_a.value
            && window_b.value == pattern_b.value
            && &text[i..i + m] == pattern
        {
            occurrences.push(i);
        }
    }
    Ok(occurrences)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_match() {
        assert_eq!(find_all(b"abc", b"xxabcyy").unwrap(), vec![2]);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(find_all(b"xyz", b"abcabcabc").unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn test_overlapping() {
        assert_eq!(find_all(b"aa", b"aaaa").unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_single_byte_pattern() {
        assert_eq!(find_all(b"a", b"banana").unwrap(), vec![1, 3, 5]);
    }

    #[test]
    fn test_match_at_start_and_end() {
        assert_eq!(find_all(b"ab", b"abxxab").unwrap(), vec![0, 4]);
    }

    #[test]
    fn test_pattern_longer_than_text() {
        assert_eq!(find_all(b"abcdef", b"abc").unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn test_empty_pattern_rejected() {
        assert!(matches!(
            find_all(b"", b"abc"),
            Err(MatchError::EmptyPattern)
        ));
    }

    #[test]
    fn test_roll_matches_fresh_hash() {
        // Rolling across the text must reproduce the hash computed from
        // scratch for every window.
        let text = b"abracadabra";
        let m = 4;
        let mut rolled = RollingHash::new(&text[..m], MOD_A);
        for i in 1..=text.len() - m {
            rolled.roll(text[i - 1], text[i + m - 1]);
            let fresh = RollingHash::new(&text[i..i + m], MOD_A);
            assert_eq!(rolled.value, fresh.value, "window {}", i);
        }
    }

    #[test]
    fn test_high_bytes() {
        // Byte values near 255 exercise the modular arithmetic headroom.
        let pattern = [0xff, 0xfe];
        let text = [0xff, 0xfe, 0xff, 0xfe];
        assert_eq!(find_all(&pattern, &text).unwrap(), vec![0, 2]);
    }
}
