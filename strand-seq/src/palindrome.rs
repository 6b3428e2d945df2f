//! Reverse-palindrome scanning (restriction-site discovery).
//!
//! A DNA window is a reverse palindrome when it equals its own reverse
//! complement, e.g. `GAATTC`. Such windows always have even length.

use strand_core::{Result, StrandError};

use crate::alphabet::{Alphabet, DnaAlphabet};
use crate::complement::complement;

/// Shortest window reported by default.
pub const DEFAULT_MIN_LEN: usize = 4;
/// Longest window reported by default.
pub const DEFAULT_MAX_LEN: usize = 12;

/// A reverse palindrome located in a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palindrome {
    /// Zero-based start position.
    pub position: usize,
    /// Window length in bases.
    pub length: usize,
}

/// Whether a DNA window equals its reverse complement.
///
/// The empty window is trivially a reverse palindrome.
///
/// # Errors
///
/// `InvalidSymbol` for any byte outside `ACGT`.
pub fn is_reverse_palindrome(dna: impl AsRef<[u8]>) -> Result<bool> {
    let dna = dna.as_ref();
    DnaAlphabet::validate(dna)?;
    Ok(is_palindrome_validated(dna))
}

/// Compare the window against its reverse complement without allocating.
fn is_palindrome_validated(window: &[u8]) -> bool {
    window
        .iter()
        .zip(window.iter().rev())
        .all(|(&fwd, &rev)| complement(rev) == Some(fwd))
}

/// Find every reverse palindrome whose length lies in `[min_len, max_len]`.
///
/// Only even lengths are tried. Results are ordered by position, then by
/// length.
///
/// # Errors
///
/// `InvalidInput` when `min_len` is zero or exceeds `max_len`;
/// `InvalidSymbol` for any byte outside `ACGT`.
///
/// # Example
///
/// ```
/// use strand_seq::palindrome::{reverse_palindromes, Palindrome};
///
/// let hits = reverse_palindromes("TTGAATTCTT", 4, 12).unwrap();
/// assert_eq!(hits, vec![
///     Palindrome { position: 2, length: 6 },
///     Palindrome { position: 3, length: 4 },
/// ]);
/// ```
pub fn reverse_palindromes(
    dna: impl AsRef<[u8]>,
    min_len: usize,
    max_len: usize,
) -> Result<Vec<Palindrome>> {
    if min_len == 0 || min_len > max_len {
        return Err(StrandError::InvalidInput(format!(
            "palindrome length range {min_len}..={max_len} is empty or starts at zero"
        )));
    }
    let dna = dna.as_ref();
    DnaAlphabet::validate(dna)?;
    Ok(scan_validated(dna, min_len, max_len))
}

/// Scan bytes already known to be in `ACGT` with a well-formed length range.
///
/// Lengths beyond the sequence can never match, so the range is clamped to
/// `dna.len()` before rounding `min_len` up to even.
pub(crate) fn scan_validated(dna: &[u8], min_len: usize, max_len: usize) -> Vec<Palindrome> {
    let max_len = max_len.min(dna.len());
    if min_len > max_len {
        return Vec::new();
    }
    let first_even = min_len + min_len % 2;
    let mut hits = Vec::new();
    for position in 0..dna.len() {
        for length in (first_even..=max_len).step_by(2) {
            let end = position + length;
            if end > dna.len() {
                break;
            }
            if is_palindrome_validated(&dna[position..end]) {
                hits.push(Palindrome { position, length });
            }
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ecori_site_is_palindromic() {
        assert!(is_reverse_palindrome("GAATTC").unwrap());
        assert!(!is_reverse_palindrome("GAATTA").unwrap());
    }

    #[test]
    fn odd_length_never_palindromic() {
        assert!(!is_reverse_palindrome("ACGTA").unwrap());
    }

    #[test]
    fn scan_sample() {
        let hits = reverse_palindromes(
            "TCAATGCATGCGGGTCTATATGCAT",
            DEFAULT_MIN_LEN,
            DEFAULT_MAX_LEN,
        )
        .unwrap();
        let one_based: Vec<(usize, usize)> =
            hits.iter().map(|p| (p.position + 1, p.length)).collect();
        assert_eq!(
            one_based,
            vec![(4, 6), (5, 4), (6, 6), (7, 4), (17, 4), (18, 4), (20, 6), (21, 4)]
        );
    }

    #[test]
    fn odd_min_len_rounds_up() {
        let hits = reverse_palindromes("AATT", 3, 4).unwrap();
        assert_eq!(hits, vec![Palindrome { position: 0, length: 4 }]);
    }

    #[test]
    fn lengths_longer_than_sequence_find_nothing() {
        assert!(reverse_palindromes("ACGT", usize::MAX, usize::MAX)
            .unwrap()
            .is_empty());
        assert!(reverse_palindromes("ACGT", usize::MAX - 1, usize::MAX)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn max_len_is_clamped_to_sequence() {
        let hits = reverse_palindromes("GAATTC", 4, usize::MAX).unwrap();
        assert_eq!(
            hits,
            vec![
                Palindrome { position: 0, length: 6 },
                Palindrome { position: 1, length: 4 },
            ]
        );
    }

    #[test]
    fn empty_sequence_has_none() {
        assert!(reverse_palindromes("", 4, 12).unwrap().is_empty());
    }

    #[test]
    fn rejects_bad_range() {
        assert!(matches!(
            reverse_palindromes("ACGT", 0, 4),
            Err(StrandError::InvalidInput(_))
        ));
        assert!(matches!(
            reverse_palindromes("ACGT", 6, 4),
            Err(StrandError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_non_dna() {
        assert!(matches!(
            reverse_palindromes("ACGU", 4, 12),
            Err(StrandError::InvalidSymbol { .. })
        ));
    }
}
