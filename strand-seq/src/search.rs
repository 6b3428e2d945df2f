//! Exact substring location.

use strand_core::{Result, StrandError};

/// Find every starting position of `needle` in `haystack`, overlaps included.
///
/// Positions are zero-based and ascending. After a match at `p` the scan
/// resumes at `p + 1`, so `ATAT` is reported at both 1 and 3 in `GATATAT`.
/// A needle longer than the haystack yields no positions. Matching is
/// byte-wise and case-sensitive.
///
/// Runs in O(n + m) using a Knuth-Morris-Pratt failure table.
///
/// # Errors
///
/// [`StrandError::EmptyPattern`] for a zero-length needle, which would
/// otherwise match at every position.
///
/// # Example
///
/// ```
/// use strand_seq::search::find_all;
///
/// assert_eq!(find_all("GATATATGCATATACTT", "ATAT").unwrap(), vec![1, 3, 9]);
/// ```
pub fn find_all(haystack: impl AsRef<[u8]>, needle: impl AsRef<[u8]>) -> Result<Vec<usize>> {
    let (text, pattern) = (haystack.as_ref(), needle.as_ref());
    let m = pattern.len();
    if m == 0 {
        return Err(StrandError::EmptyPattern);
    }
    if m > text.len() {
        return Ok(Vec::new());
    }

    let fail = failure_table(pattern);
    let mut positions = Vec::new();
    let mut matched = 0usize;
    for (i, &b) in text.iter().enumerate() {
        while matched > 0 && pattern[matched] != b {
            matched = fail[matched - 1];
        }
        if pattern[matched] == b {
            matched += 1;
        }
        if matched == m {
            positions.push(i + 1 - m);
            // Fall back to the longest proper border so overlapping matches survive.
            matched = fail[m - 1];
        }
    }
    Ok(positions)
}

/// `fail[i]` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it.
fn failure_table(pattern: &[u8]) -> Vec<usize> {
    let mut fail = vec![0usize; pattern.len()];
    let mut k = 0usize;
    for i in 1..pattern.len() {
        while k > 0 && pattern[k] != pattern[i] {
            k = fail[k - 1];
        }
        if pattern[k] == pattern[i] {
            k += 1;
        }
        fail[i] = k;
    }
    fail
}
