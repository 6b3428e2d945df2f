//! Base composition: per-nucleotide counts and GC content.

use std::fmt;

use strand_core::Result;

use crate::alphabet::{invalid_symbol, DnaAlphabet};

/// Occurrence counts of the four DNA bases, reported in the order A, C, G, T.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseCounts {
    pub a: usize,
    pub c: usize,
    pub g: usize,
    pub t: usize,
}

impl BaseCounts {
    /// The counts as `[A, C, G, T]`.
    pub fn as_array(&self) -> [usize; 4] {
        [self.a, self.c, self.g, self.t]
    }

    /// Total number of bases counted.
    pub fn total(&self) -> usize {
        self.a + self.c + self.g + self.t
    }

    /// Fraction of bases that are `G` or `C`, in `[0.0, 1.0]`.
    ///
    /// Returns 0.0 when nothing was counted.
    pub fn gc_content(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.g + self.c) as f64 / total as f64
    }
}

impl fmt::Display for BaseCounts {
    /// Space-separated `A C G T` counts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.a, self.c, self.g, self.t)
    }
}

/// Count the occurrences of `A`, `C`, `G` and `T` in a DNA sequence.
///
/// The four counts always sum to the input length.
///
/// # Errors
///
/// `InvalidSymbol` for the first byte outside `ACGT`; unknown symbols are
/// never skipped.
///
/// # Example
///
/// ```
/// use strand_seq::composition::count_bases;
///
/// let counts = count_bases("AGCTTTTCATTCTGACTGCA").unwrap();
/// assert_eq!(counts.as_array(), [4, 5, 3, 8]);
/// ```
pub fn count_bases(dna: impl AsRef<[u8]>) -> Result<BaseCounts> {
    let mut counts = BaseCounts::default();
    for (i, &b) in dna.as_ref().iter().enumerate() {
        match b {
            b'A' => counts.a += 1,
            b'C' => counts.c += 1,
            b'G' => counts.g += 1,
            b'T' => counts.t += 1,
            _ => return Err(invalid_symbol::<DnaAlphabet>(b, i)),
        }
    }
    Ok(counts)
}

/// GC content of a DNA sequence as a fraction in `[0.0, 1.0]`.
///
/// Returns 0.0 for an empty sequence.
pub fn gc_content(dna: impl AsRef<[u8]>) -> Result<f64> {
    Ok(count_bases(dna)?.gc_content())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strand_core::StrandError;

    #[test]
    fn counts_in_acgt_order() {
        let counts =
            count_bases("AGCTTTTCATTCTGACTGCAACGGGCAATATGTCTCTGTGTGGATTAAAAAAAGAGTGTCTGATAGCAGC")
                .unwrap();
        assert_eq!(counts.as_array(), [20, 12, 17, 21]);
        assert_eq!(counts.to_string(), "20 12 17 21");
    }

    #[test]
    fn empty_counts_are_zero() {
        let counts = count_bases("").unwrap();
        assert_eq!(counts, BaseCounts::default());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn mixed_alphabet_is_rejected() {
        let err = count_bases("ACGTN").unwrap_err();
        assert!(matches!(
            err,
            StrandError::InvalidSymbol { symbol: b'N', position: 4, .. }
        ));
    }

    #[test]
    fn gc_content_basic() {
        assert!((gc_content("ATGC").unwrap() - 0.5).abs() < 1e-12);
        assert_eq!(gc_content("").unwrap(), 0.0);
    }

    #[test]
    fn gc_content_sample() {
        let dna = "CCACCCTCGTGGTATGGCTAGGCATTCAGGAACCGGAGAACGCTTCAGACCAGCCCGGACTGGGAACCTGCGGGCAGTAGGTGGAAT";
        let gc = 100.0 * gc_content(dna).unwrap();
        assert!((gc - 60.919540).abs() < 1e-6, "got {gc}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn base_counts_serialize() {
        let counts = BaseCounts { a: 1, c: 2, g: 3, t: 4 };
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"{"a":1,"c":2,"g":3,"t":4}"#);
    }
}
