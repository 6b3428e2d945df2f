//! Watson-Crick complement and reverse complement of DNA.

use strand_core::Result;

use crate::alphabet::{Alphabet, DnaAlphabet};

/// Complement of a single DNA base, or `None` outside `ACGT`.
pub fn complement(base: u8) -> Option<u8> {
    match base {
        b'A' => Some(b'T'),
        b'T' => Some(b'A'),
        b'C' => Some(b'G'),
        b'G' => Some(b'C'),
        _ => None,
    }
}

/// Return the reverse complement of a DNA sequence.
///
/// The input is read from its last base to its first and each base is
/// replaced by its complement, so the output has the same length as the
/// input. Empty input yields empty output.
///
/// # Errors
///
/// [`StrandError::InvalidSymbol`](strand_core::StrandError::InvalidSymbol)
/// for the first byte outside `ACGT` (lowercase included); nothing is
/// dropped.
///
/// # Example
///
/// ```
/// use strand_seq::complement::reverse_complement;
///
/// assert_eq!(reverse_complement("AAAACCCGGT").unwrap(), b"ACCGGGTTTT");
/// ```
pub fn reverse_complement(dna: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    let dna = dna.as_ref();
    DnaAlphabet::validate(dna)?;
    Ok(reverse_complement_validated(dna))
}

/// Reverse complement of bytes already known to be in `ACGT`.
pub(crate) fn reverse_complement_validated(dna: &[u8]) -> Vec<u8> {
    dna.iter()
        .rev()
        .map(|&b| complement(b).unwrap_or(b))
        .collect()
}
