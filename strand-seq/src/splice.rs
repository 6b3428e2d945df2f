//! RNA splicing: removing introns from a gene and translating what remains.

use strand_core::{Result, StrandError};

use crate::alphabet::{Alphabet, DnaAlphabet};
use crate::codon;
use crate::transcribe::transcribe;

/// Remove every occurrence of the given introns from a DNA sequence.
///
/// The sequence is scanned left to right. At each position the introns are
/// tried in the order given and the first that matches is cut out; scanning
/// resumes right after it, so removals never overlap and text exposed by a
/// removal is not rescanned.
///
/// # Errors
///
/// `EmptyPattern` for an empty intron, `InvalidSymbol` when the sequence or
/// an intron holds a byte outside `ACGT`.
///
/// # Example
///
/// ```
/// use strand_seq::splice::splice;
///
/// assert_eq!(splice("ATGCCCTAA", &["CCC"]).unwrap(), b"ATGTAA");
/// ```
pub fn splice<S: AsRef<[u8]>>(dna: impl AsRef<[u8]>, introns: &[S]) -> Result<Vec<u8>> {
    let dna = dna.as_ref();
    DnaAlphabet::validate(dna)?;
    for intron in introns {
        let intron = intron.as_ref();
        if intron.is_empty() {
            return Err(StrandError::EmptyPattern);
        }
        DnaAlphabet::validate(intron)?;
    }

    let mut exons = Vec::with_capacity(dna.len());
    let mut pos = 0;
    while pos < dna.len() {
        let rest = &dna[pos..];
        let hit = introns
            .iter()
            .map(|intron| intron.as_ref())
            .find(|intron: &&[u8]| rest.starts_with(intron));
        match hit {
            Some(intron) => pos += intron.len(),
            None => {
                exons.push(dna[pos]);
                pos += 1;
            }
        }
    }
    Ok(exons)
}

/// Splice out the introns, then transcribe and translate the exons.
///
/// # Errors
///
/// Everything [`splice`] reports, plus `InvalidInput` when the spliced
/// sequence is not a whole number of codons.
pub fn spliced_protein<S: AsRef<[u8]>>(dna: impl AsRef<[u8]>, introns: &[S]) -> Result<Vec<u8>> {
    let exons = splice(dna, introns)?;
    codon::translate(transcribe(exons)?)
}
