//! Open reading frame (ORF) finder.
//!
//! An ORF starts at an `ATG` start codon and ends with the first in-frame
//! stop codon (`TAA`, `TAG`, `TGA`), stop included. Every `ATG` opens its
//! own candidate, so nested ORFs sharing a stop codon are all reported.
//! Candidates that run off the end of the strand without a stop are not
//! ORFs. Both the forward strand and its reverse complement are scanned.

use std::collections::BTreeSet;

use strand_core::Result;

use crate::alphabet::{Alphabet, DnaAlphabet};
use crate::codon;
use crate::complement::reverse_complement_validated;

const START: &[u8] = b"ATG";
const STOPS: [&[u8]; 3] = [b"TAA", b"TAG", b"TGA"];

/// Strand orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strand {
    Forward,
    /// The reverse complement of the input.
    Reverse,
}

/// One open reading frame.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Orf {
    pub strand: Strand,
    /// Start of the `ATG` (0-indexed) in the coordinates of `strand`.
    pub start: usize,
    /// End (exclusive) of the stop codon in the coordinates of `strand`.
    pub end: usize,
    /// Translated protein, stop excluded.
    pub protein: Vec<u8>,
}

/// Scan one strand of validated DNA.
fn scan_strand(dna: &[u8], strand: Strand, out: &mut Vec<Orf>) -> Result<()> {
    for start in 0..dna.len().saturating_sub(2) {
        if &dna[start..start + 3] != START {
            continue;
        }
        let stop = (start + 3..dna.len().saturating_sub(2))
            .step_by(3)
            .find(|&pos| STOPS.iter().any(|&stop| stop == &dna[pos..pos + 3]));
        if let Some(stop) = stop {
            let end = stop + 3;
            let rna: Vec<u8> = dna[start..end]
                .iter()
                .map(|&b| if b == b'T' { b'U' } else { b })
                .collect();
            out.push(Orf {
                strand,
                start,
                end,
                protein: codon::translate(&rna)?,
            });
        }
    }
    Ok(())
}

/// Find every ORF on both strands of a DNA sequence.
///
/// Forward-strand ORFs come first, each strand ordered by start position.
///
/// # Errors
///
/// `InvalidSymbol` for the first byte outside `ACGT`.
pub fn find_orfs(dna: impl AsRef<[u8]>) -> Result<Vec<Orf>> {
    let dna = dna.as_ref();
    DnaAlphabet::validate(dna)?;
    let mut orfs = Vec::new();
    scan_strand(dna, Strand::Forward, &mut orfs)?;
    scan_strand(&reverse_complement_validated(dna), Strand::Reverse, &mut orfs)?;
    Ok(orfs)
}

/// Distinct proteins encoded by the ORFs of both strands, sorted.
///
/// # Example
///
/// ```
/// use strand_seq::orf::orf_proteins;
///
/// let proteins = orf_proteins("CCATGAAATAGCC").unwrap();
/// assert_eq!(proteins, vec![b"MK".to_vec()]);
/// ```
pub fn orf_proteins(dna: impl AsRef<[u8]>) -> Result<Vec<Vec<u8>>> {
    let unique: BTreeSet<Vec<u8>> = find_orfs(dna)?
        .into_iter()
        .map(|orf| orf.protein)
        .collect();
    Ok(unique.into_iter().collect())
}
