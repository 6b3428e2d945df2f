//! Concrete sequence type aliases and their biologically meaningful operations.
//!
//! - [`DnaSequence`] — reverse complement, transcription, translation, composition
//! - [`RnaSequence`] — reverse transcription, translation
//! - [`ProteinSequence`] — output of translation
//!
//! Validation happens once at construction, so these methods do not fail
//! except where the operation has its own precondition (codon framing).

use strand_core::Result;

use crate::alphabet::{DnaAlphabet, ProteinAlphabet, RnaAlphabet};
use crate::codon;
use crate::complement::reverse_complement_validated;
use crate::composition::BaseCounts;
use crate::palindrome::{self, Palindrome};
use crate::seq::ValidatedSeq;

/// A validated DNA sequence over `ACGT`.
pub type DnaSequence = ValidatedSeq<DnaAlphabet>;

/// A validated RNA sequence over `ACGU`.
pub type RnaSequence = ValidatedSeq<RnaAlphabet>;

/// A validated protein sequence over the 20 standard amino acids.
pub type ProteinSequence = ValidatedSeq<ProteinAlphabet>;

impl DnaSequence {
    /// Return the reverse complement.
    pub fn reverse_complement(&self) -> DnaSequence {
        DnaSequence::from_validated(reverse_complement_validated(self))
    }

    /// Transcribe DNA to RNA (T → U).
    pub fn transcribe(&self) -> RnaSequence {
        let rna = self
            .iter()
            .map(|&b| if b == b'T' { b'U' } else { b })
            .collect();
        RnaSequence::from_validated(rna)
    }

    /// Translate DNA to protein (transcribes first, then translates).
    pub fn translate(&self) -> Result<ProteinSequence> {
        self.transcribe().translate()
    }

    /// Counts of A, C, G and T.
    pub fn base_counts(&self) -> BaseCounts {
        let mut counts = BaseCounts::default();
        for &b in self.iter() {
            match b {
                b'A' => counts.a += 1,
                b'C' => counts.c += 1,
                b'G' => counts.g += 1,
                _ => counts.t += 1,
            }
        }
        counts
    }

    /// GC content as a fraction in [0.0, 1.0]. Returns 0.0 for empty sequences.
    pub fn gc_content(&self) -> f64 {
        self.base_counts().gc_content()
    }

    /// Reverse palindromes of length 4 to 12.
    pub fn reverse_palindromes(&self) -> Vec<Palindrome> {
        palindrome::scan_validated(self, palindrome::DEFAULT_MIN_LEN, palindrome::DEFAULT_MAX_LEN)
    }
}

impl RnaSequence {
    /// Reverse-transcribe RNA to DNA (U → T).
    pub fn reverse_transcribe(&self) -> DnaSequence {
        let dna = self
            .iter()
            .map(|&b| if b == b'U' { b'T' } else { b })
            .collect();
        DnaSequence::from_validated(dna)
    }

    /// Translate to protein using the standard genetic code.
    ///
    /// Stops before the first stop codon. Fails when the length is not a
    /// multiple of three.
    pub fn translate(&self) -> Result<ProteinSequence> {
        Ok(ProteinSequence::from_validated(codon::translate(self)?))
    }
}
