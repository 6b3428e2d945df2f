//! Alphabet definitions for sequence validation.
//!
//! Each alphabet is a zero-sized marker type that implements [`Alphabet`],
//! defining the set of valid bytes (uppercase) for a sequence type. The
//! nucleotide alphabets are the four canonical bases only; ambiguity codes
//! such as `N` are rejected.

use strand_core::{Result, StrandError};

/// Trait for sequence alphabets.
pub trait Alphabet: Clone + 'static {
    /// Human-readable name (e.g. "DNA").
    const NAME: &'static str;

    /// The set of valid uppercase bytes.
    const VALID_BYTES: &'static [u8];

    /// Check whether a byte is a member of the alphabet. Case-sensitive.
    fn is_valid(b: u8) -> bool {
        Self::VALID_BYTES.contains(&b)
    }

    /// Check every byte of `seq`, reporting the first one outside the alphabet.
    fn validate(seq: &[u8]) -> Result<()> {
        match seq.iter().position(|&b| !Self::is_valid(b)) {
            Some(i) => Err(invalid_symbol::<Self>(seq[i], i)),
            None => Ok(()),
        }
    }
}

/// DNA alphabet: `ACGT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DnaAlphabet;

impl Alphabet for DnaAlphabet {
    const NAME: &'static str = "DNA";
    const VALID_BYTES: &'static [u8] = b"ACGT";
}

/// RNA alphabet: `ACGU`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RnaAlphabet;

impl Alphabet for RnaAlphabet {
    const NAME: &'static str = "RNA";
    const VALID_BYTES: &'static [u8] = b"ACGU";
}

/// Protein alphabet: the 20 standard amino acids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProteinAlphabet;

impl Alphabet for ProteinAlphabet {
    const NAME: &'static str = "protein";
    const VALID_BYTES: &'static [u8] = b"ACDEFGHIKLMNPQRSTVWY";
}

pub(crate) fn invalid_symbol<A: Alphabet>(symbol: u8, position: usize) -> StrandError {
    StrandError::InvalidSymbol {
        alphabet: A::NAME,
        symbol,
        position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dna_accepts_canonical_bases() {
        for &b in b"ACGT" {
            assert!(DnaAlphabet::is_valid(b), "DNA should accept {}", b as char);
        }
    }

    #[test]
    fn dna_rejects_u_and_ambiguity_codes() {
        for &b in b"UNRY" {
            assert!(!DnaAlphabet::is_valid(b), "DNA should reject {}", b as char);
        }
    }

    #[test]
    fn dna_is_case_sensitive() {
        assert!(!DnaAlphabet::is_valid(b'a'));
    }

    #[test]
    fn rna_rejects_t() {
        assert!(RnaAlphabet::is_valid(b'U'));
        assert!(!RnaAlphabet::is_valid(b'T'));
    }

    #[test]
    fn protein_rejects_stop_marker() {
        assert!(ProteinAlphabet::is_valid(b'W'));
        assert!(!ProteinAlphabet::is_valid(b'*'));
    }

    #[test]
    fn validate_reports_first_offender() {
        let err = DnaAlphabet::validate(b"ACXGZ").unwrap_err();
        assert_eq!(
            err,
            StrandError::InvalidSymbol {
                alphabet: "DNA",
                symbol: b'X',
                position: 2,
            }
        );
    }

    #[test]
    fn validate_empty_ok() {
        assert!(DnaAlphabet::validate(b"").is_ok());
    }
}
