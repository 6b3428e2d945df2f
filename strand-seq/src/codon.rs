//! RNA-to-protein translation with the standard genetic code (NCBI table 1).

use strand_core::{Result, StrandError};

use crate::alphabet::{invalid_symbol, RnaAlphabet};

/// Amino acids indexed by codon, bases ordered A=0, C=1, G=2, U=3 and the
/// first base most significant. `*` marks a stop codon.
const STANDARD_CODE: &[u8; 64] =
    b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

/// The result of translating one codon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Codon {
    /// One-letter amino acid code.
    Amino(u8),
    /// Translation terminates here.
    Stop,
}

fn base_index(b: u8) -> Option<usize> {
    match b {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'U' => Some(3),
        _ => None,
    }
}

/// Translate a single three-base RNA codon.
///
/// # Errors
///
/// `InvalidInput` unless `codon` is exactly three bytes long, and
/// `InvalidSymbol` for a byte outside `ACGU` (position relative to the codon).
pub fn translate_codon(codon: &[u8]) -> Result<Codon> {
    if codon.len() != 3 {
        return Err(StrandError::InvalidInput(format!(
            "codon must be 3 bases, got {}",
            codon.len()
        )));
    }
    let mut idx = 0usize;
    for (i, &b) in codon.iter().enumerate() {
        let base = base_index(b).ok_or_else(|| invalid_symbol::<RnaAlphabet>(b, i))?;
        idx = idx * 4 + base;
    }
    Ok(match STANDARD_CODE[idx] {
        b'*' => Codon::Stop,
        aa => Codon::Amino(aa),
    })
}

/// Translate an RNA sequence to a protein string.
///
/// Codons are read in frame from the first base; translation ends before the
/// first stop codon. Codons after a stop are not inspected.
///
/// # Errors
///
/// `InvalidInput` when the length is not a multiple of three, and
/// `InvalidSymbol` (position within the whole sequence) for a byte outside
/// `ACGU` in a translated codon.
///
/// # Example
///
/// ```
/// use strand_seq::codon::translate;
///
/// let protein = translate("AUGGCCAUGGCGCCCAGAACUGAGAUCAAUAGUACCCGUAUUAACGGGUGA").unwrap();
/// assert_eq!(protein, b"MAMAPRTEINSTRING");
/// ```
pub fn translate(rna: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    let rna = rna.as_ref();
    if rna.len() % 3 != 0 {
        return Err(StrandError::InvalidInput(format!(
            "RNA length {} is not a multiple of 3",
            rna.len()
        )));
    }

    let mut protein = Vec::with_capacity(rna.len() / 3);
    for (n, codon) in rna.chunks_exact(3).enumerate() {
        let translated = translate_codon(codon).map_err(|e| match e {
            StrandError::InvalidSymbol {
                alphabet,
                symbol,
                position,
            } => StrandError::InvalidSymbol {
                alphabet,
                symbol,
                position: n * 3 + position,
            },
            other => other,
        })?;
        match translated {
            Codon::Amino(aa) => protein.push(aa),
            Codon::Stop => break,
        }
    }
    Ok(protein)
}
