//! Transcription between DNA and RNA.

use strand_core::Result;

use crate::alphabet::{invalid_symbol, DnaAlphabet, RnaAlphabet};

/// Transcribe DNA to RNA: every `T` becomes `U`, `A`/`C`/`G` are kept.
///
/// Order and length are preserved.
///
/// # Errors
///
/// `InvalidSymbol` for any byte outside `ACGT`.
pub fn transcribe(dna: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    dna.as_ref()
        .iter()
        .enumerate()
        .map(|(i, &b)| match b {
            b'T' => Ok(b'U'),
            b'A' | b'C' | b'G' => Ok(b),
            _ => Err(invalid_symbol::<DnaAlphabet>(b, i)),
        })
        .collect()
}

/// Reverse-transcribe RNA to DNA: every `U` becomes `T`.
///
/// # Errors
///
/// `InvalidSymbol` for any byte outside `ACGU`.
pub fn reverse_transcribe(rna: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    rna.as_ref()
        .iter()
        .enumerate()
        .map(|(i, &b)| match b {
            b'U' => Ok(b'T'),
            b'A' | b'C' | b'G' => Ok(b),
            _ => Err(invalid_symbol::<RnaAlphabet>(b, i)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strand_core::StrandError;

    #[test]
    fn transcribe_sample() {
        assert_eq!(
            transcribe("GATGGAACTTGACTACGTAAATT").unwrap(),
            b"GAUGGAACUUGACUACGUAAAUU"
        );
    }

    #[test]
    fn transcribe_empty() {
        assert!(transcribe("").unwrap().is_empty());
    }

    #[test]
    fn transcribe_rejects_rna_input() {
        let err = transcribe("ACGU").unwrap_err();
        assert!(matches!(
            err,
            StrandError::InvalidSymbol { symbol: b'U', position: 3, .. }
        ));
    }

    #[test]
    fn reverse_transcribe_basic() {
        assert_eq!(reverse_transcribe("AUCG").unwrap(), b"ATCG");
    }

    #[test]
    fn reverse_transcribe_rejects_t() {
        assert!(reverse_transcribe("AUCGT").is_err());
    }
}
