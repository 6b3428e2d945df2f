//! Structured error types for the strand toolkit.

use thiserror::Error;

/// Unified error type for all strand operations.
///
/// Every variant is a precondition violation reported to the caller; the
/// library never corrects input or returns a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrandError {
    /// Two sequences that must have equal length do not.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A search pattern of length zero.
    #[error("empty pattern")]
    EmptyPattern,

    /// A byte outside the alphabet an operation is defined over.
    #[error("invalid {alphabet} symbol {:?} (0x{symbol:02X}) at position {position}", as_char(.symbol))]
    InvalidSymbol {
        alphabet: &'static str,
        symbol: u8,
        position: usize,
    },

    /// Fewer than two organisms to draw a mating pair from.
    #[error("population of {total} is too small to draw a mating pair")]
    PopulationTooSmall { total: u64 },

    /// Any other bad argument.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

fn as_char(symbol: &u8) -> char {
    char::from(*symbol)
}

/// Convenience alias used throughout the strand crates.
pub type Result<T> = std::result::Result<T, StrandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_reports_both_lengths() {
        let err = StrandError::LengthMismatch { left: 2, right: 3 };
        assert_eq!(err.to_string(), "length mismatch: 2 vs 3");
    }

    #[test]
    fn invalid_symbol_message() {
        let err = StrandError::InvalidSymbol {
            alphabet: "DNA",
            symbol: b'N',
            position: 4,
        };
        assert_eq!(err.to_string(), "invalid DNA symbol 'N' (0x4E) at position 4");
    }

    #[test]
    fn population_message() {
        let err = StrandError::PopulationTooSmall { total: 1 };
        assert!(err.to_string().contains("population of 1"));
    }
}
