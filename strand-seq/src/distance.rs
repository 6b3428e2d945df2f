//! Point-mutation distance between sequences.

use strand_core::{Result, StrandError};

/// Hamming distance between two equal-length sequences.
///
/// Counts the positions where the bytes differ. Comparison is byte-wise and
/// case-sensitive; no alphabet is enforced. Two empty sequences are at
/// distance 0.
///
/// # Errors
///
/// [`StrandError::LengthMismatch`] carrying both lengths when they differ. No
/// partial count is returned.
///
/// # Example
///
/// ```
/// use strand_seq::distance::hamming;
///
/// assert_eq!(hamming("GAGCCTACTAACGGGAT", "CATCGTAATGACGGCCT").unwrap(), 7);
/// assert!(hamming("AC", "ACG").is_err());
/// ```
pub fn hamming(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> Result<usize> {
    let (a, b) = (a.as_ref(), b.as_ref());
    if a.len() != b.len() {
        return Err(StrandError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b).filter(|(x, y)| x != y).count())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn equal_length_pair() -> impl Strategy<Value = (String, String)> {
        (0usize..100).prop_flat_map(|len| {
            let pattern = format!("[ACGT]{{{len}}}");
            let left = proptest::string::string_regex(&pattern).expect("valid regex");
            let right = proptest::string::string_regex(&pattern).expect("valid regex");
            (left, right)
        })
    }

    proptest! {
        #[test]
        fn hamming_is_symmetric((a, b) in equal_length_pair()) {
            prop_assert_eq!(hamming(&a, &b).unwrap(), hamming(&b, &a).unwrap());
        }

        #[test]
        fn hamming_identity(a in "[ACGT]{0,100}") {
            prop_assert_eq!(hamming(&a, &a).unwrap(), 0);
        }

        #[test]
        fn hamming_bounded_by_length((a, b) in equal_length_pair()) {
            prop_assert_eq!(a.len(), b.len());
            prop_assert!(hamming(&a, &b).unwrap() <= a.len());
        }
    }
}
