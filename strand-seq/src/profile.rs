//! Profile matrix and consensus of aligned DNA sequences.

use std::fmt;

use strand_core::{Result, StrandError};

use crate::composition::{count_bases, BaseCounts};

/// Per-position base counts of a set of equal-length DNA sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    columns: Vec<BaseCounts>,
}

impl Profile {
    /// Count bases column by column.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an empty set, `LengthMismatch` when a sequence
    /// differs in length from the first (`left` is the first sequence's
    /// length), and `InvalidSymbol` for a byte outside `ACGT` (position within
    /// its own sequence).
    ///
    /// # Example
    ///
    /// ```
    /// use strand_seq::profile::Profile;
    ///
    /// let profile = Profile::new(&["ACGT", "ACCT", "TCGT"]).unwrap();
    /// assert_eq!(profile.consensus(), b"ACGT");
    /// ```
    pub fn new<S: AsRef<[u8]>>(sequences: &[S]) -> Result<Self> {
        let Some(first) = sequences.first() else {
            return Err(StrandError::InvalidInput(
                "at least one sequence is required".into(),
            ));
        };
        let len = first.as_ref().len();
        let mut columns = vec![BaseCounts::default(); len];
        for seq in sequences {
            let seq = seq.as_ref();
            if seq.len() != len {
                return Err(StrandError::LengthMismatch {
                    left: len,
                    right: seq.len(),
                });
            }
            count_bases(seq)?;
            for (column, &b) in columns.iter_mut().zip(seq) {
                match b {
                    b'A' => column.a += 1,
                    b'C' => column.c += 1,
                    b'G' => column.g += 1,
                    _ => column.t += 1, // validated above
                }
            }
        }
        Ok(Self { columns })
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Base counts at each position.
    pub fn columns(&self) -> &[BaseCounts] {
        &self.columns
    }

    /// Counts of one base across all positions, or `None` outside `ACGT`.
    pub fn row(&self, base: u8) -> Option<Vec<usize>> {
        let index = match base {
            b'A' => 0,
            b'C' => 1,
            b'G' => 2,
            b'T' => 3,
            _ => return None,
        };
        Some(self.columns.iter().map(|c| c.as_array()[index]).collect())
    }

    /// Most frequent base at each position.
    ///
    /// Ties go to the base listed first in `A`, `C`, `T`, `G`.
    pub fn consensus(&self) -> Vec<u8> {
        self.columns
            .iter()
            .map(|c| {
                let mut best = (b'A', c.a);
                for candidate in [(b'C', c.c), (b'T', c.t), (b'G', c.g)] {
                    if candidate.1 > best.1 {
                        best = candidate;
                    }
                }
                best.0
            })
            .collect()
    }
}

impl fmt::Display for Profile {
    /// One `X: n n n` line per base, in the order A, C, G, T.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, base) in ['A', 'C', 'G', 'T'].into_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{base}:")?;
            for column in &self.columns {
                write!(f, " {}", column.as_array()[index])?;
            }
        }
        Ok(())
    }
}
