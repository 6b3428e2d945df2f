//! Turning raw stdin text into typed command inputs.
//!
//! Lines are trimmed of surrounding whitespace (including `\r`) and blank
//! lines are skipped. Nothing here checks the sequence alphabet; that is left
//! to the library so error messages carry the offending position.

use anyhow::{bail, Context, Result};

fn content_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// A single sequence, which may be wrapped over several lines.
pub fn sequence(raw: &str) -> String {
    content_lines(raw).collect()
}

/// Exactly two sequences, one per line.
pub fn sequence_pair(raw: &str) -> Result<(String, String)> {
    let mut lines = content_lines(raw);
    let (Some(first), Some(second)) = (lines.next(), lines.next()) else {
        bail!("expected two sequences on separate lines");
    };
    if lines.next().is_some() {
        bail!("expected exactly two sequences, found more input");
    }
    Ok((first.to_string(), second.to_string()))
}

/// One or more sequences, one per line.
pub fn sequence_list(raw: &str) -> Result<Vec<String>> {
    let sequences: Vec<String> = content_lines(raw).map(str::to_string).collect();
    if sequences.is_empty() {
        bail!("expected at least one sequence");
    }
    Ok(sequences)
}

/// A gene on the first line followed by zero or more introns, one per line.
pub fn gene_and_introns(raw: &str) -> Result<(String, Vec<String>)> {
    let mut lines = content_lines(raw);
    let Some(gene) = lines.next() else {
        bail!("expected a gene sequence on the first line");
    };
    Ok((gene.to_string(), lines.map(str::to_string).collect()))
}

/// Three whitespace-separated non-negative integers `k m n`.
pub fn population_counts(raw: &str) -> Result<(u64, u64, u64)> {
    let fields: Vec<&str> = raw.split_whitespace().collect();
    let [k, m, n] = fields.as_slice() else {
        bail!("expected three counts `k m n`, found {} fields", fields.len());
    };
    let parse = |name: &str, s: &str| -> Result<u64> {
        s.parse()
            .with_context(|| format!("{name} must be a non-negative integer, got {s:?}"))
    };
    Ok((parse("k", *k)?, parse("m", *m)?, parse("n", *n)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_joins_wrapped_lines() {
        assert_eq!(sequence("ACGT\r\nTTGA\n\n"), "ACGTTTGA");
    }

    #[test]
    fn sequence_of_empty_input() {
        assert_eq!(sequence(""), "");
    }

    #[test]
    fn pair_trims_lines() {
        let (a, b) = sequence_pair("  GATATAT \nATAT\n").unwrap();
        assert_eq!(a, "GATATAT");
        assert_eq!(b, "ATAT");
    }

    #[test]
    fn pair_needs_two_lines() {
        assert!(sequence_pair("ACGT\n").is_err());
        assert!(sequence_pair("A\nC\nG\n").is_err());
    }

    #[test]
    fn list_keeps_one_sequence_per_line() {
        assert_eq!(sequence_list("ACGT\n\nTTGA\r\n").unwrap(), vec!["ACGT", "TTGA"]);
        assert!(sequence_list("\n \n").is_err());
    }

    #[test]
    fn gene_then_introns() {
        let (gene, introns) = gene_and_introns("ATGCCCTAA\nCCC\nGG\n").unwrap();
        assert_eq!(gene, "ATGCCCTAA");
        assert_eq!(introns, vec!["CCC", "GG"]);

        let (_, introns) = gene_and_introns("ATGTAA\n").unwrap();
        assert!(introns.is_empty());
        assert!(gene_and_introns("").is_err());
    }

    #[test]
    fn counts_parse() {
        assert_eq!(population_counts("2 2 2\n").unwrap(), (2, 2, 2));
    }

    #[test]
    fn counts_reject_negative_and_missing() {
        assert!(population_counts("2 -1 2").is_err());
        assert!(population_counts("2 2").is_err());
    }
}
