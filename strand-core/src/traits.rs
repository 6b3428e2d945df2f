//! Core trait definitions shared across the strand crates.

/// A biological sequence (DNA, RNA, protein).
pub trait Sequence {
    /// The raw byte representation of the sequence.
    fn as_bytes(&self) -> &[u8];

    /// Length in residues/bases.
    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the sequence is empty.
    fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

/// A type that can produce a summary of its contents.
pub trait Summarizable {
    /// A one-line summary suitable for display.
    fn summary(&self) -> String;
}

impl Sequence for [u8] {
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

impl Sequence for str {
    fn as_bytes(&self) -> &[u8] {
        str::as_bytes(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_and_slice_agree() {
        let s = "ACGT";
        assert_eq!(Sequence::len(s), 4);
        assert_eq!(Sequence::as_bytes(s), Sequence::as_bytes(&b"ACGT"[..]));
        assert!(Sequence::is_empty(""));
    }
}
