//! Nucleotide sequence primitives for the strand toolkit.
//!
//! Pure, stateless operations over short DNA/RNA strings. Every function
//! accepts anything that is `AsRef<[u8]>` (so `&str` works) and returns a
//! [`strand_core::Result`]; out-of-alphabet input is reported, never skipped.
//!
//! - **Search** — overlapping substring location via [`find_all`]
//! - **Distance** — Hamming distance via [`hamming`]
//! - **Complement** — [`reverse_complement`]
//! - **Transcription** — [`transcribe`] and [`reverse_transcribe`]
//! - **Composition** — [`count_bases`] and [`gc_content`]
//! - **Translation** — standard genetic code via [`translate`]
//! - **Palindromes** — restriction-site style [`reverse_palindromes`]
//! - **Reading frames** — [`find_orfs`] on both strands and their [`orf_proteins`]
//! - **Consensus** — column-wise [`Profile`] of aligned sequences
//! - **Splicing** — intron removal via [`splice`] and [`spliced_protein`]
//!
//! Validated wrappers ([`DnaSequence`], [`RnaSequence`], [`ProteinSequence`])
//! check the alphabet once and expose the same operations infallibly.
//!
//! # Example
//!
//! ```
//! use strand_seq::{find_all, hamming, reverse_complement, transcribe, DnaSequence};
//!
//! assert_eq!(find_all("GATATATGCATATACTT", "ATAT").unwrap(), vec![1, 3, 9]);
//! assert_eq!(hamming("GAGCCTACTAACGGGAT", "CATCGTAATGACGGCCT").unwrap(), 7);
//! assert_eq!(reverse_complement("AAAACCCGGT").unwrap(), b"ACCGGGTTTT");
//! assert_eq!(transcribe("GATGGAACTTGACTACGTAAATT").unwrap(), b"GAUGGAACUUGACUACGUAAAUU");
//!
//! let dna = DnaSequence::new("atgaaagcttaa").unwrap();
//! assert_eq!(dna.reverse_complement().to_string(), "TTAAGCTTTCAT");
//! assert_eq!(dna.translate().unwrap().to_string(), "MKA");
//! ```

pub mod alphabet;
pub mod codon;
pub mod complement;
pub mod composition;
pub mod distance;
pub mod orf;
pub mod palindrome;
pub mod profile;
pub mod search;
pub mod seq;
pub mod splice;
pub mod transcribe;
pub mod types;

pub use alphabet::{Alphabet, DnaAlphabet, ProteinAlphabet, RnaAlphabet};
pub use seq::ValidatedSeq;
pub use types::{DnaSequence, ProteinSequence, RnaSequence};

pub use codon::{translate, translate_codon, Codon};
pub use complement::{complement, reverse_complement};
pub use composition::{count_bases, gc_content, BaseCounts};
pub use distance::hamming;
pub use orf::{find_orfs, orf_proteins, Orf, Strand};
pub use palindrome::{is_reverse_palindrome, reverse_palindromes, Palindrome};
pub use profile::Profile;
pub use search::find_all;
pub use splice::{splice, spliced_protein};
pub use transcribe::{reverse_transcribe, transcribe};
