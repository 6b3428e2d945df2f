//! Subcommand definitions and dispatch.

use anyhow::{Context, Result};
use clap::Subcommand;
use log::debug;
use serde_json::json;

use strand_seq::palindrome::{DEFAULT_MAX_LEN, DEFAULT_MIN_LEN};
use strand_seq::Profile;

use crate::input;
use crate::output::{join, one_based, Report};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Locate every occurrence of a motif, overlaps included.
    ///
    /// Reads the sequence and the motif on two lines and prints the 1-based
    /// start positions, space-separated.
    Subs,

    /// Count point mutations between two equal-length sequences.
    Hamm,

    /// Reverse complement of a DNA sequence.
    Revc,

    /// Transcribe DNA to RNA.
    Rna,

    /// Count A, C, G and T.
    Dna,

    /// Probability that a random mating pair has a dominant-phenotype child.
    ///
    /// Reads `k m n`: homozygous dominant, heterozygous and homozygous
    /// recessive organism counts.
    Iprb,

    /// GC content of a DNA sequence, as a percentage.
    Gc,

    /// Translate RNA to protein with the standard genetic code.
    Prot,

    /// List reverse palindromes (restriction sites) as 1-based `position length`.
    Revp {
        /// Shortest palindrome to report
        #[arg(long, default_value_t = DEFAULT_MIN_LEN)]
        min_len: usize,

        /// Longest palindrome to report
        #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
        max_len: usize,
    },

    /// Distinct proteins from the open reading frames of both strands, sorted.
    Orf,

    /// Consensus string and profile matrix of equal-length sequences.
    ///
    /// Reads one sequence per line.
    Cons,

    /// Splice introns out of a gene and translate the exons.
    ///
    /// Reads the gene on the first line and one intron per following line.
    Splc,
}

fn ascii(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).context("sequence output is not valid UTF-8")
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Subs => "subs",
            Commands::Hamm => "hamm",
            Commands::Revc => "revc",
            Commands::Rna => "rna",
            Commands::Dna => "dna",
            Commands::Iprb => "iprb",
            Commands::Gc => "gc",
            Commands::Prot => "prot",
            Commands::Revp { .. } => "revp",
            Commands::Orf => "orf",
            Commands::Cons => "cons",
            Commands::Splc => "splc",
        }
    }

    /// Run the command against the full stdin text.
    pub fn run(&self, raw: &str) -> Result<Report> {
        match self {
            Commands::Subs => {
                let (haystack, needle) = input::sequence_pair(raw)?;
                let positions = one_based(&strand_seq::find_all(&haystack, &needle)?);
                debug!("{} occurrences of a {}-base motif", positions.len(), needle.len());
                Report::new(join(&positions), positions)
            }
            Commands::Hamm => {
                let (a, b) = input::sequence_pair(raw)?;
                let distance = strand_seq::hamming(&a, &b)?;
                Report::new(distance.to_string(), distance)
            }
            Commands::Revc => {
                let rc = ascii(strand_seq::reverse_complement(input::sequence(raw))?)?;
                Report::new(rc.clone(), rc)
            }
            Commands::Rna => {
                let rna = ascii(strand_seq::transcribe(input::sequence(raw))?)?;
                Report::new(rna.clone(), rna)
            }
            Commands::Dna => {
                let counts = strand_seq::count_bases(input::sequence(raw))?;
                Report::new(counts.to_string(), counts)
            }
            Commands::Iprb => {
                let (k, m, n) = input::population_counts(raw)?;
                let p = strand_stats::dominant_probability(k, m, n)?;
                Report::new(format!("{p:.5}"), p)
            }
            Commands::Gc => {
                let percent = 100.0 * strand_seq::gc_content(input::sequence(raw))?;
                Report::new(format!("{percent:.6}"), percent)
            }
            Commands::Prot => {
                let protein = ascii(strand_seq::translate(input::sequence(raw))?)?;
                Report::new(protein.clone(), protein)
            }
            Commands::Revp { min_len, max_len } => {
                let hits = strand_seq::reverse_palindromes(input::sequence(raw), *min_len, *max_len)?;
                debug!("{} reverse palindromes", hits.len());
                let text = hits
                    .iter()
                    .map(|p| format!("{} {}", p.position + 1, p.length))
                    .collect::<Vec<_>>()
                    .join("\n");
                let value: Vec<_> = hits
                    .iter()
                    .map(|p| json!({ "position": p.position + 1, "length": p.length }))
                    .collect();
                Report::new(text, value)
            }
            Commands::Orf => {
                let proteins = strand_seq::orf_proteins(input::sequence(raw))?
                    .into_iter()
                    .map(ascii)
                    .collect::<Result<Vec<_>>>()?;
                debug!("{} distinct ORF proteins", proteins.len());
                Report::new(proteins.join("\n"), proteins)
            }
            Commands::Cons => {
                let sequences = input::sequence_list(raw)?;
                let profile = Profile::new(&sequences)?;
                debug!(
                    "profile of {} sequences over {} positions",
                    sequences.len(),
                    profile.len()
                );
                let consensus = ascii(profile.consensus())?;
                let value = json!({
                    "consensus": consensus,
                    "profile": {
                        "A": profile.row(b'A'),
                        "C": profile.row(b'C'),
                        "G": profile.row(b'G'),
                        "T": profile.row(b'T'),
                    },
                });
                Report::new(format!("{consensus}\n{profile}"), value)
            }
            Commands::Splc => {
                let (gene, introns) = input::gene_and_introns(raw)?;
                debug!("splicing {} introns", introns.len());
                let protein = ascii(strand_seq::spliced_protein(&gene, &introns)?)?;
                Report::new(protein.clone(), protein)
            }
        }
    }
}
