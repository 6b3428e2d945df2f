//! Inheritance probabilities for the strand toolkit.
//!
//! - **Mendelian crosses** — [`Genotype`], [`Population`], and the
//!   [`dominant_probability`] of a random mating pair

pub mod mendel;

pub use mendel::{dominant_probability, Genotype, Pairing, Population};
