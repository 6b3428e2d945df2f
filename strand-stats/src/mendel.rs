//! Mendelian inheritance of a single two-allele factor.
//!
//! Genotypes follow the usual nomenclature: `AA` (homozygous dominant),
//! `Aa` (heterozygous), `aa` (homozygous recessive). A [`Population`] holds
//! organism counts per genotype; two organisms are drawn uniformly at random
//! without replacement and mated.

use strand_core::{Result, StrandError};

/// Genotype of one organism for a single factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Genotype {
    /// `AA`
    HomozygousDominant,
    /// `Aa`
    Heterozygous,
    /// `aa`
    HomozygousRecessive,
}

impl Genotype {
    /// All genotypes, dominant first.
    pub const ALL: [Genotype; 3] = [
        Genotype::HomozygousDominant,
        Genotype::Heterozygous,
        Genotype::HomozygousRecessive,
    ];

    /// Probability that a gamete from this parent carries the recessive allele.
    fn recessive_gamete(self) -> f64 {
        match self {
            Genotype::HomozygousDominant => 0.0,
            Genotype::Heterozygous => 0.5,
            Genotype::HomozygousRecessive => 1.0,
        }
    }

    /// Probability that an offspring of `self × other` shows the dominant
    /// phenotype, i.e. is not `aa`.
    ///
    /// Each parent passes one allele independently, so the offspring is
    /// recessive only when both gametes are.
    pub fn cross(self, other: Genotype) -> f64 {
        1.0 - self.recessive_gamete() * other.recessive_gamete()
    }

    /// Conventional two-letter notation.
    pub fn symbol(self) -> &'static str {
        match self {
            Genotype::HomozygousDominant => "AA",
            Genotype::Heterozygous => "Aa",
            Genotype::HomozygousRecessive => "aa",
        }
    }
}

/// An unordered mating pair together with its draw and offspring probabilities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pairing {
    pub first: Genotype,
    pub second: Genotype,
    /// Probability of drawing this pair from the population.
    pub draw_probability: f64,
    /// Probability that the cross yields a dominant-phenotype offspring.
    pub dominant_offspring: f64,
}

/// Organism counts per genotype, holding at least two organisms.
///
/// Only [`Population::new`] (or deserialization, which goes through it)
/// builds one, so every value can draw a mating pair and its total fits in
/// a `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PopulationCounts")
)]
pub struct Population {
    dominant: u64,
    heterozygous: u64,
    recessive: u64,
}

/// Unchecked wire form of a [`Population`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PopulationCounts {
    dominant: u64,
    heterozygous: u64,
    recessive: u64,
}

#[cfg(feature = "serde")]
impl TryFrom<PopulationCounts> for Population {
    type Error = StrandError;

    fn try_from(raw: PopulationCounts) -> Result<Self> {
        Population::new(raw.dominant, raw.heterozygous, raw.recessive)
    }
}

/// Number of unordered pairs that can be drawn from `n` organisms.
fn pairs(n: u64) -> f64 {
    let n = n as f64;
    n * (n - 1.0) / 2.0
}

impl Population {
    /// Build a population from counts `k` (AA), `m` (Aa) and `n` (aa).
    ///
    /// # Errors
    ///
    /// [`StrandError::PopulationTooSmall`] when fewer than two organisms exist,
    /// since no mating pair can be drawn. [`StrandError::InvalidInput`] when
    /// `k + m + n` does not fit in a `u64`.
    pub fn new(k: u64, m: u64, n: u64) -> Result<Self> {
        let total = k
            .checked_add(m)
            .and_then(|sum| sum.checked_add(n))
            .ok_or_else(|| {
                StrandError::InvalidInput(format!("population {k} + {m} + {n} overflows u64"))
            })?;
        if total < 2 {
            return Err(StrandError::PopulationTooSmall { total });
        }
        Ok(Self {
            dominant: k,
            heterozygous: m,
            recessive: n,
        })
    }

    /// `k`: homozygous dominant organisms.
    pub fn dominant(&self) -> u64 {
        self.dominant
    }

    /// `m`: heterozygous organisms.
    pub fn heterozygous(&self) -> u64 {
        self.heterozygous
    }

    /// `n`: homozygous recessive organisms.
    pub fn recessive(&self) -> u64 {
        self.recessive
    }

    /// Total number of organisms.
    pub fn total(&self) -> u64 {
        // Checked in `new`.
        self.dominant + self.heterozygous + self.recessive
    }

    /// Number of organisms with the given genotype.
    pub fn count(&self, genotype: Genotype) -> u64 {
        match genotype {
            Genotype::HomozygousDominant => self.dominant,
            Genotype::Heterozygous => self.heterozygous,
            Genotype::HomozygousRecessive => self.recessive,
        }
    }

    /// Probability that a uniformly drawn unordered pair has genotypes `{a, b}`.
    ///
    /// Same genotype: `C(x, 2) / C(N, 2)`. Different genotypes:
    /// `x · y / C(N, 2)`.
    pub fn pairing_probability(&self, a: Genotype, b: Genotype) -> f64 {
        let favourable = if a == b {
            pairs(self.count(a))
        } else {
            self.count(a) as f64 * self.count(b) as f64
        };
        favourable / pairs(self.total())
    }

    /// The six unordered pairings {AA,AA}, {AA,Aa}, {AA,aa}, {Aa,Aa},
    /// {Aa,aa}, {aa,aa}. Their draw probabilities sum to 1.
    pub fn pairings(&self) -> Vec<Pairing> {
        let mut out = Vec::with_capacity(6);
        for (i, &first) in Genotype::ALL.iter().enumerate() {
            for &second in &Genotype::ALL[i..] {
                out.push(Pairing {
                    first,
                    second,
                    draw_probability: self.pairing_probability(first, second),
                    dominant_offspring: first.cross(second),
                });
            }
        }
        out
    }

    /// Probability that a random mating pair produces a dominant-phenotype
    /// offspring. Always in `[0, 1]`.
    pub fn dominant_probability(&self) -> f64 {
        let p: f64 = self
            .pairings()
            .iter()
            .map(|pair| pair.draw_probability * pair.dominant_offspring)
            .sum();
        p.clamp(0.0, 1.0)
    }
}

/// Probability that two organisms drawn without replacement from `k` AA,
/// `m` Aa and `n` aa individuals produce an offspring with the dominant
/// phenotype.
///
/// # Errors
///
/// [`StrandError::PopulationTooSmall`] when `k + m + n < 2`;
/// [`StrandError::InvalidInput`] when the total overflows a `u64`.
///
/// # Example
///
/// ```
/// use strand_stats::dominant_probability;
///
/// let p = dominant_probability(2, 2, 2).unwrap();
/// assert!((p - 0.78333).abs() < 1e-5);
/// ```
pub fn dominant_probability(k: u64, m: u64, n: u64) -> Result<f64> {
    Ok(Population::new(k, m, n)?.dominant_probability())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn cross_table() {
        use Genotype::*;
        assert_eq!(HomozygousDominant.cross(HomozygousDominant), 1.0);
        assert_eq!(HomozygousDominant.cross(Heterozygous), 1.0);
        assert_eq!(HomozygousDominant.cross(HomozygousRecessive), 1.0);
        assert_eq!(Heterozygous.cross(Heterozygous), 0.75);
        assert_eq!(Heterozygous.cross(HomozygousRecessive), 0.5);
        assert_eq!(HomozygousRecessive.cross(HomozygousRecessive), 0.0);
    }

    #[test]
    fn cross_is_symmetric() {
        for a in Genotype::ALL {
            for b in Genotype::ALL {
                assert_eq!(a.cross(b), b.cross(a), "{} x {}", a.symbol(), b.symbol());
            }
        }
    }

    #[test]
    fn sample_population() {
        let p = dominant_probability(2, 2, 2).unwrap();
        assert!((p - 0.78333).abs() < 1e-5, "got {p}");
        // Exact value is 47/60.
        assert!((p - 47.0 / 60.0).abs() < EPS);
    }

    #[test]
    fn six_pairings_in_order() {
        let pop = Population::new(2, 2, 2).unwrap();
        let pairings = pop.pairings();
        assert_eq!(pairings.len(), 6);
        let symbols: Vec<(&str, &str)> = pairings
            .iter()
            .map(|p| (p.first.symbol(), p.second.symbol()))
            .collect();
        assert_eq!(
            symbols,
            vec![("AA", "AA"), ("AA", "Aa"), ("AA", "aa"), ("Aa", "Aa"), ("Aa", "aa"), ("aa", "aa")]
        );
    }

    #[test]
    fn draw_probabilities_sum_to_one() {
        for (k, m, n) in [(2, 2, 2), (1, 0, 1), (0, 5, 0), (17, 3, 29)] {
            let pop = Population::new(k, m, n).unwrap();
            let total: f64 = pop.pairings().iter().map(|p| p.draw_probability).sum();
            assert!((total - 1.0).abs() < EPS, "({k}, {m}, {n}) sums to {total}");
        }
    }

    #[test]
    fn cross_genotype_pair_probability() {
        let pop = Population::new(2, 2, 2).unwrap();
        // 2 * 2 / C(6, 2)
        let p = pop.pairing_probability(Genotype::HomozygousDominant, Genotype::Heterozygous);
        assert!((p - 4.0 / 15.0).abs() < EPS);
    }

    #[test]
    fn single_genotype_populations() {
        assert!((dominant_probability(2, 0, 0).unwrap() - 1.0).abs() < EPS);
        assert!(dominant_probability(0, 0, 2).unwrap().abs() < EPS);
        assert!((dominant_probability(0, 2, 0).unwrap() - 0.75).abs() < EPS);
    }

    #[test]
    fn singleton_of_a_genotype_cannot_pair_with_itself() {
        // One AA and one aa: the only possible pair is AA x aa.
        assert!((dominant_probability(1, 0, 1).unwrap() - 1.0).abs() < EPS);
    }

    #[test]
    fn too_small_population() {
        assert_eq!(
            dominant_probability(0, 1, 0).unwrap_err(),
            StrandError::PopulationTooSmall { total: 1 }
        );
        assert_eq!(
            dominant_probability(0, 0, 0).unwrap_err(),
            StrandError::PopulationTooSmall { total: 0 }
        );
    }

    #[test]
    fn overflowing_total_is_rejected() {
        assert!(matches!(
            dominant_probability(u64::MAX, 1, 0),
            Err(StrandError::InvalidInput(_))
        ));
        assert!(matches!(
            Population::new(1, u64::MAX - 1, 1),
            Err(StrandError::InvalidInput(_))
        ));
    }

    #[test]
    fn largest_total_is_accepted() {
        let pop = Population::new(u64::MAX - 1, 1, 0).unwrap();
        assert_eq!(pop.total(), u64::MAX);
        let p = pop.dominant_probability();
        assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn accessors_report_counts() {
        let pop = Population::new(3, 4, 5).unwrap();
        assert_eq!(pop.dominant(), 3);
        assert_eq!(pop.heterozygous(), 4);
        assert_eq!(pop.recessive(), 5);
        assert_eq!(pop.count(Genotype::Heterozygous), 4);
        assert_eq!(pop.total(), 12);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let pop = Population::new(2, 2, 2).unwrap();
        let json = serde_json::to_string(&pop).unwrap();
        assert_eq!(json, r#"{"dominant":2,"heterozygous":2,"recessive":2}"#);
        let back: Population = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pop);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_rejects_too_small_population() {
        let err = serde_json::from_str::<Population>(
            r#"{"dominant":0,"heterozygous":1,"recessive":0}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("too small"), "{err}");
        assert!(serde_json::from_str::<Population>(
            r#"{"dominant":0,"heterozygous":0,"recessive":0}"#
        )
        .is_err());
    }
}
