//! Selection strategies.
//!
//! Selection determines which individuals become parents for pairing.
//! Both strategies assume **maximization** (higher fitness = better) and
//! tolerate picking the same individual twice for one pair.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use crate::error::ConfigError;
use crate::genome::Genome;
use crate::population::Population;
use rand::Rng;

/// Strategy for choosing parents from the population.
///
/// # Examples
///
/// ```
/// use genepool::Selection;
///
/// // Tournament of 3 (moderate selection pressure)
/// let sel = Selection::Tournament(3);
///
/// // Uniform draw from the fittest 20%
/// let sel = Selection::Fittest(0.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament selection: sample `k` individuals at random (with
    /// replacement), return the fittest of the sample.
    ///
    /// Higher `k` = stronger selection pressure.
    /// - k=2: light pressure (good for diversity)
    /// - k=3-5: moderate pressure (typical default)
    /// - k>5: strong pressure (risk of premature convergence)
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Truncation selection: draw uniformly from the top fraction of the
    /// population ranked by fitness.
    ///
    /// The fraction must lie in `(0, 1]`; at least one individual is always
    /// eligible. Ranking ties break stably by insertion order.
    ///
    /// # Complexity
    /// O(n log n) per selection (rank sort)
    Fittest(f64),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Checks the strategy's parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Selection::Tournament(k) if k == 0 => Err(ConfigError::EmptyTournament),
            Selection::Fittest(f) if !(f > 0.0 && f <= 1.0) => {
                Err(ConfigError::InvalidFraction(f))
            }
            _ => Ok(()),
        }
    }

    /// Selects one parent index from the population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<G: Genome, R: Rng>(&self, population: &Population<G>, rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match *self {
            Selection::Tournament(k) => tournament(population, k, rng),
            Selection::Fittest(fraction) => fittest(population, fraction, rng),
        }
    }
}

/// Tournament selection: sample k indices, return the fittest.
fn tournament<G: Genome, R: Rng>(population: &Population<G>, k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = population.len();
    let individuals = population.individuals();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if individuals[idx].score() > individuals[best_idx].score() {
            best_idx = idx;
        }
    }
    best_idx
}

/// Truncation selection: uniform draw from the top fraction by rank.
fn fittest<G: Genome, R: Rng>(population: &Population<G>, fraction: f64, rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let mut ranked: Vec<usize> = (0..n).collect();
    // Stable sort: equal scores keep insertion order.
    ranked.sort_by(|&a, &b| {
        population.individuals()[b]
            .score()
            .partial_cmp(&population.individuals()[a].score())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let top = ((n as f64 * fraction).ceil() as usize).clamp(1, n);
    ranked[rng.random_range(0..top)]
}
