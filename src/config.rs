//! Engine configuration.
//!
//! [`EvolutionConfig`] holds the parameters of the generational loop.
//! Genome-specific parameters (`init`/`pair`/`mutate`) live in the genome's
//! own parameter structs and are passed to [`Evolution::new`](crate::Evolution::new)
//! alongside this config.

use crate::error::ConfigError;
use crate::selection::Selection;

/// Configuration for the evolution engine.
///
/// # Defaults
///
/// ```
/// use genepool::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.n_offsprings, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use genepool::{EvolutionConfig, Selection};
///
/// let config = EvolutionConfig::default()
///     .with_population_size(20)
///     .with_n_offsprings(5)
///     .with_selection(Selection::Fittest(0.2))
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionConfig {
    /// Number of individuals in the population.
    ///
    /// The population holds exactly this many individuals after every
    /// generation settles. Typical range: 20–500.
    pub population_size: usize,

    /// Number of offspring produced per generation.
    ///
    /// Offspring compete with the existing population for the
    /// `population_size` slots (elitist replacement), so values larger than
    /// the population are allowed.
    pub n_offsprings: usize,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            n_offsprings: 50,
            selection: Selection::default(),
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the offspring count per generation.
    pub fn with_n_offsprings(mut self, n: usize) -> Self {
        self.n_offsprings = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.n_offsprings == 0 {
            return Err(ConfigError::NoOffsprings);
        }
        self.selection.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvolutionConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.n_offsprings, 50);
        assert_eq!(config.selection, Selection::Tournament(3));
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EvolutionConfig::default()
            .with_population_size(20)
            .with_n_offsprings(5)
            .with_selection(Selection::Fittest(0.2))
            .with_seed(42);

        assert_eq!(config.population_size, 20);
        assert_eq!(config.n_offsprings, 5);
        assert_eq!(config.selection, Selection::Fittest(0.2));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_population_too_small() {
        assert_eq!(
            EvolutionConfig::default()
                .with_population_size(1)
                .validate(),
            Err(ConfigError::PopulationTooSmall(1))
        );
    }

    #[test]
    fn test_validate_zero_offsprings() {
        assert_eq!(
            EvolutionConfig::default().with_n_offsprings(0).validate(),
            Err(ConfigError::NoOffsprings)
        );
    }

    #[test]
    fn test_validate_bad_selection() {
        assert!(EvolutionConfig::default()
            .with_selection(Selection::Tournament(0))
            .validate()
            .is_err());
        assert!(EvolutionConfig::default()
            .with_selection(Selection::Fittest(0.0))
            .validate()
            .is_err());
    }

    #[test]
    fn test_offsprings_may_exceed_population() {
        assert!(EvolutionConfig::default()
            .with_population_size(10)
            .with_n_offsprings(100)
            .validate()
            .is_ok());
    }
}
