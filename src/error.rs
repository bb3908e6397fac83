//! Error types for the evolution engine.
//!
//! All configuration problems surface as [`ConfigError`] at construction
//! time, before the first generation runs. Per-generation numeric edge cases
//! (zero diversity, degenerate segment draws) are handled locally with
//! defined fallbacks and never become errors.

use thiserror::Error;

/// A configuration or parameter validation failure.
///
/// Returned by [`EvolutionConfig::validate`](crate::EvolutionConfig::validate)
/// and by [`Evolution::new`](crate::Evolution::new), which also validates the
/// genome parameter structs via [`GenomeParams`](crate::GenomeParams).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Population size below the minimum needed to select parent pairs.
    #[error("population size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    /// No offspring per generation means the loop can never make progress.
    #[error("n_offsprings must be at least 1")]
    NoOffsprings,

    /// Tournament selection needs at least one contestant.
    #[error("tournament size must be at least 1")]
    EmptyTournament,

    /// Truncation selection fraction outside `(0, 1]`.
    #[error("fittest fraction must be in (0, 1], got {0}")]
    InvalidFraction(f64),

    /// Numeric bounds with `lower > upper`.
    #[error("invalid bounds: lower {lower} exceeds upper {upper}")]
    InvalidBounds { lower: f64, upper: f64 },

    /// Initialization bias outside `(0, 1]`.
    #[error("init bias must be in (0, 1], got {0}")]
    InvalidInitBias(f64),

    /// Mutation intensity below zero.
    #[error("mutation intensity must be non-negative, got {0}")]
    NegativeIntensity(f64),

    /// A `min..=max` length range with `min > max`.
    #[error("empty {what} range: min {min} exceeds max {max}")]
    EmptyLengthRange {
        what: &'static str,
        min: usize,
        max: usize,
    },

    /// A signed `min..=max` shift range with `min > max`.
    #[error("empty shift range: min {min} exceeds max {max}")]
    EmptyShiftRange { min: isize, max: isize },

    /// A probability outside `[0, 1]`.
    #[error("{what} must be a probability in [0, 1], got {value}")]
    InvalidProbability { what: &'static str, value: f64 },

    /// Gene segment length of zero.
    #[error("{what} must be at least 1")]
    ZeroLength { what: &'static str },

    /// A permutation genome over an empty location set.
    #[error("permutation length must be at least 1")]
    EmptyPermutation,
}
