//! Population-based evolutionary optimization engine.
//!
//! A generic, representation-agnostic genetic algorithm built on trait-based
//! abstractions. Users define their solution encoding by implementing
//! [`Genome`], which specifies how to create, recombine, and mutate
//! candidates; a plain `Fn(&G) -> f64` scores them (higher is better).
//!
//! # Core Traits
//!
//! - [`Genome`]: A candidate representation with `create`/`pair`/`mutate`
//!   operators and a pairwise distance used for diversity measurement
//! - [`AdaptivePolicy`]: Optional between-generation parameter feedback
//!
//! # Key Types
//!
//! - [`EvolutionConfig`]: Engine parameters (population size, offspring
//!   count, selection, seed)
//! - [`Evolution`]: Executes the generational loop via [`Evolution::evolve`]
//! - [`Population`] / [`Individual`]: The working set and its members
//! - [`Selection`]: Parent selection strategies (tournament, truncation)
//!
//! # Built-in Genomes
//!
//! - [`genome::scalar::Scalar`]: Continuous scalar with midpoint crossover
//!   and bounded uniform perturbation
//! - [`genome::permutation::Permutation`]: Fixed-set permutation (tours,
//!   orderings) with order-crossover-with-repair and segment mutations
//!
//! # Example
//!
//! ```
//! use genepool::genome::scalar::{Scalar, ScalarInit, ScalarMutate, ScalarPair};
//! use genepool::{Evolution, EvolutionConfig, Selection};
//!
//! let config = EvolutionConfig::default()
//!     .with_population_size(20)
//!     .with_n_offsprings(5)
//!     .with_selection(Selection::Tournament(3))
//!     .with_seed(42);
//!
//! let mut evo = Evolution::new(
//!     &config,
//!     &ScalarInit::new(0.0, 4.0),
//!     ScalarPair,
//!     ScalarMutate::new(0.25, 0.0, 4.0),
//!     |g: &Scalar| {
//!         let x = g.value();
//!         -x * (x - 1.0) * (x - 2.0) * (x - 3.0) * (x - 4.0)
//!     },
//! )
//! .unwrap();
//!
//! for _ in 0..100 {
//!     evo.evolve(1);
//! }
//! let best = evo.best().unwrap();
//! assert!(best.score() > 1.0);
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

pub mod adaptive;
pub mod config;
pub mod engine;
pub mod error;
pub mod genome;
pub mod population;
pub mod random;
pub mod selection;

pub use adaptive::{AdaptivePolicy, HasIntensity, InverseDiversity};
pub use config::EvolutionConfig;
pub use engine::Evolution;
pub use error::ConfigError;
pub use genome::{Genome, GenomeParams};
pub use population::{Individual, Population};
pub use selection::Selection;
