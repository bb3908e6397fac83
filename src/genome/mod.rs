//! Genome trait definitions and built-in representations.
//!
//! The central trait — [`Genome`] — defines the contract between the generic
//! engine and a concrete solution encoding. Two representations ship with
//! the crate:
//!
//! - [`scalar`]: a single bounded real value
//! - [`permutation`]: an ordering over a fixed location set
//!
//! The raw permutation building blocks (crossover, segment mutations) live
//! in [`operators`] as free functions so they can be reused and tested
//! independently of the [`Genome`] plumbing.

pub mod operators;
pub mod permutation;
pub mod scalar;

use crate::error::ConfigError;
use rand::Rng;

/// Parameter struct accepted by a genome operator.
///
/// Validation runs once at engine construction; malformed parameters are
/// rejected as [`ConfigError`] before the first generation, never inside
/// the loop.
pub trait GenomeParams {
    /// Checks the parameters for internal consistency.
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

/// A candidate solution representation.
///
/// The engine is generic over this trait: it never inspects the payload,
/// only drives the three lifecycle operators and the distance metric.
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct BitString(Vec<bool>);
///
/// impl Genome for BitString {
///     type Init = usize;        // number of bits
///     type Pair = ();
///     type Mutate = ();
///
///     fn create<R: Rng>(len: &usize, rng: &mut R) -> Self { ... }
///     fn pair<R: Rng>(&self, other: &Self, _: &(), rng: &mut R) -> Self { ... }
///     fn mutate<R: Rng>(&mut self, _: &(), rng: &mut R) { ... }
///     fn distance(&self, other: &Self) -> f64 { ... }
/// }
/// ```
///
/// # Randomness
///
/// Every operator takes `&mut R where R: Rng`. The engine passes its single
/// owned RNG; operators must not construct their own sources, or runs stop
/// being reproducible from one seed.
pub trait Genome: Clone + Send + Sync + 'static {
    /// Parameters for [`create`](Genome::create).
    type Init: GenomeParams + 'static;
    /// Parameters for [`pair`](Genome::pair).
    type Pair: GenomeParams + 'static;
    /// Parameters for [`mutate`](Genome::mutate).
    type Mutate: GenomeParams + 'static;

    /// Creates a random genome.
    ///
    /// Called during population initialization. The result must be a valid
    /// (but not necessarily good) candidate.
    fn create<R: Rng>(params: &Self::Init, rng: &mut R) -> Self;

    /// Produces one offspring by recombining `self` with `other`.
    ///
    /// Self-pairing (`self` and `other` being the same individual) must be
    /// tolerated and produce a valid genome.
    fn pair<R: Rng>(&self, other: &Self, params: &Self::Pair, rng: &mut R) -> Self;

    /// Perturbs the genome in place.
    ///
    /// Any representation invariant (bounds, permutation validity) must hold
    /// after mutation.
    fn mutate<R: Rng>(&mut self, params: &Self::Mutate, rng: &mut R);

    /// Distance between two payloads, used for population diversity.
    ///
    /// Must be non-negative, symmetric, and zero exactly when the payloads
    /// are identical.
    fn distance(&self, other: &Self) -> f64;
}

impl GenomeParams for () {}
