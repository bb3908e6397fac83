//! Adaptive mutation parameter control.
//!
//! An optional feedback loop the engine applies between generations: after
//! each `evolve`, the installed [`AdaptivePolicy`] sees the fresh population
//! diversity and may rewrite the mutation parameters. The provided
//! [`InverseDiversity`] policy raises mutation intensity as the population
//! converges and lowers it as it spreads out — a heuristic anti-stagnation
//! mechanism, not a convergence guarantee.

/// Diversity floor used when inverting near-zero diversity values.
///
/// A fully converged population reports diversity `0.0`; clamping to this
/// floor keeps the inverse finite, after which the policy's own
/// `max_intensity` cap applies.
const DIVERSITY_FLOOR: f64 = 1e-9;

/// Mutation parameter structs that expose a scalar intensity knob.
///
/// Implemented by [`ScalarMutate`](crate::genome::scalar::ScalarMutate);
/// user-defined parameter structs can opt in to make
/// [`InverseDiversity`] applicable to them.
pub trait HasIntensity {
    /// Current mutation intensity.
    fn intensity(&self) -> f64;

    /// Replaces the mutation intensity.
    fn set_intensity(&mut self, intensity: f64);
}

/// A between-generation feedback policy over mutation parameters.
///
/// Applied by the engine once per generation, after replacement settles and
/// before the next generation starts. Policies are deliberately separate
/// from the generational loop so feedback behavior is independently
/// testable and optional per run.
pub trait AdaptivePolicy<P>: Send + Sync {
    /// Adjusts `params` given the population's current diversity.
    fn adjust(&self, diversity: f64, params: &mut P);
}

/// Rescales mutation intensity inversely to population diversity.
///
/// `intensity = min(scale / max(diversity, floor), max_intensity)`
///
/// Low diversity (convergence) drives the intensity up toward
/// `max_intensity`; high diversity shrinks it. The floor guards the
/// division when all individuals are payload-identical.
///
/// # Example
///
/// ```
/// use genepool::{AdaptivePolicy, InverseDiversity};
/// use genepool::genome::scalar::ScalarMutate;
///
/// let policy = InverseDiversity::new(1.0, 10.0);
/// let mut params = ScalarMutate::new(0.25, 0.0, 4.0);
/// policy.adjust(0.5, &mut params);
/// assert_eq!(params.intensity, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InverseDiversity {
    /// Numerator of the inverse relationship.
    pub scale: f64,
    /// Hard cap on the resulting intensity.
    pub max_intensity: f64,
}

impl InverseDiversity {
    /// `intensity = min(scale / diversity, max_intensity)`.
    pub fn new(scale: f64, max_intensity: f64) -> Self {
        Self {
            scale,
            max_intensity,
        }
    }
}

impl<P: HasIntensity> AdaptivePolicy<P> for InverseDiversity {
    fn adjust(&self, diversity: f64, params: &mut P) {
        let d = diversity.max(DIVERSITY_FLOOR);
        params.set_intensity((self.scale / d).min(self.max_intensity));
    }
}
