//! Continuous scalar genome.
//!
//! A single bounded real value. Pairing is the arithmetic midpoint of the
//! parents (deterministic); mutation adds a uniform perturbation and clamps
//! back into bounds. The canonical use is maximizing a 1-D curve.

use super::{Genome, GenomeParams};
use crate::error::ConfigError;
use rand::Rng;

/// A candidate solution holding one real value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scalar {
    value: f64,
}

impl Scalar {
    /// Wraps a known value, bypassing random initialization.
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// The current payload value.
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Initialization parameters for [`Scalar`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalarInit {
    /// Lower bound of the search interval.
    pub lower: f64,
    /// Upper bound of the search interval.
    pub upper: f64,
    /// Fraction of the interval used for initial sampling, in `(0, 1]`.
    ///
    /// Values below 1.0 bias initialization away from the upper boundary:
    /// genomes are drawn from `[lower, lower + (upper - lower) * init_bias)`.
    /// Mutation is still free to reach the full interval.
    pub init_bias: f64,
}

impl ScalarInit {
    /// Uniform initialization over the whole of `[lower, upper)`.
    pub fn new(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            init_bias: 1.0,
        }
    }

    /// Sets the init-time bias fraction.
    pub fn with_init_bias(mut self, bias: f64) -> Self {
        self.init_bias = bias;
        self
    }
}

impl GenomeParams for ScalarInit {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.lower > self.upper {
            return Err(ConfigError::InvalidBounds {
                lower: self.lower,
                upper: self.upper,
            });
        }
        if !(self.init_bias > 0.0 && self.init_bias <= 1.0) {
            return Err(ConfigError::InvalidInitBias(self.init_bias));
        }
        Ok(())
    }
}

/// Pairing parameters for [`Scalar`].
///
/// The midpoint crossover takes no options; this is a unit marker.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalarPair;

impl GenomeParams for ScalarPair {}

/// Mutation parameters for [`Scalar`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalarMutate {
    /// Half-width of the uniform perturbation interval.
    pub intensity: f64,
    /// Lower clamp bound.
    pub lower: f64,
    /// Upper clamp bound.
    pub upper: f64,
}

impl ScalarMutate {
    /// Perturbation of `[-intensity, +intensity]` clamped to `[lower, upper]`.
    pub fn new(intensity: f64, lower: f64, upper: f64) -> Self {
        Self {
            intensity,
            lower,
            upper,
        }
    }
}

impl GenomeParams for ScalarMutate {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.lower > self.upper {
            return Err(ConfigError::InvalidBounds {
                lower: self.lower,
                upper: self.upper,
            });
        }
        if self.intensity < 0.0 {
            return Err(ConfigError::NegativeIntensity(self.intensity));
        }
        Ok(())
    }
}

impl crate::adaptive::HasIntensity for ScalarMutate {
    fn intensity(&self) -> f64 {
        self.intensity
    }

    fn set_intensity(&mut self, intensity: f64) {
        self.intensity = intensity.max(0.0);
    }
}

impl Genome for Scalar {
    type Init = ScalarInit;
    type Pair = ScalarPair;
    type Mutate = ScalarMutate;

    fn create<R: Rng>(params: &ScalarInit, rng: &mut R) -> Self {
        let span = (params.upper - params.lower) * params.init_bias;
        let value = if span > 0.0 {
            rng.random_range(params.lower..params.lower + span)
        } else {
            params.lower
        };
        Scalar { value }
    }

    fn pair<R: Rng>(&self, other: &Self, _params: &ScalarPair, _rng: &mut R) -> Self {
        Scalar {
            value: self.value + (other.value - self.value) / 2.0,
        }
    }

    fn mutate<R: Rng>(&mut self, params: &ScalarMutate, rng: &mut R) {
        if params.intensity > 0.0 {
            self.value += rng.random_range(-params.intensity..=params.intensity);
        }
        self.value = self.value.clamp(params.lower, params.upper);
    }

    fn distance(&self, other: &Self) -> f64 {
        (self.value - other.value).abs()
    }
}
