//! Permutation genome.
//!
//! An ordering over the fixed location set `0..len`, suitable for tours and
//! sequencing problems. The payload is a valid permutation at every
//! lifecycle stage: creation shuffles the full set, pairing uses order
//! crossover with collision repair, and mutation composes segment reversal,
//! random swaps, and a signed rotation — all permutation-preserving.

use super::operators::{order_crossover_with_repair, random_swaps, reverse_segment, rotate_signed};
use super::{Genome, GenomeParams};
use crate::error::ConfigError;
use rand::seq::SliceRandom;
use rand::Rng;

/// A candidate solution holding an ordering of `0..len` location indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    order: Vec<usize>,
}

impl Permutation {
    /// The current visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the location set is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Initialization parameters for [`Permutation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PermutationInit {
    /// Size of the location set; genomes order the indices `0..len`.
    pub len: usize,
}

impl PermutationInit {
    /// Random orderings over `0..len`.
    pub fn new(len: usize) -> Self {
        Self { len }
    }
}

impl GenomeParams for PermutationInit {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.len == 0 {
            return Err(ConfigError::EmptyPermutation);
        }
        Ok(())
    }
}

/// Pairing parameters for [`Permutation`]: order-crossover shape controls.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PermutationPair {
    /// Minimum length of the copied segment, at least 1.
    pub min_gene_len: usize,
    /// Maximum length of the copied segment.
    pub max_gene_len: usize,
    /// Probability of copying the segment in reverse order.
    pub reverse_chance: f64,
}

impl PermutationPair {
    /// Segment lengths drawn from `min_gene_len..=max_gene_len`.
    pub fn new(min_gene_len: usize, max_gene_len: usize, reverse_chance: f64) -> Self {
        Self {
            min_gene_len,
            max_gene_len,
            reverse_chance,
        }
    }
}

impl GenomeParams for PermutationPair {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_gene_len == 0 {
            return Err(ConfigError::ZeroLength {
                what: "min_gene_len",
            });
        }
        if self.min_gene_len > self.max_gene_len {
            return Err(ConfigError::EmptyLengthRange {
                what: "gene length",
                min: self.min_gene_len,
                max: self.max_gene_len,
            });
        }
        if !(0.0..=1.0).contains(&self.reverse_chance) {
            return Err(ConfigError::InvalidProbability {
                what: "reverse_chance",
                value: self.reverse_chance,
            });
        }
        Ok(())
    }
}

/// Mutation parameters for [`Permutation`].
///
/// The three operators run in sequence on every mutation: segment reversal,
/// up to `swap_rate` random position swaps, then a signed rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PermutationMutate {
    /// Upper bound on the number of random swaps per mutation.
    pub swap_rate: usize,
    /// Minimum reversal segment length.
    pub min_reverse_len: usize,
    /// Maximum reversal segment length.
    pub max_reverse_len: usize,
    /// Most negative rotation offset.
    pub min_shift: isize,
    /// Most positive rotation offset.
    pub max_shift: isize,
}

impl PermutationMutate {
    pub fn new(
        swap_rate: usize,
        min_reverse_len: usize,
        max_reverse_len: usize,
        min_shift: isize,
        max_shift: isize,
    ) -> Self {
        Self {
            swap_rate,
            min_reverse_len,
            max_reverse_len,
            min_shift,
            max_shift,
        }
    }
}

impl GenomeParams for PermutationMutate {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_reverse_len > self.max_reverse_len {
            return Err(ConfigError::EmptyLengthRange {
                what: "reverse length",
                min: self.min_reverse_len,
                max: self.max_reverse_len,
            });
        }
        if self.min_shift > self.max_shift {
            return Err(ConfigError::EmptyShiftRange {
                min: self.min_shift,
                max: self.max_shift,
            });
        }
        Ok(())
    }
}

impl Genome for Permutation {
    type Init = PermutationInit;
    type Pair = PermutationPair;
    type Mutate = PermutationMutate;

    fn create<R: Rng>(params: &PermutationInit, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..params.len).collect();
        order.shuffle(rng);
        Permutation { order }
    }

    fn pair<R: Rng>(&self, other: &Self, params: &PermutationPair, rng: &mut R) -> Self {
        let n = self.order.len();
        if n < 2 {
            return self.clone();
        }

        let start = rng.random_range(0..n);
        let gene_len = rng.random_range(params.min_gene_len..=params.max_gene_len);
        let end = (start + gene_len).min(n);
        let reverse = rng.random_bool(params.reverse_chance);

        Permutation {
            order: order_crossover_with_repair(&self.order, &other.order, start, end, reverse),
        }
    }

    fn mutate<R: Rng>(&mut self, params: &PermutationMutate, rng: &mut R) {
        reverse_segment(
            &mut self.order,
            params.min_reverse_len,
            params.max_reverse_len,
            rng,
        );
        random_swaps(&mut self.order, params.swap_rate, rng);
        // Draw through i64: rand does not sample isize ranges directly.
        let offset = rng.random_range(params.min_shift as i64..=params.max_shift as i64);
        rotate_signed(&mut self.order, offset as isize);
    }

    fn distance(&self, other: &Self) -> f64 {
        // Normalized positional distance: fraction of positions whose
        // locations differ.
        let n = self.order.len().min(other.order.len());
        if n == 0 {
            return 0.0;
        }
        let mismatches = self
            .order
            .iter()
            .zip(other.order.iter())
            .filter(|(a, b)| a != b)
            .count();
        mismatches as f64 / n as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::operators::is_valid_permutation;
    use crate::random::create_rng;

    fn default_pair() -> PermutationPair {
        PermutationPair::new(1, 8, 0.5)
    }

    fn default_mutate() -> PermutationMutate {
        PermutationMutate::new(3, 2, 5, -2, 2)
    }

    #[test]
    fn test_create_is_permutation() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let g = Permutation::create(&PermutationInit::new(20), &mut rng);
            assert_eq!(g.len(), 20);
            assert!(is_valid_permutation(g.order()));
        }
    }

    #[test]
    fn test_create_varies() {
        let mut rng = create_rng(42);
        let a = Permutation::create(&PermutationInit::new(20), &mut rng);
        let b = Permutation::create(&PermutationInit::new(20), &mut rng);
        assert_ne!(a, b, "two shuffles of 20 elements should differ");
    }

    #[test]
    fn test_pair_preserves_permutation_over_many_draws() {
        let mut rng = create_rng(42);
        let params = default_pair();
        let a = Permutation::create(&PermutationInit::new(20), &mut rng);
        let b = Permutation::create(&PermutationInit::new(20), &mut rng);

        for _ in 0..1000 {
            let child = a.pair(&b, &params, &mut rng);
            assert_eq!(child.len(), 20);
            assert!(
                is_valid_permutation(child.order()),
                "invalid offspring: {:?}",
                child.order()
            );
        }
    }

    #[test]
    fn test_pair_gene_len_exceeding_length() {
        let mut rng = create_rng(42);
        // max_gene_len far beyond the sequence length forces end == len draws
        let params = PermutationPair::new(1, 100, 0.5);
        let a = Permutation::create(&PermutationInit::new(5), &mut rng);
        let b = Permutation::create(&PermutationInit::new(5), &mut rng);
        for _ in 0..500 {
            let child = a.pair(&b, &params, &mut rng);
            assert!(is_valid_permutation(child.order()));
        }
    }

    #[test]
    fn test_self_pair_is_valid() {
        let mut rng = create_rng(42);
        let params = default_pair();
        let a = Permutation::create(&PermutationInit::new(10), &mut rng);
        for _ in 0..100 {
            let child = a.pair(&a, &params, &mut rng);
            assert!(is_valid_permutation(child.order()));
        }
    }

    #[test]
    fn test_pair_single_element() {
        let mut rng = create_rng(42);
        let a = Permutation { order: vec![0] };
        let child = a.pair(&a, &default_pair(), &mut rng);
        assert_eq!(child.order(), &[0]);
    }

    #[test]
    fn test_mutate_preserves_permutation() {
        let mut rng = create_rng(42);
        let params = default_mutate();
        let mut g = Permutation::create(&PermutationInit::new(20), &mut rng);
        for _ in 0..1000 {
            g.mutate(&params, &mut rng);
            assert!(
                is_valid_permutation(g.order()),
                "mutation broke the permutation: {:?}",
                g.order()
            );
        }
    }

    #[test]
    fn test_mutate_shift_only_rotates() {
        let mut rng = create_rng(42);
        // Reversal and swaps disabled: only the signed shift runs, so every
        // mutation must yield a rotation of the original order.
        let params = PermutationMutate::new(0, 0, 0, -2, 2);
        let original: Vec<usize> = vec![3, 0, 4, 1, 2];

        let rotations: Vec<Vec<usize>> = (0..5)
            .map(|k| {
                let mut r = original.clone();
                r.rotate_left(k);
                r
            })
            .collect();

        let mut seen_nontrivial = false;
        for _ in 0..200 {
            let mut g = Permutation {
                order: original.clone(),
            };
            g.mutate(&params, &mut rng);
            assert!(
                rotations.iter().any(|r| r == g.order()),
                "shift-only mutation is not a rotation: {:?}",
                g.order()
            );
            if g.order() != original.as_slice() {
                seen_nontrivial = true;
            }
        }
        assert!(seen_nontrivial, "nonzero shifts should occur over 200 draws");
    }

    #[test]
    fn test_mutate_asymmetric_shift_range() {
        let mut rng = create_rng(42);
        // Negative-only shift range exercises the signed draw directly.
        let params = PermutationMutate::new(0, 0, 0, -3, -1);
        for _ in 0..200 {
            let mut g = Permutation::create(&PermutationInit::new(8), &mut rng);
            g.mutate(&params, &mut rng);
            assert!(is_valid_permutation(g.order()));
        }
    }

    #[test]
    fn test_distance_zero_for_identical() {
        let a = Permutation {
            order: vec![0, 1, 2, 3],
        };
        assert_eq!(a.distance(&a.clone()), 0.0);
    }

    #[test]
    fn test_distance_positive_for_distinct() {
        let a = Permutation {
            order: vec![0, 1, 2, 3],
        };
        let b = Permutation {
            order: vec![1, 0, 2, 3],
        };
        assert_eq!(a.distance(&b), 0.5);
        assert_eq!(b.distance(&a), 0.5);
    }

    #[test]
    fn test_distance_fully_different() {
        let a = Permutation {
            order: vec![0, 1, 2, 3],
        };
        let b = Permutation {
            order: vec![1, 2, 3, 0],
        };
        assert_eq!(a.distance(&b), 1.0);
    }

    #[test]
    fn test_param_validation() {
        assert!(PermutationInit::new(0).validate().is_err());
        assert!(PermutationInit::new(1).validate().is_ok());

        assert!(PermutationPair::new(0, 8, 0.5).validate().is_err());
        assert!(PermutationPair::new(9, 8, 0.5).validate().is_err());
        assert!(PermutationPair::new(1, 8, 1.5).validate().is_err());
        assert!(PermutationPair::new(1, 8, 0.5).validate().is_ok());

        assert!(PermutationMutate::new(3, 5, 2, -2, 2).validate().is_err());
        assert!(PermutationMutate::new(3, 2, 5, 2, -2).validate().is_err());
        assert!(PermutationMutate::new(3, 2, 5, -2, 2).validate().is_ok());
    }
}
