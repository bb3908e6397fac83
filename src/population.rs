//! Population management.
//!
//! [`Population`] is the fixed-size working set of [`Individual`]s for one
//! generation. It owns fitness memoization, the elitist merge step, and the
//! diversity metric the adaptive controller feeds on.

use crate::genome::Genome;

/// A genome plus its memoized fitness score.
///
/// Fitness is computed once per payload and cached; mutating the genome via
/// [`genome_mut`](Individual::genome_mut) invalidates the cache. Higher
/// scores are better.
#[derive(Debug, Clone)]
pub struct Individual<G> {
    genome: G,
    fitness: Option<f64>,
}

impl<G: Genome> Individual<G> {
    /// Wraps a genome with no fitness computed yet.
    pub fn new(genome: G) -> Self {
        Self {
            genome,
            fitness: None,
        }
    }

    /// Read-only access to the payload.
    pub fn genome(&self) -> &G {
        &self.genome
    }

    /// Mutable access to the payload. Invalidates the cached fitness.
    pub fn genome_mut(&mut self) -> &mut G {
        self.fitness = None;
        &mut self.genome
    }

    /// The cached fitness, if evaluated.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// The fitness for ranking purposes.
    ///
    /// Unevaluated individuals rank as worst so they can never displace an
    /// evaluated one during truncation.
    pub fn score(&self) -> f64 {
        self.fitness.unwrap_or(f64::NEG_INFINITY)
    }

    pub(crate) fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }
}

/// The ordered working set of individuals for one generation.
///
/// Holds exactly `N` individuals after each generation settles; the engine
/// enforces this through [`merge_and_truncate`](Population::merge_and_truncate).
#[derive(Debug, Clone)]
pub struct Population<G> {
    individuals: Vec<Individual<G>>,
}

impl<G: Genome> Population<G> {
    /// Builds a population from pre-constructed individuals.
    pub fn new(individuals: Vec<Individual<G>>) -> Self {
        Self { individuals }
    }

    /// The current individuals, in rank order after a settled generation.
    pub fn individuals(&self) -> &[Individual<G>] {
        &self.individuals
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Whether the population is empty.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// The fittest individual, if any are evaluated.
    pub fn best(&self) -> Option<&Individual<G>> {
        self.individuals.iter().max_by(|a, b| {
            a.score()
                .partial_cmp(&b.score())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    /// Evaluates every individual lacking a cached fitness.
    ///
    /// Idempotent: already-scored individuals are not re-evaluated, so the
    /// evaluator may be called any number of times without side effects
    /// beyond filling the cache.
    pub fn evaluate<F: Fn(&G) -> f64>(&mut self, fitness: &F) {
        for ind in &mut self.individuals {
            if ind.fitness.is_none() {
                ind.fitness = Some(fitness(&ind.genome));
            }
        }
    }

    /// Merges offspring and truncates back to exactly `n` by fitness.
    ///
    /// Elitist replacement: the lowest-scoring individuals are dropped
    /// first; equal scores break stably by insertion order (existing members
    /// before offspring). Leaves the population sorted best-first.
    pub(crate) fn merge_and_truncate(&mut self, offspring: Vec<Individual<G>>, n: usize) {
        self.individuals.extend(offspring);
        self.individuals.sort_by(|a, b| {
            b.score()
                .partial_cmp(&a.score())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        self.individuals.truncate(n);
    }

    /// Mean pairwise payload distance over the current individuals.
    ///
    /// Deterministic given the population's contents. Returns `0.0` for
    /// fewer than two individuals or when all payloads are identical;
    /// strictly positive as soon as any two payloads differ. Computed on
    /// demand, never cached.
    pub fn diversity(&self) -> f64 {
        let n = self.individuals.len();
        if n < 2 {
            return 0.0;
        }
        let mut total = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                total += self.individuals[i]
                    .genome
                    .distance(&self.individuals[j].genome);
            }
        }
        total / (n * (n - 1) / 2) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::scalar::Scalar;
    use std::cell::Cell;

    fn scalar(value: f64) -> Individual<Scalar> {
        let mut ind = Individual::new(Scalar::new(value));
        ind.set_fitness(value);
        ind
    }

    fn unscored(value: f64) -> Individual<Scalar> {
        Individual::new(Scalar::new(value))
    }

    #[test]
    fn test_evaluate_fills_only_missing() {
        let calls = Cell::new(0usize);
        let mut pop = Population::new(vec![scalar(1.0), unscored(2.0), unscored(3.0)]);

        pop.evaluate(&|g: &Scalar| {
            calls.set(calls.get() + 1);
            g.value()
        });
        assert_eq!(calls.get(), 2, "cached individual must not be re-scored");

        pop.evaluate(&|g: &Scalar| {
            calls.set(calls.get() + 1);
            g.value()
        });
        assert_eq!(calls.get(), 2, "second pass must be a no-op");
    }

    #[test]
    fn test_genome_mut_invalidates_cache() {
        let mut ind = scalar(1.0);
        assert_eq!(ind.fitness(), Some(1.0));
        let _ = ind.genome_mut();
        assert_eq!(ind.fitness(), None);
        assert_eq!(ind.score(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_merge_and_truncate_keeps_fittest() {
        let mut pop = Population::new(vec![scalar(1.0), scalar(5.0), scalar(3.0)]);
        pop.merge_and_truncate(vec![scalar(4.0), scalar(0.5)], 3);

        assert_eq!(pop.len(), 3);
        let scores: Vec<f64> = pop.individuals().iter().map(|i| i.score()).collect();
        assert_eq!(scores, vec![5.0, 4.0, 3.0]);
    }

    #[test]
    fn test_merge_ties_break_by_insertion_order() {
        let mut pop = Population::new(vec![scalar(5.0), scalar(2.0)]);

        // Offspring with the same score as the existing member: the existing
        // one was inserted first and must survive the tie.
        let mut tied = scalar(1.0);
        tied.set_fitness(2.0);
        pop.merge_and_truncate(vec![tied], 2);

        assert_eq!(pop.len(), 2);
        assert_eq!(pop.individuals()[1].genome().value(), 2.0);
    }

    #[test]
    fn test_unevaluated_never_displace_evaluated() {
        let mut pop = Population::new(vec![scalar(-100.0)]);
        pop.merge_and_truncate(vec![unscored(7.0)], 1);
        assert_eq!(pop.individuals()[0].fitness(), Some(-100.0));
    }

    #[test]
    fn test_diversity_zero_for_identical() {
        let pop = Population::new(vec![scalar(2.0), scalar(2.0), scalar(2.0)]);
        assert_eq!(pop.diversity(), 0.0);
    }

    #[test]
    fn test_diversity_zero_for_singleton() {
        let pop: Population<Scalar> = Population::new(vec![scalar(2.0)]);
        assert_eq!(pop.diversity(), 0.0);
    }

    #[test]
    fn test_diversity_positive_for_distinct() {
        let pop = Population::new(vec![scalar(2.0), scalar(2.0), scalar(3.0)]);
        assert!(pop.diversity() > 0.0);
    }

    #[test]
    fn test_diversity_is_mean_pairwise_distance() {
        let pop = Population::new(vec![scalar(0.0), scalar(1.0), scalar(2.0)]);
        // pairs: |0-1| + |0-2| + |1-2| = 4, over 3 pairs
        assert!((pop.diversity() - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_best() {
        let pop = Population::new(vec![scalar(1.0), scalar(5.0), scalar(3.0)]);
        assert_eq!(pop.best().unwrap().score(), 5.0);
    }
}
