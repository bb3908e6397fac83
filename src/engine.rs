//! The generational loop.
//!
//! [`Evolution`] orchestrates one generation per [`evolve`](Evolution::evolve)
//! call: evaluate, select parent pairs, pair into offspring, mutate, merge
//! with elitist replacement, and report the fittest. The engine keeps no
//! history beyond the current population; the caller owns the outer loop and
//! any convergence criterion.

use crate::adaptive::AdaptivePolicy;
use crate::config::EvolutionConfig;
use crate::error::ConfigError;
use crate::genome::{Genome, GenomeParams};
use crate::population::{Individual, Population};
use crate::random::create_rng;
use crate::selection::Selection;
use rand::rngs::SmallRng;

/// The evolution engine.
///
/// Constructed once; persists across all `evolve` calls. Single-threaded and
/// synchronous: each call runs to completion, and the returned individuals
/// are read-only snapshots valid until the next call.
///
/// # Usage
///
/// ```ignore
/// let mut evo = Evolution::new(&config, &init, pair, mutate, fitness)?;
/// for _ in 0..100 {
///     let fittest = evo.evolve(3);
///     // render / report fittest here, between generations
/// }
/// ```
pub struct Evolution<G: Genome, F> {
    population: Population<G>,
    population_size: usize,
    n_offsprings: usize,
    selection: Selection,
    pair_params: G::Pair,
    mutate_params: G::Mutate,
    fitness: F,
    rng: SmallRng,
    policy: Option<Box<dyn AdaptivePolicy<G::Mutate>>>,
    generation: usize,
}

impl<G: Genome, F: Fn(&G) -> f64> Evolution<G, F> {
    /// Builds an engine and its initial population.
    ///
    /// Validates the config and all genome parameter structs up front;
    /// malformed configuration never reaches the generation loop. The RNG
    /// is seeded once here — from `config.seed` when given, otherwise from
    /// entropy — and never reseeded.
    ///
    /// `fitness` scores a genome; **higher is better**. Negate for
    /// minimization problems.
    pub fn new(
        config: &EvolutionConfig,
        init_params: &G::Init,
        pair_params: G::Pair,
        mutate_params: G::Mutate,
        fitness: F,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        init_params.validate()?;
        pair_params.validate()?;
        mutate_params.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let individuals = (0..config.population_size)
            .map(|_| Individual::new(G::create(init_params, &mut rng)))
            .collect();

        Ok(Self {
            population: Population::new(individuals),
            population_size: config.population_size,
            n_offsprings: config.n_offsprings,
            selection: config.selection,
            pair_params,
            mutate_params,
            fitness,
            rng,
            policy: None,
            generation: 0,
        })
    }

    /// Installs a between-generation adaptive policy.
    ///
    /// The policy runs after each generation settles, seeing the fresh
    /// diversity value and rewriting the mutation parameters for the next
    /// generation.
    pub fn with_adaptive(mut self, policy: impl AdaptivePolicy<G::Mutate> + 'static) -> Self {
        self.policy = Some(Box::new(policy));
        self
    }

    /// Runs one generation and returns the `top_k` fittest individuals.
    ///
    /// One call performs, atomically from the caller's perspective:
    ///
    /// 1. evaluate every individual lacking a cached fitness;
    /// 2. produce `n_offsprings` offspring — parent pair via the selection
    ///    strategy (self-pairing tolerated), [`Genome::pair`], then
    ///    [`Genome::mutate`] in place;
    /// 3. merge offspring and truncate back to exactly `N` by fitness
    ///    (elitist replacement, ties stable by insertion order);
    /// 4. apply the adaptive policy, if installed.
    ///
    /// The returned slice is sorted best-first, capped at the population
    /// size, and borrows the engine: it is valid until the next `evolve`.
    pub fn evolve(&mut self, top_k: usize) -> &[Individual<G>] {
        self.population.evaluate(&self.fitness);

        let mut offspring = Vec::with_capacity(self.n_offsprings);
        for _ in 0..self.n_offsprings {
            let a = self.selection.select(&self.population, &mut self.rng);
            let b = self.selection.select(&self.population, &mut self.rng);

            let parents = self.population.individuals();
            let mut child =
                parents[a]
                    .genome()
                    .pair(parents[b].genome(), &self.pair_params, &mut self.rng);
            child.mutate(&self.mutate_params, &mut self.rng);

            let mut child = Individual::new(child);
            child.set_fitness((self.fitness)(child.genome()));
            offspring.push(child);
        }

        self.population
            .merge_and_truncate(offspring, self.population_size);
        self.generation += 1;

        if let Some(policy) = &self.policy {
            let diversity = self.population.diversity();
            policy.adjust(diversity, &mut self.mutate_params);
        }

        let k = top_k.min(self.population.len());
        &self.population.individuals()[..k]
    }

    /// Runs several generations and returns the final `top_k` fittest.
    ///
    /// With `generations == 0` no offspring are produced; the initial
    /// population is evaluated and ranked so the returned slice is still the
    /// current `top_k` fittest.
    pub fn evolve_for(&mut self, generations: usize, top_k: usize) -> &[Individual<G>] {
        for _ in 0..generations {
            self.evolve(top_k);
        }
        if generations == 0 {
            self.population.evaluate(&self.fitness);
            self.population
                .merge_and_truncate(Vec::new(), self.population_size);
        }
        let k = top_k.min(self.population.len());
        &self.population.individuals()[..k]
    }

    /// The current population.
    pub fn population(&self) -> &Population<G> {
        &self.population
    }

    /// The current population's diversity (see [`Population::diversity`]).
    pub fn diversity(&self) -> f64 {
        self.population.diversity()
    }

    /// The fittest individual of the current population.
    pub fn best(&self) -> Option<&Individual<G>> {
        self.population.best()
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The active mutation parameters.
    pub fn mutate_params(&self) -> &G::Mutate {
        &self.mutate_params
    }

    /// Replaces the mutation parameters for subsequent generations.
    ///
    /// The external counterpart of [`with_adaptive`](Evolution::with_adaptive):
    /// callers may retune mutation between `evolve` calls by hand.
    pub fn set_mutate_params(&mut self, params: G::Mutate) {
        self.mutate_params = params;
    }
}
