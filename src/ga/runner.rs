//! GA evolutionary loop execution.
//!
//! [`EvolutionEngine`] orchestrates the complete evolutionary process:
//! initialization → evaluation → elitism → selection → crossover →
//! mutation → replacement → repeat, optionally advancing a dynamic point
//! field between generations.

use super::config::GaConfig;
use super::observer::{GenerationObserver, GenerationReport, NoopObserver, RunSummary};
use super::operators::{order_crossover, swap_mutation};
use super::selection::mating_pool;
use super::types::{is_permutation, sort_by_cost, Candidate};
use crate::distance::{DistanceMatrix, Point};
use crate::dynamic::DynamicFieldSimulator;
use crate::error::ConfigError;
use crate::random::{create_rng, fresh_seed, random_permutation};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result of an evolutionary run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best candidate tracked during the run.
    ///
    /// In a dynamic run its cost refers to the final layout.
    pub best: Candidate,

    /// Cost of the best candidate (same as `best.cost()`).
    pub best_cost: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best cost after initialization, then after each generation.
    pub cost_history: Vec<f64>,

    /// Wall-clock duration of the run.
    pub elapsed: Duration,

    /// Point positions the final costs were computed against.
    pub final_positions: Vec<Point>,
}

/// Executes the evolutionary loop over a point set.
///
/// # Usage
///
/// ```
/// use u_dyntsp::ga::{EvolutionEngine, GaConfig};
/// use u_dyntsp::points::fixed_points;
///
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_generations(20)
///     .with_seed(42);
/// let mut engine = EvolutionEngine::new(fixed_points(), config).unwrap();
/// let result = engine.run();
/// assert_eq!(result.cost_history.len(), 21);
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionEngine {
    config: GaConfig,
    points: Vec<Point>,
    simulator: Option<DynamicFieldSimulator>,
}

impl EvolutionEngine {
    /// Creates an engine over a static point set.
    ///
    /// The configuration is validated here, before any run.
    pub fn new(points: Vec<Point>, config: GaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        if points.is_empty() {
            return Err(ConfigError::EmptyPointSet);
        }
        Ok(Self {
            config,
            points,
            simulator: None,
        })
    }

    /// Creates an engine whose points move between generations.
    ///
    /// The simulator's initial positions become the engine's point set.
    pub fn with_dynamics(
        simulator: DynamicFieldSimulator,
        config: GaConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if simulator.is_empty() {
            return Err(ConfigError::EmptyPointSet);
        }
        Ok(Self {
            config,
            points: simulator.initial_positions().to_vec(),
            simulator: Some(simulator),
        })
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// The initial point set.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The attached simulator, if any.
    pub fn simulator(&self) -> Option<&DynamicFieldSimulator> {
        self.simulator.as_ref()
    }

    /// Runs the search without an observer.
    pub fn run(&mut self) -> GaResult {
        self.run_with_observer(&mut NoopObserver)
    }

    /// Runs the search, reporting progress to `observer`.
    ///
    /// The random stream is re-created from [`GaConfig::seed`] and an
    /// attached simulator is reset, so repeated runs with a fixed seed are
    /// identical.
    pub fn run_with_observer(&mut self, observer: &mut dyn GenerationObserver) -> GaResult {
        let started = Instant::now();
        let config = &self.config;
        let seed = config.seed.unwrap_or_else(fresh_seed);
        let mut rng = create_rng(seed);

        if let Some(sim) = self.simulator.as_mut() {
            sim.reset_to_initial();
        }
        let mut matrix = DistanceMatrix::build(&self.points);

        log::info!(
            "evolving {} points: population={} generations={} crossover={} mutation={} elitism={} tournament={} seed={} dynamic={}",
            self.points.len(),
            config.population_size,
            config.generations,
            config.crossover_rate,
            config.mutation_rate,
            config.elitism_size,
            config.tournament_size,
            seed,
            self.simulator.is_some()
        );

        // 1. Initialize and evaluate
        let mut population =
            initialize_population(self.points.len(), config.population_size, &mut rng);
        evaluate_population(&mut population, &matrix, config.parallel);
        sort_by_cost(&mut population);

        // 2. Track best
        let mut best = population[0].clone();
        let mut cost_history = Vec::with_capacity(config.generations + 1);
        cost_history.push(best.cost());
        log::debug!("initial best cost {:.4}", best.cost());

        // 3. Evolutionary loop
        for gen in 1..=config.generations {
            population = breed(config, &population, &matrix, &mut rng);
            sort_by_cost(&mut population);

            if population[0].cost() < best.cost() {
                best = population[0].clone();
                log::debug!("generation {gen}: new best cost {:.4}", best.cost());
            }
            cost_history.push(best.cost());

            observer.on_generation(&GenerationReport {
                generation: gen,
                best_cost: best.cost(),
                best_tour: best.tour(),
                elapsed: started.elapsed(),
            });

            if let Some(sim) = self.simulator.as_mut() {
                matrix = advance_field(sim, &mut population, &mut best, config.parallel);
            }
        }

        let elapsed = started.elapsed();
        observer.on_finish(&RunSummary {
            generations: config.generations,
            best_cost: best.cost(),
            best_tour: best.tour(),
            elapsed,
        });
        log::info!(
            "final best cost {:.4} after {} generations in {:.2?}",
            best.cost(),
            config.generations,
            elapsed
        );

        let final_positions = match &self.simulator {
            Some(sim) => sim.current_positions(),
            None => self.points.clone(),
        };

        GaResult {
            best_cost: best.cost(),
            best,
            generations: config.generations,
            cost_history,
            elapsed,
            final_positions,
        }
    }
}

/// `size` independent, uniformly random tours over `n` points.
fn initialize_population<R: Rng>(n: usize, size: usize, rng: &mut R) -> Vec<Candidate> {
    (0..size)
        .map(|_| Candidate::new(random_permutation(n, rng)))
        .collect()
}

/// Produces the next generation from a population sorted by ascending cost.
///
/// Elites are cloned first; the rest are children of consecutive mating
/// pool pairs, evaluated against `matrix`.
fn breed<R: Rng>(
    config: &GaConfig,
    population: &[Candidate],
    matrix: &DistanceMatrix,
    rng: &mut R,
) -> Vec<Candidate> {
    let n = matrix.len();
    let elite_count = config.elitism_size;
    let child_count = config.population_size - elite_count;

    let pool = mating_pool(population, config.tournament_size, rng);
    let mut children = Vec::with_capacity(child_count);
    let mut cursor = 0usize;

    while children.len() < child_count {
        let parent1 = &population[pool[cursor % pool.len()]];
        let parent2 = &population[pool[(cursor + 1) % pool.len()]];
        cursor += 2;

        // Crossover
        let mut child = if rng.random::<f64>() < config.crossover_rate {
            Candidate::new(order_crossover(parent1.tour(), parent2.tour(), rng))
        } else if rng.random_bool(0.5) {
            parent1.clone()
        } else {
            parent2.clone()
        };

        // Mutation
        if rng.random::<f64>() < config.mutation_rate {
            swap_mutation(child.tour_mut(), rng);
            child.invalidate();
        }

        debug_assert!(
            is_permutation(child.tour(), n),
            "child is not a permutation: {:?}",
            child.tour()
        );
        children.push(child);
    }

    evaluate_population(&mut children, matrix, config.parallel);

    let mut next = Vec::with_capacity(config.population_size);
    next.extend_from_slice(&population[..elite_count]);
    next.extend(children);
    next
}

/// Moves the field one tick and re-scores everything against the new layout.
///
/// Every candidate, elites included, and the tracked `best` are
/// re-evaluated; the population is left sorted by ascending cost. Costs
/// from the old layout must not be compared with new ones.
fn advance_field(
    sim: &mut DynamicFieldSimulator,
    population: &mut [Candidate],
    best: &mut Candidate,
    parallel: bool,
) -> DistanceMatrix {
    let stats = sim.update();
    log::trace!(
        "tick {}: field moved={} rejected={} stalled={}",
        sim.ticks(),
        stats.moved,
        stats.rejected,
        stats.stalled
    );
    let matrix = DistanceMatrix::build(&sim.current_positions());
    evaluate_population(population, &matrix, parallel);
    best.evaluate(&matrix);
    sort_by_cost(population);
    matrix
}

/// Evaluate all candidates against `matrix`.
#[cfg(feature = "parallel")]
fn evaluate_population(population: &mut [Candidate], matrix: &DistanceMatrix, parallel: bool) {
    if parallel {
        population.par_iter_mut().for_each(|c| {
            c.evaluate(matrix);
        });
    } else {
        for c in population.iter_mut() {
            c.evaluate(matrix);
        }
    }
}

/// Evaluate all candidates against `matrix`.
#[cfg(not(feature = "parallel"))]
fn evaluate_population(population: &mut [Candidate], matrix: &DistanceMatrix, _parallel: bool) {
    for c in population.iter_mut() {
        c.evaluate(matrix);
    }
}

// ============================================================================
// Tests
// ============================================================================
