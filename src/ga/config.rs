//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::ConfigError;

/// Configuration for the evolutionary engine.
///
/// Controls population size, run length, operator rates, elitism and
/// tournament size. Builder methods store values as given; out-of-range
/// values are reported by [`validate`](Self::validate), never clamped.
///
/// # Defaults
///
/// ```
/// use u_dyntsp::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 500);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_dyntsp::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_tournament_size(5)
///     .with_elitism_size(10)
///     .with_mutation_rate(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of candidates in the population. Constant for the whole run.
    pub population_size: usize,

    /// Number of generations to run. There is no early exit.
    ///
    /// 0 returns the best of the initial population.
    pub generations: usize,

    /// Probability of recombining a parent pair (0.0–1.0).
    ///
    /// When crossover is not applied, a clone of one parent is used.
    pub crossover_rate: f64,

    /// Probability of applying swap mutation to a child (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of top candidates copied unchanged into the next generation.
    pub elitism_size: usize,

    /// Number of distinct candidates competing in each tournament.
    ///
    /// - k=2: light pressure
    /// - k=3-5: moderate pressure (typical default)
    pub tournament_size: usize,

    /// Whether to evaluate candidates in parallel using rayon.
    ///
    /// Only honoured when the `parallel` feature is enabled. Evaluation is
    /// pure, so results do not depend on this flag.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a fresh seed on every run.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 500,
            crossover_rate: 0.85,
            mutation_rate: 0.15,
            elitism_size: 5,
            tournament_size: 3,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the number of elites carried over each generation.
    pub fn with_elitism_size(mut self, n: usize) -> Self {
        self.elitism_size = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for small problems (fewer than 50 points).
    ///
    /// - Population: 100, Generations: 750, Elitism: 5, Tournament: 3
    pub fn small() -> Self {
        Self {
            population_size: 100,
            generations: 750,
            crossover_rate: 0.85,
            mutation_rate: 0.15,
            elitism_size: 5,
            tournament_size: 3,
            ..Self::default()
        }
    }

    /// Preset for medium problems (50 to 100 points).
    ///
    /// - Population: 100, Generations: 1500, Elitism: 10, Tournament: 3
    pub fn medium() -> Self {
        Self {
            generations: 1500,
            elitism_size: 10,
            ..Self::small()
        }
    }

    /// Preset for large problems (more than 100 points).
    ///
    /// - Population: 200, Generations: 5000, Mutation: 0.20, Elitism: 15, Tournament: 5
    pub fn large() -> Self {
        Self {
            population_size: 200,
            generations: 5000,
            mutation_rate: 0.20,
            elitism_size: 15,
            tournament_size: 5,
            ..Self::small()
        }
    }

    /// Selects a preset based on the number of points.
    ///
    /// - `n < 50` → [`small()`](Self::small)
    /// - `50 ≤ n ≤ 100` → [`medium()`](Self::medium)
    /// - `n > 100` → [`large()`](Self::large)
    pub fn for_point_count(n: usize) -> Self {
        if n < 50 {
            Self::small()
        } else if n <= 100 {
            Self::medium()
        } else {
            Self::large()
        }
    }

    /// Validates the configuration.
    ///
    /// Returns the first violated precondition.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::ZeroTournamentSize);
        }
        if self.tournament_size > self.population_size {
            return Err(ConfigError::TournamentTooLarge {
                tournament_size: self.tournament_size,
                population_size: self.population_size,
            });
        }
        if self.elitism_size >= self.population_size {
            return Err(ConfigError::ElitismFillsPopulation {
                elitism_size: self.elitism_size,
                population_size: self.population_size,
            });
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RateOutOfRange { name, value })
    }
}
