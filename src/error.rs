//! Error types.
//!
//! Configuration problems are detected before a run starts and reported
//! as [`ConfigError`]. Nothing is clamped into range silently.

/// A rejected engine or simulator configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population_size must be at least 2 (got {0})")]
    PopulationTooSmall(usize),

    #[error("tournament_size must be at least 1")]
    ZeroTournamentSize,

    #[error("tournament_size ({tournament_size}) exceeds population_size ({population_size})")]
    TournamentTooLarge {
        tournament_size: usize,
        population_size: usize,
    },

    #[error("elitism_size ({elitism_size}) must be smaller than population_size ({population_size})")]
    ElitismFillsPopulation {
        elitism_size: usize,
        population_size: usize,
    },

    #[error("{name} must lie in [0, 1] (got {value})")]
    RateOutOfRange { name: &'static str, value: f64 },

    #[error("point set must not be empty")]
    EmptyPointSet,

    #[error("field dimensions must be positive and finite (got {width} x {height})")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("movement duration range {min}..={max} is invalid: bounds must satisfy 1 <= min <= max")]
    InvalidDurationRange { min: u32, max: u32 },
}
