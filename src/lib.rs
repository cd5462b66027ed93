//! Evolutionary tour optimization over static and moving point fields.
//!
//! Searches for short closed tours through a 2D point set with a
//! generational genetic algorithm, optionally while the points themselves
//! move between generations:
//!
//! - **Distance model** ([`distance`]): Euclidean distances, cached
//!   distance matrices and closed-tour costs.
//! - **Genetic Algorithm** ([`ga`]): tournament selection, ordered
//!   crossover, swap mutation, elitism and best-cost tracking, with a
//!   progress observer side channel.
//! - **Dynamic fields** ([`dynamic`]): seeded linear point motion with
//!   minimum-separation collision rejection and exact replay.
//! - **Point sets** ([`points`]): fixed and seeded random layouts.
//!
//! # Reproducibility
//!
//! All randomness comes from generators owned by the engine or the
//! simulator and seeded from their configurations. Two runs with the same
//! seeds and configuration produce identical populations, histories and
//! point trajectories.
//!
//! # Example
//!
//! ```
//! use u_dyntsp::dynamic::{DynamicConfig, DynamicFieldSimulator};
//! use u_dyntsp::ga::{EvolutionEngine, GaConfig};
//! use u_dyntsp::points::generate_points;
//!
//! let points = generate_points(20, 100.0, 100.0, Some(1)).unwrap();
//! let field = DynamicFieldSimulator::new(points, DynamicConfig::new(100.0, 100.0)).unwrap();
//! let config = GaConfig::for_point_count(20).with_generations(50).with_seed(7);
//!
//! let mut engine = EvolutionEngine::with_dynamics(field, config).unwrap();
//! let result = engine.run();
//! assert_eq!(result.cost_history.len(), 51);
//! ```

pub mod distance;
pub mod dynamic;
pub mod error;
pub mod ga;
pub mod points;
pub mod random;
pub mod solver;

pub use error::ConfigError;
