//! Genetic Algorithm for closed tours.
//!
//! A generational GA over permutation-encoded tours: tournament selection
//! without replacement, ordered crossover, swap mutation and elitism.
//! The engine can run against a static point set or against a
//! [`DynamicFieldSimulator`](crate::dynamic::DynamicFieldSimulator) that
//! moves the points between generations.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, presets)
//! - [`Candidate`]: A tour with its cached cost
//! - [`EvolutionEngine`]: Executes the evolutionary loop
//! - [`GaResult`]: Best tour and cost history of a run
//! - [`GenerationObserver`]: Progress side channel
//!
//! # Submodules
//!
//! - [`operators`]: Ordered crossover (OX) and swap mutation
//! - [`selection`]: Tournament selection and mating pools
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Branke (2002), *Evolutionary Optimization in Dynamic Environments*

mod config;
mod observer;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use observer::{GenerationObserver, GenerationReport, LogObserver, NoopObserver, RunSummary};
pub use runner::{EvolutionEngine, GaResult};
pub use types::{is_permutation, sort_by_cost, Candidate};
