//! Dynamic point fields.
//!
//! A [`DynamicFieldSimulator`] moves the points of a tour problem between
//! generations, turning a static search into one against a moving fitness
//! landscape. Motion is linear towards randomly drawn targets; a move that
//! would bring two points closer than a minimum separation is rejected and
//! the point re-targets.
//!
//! Runs are reproducible: the simulator owns its seeded random streams and
//! [`DynamicFieldSimulator::reset_to_initial`] rewinds them, so several
//! strategies can be compared against the same scenario.

mod config;
mod simulator;

pub use config::DynamicConfig;
pub use simulator::{DynamicFieldSimulator, PointMotion, UpdateStats, STALL_WARN_TICKS};
