//! Point-set generation.

use crate::distance::Point;
use crate::error::ConfigError;
use crate::random::{create_rng, fresh_seed};
use rand::Rng;

/// A fixed 10-point layout used for quick checks and regression runs.
pub fn fixed_points() -> Vec<Point> {
    [
        (60.0, 200.0),
        (180.0, 200.0),
        (80.0, 180.0),
        (140.0, 180.0),
        (20.0, 160.0),
        (100.0, 160.0),
        (200.0, 160.0),
        (140.0, 140.0),
        (40.0, 120.0),
        (100.0, 120.0),
    ]
    .into_iter()
    .map(Point::from)
    .collect()
}

/// Generates `count` points uniformly over `[0, width) x [0, height)`.
///
/// The same `seed` always yields the same layout. `None` draws a fresh
/// seed.
///
/// # Errors
/// [`ConfigError::InvalidDimensions`] if `width` or `height` is not a
/// positive finite number.
pub fn generate_points(
    count: usize,
    width: f64,
    height: f64,
    seed: Option<u64>,
) -> Result<Vec<Point>, ConfigError> {
    let valid_dim = |d: f64| d.is_finite() && d > 0.0;
    if !valid_dim(width) || !valid_dim(height) {
        return Err(ConfigError::InvalidDimensions { width, height });
    }
    let mut rng = create_rng(seed.unwrap_or_else(fresh_seed));
    Ok((0..count)
        .map(|_| Point::new(rng.random_range(0.0..width), rng.random_range(0.0..height)))
        .collect())
}
