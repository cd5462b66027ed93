//! Dynamic field configuration.

use crate::error::ConfigError;

/// Configuration for a [`DynamicFieldSimulator`](super::DynamicFieldSimulator).
///
/// # Defaults
///
/// ```
/// use u_dyntsp::dynamic::DynamicConfig;
///
/// let config = DynamicConfig::default();
/// assert_eq!(config.min_duration, 500);
/// assert_eq!(config.max_duration, 1000);
/// assert_eq!(config.seed, 42);
/// assert_eq!(config.collision_retries, 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DynamicConfig {
    /// Width of the bounded plane targets are drawn from.
    pub width: f64,

    /// Height of the bounded plane targets are drawn from.
    pub height: f64,

    /// Movement seed. Both random streams derive from it.
    pub seed: u64,

    /// Shortest movement, in ticks (inclusive).
    pub min_duration: u32,

    /// Longest movement, in ticks (inclusive).
    pub max_duration: u32,

    /// Extra re-target attempts within one tick after a collision.
    ///
    /// With 0 (the default) a colliding point re-targets and waits for the
    /// next tick. Larger values let it try the new target within the same
    /// tick; when every attempt collides the point holds its position.
    pub collision_retries: usize,
}

impl Default for DynamicConfig {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
            seed: 42,
            min_duration: 500,
            max_duration: 1000,
            collision_retries: 0,
        }
    }
}

impl DynamicConfig {
    /// Creates a configuration for a `width` x `height` field.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Sets the movement seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the inclusive movement duration range, in ticks.
    pub fn with_duration_range(mut self, min: u32, max: u32) -> Self {
        self.min_duration = min;
        self.max_duration = max;
        self
    }

    /// Sets the number of in-tick re-target attempts after a collision.
    pub fn with_collision_retries(mut self, retries: usize) -> Self {
        self.collision_retries = retries;
        self
    }

    /// Minimum allowed distance between two points: 1% of the field diagonal.
    pub fn min_separation(&self) -> f64 {
        0.01 * self.width.hypot(self.height)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_dim = |d: f64| d.is_finite() && d > 0.0;
        if !valid_dim(self.width) || !valid_dim(self.height) {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.min_duration == 0 || self.min_duration > self.max_duration {
            return Err(ConfigError::InvalidDurationRange {
                min: self.min_duration,
                max: self.max_duration,
            });
        }
        Ok(())
    }
}
