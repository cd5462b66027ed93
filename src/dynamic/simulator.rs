//! Point motion with collision rejection.

use super::config::DynamicConfig;
use crate::distance::{distance, Point};
use crate::error::ConfigError;
use crate::random::{create_rng, derive_seed};
use rand::rngs::StdRng;
use rand::Rng;

/// Consecutive stalled ticks after which a point's stall is logged at warn level.
pub const STALL_WARN_TICKS: u32 = 100;

/// Linear motion of one point towards its current target.
///
/// Invariant: `1 <= duration` and `elapsed <= duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMotion {
    /// Position at the moment the current target was drawn.
    pub start: Point,
    pub target: Point,
    /// Ticks the whole movement takes.
    pub duration: u32,
    /// Ticks already travelled towards `target`.
    pub elapsed: u32,
}

impl PointMotion {
    /// Whether the point has reached its target.
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Position after one more tick of travel.
    fn next_position(&self) -> Point {
        let progress = f64::from(self.elapsed + 1) / f64::from(self.duration);
        Point::new(
            self.start.x + progress * (self.target.x - self.start.x),
            self.start.y + progress * (self.target.y - self.start.y),
        )
    }
}

/// Outcome counts of one [`DynamicFieldSimulator::update`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateStats {
    /// Points that advanced this tick.
    pub moved: usize,
    /// Proposed moves rejected for coming too close to another point.
    pub rejected: usize,
    /// Points that held position this tick.
    pub stalled: usize,
}

/// Moves a point set over discrete ticks, reproducibly.
///
/// Each point travels in a straight line towards a random target over a
/// random number of ticks. A move that would bring a point within
/// [`min_separation`](Self::min_separation) of any other point is rejected:
/// the point re-targets instead of advancing, and by default waits for the
/// next tick (see [`DynamicConfig::collision_retries`]).
///
/// Targets and durations come from a dedicated stream seeded by
/// [`DynamicConfig::seed`]; a second, independently seeded stream is kept
/// for any other randomness so that it never shifts the target sequence.
///
/// # Examples
///
/// ```
/// use u_dyntsp::distance::Point;
/// use u_dyntsp::dynamic::{DynamicConfig, DynamicFieldSimulator};
///
/// let points = vec![Point::new(10.0, 10.0), Point::new(90.0, 90.0)];
/// let mut sim = DynamicFieldSimulator::new(points, DynamicConfig::default()).unwrap();
/// sim.update();
/// let moved = sim.current_positions();
/// sim.reset_to_initial();
/// sim.update();
/// assert_eq!(sim.current_positions(), moved);
/// ```
#[derive(Debug, Clone)]
pub struct DynamicFieldSimulator {
    config: DynamicConfig,
    min_separation: f64,
    initial: Vec<Point>,
    positions: Vec<Point>,
    motions: Vec<PointMotion>,
    stall_ticks: Vec<u32>,
    target_rng: StdRng,
    aux_rng: StdRng,
    ticks: u64,
}

impl DynamicFieldSimulator {
    /// Creates a simulator and draws the first target of every point.
    pub fn new(points: Vec<Point>, config: DynamicConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        if points.is_empty() {
            return Err(ConfigError::EmptyPointSet);
        }

        let n = points.len();
        let placeholder = PointMotion {
            start: Point::default(),
            target: Point::default(),
            duration: 1,
            elapsed: 0,
        };
        let mut sim = Self {
            min_separation: config.min_separation(),
            target_rng: create_rng(config.seed),
            aux_rng: create_rng(derive_seed(config.seed, 1)),
            config,
            positions: points.clone(),
            initial: points,
            motions: vec![placeholder; n],
            stall_ticks: vec![0; n],
            ticks: 0,
        };
        sim.retarget_all();
        Ok(sim)
    }

    /// Restores the construction-time state.
    ///
    /// Positions, both random streams and every first target are
    /// re-derived exactly as in [`new`](Self::new), so replaying the same
    /// number of [`update`](Self::update) calls reproduces the same
    /// trajectory bit for bit.
    pub fn reset_to_initial(&mut self) {
        self.positions.clone_from(&self.initial);
        self.target_rng = create_rng(self.config.seed);
        self.aux_rng = create_rng(derive_seed(self.config.seed, 1));
        self.stall_ticks.iter_mut().for_each(|s| *s = 0);
        self.ticks = 0;
        self.retarget_all();
    }

    /// Advances every point by one tick, in index order.
    ///
    /// Collision checks use the other points' current positions, which for
    /// lower indices already reflect this tick.
    pub fn update(&mut self) -> UpdateStats {
        let mut stats = UpdateStats::default();

        for i in 0..self.positions.len() {
            if self.motions[i].is_complete() {
                self.retarget(i);
            }

            let mut attempt = 0usize;
            loop {
                let proposal = self.motions[i].next_position();
                if !self.collides(i, proposal) {
                    self.positions[i] = proposal;
                    self.motions[i].elapsed += 1;
                    self.stall_ticks[i] = 0;
                    stats.moved += 1;
                    break;
                }

                stats.rejected += 1;
                self.retarget(i);

                if attempt >= self.config.collision_retries {
                    stats.stalled += 1;
                    self.record_stall(i);
                    break;
                }
                attempt += 1;
            }
        }

        self.ticks += 1;
        stats
    }

    /// Returns a copy of the current positions.
    pub fn current_positions(&self) -> Vec<Point> {
        self.positions.clone()
    }

    /// The positions the simulator was created with.
    pub fn initial_positions(&self) -> &[Point] {
        &self.initial
    }

    /// Minimum distance a committed move keeps from every other point.
    pub fn min_separation(&self) -> f64 {
        self.min_separation
    }

    /// Motion state of point `i`.
    pub fn motion(&self, i: usize) -> Option<&PointMotion> {
        self.motions.get(i)
    }

    /// Number of [`update`](Self::update) calls since construction or reset.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn config(&self) -> &DynamicConfig {
        &self.config
    }

    /// The secondary random stream.
    ///
    /// Drawing from it never affects targets or durations.
    pub fn auxiliary_rng(&mut self) -> &mut StdRng {
        &mut self.aux_rng
    }

    fn retarget_all(&mut self) {
        for i in 0..self.positions.len() {
            self.retarget(i);
        }
    }

    /// Draws a fresh duration and target for point `i`, starting from where it is.
    fn retarget(&mut self, i: usize) {
        let duration = self
            .target_rng
            .random_range(self.config.min_duration..=self.config.max_duration);
        let target = Point::new(
            self.target_rng.random_range(0.0..self.config.width),
            self.target_rng.random_range(0.0..self.config.height),
        );
        self.motions[i] = PointMotion {
            start: self.positions[i],
            target,
            duration,
            elapsed: 0,
        };
    }

    fn collides(&self, i: usize, proposal: Point) -> bool {
        self.positions
            .iter()
            .enumerate()
            .any(|(j, &other)| j != i && distance(proposal, other) < self.min_separation)
    }

    fn record_stall(&mut self, i: usize) {
        self.stall_ticks[i] = self.stall_ticks[i].saturating_add(1);
        log::trace!(
            "point {i} held position at tick {} ({} consecutive)",
            self.ticks,
            self.stall_ticks[i]
        );
        if self.stall_ticks[i] == STALL_WARN_TICKS {
            log::warn!(
                "point {i} has been blocked for {STALL_WARN_TICKS} consecutive ticks; field may be congested"
            );
        }
    }
}
