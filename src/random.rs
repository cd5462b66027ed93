//! Seeded random number generation.
//!
//! Every stochastic component in this crate owns its generator; nothing
//! draws from thread-local or global state once a run has started.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a deterministic generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws a fresh seed from the operating system's entropy source.
///
/// Used when a configuration leaves its seed unset.
pub fn fresh_seed() -> u64 {
    rand::random()
}

/// Derives an independent seed for a secondary stream.
///
/// The golden-ratio multiplier spreads consecutive stream indices across
/// the seed space.
pub fn derive_seed(seed: u64, stream: u64) -> u64 {
    seed.wrapping_add(stream.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Returns a uniformly random permutation of `0..n`.
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}
