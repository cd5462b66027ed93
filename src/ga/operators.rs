//! Permutation-preserving genetic operators for tours.
//!
//! Both operators work on `&[usize]` index vectors and always map a valid
//! permutation of `0..n` to another valid permutation of `0..n`.
//!
//! # Crossover Operators
//!
//! - [`order_crossover`] (OX): Davis (1985) — keeps a segment of parent 1
//!   in place and the relative order of parent 2 elsewhere
//!
//! # Mutation Operators
//!
//! - [`swap_mutation`]: Exchange two distinct random positions — O(1)
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::seq::index;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Order Crossover (OX) producing a single child.
///
/// Picks two distinct positions, orders them as `[start, end]` and
/// delegates to [`order_crossover_with_segment`].
///
/// Parents with fewer than two elements are returned as a copy of `parent1`.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return parent1.to_vec();
    }

    let (start, end) = random_segment(n, rng);
    order_crossover_with_segment(parent1, parent2, start, end)
}

/// Order Crossover (OX) with an explicit segment.
///
/// # Algorithm (Davis, 1985)
///
/// 1. Copy `parent1[start..=end]` into the same positions of the child
/// 2. Fill the remaining positions left to right with the elements of
///    `parent2`, in `parent2` order, skipping elements already copied
///
/// ```
/// use u_dyntsp::ga::operators::order_crossover_with_segment;
///
/// let p1 = [0, 1, 2, 3, 4, 5];
/// let p2 = [5, 4, 3, 2, 1, 0];
/// let child = order_crossover_with_segment(&p1, &p2, 2, 3);
/// assert_eq!(child, vec![5, 4, 2, 3, 1, 0]);
/// ```
///
/// # Panics
/// Panics if parents have different lengths or `start > end` or
/// `end >= len`.
pub fn order_crossover_with_segment(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(start <= end && end < n, "segment out of bounds");

    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];

    // Step 1: Copy segment from parent1
    for i in start..=end {
        child[i] = parent1[i];
        in_segment[parent1[i]] = true;
    }

    // Step 2: Fill the gaps in child order from parent2
    let mut donor = parent2.iter().copied().filter(|&v| !in_segment[v]);
    let (head, rest) = child.split_at_mut(start);
    let tail = &mut rest[end + 1 - start..];
    for slot in head.iter_mut().chain(tail.iter_mut()) {
        *slot = donor
            .next()
            .expect("valid permutation: parent2 holds every element missing from the segment");
    }

    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Swap mutation: exchange two distinct random positions.
///
/// No-op for tours shorter than two elements.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let (i, j) = distinct_pair(n, rng);
    perm.swap(i, j);
}

// ============================================================================
// Helpers
// ============================================================================

/// Two distinct positions in `0..n`, in draw order. Requires `n >= 2`.
fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let picks = index::sample(rng, n, 2);
    (picks.index(0), picks.index(1))
}

/// Pick a random segment `[start, end]` from two distinct positions.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let (a, b) = distinct_pair(n, rng);
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================
