//! Tournament selection.
//!
//! Each tournament draws `k` **distinct** candidates uniformly at random
//! and returns the one with the lowest cost. A mating pool is one
//! tournament winner per population slot.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Candidate;
use rand::seq::index;
use rand::Rng;

/// Runs one tournament and returns the winner's index.
///
/// Ties go to the contestant drawn first.
///
/// # Panics
/// Panics if `population` is empty or `k` is 0 or larger than the population.
///
/// # Complexity
/// O(k) per selection
pub fn tournament<R: Rng>(population: &[Candidate], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    assert!(
        k >= 1 && k <= population.len(),
        "tournament size must be in 1..=population size"
    );

    let mut contestants = index::sample(rng, population.len(), k).into_iter();
    let mut best_idx = contestants
        .next()
        .expect("sample of size k >= 1 is non-empty");
    for idx in contestants {
        if population[idx].cost() < population[best_idx].cost() {
            best_idx = idx;
        }
    }
    best_idx
}

/// Builds a mating pool of `population.len()` tournament winners.
pub fn mating_pool<R: Rng>(population: &[Candidate], k: usize, rng: &mut R) -> Vec<usize> {
    (0..population.len())
        .map(|_| tournament(population, k, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn make_population(costs: &[f64]) -> Vec<Candidate> {
        costs
            .iter()
            .map(|&c| Candidate::with_cost(vec![0], c))
            .collect()
    }

    #[test]
    fn test_full_tournament_always_picks_best() {
        // Without replacement, k = n means every candidate competes.
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            assert_eq!(tournament(&pop, 4, &mut rng), 2);
        }
    }

    #[test]
    fn test_tournament_size_1_is_uniform() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[tournament(&pop, 1, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_worst_never_wins_with_k2() {
        let pop = make_population(&[100.0, 50.0, 1.0, 80.0]);
        let mut rng = create_rng(7);
        for _ in 0..2000 {
            assert_ne!(tournament(&pop, 2, &mut rng), 0);
        }
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[100.0, 50.0, 1.0, 80.0, 60.0, 70.0]);
        let mut rng = create_rng(42);
        let mut counts = [0u32; 6];
        for _ in 0..6000 {
            counts[tournament(&pop, 3, &mut rng)] += 1;
        }
        // Best wins whenever it is drawn: probability 1/2.
        assert!(counts[2] > 2500, "got {counts:?}");
        assert_eq!(counts[0], 0);
    }

    #[test]
    fn test_mating_pool_size() {
        let pop = make_population(&[3.0, 2.0, 1.0, 4.0, 5.0]);
        let mut rng = create_rng(1);
        let pool = mating_pool(&pop, 2, &mut rng);
        assert_eq!(pool.len(), 5);
        assert!(pool.iter().all(|&i| i < 5));
        // The worst can never win a 2-tournament without replacement.
        assert!(!pool.contains(&4));
    }

    #[test]
    fn test_single_candidate() {
        let pop = make_population(&[5.0]);
        let mut rng = create_rng(42);
        assert_eq!(tournament(&pop, 1, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Candidate> = vec![];
        let mut rng = create_rng(42);
        tournament(&pop, 1, &mut rng);
    }
}
