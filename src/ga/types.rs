//! Candidate tours.
//!
//! A [`Candidate`] pairs a visiting order with its cached cost. The cost
//! belongs to one particular [`DistanceMatrix`]; after the points move it
//! must be re-evaluated before it is compared with anything.

use crate::distance::{tour_cost, DistanceMatrix};
use std::cmp::Ordering;

/// A candidate solution: a permutation of point indices plus its cost.
///
/// # Examples
///
/// ```
/// use u_dyntsp::distance::{DistanceMatrix, Point};
/// use u_dyntsp::ga::Candidate;
///
/// let points = [Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(1.0, 1.0), Point::new(1.0, 0.0)];
/// let matrix = DistanceMatrix::build(&points);
///
/// let mut candidate = Candidate::new(vec![0, 1, 2, 3]);
/// assert!(!candidate.is_evaluated());
/// assert_eq!(candidate.evaluate(&matrix), 4.0);
/// assert_eq!(candidate.cost(), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    tour: Vec<usize>,
    cost: f64,
}

impl Candidate {
    /// Creates an unevaluated candidate. Its cost is `+inf`.
    pub fn new(tour: Vec<usize>) -> Self {
        Self {
            tour,
            cost: f64::INFINITY,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_cost(tour: Vec<usize>, cost: f64) -> Self {
        Self { tour, cost }
    }

    /// The visiting order.
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    pub(crate) fn tour_mut(&mut self) -> &mut [usize] {
        &mut self.tour
    }

    /// Consumes the candidate, returning its visiting order.
    pub fn into_tour(self) -> Vec<usize> {
        self.tour
    }

    /// The cached cost; `+inf` until [`evaluate`](Self::evaluate) is called.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn is_evaluated(&self) -> bool {
        self.cost.is_finite()
    }

    /// Computes, caches and returns the closed-tour cost against `matrix`.
    pub fn evaluate(&mut self, matrix: &DistanceMatrix) -> f64 {
        self.cost = tour_cost(&self.tour, matrix);
        self.cost
    }

    /// Marks the cached cost as stale.
    pub(crate) fn invalidate(&mut self) {
        self.cost = f64::INFINITY;
    }

    /// Number of points visited.
    pub fn len(&self) -> usize {
        self.tour.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tour.is_empty()
    }

    /// Total order by ascending cost.
    pub fn cmp_cost(&self, other: &Self) -> Ordering {
        self.cost.total_cmp(&other.cost)
    }
}

/// Sorts candidates by ascending cost, keeping the order of equal costs.
pub fn sort_by_cost(population: &mut [Candidate]) {
    population.sort_by(Candidate::cmp_cost);
}

/// Checks that `tour` visits every index in `0..n` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in tour {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Point;

    fn line_matrix() -> DistanceMatrix {
        let points: Vec<Point> = (0..4).map(|i| Point::new(i as f64, 0.0)).collect();
        DistanceMatrix::build(&points)
    }

    #[test]
    fn test_new_is_unevaluated() {
        let c = Candidate::new(vec![2, 0, 1]);
        assert_eq!(c.cost(), f64::INFINITY);
        assert!(!c.is_evaluated());
        assert_eq!(c.tour(), &[2, 0, 1]);
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_evaluate_idempotent() {
        let m = line_matrix();
        let mut c = Candidate::new(vec![0, 1, 2, 3]);
        let first = c.evaluate(&m);
        let second = c.evaluate(&m);
        assert_eq!(first, 6.0);
        assert_eq!(first, second);
        assert!(c.is_evaluated());
    }

    #[test]
    fn test_clone_is_independent() {
        let m = line_matrix();
        let mut original = Candidate::new(vec![0, 1, 2, 3]);
        original.evaluate(&m);
        let mut copy = original.clone();
        copy.tour_mut().swap(0, 3);
        copy.invalidate();
        assert_eq!(original.tour(), &[0, 1, 2, 3]);
        assert_eq!(original.cost(), 6.0);
        assert!(!copy.is_evaluated());
    }

    #[test]
    fn test_sort_is_stable() {
        let m = line_matrix();
        let mut pop: Vec<Candidate> = [
            vec![0, 2, 1, 3], // 8
            vec![0, 1, 2, 3], // 6
            vec![3, 2, 1, 0], // 6
            vec![1, 2, 3, 0], // 6
        ]
        .into_iter()
        .map(|t| {
            let mut c = Candidate::new(t);
            c.evaluate(&m);
            c
        })
        .collect();
        pop.push(Candidate::new(vec![0, 1, 2, 3]));

        sort_by_cost(&mut pop);
        assert_eq!(pop[0].tour(), &[0, 1, 2, 3]);
        assert_eq!(pop[1].tour(), &[3, 2, 1, 0]);
        assert_eq!(pop[2].tour(), &[1, 2, 3, 0]);
        assert_eq!(pop[3].cost(), 8.0);
        assert!(!pop[4].is_evaluated());
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(is_permutation(&[], 0));
        assert!(!is_permutation(&[0, 0, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
        assert!(!is_permutation(&[0, 1], 3));
    }
}
