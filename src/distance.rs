//! Euclidean geometry over a 2D point set.
//!
//! [`DistanceMatrix`] caches all pairwise distances so that tour costs can
//! be summed without recomputing square roots. A matrix describes exactly
//! one layout: whenever the points move, build a new one.

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Symmetric matrix of pairwise distances, stored row-major.
///
/// # Examples
///
/// ```
/// use u_dyntsp::distance::{DistanceMatrix, Point};
///
/// let points = [Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
/// let matrix = DistanceMatrix::build(&points);
/// assert_eq!(matrix.get(0, 1), 5.0);
/// assert_eq!(matrix.get(1, 0), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Computes every unordered pair once and mirrors it.
    ///
    /// # Complexity
    /// O(n²)
    pub fn build(points: &[Point]) -> Self {
        let n = points.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = distance(points[i], points[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { n, data }
    }

    /// Distance between points `i` and `j`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "index out of bounds");
        self.data[i * self.n + j]
    }

    /// Number of points the matrix was built from.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Cost of `tour` as a closed cycle. See [`tour_cost`].
    pub fn tour_cost(&self, tour: &[usize]) -> f64 {
        tour_cost(tour, self)
    }
}

/// Total length of `tour` treated as a closed cycle.
///
/// Includes the edge from the last point back to the first. Tours with
/// fewer than two points cost nothing.
pub fn tour_cost(tour: &[usize], matrix: &DistanceMatrix) -> f64 {
    let n = tour.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| matrix.get(tour[i], tour[(i + 1) % n]))
        .sum()
}
