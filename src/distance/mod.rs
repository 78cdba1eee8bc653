// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pairwise distance checks.
//!
//! An arrangement has unique distances when all `k(k-1)/2` squared distances
//! between its counters are different. The check walks the pairs in a fixed
//! order (outer index `i`, inner index `j > i`) and records each squared
//! distance in a [`BoundedSet`] sized to the largest squared distance the
//! grid allows. The first repeated distance ends the check.
//!
//! ## Module Structure
//!
//! - `bounded_set`: Fixed-capacity bitmap with add-if-absent semantics
//! - `mod`: UniquenessChecker and convenience functions

pub mod bounded_set;

pub use bounded_set::BoundedSet;

use crate::geometry::{Arrangement, GridConfig};

/// Reusable unique-distance test for one grid.
///
/// Holds a distance set sized to `dimension * (width - 1)^2 + 1`, cleared
/// between candidates rather than reallocated.
#[derive(Debug, Clone)]
pub struct UniquenessChecker {
    distances: BoundedSet,
}

impl UniquenessChecker {
    /// Create a checker for arrangements on `config`.
    pub fn new(config: &GridConfig) -> Self {
        Self {
            distances: BoundedSet::new(config.distance_set_capacity()),
        }
    }

    /// Return true if all pairwise squared distances in `arrangement` differ.
    ///
    /// Coincident counters contribute a distance of zero like any other pair.
    pub fn check(&mut self, arrangement: &Arrangement) -> bool {
        self.distances.clear();
        let points = arrangement.points();
        for (i, p) in points.iter().enumerate() {
            for q in &points[i + 1..] {
                if !self.distances.add(p.squared_distance(q)) {
                    return false;
                }
            }
        }
        true
    }
}

/// Check if this arrangement satisfies the unique-distance requirement.
///
/// Allocates a fresh distance set; use a [`UniquenessChecker`] in loops.
pub fn has_unique_distances(config: &GridConfig, arrangement: &Arrangement) -> bool {
    UniquenessChecker::new(config).check(arrangement)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(dimension: usize, width: u32) -> GridConfig {
        GridConfig::new(dimension, width)
    }

    #[test]
    fn test_trivial_arrangements() {
        assert!(has_unique_distances(&grid(2, 3), &Arrangement::new()));
        assert!(has_unique_distances(&grid(7, 7), &Arrangement::new()));
        assert!(has_unique_distances(
            &grid(4, 4),
            &Arrangement::from_coords(&[&[1, 1, 1, 1]])
        ));
        assert!(has_unique_distances(
            &grid(0, 0),
            &Arrangement::from_coords(&[&[]])
        ));
    }

    #[test]
    fn test_pairs() {
        let g = grid(2, 3);
        assert!(has_unique_distances(&g, &Arrangement::from_coords(&[&[0, 0], &[0, 1]])));
        assert!(has_unique_distances(&g, &Arrangement::from_coords(&[&[0, 0], &[0, 0]])));
        assert!(has_unique_distances(&g, &Arrangement::from_coords(&[&[1, 1], &[0, 0]])));
    }

    #[test]
    fn test_triples() {
        let g = grid(2, 3);
        // Squared distances {1, 1, 2}.
        assert!(!has_unique_distances(
            &g,
            &Arrangement::from_coords(&[&[0, 0], &[0, 1], &[1, 0]])
        ));
        assert!(!has_unique_distances(
            &g,
            &Arrangement::from_coords(&[&[0, 0], &[0, 1], &[1, 1]])
        ));
        // Squared distances {1, 4, 5}.
        assert!(has_unique_distances(
            &g,
            &Arrangement::from_coords(&[&[0, 0], &[0, 1], &[2, 0]])
        ));
        assert!(has_unique_distances(
            &g,
            &Arrangement::from_coords(&[&[0, 0], &[0, 1], &[2, 1]])
        ));
        assert!(has_unique_distances(
            &g,
            &Arrangement::from_coords(&[&[0, 0], &[0, 1], &[2, 2]])
        ));
    }

    #[test]
    fn test_coincident_counters_repeat_zero() {
        let g = grid(2, 3);
        // Two coincident pairs both have distance zero.
        assert!(!has_unique_distances(
            &g,
            &Arrangement::from_coords(&[&[0, 0], &[0, 0], &[2, 2], &[2, 2]])
        ));
    }

    #[test]
    fn test_checker_reuse() {
        let g = grid(2, 3);
        let mut checker = UniquenessChecker::new(&g);
        let bad = Arrangement::from_coords(&[&[0, 0], &[0, 1], &[1, 0]]);
        let good = Arrangement::from_coords(&[&[0, 0], &[0, 1], &[2, 0]]);
        assert!(!checker.check(&bad));
        assert!(checker.check(&good));
        assert!(checker.check(&good));
        assert!(!checker.check(&bad));
    }

    #[test]
    fn test_largest_distance_fits() {
        let g = grid(3, 4);
        let corners = Arrangement::from_coords(&[&[0, 0, 0], &[3, 3, 3]]);
        assert!(has_unique_distances(&g, &corners));
    }

    #[test]
    #[should_panic(expected = "BoundedSet value out of range")]
    fn test_points_off_the_grid() {
        let g = grid(2, 3);
        has_unique_distances(&g, &Arrangement::from_coords(&[&[0, 0], &[5, 5]]));
    }
}
