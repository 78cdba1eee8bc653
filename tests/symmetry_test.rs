// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetry group laws and the deduplication they drive.

mod common;

use common::{grid_and_coords, points, solve};
use proptest::prelude::*;
use unique_distance::distance::has_unique_distances;
use unique_distance::enumeration::Arrangements;
use unique_distance::geometry::{Arrangement, GridConfig};
use unique_distance::symmetry::{
    contains_transform_of, find_transform_of, is_transform_of, SymmetryGroup, Transform,
};

fn nth_transform(grid: &GridConfig, index: prop::sample::Index) -> Transform {
    let group = SymmetryGroup::new(grid);
    group.iter().nth(index.index(group.order())).unwrap()
}

proptest! {
    #[test]
    fn test_transform_is_equivalent(
        (grid, coords) in grid_and_coords(5),
        index in any::<prop::sample::Index>(),
    ) {
        let a: Arrangement = points(&coords).into_iter().collect();
        let t = nth_transform(&grid, index);
        let image = t.apply(&grid, &a);
        prop_assert!(is_transform_of(&grid, &image, &a));
        prop_assert!(is_transform_of(&grid, &a, &image));
    }

    #[test]
    fn test_transform_preserves_distances(
        (grid, coords) in grid_and_coords(5),
        index in any::<prop::sample::Index>(),
    ) {
        let a: Arrangement = points(&coords).into_iter().collect();
        let image = nth_transform(&grid, index).apply(&grid, &a);
        prop_assert_eq!(image.len(), a.len());
        prop_assert_eq!(
            has_unique_distances(&grid, &image),
            has_unique_distances(&grid, &a)
        );
    }

    #[test]
    fn test_group_is_closed_under_composition(
        (grid, coords) in grid_and_coords(4),
        first in any::<prop::sample::Index>(),
        second in any::<prop::sample::Index>(),
    ) {
        let a: Arrangement = points(&coords).into_iter().collect();
        let twice = nth_transform(&grid, second)
            .apply(&grid, &nth_transform(&grid, first).apply(&grid, &a));
        let group = SymmetryGroup::new(&grid);
        prop_assert!(group.iter().any(|t| t.apply(&grid, &a) == twice));
    }
}

#[test]
fn test_solutions_are_pairwise_inequivalent() {
    let grid = GridConfig::new(2, 4);
    let solutions = solve(2, 4, 3);
    for (i, a) in solutions.iter().enumerate() {
        for b in &solutions[i + 1..] {
            assert!(!is_transform_of(&grid, a, b), "{} ~ {}", a, b);
        }
    }
}

#[test]
fn test_every_unique_candidate_has_a_representative() {
    let grid = GridConfig::new(2, 4);
    let solutions = solve(2, 4, 3);
    for candidate in Arrangements::new(grid, 3) {
        if has_unique_distances(&grid, &candidate) {
            let index = find_transform_of(&grid, &solutions, &candidate);
            assert!(index < solutions.len(), "{} has no representative", candidate);
            // The representative is the earliest member of its class.
            assert!(solutions[index].points() <= candidate.points());
        } else {
            assert!(!contains_transform_of(&grid, &solutions, &candidate));
        }
    }
}

#[test]
fn test_group_orders() {
    for (dimension, order) in [(0, 1), (1, 2), (2, 8), (3, 48), (4, 384)] {
        let grid = GridConfig::new(dimension, 3);
        assert_eq!(SymmetryGroup::new(&grid).order(), order);
        assert_eq!(SymmetryGroup::new(&grid).iter().count(), order);
    }
}
