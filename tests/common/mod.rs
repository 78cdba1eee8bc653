// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use proptest::prelude::*;
use unique_distance::geometry::{Arrangement, GridConfig, Point};
use unique_distance::search::Search;

/// Build an arrangement from coordinate lists.
pub fn arrangement(points: &[&[u32]]) -> Arrangement {
    Arrangement::from_coords(points)
}

/// Run a complete search and return the solutions in discovery order.
pub fn solve(dimension: usize, width: u32, counters: usize) -> Vec<Arrangement> {
    Search::new(GridConfig::new(dimension, width), counters)
        .expect("valid configuration")
        .solve()
        .into_vec()
}

/// A small grid (dimension 1..=3, width 1..=4) and up to `max_points`
/// coordinate lists on it.
pub fn grid_and_coords(
    max_points: usize,
) -> impl Strategy<Value = (GridConfig, Vec<Vec<u32>>)> {
    (1usize..=3, 1u32..=4).prop_flat_map(move |(dimension, width)| {
        let point = prop::collection::vec(0..width, dimension);
        (
            Just(GridConfig::new(dimension, width)),
            prop::collection::vec(point, 0..=max_points),
        )
    })
}

pub fn points(coords: &[Vec<u32>]) -> Vec<Point> {
    coords.iter().map(|c| Point::new(c)).collect()
}
