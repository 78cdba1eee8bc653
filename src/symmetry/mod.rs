// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Equivalence of arrangements under the symmetries of the grid.
//!
//! Two arrangements are equivalent when some rotation or reflection of the
//! grid maps one onto the other. The search keeps one representative per
//! equivalence class, the first one it meets in rank order.
//!
//! ## Module Structure
//!
//! - `permutation`: Axis permutations with lexicographic successor
//! - `transform`: Transform (permutation + reflections) and SymmetryGroup
//! - `mod`: Equivalence tests against one arrangement or a solution list

pub mod permutation;
pub mod transform;

pub use permutation::Permutation;
pub use transform::{SymmetryGroup, Transform, Transforms};

use crate::geometry::{Arrangement, GridConfig};

/// Return true if some transform of the grid maps `a` onto `b`.
///
/// Arrangements of different sizes are never equivalent. Every transform,
/// the identity included, is tried, so `is_transform_of(g, a, a)` is true.
pub fn is_transform_of(config: &GridConfig, a: &Arrangement, b: &Arrangement) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut image = Arrangement::with_capacity(a.len());
    SymmetryGroup::new(config).iter().any(|t| {
        t.apply_into(config, a, &mut image);
        image == *b
    })
}

/// Return true if `candidate` is equivalent to any of `solutions`.
pub fn contains_transform_of(
    config: &GridConfig,
    solutions: &[Arrangement],
    candidate: &Arrangement,
) -> bool {
    find_transform_of(config, solutions, candidate) < solutions.len()
}

/// Index of the first solution equivalent to `candidate`, or
/// `solutions.len()` if there is none.
pub fn find_transform_of(
    config: &GridConfig,
    solutions: &[Arrangement],
    candidate: &Arrangement,
) -> usize {
    solutions
        .iter()
        .position(|solution| is_transform_of(config, candidate, solution))
        .unwrap_or(solutions.len())
}
