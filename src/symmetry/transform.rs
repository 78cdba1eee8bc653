// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Grid symmetries: axis permutations combined with axis reflections.
//!
//! The symmetry group of a `dimension`-cube is generated by the
//! `dimension!` permutations of the axes and the `2^dimension` choices of
//! which axes to reflect (`c -> width - 1 - c`), giving exactly
//! `dimension! * 2^dimension` elements (the hyperoctahedral group).

use super::Permutation;
use crate::geometry::{symmetry_group_order, Arrangement, GridConfig, Point};
use std::fmt;

/// One element of the grid's symmetry group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transform {
    /// Output axis `i` takes its coordinate from source axis `permutation[i]`.
    pub permutation: Permutation,
    /// Bit `i` set: output axis `i` is reflected.
    pub reflections: u32,
}

impl Transform {
    pub fn new(permutation: Permutation, reflections: u32) -> Self {
        Self {
            permutation,
            reflections,
        }
    }

    /// The identity transform on `dimension` axes.
    pub fn identity(dimension: usize) -> Self {
        Self::new(Permutation::identity(dimension), 0)
    }

    /// Rotate and reflect a single point.
    ///
    /// For each output axis, take the source coordinate selected by the
    /// permutation, then reflect it if that axis's reflection bit is set.
    pub fn apply_point(&self, config: &GridConfig, point: &Point) -> Point {
        let source = point.coords();
        let mut result = *point;
        for (i, c) in result.coords_mut().iter_mut().enumerate() {
            let v = source[self.permutation.get(i)];
            debug_assert!(v < config.width, "coordinate {} off a width-{} grid", v, config.width);
            *c = if (self.reflections >> i) & 1 != 0 {
                config.width - 1 - v
            } else {
                v
            };
        }
        result
    }

    /// Return the arrangement transformed, in canonical order.
    pub fn apply(&self, config: &GridConfig, arrangement: &Arrangement) -> Arrangement {
        let mut result = Arrangement::with_capacity(arrangement.len());
        self.apply_into(config, arrangement, &mut result);
        result
    }

    /// Transform `arrangement` into `out`, reusing its storage.
    pub fn apply_into(&self, config: &GridConfig, arrangement: &Arrangement, out: &mut Arrangement) {
        out.set_unsorted(arrangement.iter().map(|p| self.apply_point(config, p)));
    }
}

impl fmt::Display for Transform {
    /// Format as "[1 0]/11": permutation then reflection bits, axis 0 first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/", self.permutation)?;
        for i in 0..self.permutation.len() {
            write!(f, "{}", (self.reflections >> i) & 1)?;
        }
        Ok(())
    }
}

/// The full symmetry group of a grid.
///
/// Iteration order is reflections outermost (mask `0..2^dimension`), and
/// for each mask every axis permutation in lexicographic order starting
/// from the identity. The identity transform therefore comes first.
#[derive(Debug, Clone, Copy)]
pub struct SymmetryGroup {
    dimension: usize,
}

impl SymmetryGroup {
    pub fn new(config: &GridConfig) -> Self {
        Self {
            dimension: config.dimension,
        }
    }

    /// Number of elements: `dimension! * 2^dimension`.
    pub fn order(&self) -> usize {
        symmetry_group_order(self.dimension)
    }

    pub fn iter(&self) -> Transforms {
        Transforms {
            permutation: Permutation::identity(self.dimension),
            reflections: 0,
            end: 1u32 << self.dimension,
        }
    }
}

impl IntoIterator for &SymmetryGroup {
    type Item = Transform;
    type IntoIter = Transforms;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of a [`SymmetryGroup`].
#[derive(Debug, Clone)]
pub struct Transforms {
    permutation: Permutation,
    reflections: u32,
    end: u32,
}

impl Iterator for Transforms {
    type Item = Transform;

    fn next(&mut self) -> Option<Self::Item> {
        if self.reflections >= self.end {
            return None;
        }
        let transform = Transform::new(self.permutation, self.reflections);
        // next() wraps back to the identity after the last permutation.
        if !self.permutation.next() {
            self.reflections += 1;
        }
        Some(transform)
    }
}
