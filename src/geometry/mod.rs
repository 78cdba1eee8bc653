// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for unique-distance grids.
//!
//! This module contains value types for the grid and the counters on it:
//! - GridConfig: dimension and width of the grid
//! - Point: one cell, as a tuple of coordinates
//! - Arrangement: a sorted collection of points, one per counter
//! - constants: capacity limits and small combinatorial helpers

pub mod arrangement;
pub mod config;
pub mod constants;
pub mod point;

// Re-export for convenience
pub use arrangement::Arrangement;
pub use config::GridConfig;
pub use constants::*;
pub use point::Point;
