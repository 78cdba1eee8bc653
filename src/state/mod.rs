// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search results.
//!
//! - `solutions`: the append-only list of representatives found so far
//! - `statistics`: counters updated by the engine and by counting predicates

pub mod solutions;
pub mod statistics;

pub use solutions::SolutionSet;
pub use statistics::{Counters, Statistics};
