// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error and warning types for search configuration.
//!
//! Configuration problems are detected before a search starts and are never
//! corrected silently. A configuration that exceeds a fixed capacity is an
//! error; a candidate total too large for the counting type is only a
//! warning, since the search itself is still correct.
//!
//! Contract violations inside the core (a value outside a
//! [`BoundedSet`](crate::distance::BoundedSet)'s capacity, an out-of-range
//! point) are bugs, not bad input, and panic.

use std::fmt;
use strum_macros::Display;
use thiserror::Error;

/// The capacity that a configuration ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Limit {
    /// Number of axes, bounded by [`MAX_DIMENSION`](crate::geometry::MAX_DIMENSION).
    #[strum(to_string = "dimension")]
    Dimension,
    /// Number of counters, bounded by [`MAX_COUNTERS`](crate::geometry::MAX_COUNTERS).
    #[strum(to_string = "counter count")]
    Counters,
    /// Distance set capacity, bounded by [`MAX_SET_CAPACITY`](crate::geometry::MAX_SET_CAPACITY).
    #[strum(to_string = "distance set size")]
    SquaredDistance,
    /// Number of grid cells, which must fit in a `u64`.
    #[strum(to_string = "grid cell count")]
    GridCells,
}

/// Errors detected while validating a search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A requested size exceeds a supported fixed capacity.
    #[error("{limit} {requested} exceeds the supported maximum of {max}")]
    ConfigurationLimitExceeded {
        limit: Limit,
        requested: u64,
        max: u64,
    },
}

/// Warning: the number of candidates does not fit the `u64` counter.
///
/// The search still visits every candidate, but totals and estimates
/// derived from the candidate count are saturated at `u64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverflowRisk {
    /// Cells in the grid (`width^dimension`).
    pub cells: u64,
    /// Counters to place.
    pub counters: usize,
    /// Approximate bit width of the candidate total.
    pub bits: f64,
}

impl fmt::Display for OverflowRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "choosing {} of {} cells gives about 2^{:.0} arrangements; counts and estimates overflow 64 bits",
            self.counters, self.cells, self.bits
        )
    }
}
