// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context: everything one search run reads and writes.
//!
//! The context is owned by the caller and lent to the engine on each call
//! to `search`, so its contents stay readable between suspensions. It
//! combines:
//! - Fixed configuration: the grid and the number of counters
//! - The Subset Enumerator, positioned at the next candidate
//! - The current candidate and its rank
//! - Accumulated results: the solution set and statistics
//! - Reusable scratch space for the distance check

use crate::distance::UniquenessChecker;
use crate::enumeration::Arrangements;
use crate::geometry::{Arrangement, GridConfig};
use crate::search::Progress;
use crate::state::statistics::Counters;
use crate::state::{SolutionSet, Statistics};

/// Complete state of one search run.
#[derive(Debug, Clone)]
pub struct SearchContext {
    pub config: GridConfig,

    /// Number of counters placed in each candidate.
    pub counters: usize,

    /// Candidates not yet tried.
    pub arrangements: Arrangements,

    /// The candidate being tested.
    pub candidate: Arrangement,

    /// Rank of `candidate` in enumeration order.
    pub rank: u64,

    /// Symmetry class of `candidate`, set by the classification pipeline.
    pub class: usize,

    /// Representatives found so far, in discovery order.
    pub solutions: SolutionSet,

    pub statistics: Statistics,

    /// Distance set reused for every candidate.
    pub checker: UniquenessChecker,

    /// Set when the engine stopped because of cancellation.
    pub cancelled: bool,
}

impl SearchContext {
    /// Create a context positioned at the first candidate.
    ///
    /// The configuration is not validated here; see [`GridConfig::validate`].
    pub fn new(config: GridConfig, counters: usize) -> Self {
        Self::starting_at(config, counters, 0)
    }

    /// Create a context whose first candidate is the one at `rank`.
    pub fn starting_at(config: GridConfig, counters: usize, rank: u64) -> Self {
        Self {
            config,
            counters,
            arrangements: Arrangements::starting_at(config, counters, rank),
            candidate: Arrangement::with_capacity(counters),
            rank,
            class: 0,
            solutions: SolutionSet::new(),
            statistics: Statistics::new(),
            checker: UniquenessChecker::new(&config),
            cancelled: false,
        }
    }

    /// Total number of candidates, saturated at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.arrangements.total()
    }

    /// Snapshot for progress callbacks.
    pub fn progress(&self) -> Progress {
        Progress {
            tried: self.statistics.get(Counters::Candidates),
            found: self.solutions.len() as u64,
            total: self.total(),
        }
    }
}
