// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of every placement of `k` counters on a grid.
//!
//! Cells are numbered `0..width^dimension` by reading a point's coordinates
//! as the digits of a base-`width` number, most significant first. A
//! candidate is a strictly increasing tuple of `k` cell numbers, and the
//! candidates are produced in lexicographic order of those tuples, which is
//! also lexicographic order of the sorted point lists. The position of a
//! candidate in that order is its *rank*.
//!
//! The successor step is the standard "next combination": find the
//! rightmost cell that can still move up without running into the cells to
//! its right, increment it, and reset everything to its right to
//! consecutive values. Nothing proportional to the number of candidates is
//! ever materialized.
//!
//! # Examples
//!
//! ```
//! use unique_distance::enumeration::{total_arrangements, Arrangements};
//! use unique_distance::geometry::GridConfig;
//!
//! let grid = GridConfig::new(2, 3);
//! assert_eq!(total_arrangements(&grid, 3), 84);
//! assert_eq!(Arrangements::new(grid, 3).count(), 84);
//!
//! let first = Arrangements::new(grid, 2).next().unwrap();
//! assert_eq!(format!("{}", first), "{(0,0), (0,1)}");
//! ```

use crate::geometry::{checked_binomial, Arrangement, GridConfig, Point, MAX_DIMENSION};
use std::fmt;

/// Number of distinct placements of `counters` counters on the grid, or
/// None if it does not fit in a `u64`.
///
/// A width-0 grid has no placements, even of zero counters.
pub fn checked_total_arrangements(config: &GridConfig, counters: usize) -> Option<u64> {
    if config.width == 0 {
        return Some(0);
    }
    checked_binomial(config.checked_cells()?, counters as u64)
}

/// Number of distinct placements of `counters` counters on the grid,
/// saturating at `u64::MAX`.
pub fn total_arrangements(config: &GridConfig, counters: usize) -> u64 {
    checked_total_arrangements(config, counters).unwrap_or(u64::MAX)
}

/// Encode a point as its cell number.
pub fn encode_point(config: &GridConfig, point: &Point) -> u64 {
    point
        .coords()
        .iter()
        .fold(0u64, |cell, &c| cell * config.width as u64 + c as u64)
}

/// Decode a cell number into a point.
///
/// # Panics
///
/// Panics if the grid has no cells or more than [`MAX_DIMENSION`] axes.
pub fn decode_cell(config: &GridConfig, mut cell: u64) -> Point {
    assert!(config.width > 0, "Cannot decode a cell of a zero-width grid");
    assert!(
        config.dimension <= MAX_DIMENSION,
        "Grid dimension out of range"
    );
    let width = config.width as u64;
    let mut point = Point::new(&[0; MAX_DIMENSION][..config.dimension]);
    for c in point.coords_mut().iter_mut().rev() {
        *c = (cell % width) as u32;
        cell /= width;
    }
    point
}

/// Lazy sequence of every arrangement of `counters` counters, in rank order.
///
/// Two enumerators for the same grid compare equal when they are at the
/// same rank, whatever their internal state. [`Arrangements::end`] builds
/// the sentinel positioned after the last candidate.
#[derive(Clone)]
pub struct Arrangements {
    config: GridConfig,
    /// Total number of cells on the grid.
    positions: u64,
    /// Strictly increasing cell numbers of the current candidate.
    cells: Vec<u64>,
    rank: u64,
    total: u64,
}

impl Arrangements {
    /// Enumerate from the first candidate (rank 0).
    ///
    /// # Panics
    ///
    /// Panics if the grid has more than [`MAX_DIMENSION`] axes; use
    /// [`GridConfig::validate`] first for untrusted input.
    pub fn new(config: GridConfig, counters: usize) -> Self {
        assert!(
            config.dimension <= MAX_DIMENSION,
            "Grid dimension out of range"
        );
        let positions = config.cells();
        Self {
            config,
            positions,
            cells: (0..counters as u64).collect(),
            rank: 0,
            total: total_arrangements(&config, counters),
        }
    }

    /// Enumerate starting from the candidate at `rank`.
    ///
    /// A rank at or past the total gives an exhausted enumerator.
    pub fn starting_at(config: GridConfig, counters: usize, rank: u64) -> Self {
        let mut arrangements = Self::new(config, counters);
        if rank >= arrangements.total {
            arrangements.rank = arrangements.total;
            return arrangements;
        }
        arrangements.unrank(rank);
        arrangements
    }

    /// The exhausted enumerator, at rank `total`.
    pub fn end(config: GridConfig, counters: usize) -> Self {
        Self::starting_at(config, counters, u64::MAX)
    }

    /// Rank of the next candidate to be produced.
    pub fn rank(&self) -> u64 {
        self.rank
    }

    /// Number of candidates in the full sequence.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// True once every candidate has been produced.
    pub fn is_exhausted(&self) -> bool {
        self.rank >= self.total
    }

    /// The cell numbers of the next candidate.
    pub fn cells(&self) -> &[u64] {
        &self.cells
    }

    /// The next candidate, without advancing.
    pub fn current(&self) -> Arrangement {
        let mut arrangement = Arrangement::with_capacity(self.cells.len());
        for &cell in &self.cells {
            arrangement.add(decode_cell(&self.config, cell));
        }
        arrangement
    }

    /// Step to the next combination of cells.
    fn advance(&mut self) {
        self.rank += 1;

        let k = self.cells.len();
        let n = self.positions;
        // The last combination is (n-k, ..., n-1); stay there once reached.
        if k == 0 || self.cells[0] == n - k as u64 {
            return;
        }

        // Rightmost cell not yet at its maximum (n - (k - i)).
        let mut i = k - 1;
        while self.cells[i] == n - (k - i) as u64 {
            i -= 1;
        }
        self.cells[i] += 1;
        for j in i + 1..k {
            self.cells[j] = self.cells[j - 1] + 1;
        }
    }

    /// Position the cells at the combination with the given rank.
    ///
    /// Uses the combinatorial number system: for each slot, skip over the
    /// blocks of combinations that start with a smaller cell.
    fn unrank(&mut self, rank: u64) {
        let k = self.cells.len() as u64;
        let n = self.positions;
        let mut remaining = rank;
        let mut cell = 0;
        for slot in 0..k {
            loop {
                // Combinations whose slot holds `cell`, given the earlier slots.
                let block = checked_binomial(n - cell - 1, k - slot - 1).unwrap_or(u64::MAX);
                if remaining < block {
                    break;
                }
                remaining -= block;
                cell += 1;
            }
            self.cells[slot as usize] = cell;
            cell += 1;
        }
        self.rank = rank;
    }
}

impl Iterator for Arrangements {
    type Item = Arrangement;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted() {
            return None;
        }
        let arrangement = self.current();
        self.advance();
        Some(arrangement)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.total - self.rank.min(self.total)) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl PartialEq for Arrangements {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl fmt::Debug for Arrangements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arrangements")
            .field("config", &self.config)
            .field("rank", &self.rank)
            .field("total", &self.total)
            .field("cells", &self.cells)
            .finish()
    }
}
