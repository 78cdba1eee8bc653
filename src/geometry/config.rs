// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Grid configuration.
//!
//! A [`GridConfig`] describes an axis-aligned grid of `width^dimension`
//! cells. It is fixed for the duration of a search and checked against the
//! crate's capacity limits by [`GridConfig::validate`] before the search
//! starts.

use crate::error::{Limit, OverflowRisk, SearchError};
use crate::geometry::constants::{
    checked_binomial, MAX_COUNTERS, MAX_DIMENSION, MAX_SET_CAPACITY,
};
use std::fmt;

/// Parameters of the grid being searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridConfig {
    /// Number of spatial dimensions.
    pub dimension: usize,
    /// Number of cells along each axis.
    pub width: u32,
}

impl GridConfig {
    pub const fn new(dimension: usize, width: u32) -> Self {
        Self { dimension, width }
    }

    /// Number of cells in the grid, or None if it overflows a `u64`.
    ///
    /// A width-0 grid has no cells, whatever its dimension.
    pub fn checked_cells(&self) -> Option<u64> {
        if self.width == 0 {
            return Some(0);
        }
        let exp = u32::try_from(self.dimension).ok()?;
        (self.width as u64).checked_pow(exp)
    }

    /// Number of cells in the grid (saturating).
    pub fn cells(&self) -> u64 {
        self.checked_cells().unwrap_or(u64::MAX)
    }

    /// Largest squared distance between two cells: `dimension * (width - 1)^2`.
    pub fn max_squared_distance(&self) -> u64 {
        let side = self.width.saturating_sub(1) as u64;
        (self.dimension as u64).saturating_mul(side.saturating_mul(side))
    }

    /// Capacity a distance set needs to hold every squared distance on the grid.
    pub fn distance_set_capacity(&self) -> u64 {
        self.max_squared_distance().saturating_add(1)
    }

    /// Check that a search for `counters` counters fits the supported capacities.
    pub fn validate(&self, counters: usize) -> Result<(), SearchError> {
        check(Limit::Dimension, self.dimension as u64, MAX_DIMENSION as u64)?;
        check(Limit::Counters, counters as u64, MAX_COUNTERS as u64)?;
        check(
            Limit::SquaredDistance,
            self.distance_set_capacity(),
            MAX_SET_CAPACITY,
        )?;
        if self.checked_cells().is_none() {
            return Err(SearchError::ConfigurationLimitExceeded {
                limit: Limit::GridCells,
                requested: u64::MAX,
                max: u64::MAX,
            });
        }
        Ok(())
    }

    /// Report whether the candidate total for `counters` overflows a `u64`.
    pub fn overflow_risk(&self, counters: usize) -> Option<OverflowRisk> {
        let cells = self.cells();
        if checked_binomial(cells, counters as u64).is_some() {
            return None;
        }
        Some(OverflowRisk {
            cells,
            counters,
            bits: log2_binomial(cells, counters as u64),
        })
    }
}

fn check(limit: Limit, requested: u64, max: u64) -> Result<(), SearchError> {
    if requested > max {
        Err(SearchError::ConfigurationLimitExceeded {
            limit,
            requested,
            max,
        })
    } else {
        Ok(())
    }
}

/// log2 of (n choose k), for reporting only.
fn log2_binomial(n: u64, k: u64) -> f64 {
    (0..k.min(n))
        .map(|i| ((n - i) as f64).log2() - ((i + 1) as f64).log2())
        .sum()
}

impl Default for GridConfig {
    /// The classic puzzle grid: 3x3.
    fn default() -> Self {
        Self::new(2, 3)
    }
}

impl fmt::Display for GridConfig {
    /// Format as "<dimension:width>".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}:{}>", self.dimension, self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells() {
        assert_eq!(GridConfig::new(2, 3).cells(), 9);
        assert_eq!(GridConfig::new(4, 3).cells(), 81);
        assert_eq!(GridConfig::new(0, 3).cells(), 1);
        assert_eq!(GridConfig::new(3, 0).cells(), 0);
        assert_eq!(GridConfig::new(0, 0).cells(), 0);
    }

    #[test]
    fn test_max_squared_distance() {
        assert_eq!(GridConfig::new(2, 3).max_squared_distance(), 8);
        assert_eq!(GridConfig::new(4, 4).max_squared_distance(), 36);
        assert_eq!(GridConfig::new(2, 0).max_squared_distance(), 0);
        assert_eq!(GridConfig::new(2, 3).distance_set_capacity(), 9);
    }

    #[test]
    fn test_validate_ok() {
        assert_eq!(GridConfig::new(2, 3).validate(3), Ok(()));
        assert_eq!(GridConfig::new(8, 3).validate(10), Ok(()));
        assert_eq!(GridConfig::new(2, 6).validate(6), Ok(()));
    }

    #[test]
    fn test_validate_dimension() {
        assert_eq!(
            GridConfig::new(9, 3).validate(3),
            Err(SearchError::ConfigurationLimitExceeded {
                limit: Limit::Dimension,
                requested: 9,
                max: MAX_DIMENSION as u64,
            })
        );
    }

    #[test]
    fn test_validate_counters() {
        let err = GridConfig::new(2, 20).validate(11).unwrap_err();
        assert!(matches!(
            err,
            SearchError::ConfigurationLimitExceeded {
                limit: Limit::Counters,
                requested: 11,
                ..
            }
        ));
    }

    #[test]
    fn test_validate_distance_set() {
        // 2 * 1448^2 + 1 fits, 2 * 1449^2 + 1 does not.
        assert!(GridConfig::new(2, 1449).validate(2).is_ok());
        let err = GridConfig::new(2, 1450).validate(2).unwrap_err();
        assert!(matches!(
            err,
            SearchError::ConfigurationLimitExceeded {
                limit: Limit::SquaredDistance,
                ..
            }
        ));
    }

    #[test]
    fn test_validate_grid_cells() {
        // Distance set fits (8 * 700^2 + 1 < 2^22) but 701^8 does not fit in a u64.
        let err = GridConfig::new(8, 701).validate(2).unwrap_err();
        assert!(matches!(
            err,
            SearchError::ConfigurationLimitExceeded {
                limit: Limit::GridCells,
                ..
            }
        ));
    }

    #[test]
    fn test_overflow_risk() {
        assert!(GridConfig::new(2, 6).overflow_risk(6).is_none());
        let risk = GridConfig::new(8, 100).overflow_risk(10).unwrap();
        assert_eq!(risk.cells, 10_000_000_000_000_000);
        assert!(risk.bits > 64.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", GridConfig::new(2, 3)), "<2:3>");
    }
}
