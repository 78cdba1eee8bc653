// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Point type for grid cells.
//!
//! A point is an ordered tuple of integer coordinates, one per axis. Points
//! are small value types: the coordinates live in an inline array bounded by
//! [`MAX_DIMENSION`], so copying a point never allocates.
//!
//! # Examples
//!
//! ```
//! use unique_distance::geometry::Point;
//!
//! let p = Point::new(&[3, 4]);
//! let q = Point::new(&[0, 0]);
//!
//! assert_eq!(p.squared_distance(&q), 25);
//! assert!(q < p);
//! assert_eq!(format!("{}", p), "(3,4)");
//! ```

use crate::geometry::constants::MAX_DIMENSION;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A point on the grid.
///
/// Ordering is strict lexicographic over the coordinates: the first differing
/// coordinate decides. Equality is coordinate-wise.
#[derive(Clone, Copy)]
pub struct Point {
    coords: [u32; MAX_DIMENSION],
    len: u8,
}

impl Point {
    /// The point with no coordinates (the single cell of a 0-dimensional grid).
    pub const EMPTY: Point = Point {
        coords: [0; MAX_DIMENSION],
        len: 0,
    };

    /// Create a point from its coordinates, panicking if there are too many.
    ///
    /// # Panics
    ///
    /// Panics if `coords.len() > MAX_DIMENSION`.
    pub fn new(coords: &[u32]) -> Self {
        assert!(
            coords.len() <= MAX_DIMENSION,
            "Point dimension out of range: {} (max {})",
            coords.len(),
            MAX_DIMENSION
        );
        let mut point = Self::EMPTY;
        point.coords[..coords.len()].copy_from_slice(coords);
        point.len = coords.len() as u8;
        point
    }

    /// Try to create a point, returning None if there are too many coordinates.
    pub fn try_new(coords: &[u32]) -> Option<Self> {
        if coords.len() <= MAX_DIMENSION {
            Some(Self::new(coords))
        } else {
            None
        }
    }

    /// Number of coordinates (the grid dimension this point belongs to).
    pub fn dimension(&self) -> usize {
        self.len as usize
    }

    /// The coordinates, in axis order.
    pub fn coords(&self) -> &[u32] {
        &self.coords[..self.len as usize]
    }

    pub(crate) fn coords_mut(&mut self) -> &mut [u32] {
        &mut self.coords[..self.len as usize]
    }

    /// Square of the Euclidean distance to `other`.
    ///
    /// Always exact: the sum of squared per-axis differences, computed in
    /// `u64`. Never take the square root; squared distances are distinct
    /// exactly when distances are.
    pub fn squared_distance(&self, other: &Point) -> u64 {
        self.coords()
            .iter()
            .zip(other.coords())
            .map(|(&a, &b)| {
                let d = a.abs_diff(b) as u64;
                d * d
            })
            .sum()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.coords() == other.coords()
    }
}

impl Eq for Point {}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.coords().cmp(other.coords())
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coords().hash(state);
    }
}

impl<const N: usize> From<[u32; N]> for Point {
    fn from(coords: [u32; N]) -> Self {
        Self::new(&coords)
    }
}

impl fmt::Display for Point {
    /// Format a point as "(x,y,...)".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.coords().iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let p = Point::new(&[1, 2, 3]);
        assert_eq!(p.dimension(), 3);
        assert_eq!(p.coords(), &[1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "Point dimension out of range")]
    fn test_point_too_many_coords() {
        Point::new(&[0; MAX_DIMENSION + 1]);
    }

    #[test]
    fn test_point_try_new() {
        assert!(Point::try_new(&[0; MAX_DIMENSION]).is_some());
        assert!(Point::try_new(&[0; MAX_DIMENSION + 1]).is_none());
    }

    #[test]
    fn test_point_ordering() {
        assert_eq!(Point::new(&[1, 1]), Point::new(&[1, 1]));
        assert!(Point::new(&[1, 1]) < Point::new(&[1, 2]));
        assert!(Point::new(&[1, 2]) > Point::new(&[1, 1]));
        assert!(Point::new(&[1, 1]) < Point::new(&[2, 1]));
        assert!(Point::new(&[1, 2]) < Point::new(&[2, 1]));
        assert_ne!(Point::new(&[1, 2]), Point::new(&[2, 1]));

        assert!(Point::new(&[1]) < Point::new(&[2]));
        assert_eq!(Point::EMPTY, Point::new(&[]));
    }

    #[test]
    fn test_squared_distance() {
        assert_eq!(Point::new(&[3, 4]).squared_distance(&Point::new(&[0, 0])), 25);
        assert_eq!(
            Point::new(&[3, 4, 0]).squared_distance(&Point::new(&[0, 0, 0])),
            25
        );
        assert_eq!(
            Point::new(&[0, 3, 4]).squared_distance(&Point::new(&[0, 0, 0])),
            25
        );
        assert_eq!(Point::EMPTY.squared_distance(&Point::EMPTY), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Point::new(&[1, 2])), "(1,2)");
        assert_eq!(format!("{}", Point::EMPTY), "()");
        assert_eq!(format!("{:?}", Point::new(&[7])), "(7)");
    }
}
