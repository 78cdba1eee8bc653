// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Arrangement type: a placement of counters on the grid.
//!
//! The points of an arrangement are kept in ascending lexicographic order at
//! all times, so two arrangements holding the same points compare equal as
//! plain sequences, whatever order the points were added in.
//!
//! Coincident points are accepted. Two counters on the same cell are at
//! squared distance zero from each other, and nothing here rejects them.

use crate::geometry::Point;
use std::fmt;

/// An ordered collection of grid points, one per counter.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Arrangement {
    points: Vec<Point>,
}

impl Arrangement {
    /// Create an empty arrangement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty arrangement with room for `counters` points.
    pub fn with_capacity(counters: usize) -> Self {
        Self {
            points: Vec::with_capacity(counters),
        }
    }

    /// Build an arrangement from points given in any order.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Point>,
    {
        let mut arrangement = Self::new();
        for p in points {
            arrangement.add(p.into());
        }
        arrangement
    }

    /// Build an arrangement from coordinate lists, one per counter.
    ///
    /// ```
    /// use unique_distance::geometry::Arrangement;
    ///
    /// let a = Arrangement::from_coords(&[&[0, 1], &[0, 0]]);
    /// assert_eq!(format!("{}", a), "{(0,0), (0,1)}");
    /// ```
    pub fn from_coords(coords: &[&[u32]]) -> Self {
        coords.iter().map(|c| Point::new(c)).collect()
    }

    /// Add a point, keeping the points sorted.
    ///
    /// A point equal to existing ones goes after them.
    pub fn add(&mut self, point: Point) {
        let at = self.points.partition_point(|q| *q <= point);
        self.points.insert(at, point);
    }

    /// Check if this point is in the arrangement.
    pub fn contains(&self, point: &Point) -> bool {
        self.points.binary_search(point).is_ok()
    }

    /// The points in canonical (ascending) order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of counters.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Replace the points wholesale, restoring canonical order.
    pub(crate) fn set_unsorted(&mut self, points: impl IntoIterator<Item = Point>) {
        self.points.clear();
        self.points.extend(points);
        self.points.sort_unstable();
    }
}

impl<'a> IntoIterator for &'a Arrangement {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl FromIterator<Point> for Arrangement {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self::from_points(iter)
    }
}

impl fmt::Display for Arrangement {
    /// Format an arrangement as "{(0,0), (0,1)}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, "}}")
    }
}

impl fmt::Debug for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(Arrangement::new(), Arrangement::from_points(Vec::<Point>::new()));
        assert!(Arrangement::new().is_empty());
    }

    #[test]
    fn test_equality() {
        assert_eq!(
            Arrangement::from_coords(&[&[1, 1]]),
            Arrangement::from_coords(&[&[1, 1]])
        );
        assert_ne!(
            Arrangement::from_coords(&[&[1, 1]]),
            Arrangement::from_coords(&[&[0, 0]])
        );
        assert_ne!(
            Arrangement::from_coords(&[&[1, 1, 2]]),
            Arrangement::from_coords(&[&[1, 2, 1]])
        );
        assert_ne!(
            Arrangement::from_coords(&[&[1, 1]]),
            Arrangement::from_coords(&[&[1, 1], &[2, 2]])
        );
    }

    #[test]
    fn test_order_does_not_matter() {
        let a = Arrangement::from_coords(&[&[0, 0], &[0, 1], &[1, 2]]);
        let b = Arrangement::from_coords(&[&[0, 1], &[0, 0], &[1, 2]]);
        let c = Arrangement::from_coords(&[&[1, 2], &[0, 1], &[0, 0]]);
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(
            a.points(),
            &[Point::new(&[0, 0]), Point::new(&[0, 1]), Point::new(&[1, 2])]
        );
    }

    #[test]
    fn test_contains() {
        let a = Arrangement::from_coords(&[&[1, 1, 2], &[1, 2, 0]]);
        assert!(a.contains(&Point::new(&[1, 2, 0])));
        assert!(a.contains(&Point::new(&[1, 1, 2])));
        assert!(!a.contains(&Point::new(&[0, 0, 0])));
    }

    #[test]
    fn test_coincident_points_kept() {
        let a = Arrangement::from_coords(&[&[0, 0], &[0, 0]]);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_display() {
        let a = Arrangement::from_coords(&[&[0, 1], &[0, 0]]);
        assert_eq!(format!("{}", a), "{(0,0), (0,1)}");
        assert_eq!(format!("{}", Arrangement::new()), "{}");
    }
}
