// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Append-only list of accepted arrangements.

use crate::geometry::Arrangement;
use std::ops::Index;

/// Solutions in the order they were discovered.
///
/// Entries are never modified or removed once pushed, so indices handed out
/// by [`crate::symmetry::find_transform_of`] stay valid for the whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionSet {
    solutions: Vec<Arrangement>,
}

impl SolutionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a solution, returning its index.
    pub fn push(&mut self, arrangement: Arrangement) -> usize {
        self.solutions.push(arrangement);
        self.solutions.len() - 1
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn as_slice(&self) -> &[Arrangement] {
        &self.solutions
    }

    pub fn last(&self) -> Option<&Arrangement> {
        self.solutions.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arrangement> {
        self.solutions.iter()
    }

    pub fn into_vec(self) -> Vec<Arrangement> {
        self.solutions
    }
}

impl Index<usize> for SolutionSet {
    type Output = Arrangement;

    fn index(&self, index: usize) -> &Arrangement {
        &self.solutions[index]
    }
}

impl<'a> IntoIterator for &'a SolutionSet {
    type Item = &'a Arrangement;
    type IntoIter = std::slice::Iter<'a, Arrangement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for SolutionSet {
    type Item = Arrangement;
    type IntoIter = std::vec::IntoIter<Arrangement>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}
