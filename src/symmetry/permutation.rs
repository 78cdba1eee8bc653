// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Permutations of coordinate axes.

use crate::geometry::MAX_DIMENSION;
use std::fmt;

/// A permutation of `0..n` axis indices, `n <= MAX_DIMENSION`.
///
/// Entry `i` names the source axis whose coordinate lands on output axis `i`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permutation {
    axes: [u8; MAX_DIMENSION],
    len: u8,
}

impl Permutation {
    /// The identity permutation on `n` axes.
    ///
    /// # Panics
    ///
    /// Panics if `n > MAX_DIMENSION`.
    pub fn identity(n: usize) -> Self {
        assert!(
            n <= MAX_DIMENSION,
            "Permutation length out of range: {} (max {})",
            n,
            MAX_DIMENSION
        );
        let mut axes = [0u8; MAX_DIMENSION];
        for (i, axis) in axes.iter_mut().enumerate() {
            *axis = i as u8;
        }
        Self {
            axes,
            len: n as u8,
        }
    }

    /// Build a permutation from an explicit list of source axes.
    ///
    /// Returns None unless `axes` holds each of `0..axes.len()` exactly once.
    pub fn from_axes(axes: &[usize]) -> Option<Self> {
        if axes.len() > MAX_DIMENSION {
            return None;
        }
        let mut seen = [false; MAX_DIMENSION];
        let mut permutation = Self::identity(axes.len());
        for (i, &axis) in axes.iter().enumerate() {
            if axis >= axes.len() || seen[axis] {
                return None;
            }
            seen[axis] = true;
            permutation.axes[i] = axis as u8;
        }
        Some(permutation)
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Source axis for output axis `i`.
    #[inline]
    pub fn get(&self, i: usize) -> usize {
        self.axes[i] as usize
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.axes[..self.len as usize]
    }

    /// Advance to the lexicographically next permutation.
    ///
    /// Returns false, and wraps around to the identity, after the last
    /// (descending) permutation. Starting from the identity, repeated calls
    /// visit all `n!` permutations before returning false.
    pub fn next(&mut self) -> bool {
        let a = &mut self.axes[..self.len as usize];
        if a.len() < 2 {
            return false;
        }
        // Longest non-increasing suffix starts at i.
        let mut i = a.len() - 1;
        while i > 0 && a[i - 1] >= a[i] {
            i -= 1;
        }
        if i == 0 {
            a.reverse();
            return false;
        }
        let mut j = a.len() - 1;
        while a[j] <= a[i - 1] {
            j -= 1;
        }
        a.swap(i - 1, j);
        a[i..].reverse();
        true
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, axis) in self.as_slice().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", axis)?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
