// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! BoundedSet type for recording small non-negative integers.
//!
//! A BoundedSet is a dense bitmap over `0..capacity`, where bit i is set once
//! value i has been added. It is sized once and then reused for every
//! candidate, so the inner loop of the search never allocates.
//!
//! Clearing only touches the words that were written since the last clear.
//! Each word is recorded the first time it becomes non-zero, and `clear`
//! zeroes exactly those words.
//!
//! # Examples
//!
//! ```
//! use unique_distance::distance::BoundedSet;
//!
//! let mut set = BoundedSet::new(100);
//! assert!(set.add(25));
//! assert!(!set.add(25));
//! set.clear();
//! assert!(set.add(25));
//! ```

/// Fixed-capacity set of integers in `0..capacity` with add-if-absent semantics.
#[derive(Debug, Clone)]
pub struct BoundedSet {
    words: Vec<u64>,
    capacity: u64,
    /// Indices of words that are non-zero.
    touched: Vec<usize>,
}

impl BoundedSet {
    const WORD_BITS: u64 = u64::BITS as u64;

    /// Create an empty set able to hold values `0..capacity`.
    pub fn new(capacity: u64) -> Self {
        let nwords = capacity.div_ceil(Self::WORD_BITS) as usize;
        Self {
            words: vec![0; nwords],
            capacity,
            touched: Vec::new(),
        }
    }

    /// Number of distinct values the set can hold.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Add a value, returning true the first time it is presented and false
    /// on every later presentation.
    ///
    /// # Panics
    ///
    /// Panics if `value >= capacity`. The capacity is derived from the grid
    /// before the search starts, so an out-of-range value is a bug.
    #[inline]
    pub fn add(&mut self, value: u64) -> bool {
        assert!(
            value < self.capacity,
            "BoundedSet value out of range: {} (capacity {})",
            value,
            self.capacity
        );
        let index = (value / Self::WORD_BITS) as usize;
        let bit = 1u64 << (value % Self::WORD_BITS);
        let word = &mut self.words[index];
        if *word & bit != 0 {
            return false;
        }
        if *word == 0 {
            self.touched.push(index);
        }
        *word |= bit;
        true
    }

    /// Check if the set contains a value. Out-of-range values are never present.
    pub fn contains(&self, value: u64) -> bool {
        if value >= self.capacity {
            return false;
        }
        let index = (value / Self::WORD_BITS) as usize;
        (self.words[index] >> (value % Self::WORD_BITS)) & 1 != 0
    }

    /// Get the number of values in the set (population count).
    pub fn len(&self) -> usize {
        self.touched
            .iter()
            .map(|&i| self.words[i].count_ones() as usize)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.touched.is_empty()
    }

    /// Remove every value.
    pub fn clear(&mut self) {
        for index in self.touched.drain(..) {
            self.words[index] = 0;
        }
    }
}
