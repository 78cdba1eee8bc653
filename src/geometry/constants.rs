// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Capacity limits for grid geometry and derived constants.
//!
//! Points, arrangements and the distance set are sized from the actual
//! [`GridConfig`](super::GridConfig), but each size is checked against one of
//! these documented bounds before a search starts. A configuration that
//! exceeds any of them is rejected with
//! [`SearchError::ConfigurationLimitExceeded`](crate::error::SearchError).

/// Maximum number of spatial dimensions (axes) of a grid.
///
/// Points store their coordinates inline in a fixed array of this length,
/// so a point is `Copy` and costs no allocation.
pub const MAX_DIMENSION: usize = 8;

/// Maximum number of counters placed in one arrangement.
pub const MAX_COUNTERS: usize = 10;

/// Maximum capacity of the bounded distance set, in values.
///
/// The set needs `dimension * (width - 1)^2 + 1` slots, one per possible
/// squared distance on the grid.
pub const MAX_SET_CAPACITY: u64 = 1 << 22;

/// Compute factorial at compile time.
pub const fn factorial(n: usize) -> usize {
    match n {
        0 | 1 => 1,
        _ => n * factorial(n - 1),
    }
}

/// Binomial coefficient (n choose k), or None if it does not fit in a `u64`.
///
/// Computed as a running product-divided-by-increment over the smaller of
/// `k` and `n - k`, so every intermediate value is itself a binomial
/// coefficient times at most `n`. No factorial is ever formed.
pub fn checked_binomial(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut total: u128 = 1;
    let mut remaining = n as u128;
    for i in 0..k as u128 {
        total = total.checked_mul(remaining)? / (i + 1);
        remaining -= 1;
    }
    u64::try_from(total).ok()
}

/// Number of elements of the hypercube symmetry group in `dimension` axes:
/// every axis permutation combined with every set of axis reflections.
///
/// For a square grid this is 8 (the dihedral group of the square), for a
/// cube 48.
pub const fn symmetry_group_order(dimension: usize) -> usize {
    factorial(dimension) << dimension
}
