// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive search for unique-distance counter placements.
//!
//! Place `k` counters on the cells of an n-dimensional grid so that all
//! `k(k-1)/2` distances between them are different. This crate finds every
//! such placement, keeping one representative per class of placements related
//! by a rotation or reflection of the grid.
//!
//! On the classic 3x3 grid with 3 counters there are 5 solutions:
//!
//! ```
//! use unique_distance::{search, CancellationToken, GridConfig};
//!
//! let solutions = search(GridConfig::new(2, 3), 3, CancellationToken::new()).unwrap();
//! assert_eq!(solutions.count(), 5);
//! ```
//!
//! # Architecture
//!
//! ## Core
//!
//! - [`geometry`]: grid configuration, points, arrangements and capacity limits
//! - [`distance`]: the unique-distance check over a reusable bounded set
//! - [`enumeration`]: every k-subset of cells, in rank order, never materialized
//! - [`symmetry`]: the `d! * 2^d` grid symmetries and equivalence tests
//!
//! ## Search
//!
//! The search is a pipeline of predicates run by the [`engine`] on each
//! candidate pulled from the enumerator:
//!
//! 1. **UniqueDistancePredicate**: reject candidates with a repeated distance
//! 2. **NewUnderSymmetryPredicate**: reject transforms of earlier solutions
//! 3. **RecordSolutionPredicate**: append to the solution set
//! 4. **SuspendPredicate** (streaming) or **FailPredicate** (run to completion)
//!
//! Candidates arrive in rank order and each is fully processed before the
//! next, so the output is deterministic. A [`CancellationToken`] is checked
//! once per candidate; the solutions found before cancellation are a valid
//! partial result.
//!
//! ## Around the core
//!
//! - [`search`](mod@search): validated entry points and streaming iterators
//! - [`render`]: ASCII pictures of 2-D and 3-D arrangements
//! - [`progress`]: wall-clock rate and ETA reporting, time limits

pub mod context;
pub mod distance;
pub mod engine;
pub mod enumeration;
pub mod error;
pub mod geometry;
pub mod predicates;
pub mod progress;
pub mod render;
pub mod search;
pub mod state;
pub mod symmetry;

// Re-export commonly used types
pub use context::SearchContext;
pub use distance::{has_unique_distances, UniquenessChecker};
pub use engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
pub use enumeration::{total_arrangements, Arrangements};
pub use error::{Limit, OverflowRisk, SearchError};
pub use geometry::{Arrangement, GridConfig, Point};
pub use search::{search, CancellationToken, Progress, Search, Solutions};
pub use state::SolutionSet;
pub use symmetry::{contains_transform_of, find_transform_of, is_transform_of};
