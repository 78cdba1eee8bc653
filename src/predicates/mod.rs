// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates run by the engine on each candidate.
//!
//! # Organization
//!
//! - `unique`: UniqueDistancePredicate, the pairwise-distance filter
//! - `dedup`: NewUnderSymmetryPredicate and RecordSolutionPredicate
//! - `classify`: ClassifyPredicate, for listing the symmetry class of every candidate
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod classify;
pub mod dedup;
pub mod unique;

// Re-export main predicates for convenience
pub use classify::ClassifyPredicate;
pub use dedup::{NewUnderSymmetryPredicate, RecordSolutionPredicate};
pub use unique::UniqueDistancePredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, so the engine moves straight on to the next
/// candidate. Ending a pipeline with it runs the search to exhaustion in a
/// single call.
///
/// # Example
///
/// ```
/// use unique_distance::context::SearchContext;
/// use unique_distance::engine::EngineBuilder;
/// use unique_distance::geometry::GridConfig;
/// use unique_distance::predicates::FailPredicate;
///
/// let mut ctx = SearchContext::new(GridConfig::new(2, 3), 3);
/// let engine = EngineBuilder::new()
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Engine will try every candidate then fail
/// let result = engine.search(&mut ctx);
/// assert!(result.is_none()); // Failed - engine consumed
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}

/// Built-in suspend predicate.
///
/// Returns control to the caller with the candidate that reached it still
/// in the context. Calling `search` again resumes with the next candidate.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
