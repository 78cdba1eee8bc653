// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicate trait for the candidate pipeline.
//!
//! The engine pulls one candidate at a time into the [`SearchContext`] and
//! runs its predicates over it in order. A predicate accepts the candidate
//! (the next predicate runs), rejects it (the engine moves on to the next
//! candidate), or suspends the search.
//!
//! # Example
//!
//! ```
//! use unique_distance::engine::{Predicate, PredicateResult};
//! use unique_distance::context::SearchContext;
//!
//! #[derive(Debug)]
//! struct Triples;
//!
//! impl Predicate for Triples {
//!     fn try_pred(&mut self, ctx: &mut SearchContext) -> PredicateResult {
//!         if ctx.candidate.len() == 3 {
//!             PredicateResult::Success
//!         } else {
//!             PredicateResult::Failure
//!         }
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Triples"
//!     }
//! }
//! ```

use crate::context::SearchContext;
use std::fmt::Debug;

/// Result of running a predicate against the current candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Candidate accepted. Move to the next predicate in the pipeline.
    Success,

    /// Candidate rejected. The engine pulls the next candidate.
    Failure,

    /// Suspend execution. The engine returns control with state preserved;
    /// resuming continues with the next candidate.
    Suspend,
}

/// A predicate that ends a pipeline.
///
/// Terminal predicates are Fail or Suspend: they never return Success.
/// [`EngineBuilder::terminal`](super::EngineBuilder::terminal) only accepts
/// these, so every pipeline built through the builder ends properly.
pub trait TerminalPredicate: Predicate {}

/// One stage of the candidate pipeline.
///
/// Predicates may read and modify the [`SearchContext`]: the current
/// candidate, the solutions found so far and the statistics.
pub trait Predicate: Debug {
    /// Test the current candidate (`ctx.candidate`).
    fn try_pred(&mut self, ctx: &mut SearchContext) -> PredicateResult;

    /// Name for logging.
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
