// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Candidate-driven search engine.
//!
//! The engine drives the Subset Enumerator held in the [`SearchContext`]:
//! it pulls one candidate at a time and runs a fixed pipeline of predicates
//! over it.
//!
//! # Execution Model
//!
//! For each candidate, in rank order:
//! 1. Check the cancellation token. If cancelled, stop.
//! 2. Pull the next candidate into `ctx.candidate`. If none is left, stop.
//! 3. Call `try_pred` on each predicate in turn:
//!    - `Success`: go on to the next predicate
//!    - `Failure`: abandon this candidate
//!    - `Suspend`: return control to the caller
//! 4. Report progress.
//!
//! Every pipeline must end in a terminal predicate ([`FailPredicate`] or
//! [`SuspendPredicate`]). Running off the end of the pipeline is a bug and
//! panics.
//!
//! [`FailPredicate`]: crate::predicates::FailPredicate
//! [`SuspendPredicate`]: crate::predicates::SuspendPredicate
//!
//! # Example
//!
//! ```
//! use unique_distance::context::SearchContext;
//! use unique_distance::engine::EngineBuilder;
//! use unique_distance::geometry::GridConfig;
//! use unique_distance::predicates::{SuspendPredicate, UniqueDistancePredicate};
//!
//! let mut ctx = SearchContext::new(GridConfig::new(2, 3), 3);
//! let engine = EngineBuilder::new()
//!     .add(Box::new(UniqueDistancePredicate))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! // Engine is consumed, returns Some(engine) if suspended
//! let engine = engine.search(&mut ctx).unwrap();
//! assert_eq!(format!("{}", ctx.candidate), "{(0,0), (0,1), (1,2)}");
//!
//! // Resume with the next candidate
//! engine.search(&mut ctx).unwrap();
//! assert_eq!(format!("{}", ctx.candidate), "{(0,0), (0,1), (2,0)}");
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;
use crate::search::{CancellationToken, Progress};
use crate::state::statistics::Counters;
use tracing::debug;

/// Callback invoked once per candidate.
pub type ProgressCallback = Box<dyn FnMut(&Progress)>;

/// Search engine that feeds candidates through a predicate pipeline.
pub struct SearchEngine {
    /// Predicates to run, in order, on each candidate.
    predicates: Vec<Box<dyn Predicate>>,

    cancellation: Option<CancellationToken>,

    progress: Option<ProgressCallback>,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Prefer [`EngineBuilder`], which ensures the pipeline ends in a
    /// terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            cancellation: None,
            progress: None,
        }
    }

    /// Run the search until it suspends or finishes.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended; call `search` again to resume with the
    ///   next candidate
    /// - `None` if the candidates are exhausted or the search was cancelled
    ///   (`ctx.cancelled` tells which)
    ///
    /// Results are returned through `ctx`, not through the return value.
    ///
    /// # Panics
    ///
    /// Panics if a candidate passes every predicate, which means the
    /// pipeline does not end with Fail or Suspend.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        if self.predicates.is_empty() {
            return None; // Empty is exhausted
        }

        loop {
            if self.is_cancelled() {
                debug!(rank = ctx.arrangements.rank(), "search cancelled");
                ctx.cancelled = true;
                return None;
            }

            ctx.rank = ctx.arrangements.rank();
            match ctx.arrangements.next() {
                Some(candidate) => ctx.candidate = candidate,
                None => return None,
            }
            ctx.statistics.increment_counter(Counters::Candidates);

            let suspended = self.run_pipeline(ctx);
            if let Some(progress) = self.progress.as_mut() {
                progress(&ctx.progress());
            }
            if suspended {
                return Some(self);
            }
        }
    }

    /// Run every predicate on the current candidate. Returns true on Suspend.
    fn run_pipeline(&mut self, ctx: &mut SearchContext) -> bool {
        for predicate in self.predicates.iter_mut() {
            match predicate.try_pred(ctx) {
                PredicateResult::Success => {}
                PredicateResult::Failure => return false,
                PredicateResult::Suspend => return true,
            }
        }
        panic!(
            "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
             Every pipeline must terminate with a FAIL or SUSPEND predicate."
        );
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    /// Names of the predicates in the pipeline, in order.
    pub fn predicate_names(&self) -> Vec<&str> {
        self.predicates.iter().map(|p| p.name()).collect()
    }
}

/// Builder for a [`SearchEngine`] whose pipeline ends in a terminal predicate.
///
/// ```
/// use unique_distance::engine::EngineBuilder;
/// use unique_distance::predicates::{FailPredicate, UniqueDistancePredicate};
///
/// let engine = EngineBuilder::new()
///     .add(Box::new(UniqueDistancePredicate))
///     .terminal(Box::new(FailPredicate))
///     .build();
/// assert_eq!(engine.predicate_names(), vec!["UniqueDistance", "Fail"]);
/// ```
#[derive(Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
    cancellation: Option<CancellationToken>,
    progress: Option<ProgressCallback>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the pipeline.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Check this token once per candidate, before pulling it.
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Call `callback` once per candidate, after the pipeline has run.
    pub fn on_progress(mut self, callback: ProgressCallback) -> Self {
        self.progress = Some(callback);
        self
    }

    /// Close the pipeline with a Fail or Suspend predicate.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> TerminatedBuilder {
        self.predicates.push(predicate);
        TerminatedBuilder { builder: self }
    }
}

/// An [`EngineBuilder`] whose pipeline is complete.
pub struct TerminatedBuilder {
    builder: EngineBuilder,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        let EngineBuilder {
            predicates,
            cancellation,
            progress,
        } = self.builder;
        let engine = SearchEngine {
            predicates,
            cancellation,
            progress,
        };
        debug!(predicates = ?engine.predicate_names(), "built search engine");
        engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GridConfig;
    use crate::predicates::{FailPredicate, SuspendPredicate};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Test predicate that always succeeds.
    #[derive(Debug)]
    struct AlwaysSucceed;

    impl Predicate for AlwaysSucceed {
        fn try_pred(&mut self, _ctx: &mut SearchContext) -> PredicateResult {
            PredicateResult::Success
        }
    }

    fn context() -> SearchContext {
        SearchContext::new(GridConfig::new(2, 3), 2)
    }

    #[test]
    fn test_suspend_and_resume() {
        let mut ctx = context();
        let engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let engine = engine.search(&mut ctx).unwrap();
        assert_eq!(ctx.rank, 0);
        let _engine = engine.search(&mut ctx).unwrap();
        assert_eq!(ctx.rank, 1);
        assert_eq!(ctx.statistics.get(Counters::Candidates), 2);
    }

    #[test]
    fn test_fail_exhausts() {
        let mut ctx = context();
        let engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(FailPredicate))
            .build();

        assert!(engine.search(&mut ctx).is_none());
        assert!(!ctx.cancelled);
        assert_eq!(ctx.statistics.get(Counters::Candidates), 36);
    }

    #[test]
    fn test_empty_predicates() {
        let mut ctx = context();
        let engine = SearchEngine::new(vec![]);
        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    #[should_panic(expected = "Invalid predicate sequence")]
    fn test_invalid_program_without_terminal() {
        let mut ctx = context();
        let engine = SearchEngine::new(vec![Box::new(AlwaysSucceed)]);
        let _ = engine.search(&mut ctx);
    }

    #[test]
    fn test_cancellation_checked_before_each_candidate() {
        let mut ctx = context();
        let token = CancellationToken::new();
        token.cancel();
        let engine = EngineBuilder::new()
            .cancellation(token)
            .terminal(Box::new(FailPredicate))
            .build();

        assert!(engine.search(&mut ctx).is_none());
        assert!(ctx.cancelled);
        assert_eq!(ctx.statistics.get(Counters::Candidates), 0);
    }

    #[test]
    fn test_progress_once_per_candidate() {
        let mut ctx = context();
        let calls = Rc::new(Cell::new(0u64));
        let seen = calls.clone();
        let engine = EngineBuilder::new()
            .on_progress(Box::new(move |progress: &Progress| {
                seen.set(seen.get() + 1);
                assert_eq!(progress.tried, seen.get());
                assert_eq!(progress.total, 36);
            }))
            .terminal(Box::new(FailPredicate))
            .build();

        assert!(engine.search(&mut ctx).is_none());
        assert_eq!(calls.get(), 36);
    }
}
