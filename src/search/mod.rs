// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Entry points for running a search.
//!
//! A [`Search`] validates its configuration up front, then runs one of three
//! pipelines over the candidates:
//!
//! - [`Search::solutions`]: a lazy iterator yielding each new solution as it
//!   is found (`UniqueDistance → NewUnderSymmetry → RecordSolution → Suspend`)
//! - [`Search::solve`]: the same search run to completion in one call
//!   (`... → RecordSolution → Fail`)
//! - [`Search::classify`]: every candidate with the index of its symmetry
//!   class (`Classify → Suspend`)
//!
//! # Examples
//!
//! ```
//! use unique_distance::geometry::GridConfig;
//! use unique_distance::search::{search, CancellationToken};
//!
//! let solutions: Vec<_> = search(GridConfig::new(2, 3), 3, CancellationToken::new())
//!     .unwrap()
//!     .collect();
//! assert_eq!(solutions.len(), 5);
//! assert_eq!(format!("{}", solutions[0]), "{(0,0), (0,1), (1,2)}");
//! ```

pub mod cancel;

pub use cancel::CancellationToken;

use crate::context::SearchContext;
use crate::engine::{EngineBuilder, ProgressCallback, SearchEngine};
use crate::error::{OverflowRisk, SearchError};
use crate::geometry::{Arrangement, GridConfig};
use crate::predicates::{
    ClassifyPredicate, FailPredicate, NewUnderSymmetryPredicate, RecordSolutionPredicate,
    SuspendPredicate, UniqueDistancePredicate,
};
use crate::state::{Counters, SolutionSet, Statistics};
use std::fmt;
use tracing::{info, warn};

/// Counts passed to progress callbacks, once per candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Candidates tried so far, including the current one.
    pub tried: u64,
    /// Solutions found so far.
    pub found: u64,
    /// Total number of candidates (saturated at `u64::MAX`).
    pub total: u64,
}

/// Search for every arrangement of `counters` counters on the grid with
/// unique distances, one per symmetry class, in discovery order.
///
/// Returns an error if the configuration exceeds a supported capacity.
pub fn search(
    config: GridConfig,
    counters: usize,
    token: CancellationToken,
) -> Result<Solutions, SearchError> {
    Ok(Search::new(config, counters)?.cancellation(token).solutions())
}

/// A validated search, ready to run.
pub struct Search {
    config: GridConfig,
    counters: usize,
    start: u64,
    cancellation: Option<CancellationToken>,
    progress: Option<ProgressCallback>,
    overflow_risk: Option<OverflowRisk>,
}

impl Search {
    /// Validate the configuration and prepare a search.
    pub fn new(config: GridConfig, counters: usize) -> Result<Self, SearchError> {
        config.validate(counters)?;
        let overflow_risk = config.overflow_risk(counters);
        if let Some(risk) = &overflow_risk {
            warn!(%config, counters, "{}", risk);
        }
        Ok(Self {
            config,
            counters,
            start: 0,
            cancellation: None,
            progress: None,
            overflow_risk,
        })
    }

    /// Stop cooperatively once `token` is cancelled.
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Call `callback` once per candidate.
    pub fn on_progress(mut self, callback: impl FnMut(&Progress) + 'static) -> Self {
        self.progress = Some(Box::new(callback));
        self
    }

    /// Begin with the candidate at `rank` instead of the first one.
    ///
    /// Solutions that would have been found before `rank` are not known to
    /// the search, so later members of their symmetry classes may be
    /// reported.
    pub fn starting_at(mut self, rank: u64) -> Self {
        self.start = rank;
        self
    }

    /// Warnings raised while validating the configuration.
    pub fn warnings(&self) -> Option<&OverflowRisk> {
        self.overflow_risk.as_ref()
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Stream solutions as they are found.
    pub fn solutions(self) -> Solutions {
        let (engine, run) = self.prepare(|builder| {
            dedup_pipeline(builder)
                .terminal(Box::new(SuspendPredicate))
                .build()
        });
        Solutions {
            engine: Some(engine),
            run,
        }
    }

    /// Run the whole search and return the solution set.
    ///
    /// If the search is cancelled, the solutions found so far are returned.
    pub fn solve(self) -> SolutionSet {
        self.solve_with_statistics().0
    }

    /// As [`Search::solve`], also returning the final statistics.
    pub fn solve_with_statistics(self) -> (SolutionSet, Statistics) {
        let (engine, mut run) = self.prepare(|builder| {
            dedup_pipeline(builder)
                .terminal(Box::new(FailPredicate))
                .build()
        });
        let suspended = engine.search(&mut run.ctx);
        debug_assert!(suspended.is_none());
        run.finish();
        (run.ctx.solutions, run.ctx.statistics)
    }

    /// Classify every candidate, in rank order, by symmetry class.
    pub fn classify(self) -> Classification {
        let (engine, run) = self.prepare(|builder| {
            builder
                .add(Box::new(ClassifyPredicate))
                .terminal(Box::new(SuspendPredicate))
                .build()
        });
        Classification {
            engine: Some(engine),
            run,
        }
    }

    fn prepare(self, pipeline: impl FnOnce(EngineBuilder) -> SearchEngine) -> (SearchEngine, Run) {
        let mut builder = EngineBuilder::new();
        if let Some(token) = self.cancellation {
            builder = builder.cancellation(token);
        }
        if let Some(progress) = self.progress {
            builder = builder.on_progress(progress);
        }
        let ctx = SearchContext::starting_at(self.config, self.counters, self.start);
        info!(
            config = %self.config,
            counters = self.counters,
            total = ctx.total(),
            overflow = self.overflow_risk.is_some(),
            "starting search"
        );
        let run = Run {
            ctx,
            overflow_risk: self.overflow_risk,
            finished: false,
        };
        (pipeline(builder), run)
    }
}

/// Unique distances, then new under symmetry, then record.
fn dedup_pipeline(builder: EngineBuilder) -> EngineBuilder {
    builder
        .add(Box::new(UniqueDistancePredicate))
        .add(Statistics::counting_predicate(Counters::UniqueDistances, None))
        .add(Box::new(NewUnderSymmetryPredicate))
        .add(Box::new(RecordSolutionPredicate))
}

impl fmt::Debug for Search {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Search")
            .field("config", &self.config)
            .field("counters", &self.counters)
            .field("start", &self.start)
            .field("cancellation", &self.cancellation)
            .field("overflow_risk", &self.overflow_risk)
            .finish_non_exhaustive()
    }
}

/// State shared by the streaming iterators.
struct Run {
    ctx: SearchContext,
    overflow_risk: Option<OverflowRisk>,
    finished: bool,
}

impl Run {
    /// Resume the engine; returns false when the search has ended.
    fn step(&mut self, engine: &mut Option<SearchEngine>) -> bool {
        let Some(current) = engine.take() else {
            return false;
        };
        *engine = current.search(&mut self.ctx);
        if engine.is_none() {
            self.finish();
            return false;
        }
        true
    }

    fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        info!(
            solutions = self.ctx.solutions.len(),
            tried = self.ctx.statistics.get(Counters::Candidates),
            total = self.ctx.total(),
            cancelled = self.ctx.cancelled,
            "search finished"
        );
    }
}

/// Lazy sequence of solutions in discovery order.
///
/// Ends when the candidates are exhausted or the search is cancelled. The
/// accessors report on the run so far, and after the end on the whole run.
pub struct Solutions {
    engine: Option<SearchEngine>,
    run: Run,
}

impl Solutions {
    /// Solutions yielded so far.
    pub fn found(&self) -> &SolutionSet {
        &self.run.ctx.solutions
    }

    pub fn statistics(&self) -> &Statistics {
        &self.run.ctx.statistics
    }

    /// Candidates tried so far.
    pub fn tried(&self) -> u64 {
        self.run.ctx.statistics.get(Counters::Candidates)
    }

    /// Total number of candidates, saturated at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.run.ctx.total()
    }

    /// True if the search stopped because it was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.run.ctx.cancelled
    }

    /// Set when `total` is saturated.
    pub fn overflow_risk(&self) -> Option<&OverflowRisk> {
        self.run.overflow_risk.as_ref()
    }

    pub fn config(&self) -> &GridConfig {
        &self.run.ctx.config
    }

    /// Consume the iterator, returning what has been found so far.
    pub fn into_solution_set(self) -> SolutionSet {
        self.run.ctx.solutions
    }
}

impl Iterator for Solutions {
    type Item = Arrangement;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.run.step(&mut self.engine) {
            return None;
        }
        self.run.ctx.solutions.last().cloned()
    }
}

/// One classified candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    /// Rank of the candidate.
    pub rank: u64,
    /// Index of the representative of its symmetry class.
    pub class: usize,
    pub arrangement: Arrangement,
}

impl fmt::Display for Classified {
    /// Format as "rank: class arrangement".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.rank, self.class, self.arrangement)
    }
}

/// Lazy sequence of every candidate with its symmetry class.
pub struct Classification {
    engine: Option<SearchEngine>,
    run: Run,
}

impl Classification {
    /// Representatives found so far, indexed by class.
    pub fn representatives(&self) -> &SolutionSet {
        &self.run.ctx.solutions
    }

    pub fn is_cancelled(&self) -> bool {
        self.run.ctx.cancelled
    }
}

impl Iterator for Classification {
    type Item = Classified;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.run.step(&mut self.engine) {
            return None;
        }
        let ctx = &self.run.ctx;
        Some(Classified {
            rank: ctx.rank,
            class: ctx.class,
            arrangement: ctx.candidate.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Limit;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_search_3x3() {
        let solutions: Vec<_> = search(GridConfig::new(2, 3), 3, CancellationToken::new())
            .unwrap()
            .collect();
        let expected = vec![
            Arrangement::from_coords(&[&[0, 0], &[0, 1], &[1, 2]]),
            Arrangement::from_coords(&[&[0, 0], &[0, 1], &[2, 0]]),
            Arrangement::from_coords(&[&[0, 0], &[0, 1], &[2, 1]]),
            Arrangement::from_coords(&[&[0, 0], &[0, 1], &[2, 2]]),
            Arrangement::from_coords(&[&[0, 0], &[1, 1], &[1, 2]]),
        ];
        assert_eq!(solutions, expected);
    }

    #[test]
    fn test_invalid_configuration() {
        let err = Search::new(GridConfig::new(2, 3), 11).unwrap_err();
        assert!(matches!(
            err,
            SearchError::ConfigurationLimitExceeded {
                limit: Limit::Counters,
                ..
            }
        ));
    }

    #[test]
    fn test_streaming_matches_solve() {
        let grid = GridConfig::new(2, 4);
        let streamed: Vec<_> = Search::new(grid, 3).unwrap().solutions().collect();
        let solved = Search::new(grid, 3).unwrap().solve();
        assert_eq!(streamed, solved.into_vec());
        assert_eq!(streamed.len(), 49);
    }

    #[test]
    fn test_statistics() {
        let (solutions, stats) = Search::new(GridConfig::new(2, 3), 3)
            .unwrap()
            .solve_with_statistics();
        assert_eq!(stats.get(Counters::Candidates), 84);
        assert_eq!(stats.get(Counters::Solutions), 5);
        assert_eq!(solutions.len(), 5);
        assert_eq!(
            stats.get(Counters::UniqueDistances),
            stats.get(Counters::Solutions) + stats.get(Counters::SymmetricDuplicates)
        );
    }

    #[test]
    fn test_accessors_after_exhaustion() {
        let mut solutions = Search::new(GridConfig::new(2, 3), 3).unwrap().solutions();
        assert_eq!(solutions.by_ref().count(), 5);
        assert_eq!(solutions.tried(), 84);
        assert_eq!(solutions.total(), 84);
        assert!(!solutions.is_cancelled());
        assert!(solutions.next().is_none());
        assert_eq!(solutions.found().len(), 5);
    }

    #[test]
    fn test_cancel_after_first_solution() {
        let token = CancellationToken::new();
        let mut solutions = search(GridConfig::new(2, 3), 3, token.clone()).unwrap();
        let first = solutions.next().unwrap();
        token.cancel();
        assert!(solutions.next().is_none());
        assert!(solutions.is_cancelled());
        assert_eq!(solutions.into_solution_set().into_vec(), vec![first]);
    }

    #[test]
    fn test_cancel_from_progress() {
        let token = CancellationToken::new();
        let handle = token.clone();
        let solutions = Search::new(GridConfig::new(2, 3), 3)
            .unwrap()
            .cancellation(token)
            .on_progress(move |progress| {
                if progress.tried == 4 {
                    handle.cancel();
                }
            })
            .solve();
        // The first solution is the candidate at rank 3, the second at rank 4.
        assert_eq!(solutions.len(), 1);
    }

    #[test]
    fn test_progress_reports() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let _ = Search::new(GridConfig::new(2, 3), 2)
            .unwrap()
            .on_progress(move |progress| log.borrow_mut().push(*progress))
            .solve();
        let seen = seen.borrow();
        assert_eq!(seen.len(), 36);
        assert_eq!(
            seen.last(),
            Some(&Progress {
                tried: 36,
                found: 8,
                total: 36
            })
        );
    }

    #[test]
    fn test_classify() {
        let classes: Vec<_> = Search::new(GridConfig::new(2, 3), 1)
            .unwrap()
            .classify()
            .map(|c| c.class)
            .collect();
        // Corners are class 0, edge midpoints class 1, the centre class 2.
        assert_eq!(classes, vec![0, 1, 0, 1, 2, 1, 0, 1, 0]);
    }

    #[test]
    fn test_classified_display() {
        let first = Search::new(GridConfig::new(2, 3), 2)
            .unwrap()
            .classify()
            .next()
            .unwrap();
        assert_eq!(format!("{}", first), "0: 0 {(0,0), (0,1)}");
    }

    #[test]
    fn test_overflow_warning() {
        let search = Search::new(GridConfig::new(8, 100), 10).unwrap();
        assert!(search.warnings().is_some());
        assert!(Search::new(GridConfig::new(2, 3), 3)
            .unwrap()
            .warnings()
            .is_none());
    }
}
