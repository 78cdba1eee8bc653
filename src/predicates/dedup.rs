// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetry deduplication and solution recording.
//!
//! Candidates arrive in rank order, so the first member of each symmetry
//! class to pass the distance check becomes its representative. Later
//! members are rejected by comparison with the solutions recorded so far.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::Counters;
use crate::symmetry::contains_transform_of;
use tracing::debug;

/// Fails when the candidate is a transform of an existing solution.
#[derive(Debug)]
pub struct NewUnderSymmetryPredicate;

impl Predicate for NewUnderSymmetryPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext) -> PredicateResult {
        if contains_transform_of(&ctx.config, ctx.solutions.as_slice(), &ctx.candidate) {
            ctx.statistics.increment_counter(Counters::SymmetricDuplicates);
            PredicateResult::Failure
        } else {
            PredicateResult::Success
        }
    }

    fn name(&self) -> &str {
        "NewUnderSymmetry"
    }
}

/// Appends the candidate to the solution set.
#[derive(Debug)]
pub struct RecordSolutionPredicate;

impl Predicate for RecordSolutionPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext) -> PredicateResult {
        let index = ctx.solutions.push(ctx.candidate.clone());
        ctx.statistics.increment_counter(Counters::Solutions);
        debug!(index, rank = ctx.rank, solution = %ctx.candidate, "new solution");
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "RecordSolution"
    }
}
