// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! UniqueDistancePredicate - Rejects candidates with a repeated pairwise distance.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};

/// Succeeds when all pairwise squared distances of the candidate differ.
///
/// Uses the context's [`UniquenessChecker`](crate::distance::UniquenessChecker),
/// so no allocation happens per candidate.
#[derive(Debug)]
pub struct UniqueDistancePredicate;

impl Predicate for UniqueDistancePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext) -> PredicateResult {
        if ctx.checker.check(&ctx.candidate) {
            PredicateResult::Success
        } else {
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "UniqueDistance"
    }
}
