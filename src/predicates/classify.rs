// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ClassifyPredicate - Assigns every candidate to a symmetry class.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::symmetry::find_transform_of;

/// Sets `ctx.class` to the index of the first representative the candidate
/// is a transform of. A candidate matching none becomes a new
/// representative, and its class is the number of representatives before it.
///
/// Distances are not checked: every candidate is classified.
#[derive(Debug)]
pub struct ClassifyPredicate;

impl Predicate for ClassifyPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext) -> PredicateResult {
        let class = find_transform_of(&ctx.config, ctx.solutions.as_slice(), &ctx.candidate);
        if class == ctx.solutions.len() {
            ctx.solutions.push(ctx.candidate.clone());
        }
        ctx.class = class;
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Classify"
    }
}
