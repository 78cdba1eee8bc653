// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Wall-clock progress reporting and time limits.
//!
//! A [`ProgressReporter`] is driven from a search's progress callback. It
//! waits until more than five seconds have passed, measures how many
//! candidates are tried per second, and from then on prints a status line
//! every that-many candidates:
//!
//! ```text
//! Tried 1200000 arrangements, 200000 per second, found 35 solutions, 42 seconds to go.
//! ```
//!
//! Each line ends in a carriage return so the next one overwrites it. With
//! a deadline, the reporter also cancels the search once the time is up.

use crate::search::{CancellationToken, Progress};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::info;

/// Seconds to wait before estimating the rate.
const CALIBRATION_SECS: u64 = 5;

/// Rates below this report on every candidate.
const MIN_RATE: u64 = 10;

#[derive(Debug, Clone)]
struct Deadline {
    limit: Duration,
    token: CancellationToken,
}

/// Progress callback state: start time, measured rate, output and deadline.
#[derive(Debug)]
pub struct ProgressReporter<W = io::Stderr> {
    start: Instant,
    /// Candidates between status lines; 0 until calibrated.
    rate: u64,
    out: Option<W>,
    deadline: Option<Deadline>,
}

impl ProgressReporter<io::Stderr> {
    /// Report on stderr.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Print nothing; useful with [`ProgressReporter::with_deadline`] alone.
    pub fn quiet() -> Self {
        Self {
            start: Instant::now(),
            rate: 0,
            out: None,
            deadline: None,
        }
    }
}

impl<W: Write> ProgressReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            start: Instant::now(),
            rate: 0,
            out: Some(out),
            deadline: None,
        }
    }

    /// Cancel `token` once `limit` has passed since the reporter was created.
    pub fn with_deadline(mut self, limit: Duration, token: CancellationToken) -> Self {
        self.deadline = Some(Deadline { limit, token });
        self
    }

    /// Record one candidate.
    pub fn report(&mut self, progress: &Progress) {
        let elapsed = self.start.elapsed();
        self.report_at(progress, elapsed);
    }

    fn report_at(&mut self, progress: &Progress, elapsed: Duration) {
        if let Some(deadline) = &self.deadline {
            if elapsed >= deadline.limit && !deadline.token.is_cancelled() {
                info!(?elapsed, tried = progress.tried, "time limit reached");
                deadline.token.cancel();
            }
        }

        if self.out.is_none() {
            return;
        }
        let secs = elapsed.as_secs();
        if self.rate == 0 {
            if secs <= CALIBRATION_SECS {
                return;
            }
            self.rate = progress.tried / secs;
            if self.rate < MIN_RATE {
                self.rate = 1;
            }
        }
        if progress.tried % self.rate != 0 {
            return;
        }

        let per_second = progress.tried.checked_div(secs).unwrap_or(0);
        let estimate = progress
            .total
            .saturating_sub(progress.tried)
            .checked_div(per_second)
            .unwrap_or(0);
        if let Some(out) = self.out.as_mut() {
            // Progress output is best effort.
            let _ = write!(
                out,
                "Tried {} arrangements, {} per second, found {} solutions, {} seconds to go.\r",
                progress.tried, per_second, progress.found, estimate
            );
            let _ = out.flush();
        }
    }

    /// Time since the reporter was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn into_inner(self) -> Option<W> {
        self.out
    }
}
