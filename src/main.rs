// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! udist: find counter placements with all pairwise distances distinct.
//!
//! Usage:
//!   udist [-p] [-v] [-t] [--time-limit SECS] [WIDTH [DIMENSION [COUNTERS]]]
//!
//! Examples:
//!   # The classic puzzle: 3 counters on a 3x3 grid
//!   udist
//!
//!   # Draw all 23 solutions for 4 counters on a 4x4 grid
//!   udist -p 4
//!
//!   # 3x3x3 cube, progress on stderr, give up after a minute
//!   udist -v --time-limit 60 3 3

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use unique_distance::geometry::GridConfig;
use unique_distance::progress::ProgressReporter;
use unique_distance::render::Picture;
use unique_distance::search::{CancellationToken, Search};

/// Search grids for counter placements with unique pairwise distances
#[derive(Parser, Debug)]
#[command(name = "udist", version)]
struct Args {
    /// Grid width
    #[arg(default_value_t = 3)]
    width: u32,

    /// Number of axes
    #[arg(default_value_t = 2)]
    dimension: usize,

    /// Counters to place [default: WIDTH]
    counters: Option<usize>,

    /// Draw every solution as it is found
    #[arg(short = 'p', long)]
    print_all: bool,

    /// Report progress on stderr; repeat for debug logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// List every arrangement with the index of its symmetry class
    #[arg(short = 't', long)]
    classify: bool,

    /// Stop the search after this many seconds
    #[arg(long, value_name = "SECS")]
    time_limit: Option<u64>,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = GridConfig::new(args.dimension, args.width);
    let counters = args.counters.unwrap_or(args.width as usize);
    let token = CancellationToken::new();

    let mut search = Search::new(config, counters)
        .with_context(|| format!("cannot search {} with {} counters", config, counters))?
        .cancellation(token.clone());

    if args.verbose > 0 || args.time_limit.is_some() {
        let mut reporter = if args.verbose > 0 {
            ProgressReporter::stderr()
        } else {
            ProgressReporter::quiet()
        };
        if let Some(secs) = args.time_limit {
            reporter = reporter.with_deadline(Duration::from_secs(secs), token.clone());
        }
        search = search.on_progress(move |progress| reporter.report(progress));
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.classify {
        let mut classification = search.classify();
        for classified in classification.by_ref() {
            writeln!(out, "{}", classified)?;
        }
        if classification.is_cancelled() {
            writeln!(out, "Cancelled.")?;
        }
        return Ok(());
    }

    let start = Instant::now();
    let mut solutions = search.solutions();
    for solution in solutions.by_ref() {
        if args.print_all {
            writeln!(out, "-----")?;
            write!(out, "{}", Picture::new(&config, &solution))?;
            out.flush()?;
        }
    }
    if args.verbose > 0 {
        // End the carriage-return progress line.
        eprintln!();
    }

    let seconds = start.elapsed().as_secs();
    let total = solutions.total();
    writeln!(
        out,
        "Found {} solutions in {} total arrangements, in {} seconds.",
        solutions.found().len(),
        total,
        seconds
    )?;
    if solutions.is_cancelled() {
        writeln!(
            out,
            "Search cancelled after trying {} of {} arrangements.",
            solutions.tried(),
            total
        )?;
    }
    if let Some(risk) = solutions.overflow_risk() {
        writeln!(out, "WARNING: {}", risk)?;
    }
    info!(statistics = %solutions.statistics(), "done");
    Ok(())
}
