//! Greedy interval scheduling: prints the maximum number of compatible jobs.
//!
//! Input: `T`, then per instance `n` followed by `n` pairs `start end`.

use algokit::batch::{IntervalScheduling, run_main};
use std::process::ExitCode;

fn main() -> ExitCode {
    run_main::<IntervalScheduling>()
}
