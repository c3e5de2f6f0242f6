//! Inversion counting: prints the number of inverted pairs of each array.
//!
//! Input: `T`, then per instance `n` followed by `n` integers.

use algokit::batch::{InversionCount, run_main};
use std::process::ExitCode;

fn main() -> ExitCode {
    run_main::<InversionCount>()
}
