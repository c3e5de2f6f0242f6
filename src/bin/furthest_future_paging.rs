//! Optimal offline paging: prints the page-fault count of each instance.
//!
//! Input: `T`, then per instance `C N` followed by `N` page ids.
//! Run with: `cargo run --bin furthest_future_paging < requests.txt`

use algokit::batch::{FurthestFuturePaging, run_main};
use std::process::ExitCode;

fn main() -> ExitCode {
    run_main::<FurthestFuturePaging>()
}
