//! Depth-first traversal: prints each graph's visit order on one line.
//!
//! Input: `T`, then per graph a line with `n` and `n` adjacency lines
//! `label neighbor neighbor ...`.

use algokit::batch::{DepthFirstSearch, run_main};
use std::process::ExitCode;

fn main() -> ExitCode {
    run_main::<DepthFirstSearch>()
}
