//! # Batch Problem Trait
//!
//! Every program in this crate shares one input convention: a batch count
//! `T`, followed by `T` self-delimiting instances, answered with one output
//! line per instance in input order. [`BatchProblem`] captures the two
//! per-program pieces (how to read one instance and how to solve it) so the
//! batch loop, error reporting and output formatting live in one place,
//! [`run_batch`](crate::batch::run_batch).
//!
//! ## Architecture
//!
//! ```text
//!   input text ──► Scanner ──► read T
//!                                │
//!                  ┌─────────────┴──────────────┐
//!                  │  for instance in 1..=T     │
//!                  │                            │
//!                  │   P::parse_instance  ──► InputError  (MalformedInput)
//!                  │          │                 │
//!                  │   P::solve           ──► ConfigError (InvalidParameter)
//!                  │          │                 │
//!                  │   writeln!(out, "{}")      │
//!                  └─────────────┬──────────────┘
//!                                │
//!                         expect_end() ──► InputError (trailing input)
//! ```
//!
//! ## Implementations
//!
//! | Type                   | Instance                  | Output            |
//! |------------------------|---------------------------|-------------------|
//! | `FurthestFuturePaging` | capacity + request list   | fault count       |
//! | `DepthFirstSearch`     | adjacency lines           | visit order       |
//! | `IntervalScheduling`   | `(start, end)` jobs       | jobs selected     |
//! | `InversionCount`       | integer array             | inversion count   |
//!
//! ## Example Usage
//!
//! ```
//! use algokit::error::{ConfigError, InputError};
//! use algokit::input::Scanner;
//! use algokit::traits::BatchProblem;
//!
//! // Sum of each instance's values
//! struct Sum;
//!
//! impl BatchProblem for Sum {
//!     type Instance = Vec<i64>;
//!     type Output = i64;
//!
//!     fn parse_instance(scanner: &mut Scanner<'_>) -> Result<Vec<i64>, InputError> {
//!         let n = scanner.next_count("value count")?;
//!         (0..n).map(|_| scanner.next_int()).collect()
//!     }
//!
//!     fn solve(instance: &Vec<i64>) -> Result<i64, ConfigError> {
//!         Ok(instance.iter().sum())
//!     }
//! }
//!
//! let mut out = Vec::new();
//! algokit::batch::run_batch::<Sum>("2\n2 1 2\n1 5\n", &mut out).unwrap();
//! assert_eq!(out, b"3\n5\n");
//! ```

use crate::error::{ConfigError, InputError};
use crate::input::Scanner;
use std::fmt::Display;

/// One program of the batch protocol.
pub trait BatchProblem {
    /// A single parsed instance.
    type Instance;

    /// The per-instance answer, printed on its own line.
    type Output: Display;

    /// Short program name used in log records.
    const NAME: &'static str = "batch";

    /// Reads exactly one instance from `scanner`.
    ///
    /// The instance number is attached to the error by the caller.
    fn parse_instance(scanner: &mut Scanner<'_>) -> Result<Self::Instance, InputError>;

    /// Solves one instance.
    ///
    /// Returns [`ConfigError`] when the instance parsed but carries a
    /// parameter the algorithm cannot accept.
    fn solve(instance: &Self::Instance) -> Result<Self::Output, ConfigError>;
}
