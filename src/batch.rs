//! Batch driver and the four programs built on it.
//!
//! [`run_batch`] implements the shared protocol once: read the instance count,
//! then parse, solve and print each instance in order. Results are written as
//! soon as each instance is solved; the first error stops the run, so output
//! already written for earlier instances stays valid.
//!
//! ## Programs
//!
//! | Type                     | Per-instance input                         |
//! |--------------------------|--------------------------------------------|
//! | [`FurthestFuturePaging`] | `C N r1 .. rN`                             |
//! | [`DepthFirstSearch`]     | `n`, then `n` lines `label neighbor ...`   |
//! | [`IntervalScheduling`]   | `n`, then `n` pairs `start end`            |
//! | [`InversionCount`]       | `n`, then `n` integers                     |
//!
//! ## Example Usage
//!
//! ```
//! use algokit::batch::{FurthestFuturePaging, run_batch};
//!
//! let input = "3\n1 5\n1 2 1 2 1\n2 6\n1 2 3 2 1 4\n3 4\n1 1 1 1\n";
//! let mut out = Vec::new();
//! let solved = run_batch::<FurthestFuturePaging>(input, &mut out).unwrap();
//!
//! assert_eq!(solved, 3);
//! assert_eq!(String::from_utf8(out).unwrap(), "5\n5\n1\n");
//! ```

use crate::error::{BatchError, ConfigError, InputError, InputErrorKind};
use crate::graph::Graph;
use crate::input::Scanner;
use crate::inversion::count_inversions;
use crate::policy::belady::simulate;
use crate::schedule::{Job, max_compatible};
use crate::traits::BatchProblem;
use std::io::{self, BufWriter, Read, Write};
use std::process::ExitCode;
use tracing::{debug, trace};

/// Runs every instance of `input` through `P`, writing one line per instance.
///
/// Returns the number of instances solved.
pub fn run_batch<P>(input: &str, mut out: impl Write) -> Result<usize, BatchError>
where
    P: BatchProblem,
{
    let mut scanner = Scanner::new(input);
    let instances = scanner.next_count("instance count")?;
    debug!(program = P::NAME, instances, "starting batch");

    for number in 1..=instances {
        let instance = P::parse_instance(&mut scanner).map_err(|err| err.in_instance(number))?;
        let output = P::solve(&instance).map_err(|source| BatchError::Config {
            instance: number,
            source,
        })?;
        trace!(program = P::NAME, instance = number, %output, "solved instance");
        writeln!(out, "{output}")?;
    }

    scanner.expect_end()?;
    out.flush()?;
    debug!(program = P::NAME, instances, "batch complete");
    Ok(instances)
}

/// Reads all of stdin and runs the batch to a buffered stdout.
pub fn run_stdio<P>() -> Result<usize, BatchError>
where
    P: BatchProblem,
{
    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input)?;
    let stdout = io::stdout();
    run_batch::<P>(&input, BufWriter::new(stdout.lock()))
}

/// Entry point shared by the executables.
///
/// Installs logging, runs [`run_stdio`], and maps failure to exit status 1
/// with the error on stderr.
pub fn run_main<P>() -> ExitCode
where
    P: BatchProblem,
{
    crate::logging::init();
    match run_stdio::<P>() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure::<P>(&err, io::stderr().lock());
            ExitCode::FAILURE
        },
    }
}

/// Writes the one-line failure message for `err` to `sink`.
///
/// The log record stays at `debug` so the default filter does not repeat the
/// message on stderr.
fn report_failure<P>(err: &BatchError, mut sink: impl Write)
where
    P: BatchProblem,
{
    debug!(program = P::NAME, error = %err, "batch aborted");
    let _ = writeln!(sink, "{}: {err}", P::NAME);
}

fn read_values<T>(scanner: &mut Scanner<'_>, count: usize) -> Result<Vec<T>, InputError>
where
    T: std::str::FromStr,
{
    (0..count).map(|_| scanner.next_int()).collect()
}

// ---------------------------------------------------------------------------
// Furthest-in-future paging
// ---------------------------------------------------------------------------

/// One paging instance: raw capacity and the request sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingInstance {
    /// Capacity as read; validated when solved.
    pub capacity: i64,
    pub requests: Vec<i64>,
}

/// Optimal offline page-fault count per instance.
#[derive(Debug, Clone, Copy)]
pub struct FurthestFuturePaging;

impl BatchProblem for FurthestFuturePaging {
    type Instance = PagingInstance;
    type Output = usize;

    const NAME: &'static str = "furthest_future_paging";

    fn parse_instance(scanner: &mut Scanner<'_>) -> Result<PagingInstance, InputError> {
        let capacity = scanner.next_int()?;
        let count = scanner.next_count("request count")?;
        let requests = read_values(scanner, count)?;
        Ok(PagingInstance { capacity, requests })
    }

    fn solve(instance: &PagingInstance) -> Result<usize, ConfigError> {
        simulate(instance.capacity, &instance.requests)
    }
}

// ---------------------------------------------------------------------------
// Depth-first search
// ---------------------------------------------------------------------------

/// Depth-first visit order per graph, labels separated by single spaces.
#[derive(Debug, Clone, Copy)]
pub struct DepthFirstSearch;

impl BatchProblem for DepthFirstSearch {
    type Instance = Graph;
    type Output = String;

    const NAME: &'static str = "dfs";

    fn parse_instance(scanner: &mut Scanner<'_>) -> Result<Graph, InputError> {
        let count = scanner.next_count("node count")?;
        // The rest of the count line must be empty.
        if let Some(rest) = scanner.next_line() {
            if let Some(token) = rest.split_whitespace().next() {
                return Err(InputError::new(InputErrorKind::TrailingInput {
                    token: token.to_owned(),
                }));
            }
        }

        // `count` is untrusted; grow as lines actually arrive.
        let mut lines = Vec::new();
        for _ in 0..count {
            let line = scanner.require_line("node line")?;
            if line.trim().is_empty() {
                return Err(InputError::new(InputErrorKind::BlankLine));
            }
            lines.push(line);
        }
        Ok(Graph::from_adjacency_lines(&lines))
    }

    fn solve(graph: &Graph) -> Result<String, ConfigError> {
        Ok(graph.depth_first_labels().join(" "))
    }
}

// ---------------------------------------------------------------------------
// Interval scheduling
// ---------------------------------------------------------------------------

/// Maximum number of compatible jobs per instance.
#[derive(Debug, Clone, Copy)]
pub struct IntervalScheduling;

impl BatchProblem for IntervalScheduling {
    /// `(start, end)` pairs as read; validated when solved.
    type Instance = Vec<(i64, i64)>;
    type Output = usize;

    const NAME: &'static str = "interval_scheduling";

    fn parse_instance(scanner: &mut Scanner<'_>) -> Result<Vec<(i64, i64)>, InputError> {
        let count = scanner.next_count("job count")?;
        (0..count)
            .map(|_| -> Result<(i64, i64), InputError> {
                Ok((scanner.next_int()?, scanner.next_int()?))
            })
            .collect()
    }

    fn solve(spans: &Vec<(i64, i64)>) -> Result<usize, ConfigError> {
        let jobs = spans
            .iter()
            .map(|&(start, end)| Job::try_new(start, end))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(max_compatible(&jobs))
    }
}

// ---------------------------------------------------------------------------
// Inversion counting
// ---------------------------------------------------------------------------

/// Number of inversions per integer array.
#[derive(Debug, Clone, Copy)]
pub struct InversionCount;

impl BatchProblem for InversionCount {
    type Instance = Vec<i64>;
    type Output = u64;

    const NAME: &'static str = "inversion_count";

    fn parse_instance(scanner: &mut Scanner<'_>) -> Result<Vec<i64>, InputError> {
        let count = scanner.next_count("element count")?;
        read_values(scanner, count)
    }

    fn solve(values: &Vec<i64>) -> Result<u64, ConfigError> {
        Ok(count_inversions(values))
    }
}
