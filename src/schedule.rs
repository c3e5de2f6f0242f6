//! Greedy interval scheduling (earliest finish time first).
//!
//! Selects a maximum-size set of pairwise compatible jobs: sort by end time,
//! then take every job that starts no earlier than the end of the last job
//! taken. Jobs that merely touch (`start == previous end`) are compatible.
//!
//! ## Example Usage
//!
//! ```
//! use algokit::schedule::{Job, max_compatible};
//!
//! let jobs = [
//!     Job::try_new(1, 4).unwrap(),
//!     Job::try_new(3, 5).unwrap(),
//!     Job::try_new(4, 7).unwrap(),
//!     Job::try_new(6, 8).unwrap(),
//! ];
//! assert_eq!(max_compatible(&jobs), 2);
//! ```

use crate::error::ConfigError;

/// A job occupying the half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Job {
    start: i64,
    end: i64,
}

impl Job {
    /// Creates a job, rejecting intervals that end before they start.
    ///
    /// Zero-length jobs (`start == end`) are allowed.
    pub fn try_new(start: i64, end: i64) -> Result<Self, ConfigError> {
        if end < start {
            return Err(ConfigError::new(format!(
                "job ends before it starts: [{start}, {end})"
            )));
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub fn start(&self) -> i64 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> i64 {
        self.end
    }

    /// `true` if `self` can run after `other` without overlap.
    #[inline]
    pub fn follows(&self, other: &Job) -> bool {
        self.start >= other.end
    }
}

/// Jobs chosen by earliest finish time, in finishing order.
///
/// Ties on end time are broken by start time, so a zero-length job at `t`
/// comes after a longer job ending at `t` and both can be taken.
pub fn select_jobs(jobs: &[Job]) -> Vec<Job> {
    let mut by_end = jobs.to_vec();
    by_end.sort_by_key(|job| (job.end, job.start));

    let mut selected: Vec<Job> = Vec::new();
    for job in by_end {
        if selected.last().is_none_or(|last| job.follows(last)) {
            selected.push(job);
        }
    }
    selected
}

/// Size of the largest set of pairwise compatible jobs.
pub fn max_compatible(jobs: &[Job]) -> usize {
    select_jobs(jobs).len()
}
