//! Offline optimal (Belady's MIN / furthest-in-future) page replacement.
//!
//! Replays a request sequence that is fully known in advance and counts page
//! faults when, on every eviction, the resident page whose next request is
//! furthest in the future (or that is never requested again) is dropped. For
//! a fixed capacity and a known future this minimizes the number of faults.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   OfflineOptimalCache<'a, K> Layout                     │
//! │                                                                         │
//! │   requests: &[K]          cursor ──► next position to replay            │
//! │                                                                         │
//! │   ┌───────────────────────────────┐   ┌───────────────────────────────┐ │
//! │   │ future: FutureUses<K>         │   │ resident: VictimHeap<K>       │ │
//! │   │                               │   │                               │ │
//! │   │  page → [remaining positions] │   │  page → next use (≤ capacity) │ │
//! │   │  front = next use             │   │  pop_furthest() = victim      │ │
//! │   └───────────────────────────────┘   └───────────────────────────────┘ │
//! │                                                                         │
//! │   faults, hits, evictions: usize                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//!
//! Step Flow (position i, page p = requests[i])
//! ─────────────────────────────────────────────
//!
//!   1. next = future.consume(p, i)        front entry == i, always consumed
//!   2. p resident?
//!        yes → hit; rescore p with `next`
//!        no  → fault
//!              if resident.len() == capacity:
//!                  victim = resident.pop_furthest()
//!              resident.insert(p, next)
//! ```
//!
//! Consuming before the residency check is equivalent to the textbook order
//! (check, evict, then consume): `p` is not resident during victim selection
//! on a fault, and on a hit nothing is selected.
//!
//! ## Invariants
//!
//! - `resident_len() <= capacity()` at all times.
//! - After replaying position `i`, no resident page has a remaining use at a
//!   position `<= i`.
//!
//! ## Example Usage
//!
//! ```
//! use algokit::policy::belady::{Access, OfflineOptimalCache};
//! use std::num::NonZeroUsize;
//!
//! let requests = [1, 2, 3, 2, 1, 4];
//! let capacity = NonZeroUsize::new(2).unwrap();
//! let mut cache = OfflineOptimalCache::new(capacity, &requests);
//!
//! // Warm-up faults
//! assert!(matches!(cache.step(), Some(Access::Miss { page: 1, evicted: None, .. })));
//! assert!(matches!(cache.step(), Some(Access::Miss { page: 2, evicted: None, .. })));
//!
//! // 1 is next used at position 4, 2 at position 3: evict 1
//! assert!(matches!(cache.step(), Some(Access::Miss { page: 3, evicted: Some(1), .. })));
//!
//! let report = cache.run();
//! assert_eq!(report.faults, 5);
//! assert_eq!(report.hits, 1);
//! ```

use crate::ds::{FutureUses, NextUse, VictimHeap};
use crate::error::ConfigError;
use std::fmt;
use std::hash::Hash;
use std::num::NonZeroUsize;
use tracing::{debug, trace};

/// Stale heap entries allowed per resident page before a rebuild.
const REBUILD_FACTOR: usize = 4;

/// Outcome of replaying a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access<K> {
    /// The page was resident.
    Hit {
        /// Position in the request sequence.
        position: usize,
        /// The requested page.
        page: K,
    },
    /// The page was absent and has been brought in.
    Miss {
        /// Position in the request sequence.
        position: usize,
        /// The requested page.
        page: K,
        /// The page dropped to make room, if the cache was full.
        evicted: Option<K>,
    },
}

impl<K> Access<K> {
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, Access::Hit { .. })
    }

    #[inline]
    pub fn position(&self) -> usize {
        match self {
            Access::Hit { position, .. } | Access::Miss { position, .. } => *position,
        }
    }

    #[inline]
    pub fn page(&self) -> &K {
        match self {
            Access::Hit { page, .. } | Access::Miss { page, .. } => page,
        }
    }
}

/// Totals of a complete (or partial) replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PagingReport {
    /// Requests replayed.
    pub requests: usize,
    pub hits: usize,
    /// Page faults (misses); the quantity Belady's MIN minimizes.
    pub faults: usize,
    /// Faults that had to drop a resident page.
    pub evictions: usize,
}

impl PagingReport {
    /// Fraction of requests that hit, or `0.0` for an empty replay.
    pub fn hit_ratio(&self) -> f64 {
        if self.requests == 0 {
            0.0
        } else {
            self.hits as f64 / self.requests as f64
        }
    }
}

impl fmt::Display for PagingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "requests={} hits={} faults={} evictions={}",
            self.requests, self.hits, self.faults, self.evictions
        )
    }
}

/// Validates a raw capacity as read from input.
///
/// # Example
///
/// ```
/// use algokit::policy::belady::validate_capacity;
///
/// assert_eq!(validate_capacity(3).unwrap().get(), 3);
/// assert!(validate_capacity(0).is_err());
/// assert!(validate_capacity(-1).is_err());
/// ```
pub fn validate_capacity(capacity: i64) -> Result<NonZeroUsize, ConfigError> {
    usize::try_from(capacity)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| ConfigError::new(format!("capacity must be at least 1, got {capacity}")))
}

/// Clairvoyant cache replaying a fixed request sequence.
///
/// Borrows the request sequence for its whole lifetime; the sequence is
/// read-only once the simulation is built.
///
/// # Type Parameters
///
/// - `K`: Page identifier, must be `Clone + Eq + Hash`
///
/// # Example
///
/// ```
/// use algokit::policy::belady::OfflineOptimalCache;
///
/// let requests = [7, 7, 7, 7];
/// let cache = OfflineOptimalCache::try_new(3, &requests).unwrap();
/// assert_eq!(cache.run().faults, 1);
/// ```
pub struct OfflineOptimalCache<'a, K> {
    requests: &'a [K],
    future: FutureUses<K>,
    resident: VictimHeap<K>,
    capacity: NonZeroUsize,
    cursor: usize,
    hits: usize,
    faults: usize,
    evictions: usize,
}

impl<'a, K> OfflineOptimalCache<'a, K>
where
    K: Clone + Eq + Hash,
{
    /// Builds the future-use index for `requests` and an empty cache.
    pub fn new(capacity: NonZeroUsize, requests: &'a [K]) -> Self {
        Self {
            requests,
            future: FutureUses::build(requests),
            resident: VictimHeap::with_capacity(capacity.get().min(requests.len())),
            capacity,
            cursor: 0,
            hits: 0,
            faults: 0,
            evictions: 0,
        }
    }

    /// Like [`new`](Self::new), rejecting `capacity <= 0` with a [`ConfigError`].
    pub fn try_new(capacity: i64, requests: &'a [K]) -> Result<Self, ConfigError> {
        Ok(Self::new(validate_capacity(capacity)?, requests))
    }

    /// Replays the next request, or returns `None` once the sequence is done.
    pub fn step(&mut self) -> Option<Access<K>> {
        let position = self.cursor;
        let page = self.requests.get(position)?.clone();
        self.cursor += 1;

        let next = self.future.consume(&page, position);

        let access = if self.resident.contains(&page) {
            self.hits += 1;
            self.resident.insert(page.clone(), next);
            Access::Hit { position, page }
        } else {
            self.faults += 1;
            let evicted = if self.resident.len() == self.capacity.get() {
                self.evict()
            } else {
                None
            };
            self.resident.insert(page.clone(), next);
            Access::Miss {
                position,
                page,
                evicted,
            }
        };

        self.resident.maybe_rebuild(REBUILD_FACTOR);
        Some(access)
    }

    fn evict(&mut self) -> Option<K> {
        let (victim, next_use) = self.resident.pop_furthest()?;
        self.evictions += 1;
        trace!(position = self.cursor - 1, next_use = %next_use, "evicting furthest page");
        Some(victim)
    }

    /// Replays every remaining request and returns the totals.
    pub fn run(mut self) -> PagingReport {
        while self.step().is_some() {}
        let report = self.report();
        debug!(
            capacity = self.capacity.get(),
            requests = report.requests,
            faults = report.faults,
            "offline optimal replay finished"
        );
        report
    }

    /// Totals for the requests replayed so far.
    pub fn report(&self) -> PagingReport {
        PagingReport {
            requests: self.cursor,
            hits: self.hits,
            faults: self.faults,
            evictions: self.evictions,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    #[inline]
    pub fn resident_len(&self) -> usize {
        self.resident.len()
    }

    #[inline]
    pub fn is_resident(&self, page: &K) -> bool {
        self.resident.contains(page)
    }

    /// Resident pages in arbitrary order.
    pub fn resident_pages(&self) -> impl Iterator<Item = &K> {
        self.resident.iter().map(|(page, _)| page)
    }

    /// Position of the next request to replay.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn faults(&self) -> usize {
        self.faults
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.requests.len()
    }

    /// Next position at which `page` is requested, from the current cursor.
    #[inline]
    pub fn next_use(&self, page: &K) -> NextUse {
        self.future.next_use(page)
    }

    /// Number of distinct pages in the whole request sequence.
    #[inline]
    pub fn distinct_pages(&self) -> usize {
        self.future.distinct_pages()
    }

    #[cfg(any(test, debug_assertions))]
    /// Validates internal invariants (debug/test builds only).
    pub fn debug_validate_invariants(&self) {
        assert!(
            self.resident.len() <= self.capacity.get(),
            "resident set exceeds capacity"
        );
        if let Some(last) = self.cursor.checked_sub(1) {
            for (page, score) in self.resident.iter() {
                assert!(
                    self.future.debug_all_after(page, last),
                    "resident page has an unconsumed use at or before {last}"
                );
                assert_eq!(score, self.future.next_use(page), "stale resident score");
            }
        }
    }
}

impl<K> fmt::Debug for OfflineOptimalCache<'_, K>
where
    K: Clone + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OfflineOptimalCache")
            .field("capacity", &self.capacity)
            .field("requests", &self.requests.len())
            .field("cursor", &self.cursor)
            .field("resident", &self.resident.len())
            .field("faults", &self.faults)
            .finish_non_exhaustive()
    }
}

/// Returns the number of faults Belady's MIN incurs on `requests`.
///
/// # Example
///
/// ```
/// use algokit::policy::belady::simulate;
///
/// assert_eq!(simulate(1, &[1, 2, 1, 2, 1]), Ok(5));
/// assert_eq!(simulate(2, &[1, 2, 3, 2, 1, 4]), Ok(5));
/// assert_eq!(simulate(3, &[1, 1, 1, 1]), Ok(1));
/// ```
pub fn simulate<K>(capacity: i64, requests: &[K]) -> Result<usize, ConfigError>
where
    K: Clone + Eq + Hash,
{
    Ok(OfflineOptimalCache::try_new(capacity, requests)?.run().faults)
}
