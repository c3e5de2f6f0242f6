//! Lazy max-heap of resident pages keyed by next use.
//!
//! Holds the resident set of an offline cache together with each page's next
//! use, and pops the page whose next use is furthest away. Rescoring a page
//! pushes a fresh heap entry instead of fixing the old one in place; entries
//! whose score no longer matches the authoritative map are stale and skipped
//! by [`pop_furthest`](VictimHeap::pop_furthest).
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  scores: FxHashMap<K, NextUse>   (authoritative; == resident set)  │
//! │                                                                     │
//! │    ┌──────┬─────────┐                                               │
//! │    │ page │ next    │                                               │
//! │    ├──────┼─────────┤                                               │
//! │    │  1   │ @4      │                                               │
//! │    │  2   │ @3      │                                               │
//! │    │  3   │ never   │                                               │
//! │    └──────┴─────────┘                                               │
//! │                                                                     │
//! │  heap: BinaryHeap<HeapEntry>   (max-heap, may hold stale entries)   │
//! │                                                                     │
//! │    (3, never, seq=2)  ← furthest, matches scores[3]                 │
//! │    (1, @4,    seq=0)  ← valid                                       │
//! │    (2, @3,    seq=3)  ← valid                                       │
//! │    (2, @1,    seq=1)  ← STALE: scores[2] is @3                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Staleness
//!
//! A page's next use only moves forward while it is resident, and positions
//! are unique, so an old entry can never collide with the current score. The
//! single exception is [`NextUse::Never`], which is terminal: a page scored
//! `Never` is not requested again and is never rescored.
//!
//! ## Tie-breaking
//!
//! Only `Never` scores can tie. Among them the page whose score was recorded
//! first is popped first; a [`rebuild`](VictimHeap::rebuild) re-sequences
//! live entries in map order. Both are deterministic, and which tied page
//! goes does not affect fault counts.
//!
//! ## Operations
//!
//! | Operation       | Description                          | Complexity         |
//! |-----------------|--------------------------------------|--------------------|
//! | `insert`        | Add/rescore a page                   | O(log n)           |
//! | `remove`        | Drop from the map only               | O(1)               |
//! | `pop_furthest`  | Pop max, skipping stale entries      | Amortized O(log n) |
//! | `maybe_rebuild` | Rebuild once stale entries pile up   | O(1) or O(n log n) |
//!
//! ## Example Usage
//!
//! ```
//! use algokit::ds::{NextUse, VictimHeap};
//!
//! let mut heap = VictimHeap::new();
//! heap.insert(1, NextUse::At(4));
//! heap.insert(2, NextUse::At(1));
//! heap.insert(2, NextUse::At(3));  // old @1 entry is now stale
//!
//! assert_eq!(heap.pop_furthest(), Some((1, NextUse::At(4))));
//! assert_eq!(heap.pop_furthest(), Some((2, NextUse::At(3))));
//! assert_eq!(heap.pop_furthest(), None);
//! ```
//!
//! ## Thread Safety
//!
//! `VictimHeap` is not thread-safe. Each simulation owns its own heap.
use crate::ds::future_uses::NextUse;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

#[derive(Debug, Clone)]
struct HeapEntry<K> {
    score: NextUse,
    seq: u64,
    key: K,
}

impl<K> PartialEq for HeapEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.seq == other.seq
    }
}

impl<K> Eq for HeapEntry<K> {}

impl<K> PartialOrd for HeapEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for HeapEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Older entries rank higher among equal scores.
        match self.score.cmp(&other.score) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            ordering => ordering,
        }
    }
}

/// Resident set that pops the page with the furthest next use.
///
/// # Example
///
/// ```
/// use algokit::ds::{NextUse, VictimHeap};
///
/// let mut heap = VictimHeap::with_capacity(2);
/// heap.insert("a", NextUse::At(10));
/// heap.insert("b", NextUse::Never);
///
/// assert!(heap.contains(&"a"));
/// assert_eq!(heap.pop_furthest(), Some(("b", NextUse::Never)));
/// assert_eq!(heap.len(), 1);
/// ```
#[derive(Debug)]
pub struct VictimHeap<K> {
    scores: FxHashMap<K, NextUse>,
    heap: BinaryHeap<HeapEntry<K>>,
    seq: u64,
}

impl<K> VictimHeap<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self {
            scores: FxHashMap::default(),
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Creates an empty heap sized for `capacity` resident pages.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            scores: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            heap: BinaryHeap::with_capacity(capacity),
            seq: 0,
        }
    }

    /// Number of resident pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns `true` if no page is resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Underlying heap length, including stale entries.
    #[inline]
    pub fn heap_len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if `key` is resident.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.scores.contains_key(key)
    }

    /// Current next use of a resident `key`.
    #[inline]
    pub fn score_of(&self, key: &K) -> Option<NextUse> {
        self.scores.get(key).copied()
    }

    /// Inserts `key` or rescores it, returning the previous score.
    pub fn insert(&mut self, key: K, score: NextUse) -> Option<NextUse> {
        let previous = self.scores.insert(key.clone(), score);
        self.push_entry(key, score);
        previous
    }

    /// Removes `key`, returning its score. Heap entries are left to go stale.
    pub fn remove(&mut self, key: &K) -> Option<NextUse> {
        self.scores.remove(key)
    }

    /// Pops the resident page with the furthest next use.
    pub fn pop_furthest(&mut self) -> Option<(K, NextUse)> {
        loop {
            let entry = self.heap.pop()?;
            match self.scores.get(&entry.key) {
                Some(score) if *score == entry.score => {
                    self.scores.remove(&entry.key);
                    return Some((entry.key, entry.score));
                },
                _ => continue,
            }
        }
    }

    /// Peeks the furthest page without removing it, discarding stale tops.
    pub fn peek_furthest(&mut self) -> Option<(&K, NextUse)> {
        while let Some(top) = self.heap.peek() {
            if self.scores.get(&top.key) == Some(&top.score) {
                break;
            }
            self.heap.pop();
        }
        self.heap.peek().map(|entry| (&entry.key, entry.score))
    }

    /// Rebuilds the heap from the authoritative map.
    pub fn rebuild(&mut self) {
        self.heap.clear();
        let entries: Vec<(K, NextUse)> = self
            .scores
            .iter()
            .map(|(key, score)| (key.clone(), *score))
            .collect();
        for (key, score) in entries {
            self.push_entry(key, score);
        }
    }

    /// Rebuilds when `heap_len() > len() * factor`.
    pub fn maybe_rebuild(&mut self, factor: usize) {
        let factor = factor.max(1);
        if self.heap.len() > self.scores.len().saturating_mul(factor) {
            self.rebuild();
        }
    }

    /// Drops every page and heap entry.
    pub fn clear(&mut self) {
        self.scores.clear();
        self.heap.clear();
    }

    /// Iterates resident pages with their scores in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, NextUse)> {
        self.scores.iter().map(|(key, score)| (key, *score))
    }

    #[cfg(any(test, debug_assertions))]
    /// Validates internal invariants (debug/test builds only).
    pub fn debug_validate_invariants(&self) {
        assert!(self.heap.len() >= self.scores.len());
        for (key, score) in &self.scores {
            assert!(
                self.heap
                    .iter()
                    .any(|entry| &entry.key == key && entry.score == *score),
                "live score has no heap entry"
            );
        }
    }

    fn push_entry(&mut self, key: K, score: NextUse) {
        let entry = HeapEntry {
            score,
            seq: self.seq,
            key,
        };
        self.seq = self.seq.wrapping_add(1);
        self.heap.push(entry);
    }
}

impl<K> Default for VictimHeap<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn victim_heap_pops_furthest_first() {
        let mut heap = VictimHeap::new();
        heap.insert("a", NextUse::At(5));
        heap.insert("b", NextUse::At(9));
        heap.insert("c", NextUse::At(1));

        assert_eq!(heap.pop_furthest(), Some(("b", NextUse::At(9))));
        assert_eq!(heap.pop_furthest(), Some(("a", NextUse::At(5))));
        assert_eq!(heap.pop_furthest(), Some(("c", NextUse::At(1))));
        assert_eq!(heap.pop_furthest(), None);
    }

    #[test]
    fn victim_heap_never_beats_any_position() {
        let mut heap = VictimHeap::new();
        heap.insert(1, NextUse::At(usize::MAX));
        heap.insert(2, NextUse::Never);
        assert_eq!(heap.pop_furthest(), Some((2, NextUse::Never)));
    }

    #[test]
    fn victim_heap_skips_stale_entries() {
        let mut heap = VictimHeap::new();
        heap.insert("a", NextUse::At(8));
        heap.insert("b", NextUse::At(4));
        assert_eq!(heap.insert("a", NextUse::At(2)), Some(NextUse::At(8)));

        assert_eq!(heap.len(), 2);
        assert_eq!(heap.heap_len(), 3);
        assert_eq!(heap.pop_furthest(), Some(("b", NextUse::At(4))));
        assert_eq!(heap.pop_furthest(), Some(("a", NextUse::At(2))));
        assert!(heap.is_empty());
    }

    #[test]
    fn victim_heap_ties_pop_oldest_score_first() {
        let mut heap = VictimHeap::new();
        heap.insert("x", NextUse::Never);
        heap.insert("y", NextUse::Never);
        heap.insert("z", NextUse::Never);
        assert_eq!(heap.pop_furthest(), Some(("x", NextUse::Never)));
        assert_eq!(heap.pop_furthest(), Some(("y", NextUse::Never)));
        assert_eq!(heap.pop_furthest(), Some(("z", NextUse::Never)));
    }

    #[test]
    fn victim_heap_remove_leaves_stale_entry() {
        let mut heap = VictimHeap::new();
        heap.insert(1, NextUse::Never);
        heap.insert(2, NextUse::At(3));
        assert_eq!(heap.remove(&1), Some(NextUse::Never));
        assert!(!heap.contains(&1));
        assert_eq!(heap.heap_len(), 2);
        assert_eq!(heap.pop_furthest(), Some((2, NextUse::At(3))));
        assert_eq!(heap.pop_furthest(), None);
    }

    #[test]
    fn victim_heap_peek_discards_stale_tops() {
        let mut heap = VictimHeap::new();
        heap.insert(1, NextUse::At(10));
        heap.insert(1, NextUse::At(2));
        heap.insert(2, NextUse::At(5));
        assert_eq!(heap.peek_furthest(), Some((&2, NextUse::At(5))));
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn victim_heap_maybe_rebuild_drops_stale_entries() {
        let mut heap = VictimHeap::new();
        for position in 0..10 {
            heap.insert("page", NextUse::At(position));
        }
        assert_eq!(heap.heap_len(), 10);

        heap.maybe_rebuild(4);
        assert_eq!(heap.heap_len(), 1);
        assert_eq!(heap.score_of(&"page"), Some(NextUse::At(9)));
        heap.debug_validate_invariants();
    }

    #[test]
    fn victim_heap_maybe_rebuild_is_noop_below_factor() {
        let mut heap = VictimHeap::new();
        heap.insert(1, NextUse::At(1));
        heap.insert(1, NextUse::At(2));
        heap.maybe_rebuild(4);
        assert_eq!(heap.heap_len(), 2);
    }

    #[test]
    fn victim_heap_clear_and_iter() {
        let mut heap = VictimHeap::with_capacity(4);
        heap.insert(1, NextUse::At(1));
        heap.insert(2, NextUse::Never);
        let mut seen: Vec<_> = heap.iter().map(|(k, s)| (*k, s)).collect();
        seen.sort();
        assert_eq!(seen, vec![(1, NextUse::At(1)), (2, NextUse::Never)]);

        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.heap_len(), 0);
    }
}
