//! Future-use index for offline paging.
//!
//! For every distinct page in a request sequence, records the positions at
//! which that page is requested, earliest first. The replay consumes one
//! position from the front each time the page's request is processed, so the
//! front of each queue is always the page's *next* use.
//!
//! ## Architecture
//!
//! ```text
//!   requests:  [ 1, 2, 3, 2, 1, 4 ]
//!   position:    0  1  2  3  4  5
//!
//!   uses: FxHashMap<K, VecDeque<usize>>
//!
//!     ┌──────┬───────────┐
//!     │ page │ positions │
//!     ├──────┼───────────┤
//!     │  1   │ [0, 4]    │
//!     │  2   │ [1, 3]    │
//!     │  3   │ [2]       │
//!     │  4   │ [5]       │
//!     └──────┴───────────┘
//!
//!   consume(&2, 1)  →  2: [3]       next_use(&2) = At(3)
//!   consume(&3, 2)  →  3: []        next_use(&3) = Never
//! ```
//!
//! ## Example Usage
//!
//! ```
//! use algokit::ds::{FutureUses, NextUse};
//!
//! let mut uses = FutureUses::build(&[1, 2, 1]);
//! assert_eq!(uses.next_use(&1), NextUse::At(0));
//!
//! uses.consume(&1, 0);
//! assert_eq!(uses.next_use(&1), NextUse::At(2));
//!
//! uses.consume(&1, 2);
//! assert_eq!(uses.next_use(&1), NextUse::Never);
//! ```

use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;

/// When a page will next be requested.
///
/// Ordered so that every `At(_)` sorts below `Never`, and `At(a) < At(b)`
/// exactly when `a < b`. The furthest next use is therefore the maximum.
///
/// # Example
///
/// ```
/// use algokit::ds::NextUse;
///
/// assert!(NextUse::At(3) < NextUse::At(7));
/// assert!(NextUse::At(usize::MAX) < NextUse::Never);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NextUse {
    /// Requested again at this position in the request sequence.
    At(usize),
    /// Never requested again.
    Never,
}

impl NextUse {
    /// Returns the position, or `None` for [`NextUse::Never`].
    #[inline]
    pub fn position(self) -> Option<usize> {
        match self {
            NextUse::At(position) => Some(position),
            NextUse::Never => None,
        }
    }
}

impl fmt::Display for NextUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextUse::At(position) => write!(f, "@{position}"),
            NextUse::Never => f.write_str("never"),
        }
    }
}

/// Remaining request positions per page, consumed from the front.
#[derive(Debug, Clone)]
pub struct FutureUses<K> {
    uses: FxHashMap<K, VecDeque<usize>>,
}

impl<K> FutureUses<K>
where
    K: Clone + Eq + Hash,
{
    /// Builds the index with one scan over `requests`.
    pub fn build(requests: &[K]) -> Self {
        let mut uses: FxHashMap<K, VecDeque<usize>> = FxHashMap::default();
        for (position, page) in requests.iter().enumerate() {
            uses.entry(page.clone()).or_default().push_back(position);
        }
        Self { uses }
    }

    /// Returns the earliest remaining use of `page`.
    ///
    /// Pages that were never requested, or whose uses have all been consumed,
    /// report [`NextUse::Never`].
    #[inline]
    pub fn next_use(&self, page: &K) -> NextUse {
        match self.uses.get(page).and_then(|queue| queue.front()) {
            Some(&position) => NextUse::At(position),
            None => NextUse::Never,
        }
    }

    /// Removes the front use of `page`, which must be `position`.
    ///
    /// Returns the page's next use after consumption.
    pub fn consume(&mut self, page: &K, position: usize) -> NextUse {
        let Some(queue) = self.uses.get_mut(page) else {
            debug_assert!(false, "consumed a page absent from the index");
            return NextUse::Never;
        };
        let front = queue.pop_front();
        debug_assert_eq!(
            front,
            Some(position),
            "requests must be consumed in order"
        );
        match queue.front() {
            Some(&next) => NextUse::At(next),
            None => NextUse::Never,
        }
    }

    /// Number of remaining (unconsumed) uses of `page`.
    #[inline]
    pub fn remaining(&self, page: &K) -> usize {
        self.uses.get(page).map_or(0, VecDeque::len)
    }

    /// Number of distinct pages in the request sequence.
    #[inline]
    pub fn distinct_pages(&self) -> usize {
        self.uses.len()
    }

    #[cfg(any(test, debug_assertions))]
    /// Returns `true` if no remaining use of `page` is at or before `position`.
    pub fn debug_all_after(&self, page: &K, position: usize) -> bool {
        self.uses
            .get(page)
            .is_none_or(|queue| queue.iter().all(|&p| p > position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_use_orders_never_last() {
        let mut uses = vec![NextUse::Never, NextUse::At(9), NextUse::At(2)];
        uses.sort();
        assert_eq!(uses, vec![NextUse::At(2), NextUse::At(9), NextUse::Never]);
        assert_eq!(uses.iter().max(), Some(&NextUse::Never));
    }

    #[test]
    fn next_use_position_accessor() {
        assert_eq!(NextUse::At(4).position(), Some(4));
        assert_eq!(NextUse::Never.position(), None);
    }

    #[test]
    fn next_use_display() {
        assert_eq!(NextUse::At(4).to_string(), "@4");
        assert_eq!(NextUse::Never.to_string(), "never");
    }

    #[test]
    fn build_records_positions_in_order() {
        let uses = FutureUses::build(&[1, 2, 3, 2, 1, 4]);
        assert_eq!(uses.distinct_pages(), 4);
        assert_eq!(uses.remaining(&1), 2);
        assert_eq!(uses.remaining(&2), 2);
        assert_eq!(uses.remaining(&3), 1);
        assert_eq!(uses.next_use(&2), NextUse::At(1));
        assert_eq!(uses.next_use(&4), NextUse::At(5));
    }

    #[test]
    fn unknown_page_is_never_used() {
        let uses = FutureUses::build(&[1, 1]);
        assert_eq!(uses.next_use(&7), NextUse::Never);
        assert_eq!(uses.remaining(&7), 0);
    }

    #[test]
    fn consume_advances_front() {
        let mut uses = FutureUses::build(&[5, 6, 5, 5]);
        assert_eq!(uses.consume(&5, 0), NextUse::At(2));
        assert_eq!(uses.consume(&6, 1), NextUse::Never);
        assert_eq!(uses.consume(&5, 2), NextUse::At(3));
        assert_eq!(uses.consume(&5, 3), NextUse::Never);
        assert_eq!(uses.remaining(&5), 0);
        assert!(uses.debug_all_after(&5, 3));
    }

    #[test]
    fn empty_sequence_has_no_pages() {
        let uses: FutureUses<u32> = FutureUses::build(&[]);
        assert_eq!(uses.distinct_pages(), 0);
    }

    #[test]
    fn debug_all_after_detects_unconsumed_positions() {
        let uses = FutureUses::build(&[1, 2, 1]);
        assert!(!uses.debug_all_after(&1, 0));
        assert!(uses.debug_all_after(&2, 0));
    }
}
