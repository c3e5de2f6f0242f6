#![no_main]

use algokit::ds::{NextUse, VictimHeap};
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on VictimHeap
//
// Tests random sequences of insert, remove, pop_furthest, peek_furthest and
// rebuild operations; popped entries must never be stale or out of order.
fuzz_target!(|data: &[u8]| {
    let mut heap: VictimHeap<u8> = VictimHeap::new();

    for chunk in data.chunks_exact(3) {
        let op = chunk[0] % 7;
        let key = chunk[1] % 32;
        let score = if chunk[2] == u8::MAX {
            NextUse::Never
        } else {
            NextUse::At(usize::from(chunk[2]))
        };

        match op {
            0 => {
                // insert (re-scoring a live key leaves a stale entry behind)
                heap.insert(key, score);
                assert_eq!(heap.score_of(&key), Some(score));
            },
            1 => {
                let old_len = heap.len();
                if heap.remove(&key).is_some() {
                    assert_eq!(heap.len(), old_len - 1);
                }
                assert!(!heap.contains(&key));
            },
            2 => {
                let best = heap.iter().map(|(_, s)| s).max();
                match heap.pop_furthest() {
                    Some((popped, popped_score)) => {
                        assert_eq!(Some(popped_score), best);
                        assert!(!heap.contains(&popped));
                    },
                    None => assert!(heap.is_empty()),
                }
            },
            3 => {
                let best = heap.iter().map(|(_, s)| s).max();
                let peeked = heap.peek_furthest().map(|(_, s)| s);
                assert_eq!(peeked, best);
            },
            4 => {
                let old_len = heap.len();
                heap.rebuild();
                assert_eq!(heap.len(), old_len);
                assert_eq!(heap.heap_len(), heap.len());
            },
            5 => {
                let old_len = heap.len();
                heap.maybe_rebuild(4);
                assert_eq!(heap.len(), old_len);
            },
            6 => {
                heap.clear();
                assert!(heap.is_empty());
            },
            _ => unreachable!(),
        }

        heap.debug_validate_invariants();
    }
});
