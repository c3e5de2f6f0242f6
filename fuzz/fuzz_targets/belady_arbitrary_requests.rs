#![no_main]

use algokit::policy::belady::OfflineOptimalCache;
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

// Replay arbitrary request sequences step by step.
//
// First byte picks the capacity; the rest are page ids. Checks the step-level
// invariants and the fault bounds of the finished replay.
fuzz_target!(|data: &[u8]| {
    let Some((&cap_byte, requests)) = data.split_first() else {
        return;
    };
    let capacity = i64::from(cap_byte % 16) + 1;

    let mut cache = OfflineOptimalCache::try_new(capacity, requests).unwrap();
    while let Some(access) = cache.step() {
        assert!(cache.resident_len() <= cache.capacity());
        assert!(cache.is_resident(access.page()));
        cache.debug_validate_invariants();
    }

    let report = cache.run();
    let distinct = requests.iter().collect::<HashSet<_>>().len();
    assert_eq!(report.requests, requests.len());
    assert_eq!(report.hits + report.faults, requests.len());
    assert!(report.faults >= distinct);
    assert!(report.evictions <= report.faults);
});
