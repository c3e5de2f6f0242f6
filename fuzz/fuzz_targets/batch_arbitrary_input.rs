#![no_main]

use algokit::batch::{
    DepthFirstSearch, FurthestFuturePaging, IntervalScheduling, InversionCount, run_batch,
};
use algokit::error::BatchError;
use libfuzzer_sys::fuzz_target;

// Feed arbitrary text to every program.
//
// Any input must end in either a result per instance or a reported error;
// I/O into a Vec never fails.
fn check(result: Result<usize, BatchError>, out: &[u8]) {
    let lines = out.iter().filter(|&&b| b == b'\n').count();
    match result {
        Ok(solved) => assert_eq!(solved, lines),
        Err(BatchError::Io(err)) => panic!("unexpected i/o error: {err}"),
        Err(_) => {},
    }
}

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Keep instance counts and sizes small enough to stay fast.
    if text.len() > 4096 {
        return;
    }

    let mut out = Vec::new();
    check(run_batch::<FurthestFuturePaging>(text, &mut out), &out);

    let mut out = Vec::new();
    check(run_batch::<DepthFirstSearch>(text, &mut out), &out);

    let mut out = Vec::new();
    check(run_batch::<IntervalScheduling>(text, &mut out), &out);

    let mut out = Vec::new();
    check(run_batch::<InversionCount>(text, &mut out), &out);
});
