#![no_main]

use algokit::input::Scanner;
use libfuzzer_sys::fuzz_target;

// Drive the scanner with arbitrary text and a byte-chosen mix of reads.
//
// The cursor must only move forward, and nothing may panic on any input.
fuzz_target!(|data: &[u8]| {
    let Some((ops, text)) = data.split_first_chunk::<8>() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(text) else {
        return;
    };

    let mut scanner = Scanner::new(text);
    for &op in ops {
        match op % 5 {
            0 => {
                if let Some(token) = scanner.next_token() {
                    assert!(!token.is_empty());
                    assert!(!token.contains(char::is_whitespace));
                }
            },
            1 => {
                let _ = scanner.next_int::<i64>();
            },
            2 => {
                if let Ok(count) = scanner.next_count("count") {
                    assert!(i64::try_from(count).is_ok());
                }
            },
            3 => {
                if let Some(line) = scanner.next_line() {
                    assert!(!line.contains('\n'));
                }
            },
            4 => {
                if scanner.expect_end().is_ok() {
                    assert!(scanner.next_token().is_none());
                }
            },
            _ => unreachable!(),
        }
    }
});
