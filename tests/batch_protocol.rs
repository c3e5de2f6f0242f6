// ==============================================
// BATCH PROTOCOL (integration)
// ==============================================
//
// End-to-end runs of the four programs through `run_batch`, covering the
// shared `T`-instances framing, output ordering and the error taxonomy.

use algokit::prelude::*;

fn run<P: BatchProblem>(input: &str) -> Result<String, BatchError> {
    let mut out = Vec::new();
    run_batch::<P>(input, &mut out)?;
    Ok(String::from_utf8(out).expect("results are ASCII"))
}

fn partial<P: BatchProblem>(input: &str) -> (String, Result<usize, BatchError>) {
    let mut out = Vec::new();
    let result = run_batch::<P>(input, &mut out);
    (String::from_utf8(out).expect("results are ASCII"), result)
}

mod paging {
    use super::*;

    #[test]
    fn three_instances_in_input_order() {
        let input = "3\n1 5\n1 2 1 2 1\n2 6\n1 2 3 2 1 4\n3 4\n1 1 1 1\n";
        assert_eq!(run::<FurthestFuturePaging>(input).unwrap(), "5\n5\n1\n");
    }

    #[test]
    fn layout_is_whitespace_insensitive() {
        let input = "  2 \r\n2\t6 1 2\n3 2 1 4 1\n\n\n 0\n";
        assert_eq!(run::<FurthestFuturePaging>(input).unwrap(), "5\n0\n");
    }

    #[test]
    fn empty_request_sequence_has_no_faults() {
        assert_eq!(run::<FurthestFuturePaging>("1\n4 0\n").unwrap(), "0\n");
    }

    #[test]
    fn negative_page_numbers_are_pages() {
        assert_eq!(run::<FurthestFuturePaging>("1\n1 3\n-5 -5 7\n").unwrap(), "2\n");
    }

    #[test]
    fn negative_capacity_stops_batch_after_earlier_output() {
        let (out, result) = partial::<FurthestFuturePaging>("2\n1 1\n9\n-3 1\n9\n");
        assert_eq!(out, "1\n");
        match result.unwrap_err() {
            BatchError::Config { instance, source } => {
                assert_eq!(instance, 2);
                assert!(source.message().contains("-3"));
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_integer_request_is_malformed() {
        let err = run::<FurthestFuturePaging>("1\n2 2\n1 two\n").unwrap_err();
        match err {
            BatchError::Input(err) => {
                assert_eq!(err.instance(), Some(1));
                assert!(matches!(err.kind(), InputErrorKind::InvalidInteger { token } if token == "two"));
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_instance_is_malformed() {
        let (out, result) = partial::<FurthestFuturePaging>("2\n1 1\n4\n");
        assert_eq!(out, "1\n");
        assert!(matches!(result, Err(BatchError::Input(_))));
    }
}

mod depth_first {
    use super::*;

    #[test]
    fn visits_reachable_nodes_then_later_roots() {
        let input = "1\n4\nA B\nB A\nC D\nD\n";
        assert_eq!(run::<DepthFirstSearch>(input).unwrap(), "A B C D\n");
    }

    #[test]
    fn neighbors_explored_in_listed_order() {
        let input = "1\n4\nroot x y z\nx\ny\nz\n";
        assert_eq!(run::<DepthFirstSearch>(input).unwrap(), "root x y z\n");
    }

    #[test]
    fn goes_deep_before_wide() {
        let input = "1\n4\nA B C\nB D\nC\nD\n";
        assert_eq!(run::<DepthFirstSearch>(input).unwrap(), "A B D C\n");
    }

    #[test]
    fn neighbor_without_own_line_is_still_visited() {
        let input = "1\n1\nA ghost\n";
        assert_eq!(run::<DepthFirstSearch>(input).unwrap(), "A ghost\n");
    }

    #[test]
    fn several_graphs_one_line_each() {
        let input = "3\n1\nx\n0\n2\np q\nq p\n";
        assert_eq!(run::<DepthFirstSearch>(input).unwrap(), "x\n\np q\n");
    }
}

mod intervals {
    use super::*;

    #[test]
    fn greedy_by_earliest_finish() {
        let input = "1\n4\n1 4\n3 5\n0 6\n5 7\n";
        assert_eq!(run::<IntervalScheduling>(input).unwrap(), "2\n");
    }

    #[test]
    fn touching_jobs_are_compatible() {
        let input = "1\n3\n0 1\n1 2\n2 3\n";
        assert_eq!(run::<IntervalScheduling>(input).unwrap(), "3\n");
    }

    #[test]
    fn negative_times_are_allowed() {
        let input = "1\n2\n-10 -5\n-5 0\n";
        assert_eq!(run::<IntervalScheduling>(input).unwrap(), "2\n");
    }

    #[test]
    fn end_ties_take_longer_job_first() {
        let input = "2\n2\n5 5\n3 5\n2\n-5 -3\n-3 -1\n";
        assert_eq!(run::<IntervalScheduling>(input).unwrap(), "2\n2\n");
    }

    #[test]
    fn no_jobs_selects_nothing() {
        assert_eq!(run::<IntervalScheduling>("1\n0\n").unwrap(), "0\n");
    }
}

mod inversions {
    use super::*;

    #[test]
    fn sorted_reversed_and_mixed() {
        let input = "3\n4\n1 2 3 4\n4\n4 3 2 1\n5\n2 4 1 3 5\n";
        assert_eq!(run::<InversionCount>(input).unwrap(), "0\n6\n3\n");
    }

    #[test]
    fn equal_elements_are_not_inversions() {
        assert_eq!(run::<InversionCount>("1\n4\n2 2 2 1\n").unwrap(), "3\n");
    }

    #[test]
    fn large_reversed_array_does_not_overflow() {
        let n = 2_000u64;
        let values: Vec<String> = (0..n).rev().map(|v| v.to_string()).collect();
        let input = format!("1\n{n}\n{}\n", values.join(" "));
        let expected = n * (n - 1) / 2;
        assert_eq!(run::<InversionCount>(&input).unwrap(), format!("{expected}\n"));
    }
}

mod framing {
    use super::*;

    #[test]
    fn empty_input_is_malformed() {
        assert!(matches!(run::<InversionCount>(""), Err(BatchError::Input(_))));
    }

    #[test]
    fn negative_instance_count_is_malformed() {
        let err = run::<IntervalScheduling>("-1\n").unwrap_err();
        match err {
            BatchError::Input(err) => {
                assert_eq!(err.kind(), &InputErrorKind::NegativeCount { value: -1 });
                assert_eq!(err.instance(), None);
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn leftover_tokens_fail_after_all_results() {
        let (out, result) = partial::<InversionCount>("1\n2\n2 1\nextra\n");
        assert_eq!(out, "1\n");
        assert!(matches!(
            result,
            Err(BatchError::Input(ref e)) if matches!(e.kind(), InputErrorKind::TrailingInput { .. })
        ));
    }

    #[test]
    fn error_messages_name_the_instance() {
        let err = run::<InversionCount>("2\n1 1\n2 1 q\n").unwrap_err();
        assert!(err.to_string().contains("instance 2"), "{err}");
    }
}
