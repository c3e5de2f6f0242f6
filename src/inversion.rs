//! Inversion counting by merge sort.
//!
//! An inversion is a pair of positions `i < j` with `values[i] > values[j]`;
//! equal values are not inverted. Counting piggybacks on a top-down merge
//! sort: whenever the merge takes an element from the right half while the
//! left half still has `k` elements pending, those `k` elements are all
//! greater and each forms an inversion with it.
//!
//! ```text
//!   left  [2, 5, 8]   right [1, 6]
//!          ^                 ^        take 1 → +3 (2, 5, 8 > 1)
//!          ^                    ^     take 2, take 5
//!                ^              ^     take 6 → +1 (8 > 6)
//!                                     take 8          total split = 4
//! ```
//!
//! ## Example Usage
//!
//! ```
//! use algokit::inversion::count_inversions;
//!
//! assert_eq!(count_inversions(&[2, 4, 1, 3, 5]), 3);
//! assert_eq!(count_inversions(&[5, 4, 3, 2, 1]), 10);
//! ```

/// Counts inversions without modifying `values`.
pub fn count_inversions<T>(values: &[T]) -> u64
where
    T: Ord + Copy,
{
    let mut work = values.to_vec();
    sort_and_count(&mut work)
}

/// Sorts `values` ascending in place and returns its inversion count.
pub fn sort_and_count<T>(values: &mut [T]) -> u64
where
    T: Ord + Copy,
{
    let mut scratch = values.to_vec();
    sort_range(values, &mut scratch)
}

fn sort_range<T>(values: &mut [T], scratch: &mut [T]) -> u64
where
    T: Ord + Copy,
{
    let len = values.len();
    if len < 2 {
        return 0;
    }
    let mid = len / 2;
    let mut count = {
        let (left, right) = values.split_at_mut(mid);
        let (left_scratch, right_scratch) = scratch.split_at_mut(mid);
        sort_range(left, left_scratch) + sort_range(right, right_scratch)
    };
    count += merge(values, mid, scratch);
    count
}

/// Merges the sorted halves `values[..mid]` and `values[mid..]`.
fn merge<T>(values: &mut [T], mid: usize, scratch: &mut [T]) -> u64
where
    T: Ord + Copy,
{
    scratch.copy_from_slice(values);
    let (left, right) = scratch.split_at(mid);
    let (mut i, mut j) = (0, 0);
    let mut count = 0u64;

    for slot in values.iter_mut() {
        let take_left = j >= right.len() || (i < left.len() && left[i] <= right[j]);
        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
            count += (left.len() - i) as u64;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_input_has_no_inversions() {
        assert_eq!(count_inversions(&[1, 2, 3, 4]), 0);
    }

    #[test]
    fn reversed_input_is_n_choose_two() {
        let values: Vec<i64> = (0..100).rev().collect();
        assert_eq!(count_inversions(&values), 100 * 99 / 2);
    }

    #[test]
    fn equal_values_are_not_inversions() {
        assert_eq!(count_inversions(&[3, 3, 3]), 0);
        assert_eq!(count_inversions(&[2, 1, 1]), 2);
    }

    #[test]
    fn empty_and_single_element() {
        assert_eq!(count_inversions::<i64>(&[]), 0);
        assert_eq!(count_inversions(&[42]), 0);
    }

    #[test]
    fn sort_and_count_sorts_in_place() {
        let mut values = [8, -1, 5, 2, 2, 0];
        let count = sort_and_count(&mut values);
        assert_eq!(values, [-1, 0, 2, 2, 5, 8]);
        assert_eq!(count, 10);
    }

    #[test]
    fn count_inversions_leaves_input_untouched() {
        let values = [3, 1, 2];
        assert_eq!(count_inversions(&values), 2);
        assert_eq!(values, [3, 1, 2]);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        assert_eq!(count_inversions(&[i64::MAX, i64::MIN, 0]), 2);
    }
}
