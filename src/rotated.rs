// Searches over an ascending sequence of distinct values rotated at an
// unknown pivot, e.g. [4,5,6,7,0,1,2]. At every probe exactly one half is
// sorted, which is enough to keep halving the range.
use crate::instrumentation;

/// Binary search in a rotated ascending sequence of distinct values.
///
/// Returns the target's index or `-1` when absent, in O(log n).
pub fn search_rotated(values: &[i64], target: i64) -> isize {
    let mut low: isize = 0;
    let mut high = values.len() as isize - 1;

    while low <= high {
        let mid = low + (high - low) / 2;
        instrumentation::add_probes(1);
        let probed = values[mid as usize];

        if probed == target {
            return mid;
        }

        if values[low as usize] <= probed {
            // left half sorted
            if values[low as usize] <= target && target < probed {
                high = mid - 1;
            } else {
                low = mid + 1;
            }
        } else {
            // right half sorted
            if probed < target && target <= values[high as usize] {
                low = mid + 1;
            } else {
                high = mid - 1;
            }
        }
    }

    -1
}

/// Minimum value of a rotated ascending sequence of distinct values.
///
/// The minimum sits just past the pivot; comparing the midpoint against the
/// right boundary says which side of the pivot the midpoint is on. `None`
/// for the empty sequence.
pub fn find_min(values: &[i64]) -> Option<i64> {
    let mut low = 0usize;
    let mut high = values.len().checked_sub(1)?;

    while low < high {
        let mid = low + (high - low) / 2;
        instrumentation::add_probes(1);
        if values[mid] > values[high] {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    Some(values[low])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::generate_rotated;

    #[test]
    fn search_rotated_finds_target_past_pivot() {
        assert_eq!(search_rotated(&[4, 5, 6, 7, 0, 1, 2], 0), 4);
        assert_eq!(search_rotated(&[4, 5, 6, 7, 0, 1, 2], 5), 1);
    }

    #[test]
    fn search_rotated_reports_absent_target() {
        assert_eq!(search_rotated(&[4, 5, 6, 7, 0, 1, 2], 3), -1);
        assert_eq!(search_rotated(&[], 3), -1);
        assert_eq!(search_rotated(&[1], 0), -1);
    }

    #[test]
    fn search_rotated_handles_unrotated_input() {
        assert_eq!(search_rotated(&[1, 3, 5], 5), 2);
        assert_eq!(search_rotated(&[1, 3, 5], 1), 0);
    }

    #[test]
    fn search_rotated_recovers_every_index_on_fixtures() {
        for seed in 0..8 {
            let values = generate_rotated(seed, 257);
            for k in 0..values.len() {
                // distinct values, so the found index must be exactly k
                assert_eq!(search_rotated(&values, values[k]), k as isize, "seed={seed}");
            }
        }
    }

    #[test]
    fn find_min_locates_smallest_value() {
        assert_eq!(find_min(&[3, 4, 5, 1, 2]), Some(1));
        assert_eq!(find_min(&[4, 5, 6, 7, 0, 1, 2]), Some(0));
        assert_eq!(find_min(&[11, 13, 15, 17]), Some(11));
        assert_eq!(find_min(&[2, 1]), Some(1));
        assert_eq!(find_min(&[]), None);
    }

    #[test]
    fn find_min_matches_linear_scan_on_fixtures() {
        for seed in 0..8 {
            let values = generate_rotated(seed, 100);
            assert_eq!(find_min(&values), values.iter().copied().min());
        }
    }
}
