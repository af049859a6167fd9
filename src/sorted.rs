// Searches over sequences sorted in non-decreasing order. Sortedness is a
// precondition, not validated here; results on unsorted input are
// unspecified.
use std::cmp::Ordering;

use crate::core::IndexPair;
use crate::instrumentation;

/// Binary search for `target`, returning its index or `-1` when absent.
///
/// Valid indices are non-negative, so the `-1` sentinel cannot collide with
/// a real result. With duplicates any matching index may be returned, not
/// necessarily the first or last occurrence.
pub fn search(values: &[i64], target: i64) -> isize {
    let mut low: isize = 0;
    let mut high = values.len() as isize - 1;

    while low <= high {
        // Overflow-safe midpoint; integer division keeps the floor.
        let mid = low + (high - low) / 2;
        instrumentation::add_probes(1);
        let probed = values[mid as usize];

        if probed == target {
            return mid;
        }
        if probed < target {
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }

    -1
}

/// Two-pointer pair search over a sorted sequence.
///
/// Returns distinct indices whose values sum to `target`, walking one
/// pointer inward from each end, or `None` when no pair exists. O(n) time,
/// O(1) space, no map needed because sortedness orders the candidates.
pub fn pair_in_sorted(values: &[i64], target: i64) -> Option<IndexPair> {
    if values.len() < 2 {
        return None;
    }
    let mut low = 0usize;
    let mut high = values.len() - 1;

    while low < high {
        instrumentation::add_comparisons(1);
        let sum = values[low] as i128 + values[high] as i128;
        match sum.cmp(&(target as i128)) {
            Ordering::Equal => {
                return Some(IndexPair {
                    first: low,
                    second: high,
                });
            }
            Ordering::Less => low += 1,
            Ordering::Greater => high -= 1,
        }
    }

    None
}

/// Binary search over a row-major matrix whose rows are sorted ascending and
/// whose each row starts above the previous row's last element.
///
/// Treats the matrix as one virtual sorted array of `rows * width` cells and
/// returns the target's `(row, col)` position, or `None` when absent. Rows
/// must be non-empty and of uniform width.
pub fn search_matrix(rows: &[Vec<i64>], target: i64) -> Option<(usize, usize)> {
    let width = rows.first().map_or(0, |row| row.len());
    if width == 0 {
        return None;
    }

    let mut low: isize = 0;
    let mut high = (rows.len() * width) as isize - 1;

    while low <= high {
        let mid = low + (high - low) / 2;
        instrumentation::add_probes(1);
        let (row, col) = (mid as usize / width, mid as usize % width);
        let probed = rows[row][col];

        if probed == target {
            return Some((row, col));
        }
        if probed < target {
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }

    None
}
