use ahash::AHashSet;

use crate::instrumentation;

/// True when any value occurs more than once.
pub fn contains_duplicate(values: &[i64]) -> bool {
    let mut seen: AHashSet<i64> = AHashSet::with_capacity(values.len());
    for &value in values {
        instrumentation::add_map_inserts(1);
        if !seen.insert(value) {
            return true;
        }
    }
    false
}

/// Length of the longest run of consecutive integers present in `values`.
///
/// Collects the values into a set, then walks each run once by only counting
/// upward from values whose predecessor is absent, which keeps the whole
/// scan O(n) despite the inner loop.
pub fn longest_consecutive(values: &[i64]) -> usize {
    let present: AHashSet<i64> = values.iter().copied().collect();
    let mut best = 0usize;

    for &start in &present {
        if start
            .checked_sub(1)
            .map_or(false, |prev| present.contains(&prev))
        {
            continue;
        }

        let mut len = 1usize;
        let mut cur = start;
        while let Some(next) = cur.checked_add(1) {
            if !present.contains(&next) {
                break;
            }
            len += 1;
            cur = next;
        }
        best = best.max(len);
    }

    best
}
