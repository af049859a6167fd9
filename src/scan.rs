use crate::core::{IndexPair, PairSearch};
use crate::instrumentation;

/// Reference implementation using a quadratic nested scan.
///
/// Kept alongside [`HashedPair`](crate::hashed::HashedPair) as the ground
/// truth the hashed variant is checked against, and as the cheaper choice
/// for very short sequences where building a map is not worth it.
pub struct ScanPair;

impl PairSearch for ScanPair {
    fn find(values: &[i64], target: i64) -> Option<IndexPair> {
        // The outer index is the candidate second position, so the first hit
        // is the pair with the smallest second index and, within it, the
        // earliest first index. This matches the hashed implementation.
        for second in 1..values.len() {
            for first in 0..second {
                instrumentation::add_comparisons(1);
                if values[first] as i128 + values[second] as i128 == target as i128 {
                    return Some(IndexPair { first, second });
                }
            }
        }
        None
    }
}
