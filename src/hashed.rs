// HashedPair: explanatory notes
//
// This implementation replaces the quadratic nested scan with a single
// left-to-right pass over the sequence, keeping a map from previously seen
// value to the index of its first occurrence. At position `k` holding `v`
// the only value that can complete a pair is `target - v`; one map probe
// answers whether it has been seen, and the first hit is returned
// immediately, so the result is the pair with the smallest second index.
//
// Two details carry the contract:
//
// 1. Insertion happens only for values not already present, so each value
//    maps to its earliest index. When equal values compete for the same
//    second position, the earliest first index wins.
//
// 2. The complement is computed in widened arithmetic. If `target - v`
//    falls outside the i64 range, no stored value can complete the pair,
//    and the probe is skipped; the insert still happens because `v` itself
//    may complete a later pair.
use std::collections::hash_map::Entry;

use ahash::AHashMap;

use crate::core::{IndexPair, PairSearch};
use crate::instrumentation;

/// Single-pass implementation backed by a value -> first-index map.
pub struct HashedPair;

impl PairSearch for HashedPair {
    fn find(values: &[i64], target: i64) -> Option<IndexPair> {
        let mut seen: AHashMap<i64, usize> =
            AHashMap::with_capacity((values.len() / 2).max(16));

        for (index, &value) in values.iter().enumerate() {
            let complement = target as i128 - value as i128;
            if let Ok(complement) = i64::try_from(complement) {
                instrumentation::add_map_lookups(1);
                if let Some(&first) = seen.get(&complement) {
                    return Some(IndexPair {
                        first,
                        second: index,
                    });
                }
            }

            if let Entry::Vacant(slot) = seen.entry(value) {
                slot.insert(index);
                instrumentation::add_map_inserts(1);
            }
        }

        None
    }
}
