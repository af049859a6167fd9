// Deterministic instance generators for tests, benches and the dev
// binaries. Everything is seeded through ChaCha8 so a printed seed is
// enough to replay a failing case.
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Shape of a generated pair-search instance.
#[derive(Debug, Clone)]
pub struct InstanceConfig {
    pub len: usize,
    /// values are drawn uniformly from `-spread..=spread`
    pub spread: i64,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        InstanceConfig {
            len: 256,
            spread: 1000,
        }
    }
}

/// Generate a pair-search instance with at least one solution.
///
/// The target is the sum of two distinct generated positions, so a search
/// over the returned values is guaranteed to succeed. Small spreads produce
/// duplicates and multiple qualifying pairs, which exercises tie-breaking.
pub fn generate_pair_instance(seed: u64, config: &InstanceConfig) -> (Vec<i64>, i64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let len = config.len.max(2);
    let values: Vec<i64> = (0..len)
        .map(|_| rng.gen_range(-config.spread..=config.spread))
        .collect();

    let i = rng.gen_range(0..len);
    let mut j = rng.gen_range(0..len);
    while j == i {
        j = rng.gen_range(0..len);
    }
    let target = values[i] + values[j];

    (values, target)
}

/// Generate a non-decreasing sequence, duplicates allowed.
pub fn generate_sorted(seed: u64, len: usize, spread: i64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut values: Vec<i64> = (0..len).map(|_| rng.gen_range(-spread..=spread)).collect();
    values.sort_unstable();
    values
}

/// Generate a strictly increasing sequence rotated at a random pivot.
pub fn generate_rotated(seed: u64, len: usize) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cur: i64 = rng.gen_range(-1000..=1000);
    let mut values: Vec<i64> = Vec::with_capacity(len);
    for _ in 0..len {
        values.push(cur);
        cur += rng.gen_range(1..=3);
    }

    if len > 0 {
        let pivot = rng.gen_range(0..len);
        values.rotate_left(pivot);
    }
    values
}
