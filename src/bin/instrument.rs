use std::time::Instant;

use intseek::fixture::{InstanceConfig, generate_pair_instance, generate_sorted};
use intseek::{HashedPair, PairSearch, ScanPair, sorted};

fn run_case(values: &[i64], target: i64) {
    // ScanPair
    intseek::instrumentation::reset_counters();
    let t0 = Instant::now();
    let found = ScanPair::find(values, target);
    let dur_s = t0.elapsed();
    let (cmp, ins, lk, pr) = intseek::instrumentation::counters_snapshot();
    println!(
        "ScanPair: search_time={:?} found={:?} comparisons={} map_inserts={} map_lookups={} probes={}",
        dur_s, found, cmp, ins, lk, pr
    );

    // HashedPair
    intseek::instrumentation::reset_counters();
    let t1 = Instant::now();
    let found = HashedPair::find(values, target);
    let dur_h = t1.elapsed();
    let (cmp, ins, lk, pr) = intseek::instrumentation::counters_snapshot();
    println!(
        "HashedPair: search_time={:?} found={:?} comparisons={} map_inserts={} map_lookups={} probes={}",
        dur_h, found, cmp, ins, lk, pr
    );
}

fn main() {
    let config = InstanceConfig {
        len: 20_000,
        spread: 1_000_000,
    };
    let (values, target) = generate_pair_instance(42, &config);
    run_case(&values, target);

    // one large sorted probe for comparison
    let haystack = generate_sorted(42, 1_000_000, 1_000_000);
    intseek::instrumentation::reset_counters();
    let t0 = Instant::now();
    let found = sorted::search(&haystack, target);
    let dur = t0.elapsed();
    let (_, _, _, pr) = intseek::instrumentation::counters_snapshot();
    println!("sorted::search: search_time={:?} found={} probes={}", dur, found, pr);
}
