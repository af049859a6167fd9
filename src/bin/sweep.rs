use std::time::Instant;

use intseek::fixture::{InstanceConfig, generate_pair_instance};
use intseek::{HashedPair, PairSearch, ScanPair};

fn run_case(len: usize, spread: i64) {
    let (values, target) = generate_pair_instance(42, &InstanceConfig { len, spread });

    intseek::instrumentation::reset_counters();
    let t0 = Instant::now();
    let scan_found = ScanPair::find(&values, target);
    let scan_dur = t0.elapsed();
    let (scan_cmp, _, _, _) = intseek::instrumentation::counters_snapshot();

    intseek::instrumentation::reset_counters();
    let t1 = Instant::now();
    let hashed_found = HashedPair::find(&values, target);
    let hashed_dur = t1.elapsed();
    let (_, ins, lk, _) = intseek::instrumentation::counters_snapshot();

    assert_eq!(scan_found, hashed_found);

    println!(
        "LEN={} SPREAD={} scan_time={:?} scan_cmp={} hashed_time={:?} inserts={} lookups={}",
        len, spread, scan_dur, scan_cmp, hashed_dur, ins, lk
    );
}

fn main() {
    let lens = [1_000usize, 10_000, 50_000];
    let spreads = [100i64, 10_000, 1_000_000];
    for &len in &lens {
        for &spread in &spreads {
            run_case(len, spread);
        }
    }
}
