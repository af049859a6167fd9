use intseek::core::{IndexPair, PairSearch};
use intseek::fixture::{InstanceConfig, generate_pair_instance};
use intseek::hashed::HashedPair;
use intseek::scan::ScanPair;

// Generic helpers: accept any concrete implementation of PairSearch.
fn run_textbook_cases<P: PairSearch>() {
    assert_eq!(
        P::find(&[2, 7, 11, 15], 9),
        Some(IndexPair { first: 0, second: 1 })
    );
    assert_eq!(
        P::find(&[3, 2, 4], 6),
        Some(IndexPair { first: 1, second: 2 })
    );
}

#[test]
fn textbook_cases() {
    run_textbook_cases::<ScanPair>();
    run_textbook_cases::<HashedPair>();
}

fn run_absent_pair_reports_none<P: PairSearch>() {
    assert_eq!(P::find(&[1, 2, 3], 100), None);
    assert_eq!(P::find(&[], 0), None);
    assert_eq!(P::find(&[5], 10), None);
    // a lone value must not pair with itself
    assert_eq!(P::find(&[5, 1], 10), None);
}

#[test]
fn absent_pair_reports_none() {
    run_absent_pair_reports_none::<ScanPair>();
    run_absent_pair_reports_none::<HashedPair>();
}

fn run_duplicates_pair_with_earliest_occurrence<P: PairSearch>() {
    assert_eq!(
        P::find(&[3, 3], 6),
        Some(IndexPair { first: 0, second: 1 })
    );
    // the value at index 0 pairs with its later duplicate
    assert_eq!(
        P::find(&[5, 1, 5], 10),
        Some(IndexPair { first: 0, second: 2 })
    );
    // among three equal values the earliest two win
    assert_eq!(
        P::find(&[4, 4, 4], 8),
        Some(IndexPair { first: 0, second: 1 })
    );
}

#[test]
fn duplicates_pair_with_earliest_occurrence() {
    run_duplicates_pair_with_earliest_occurrence::<ScanPair>();
    run_duplicates_pair_with_earliest_occurrence::<HashedPair>();
}

fn run_negative_values_and_zero<P: PairSearch>() {
    assert_eq!(
        P::find(&[-3, 4, 3, 90], 0),
        Some(IndexPair { first: 0, second: 2 })
    );
    assert_eq!(
        P::find(&[0, 4, 3, 0], 0),
        Some(IndexPair { first: 0, second: 3 })
    );
}

#[test]
fn negative_values_and_zero() {
    run_negative_values_and_zero::<ScanPair>();
    run_negative_values_and_zero::<HashedPair>();
}

fn run_extreme_values_do_not_wrap<P: PairSearch>() {
    // i64::MIN's complement for target -1 is i64::MAX; the widened
    // arithmetic must find it rather than wrapping.
    assert_eq!(
        P::find(&[i64::MIN, 3, i64::MAX], -1),
        Some(IndexPair { first: 0, second: 2 })
    );
    // the complement of i64::MAX for target i64::MIN lies outside i64
    assert_eq!(P::find(&[i64::MAX, i64::MAX], i64::MIN), None);
}

#[test]
fn extreme_values_do_not_wrap() {
    run_extreme_values_do_not_wrap::<ScanPair>();
    run_extreme_values_do_not_wrap::<HashedPair>();
}

// Earliest qualifying pair in scan order, used as the oracle below.
fn brute_force_expected(values: &[i64], target: i64) -> Option<IndexPair> {
    for second in 1..values.len() {
        for first in 0..second {
            if values[first] as i128 + values[second] as i128 == target as i128 {
                return Some(IndexPair { first, second });
            }
        }
    }
    None
}

fn run_matches_brute_force_on_fixtures<P: PairSearch>() {
    for seed in 0..32 {
        // small spread so duplicates and competing pairs are common
        let config = InstanceConfig { len: 64, spread: 40 };
        let (values, target) = generate_pair_instance(seed, &config);

        let found = P::find(&values, target);
        assert_eq!(found, brute_force_expected(&values, target), "seed={seed}");

        let pair = found.unwrap_or_else(|| panic!("fixture plants a solution, seed={seed}"));
        assert!(pair.first < pair.second);
        assert_eq!(values[pair.first] + values[pair.second], target);
    }
}

#[test]
fn matches_brute_force_on_fixtures() {
    run_matches_brute_force_on_fixtures::<ScanPair>();
    run_matches_brute_force_on_fixtures::<HashedPair>();
}
