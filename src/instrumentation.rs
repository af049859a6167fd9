// Lightweight instrumentation for counting hotspots in development.
// Thread-local cells keep the hot paths lock-free; reset and snapshot
// helpers let the dev binaries collect simple breakdowns.
use std::cell::Cell;

thread_local! {
    static COMPARISONS: Cell<u64> = Cell::new(0);
    static MAP_INSERTS: Cell<u64> = Cell::new(0);
    static MAP_LOOKUPS: Cell<u64> = Cell::new(0);
    static PROBES: Cell<u64> = Cell::new(0);
}

pub fn reset_counters() {
    COMPARISONS.with(|c| c.set(0));
    MAP_INSERTS.with(|c| c.set(0));
    MAP_LOOKUPS.with(|c| c.set(0));
    PROBES.with(|c| c.set(0));
}

pub fn counters_snapshot() -> (u64, u64, u64, u64) {
    let cmp = COMPARISONS.with(|c| c.get());
    let ins = MAP_INSERTS.with(|c| c.get());
    let lk = MAP_LOOKUPS.with(|c| c.get());
    let pr = PROBES.with(|c| c.get());
    (cmp, ins, lk, pr)
}

/// Candidate-pair value comparisons made by the scanning implementations.
pub fn add_comparisons(n: u64) {
    COMPARISONS.with(|c| c.set(c.get().wrapping_add(n)));
}

/// Entries inserted into a complement map or membership set.
pub fn add_map_inserts(n: u64) {
    MAP_INSERTS.with(|c| c.set(c.get().wrapping_add(n)));
}

/// Complement-map probes performed by the hashed implementation.
pub fn add_map_lookups(n: u64) {
    MAP_LOOKUPS.with(|c| c.set(c.get().wrapping_add(n)));
}

/// Midpoint probes performed by the binary searches.
pub fn add_probes(n: u64) {
    PROBES.with(|c| c.set(c.get().wrapping_add(n)));
}
