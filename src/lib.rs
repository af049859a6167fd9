pub mod core;
pub mod digits;
pub mod fixture;
pub mod hashed;
pub mod instrumentation;
pub mod membership;
pub mod rotated;
pub mod scan;
pub mod sorted;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use crate::core::{IndexPair, PairSearch};
pub use crate::hashed::HashedPair;
pub use crate::scan::ScanPair;
