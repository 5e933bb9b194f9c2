//! Benchmark profiles for the Surge crowd-flow simulation.
//!
//! Pre-built [`SimConfig`] profiles shared by the criterion benches:
//!
//! - [`reference_config`]: 100x100 floor (10K cells), 5K people
//! - [`stress_config`]: 316x316 floor (~100K cells), 50K people

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use surge_engine::SimConfig;

/// Reference benchmark profile: 100x100 floor, 5 000 people.
pub fn reference_config(seed: u64) -> SimConfig {
    SimConfig {
        width: 100,
        height: 100,
        num_people: 5_000,
        seed,
    }
}

/// Stress benchmark profile: 316x316 floor (~100K cells), 50 000 people.
pub fn stress_config(seed: u64) -> SimConfig {
    SimConfig {
        width: 316,
        height: 316,
        num_people: 50_000,
        seed,
    }
}
