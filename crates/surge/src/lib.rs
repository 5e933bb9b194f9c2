//! Surge: a stochastic crowd density flow simulation on a discretized
//! floor plan.
//!
//! Surge models how a crowd redistributes itself over discrete time
//! steps, biased away from a fixed stage row and toward two exit
//! corners. Occupancy is a density per cell, not a set of tracked
//! individuals; each step, every occupied cell draws a direction from
//! distance-weighted probabilities and moves its whole contents one row,
//! synchronously over a snapshot of the prior state.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Surge sub-crates. For most users, adding `surge` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use surge::prelude::*;
//!
//! let mut sim = Simulation::new(SimConfig {
//!     width: 10,
//!     height: 10,
//!     num_people: 100,
//!     seed: 42,
//! })
//! .unwrap();
//!
//! for _ in 0..20 {
//!     let result = sim.advance();
//!     assert_eq!(result.grid.row_sum(FloorPlan::STAGE_ROW), 0.0);
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `surge-core` | Cell coordinates, step ids, error types |
//! | [`grid`] | `surge-grid` | Floor-plan geometry and the occupancy field |
//! | [`engine`] | `surge-engine` | Flow rule, synchronous step, simulation handle |
//! | [`obs`] | `surge-obs` | Density frames and console rendering |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: cells, step ids, errors (`surge-core`).
pub use surge_core as types;

/// Floor-plan geometry and occupancy storage (`surge-grid`).
pub use surge_grid as grid;

/// Flow rule, synchronous step, and the simulation handle
/// (`surge-engine`).
pub use surge_engine as engine;

/// Density-frame extraction and console rendering (`surge-obs`).
pub use surge_obs as obs;

/// Common imports for typical Surge usage.
///
/// ```rust
/// use surge::prelude::*;
/// ```
pub mod prelude {
    pub use surge_core::{Cell, ConfigError, StepId};
    pub use surge_engine::{
        flow_step, FlowProbabilities, FlowRule, Pull, SimConfig, Simulation, StepFlows, StepResult,
    };
    pub use surge_grid::{FloorPlan, OccupancyGrid};
    pub use surge_obs::{render_ascii, DensityFrame};
}
