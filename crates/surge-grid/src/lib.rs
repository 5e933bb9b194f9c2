//! Floor-plan geometry and occupancy storage for Surge simulations.
//!
//! Two types make up the grid state:
//!
//! - [`FloorPlan`] — the immutable venue shape: dimensions, the reserved
//!   stage row, the two exit corners, and the composite distances the
//!   flow rule is built from.
//! - [`OccupancyGrid`] — the mutable contents: a non-negative density
//!   per cell, created once by random scatter and thereafter replaced
//!   wholesale at the end of each step.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod floor;
pub mod occupancy;

pub use floor::FloorPlan;
pub use occupancy::OccupancyGrid;
