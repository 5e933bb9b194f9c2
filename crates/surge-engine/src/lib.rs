//! Flow engine for the Surge crowd-flow simulation.
//!
//! The engine advances an occupancy grid one synchronous step at a time:
//! every occupied cell computes distance-weighted probabilities of moving
//! toward the stage or toward the exits, draws a direction, and writes its
//! whole occupancy into a fresh grid. The pre-step grid is never mutated.
//!
//! Layers, bottom up:
//!
//! - [`flow`] — the pure probability math and the stochastic direction draw.
//! - [`step`] — one synchronous pass over the field: [`flow_step`].
//! - [`metrics`] — [`StepFlows`], the per-step accounting of where
//!   occupancy went (including mass lost at blocked boundaries).
//! - [`config`] / [`sim`] — the user-facing [`Simulation`] handle owning
//!   the grid, the seeded RNG, and the step counter.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod flow;
pub mod metrics;
pub mod sim;
pub mod step;

pub use config::SimConfig;
pub use flow::{FlowProbabilities, FlowRule, Pull};
pub use metrics::StepFlows;
pub use sim::{Simulation, StepResult};
pub use step::flow_step;
