//! Distance-weighted flow probabilities and the stochastic direction draw.
//!
//! For a cell off the stage row, attraction is inverse-distance-plus-one
//! toward the stage and toward each of the two exit corners; the two exit
//! weights pool into a single exitward probability. The `+1` keeps the
//! weight finite at distance 0.

use rand::{Rng, RngExt};
use surge_core::Cell;
use surge_grid::FloorPlan;

/// The direction a cell's occupancy is pulled for one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pull {
    /// One cell toward the stage row (`x - 1`).
    Stageward,
    /// One cell toward the far wall holding the exits (`x + 1`).
    Exitward,
}

/// Normalized movement probabilities for one cell, valid for one step.
///
/// Invariant: `to_stage + to_exit == 1` (within floating-point tolerance)
/// and both lie in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowProbabilities {
    /// Probability of moving one cell toward the stage.
    pub to_stage: f64,
    /// Probability of moving one cell toward the exit wall.
    pub to_exit: f64,
}

impl FlowProbabilities {
    /// Draw a direction: one uniform value in `[0, 1)`, stageward when it
    /// falls below `to_stage`.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Pull {
        if rng.random::<f64>() < self.to_stage {
            Pull::Stageward
        } else {
            Pull::Exitward
        }
    }
}

/// The per-cell transition rule over a fixed floor plan.
#[derive(Clone, Copy, Debug)]
pub struct FlowRule {
    floor: FloorPlan,
}

impl FlowRule {
    /// Build the rule for `floor`.
    pub fn new(floor: FloorPlan) -> Self {
        Self { floor }
    }

    /// Movement probabilities for a cell off the stage row.
    ///
    /// Weights are `1 / (distance + 1)`: the stage weight from the depth
    /// distance, the exit weight as the sum over both exit corners. The
    /// normalized pair is returned. Stage-row cells are exempt from
    /// movement and have no probabilities.
    pub fn probabilities(&self, cell: Cell) -> FlowProbabilities {
        debug_assert!(
            !self.floor.is_stage(cell),
            "stage-row cell {cell} does not move"
        );

        let w_stage = inverse_distance_weight(self.floor.distance_to_stage(cell));
        let w_exit = inverse_distance_weight(self.floor.distance_to_left_exit(cell))
            + inverse_distance_weight(self.floor.distance_to_right_exit(cell));

        let total = w_stage + w_exit;
        FlowProbabilities {
            to_stage: w_stage / total,
            to_exit: w_exit / total,
        }
    }
}

/// `1 / (distance + 1)`: closer targets pull harder, distance 0 stays finite.
fn inverse_distance_weight(distance: u32) -> f64 {
    1.0 / (f64::from(distance) + 1.0)
}
