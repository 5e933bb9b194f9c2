//! The synchronous grid transition.

use crate::flow::{FlowRule, Pull};
use crate::metrics::StepFlows;
use rand::Rng;
use surge_core::Cell;
use surge_grid::{FloorPlan, OccupancyGrid};

/// Advance `grid` by one synchronous step, returning the successor grid
/// and the flow accounting for the transition.
///
/// The pass reads only the pre-step state and writes only into a fresh
/// grid, so every cell's move is computed from the same snapshot. Cells
/// are visited in row-major order and each occupied non-stage cell
/// consumes exactly one random draw, which makes a run fully determined
/// by the grid contents and the RNG state.
///
/// Per occupied cell:
///
/// - stage row: occupancy stays in place;
/// - stageward draw with `x > 1`: whole occupancy moves to `(x-1, y)`;
/// - exitward draw with `x < width-1`: whole occupancy moves to `(x+1, y)`;
/// - a draw blocked by the boundary drops the occupancy from the grid
///   entirely (tallied in [`StepFlows`], never redistributed).
pub fn flow_step<R: Rng + ?Sized>(grid: &OccupancyGrid, rng: &mut R) -> (OccupancyGrid, StepFlows) {
    let floor = grid.floor();
    let rule = FlowRule::new(floor);
    let mut next = OccupancyGrid::zeros(floor);
    let mut flows = StepFlows::default();

    for (cell, occupancy) in grid.iter() {
        if occupancy <= 0.0 {
            continue;
        }
        if floor.is_stage(cell) {
            next.deposit(cell, occupancy);
            flows.held_on_stage += occupancy;
            continue;
        }

        match rule.probabilities(cell).draw(rng) {
            Pull::Stageward if cell.x > FloorPlan::STAGE_ROW + 1 => {
                next.deposit(Cell::new(cell.x - 1, cell.y), occupancy);
                flows.moved_stageward += occupancy;
            }
            Pull::Stageward => {
                flows.lost_at_stage_edge += occupancy;
            }
            Pull::Exitward if cell.x < floor.width() - 1 => {
                next.deposit(Cell::new(cell.x + 1, cell.y), occupancy);
                flows.moved_exitward += occupancy;
            }
            Pull::Exitward => {
                flows.lost_at_wall += occupancy;
            }
        }
    }

    (next, flows)
}
