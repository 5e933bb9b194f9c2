//! Flat density frames extracted from grid snapshots.

use surge_core::{Cell, StepId};
use surge_grid::OccupancyGrid;

/// An owned, flat copy of one grid snapshot.
///
/// Frames decouple renderers from the simulation handle: extraction
/// copies the field, so the driving loop is free to advance the grid
/// while a frame is displayed or stored.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityFrame {
    width: u32,
    height: u32,
    step_id: StepId,
    cells: Vec<f64>,
}

impl DensityFrame {
    /// Copy `grid` into a frame tagged with `step_id`.
    pub fn extract(grid: &OccupancyGrid, step_id: StepId) -> Self {
        Self {
            width: grid.floor().width(),
            height: grid.floor().height(),
            step_id,
            cells: grid.cells().to_vec(),
        }
    }

    /// Depth rows in the frame.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Lateral columns in the frame.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The step this frame was extracted after.
    pub fn step_id(&self) -> StepId {
        self.step_id
    }

    /// The flat field in row-major order (depth rows contiguous).
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    /// Density of one cell.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the frame.
    pub fn density(&self, cell: Cell) -> f64 {
        assert!(
            cell.x < self.width && cell.y < self.height,
            "cell {cell} outside frame"
        );
        self.cells[(cell.x as usize) * (self.height as usize) + (cell.y as usize)]
    }

    /// The densest cell's value, 0.0 for an empty frame.
    pub fn peak_density(&self) -> f64 {
        self.cells.iter().copied().fold(0.0, f64::max)
    }

    /// Total density summed over the frame.
    pub fn total(&self) -> f64 {
        self.cells.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surge_grid::FloorPlan;

    #[test]
    fn extract_copies_dimensions_and_values() {
        let floor = FloorPlan::new(4, 3).unwrap();
        let mut grid = OccupancyGrid::zeros(floor);
        grid.deposit(Cell::new(2, 1), 5.0);

        let frame = DensityFrame::extract(&grid, StepId(9));
        assert_eq!(frame.width(), 4);
        assert_eq!(frame.height(), 3);
        assert_eq!(frame.step_id(), StepId(9));
        assert_eq!(frame.density(Cell::new(2, 1)), 5.0);
        assert_eq!(frame.total(), 5.0);
        assert_eq!(frame.peak_density(), 5.0);
    }

    #[test]
    fn frame_is_detached_from_the_grid() {
        let floor = FloorPlan::new(3, 3).unwrap();
        let mut grid = OccupancyGrid::zeros(floor);
        let frame = DensityFrame::extract(&grid, StepId(0));
        grid.deposit(Cell::new(1, 1), 1.0);
        assert_eq!(frame.total(), 0.0);
    }
}
