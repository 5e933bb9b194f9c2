//! Venue floor plan: dimensions, stage row, exit corners, and distances.

use surge_core::{Cell, ConfigError};

/// The immutable shape of the venue floor.
///
/// A floor plan is a `width × height` grid of cells. Row 0 along the
/// depth axis is the stage; the far wall is row `width - 1`, and its two
/// lateral extremes are the exit corners. The plan is fixed for the
/// lifetime of a simulation run; only occupancy changes between steps.
///
/// Construction rejects degenerate shapes: a width of 0 or 1 leaves no
/// floor between the stage and the wall, and a height of 0 has no cells
/// at all. Distances computed on a validated plan are always finite.
///
/// # Examples
///
/// ```
/// use surge_core::Cell;
/// use surge_grid::FloorPlan;
///
/// let floor = FloorPlan::new(10, 10).unwrap();
/// assert_eq!(floor.cell_count(), 100);
/// assert_eq!(floor.distance_to_stage(Cell::new(3, 5)), 3);
/// assert_eq!(floor.exit_corners(), [Cell::new(9, 0), Cell::new(9, 9)]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FloorPlan {
    width: u32,
    height: u32,
}

impl FloorPlan {
    /// Depth-axis index of the stage row.
    pub const STAGE_ROW: u32 = 0;

    /// Create a floor plan with `width` depth rows and `height` lateral
    /// columns.
    ///
    /// Returns [`ConfigError::WidthTooSmall`] if `width <= 1` and
    /// [`ConfigError::EmptyFloor`] if `height == 0`.
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        if width <= 1 {
            return Err(ConfigError::WidthTooSmall { value: width });
        }
        if height == 0 {
            return Err(ConfigError::EmptyFloor);
        }
        Ok(Self { width, height })
    }

    /// Number of rows along the depth axis, stage row included.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of columns along the lateral axis.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `cell` lies on the floor plan.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Whether `cell` lies on the stage row.
    pub fn is_stage(&self, cell: Cell) -> bool {
        cell.x == Self::STAGE_ROW
    }

    /// The two exit corners: the lateral extremes of the far wall.
    ///
    /// Exit corners are distance targets for the flow rule, not
    /// absorbing sinks; occupancy never collects in them specially.
    pub fn exit_corners(&self) -> [Cell; 2] {
        [
            Cell::new(self.width - 1, 0),
            Cell::new(self.width - 1, self.height - 1),
        ]
    }

    /// Cells away from the stage row along the depth axis.
    pub fn distance_to_stage(&self, cell: Cell) -> u32 {
        debug_assert!(self.contains(cell), "cell {cell} outside floor");
        cell.x
    }

    /// Composite Manhattan distance to the left exit corner
    /// (`(width-1, 0)`): depth remaining to the far wall plus lateral
    /// offset from column 0.
    pub fn distance_to_left_exit(&self, cell: Cell) -> u32 {
        debug_assert!(self.contains(cell), "cell {cell} outside floor");
        (self.width - 1 - cell.x) + cell.y
    }

    /// Composite Manhattan distance to the right exit corner
    /// (`(width-1, height-1)`).
    pub fn distance_to_right_exit(&self, cell: Cell) -> u32 {
        debug_assert!(self.contains(cell), "cell {cell} outside floor");
        (self.width - 1 - cell.x) + (self.height - 1 - cell.y)
    }

    /// Flat row-major index of `cell`: depth rows are contiguous runs of
    /// `height` lateral cells.
    pub(crate) fn index(&self, cell: Cell) -> usize {
        (cell.x as usize) * (self.height as usize) + (cell.y as usize)
    }
}
