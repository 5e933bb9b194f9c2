//! The mutable occupancy field laid over a [`FloorPlan`].

use crate::floor::FloorPlan;
use rand::{Rng, RngExt};
use surge_core::Cell;

/// Non-negative occupancy density per cell of a floor plan.
///
/// Occupancy is a density, not a set of trackable individuals: scattering
/// deposits unit increments, but the flow rule moves whole cell contents
/// as real-valued mass. The grid is created once (all zeros, or by random
/// scatter) and from then on only replaced wholesale: the engine builds
/// a fresh grid each step with [`zeros`](OccupancyGrid::zeros) and
/// [`deposit`](OccupancyGrid::deposit), then swaps it in. Readers never
/// observe a partially updated field.
#[derive(Clone, Debug, PartialEq)]
pub struct OccupancyGrid {
    floor: FloorPlan,
    cells: Vec<f64>,
}

impl OccupancyGrid {
    /// An all-zero occupancy field over `floor`.
    pub fn zeros(floor: FloorPlan) -> Self {
        Self {
            floor,
            cells: vec![0.0; floor.cell_count()],
        }
    }

    /// Scatter `num_people` unit increments uniformly over the floor rows.
    ///
    /// Each insertion draws `x` uniformly from `[1, width)` and `y` from
    /// `[0, height)`, so the stage row is never populated. The stage row
    /// is cleared afterwards anyway; the draws already exclude it, so the
    /// clear only enforces the documented invariant.
    pub fn scatter<R: Rng + ?Sized>(floor: FloorPlan, num_people: u32, rng: &mut R) -> Self {
        let mut grid = Self::zeros(floor);
        for _ in 0..num_people {
            let x = rng.random_range(1..floor.width());
            let y = rng.random_range(0..floor.height());
            grid.deposit(Cell::new(x, y), 1.0);
        }
        grid.clear_stage_row();
        grid
    }

    /// The floor plan this field is laid over.
    pub fn floor(&self) -> FloorPlan {
        self.floor
    }

    /// Occupancy of one cell.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the floor plan.
    pub fn occupancy(&self, cell: Cell) -> f64 {
        assert!(self.floor.contains(cell), "cell {cell} outside floor");
        self.cells[self.floor.index(cell)]
    }

    /// Add `amount` to one cell.
    ///
    /// Used by the flow engine to build the successor grid; there is no
    /// other mutation path.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the floor plan or `amount` is negative.
    pub fn deposit(&mut self, cell: Cell, amount: f64) {
        assert!(self.floor.contains(cell), "cell {cell} outside floor");
        assert!(amount >= 0.0, "occupancy deposit must be non-negative");
        let idx = self.floor.index(cell);
        self.cells[idx] += amount;
    }

    /// Total occupancy summed over all cells.
    pub fn total_occupancy(&self) -> f64 {
        self.cells.iter().sum()
    }

    /// Occupancy summed over one depth row.
    pub fn row_sum(&self, x: u32) -> f64 {
        let h = self.floor.height() as usize;
        let start = (x as usize) * h;
        self.cells[start..start + h].iter().sum()
    }

    /// The flat field in row-major order (depth rows are contiguous).
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    /// Iterate cells with their occupancy, row-major: all lateral cells
    /// of depth row 0, then row 1, and so on.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, f64)> + '_ {
        let h = self.floor.height();
        self.cells.iter().enumerate().map(move |(i, &c)| {
            let i = i as u32;
            (Cell::new(i / h, i % h), c)
        })
    }

    fn clear_stage_row(&mut self) {
        let h = self.floor.height() as usize;
        for v in &mut self.cells[..h] {
            *v = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn floor_10x10() -> FloorPlan {
        FloorPlan::new(10, 10).unwrap()
    }

    #[test]
    fn zeros_has_no_occupancy() {
        let grid = OccupancyGrid::zeros(floor_10x10());
        assert_eq!(grid.total_occupancy(), 0.0);
        assert!(grid.cells().iter().all(|&c| c == 0.0));
    }

    #[test]
    fn scatter_conserves_population() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let grid = OccupancyGrid::scatter(floor_10x10(), 100, &mut rng);
        assert_eq!(grid.total_occupancy(), 100.0);
    }

    #[test]
    fn scatter_leaves_stage_row_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let grid = OccupancyGrid::scatter(floor_10x10(), 500, &mut rng);
        assert_eq!(grid.row_sum(FloorPlan::STAGE_ROW), 0.0);
    }

    #[test]
    fn scatter_is_deterministic_for_a_seed() {
        let floor = floor_10x10();
        let a = OccupancyGrid::scatter(floor, 200, &mut ChaCha8Rng::seed_from_u64(99));
        let b = OccupancyGrid::scatter(floor, 200, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn deposit_accumulates() {
        let mut grid = OccupancyGrid::zeros(floor_10x10());
        let cell = Cell::new(4, 4);
        grid.deposit(cell, 1.0);
        grid.deposit(cell, 2.5);
        assert_eq!(grid.occupancy(cell), 3.5);
        assert_eq!(grid.row_sum(4), 3.5);
    }

    #[test]
    fn iter_is_row_major() {
        let floor = FloorPlan::new(2, 3).unwrap();
        let grid = OccupancyGrid::zeros(floor);
        let order: Vec<Cell> = grid.iter().map(|(c, _)| c).collect();
        assert_eq!(
            order,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 0),
                Cell::new(1, 1),
                Cell::new(1, 2),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "outside floor")]
    fn occupancy_rejects_out_of_floor_cell() {
        let grid = OccupancyGrid::zeros(floor_10x10());
        let _ = grid.occupancy(Cell::new(10, 0));
    }

    proptest! {
        #[test]
        fn scatter_stays_on_the_floor(
            (w, h) in (2u32..32, 1u32..32),
            num_people in 0u32..400,
            seed in any::<u64>(),
        ) {
            let floor = FloorPlan::new(w, h).unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let grid = OccupancyGrid::scatter(floor, num_people, &mut rng);

            prop_assert_eq!(grid.total_occupancy(), f64::from(num_people));
            prop_assert_eq!(grid.row_sum(FloorPlan::STAGE_ROW), 0.0);
            for (_, c) in grid.iter() {
                prop_assert!(c >= 0.0);
            }
        }
    }
}
