//! The [`Simulation`] handle.
//!
//! An explicit handle constructed by the caller and threaded through the
//! driving loop; there is no module-level model instance and no ambient
//! RNG. All state lives here: the current grid, the seeded generator,
//! and the step counter.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self`, and
//! [`advance()`](Simulation::advance) returns a [`StepResult`] that
//! borrows the new grid from `self`. A renderer must finish reading the
//! snapshot before the next `advance` call; the borrow checker enforces
//! it. Renderers that need to keep a frame across steps take an owned
//! copy via [`snapshot()`](Simulation::snapshot).

use crate::config::SimConfig;
use crate::metrics::StepFlows;
use crate::step::flow_step;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use surge_core::{ConfigError, StepId};
use surge_grid::{FloorPlan, OccupancyGrid};

/// Result of one [`Simulation::advance()`] call.
pub struct StepResult<'s> {
    /// Read-only view of the grid after this step.
    pub grid: &'s OccupancyGrid,
    /// Id of the step just completed.
    pub step_id: StepId,
    /// Flow accounting for the transition.
    pub flows: StepFlows,
}

/// A single crowd-flow simulation run.
///
/// Created from a [`SimConfig`]; the population is scattered over the
/// floor rows with the seeded RNG, and each [`advance()`](Simulation::advance)
/// replaces the grid with its synchronously computed successor.
///
/// # Examples
///
/// ```
/// use surge_engine::{SimConfig, Simulation};
///
/// let mut sim = Simulation::new(SimConfig {
///     width: 10,
///     height: 10,
///     num_people: 100,
///     seed: 42,
/// })
/// .unwrap();
///
/// let result = sim.advance();
/// assert_eq!(result.step_id.0, 1);
/// assert!(result.grid.total_occupancy() <= 100.0);
/// ```
pub struct Simulation {
    config: SimConfig,
    grid: OccupancyGrid,
    rng: ChaCha8Rng,
    step_id: StepId,
}

impl Simulation {
    /// Construct a simulation, validating the configuration and
    /// scattering the initial population.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the floor dimensions are degenerate;
    /// no grid is allocated in that case.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let floor = config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let grid = OccupancyGrid::scatter(floor, config.num_people, &mut rng);
        Ok(Self {
            config,
            grid,
            rng,
            step_id: StepId::default(),
        })
    }

    /// Advance one synchronous step.
    ///
    /// The transition is computed entirely from the pre-step grid and
    /// written into a fresh grid, which then replaces the handle's state
    /// wholesale. Always succeeds for a constructed simulation.
    pub fn advance(&mut self) -> StepResult<'_> {
        let (next, flows) = flow_step(&self.grid, &mut self.rng);
        self.grid = next;
        self.step_id = self.step_id.next();
        StepResult {
            grid: &self.grid,
            step_id: self.step_id,
            flows,
        }
    }

    /// The current grid.
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// An owned immutable copy of the current grid, for renderers that
    /// hold frames across steps.
    pub fn snapshot(&self) -> OccupancyGrid {
        self.grid.clone()
    }

    /// The floor plan of this run.
    pub fn floor(&self) -> FloorPlan {
        self.grid.floor()
    }

    /// Id of the most recently completed step (`StepId(0)` before any
    /// `advance`).
    pub fn step_id(&self) -> StepId {
        self.step_id
    }

    /// The seed this run was constructed (or last reset) with.
    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// Reset to step 0 with a new seed: the RNG is re-seeded and the
    /// population re-scattered on the same floor plan.
    pub fn reset(&mut self, seed: u64) {
        self.config.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.grid = OccupancyGrid::scatter(self.floor(), self.config.num_people, &mut self.rng);
        self.step_id = StepId::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surge_core::ConfigError;

    fn config() -> SimConfig {
        SimConfig {
            width: 10,
            height: 10,
            num_people: 100,
            seed: 42,
        }
    }

    #[test]
    fn new_rejects_invalid_config() {
        let bad = SimConfig {
            width: 0,
            ..config()
        };
        assert!(matches!(
            Simulation::new(bad),
            Err(ConfigError::WidthTooSmall { value: 0 })
        ));
    }

    #[test]
    fn advance_increments_step_id() {
        let mut sim = Simulation::new(config()).unwrap();
        assert_eq!(sim.step_id(), StepId(0));
        sim.advance();
        sim.advance();
        assert_eq!(sim.step_id(), StepId(2));
    }

    #[test]
    fn snapshot_is_detached_from_the_run() {
        let mut sim = Simulation::new(config()).unwrap();
        let frame = sim.snapshot();
        sim.advance();
        // The owned copy still shows the initial scatter.
        assert_eq!(frame.total_occupancy(), 100.0);
    }

    #[test]
    fn reset_reproduces_the_initial_scatter() {
        let mut sim = Simulation::new(config()).unwrap();
        let initial = sim.snapshot();
        for _ in 0..5 {
            sim.advance();
        }
        sim.reset(42);
        assert_eq!(sim.step_id(), StepId(0));
        assert_eq!(sim.grid(), &initial);
    }

    #[test]
    fn zero_population_is_valid_and_stable() {
        let mut sim = Simulation::new(SimConfig {
            num_people: 0,
            ..config()
        })
        .unwrap();
        let result = sim.advance();
        assert_eq!(result.grid.total_occupancy(), 0.0);
        assert_eq!(result.flows.total(), 0.0);
    }
}
