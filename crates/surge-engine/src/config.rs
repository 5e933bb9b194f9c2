//! Simulation configuration and validation.

use surge_core::ConfigError;
use surge_grid::FloorPlan;

/// Builder-input for constructing a [`Simulation`](crate::Simulation).
///
/// `num_people` is unsigned, so a negative population is rejected by the
/// type system; the dimension constraints are checked by
/// [`validate()`](SimConfig::validate) before any grid is allocated.
///
/// # Examples
///
/// ```
/// use surge_engine::SimConfig;
///
/// let config = SimConfig {
///     width: 10,
///     height: 10,
///     num_people: 100,
///     seed: 42,
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Depth rows, stage row included. Must be at least 2.
    pub width: u32,
    /// Lateral columns. Must be at least 1.
    pub height: u32,
    /// Unit occupants scattered over the floor rows at initialization.
    pub num_people: u32,
    /// Seed for the simulation's RNG. Identical configs produce
    /// identical runs.
    pub seed: u64,
}

impl SimConfig {
    /// Check the dimension constraints, returning the validated floor
    /// plan.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `width <= 1` or `height == 0`.
    pub fn validate(&self) -> Result<FloorPlan, ConfigError> {
        FloorPlan::new(self.width, self.height)
    }
}
