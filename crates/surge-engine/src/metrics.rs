//! Per-step flow accounting.

/// Where occupancy went during one synchronous step.
///
/// The five buckets partition the pre-step total exactly: every unit of
/// occupancy is either held on the stage row, moved one cell, or dropped
/// at a blocked boundary. Boundary losses are a deliberate policy of the
/// model (blocked movers vanish rather than being redistributed); this
/// accounting makes the loss observable instead of hidden.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepFlows {
    /// Occupancy that started on the stage row and stayed in place.
    pub held_on_stage: f64,
    /// Occupancy moved one cell toward the stage.
    pub moved_stageward: f64,
    /// Occupancy moved one cell toward the exit wall.
    pub moved_exitward: f64,
    /// Occupancy that drew stageward from `x == 1` and was dropped.
    pub lost_at_stage_edge: f64,
    /// Occupancy that drew exitward from `x == width - 1` and was dropped.
    pub lost_at_wall: f64,
}

impl StepFlows {
    /// Occupancy still on the grid after the step.
    pub fn conserved(&self) -> f64 {
        self.held_on_stage + self.moved_stageward + self.moved_exitward
    }

    /// Occupancy dropped at blocked boundaries during the step.
    pub fn lost(&self) -> f64 {
        self.lost_at_stage_edge + self.lost_at_wall
    }

    /// The pre-step total this accounting partitions.
    pub fn total(&self) -> f64 {
        self.conserved() + self.lost()
    }
}
