//! Projection output record

use super::factors::Multipliers;
use serde::Serialize;

/// Result of projecting one player, with every intermediate term
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionResult {
    /// Blend of the sportsbook line and the season average
    pub base_points: f64,

    /// Individual adjustment factors
    pub multipliers: Multipliers,

    /// Product of all eight multipliers before capping
    pub uncapped_multiplier: f64,

    /// `uncapped_multiplier` clamped to the calibration bounds
    pub final_multiplier: f64,

    /// `base_points * final_multiplier`
    pub projection: f64,
}

impl ProjectionResult {
    /// Whether the cap changed the combined multiplier
    pub fn is_capped(&self) -> bool {
        self.final_multiplier != self.uncapped_multiplier
    }
}
