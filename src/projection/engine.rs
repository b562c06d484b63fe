//! Projection engine: blend, adjust, cap

use super::factors::Multipliers;
use super::result::ProjectionResult;
use crate::calibration::Calibration;
use crate::player::PlayerInputs;
use log::debug;

/// Project one player under the given calibration
///
/// Pure and infallible: every input combination, including zero or
/// negative denominators, yields a numeric result.
pub fn project(calibration: &Calibration, inputs: &PlayerInputs) -> ProjectionResult {
    let base_points = calibration.blend.blend(inputs.player_line, inputs.season_avg);
    let multipliers = Multipliers::evaluate(calibration, inputs);

    let uncapped_multiplier = multipliers.product();
    let final_multiplier = calibration.bounds.clamp(uncapped_multiplier);
    let projection = base_points * final_multiplier;

    debug!(
        "{}: base {:.2} x {:.4} (uncapped {:.4}) = {:.2}",
        inputs.player, base_points, final_multiplier, uncapped_multiplier, projection
    );

    ProjectionResult {
        base_points,
        multipliers,
        uncapped_multiplier,
        final_multiplier,
        projection,
    }
}

/// Engine bound to one calibration profile
///
/// Holds no mutable state; a single engine can serve any number of
/// callers, across threads included.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    calibration: Calibration,
}

impl ProjectionEngine {
    pub fn new(calibration: Calibration) -> Self {
        Self { calibration }
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Project a single player
    pub fn project(&self, inputs: &PlayerInputs) -> ProjectionResult {
        project(&self.calibration, inputs)
    }

    /// Project every player on a slate, preserving order
    pub fn project_slate(&self, slate: &[PlayerInputs]) -> Vec<ProjectionResult> {
        slate.iter().map(|inputs| self.project(inputs)).collect()
    }
}
