//! Calibration profiles: blend weights, factor sensitivities, league baselines and caps
//!
//! A `Calibration` is an immutable value handed to the projection engine.
//! Several profiles can coexist; none of them is global.

mod baselines;
mod weights;

pub use baselines::{LeagueBaselines, MultiplierBounds};
pub use weights::{BlendWeights, FactorWeights};

use crate::error::CalibrationError;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Allowed drift of the blend weights sum away from 1.0 before a warning is logged
pub const BLEND_SUM_TOLERANCE: f64 = 0.01;

/// Complete set of tunable model parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    #[serde(default)]
    pub blend: BlendWeights,

    #[serde(default)]
    pub weights: FactorWeights,

    #[serde(default)]
    pub league: LeagueBaselines,

    #[serde(default)]
    pub bounds: MultiplierBounds,
}

impl Calibration {
    /// Parse a (possibly partial) JSON profile and validate it
    ///
    /// Omitted sections and fields take their default values.
    pub fn from_json_str(json: &str) -> Result<Self, CalibrationError> {
        let calibration: Calibration = serde_json::from_str(json)?;
        calibration.validate()?;
        Ok(calibration)
    }

    /// Load a JSON profile from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CalibrationError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let calibration = Self::from_json_str(&json)?;
        info!("Loaded calibration profile from {}", path.display());
        Ok(calibration)
    }

    /// Check the profile for values the model cannot sensibly use
    ///
    /// Non-finite values and inverted bounds are rejected. A blend that
    /// does not sum to ~1.0 is only reported, since it is a calibration
    /// convention rather than a hard constraint.
    pub fn validate(&self) -> Result<(), CalibrationError> {
        for (field, value) in self.named_values() {
            if !value.is_finite() {
                return Err(CalibrationError::NonFinite { field });
            }
        }

        if self.bounds.min > self.bounds.max {
            return Err(CalibrationError::InvertedBounds {
                min: self.bounds.min,
                max: self.bounds.max,
            });
        }

        let total = self.blend.total();
        if (total - 1.0).abs() > BLEND_SUM_TOLERANCE {
            warn!(
                "Blend weights sum to {:.4} (line {:.4} + season {:.4}); projections will be scaled accordingly",
                total, self.blend.line, self.blend.season_avg
            );
        }

        Ok(())
    }

    /// Check whether this profile matches the stock calibration
    pub fn is_default(&self) -> bool {
        let stock = Calibration::default();
        self.named_values()
            .iter()
            .zip(stock.named_values().iter())
            .all(|((_, a), (_, b))| (a - b).abs() < 1e-9)
    }

    fn named_values(&self) -> Vec<(&'static str, f64)> {
        let mut values = vec![
            ("blend.line", self.blend.line),
            ("blend.season_avg", self.blend.season_avg),
        ];
        values.extend(self.weights.named());
        values.extend([
            ("league.avg_game_total", self.league.avg_game_total),
            ("league.avg_team_total", self.league.avg_team_total),
            ("league.avg_pace", self.league.avg_pace),
            ("league.pts_allowed_vs_pos", self.league.pts_allowed_vs_pos),
            ("bounds.min", self.bounds.min),
            ("bounds.max", self.bounds.max),
        ]);
        values
    }
}
