//! League baselines and multiplier caps

use serde::{Deserialize, Serialize};

/// League-wide reference values the contextual inputs are compared against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueBaselines {
    /// Average game O/U total
    #[serde(default = "default_avg_game_total")]
    pub avg_game_total: f64,

    /// Average team O/U total
    #[serde(default = "default_avg_team_total")]
    pub avg_team_total: f64,

    /// Possessions per team per game, approximately
    #[serde(default = "default_avg_pace")]
    pub avg_pace: f64,

    /// Average points allowed to a position
    #[serde(default = "default_pts_allowed_vs_pos")]
    pub pts_allowed_vs_pos: f64,
}

fn default_avg_game_total() -> f64 { 229.0 }
fn default_avg_team_total() -> f64 { 114.5 }
fn default_avg_pace() -> f64 { 99.5 }
fn default_pts_allowed_vs_pos() -> f64 { 23.0 }

impl Default for LeagueBaselines {
    fn default() -> Self {
        Self {
            avg_game_total: default_avg_game_total(),
            avg_team_total: default_avg_team_total(),
            avg_pace: default_avg_pace(),
            pts_allowed_vs_pos: default_pts_allowed_vs_pos(),
        }
    }
}

/// Caps on how far the combined multiplier can move
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiplierBounds {
    #[serde(default = "default_min")]
    pub min: f64,

    #[serde(default = "default_max")]
    pub max: f64,
}

fn default_min() -> f64 { 0.70 }
fn default_max() -> f64 { 1.40 }

impl Default for MultiplierBounds {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
        }
    }
}

impl MultiplierBounds {
    /// Clamp a multiplier into `[min, max]`
    ///
    /// The lower bound is checked first. Unlike `f64::clamp` this never
    /// panics: NaN passes through and inverted bounds resolve to `min`
    /// for values below it.
    pub fn clamp(&self, x: f64) -> f64 {
        if x < self.min {
            self.min
        } else if x > self.max {
            self.max
        } else {
            x
        }
    }

    /// Check whether a multiplier already sits inside the bounds
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }
}
