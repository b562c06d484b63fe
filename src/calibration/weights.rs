//! Blend weights and per-factor sensitivity weights

use serde::{Deserialize, Serialize};

/// Blend between the sportsbook line and the season average
///
/// The two weights are expected to sum to ~1.0. This is a calibration
/// convention only; the engine applies whatever values it is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendWeights {
    /// Weight on the sportsbook points line
    #[serde(default = "default_line")]
    pub line: f64,

    /// Weight on the season points average
    #[serde(default = "default_season_avg")]
    pub season_avg: f64,
}

fn default_line() -> f64 { 0.60 }
fn default_season_avg() -> f64 { 0.40 }

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            line: default_line(),
            season_avg: default_season_avg(),
        }
    }
}

impl BlendWeights {
    /// Sum of both blend weights
    pub fn total(&self) -> f64 {
        self.line + self.season_avg
    }

    /// Blend a line and a season average into base points
    pub fn blend(&self, player_line: f64, season_avg: f64) -> f64 {
        self.line * player_line + self.season_avg * season_avg
    }
}

/// Sensitivity of each multiplicative adjustment
///
/// The optional extras (recent form, minutes trend, pace, back-to-back)
/// are switched off by setting their weight to 0.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    /// +weight at home, -weight away
    #[serde(default = "default_home_away")]
    pub home_away: f64,

    /// Light: game O/U vs league baseline
    #[serde(default = "default_game_total")]
    pub game_total: f64,

    /// Moderate: team O/U vs league baseline
    #[serde(default = "default_team_total")]
    pub team_total: f64,

    /// Opponent points allowed to the position vs league baseline
    #[serde(default = "default_def_vs_pos")]
    pub def_vs_pos: f64,

    /// Last-N average vs season average (relative)
    #[serde(default = "default_recent_form")]
    pub recent_form: f64,

    /// Expected minutes vs season minutes (relative)
    #[serde(default = "default_minutes_trend")]
    pub minutes_trend: f64,

    /// Matchup pace vs league average pace (relative)
    #[serde(default = "default_pace")]
    pub pace: f64,

    /// Flat penalty applied on the second night of a back-to-back
    #[serde(default = "default_b2b_penalty")]
    pub b2b_penalty: f64,
}

fn default_home_away() -> f64 { 0.04 }
fn default_game_total() -> f64 { 0.06 }
fn default_team_total() -> f64 { 0.12 }
fn default_def_vs_pos() -> f64 { 0.14 }
fn default_recent_form() -> f64 { 0.08 }
fn default_minutes_trend() -> f64 { 0.10 }
fn default_pace() -> f64 { 0.06 }
fn default_b2b_penalty() -> f64 { 0.03 }

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            home_away: default_home_away(),
            game_total: default_game_total(),
            team_total: default_team_total(),
            def_vs_pos: default_def_vs_pos(),
            recent_form: default_recent_form(),
            minutes_trend: default_minutes_trend(),
            pace: default_pace(),
            b2b_penalty: default_b2b_penalty(),
        }
    }
}

impl FactorWeights {
    /// All weights with no adjustment applied
    pub fn neutral() -> Self {
        Self {
            home_away: 0.0,
            game_total: 0.0,
            team_total: 0.0,
            def_vs_pos: 0.0,
            recent_form: 0.0,
            minutes_trend: 0.0,
            pace: 0.0,
            b2b_penalty: 0.0,
        }
    }

    /// Named weights, in factor order
    pub(crate) fn named(&self) -> [(&'static str, f64); 8] {
        [
            ("weights.home_away", self.home_away),
            ("weights.game_total", self.game_total),
            ("weights.team_total", self.team_total),
            ("weights.def_vs_pos", self.def_vs_pos),
            ("weights.recent_form", self.recent_form),
            ("weights.minutes_trend", self.minutes_trend),
            ("weights.pace", self.pace),
            ("weights.b2b_penalty", self.b2b_penalty),
        ]
    }
}
