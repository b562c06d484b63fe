//! Player input record

use crate::calibration::Calibration;
use serde::{Deserialize, Serialize};

/// Everything the engine needs to project one player for one game
///
/// All values are caller supplied and are not range checked: negative
/// minutes or averages flow through the arithmetic unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerInputs {
    pub player: String,

    /// Sportsbook points line
    pub player_line: f64,
    /// Season average points
    pub season_avg: f64,

    pub is_home: bool,
    /// Game O/U total points
    pub game_total_ou: f64,
    /// Team O/U points
    pub team_total_ou: f64,

    /// Opponent points allowed per game to the player's position
    pub opp_pts_allowed_vs_pos: f64,

    /// Last-N games average; equal to `season_avg` when unused
    pub recent_avg: f64,
    pub season_avg_minutes: f64,
    pub expected_minutes: f64,
    /// Projected possessions per team for this matchup
    pub matchup_pace: f64,
    pub is_back_to_back: bool,
}

impl PlayerInputs {
    /// Inputs whose context sits exactly on the league baselines
    ///
    /// Every relative-deviation factor evaluates to 1.0; the player is
    /// away and rested. Callers override the fields they care about.
    pub fn at_baseline(
        player: impl Into<String>,
        player_line: f64,
        season_avg: f64,
        season_avg_minutes: f64,
        calibration: &Calibration,
    ) -> Self {
        let league = &calibration.league;
        Self {
            player: player.into(),
            player_line,
            season_avg,
            is_home: false,
            game_total_ou: league.avg_game_total,
            team_total_ou: league.avg_team_total,
            opp_pts_allowed_vs_pos: league.pts_allowed_vs_pos,
            recent_avg: season_avg,
            season_avg_minutes,
            expected_minutes: season_avg_minutes,
            matchup_pace: league.avg_pace,
            is_back_to_back: false,
        }
    }
}
