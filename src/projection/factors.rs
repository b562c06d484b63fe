//! The eight multiplicative adjustments
//!
//! Each factor is a small pure function of the calibration and the inputs.
//! Factors that divide by a caller- or profile-supplied denominator fall
//! back to the neutral multiplier when that denominator is not positive;
//! the guard affects only its own factor.

use crate::calibration::Calibration;
use crate::player::PlayerInputs;
use serde::Serialize;

/// Multiplier that leaves the projection unchanged
pub const NEUTRAL: f64 = 1.0;

/// Named adjustment factors, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Factor {
    HomeAway,
    GameTotal,
    TeamTotal,
    DefVsPos,
    RecentForm,
    MinutesTrend,
    Pace,
    BackToBack,
}

impl Factor {
    pub const ALL: [Factor; 8] = [
        Factor::HomeAway,
        Factor::GameTotal,
        Factor::TeamTotal,
        Factor::DefVsPos,
        Factor::RecentForm,
        Factor::MinutesTrend,
        Factor::Pace,
        Factor::BackToBack,
    ];

    /// Report label
    pub fn label(self) -> &'static str {
        match self {
            Factor::HomeAway => "Home/Away",
            Factor::GameTotal => "Game Total (OU)",
            Factor::TeamTotal => "Team Total (OU)",
            Factor::DefVsPos => "Def vs Position",
            Factor::RecentForm => "Recent Form",
            Factor::MinutesTrend => "Minutes Trend",
            Factor::Pace => "Pace",
            Factor::BackToBack => "Back-to-Back",
        }
    }
}

/// One value per adjustment factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Multipliers {
    pub home_away: f64,
    pub game_total: f64,
    pub team_total: f64,
    pub def_vs_pos: f64,
    pub recent_form: f64,
    pub minutes_trend: f64,
    pub pace: f64,
    pub b2b: f64,
}

impl Multipliers {
    /// Evaluate every factor for one set of inputs
    pub fn evaluate(calibration: &Calibration, inputs: &PlayerInputs) -> Self {
        Self {
            home_away: home_away(calibration, inputs),
            game_total: game_total(calibration, inputs),
            team_total: team_total(calibration, inputs),
            def_vs_pos: def_vs_pos(calibration, inputs),
            recent_form: recent_form(calibration, inputs),
            minutes_trend: minutes_trend(calibration, inputs),
            pace: pace(calibration, inputs),
            b2b: back_to_back(calibration, inputs),
        }
    }

    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::HomeAway => self.home_away,
            Factor::GameTotal => self.game_total,
            Factor::TeamTotal => self.team_total,
            Factor::DefVsPos => self.def_vs_pos,
            Factor::RecentForm => self.recent_form,
            Factor::MinutesTrend => self.minutes_trend,
            Factor::Pace => self.pace,
            Factor::BackToBack => self.b2b,
        }
    }

    /// Factors paired with their values, in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.iter().map(move |&factor| (factor, self.get(factor)))
    }

    /// Product of all eight multipliers, each taken once
    pub fn product(&self) -> f64 {
        self.home_away
            * self.game_total
            * self.team_total
            * self.def_vs_pos
            * self.recent_form
            * self.minutes_trend
            * self.pace
            * self.b2b
    }
}

/// Relative deviation of `value` from `baseline`
fn relative(value: f64, baseline: f64) -> f64 {
    (value - baseline) / baseline
}

/// Relative deviation, or `None` when the baseline is not positive
fn relative_guarded(value: f64, baseline: f64) -> Option<f64> {
    if baseline > 0.0 {
        Some(relative(value, baseline))
    } else {
        None
    }
}

/// `1 + rel * weight`
fn scaled(rel: f64, weight: f64) -> f64 {
    NEUTRAL + rel * weight
}

/// Optional factor: disabled by a zero weight or a non-positive base
///
/// A NaN base is not "non-positive" and propagates into the multiplier.
fn optional(weight: f64, value: f64, baseline: f64) -> f64 {
    if weight == 0.0 || baseline <= 0.0 {
        return NEUTRAL;
    }
    scaled(relative(value, baseline), weight)
}

pub fn home_away(calibration: &Calibration, inputs: &PlayerInputs) -> f64 {
    let w = calibration.weights.home_away;
    if inputs.is_home {
        NEUTRAL + w
    } else {
        NEUTRAL - w
    }
}

pub fn game_total(calibration: &Calibration, inputs: &PlayerInputs) -> f64 {
    let rel = relative(inputs.game_total_ou, calibration.league.avg_game_total);
    scaled(rel, calibration.weights.game_total)
}

pub fn team_total(calibration: &Calibration, inputs: &PlayerInputs) -> f64 {
    let rel = relative(inputs.team_total_ou, calibration.league.avg_team_total);
    scaled(rel, calibration.weights.team_total)
}

/// Opponent allows more than baseline to this position: boost; less: penalty
pub fn def_vs_pos(calibration: &Calibration, inputs: &PlayerInputs) -> f64 {
    let rel = relative_guarded(
        inputs.opp_pts_allowed_vs_pos,
        calibration.league.pts_allowed_vs_pos,
    )
    .unwrap_or(0.0);
    scaled(rel, calibration.weights.def_vs_pos)
}

pub fn recent_form(calibration: &Calibration, inputs: &PlayerInputs) -> f64 {
    optional(calibration.weights.recent_form, inputs.recent_avg, inputs.season_avg)
}

pub fn minutes_trend(calibration: &Calibration, inputs: &PlayerInputs) -> f64 {
    optional(
        calibration.weights.minutes_trend,
        inputs.expected_minutes,
        inputs.season_avg_minutes,
    )
}

pub fn pace(calibration: &Calibration, inputs: &PlayerInputs) -> f64 {
    optional(calibration.weights.pace, inputs.matchup_pace, calibration.league.avg_pace)
}

/// Flat penalty, not scaled by any input
pub fn back_to_back(calibration: &Calibration, inputs: &PlayerInputs) -> f64 {
    let penalty = calibration.weights.b2b_penalty;
    if !inputs.is_back_to_back || penalty <= 0.0 {
        return NEUTRAL;
    }
    NEUTRAL - penalty
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn baseline() -> (Calibration, PlayerInputs) {
        let calibration = Calibration::default();
        let inputs = PlayerInputs::at_baseline("Test", 25.0, 23.0, 32.0, &calibration);
        (calibration, inputs)
    }

    #[test]
    fn test_baseline_is_neutral() {
        let (calibration, inputs) = baseline();
        let m = Multipliers::evaluate(&calibration, &inputs);

        // Away by default
        assert_abs_diff_eq!(m.home_away, 0.96, epsilon = 1e-12);
        for factor in &Factor::ALL[1..] {
            assert_eq!(m.get(*factor), NEUTRAL, "{} should be neutral", factor.label());
        }
    }

    #[test]
    fn test_home_away() {
        let (calibration, mut inputs) = baseline();
        inputs.is_home = true;
        assert_abs_diff_eq!(home_away(&calibration, &inputs), 1.04, epsilon = 1e-12);

        // Home/away never switches off on its own, but a zero weight is neutral
        let mut flat = calibration.clone();
        flat.weights.home_away = 0.0;
        assert_eq!(home_away(&flat, &inputs), NEUTRAL);
    }

    #[test]
    fn test_game_and_team_totals() {
        let (calibration, mut inputs) = baseline();
        inputs.game_total_ou = 240.0;
        inputs.team_total_ou = 130.0;

        let expected_game = 1.0 + 0.06 * (240.0 - 229.0) / 229.0;
        let expected_team = 1.0 + 0.12 * (130.0 - 114.5) / 114.5;
        assert_abs_diff_eq!(game_total(&calibration, &inputs), expected_game, epsilon = 1e-12);
        assert_abs_diff_eq!(team_total(&calibration, &inputs), expected_team, epsilon = 1e-12);
        assert_abs_diff_eq!(team_total(&calibration, &inputs), 1.01624, epsilon = 1e-5);
    }

    #[test]
    fn test_def_vs_pos_guard() {
        let (mut calibration, mut inputs) = baseline();
        inputs.opp_pts_allowed_vs_pos = 27.6;
        assert_abs_diff_eq!(def_vs_pos(&calibration, &inputs), 1.0 + 0.14 * 0.2, epsilon = 1e-12);

        calibration.league.pts_allowed_vs_pos = 0.0;
        assert_eq!(def_vs_pos(&calibration, &inputs), NEUTRAL);

        calibration.league.pts_allowed_vs_pos = -5.0;
        assert_eq!(def_vs_pos(&calibration, &inputs), NEUTRAL);
    }

    #[test]
    fn test_recent_form() {
        let (mut calibration, mut inputs) = baseline();
        inputs.recent_avg = 27.6;
        assert_abs_diff_eq!(recent_form(&calibration, &inputs), 1.0 + 0.08 * 0.2, epsilon = 1e-12);

        // Non-positive season average disables the factor regardless of recent form
        inputs.season_avg = 0.0;
        assert_eq!(recent_form(&calibration, &inputs), NEUTRAL);
        inputs.season_avg = -3.0;
        assert_eq!(recent_form(&calibration, &inputs), NEUTRAL);

        inputs.season_avg = 23.0;
        calibration.weights.recent_form = 0.0;
        assert_eq!(recent_form(&calibration, &inputs), NEUTRAL);
    }

    #[test]
    fn test_minutes_trend() {
        let (mut calibration, mut inputs) = baseline();
        inputs.expected_minutes = 36.0;
        let m = minutes_trend(&calibration, &inputs);
        assert_abs_diff_eq!(m, 1.0 + 0.10 * 0.125, epsilon = 1e-12);

        // Negative minutes are accepted and flow through
        inputs.expected_minutes = -8.0;
        let m = minutes_trend(&calibration, &inputs);
        assert_abs_diff_eq!(m, 1.0 + 0.10 * -1.25, epsilon = 1e-12);

        inputs.season_avg_minutes = 0.0;
        assert_eq!(minutes_trend(&calibration, &inputs), NEUTRAL);

        inputs.season_avg_minutes = 32.0;
        calibration.weights.minutes_trend = 0.0;
        assert_eq!(minutes_trend(&calibration, &inputs), NEUTRAL);
    }

    #[test]
    fn test_pace() {
        let (mut calibration, mut inputs) = baseline();
        inputs.matchup_pace = 104.475;
        assert_abs_diff_eq!(pace(&calibration, &inputs), 1.0 + 0.06 * 0.05, epsilon = 1e-12);

        calibration.league.avg_pace = 0.0;
        assert_eq!(pace(&calibration, &inputs), NEUTRAL);

        calibration.league.avg_pace = 99.5;
        calibration.weights.pace = 0.0;
        assert_eq!(pace(&calibration, &inputs), NEUTRAL);
    }

    #[test]
    fn test_back_to_back() {
        let (mut calibration, mut inputs) = baseline();
        assert_eq!(back_to_back(&calibration, &inputs), NEUTRAL);

        inputs.is_back_to_back = true;
        assert_abs_diff_eq!(back_to_back(&calibration, &inputs), 0.97, epsilon = 1e-12);

        calibration.weights.b2b_penalty = 0.0;
        assert_eq!(back_to_back(&calibration, &inputs), NEUTRAL);
        calibration.weights.b2b_penalty = -0.05;
        assert_eq!(back_to_back(&calibration, &inputs), NEUTRAL);

        // Not on a back-to-back: penalty weight is irrelevant
        inputs.is_back_to_back = false;
        calibration.weights.b2b_penalty = 0.5;
        assert_eq!(back_to_back(&calibration, &inputs), NEUTRAL);
    }

    #[test]
    fn test_nan_base_propagates() {
        let (mut calibration, mut inputs) = baseline();

        inputs.season_avg = f64::NAN;
        assert!(recent_form(&calibration, &inputs).is_nan());

        inputs.season_avg_minutes = f64::NAN;
        assert!(minutes_trend(&calibration, &inputs).is_nan());

        calibration.league.avg_pace = f64::NAN;
        assert!(pace(&calibration, &inputs).is_nan());

        // A zero weight still switches the factor off
        calibration.weights.pace = 0.0;
        assert_eq!(pace(&calibration, &inputs), NEUTRAL);

        // Defense vs position keeps its strictly-positive baseline check
        calibration.league.pts_allowed_vs_pos = f64::NAN;
        assert_eq!(def_vs_pos(&calibration, &inputs), NEUTRAL);
    }

    #[test]
    fn test_guards_are_independent() {
        let (mut calibration, mut inputs) = baseline();
        calibration.league.avg_pace = 0.0;
        inputs.matchup_pace = 110.0;
        inputs.recent_avg = 27.6;
        inputs.is_back_to_back = true;

        let m = Multipliers::evaluate(&calibration, &inputs);
        assert_eq!(m.pace, NEUTRAL);
        assert_abs_diff_eq!(m.recent_form, 1.016, epsilon = 1e-12);
        assert_abs_diff_eq!(m.b2b, 0.97, epsilon = 1e-12);
    }

    #[test]
    fn test_product_and_iter() {
        let m = Multipliers {
            home_away: 1.04,
            game_total: 1.0,
            team_total: 1.1,
            def_vs_pos: 1.0,
            recent_form: 0.9,
            minutes_trend: 1.0,
            pace: 1.0,
            b2b: 0.97,
        };
        assert_abs_diff_eq!(m.product(), 1.04 * 1.1 * 0.9 * 0.97, epsilon = 1e-12);

        let labels: Vec<&str> = m.iter().map(|(f, _)| f.label()).collect();
        assert_eq!(labels.len(), 8);
        assert_eq!(labels[0], "Home/Away");
        assert_eq!(labels[7], "Back-to-Back");
        assert_eq!(m.iter().nth(2).map(|(_, v)| v), Some(1.1));
    }
}
