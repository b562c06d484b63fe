//! Slate files: many players in one CSV, projected in a single pass
//!
//! Columns are named after the `PlayerInputs` fields. Flags accept the
//! same spellings as the interactive prompt, and the optional extras may
//! be left empty to neutralize them.

use super::{parse_flag, PlayerInputs};
use crate::calibration::Calibration;
use crate::error::InputError;
use crate::projection::ProjectionResult;
use log::info;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// One raw CSV record
#[derive(Debug, Deserialize)]
struct SlateRecord {
    player: String,
    player_line: f64,
    season_avg: f64,
    #[serde(deserialize_with = "deserialize_flag")]
    is_home: bool,
    game_total_ou: f64,
    team_total_ou: f64,
    opp_pts_allowed_vs_pos: f64,
    recent_avg: Option<f64>,
    season_avg_minutes: f64,
    expected_minutes: Option<f64>,
    matchup_pace: Option<f64>,
    #[serde(deserialize_with = "deserialize_flag")]
    is_back_to_back: bool,
}

fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw).ok_or_else(|| de::Error::custom(format!("invalid flag '{}'", raw)))
}

impl SlateRecord {
    fn into_inputs(self, calibration: &Calibration) -> PlayerInputs {
        PlayerInputs {
            player: self.player,
            player_line: self.player_line,
            season_avg: self.season_avg,
            is_home: self.is_home,
            game_total_ou: self.game_total_ou,
            team_total_ou: self.team_total_ou,
            opp_pts_allowed_vs_pos: self.opp_pts_allowed_vs_pos,
            recent_avg: self.recent_avg.unwrap_or(self.season_avg),
            season_avg_minutes: self.season_avg_minutes,
            expected_minutes: self.expected_minutes.unwrap_or(self.season_avg_minutes),
            matchup_pace: self.matchup_pace.unwrap_or(calibration.league.avg_pace),
            is_back_to_back: self.is_back_to_back,
        }
    }
}

/// Load a slate from a CSV file
pub fn load_slate<P: AsRef<Path>>(
    path: P,
    calibration: &Calibration,
) -> Result<Vec<PlayerInputs>, InputError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let slate = load_slate_from_reader(file, calibration)?;
    info!("Loaded {} players from {}", slate.len(), path.display());
    Ok(slate)
}

/// Load a slate from any reader (headers required)
pub fn load_slate_from_reader<R: Read>(
    reader: R,
    calibration: &Calibration,
) -> Result<Vec<PlayerInputs>, InputError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut slate = Vec::new();
    for result in rdr.deserialize() {
        let record: SlateRecord = result?;
        slate.push(record.into_inputs(calibration));
    }
    Ok(slate)
}

/// Flat output row for one projected player
#[derive(Debug, Clone, Serialize)]
pub struct SlateRow {
    pub player: String,
    pub player_line: f64,
    pub season_avg: f64,
    pub base_points: f64,
    pub home_away_mult: f64,
    pub game_total_mult: f64,
    pub team_total_mult: f64,
    pub def_vs_pos_mult: f64,
    pub recent_form_mult: f64,
    pub minutes_trend_mult: f64,
    pub pace_mult: f64,
    pub b2b_mult: f64,
    pub uncapped_multiplier: f64,
    pub final_multiplier: f64,
    pub projection: f64,
    /// Projection minus the sportsbook line
    pub edge: f64,
}

impl SlateRow {
    pub fn new(inputs: &PlayerInputs, result: &ProjectionResult) -> Self {
        let m = &result.multipliers;
        Self {
            player: inputs.player.clone(),
            player_line: inputs.player_line,
            season_avg: inputs.season_avg,
            base_points: result.base_points,
            home_away_mult: m.home_away,
            game_total_mult: m.game_total,
            team_total_mult: m.team_total,
            def_vs_pos_mult: m.def_vs_pos,
            recent_form_mult: m.recent_form,
            minutes_trend_mult: m.minutes_trend,
            pace_mult: m.pace,
            b2b_mult: m.b2b,
            uncapped_multiplier: result.uncapped_multiplier,
            final_multiplier: result.final_multiplier,
            projection: result.projection,
            edge: result.projection - inputs.player_line,
        }
    }
}

/// Write projected rows as CSV with a header line
pub fn write_slate<W: Write>(writer: W, rows: &[SlateRow]) -> Result<(), InputError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row).map_err(InputError::Output)?;
    }
    wtr.flush().map_err(|e| InputError::Output(csv::Error::from(e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ProjectionEngine;
    use std::io;

    /// Writer whose every call fails
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    const SLATE: &str = "\
player,player_line,season_avg,is_home,game_total_ou,team_total_ou,opp_pts_allowed_vs_pos,recent_avg,season_avg_minutes,expected_minutes,matchup_pace,is_back_to_back
Home Scorer,25.0,23.0,1,229.0,114.5,23.0,23.0,32.0,32.0,99.5,0
Road Scorer, 25.0 ,23.0,false,229.0,114.5,23.0,,32.0,,,yes
";

    #[test]
    fn test_load_slate() {
        let calibration = Calibration::default();
        let slate = load_slate_from_reader(SLATE.as_bytes(), &calibration).expect("Failed to load");

        assert_eq!(slate.len(), 2);
        assert_eq!(slate[0].player, "Home Scorer");
        assert!(slate[0].is_home);
        assert!(!slate[0].is_back_to_back);

        let road = &slate[1];
        assert_eq!(road.player_line, 25.0);
        assert!(!road.is_home);
        assert!(road.is_back_to_back);
        assert_eq!(road.recent_avg, 23.0);
        assert_eq!(road.expected_minutes, 32.0);
        assert_eq!(road.matchup_pace, 99.5);
    }

    #[test]
    fn test_bad_flag_rejected() {
        let csv = SLATE.replace("false", "sometimes");
        let calibration = Calibration::default();
        assert!(matches!(
            load_slate_from_reader(csv.as_bytes(), &calibration),
            Err(InputError::Csv(_))
        ));
    }

    #[test]
    fn test_write_slate() {
        let calibration = Calibration::default();
        let slate = load_slate_from_reader(SLATE.as_bytes(), &calibration).expect("Failed to load");
        let engine = ProjectionEngine::new(calibration);
        let rows: Vec<SlateRow> = slate
            .iter()
            .map(|inputs| SlateRow::new(inputs, &engine.project(inputs)))
            .collect();

        let mut out = Vec::new();
        write_slate(&mut out, &rows).expect("Failed to write");
        let text = String::from_utf8(out).expect("utf8");
        let mut lines = text.lines();

        let header = lines.next().expect("header");
        assert!(header.starts_with("player,player_line,season_avg,base_points,home_away_mult"));
        assert!(header.ends_with("final_multiplier,projection,edge"));
        assert_eq!(lines.count(), 2);

        // 24.2 * 1.04 = 25.168
        assert!((rows[0].projection - 25.168).abs() < 1e-9);
        assert!((rows[0].edge - 0.168).abs() < 1e-9);
        // Away and on a back-to-back: 24.2 * 0.96 * 0.97
        assert!((rows[1].projection - 24.2 * 0.96 * 0.97).abs() < 1e-9);
    }

    #[test]
    fn test_write_failure_is_output_error() {
        let calibration = Calibration::default();
        let slate = load_slate_from_reader(SLATE.as_bytes(), &calibration).expect("Failed to load");
        let engine = ProjectionEngine::new(calibration);
        let rows: Vec<SlateRow> = slate
            .iter()
            .map(|inputs| SlateRow::new(inputs, &engine.project(inputs)))
            .collect();

        let err = write_slate(BrokenPipe, &rows).expect_err("writer is closed");
        assert!(matches!(err, InputError::Output(_)));
        assert!(err.to_string().starts_with("failed to write projections"));
    }
}
