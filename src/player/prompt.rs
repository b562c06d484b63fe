//! Interactive collection of player inputs from a terminal
//!
//! Prompts are written to any `Write` and answers read from any `BufRead`,
//! so the same code serves stdin/stdout and in-memory tests. No value is
//! range checked; an unparsable answer is asked again.

use super::{parse_flag, PlayerInputs};
use crate::calibration::Calibration;
use crate::error::InputError;
use log::debug;
use std::io::{BufRead, Write};

/// Terminal prompter over a reader/writer pair
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    line: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line: String::new(),
        }
    }

    /// Ask for every input field in turn
    ///
    /// Returns `Ok(None)` when input ends before a player name is read;
    /// the caller should then exit without projecting anything. Blank
    /// answers to the optional extras neutralize them: recent average
    /// falls back to the season average, expected minutes to season
    /// minutes and matchup pace to the league average pace.
    pub fn collect(
        &mut self,
        calibration: &Calibration,
    ) -> Result<Option<PlayerInputs>, InputError> {
        let player = match self.ask("Player name: ")? {
            Some(name) => name,
            None => return Ok(None),
        };

        let player_line = self.ask_number("Sportsbook line (points): ", "player_line")?;
        let season_avg = self.ask_number("Season avg points: ", "season_avg")?;
        let is_home = self.ask_flag("Is home? (1=yes, 0=no): ", "is_home")?;
        let game_total_ou = self.ask_number("Game total O/U: ", "game_total_ou")?;
        let team_total_ou = self.ask_number("Team total O/U: ", "team_total_ou")?;
        let opp_pts_allowed_vs_pos = self.ask_number(
            "Opponent points allowed to this position (per game): ",
            "opp_pts_allowed_vs_pos",
        )?;

        let recent_avg = self.ask_number_or(
            "Recent avg points (last N; enter season avg to ignore) [blank = season avg]: ",
            "recent_avg",
            season_avg,
        )?;
        let season_avg_minutes = self.ask_number("Season avg minutes: ", "season_avg_minutes")?;
        let expected_minutes = self.ask_number_or(
            "Expected minutes this game [blank = season avg]: ",
            "expected_minutes",
            season_avg_minutes,
        )?;
        let matchup_pace = self.ask_number_or(
            "Matchup pace (possessions per team) [blank = league avg]: ",
            "matchup_pace",
            calibration.league.avg_pace,
        )?;
        let is_back_to_back = self.ask_flag("Back-to-back? (1=yes, 0=no): ", "is_back_to_back")?;

        debug!("Collected inputs for {}", player);

        Ok(Some(PlayerInputs {
            player,
            player_line,
            season_avg,
            is_home,
            game_total_ou,
            team_total_ou,
            opp_pts_allowed_vs_pos,
            recent_avg,
            season_avg_minutes,
            expected_minutes,
            matchup_pace,
            is_back_to_back,
        }))
    }

    /// Hand back the writer, e.g. to render the report on the same stream
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Print a prompt and read one line; `None` at end of input
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn ask_required(&mut self, prompt: &str, field: &'static str) -> Result<String, InputError> {
        self.ask(prompt)?.ok_or(InputError::EndOfInput { field })
    }

    fn ask_number(&mut self, prompt: &str, field: &'static str) -> Result<f64, InputError> {
        loop {
            let answer = self.ask_required(prompt, field)?;
            match answer.trim().parse::<f64>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    writeln!(self.writer, "  '{}' is not a number, try again", answer.trim())?
                }
            }
        }
    }

    fn ask_number_or(
        &mut self,
        prompt: &str,
        field: &'static str,
        default: f64,
    ) -> Result<f64, InputError> {
        loop {
            let answer = self.ask_required(prompt, field)?;
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(default);
            }
            match answer.parse::<f64>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.writer, "  '{}' is not a number, try again", answer)?,
            }
        }
    }

    fn ask_flag(&mut self, prompt: &str, field: &'static str) -> Result<bool, InputError> {
        loop {
            let answer = self.ask_required(prompt, field)?;
            match parse_flag(&answer) {
                Some(flag) => return Ok(flag),
                None => writeln!(self.writer, "  '{}' is not 1 or 0, try again", answer.trim())?,
            }
        }
    }
}
