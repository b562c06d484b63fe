//! Interactive projection for a single player
//!
//! Prompts for every input on the terminal, then prints the projection
//! report (or the raw result as JSON with `--json`).

use anyhow::{Context, Result};
use clap::Parser;
use points_projection::player::Prompter;
use points_projection::report::write_report;
use points_projection::{Calibration, ProjectionEngine};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "project_player", about = "Project a player's points from the terminal")]
struct Args {
    /// JSON calibration profile (defaults to the stock weights)
    #[arg(short, long)]
    calibration: Option<PathBuf>,

    /// Print the result as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let calibration = match &args.calibration {
        Some(path) => Calibration::load(path)
            .with_context(|| format!("Failed to load calibration from {}", path.display()))?,
        None => Calibration::default(),
    };
    let engine = ProjectionEngine::new(calibration);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let inputs = match prompter.collect(engine.calibration()).context("Failed to read inputs")? {
        Some(inputs) => inputs,
        // No player name: nothing to project
        None => return Ok(()),
    };

    let result = engine.project(&inputs);

    let mut out = prompter.into_writer();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &result).context("Failed to serialize result")?;
        writeln!(out)?;
    } else {
        write_report(&mut out, &inputs, &result, &engine.calibration().bounds)?;
    }
    out.flush()?;

    Ok(())
}
