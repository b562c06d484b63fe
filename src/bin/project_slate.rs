//! Project every player on a slate CSV
//!
//! Outputs one CSV row per player with all intermediate terms

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use points_projection::player::{load_slate, write_slate, SlateRow};
use points_projection::{Calibration, ProjectionEngine};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "project_slate", about = "Project points for every player on a slate")]
struct Args {
    /// Slate CSV with one row of inputs per player
    slate: PathBuf,

    /// JSON calibration profile (defaults to the stock weights)
    #[arg(short, long)]
    calibration: Option<PathBuf>,

    /// Output CSV path (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let calibration = match &args.calibration {
        Some(path) => Calibration::load(path)
            .with_context(|| format!("Failed to load calibration from {}", path.display()))?,
        None => Calibration::default(),
    };

    let slate = load_slate(&args.slate, &calibration)
        .with_context(|| format!("Failed to load slate from {}", args.slate.display()))?;

    let engine = ProjectionEngine::new(calibration);
    let results = engine.project_slate(&slate);

    let rows: Vec<SlateRow> = slate
        .iter()
        .zip(results.iter())
        .map(|(inputs, result)| SlateRow::new(inputs, result))
        .collect();

    let capped = results.iter().filter(|r| r.is_capped()).count();

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_slate(file, &rows)?;
            info!("Output written to {}", path.display());
        }
        None => write_slate(io::stdout().lock(), &rows)?,
    }

    info!(
        "Projected {} players ({} capped) in {:?}",
        rows.len(),
        capped,
        start.elapsed()
    );

    Ok(())
}
