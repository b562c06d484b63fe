//! Human-readable projection report

use crate::calibration::MultiplierBounds;
use crate::player::PlayerInputs;
use crate::projection::ProjectionResult;
use std::io::{self, Write};

/// Render the report for one player
pub fn write_report<W: Write>(
    out: &mut W,
    inputs: &PlayerInputs,
    result: &ProjectionResult,
    bounds: &MultiplierBounds,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Projection for {}", inputs.player)?;
    writeln!(out, "Base points (blend): {:.2}", result.base_points)?;
    writeln!(out, "Multipliers:")?;
    for (factor, value) in result.multipliers.iter() {
        writeln!(out, "  {:<18}: {:.4}", factor.label(), value)?;
    }
    writeln!(out, "Uncapped Multiplier : {:.4}", result.uncapped_multiplier)?;
    writeln!(
        out,
        "Final Multiplier    : {:.4}  (capped to [{:.2}, {:.2}])",
        result.final_multiplier, bounds.min, bounds.max
    )?;
    writeln!(out, "Projected Points    : {:.2}", result.projection)?;
    writeln!(out)?;
    Ok(())
}
