//! Points Projection - Configurable projection model for basketball player points
//!
//! This library provides:
//! - A pure projection engine blending the sportsbook line with the season average
//! - Eight capped multiplicative context adjustments (venue, totals, matchup, form, minutes, pace, rest)
//! - Calibration profiles loadable from JSON
//! - Interactive prompting, slate CSV processing and text reporting for the binaries

pub mod calibration;
pub mod error;
pub mod player;
pub mod projection;
pub mod report;

// Re-export commonly used types
pub use calibration::Calibration;
pub use error::{CalibrationError, InputError};
pub use player::PlayerInputs;
pub use projection::{project, Factor, Multipliers, ProjectionEngine, ProjectionResult};
