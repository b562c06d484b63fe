//! Error types for calibration loading and input collection
//!
//! The projection engine itself never fails; only the surrounding
//! collaborators do.

use thiserror::Error;

/// Failure while loading or validating a calibration profile
#[derive(Debug, Error)]
pub enum CalibrationError {
    #[error("failed to read calibration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse calibration JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("calibration value `{field}` must be finite")]
    NonFinite { field: &'static str },

    #[error("multiplier bounds are inverted: min {min} > max {max}")]
    InvertedBounds { min: f64, max: f64 },
}

/// Failure while collecting player inputs or writing projected slates
#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error while reading inputs: {0}")]
    Io(#[from] std::io::Error),

    #[error("slate CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write projections: {0}")]
    Output(csv::Error),

    #[error("input ended before `{field}` was provided")]
    EndOfInput { field: &'static str },
}
