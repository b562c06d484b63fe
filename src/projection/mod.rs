//! Projection engine for single players and whole slates

mod engine;
pub mod factors;
mod result;

pub use engine::{project, ProjectionEngine};
pub use factors::{Factor, Multipliers, NEUTRAL};
pub use result::ProjectionResult;
