//! Geometry, trajectory, input sanitization, and the shared data model for
//! the cricket shot outcome engine.
//!
//! This crate is deliberately inert: it has no notion of fielding,
//! catching, or scoring. Those live in `cricket-catch` and
//! `cricket-fielding`, which depend on the types and math defined here.

#![forbid(unsafe_code)]

pub mod classifier;
pub mod constants;
pub mod geometry;
pub mod rng;
pub mod sanitize;
pub mod trajectory;
pub mod types;

pub use constants::EngineConfig;
pub use rng::{RandomSource, ScriptedRng, SeededRng};
pub use sanitize::{sanitize, RawDelivery, SanitizedDelivery, Warning};
pub use trajectory::{compute_trajectory, Trajectory};
pub use types::{CatchAnalysis, CatchType, DifficultyLevel, Fielder, Point, ShotOutcome, SimulationResult};
