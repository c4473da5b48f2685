//! Ground Fielding Engine (§4.6) and Outcome Arbiter (§4.7): the last stage
//! of the pipeline, turning a sanitized delivery plus its trajectory into
//! the stable [`cricket_core::SimulationResult`] returned to callers.
#![forbid(unsafe_code)]

pub mod arbiter;
pub mod ground;

pub use arbiter::{simulate_delivery, simulate_delivery_checked};
pub use ground::{FieldingGeometry, GroundFieldingAttempt, TimeBudget};
