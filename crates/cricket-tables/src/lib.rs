//! Difficulty-keyed probability tables consulted by the catch and ground
//! fielding engines, and the dropped-catch partial-run draw tuples.
//!
//! Kept as its own crate because these numbers are the part of the engine
//! most likely to be recalibrated in isolation, without touching any solver
//! logic in `cricket-catch` / `cricket-fielding`.
#![forbid(unsafe_code)]

use cricket_core::DifficultyLevel;

/// Catch-probability modifier applied to the continuous difficulty curve
/// (§4.5): `p = (0.98 - 0.52 * D) * modifier`, clamped to 0.99.
pub fn catch_probability_modifier(difficulty: DifficultyLevel) -> f64 {
    match difficulty {
        DifficultyLevel::Easy => 0.85,
        DifficultyLevel::Medium => 1.00,
        DifficultyLevel::Hard => 1.15,
    }
}

/// The three ground-fielding roll outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldingRoll {
    Stopped,
    Fumbled,
    Escaped,
}

/// `(stopped, fumbled, escaped)` probability triple for a difficulty level
/// (§4.6). The three probabilities sum to 1.0.
pub fn ground_fielding_triple(difficulty: DifficultyLevel) -> (f64, f64, f64) {
    match difficulty {
        DifficultyLevel::Easy => (0.70, 0.20, 0.10),
        DifficultyLevel::Medium => (0.85, 0.10, 0.05),
        DifficultyLevel::Hard => (0.95, 0.04, 0.01),
    }
}

/// Roll a ground-fielding outcome from a single uniform draw `u in [0, 1)`.
pub fn roll_ground_fielding(difficulty: DifficultyLevel, u: f64) -> FieldingRoll {
    let (stopped, fumbled, _escaped) = ground_fielding_triple(difficulty);
    if u < stopped {
        FieldingRoll::Stopped
    } else if u < stopped + fumbled {
        FieldingRoll::Fumbled
    } else {
        FieldingRoll::Escaped
    }
}

/// Zone a dropped catch landed in, selecting which partial-run tuple
/// applies (§4.5, §9 "Open questions": this is a calibration choice, not
/// derived from time, and is preserved as-is).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropZone {
    /// Inside the inner ring (landing distance < 30 m).
    Inner,
    /// Mid-field (30 m <= landing distance < 50 m).
    MidField,
    /// Deep (landing distance >= 50 m).
    Deep,
}

impl DropZone {
    pub fn from_landing_distance(distance_m: f64) -> Self {
        if distance_m < 30.0 {
            Self::Inner
        } else if distance_m < 50.0 {
            Self::MidField
        } else {
            Self::Deep
        }
    }

    /// The discrete run tuple a dropped catch in this zone draws from.
    pub fn run_tuple(self) -> &'static [u8] {
        match self {
            Self::Inner => &[1],
            Self::MidField => &[1, 1, 2],
            Self::Deep => &[2, 2, 3],
        }
    }
}

/// Draw one run count from this zone's tuple using a uniform `u in [0, 1)`.
pub fn draw_dropped_catch_runs(zone: DropZone, u: f64) -> u8 {
    let tuple = zone.run_tuple();
    let idx = ((u * tuple.len() as f64) as usize).min(tuple.len() - 1);
    tuple[idx]
}
