//! Shared data model: fielders, difficulty levels, catch analysis, and the
//! stable result record returned by the engine.

use serde::{Deserialize, Serialize};

/// An immutable fielding position. Identity is by `name` only; duplicate
/// names are permitted and the engine never relies on uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fielder {
    pub x: f64,
    pub y: f64,
    pub name: String,
}

/// Ground-fielding difficulty setting: selects a probability triple and a
/// catch-probability modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
}

impl DifficultyLevel {
    /// Parses a lowercase difficulty string, degrading unknown values to
    /// `Medium` rather than failing (§4.1, §7).
    pub fn parse_lossy(s: &str) -> (Self, bool) {
        match s {
            "easy" => (Self::Easy, true),
            "medium" => (Self::Medium, true),
            "hard" => (Self::Hard, true),
            _ => (Self::Medium, false),
        }
    }
}

impl Default for DifficultyLevel {
    fn default() -> Self {
        Self::Medium
    }
}

/// Descriptive tier of a catch's continuous difficulty score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatchType {
    Regulation,
    Hard,
    Spectacular,
}

/// Per-(fielder, shot) analysis produced when a catch attempt is possible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatchAnalysis {
    pub can_catch: bool,
    pub difficulty: f64,
    pub catch_type: Option<CatchType>,
    /// Fixed fielder reaction time before movement begins, seconds
    /// (`EngineConfig::fielder_reaction_time`, carried per-attempt for the
    /// JSON schema rather than re-derived by the caller).
    pub reaction_time: f64,
    pub movement_required: f64,
    pub movement_possible: f64,
    pub ball_speed_at_fielder: f64,
    pub height_at_intercept: f64,
    /// Sampled flight time at which the intercept was found, seconds.
    pub time_to_intercept: f64,
}

/// A 2-D ground point, used for `fielder_position` / `end_position` in the
/// JSON schema.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// The discrete outcome tag of a delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotOutcome {
    Dot,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "6")]
    Six,
    Caught,
    Dropped,
    Misfield,
}

impl ShotOutcome {
    pub fn runs(self) -> u8 {
        match self {
            Self::Dot | Self::Caught => 0,
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Six => 6,
            // Dropped/misfield runs are carried separately on the result;
            // this default only applies when no other run count was set.
            Self::Dropped | Self::Misfield => 0,
        }
    }
}

/// The stable result record returned by `simulate_delivery`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub outcome: ShotOutcome,
    pub runs: u8,
    pub is_boundary: bool,
    pub is_aerial: bool,
    pub fielder_involved: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fielder_position: Option<Point>,
    pub end_position: Point,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catch_analysis: Option<CatchAnalysis>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_difficulty_degrades_to_medium() {
        let (level, recognized) = DifficultyLevel::parse_lossy("extreme");
        assert_eq!(level, DifficultyLevel::Medium);
        assert!(!recognized);
    }

    #[test]
    fn known_difficulty_round_trips() {
        let (level, recognized) = DifficultyLevel::parse_lossy("hard");
        assert_eq!(level, DifficultyLevel::Hard);
        assert!(recognized);
    }

    #[test]
    fn outcome_json_matches_schema() {
        let json = serde_json::to_string(&ShotOutcome::Six).unwrap();
        assert_eq!(json, "\"6\"");
        let json = serde_json::to_string(&ShotOutcome::Dot).unwrap();
        assert_eq!(json, "\"dot\"");
    }
}
