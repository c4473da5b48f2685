//! Input Normalizer (§4.1): validates and clamps raw numeric inputs,
//! normalizes the horizontal angle, and drops malformed fielder records.
//! Never fails — every adjustment is reported as a structured [`Warning`].

use serde::{Deserialize, Serialize};

use crate::constants::EngineConfig;
use crate::geometry::normalize_angle;
use crate::types::{DifficultyLevel, Fielder};

/// A single sanitization adjustment, reported for caller inspection (and
/// logged at `warn` level by the engine's entry point).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Warning {
    NonFiniteClamped { field: &'static str, replaced_with: f64 },
    OutOfRangeClamped { field: &'static str, min: f64, max: f64, clamped_to: f64 },
    FielderDropped { index: usize, reason: &'static str },
    UnknownDifficulty { given: String },
    EmptyFieldConfig,
}

/// Raw arguments as received at the `simulate_delivery` boundary, before any
/// validation.
#[derive(Debug, Clone)]
pub struct RawDelivery<'a> {
    pub exit_speed: f64,
    pub horizontal_angle: f64,
    pub vertical_angle: f64,
    pub landing_x: f64,
    pub landing_y: f64,
    pub projected_distance: f64,
    pub max_height: f64,
    pub field_config: &'a [Fielder],
    pub boundary_distance: f64,
    pub difficulty: &'a str,
}

/// The clamped, normalized form every downstream component consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedDelivery {
    pub exit_speed: f64,
    pub horizontal_angle: f64,
    pub vertical_angle: f64,
    pub landing_x: f64,
    pub landing_y: f64,
    pub projected_distance: f64,
    pub max_height: f64,
    pub field_config: Vec<Fielder>,
    pub boundary_distance: f64,
    pub difficulty: DifficultyLevel,
}

fn clamp_field(
    value: f64,
    field: &'static str,
    default_if_non_finite: f64,
    min: f64,
    max: f64,
    warnings: &mut Vec<Warning>,
) -> f64 {
    let v = if value.is_finite() {
        value
    } else {
        warnings.push(Warning::NonFiniteClamped { field, replaced_with: default_if_non_finite });
        default_if_non_finite
    };

    if v < min || v > max {
        let clamped = v.clamp(min, max);
        warnings.push(Warning::OutOfRangeClamped { field, min, max, clamped_to: clamped });
        clamped
    } else {
        v
    }
}

pub fn sanitize(raw: RawDelivery<'_>, cfg: &EngineConfig) -> (SanitizedDelivery, Vec<Warning>) {
    let mut warnings = Vec::new();

    let exit_speed = clamp_field(raw.exit_speed, "exit_speed", 0.0, 0.0, 200.0, &mut warnings);
    let vertical_angle = clamp_field(raw.vertical_angle, "vertical_angle", 0.0, 0.0, 90.0, &mut warnings);

    let horizontal_angle = if raw.horizontal_angle.is_finite() {
        normalize_angle(raw.horizontal_angle)
    } else {
        warnings.push(Warning::NonFiniteClamped { field: "horizontal_angle", replaced_with: 0.0 });
        0.0
    };

    let landing_x = if raw.landing_x.is_finite() {
        raw.landing_x
    } else {
        warnings.push(Warning::NonFiniteClamped { field: "landing_x", replaced_with: 0.0 });
        0.0
    };
    let landing_y = if raw.landing_y.is_finite() {
        raw.landing_y
    } else {
        warnings.push(Warning::NonFiniteClamped { field: "landing_y", replaced_with: 0.0 });
        0.0
    };

    let projected_distance =
        clamp_field(raw.projected_distance, "projected_distance", 0.0, 0.0, 150.0, &mut warnings);
    let max_height = clamp_field(raw.max_height, "max_height", 0.0, 0.0, 50.0, &mut warnings);

    let boundary_distance = if !raw.boundary_distance.is_finite() || raw.boundary_distance <= 0.0 {
        warnings.push(Warning::NonFiniteClamped {
            field: "boundary_distance",
            replaced_with: cfg.default_boundary_distance,
        });
        cfg.default_boundary_distance
    } else {
        raw.boundary_distance
    };

    let mut field_config = Vec::with_capacity(raw.field_config.len());
    for (index, f) in raw.field_config.iter().enumerate() {
        if !f.x.is_finite() || !f.y.is_finite() {
            warnings.push(Warning::FielderDropped { index, reason: "non-finite coordinate" });
            continue;
        }
        let name = if f.name.is_empty() { format!("fielder_{index}") } else { f.name.clone() };
        field_config.push(Fielder { x: f.x, y: f.y, name });
    }
    if field_config.is_empty() {
        warnings.push(Warning::EmptyFieldConfig);
    }

    let (difficulty, recognized) = DifficultyLevel::parse_lossy(raw.difficulty);
    if !recognized {
        warnings.push(Warning::UnknownDifficulty { given: raw.difficulty.to_string() });
    }

    (
        SanitizedDelivery {
            exit_speed,
            horizontal_angle,
            vertical_angle,
            landing_x,
            landing_y,
            projected_distance,
            max_height,
            field_config,
            boundary_distance,
            difficulty,
        },
        warnings,
    )
}
