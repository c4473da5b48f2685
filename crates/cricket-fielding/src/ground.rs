//! Ground Fielding Engine (§4.6): invoked only when the shot is not a six
//! and has not been caught or dropped as a catchable chance. Computes a
//! ball-travel + collection + throw-to-stumps time budget and converts it
//! to an integer run count.

use cricket_core::geometry::point_to_segment;
use cricket_core::{EngineConfig, Fielder, Trajectory};
use cricket_tables::{roll_ground_fielding, FieldingRoll};
use nalgebra::Vector2;

/// Whether `fielder` is eligible to field this ball along the direct path
/// (§4.6 eligibility: forward hemisphere, segment parameter, reach).
pub fn is_fielding_eligible(fielder: &Fielder, traj: &Trajectory, cfg: &EngineConfig) -> bool {
    let f = Vector2::new(fielder.x, fielder.y);
    let landing_dir = traj.direction();
    let dist_to_batter = f.norm();

    let forward_component = f.dot(&landing_dir);
    let forward_ok = if dist_to_batter < 10.0 {
        forward_component > -5.0
    } else {
        forward_component > 0.0
    };
    if !forward_ok {
        return false;
    }

    let seg = point_to_segment(f, Vector2::new(0.0, 0.0), traj.landing());
    if seg.t < 0.05 {
        return false;
    }

    let movement_during_flight =
        (traj.time_of_flight - cfg.fielder_reaction_time).max(0.0) * cfg.fielder_run_speed;
    seg.distance <= cfg.ground_fielding_range + movement_during_flight
}

/// Geometry of a fielder's ground-fielding attempt along the direct flight
/// path: how far down the line their closest point sits, and how far
/// laterally they stand from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldingGeometry {
    pub intercept_distance: f64,
    pub lateral: f64,
}

/// Eligibility plus the geometry needed to rank and resolve an attempt, in
/// one pass over the point-to-segment projection.
pub fn fielding_candidate(fielder: &Fielder, traj: &Trajectory, cfg: &EngineConfig) -> Option<FieldingGeometry> {
    if !is_fielding_eligible(fielder, traj, cfg) {
        return None;
    }
    let f = Vector2::new(fielder.x, fielder.y);
    let seg = point_to_segment(f, Vector2::new(0.0, 0.0), traj.landing());
    Some(FieldingGeometry { intercept_distance: seg.closest.norm(), lateral: seg.distance })
}

/// Friction-decayed average ground speed (m/s) a ball rolls at over
/// `intercept_distance` metres, given its exit speed (§4.6 step 1).
pub fn average_ground_speed(exit_speed_kmh: f64, intercept_distance: f64, cfg: &EngineConfig) -> f64 {
    let exit_ms = exit_speed_kmh / 3.6;
    let decayed = exit_ms * (-cfg.ground_friction * intercept_distance * 0.5).exp();
    decayed.max(cfg.ground_speed_floor)
}

/// Nearest-stumps throw distance from fielder position `f` (§4.6 step 4).
pub fn throw_distance_to_stumps(f: Vector2<f64>, cfg: &EngineConfig) -> f64 {
    let far_stumps = Vector2::new(0.0, cfg.pitch_length);
    f.norm().min((f - far_stumps).norm())
}

/// Collection time (s) for an effective lateral gap, per the three-tier
/// model of §4.6 step 3.
pub fn collection_time(effective_lateral: f64, cfg: &EngineConfig) -> f64 {
    if effective_lateral < 0.5 {
        cfg.collection_clean
    } else if effective_lateral < 2.0 {
        cfg.collection_moving
    } else {
        cfg.collection_dive
    }
}

/// The full time budget (s) for one fielder's ground-fielding attempt, and
/// the effective lateral gap it closed during the ball's flight.
pub struct TimeBudget {
    pub total_seconds: f64,
    pub effective_lateral: f64,
}

/// Compute the base time budget for `fielder` intercepting the ball at
/// `intercept_distance` (m from the batter) with lateral offset `lateral`
/// (m), before any outcome-specific penalty (§4.6 steps 1-4).
pub fn compute_base_budget(
    exit_speed_kmh: f64,
    intercept_distance: f64,
    lateral: f64,
    fielder: &Fielder,
    cfg: &EngineConfig,
) -> TimeBudget {
    let avg_speed = average_ground_speed(exit_speed_kmh, intercept_distance, cfg);
    let ball_time = intercept_distance / avg_speed.max(1e-9);

    let effective_lateral = (lateral - (ball_time - cfg.fielder_reaction_time).max(0.0) * cfg.fielder_run_speed).max(0.0);
    let collection = collection_time(effective_lateral, cfg);

    let throw_distance = throw_distance_to_stumps(Vector2::new(fielder.x, fielder.y), cfg).max(0.1);
    let throw_time = throw_distance / cfg.throw_speed;

    TimeBudget { total_seconds: ball_time + collection + throw_time, effective_lateral }
}

/// Convert a total time budget (s) to an integer run count, capped at 3
/// (§4.6's time-to-runs conversion).
pub fn time_to_runs(total_seconds: f64, cfg: &EngineConfig) -> u8 {
    if total_seconds < cfg.time_for_first_run {
        0
    } else if total_seconds < cfg.time_for_first_run + cfg.time_for_extra_run {
        1
    } else if total_seconds < cfg.time_for_first_run + 2.0 * cfg.time_for_extra_run {
        2
    } else {
        3
    }
}

/// The resolved outcome of one ground-fielding attempt.
pub struct GroundFieldingAttempt {
    pub roll: FieldingRoll,
    pub runs: u8,
}

/// Roll and resolve a ground-fielding attempt at `intercept_distance`/`lateral`
/// for `fielder`, applying the outcome-specific time penalty (§4.6 step 5).
pub fn resolve_attempt(
    exit_speed_kmh: f64,
    intercept_distance: f64,
    lateral: f64,
    fielder: &Fielder,
    difficulty: cricket_core::DifficultyLevel,
    u: f64,
    cfg: &EngineConfig,
) -> GroundFieldingAttempt {
    let budget = compute_base_budget(exit_speed_kmh, intercept_distance, lateral, fielder, cfg);
    let roll = roll_ground_fielding(difficulty, u);

    let penalized = match roll {
        FieldingRoll::Stopped => budget.total_seconds,
        FieldingRoll::Fumbled => budget.total_seconds + cfg.fumble_penalty,
        FieldingRoll::Escaped => budget.total_seconds + cfg.misfield_penalty,
    };

    let mut runs = time_to_runs(penalized, cfg);
    if roll == FieldingRoll::Fumbled && runs == 0 {
        runs = 1;
    }

    GroundFieldingAttempt { roll, runs }
}
