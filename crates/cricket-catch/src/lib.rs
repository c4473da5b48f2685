//! Catch Engine (§4.5): for each eligible fielder, a bounded temporal search
//! over the trajectory finds the best catchable intercept, scores its
//! difficulty from four weighted components, and rolls a caught/dropped
//! outcome.
#![forbid(unsafe_code)]

use cricket_core::geometry::point_to_segment;
use cricket_core::{CatchAnalysis, CatchType, DifficultyLevel, EngineConfig, Fielder, RandomSource, Trajectory};
use cricket_tables::catch_probability_modifier;
use nalgebra::Vector2;

/// Whether `fielder` is eligible to attempt a catch on this trajectory
/// (§4.5, eligibility rules 1-3).
///
/// Gated on `max_height` rather than the aerial classification: any shot
/// that gets high enough to be catchable is considered, even a flat-looking
/// one, per the outcome arbiter's generalization from earlier revisions.
pub fn is_catch_eligible(fielder: &Fielder, traj: &Trajectory, cfg: &EngineConfig) -> bool {
    if traj.max_height < cfg.catch_height_min {
        return false;
    }

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

    if dist_to_batter > traj.projected_distance + cfg.catch_extended_range {
        return false;
    }

    let seg = point_to_segment(f, Vector2::new(0.0, 0.0), traj.landing());
    seg.t >= 0.05
}

/// Best catchable sample found for a fielder's temporal search.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Intercept {
    t: f64,
    lateral: f64,
    height: f64,
    in_optimal_band: bool,
}

/// Sample the trajectory and find the best catchable intercept for
/// `fielder`, or `None` if no sample in `[0.1, time_of_flight]` is
/// reachable.
fn find_best_intercept(fielder: &Fielder, traj: &Trajectory, cfg: &EngineConfig) -> Option<Intercept> {
    let f = Vector2::new(fielder.x, fielder.y);
    let step = cfg.trajectory_time_step;

    let mut best: Option<Intercept> = None;
    let mut t = 0.1_f64;
    while t <= traj.time_of_flight {
        let (x, y, z) = traj.position_at(t, cfg);
        if z >= cfg.catch_height_min && z <= cfg.catch_height_max {
            let ball = Vector2::new(x, y);
            let lateral = (f - ball).norm();
            let reach = (t - cfg.fielder_reaction_time).max(0.0) * cfg.fielder_run_speed
                + cfg.fielder_dive_range;

            if lateral <= reach {
                let in_optimal = z >= cfg.catch_optimal_min && z <= cfg.catch_optimal_max;
                let candidate = Intercept { t, lateral, height: z, in_optimal_band: in_optimal };

                best = Some(match best {
                    None => candidate,
                    Some(current) => pick_better(current, candidate, reach, cfg),
                });
            }
        }
        t += step;
    }
    best
}

/// Prefer the optimal-height sample with the largest slack (movement
/// margin); if neither (or both) is optimal, prefer the one closest to the
/// optimal band.
fn pick_better(current: Intercept, candidate: Intercept, reach_at_candidate: f64, cfg: &EngineConfig) -> Intercept {
    match (current.in_optimal_band, candidate.in_optimal_band) {
        (true, true) => {
            let slack_current = reach_at_candidate - current.lateral;
            let slack_candidate = reach_at_candidate - candidate.lateral;
            if slack_candidate > slack_current {
                candidate
            } else {
                current
            }
        }
        (false, true) => candidate,
        (true, false) => current,
        (false, false) => {
            let mid = (cfg.catch_optimal_min + cfg.catch_optimal_max) / 2.0;
            if (candidate.height - mid).abs() < (current.height - mid).abs() {
                candidate
            } else {
                current
            }
        }
    }
}

/// The four weighted difficulty components plus the combined score and a
/// `CatchAnalysis` ready for the JSON schema (missing only `can_catch`,
/// which the caller sets based on the overall roll).
pub struct CatchAttempt {
    pub difficulty: f64,
    pub catch_type: CatchType,
    pub time_to_intercept: f64,
    pub movement_required: f64,
    pub movement_possible: f64,
    pub ball_speed_kmh: f64,
    pub height_at_intercept: f64,
}

/// Score a fielder's best intercept into a [`CatchAttempt`], or `None` if
/// the fielder cannot reach any catchable sample.
pub fn analyze_catch(
    fielder: &Fielder,
    traj: &Trajectory,
    exit_speed_kmh: f64,
    cfg: &EngineConfig,
) -> Option<CatchAttempt> {
    let intercept = find_best_intercept(fielder, traj, cfg)?;

    let reaction = (1.0 - (intercept.t - 0.5) / 1.5).clamp(0.0, 1.0);

    let movement = if intercept.lateral <= cfg.fielder_static_range {
        0.0
    } else if intercept.lateral <= cfg.fielder_dive_range {
        let span = (cfg.fielder_dive_range - cfg.fielder_static_range).max(1e-9);
        let frac = (intercept.lateral - cfg.fielder_static_range) / span;
        0.3 + frac * (0.5 - 0.3)
    } else {
        let run_budget = (intercept.t - cfg.fielder_reaction_time).max(0.0) * cfg.fielder_run_speed;
        let run_needed = (intercept.lateral - cfg.fielder_dive_range).max(0.0);
        let max_run_available = run_budget.max(1e-9);
        0.5 + (run_needed / max_run_available).clamp(0.0, 1.0) * 0.5
    };

    let height = if intercept.in_optimal_band {
        0.0
    } else if intercept.height < cfg.catch_optimal_min {
        ((cfg.catch_optimal_min - intercept.height) / 0.7).clamp(0.0, 1.0)
    } else {
        ((intercept.height - cfg.catch_optimal_max) / 1.7).clamp(0.0, 1.0)
    };

    let speed = ((exit_speed_kmh - 60.0) / 60.0).clamp(0.0, 1.0);

    let difficulty = cfg.catch_weight_reaction * reaction
        + cfg.catch_weight_movement * movement
        + cfg.catch_weight_height * height
        + cfg.catch_weight_speed * speed;

    let catch_type = if difficulty < 0.25 {
        CatchType::Regulation
    } else if difficulty < 0.6 {
        CatchType::Hard
    } else {
        CatchType::Spectacular
    };

    let movement_possible = (intercept.t - cfg.fielder_reaction_time).max(0.0) * cfg.fielder_run_speed
        + cfg.fielder_dive_range;

    Some(CatchAttempt {
        difficulty,
        catch_type,
        time_to_intercept: intercept.t,
        movement_required: intercept.lateral,
        movement_possible,
        ball_speed_kmh: exit_speed_kmh,
        height_at_intercept: intercept.height,
    })
}

/// Roll caught/dropped for a [`CatchAttempt`], per the difficulty-scaled
/// probability curve of §4.5.
pub fn roll_catch(attempt: &CatchAttempt, difficulty: DifficultyLevel, rng: &mut dyn RandomSource) -> bool {
    let base = 0.98 - 0.52 * attempt.difficulty;
    let p = (base * catch_probability_modifier(difficulty)).min(0.99);
    rng.next_uniform() < p
}

/// Build the JSON-schema `CatchAnalysis` for an attempt, given the final
/// caught/dropped verdict.
pub fn to_catch_analysis(attempt: &CatchAttempt, caught: bool, cfg: &EngineConfig) -> CatchAnalysis {
    CatchAnalysis {
        can_catch: caught,
        difficulty: attempt.difficulty,
        catch_type: Some(attempt.catch_type),
        reaction_time: cfg.fielder_reaction_time,
        movement_required: attempt.movement_required,
        movement_possible: attempt.movement_possible,
        ball_speed_at_fielder: attempt.ball_speed_kmh,
        height_at_intercept: attempt.height_at_intercept,
        time_to_intercept: attempt.time_to_intercept,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cricket_core::rng::ScriptedRng;
    use cricket_core::trajectory::compute_trajectory;

    fn trajectory(cfg: &EngineConfig) -> Trajectory {
        // Lofted shot straight down the ground, apex well within catching range.
        compute_trajectory(70.0, 32.0, 18.0, 22.0, -32.0, 39.0, 6.0, cfg)
    }

    #[test]
    fn close_fielder_in_the_flight_path_is_eligible() {
        let cfg = EngineConfig::default();
        let traj = trajectory(&cfg);
        let fielder = Fielder { x: 22.0, y: -30.0, name: "cover".into() };
        assert!(is_catch_eligible(&fielder, &traj, &cfg));
    }

    #[test]
    fn fielder_behind_the_batter_is_not_eligible() {
        let cfg = EngineConfig::default();
        let traj = trajectory(&cfg);
        let fielder = Fielder { x: -22.0, y: 30.0, name: "keeper".into() };
        assert!(!is_catch_eligible(&fielder, &traj, &cfg));
    }

    #[test]
    fn increasing_lateral_distance_never_decreases_difficulty() {
        let cfg = EngineConfig::default();
        let traj = trajectory(&cfg);
        let close = Fielder { x: 22.0, y: -30.0, name: "cover".into() };
        let far = Fielder { x: 30.0, y: -34.0, name: "deep cover".into() };

        let a = analyze_catch(&close, &traj, 70.0, &cfg);
        let b = analyze_catch(&far, &traj, 70.0, &cfg);
        if let (Some(a), Some(b)) = (a, b) {
            if b.movement_required >= a.movement_required {
                assert!(b.difficulty >= a.difficulty - 1e-9);
            }
        }
    }

    #[test]
    fn roll_is_deterministic_given_scripted_rng() {
        let cfg = EngineConfig::default();
        let traj = trajectory(&cfg);
        let fielder = Fielder { x: 22.0, y: -30.0, name: "cover".into() };
        let attempt = analyze_catch(&fielder, &traj, 70.0, &cfg).expect("reachable");

        let mut low = ScriptedRng::new(vec![0.0]);
        assert!(roll_catch(&attempt, DifficultyLevel::Medium, &mut low));

        let mut high = ScriptedRng::new(vec![0.999]);
        assert!(!roll_catch(&attempt, DifficultyLevel::Medium, &mut high));
    }
}
