//! Outcome Arbiter (§4.7): orchestrates the ordered checks — six, catch,
//! four, ground fielding, nearest-fielder retrieval fallback — and builds
//! the stable result record. This module owns the one public entry point,
//! `simulate_delivery`.

use cricket_catch::{analyze_catch, is_catch_eligible, roll_catch, to_catch_analysis};
use cricket_core::classifier::{classify, is_aerial};
use cricket_core::geometry::distance;
use cricket_core::sanitize::{sanitize, RawDelivery, Warning};
use cricket_core::trajectory::compute_trajectory;
use cricket_core::{EngineConfig, Fielder, Point, RandomSource, ShotOutcome, SimulationResult, Trajectory};
use cricket_tables::{draw_dropped_catch_runs, DropZone};
use nalgebra::Vector2;

use crate::ground::{average_ground_speed, fielding_candidate, resolve_attempt, throw_distance_to_stumps, time_to_runs};
use cricket_tables::FieldingRoll;

fn boundary_point(traj: &Trajectory, boundary: f64) -> Point {
    let dir = traj.direction();
    Point { x: dir.x * boundary, y: dir.y * boundary }
}

fn landing_point(traj: &Trajectory) -> Point {
    Point { x: traj.landing_x, y: traj.landing_y }
}

fn outcome_for_runs(runs: u8) -> ShotOutcome {
    match runs {
        0 => ShotOutcome::Dot,
        1 => ShotOutcome::One,
        2 => ShotOutcome::Two,
        3 => ShotOutcome::Three,
        _ => ShotOutcome::Three,
    }
}

/// The single, pure entry point: run the whole pipeline for one delivery
/// and return the stable `SimulationResult`. Sanitization warnings are
/// logged (see crate docs) rather than returned; use
/// [`simulate_delivery_checked`] to get them back directly.
#[allow(clippy::too_many_arguments)]
pub fn simulate_delivery(
    exit_speed: f64,
    horizontal_angle: f64,
    vertical_angle: f64,
    landing_x: f64,
    landing_y: f64,
    projected_distance: f64,
    max_height: f64,
    field_config: &[Fielder],
    boundary_distance: f64,
    difficulty: &str,
    rng: &mut dyn RandomSource,
) -> SimulationResult {
    let (result, warnings) = simulate_delivery_checked(
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
        rng,
    );
    for warning in &warnings {
        log::warn!("sanitization warning: {warning:?}");
    }
    result
}

/// Same as [`simulate_delivery`] but also returns the sanitization warnings
/// collected along the way, for callers that want to inspect or surface
/// them rather than rely on the `log` facade.
#[allow(clippy::too_many_arguments)]
pub fn simulate_delivery_checked(
    exit_speed: f64,
    horizontal_angle: f64,
    vertical_angle: f64,
    landing_x: f64,
    landing_y: f64,
    projected_distance: f64,
    max_height: f64,
    field_config: &[Fielder],
    boundary_distance: f64,
    difficulty: &str,
    rng: &mut dyn RandomSource,
) -> (SimulationResult, Vec<Warning>) {
    let cfg = EngineConfig::default();

    let raw = RawDelivery {
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
    };
    let (clean, warnings) = sanitize(raw, &cfg);

    let traj = compute_trajectory(
        clean.exit_speed,
        clean.horizontal_angle,
        clean.vertical_angle,
        clean.landing_x,
        clean.landing_y,
        clean.projected_distance,
        clean.max_height,
        &cfg,
    );
    let aerial = is_aerial(traj.max_height, clean.vertical_angle);
    let description = classify(clean.horizontal_angle, aerial).to_string();

    let result = resolve(&clean, &traj, aerial, &description, &cfg, rng);

    log::debug!(
        "simulate_delivery: outcome={:?} runs={} fielder={:?}",
        result.outcome,
        result.runs,
        result.fielder_involved
    );

    (result, warnings)
}

fn resolve(
    clean: &cricket_core::SanitizedDelivery,
    traj: &Trajectory,
    aerial: bool,
    description: &str,
    cfg: &EngineConfig,
    rng: &mut dyn RandomSource,
) -> SimulationResult {
    let boundary = clean.boundary_distance;

    // No fielders at all: degenerate boundary-four fallback (§4.7 step 6).
    if clean.field_config.is_empty() {
        return SimulationResult {
            outcome: ShotOutcome::Four,
            runs: 4,
            is_boundary: true,
            is_aerial: aerial,
            fielder_involved: None,
            fielder_position: None,
            end_position: boundary_point(traj, boundary),
            description: description.to_string(),
            catch_analysis: None,
        };
    }

    // 1. Six.
    let height_at_boundary = traj.height_at_distance(boundary, clean.vertical_angle, cfg);
    if traj.projected_distance >= boundary && aerial && height_at_boundary > 0.5 {
        return SimulationResult {
            outcome: ShotOutcome::Six,
            runs: 6,
            is_boundary: true,
            is_aerial: aerial,
            fielder_involved: None,
            fielder_position: None,
            end_position: boundary_point(traj, boundary),
            description: description.to_string(),
            catch_analysis: None,
        };
    }

    // 2. Catches: rank eligible, reachable fielders by intercept distance
    // from the batter, closest first.
    let mut catch_candidates: Vec<(&Fielder, cricket_catch::CatchAttempt, f64)> = Vec::new();
    for fielder in &clean.field_config {
        if !is_catch_eligible(fielder, traj, cfg) {
            continue;
        }
        if let Some(attempt) = analyze_catch(fielder, traj, clean.exit_speed, cfg) {
            let (ix, iy, _) = traj.position_at(attempt.time_to_intercept, cfg);
            let intercept_dist = (ix * ix + iy * iy).sqrt();
            catch_candidates.push((fielder, attempt, intercept_dist));
        }
    }
    catch_candidates.sort_by(|a, b| a.2.partial_cmp(&b.2).unwrap());

    for (fielder, attempt, _) in &catch_candidates {
        let caught = roll_catch(attempt, clean.difficulty, rng);
        let analysis = to_catch_analysis(attempt, caught, cfg);

        if caught {
            let (ix, iy, _) = traj.position_at(attempt.time_to_intercept, cfg);
            return SimulationResult {
                outcome: ShotOutcome::Caught,
                runs: 0,
                is_boundary: false,
                // A ball taken in flight is aerial by definition, even when
                // it fell under the classifier's own aerial threshold (catch
                // eligibility gates on max_height, not on `aerial`).
                is_aerial: true,
                fielder_involved: Some(fielder.name.clone()),
                fielder_position: Some(Point { x: fielder.x, y: fielder.y }),
                end_position: Point { x: ix, y: iy },
                description: description.to_string(),
                catch_analysis: Some(analysis),
            };
        }

        // Dropped: terminates the shot for every fielder, not just this one.
        if traj.projected_distance >= boundary {
            return SimulationResult {
                outcome: ShotOutcome::Four,
                runs: 4,
                is_boundary: true,
                is_aerial: aerial,
                fielder_involved: Some(fielder.name.clone()),
                fielder_position: Some(Point { x: fielder.x, y: fielder.y }),
                end_position: boundary_point(traj, boundary),
                description: description.to_string(),
                catch_analysis: Some(analysis),
            };
        }

        let zone = DropZone::from_landing_distance(traj.projected_distance);
        let runs = draw_dropped_catch_runs(zone, rng.next_uniform());
        return SimulationResult {
            outcome: ShotOutcome::Dropped,
            runs,
            is_boundary: false,
            is_aerial: aerial,
            fielder_involved: Some(fielder.name.clone()),
            fielder_position: Some(Point { x: fielder.x, y: fielder.y }),
            end_position: landing_point(traj),
            description: description.to_string(),
            catch_analysis: Some(analysis),
        };
    }

    // 3. Four.
    if traj.projected_distance >= boundary {
        return SimulationResult {
            outcome: ShotOutcome::Four,
            runs: 4,
            is_boundary: true,
            is_aerial: aerial,
            fielder_involved: None,
            fielder_position: None,
            end_position: boundary_point(traj, boundary),
            description: description.to_string(),
            catch_analysis: None,
        };
    }

    // 4. Ground fielding: rank eligible candidates by lateral distance
    // ascending.
    let mut ground_candidates: Vec<(&Fielder, crate::ground::FieldingGeometry)> = Vec::new();
    for fielder in &clean.field_config {
        if let Some(geo) = fielding_candidate(fielder, traj, cfg) {
            ground_candidates.push((fielder, geo));
        }
    }
    ground_candidates.sort_by(|a, b| a.1.lateral.partial_cmp(&b.1.lateral).unwrap());

    if let Some((fielder, geo)) = ground_candidates.first() {
        let attempt = resolve_attempt(
            clean.exit_speed,
            geo.intercept_distance,
            geo.lateral,
            fielder,
            clean.difficulty,
            rng.next_uniform(),
            cfg,
        );

        let escaped = attempt.roll == FieldingRoll::Escaped;
        let outcome = if attempt.roll == FieldingRoll::Stopped && attempt.runs == 0 {
            ShotOutcome::Dot
        } else if attempt.roll == FieldingRoll::Stopped {
            outcome_for_runs(attempt.runs)
        } else {
            ShotOutcome::Misfield
        };

        return SimulationResult {
            outcome,
            runs: attempt.runs,
            is_boundary: false,
            is_aerial: aerial,
            fielder_involved: Some(fielder.name.clone()),
            fielder_position: Some(Point { x: fielder.x, y: fielder.y }),
            end_position: if escaped { landing_point(traj) } else { Point { x: fielder.x, y: fielder.y } },
            description: description.to_string(),
            catch_analysis: None,
        };
    }

    // 5. Retrieval fallback: nearest fielder to the landing point.
    let landing = traj.landing();
    let nearest = clean
        .field_config
        .iter()
        .min_by(|a, b| {
            let da = distance(Vector2::new(a.x, a.y), landing);
            let db = distance(Vector2::new(b.x, b.y), landing);
            da.partial_cmp(&db).unwrap()
        })
        .expect("field_config is non-empty on this path");

    let travel_distance = traj.projected_distance;
    let avg_speed = average_ground_speed(clean.exit_speed, travel_distance, cfg);
    let ball_time = travel_distance / avg_speed.max(1e-9);

    let fielder_to_landing = distance(Vector2::new(nearest.x, nearest.y), landing);
    let movement_during_flight = (ball_time - cfg.fielder_reaction_time).max(0.0) * cfg.fielder_run_speed;
    let effective_remaining = (fielder_to_landing - movement_during_flight).max(0.0);
    let run_time = effective_remaining / cfg.fielder_run_speed;

    let throw_distance = throw_distance_to_stumps(Vector2::new(nearest.x, nearest.y), cfg).max(0.1);
    let throw_time = throw_distance / cfg.throw_speed;

    let total = ball_time + run_time + cfg.pickup_time_stopped + throw_time;
    let runs = time_to_runs(total, cfg);

    SimulationResult {
        outcome: outcome_for_runs(runs),
        runs,
        is_boundary: false,
        is_aerial: aerial,
        fielder_involved: Some(nearest.name.clone()),
        fielder_position: Some(Point { x: nearest.x, y: nearest.y }),
        end_position: landing_point(traj),
        description: description.to_string(),
        catch_analysis: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cricket_core::rng::ScriptedRng;

    fn fielders() -> Vec<Fielder> {
        vec![
            Fielder { x: 22.0, y: -30.0, name: "cover".into() },
            Fielder { x: 5.0, y: -10.0, name: "point".into() },
        ]
    }

    #[test]
    fn no_fielders_is_always_a_boundary_four() {
        let mut rng = ScriptedRng::new(vec![0.5]);
        let result = simulate_delivery(70.0, 10.0, 20.0, 5.0, -60.0, 60.0, 8.0, &[], 65.0, "medium", &mut rng);
        assert_eq!(result.outcome, ShotOutcome::Four);
        assert_eq!(result.runs, 4);
        assert!(result.fielder_involved.is_none());
    }

    #[test]
    fn lofted_shot_straight_at_a_fielder_can_be_caught() {
        let mut rng = ScriptedRng::new(vec![0.0, 0.0, 0.0]);
        let result = simulate_delivery(
            70.0, 32.0, 18.0, 22.0, -32.0, 39.0, 6.0, &fielders(), 65.0, "medium", &mut rng,
        );
        assert_eq!(result.outcome, ShotOutcome::Caught);
        assert_eq!(result.runs, 0);
        assert!(result.catch_analysis.is_some());
    }

    #[test]
    fn low_flat_shot_past_everyone_is_a_four() {
        let mut rng = ScriptedRng::new(vec![0.9, 0.9, 0.9]);
        let result = simulate_delivery(
            90.0, 0.0, 1.0, 0.0, -68.0, 68.0, 0.3, &fielders(), 65.0, "medium", &mut rng,
        );
        assert!(matches!(result.outcome, ShotOutcome::Four | ShotOutcome::Six));
    }

    #[test]
    fn gentle_shot_at_a_nearby_fielder_stays_ground_bound() {
        let mut rng = ScriptedRng::new(vec![0.1, 0.1]);
        let result = simulate_delivery(
            40.0, 5.0, 2.0, 5.0, -10.0, 11.0, 0.2, &fielders(), 65.0, "medium", &mut rng,
        );
        assert!(result.runs <= 3);
        assert!(!result.is_boundary);
    }

    #[test]
    fn a_low_shot_taken_in_flight_is_still_reported_as_aerial() {
        // Apex ~1.27m at an 8 degree launch angle sits under the classifier's
        // own aerial threshold (height > 1.5 or angle > 10), yet it's well
        // inside the catchable band (0.2..4.0m), so a short fielder straight
        // down the pitch can still take it in flight.
        let mut rng = ScriptedRng::new(vec![0.0]);
        let close_in = vec![Fielder { x: 0.0, y: -8.0, name: "short mid-on".into() }];
        let result = simulate_delivery(
            60.0, 0.0, 8.0, 0.0, -12.33, 0.0, 0.0, &close_in, 65.0, "medium", &mut rng,
        );
        assert_eq!(result.outcome, ShotOutcome::Caught);
        assert!(result.is_aerial);
    }
}
