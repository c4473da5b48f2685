//! Parabolic flight model: from (exit speed, horizontal angle, vertical
//! angle) plus the caller-supplied landing point, derive time of flight,
//! apex height, component speeds, a unit ground direction, and helpers to
//! evaluate height at a point in time or at a horizontal distance.

use nalgebra::Vector2;

use crate::constants::EngineConfig;
use crate::geometry::unit_vector;

/// A fully-derived ball flight, immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trajectory {
    pub projected_distance: f64,
    pub max_height: f64,
    pub landing_x: f64,
    pub landing_y: f64,
    pub time_of_flight: f64,
    pub horizontal_speed: f64,
    pub vertical_speed: f64,
    pub dir_x: f64,
    pub dir_y: f64,
}

impl Trajectory {
    pub fn direction(&self) -> Vector2<f64> {
        Vector2::new(self.dir_x, self.dir_y)
    }

    pub fn landing(&self) -> Vector2<f64> {
        Vector2::new(self.landing_x, self.landing_y)
    }

    /// Ball position `(x, y, z)` at time `t` seconds after contact, following
    /// the unit ground direction at the computed horizontal speed and the
    /// vertical kinematics from contact height `bat_height`.
    pub fn position_at(&self, t: f64, cfg: &EngineConfig) -> (f64, f64, f64) {
        let ground = self.direction() * (self.horizontal_speed * t);
        let z = (cfg.bat_height + self.vertical_speed * t - 0.5 * cfg.gravity * t * t).max(0.0);
        (ground.x, ground.y, z)
    }

    /// Height of the ball (m) at horizontal distance `d` (m) from the
    /// batter, using the piecewise model of the spec: flat shots descend
    /// linearly from `bat_height` to 0, lofted shots rise quadratically to
    /// `max_height` over an apex fraction of the distance and then fall
    /// quadratically to 0.
    pub fn height_at_distance(&self, d: f64, vertical_angle_deg: f64, cfg: &EngineConfig) -> f64 {
        if self.projected_distance <= 0.0 {
            return cfg.bat_height;
        }
        let frac = (d / self.projected_distance).clamp(0.0, 1.0);

        if vertical_angle_deg < 5.0 {
            return cfg.bat_height * (1.0 - frac);
        }

        let apex_frac = (0.3 + (vertical_angle_deg / 90.0) * 0.2).clamp(0.0, 1.0);
        if frac <= apex_frac {
            if apex_frac <= 0.0 {
                return self.max_height;
            }
            let u = frac / apex_frac;
            cfg.bat_height + (self.max_height - cfg.bat_height) * u * u
        } else {
            let remaining = (1.0 - apex_frac).max(1e-9);
            let u = (frac - apex_frac) / remaining;
            self.max_height * (1.0 - u * u)
        }
    }
}

/// Build a [`Trajectory`] from radar-derived exit speed/angles plus the
/// caller's landing coordinates and pre-computed distance/height.
///
/// `landing_x`/`landing_y` take priority for direction whenever their
/// magnitude is at least [`EngineConfig::min_shot_length`]; otherwise the
/// angle-derived direction is used. This matches the spec's rule that
/// landing coordinates are ground truth.
pub fn compute_trajectory(
    exit_speed_kmh: f64,
    horizontal_angle_deg: f64,
    vertical_angle_deg: f64,
    landing_x: f64,
    landing_y: f64,
    projected_distance: f64,
    max_height: f64,
    cfg: &EngineConfig,
) -> Trajectory {
    let caller_landing = Vector2::new(landing_x, landing_y);

    if exit_speed_kmh <= 0.0 {
        return Trajectory {
            projected_distance: 0.0,
            max_height: cfg.bat_height,
            landing_x: 0.0,
            landing_y: 0.0,
            time_of_flight: 0.0,
            horizontal_speed: 0.0,
            vertical_speed: 0.0,
            dir_x: 0.0,
            dir_y: -1.0,
        };
    }

    let v = exit_speed_kmh / 3.6;
    let v_rad = vertical_angle_deg.to_radians();
    let v_v = v * v_rad.sin();
    let v_h = v * v_rad.cos();

    let (time_of_flight, apex) = if v_v > 0.0 {
        let apex = cfg.bat_height + (v_v * v_v) / (2.0 * cfg.gravity);
        let t_up = v_v / cfg.gravity;
        let t_down = (2.0 * apex / cfg.gravity).sqrt();
        (t_up + t_down, apex)
    } else {
        ((2.0 * cfg.bat_height / cfg.gravity).sqrt(), cfg.bat_height)
    };

    // Near-vertical: negligible horizontal component, ball lands at origin.
    if v_h < 0.1 {
        return Trajectory {
            projected_distance: 0.0,
            max_height: apex,
            landing_x: 0.0,
            landing_y: 0.0,
            time_of_flight,
            horizontal_speed: v_h,
            vertical_speed: v_v,
            dir_x: 0.0,
            dir_y: -1.0,
        };
    }

    let angle_derived_distance = v_h * time_of_flight;
    let h_rad = horizontal_angle_deg.to_radians();
    let angle_direction = unit_vector(Vector2::new(-h_rad.sin(), -h_rad.cos()));

    let direction = if caller_landing.norm() >= cfg.min_shot_length {
        unit_vector(caller_landing)
    } else {
        angle_direction
    };

    let distance = if projected_distance > 0.0 {
        projected_distance
    } else {
        angle_derived_distance
    };

    let landing = direction * distance;

    // `position_at` walks the ground at a constant rate so the ball lands
    // exactly on `landing` at `time_of_flight`; this effective rate tracks
    // the physics-derived `v_h` only when the caller didn't override the
    // distance, and reconciles the two otherwise.
    let effective_horizontal_speed = distance / time_of_flight.max(1e-9);

    Trajectory {
        projected_distance: distance,
        max_height: if max_height > 0.0 { max_height } else { apex },
        landing_x: landing.x,
        landing_y: landing.y,
        time_of_flight,
        horizontal_speed: effective_horizontal_speed,
        vertical_speed: v_v,
        dir_x: direction.x,
        dir_y: direction.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn zero_speed_is_zero_flight() {
        let cfg = EngineConfig::default();
        let t = compute_trajectory(0.0, 0.0, 20.0, 0.0, 0.0, 0.0, 0.0, &cfg);
        assert_eq!(t.time_of_flight, 0.0);
        assert_eq!(t.projected_distance, 0.0);
        assert_eq!((t.dir_x, t.dir_y), (0.0, -1.0));
    }

    #[test]
    fn lofted_shot_has_apex_above_bat_height() {
        let cfg = EngineConfig::default();
        let t = compute_trajectory(100.0, 0.0, 35.0, 0.0, -60.0, 60.0, 20.0, &cfg);
        assert!(t.max_height > cfg.bat_height);
        assert!(t.time_of_flight > 0.0);
    }

    #[test]
    fn direction_follows_caller_landing_point() {
        let cfg = EngineConfig::default();
        let t = compute_trajectory(90.0, 30.0, 3.0, 10.0, -10.0, 30.0, 1.0, &cfg);
        let expected = unit_vector(Vector2::new(10.0, -10.0));
        assert_abs_diff_eq!(t.dir_x, expected.x, epsilon = 1e-9);
        assert_abs_diff_eq!(t.dir_y, expected.y, epsilon = 1e-9);
    }

    #[test]
    fn height_at_distance_is_finite_and_hits_apex() {
        let cfg = EngineConfig::default();
        let t = compute_trajectory(100.0, 0.0, 35.0, 0.0, -60.0, 60.0, 20.0, &cfg);
        let apex_frac = (0.3 + (35.0_f64 / 90.0) * 0.2).clamp(0.0, 1.0);
        let h = t.height_at_distance(t.projected_distance * apex_frac, 35.0, &cfg);
        assert_abs_diff_eq!(h, t.max_height, epsilon = 1e-6);
        assert_abs_diff_eq!(t.height_at_distance(t.projected_distance, 35.0, &cfg), 0.0, epsilon = 1e-6);
    }
}
