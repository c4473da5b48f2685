//! 2-D ground-plane geometry used by every downstream component: plain
//! Euclidean distance, point-to-segment projection, angle normalization and
//! unit vectors.

use nalgebra::Vector2;

use crate::constants::MIN_SHOT_LENGTH;

/// Euclidean distance between two ground points.
#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a - b).norm()
}

/// Closest point on segment `s..e` to `p`, with the interpolation parameter
/// `t` clamped to `[0, 1]`.
///
/// Degenerate segments (`|e - s|^2 < 1e-10`) return `s` itself with `t = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentProjection {
    pub distance: f64,
    pub closest: Vector2<f64>,
    pub t: f64,
}

pub fn point_to_segment(p: Vector2<f64>, s: Vector2<f64>, e: Vector2<f64>) -> SegmentProjection {
    let seg = e - s;
    let len_sq = seg.dot(&seg);
    if len_sq < 1e-10 {
        return SegmentProjection {
            distance: distance(p, s),
            closest: s,
            t: 0.0,
        };
    }

    let t = ((p - s).dot(&seg) / len_sq).clamp(0.0, 1.0);
    let closest = s + seg * t;
    SegmentProjection {
        distance: distance(p, closest),
        closest,
        t,
    }
}

/// Normalize an angle in degrees to `(-180, 180]`.
#[inline]
pub fn normalize_angle(a: f64) -> f64 {
    let wrapped = ((a + 180.0) % 360.0 + 360.0) % 360.0 - 180.0;
    if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Unit vector in the direction of `v`. Returns `(0, -1)` (toward the
/// bowler, in this engine's ground convention) when `v` is shorter than
/// [`MIN_SHOT_LENGTH`].
#[inline]
pub fn unit_vector(v: Vector2<f64>) -> Vector2<f64> {
    let mag = v.norm();
    if mag < MIN_SHOT_LENGTH {
        Vector2::new(0.0, -1.0)
    } else {
        v / mag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn distance_is_euclidean() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(3.0, 4.0);
        assert_abs_diff_eq!(distance(a, b), 5.0, epsilon = 1e-9);
    }

    #[test]
    fn point_to_segment_clamps_t() {
        let s = Vector2::new(0.0, 0.0);
        let e = Vector2::new(10.0, 0.0);

        let before = point_to_segment(Vector2::new(-5.0, 0.0), s, e);
        assert_eq!(before.t, 0.0);

        let after = point_to_segment(Vector2::new(15.0, 0.0), s, e);
        assert_eq!(after.t, 1.0);

        let mid = point_to_segment(Vector2::new(5.0, 3.0), s, e);
        assert_abs_diff_eq!(mid.t, 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(mid.distance, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_segment_returns_start() {
        let s = Vector2::new(2.0, 2.0);
        let proj = point_to_segment(Vector2::new(9.0, 9.0), s, s);
        assert_eq!(proj.t, 0.0);
        assert_eq!(proj.closest, s);
    }

    #[test]
    fn normalize_angle_wraps_into_range() {
        assert_abs_diff_eq!(normalize_angle(180.0), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(normalize_angle(-180.0), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(normalize_angle(540.0), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(normalize_angle(-540.0), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(normalize_angle(0.0), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(normalize_angle(370.0), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn unit_vector_falls_back_when_degenerate() {
        let u = unit_vector(Vector2::new(0.01, 0.01));
        assert_eq!(u, Vector2::new(0.0, -1.0));
    }

    #[test]
    fn unit_vector_normalizes() {
        let u = unit_vector(Vector2::new(3.0, 4.0));
        assert_abs_diff_eq!(u.norm(), 1.0, epsilon = 1e-9);
    }
}
