//! Shot Classifier (§4.4): maps the normalized horizontal angle and the
//! aerial flag to a descriptive shot name. Pure and deterministic: the same
//! `(angle, aerial)` pair always yields the same name, for any coterminal
//! angle (§8, invariant 7).

/// Whether a shot counts as aerial for classification and catch eligibility:
/// true when the apex clears 1.5 m or the launch angle exceeds 10 degrees.
pub fn is_aerial(max_height: f64, vertical_angle_deg: f64) -> bool {
    max_height > 1.5 || vertical_angle_deg > 10.0
}

/// One row of the angle -> name table, shared by both sides of the pitch.
struct Band {
    max_abs_angle: f64,
    off_ground: &'static str,
    off_aerial: &'static str,
    leg_ground: &'static str,
    leg_aerial: &'static str,
}

const BANDS: &[Band] = &[
    Band {
        max_abs_angle: 15.0,
        off_ground: "driven straight",
        off_aerial: "lofted straight",
        leg_ground: "driven straight",
        leg_aerial: "lofted straight",
    },
    Band {
        max_abs_angle: 45.0,
        off_ground: "driven through cover",
        off_aerial: "lofted over cover",
        leg_ground: "flicked through midwicket",
        leg_aerial: "lofted over midwicket",
    },
    Band {
        max_abs_angle: 75.0,
        off_ground: "cut",
        off_aerial: "cut in the air",
        leg_ground: "pulled",
        leg_aerial: "hooked",
    },
    Band {
        max_abs_angle: 105.0,
        off_ground: "square cut",
        off_aerial: "upper cut",
        leg_ground: "swept",
        leg_aerial: "swept in the air",
    },
    Band {
        max_abs_angle: 135.0,
        off_ground: "late cut",
        off_aerial: "edged",
        leg_ground: "glanced fine",
        leg_aerial: "flicked fine",
    },
    Band {
        max_abs_angle: 180.0,
        off_ground: "edged behind",
        off_aerial: "edged in the air",
        leg_ground: "edged behind",
        leg_aerial: "edged in the air",
    },
];

/// Descriptive name for a shot given its normalized horizontal angle
/// (degrees, any real value — coterminal angles classify identically) and
/// whether it is aerial.
pub fn classify(horizontal_angle_deg: f64, aerial: bool) -> &'static str {
    let normalized = crate::geometry::normalize_angle(horizontal_angle_deg);
    let abs_angle = normalized.abs();
    let off_side = normalized >= 0.0;

    for band in BANDS {
        if abs_angle <= band.max_abs_angle {
            return match (off_side, aerial) {
                (true, false) => band.off_ground,
                (true, true) => band.off_aerial,
                (false, false) => band.leg_ground,
                (false, true) => band.leg_aerial,
            };
        }
    }
    // Unreachable: the last band covers up to 180 and normalize_angle never
    // exceeds that, but fall back to the final band rather than panic.
    let band = &BANDS[BANDS.len() - 1];
    match (off_side, aerial) {
        (true, false) => band.off_ground,
        (true, true) => band.off_aerial,
        (false, false) => band.leg_ground,
        (false, true) => band.leg_aerial,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_drive_is_symmetric() {
        assert_eq!(classify(5.0, false), "driven straight");
        assert_eq!(classify(-5.0, false), "driven straight");
    }

    #[test]
    fn cover_drive_off_side() {
        assert_eq!(classify(30.0, false), "driven through cover");
        assert_eq!(classify(-30.0, false), "flicked through midwicket");
    }

    #[test]
    fn hook_shot_aerial_leg_side() {
        assert_eq!(classify(-60.0, true), "hooked");
    }

    #[test]
    fn classification_is_invariant_to_full_turns() {
        for k in -3..=3 {
            let a = 40.0 + 360.0 * k as f64;
            assert_eq!(classify(a, false), classify(40.0, false));
        }
    }

    #[test]
    fn aerial_flag_from_height_or_angle() {
        assert!(is_aerial(2.0, 0.0));
        assert!(is_aerial(0.5, 15.0));
        assert!(!is_aerial(1.0, 5.0));
    }
}
