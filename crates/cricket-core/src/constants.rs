//! Tunable constants for the shot outcome engine.
//!
//! Every value named here is also named in the external spec for this
//! engine; they are grouped into one immutable [`EngineConfig`] rather than
//! scattered module-level statics, so tests can construct a modified copy
//! instead of relying on process-wide mutable state.

/// Minimum shot length (m) below which a direction vector is considered
/// degenerate and falls back to a default.
pub const MIN_SHOT_LENGTH: f64 = 0.1;

/// Sampling step (s) for the catch engine's temporal search.
pub const TRAJECTORY_TIME_STEP: f64 = 0.05;

/// Extra reach (m) beyond `projected_distance` within which a fielder is
/// still considered for a catch.
pub const CATCH_EXTENDED_RANGE: f64 = 10.0;

/// Catchable height band (m).
pub const CATCH_HEIGHT_MIN: f64 = 0.2;
pub const CATCH_HEIGHT_MAX: f64 = 4.0;

/// Optimal catch height band (m).
pub const CATCH_OPTIMAL_MIN: f64 = 0.8;
pub const CATCH_OPTIMAL_MAX: f64 = 1.6;

/// Pitch length, stumps to stumps (m).
pub const PITCH_LENGTH: f64 = 20.12;

/// A single, immutable bundle of every numeric tunable the engine consults.
///
/// Production code uses [`EngineConfig::default`]; tests override individual
/// fields by constructing a modified copy (`EngineConfig { gravity: 9.5, ..Default::default() }`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// m/s^2
    pub gravity: f64,
    /// Bat contact height above ground, metres.
    pub bat_height: f64,

    /// Fielder reaction time before moving, seconds.
    pub fielder_reaction_time: f64,
    /// Fielder sprint speed, m/s.
    pub fielder_run_speed: f64,
    /// Lateral reach of a dive, metres.
    pub fielder_dive_range: f64,
    /// Lateral reach with no movement at all, metres.
    pub fielder_static_range: f64,

    /// Base reach (m) for a ground-fielding candidate before accounting for
    /// in-flight movement.
    pub ground_fielding_range: f64,

    /// Stumps-to-stumps pitch length, metres.
    pub pitch_length: f64,
    /// Fielder return-throw speed, m/s.
    pub throw_speed: f64,

    /// Time budget (s) required for the first run.
    pub time_for_first_run: f64,
    /// Additional time budget (s) required per run beyond the first.
    pub time_for_extra_run: f64,

    /// Collection time (s) for a clean take (effective lateral < 0.5 m).
    pub collection_clean: f64,
    /// Collection time (s) for a moving pickup (effective lateral < 2 m).
    pub collection_moving: f64,
    /// Collection time (s) for a dive stop (effective lateral >= 2 m).
    pub collection_dive: f64,

    /// Time penalty (s) added on a fumbled ground-fielding attempt.
    pub fumble_penalty: f64,
    /// Time penalty (s) added on an escaped (misfield) ground-fielding attempt.
    pub misfield_penalty: f64,
    /// Time (s) to stop and gather the ball in the retrieval fallback.
    pub pickup_time_stopped: f64,

    /// Exponential decay coefficient for the ground-friction speed model.
    pub ground_friction: f64,
    /// Floor on the friction-decayed rolling speed, m/s.
    pub ground_speed_floor: f64,

    /// Weights for the four catch-difficulty components; must sum to 1.0.
    pub catch_weight_reaction: f64,
    pub catch_weight_movement: f64,
    pub catch_weight_height: f64,
    pub catch_weight_speed: f64,

    /// Catchable height band, metres.
    pub catch_height_min: f64,
    pub catch_height_max: f64,
    /// Optimal catch height band, metres.
    pub catch_optimal_min: f64,
    pub catch_optimal_max: f64,

    /// Extra reach (m) beyond projected distance for catch eligibility.
    pub catch_extended_range: f64,
    /// Sampling step (s) for the catch engine's temporal search.
    pub trajectory_time_step: f64,
    /// Minimum shot length (m) before direction is considered degenerate.
    pub min_shot_length: f64,

    /// Default boundary radius (m) when the caller supplies a non-positive
    /// value.
    pub default_boundary_distance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            bat_height: 1.0,

            fielder_reaction_time: 0.20,
            fielder_run_speed: 7.0,
            fielder_dive_range: 2.5,
            fielder_static_range: 1.5,

            ground_fielding_range: 15.0,

            pitch_length: PITCH_LENGTH,
            throw_speed: 30.0,

            time_for_first_run: 3.5,
            time_for_extra_run: 2.5,

            collection_clean: 0.5,
            collection_moving: 1.0,
            collection_dive: 1.5,

            fumble_penalty: 1.0,
            misfield_penalty: 2.5,
            pickup_time_stopped: 0.4,

            ground_friction: 0.03,
            ground_speed_floor: 3.0,

            catch_weight_reaction: 0.25,
            catch_weight_movement: 0.35,
            catch_weight_height: 0.20,
            catch_weight_speed: 0.20,

            catch_height_min: CATCH_HEIGHT_MIN,
            catch_height_max: CATCH_HEIGHT_MAX,
            catch_optimal_min: CATCH_OPTIMAL_MIN,
            catch_optimal_max: CATCH_OPTIMAL_MAX,

            catch_extended_range: CATCH_EXTENDED_RANGE,
            trajectory_time_step: TRAJECTORY_TIME_STEP,
            min_shot_length: MIN_SHOT_LENGTH,

            default_boundary_distance: 70.0,
        }
    }
}
