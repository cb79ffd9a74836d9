//! Sensor and kinematic constants for the navigation observation encoding.
//!
//! Values match the deployed robot configuration: a 720-beam planar lidar
//! (with a 512-beam hardware revision still in the field) and a holonomic
//! base with the velocity envelope below.

// ============================================================================
// Laser Geometry
// ============================================================================

/// Beam count every laser encoding normalizes to before stacking.
pub const CANONICAL_BEAM_COUNT: usize = 720;

/// Native beam count of the older lidar revision that gets resampled.
/// Scans of any other length pass through the resampler unchanged.
pub const RESAMPLE_SOURCE_BEAMS: usize = 512;

/// Epsilon guarding the interpolation weight when both bracketing beams
/// collapse onto the same native index.
pub const INTERP_EPS: f32 = 1e-12;

// ============================================================================
// Default Encoding Geometry
// ============================================================================

/// Default number of scans kept in the temporal laser stack.
pub const DEFAULT_LASER_STACK_SIZE: usize = 10;

/// Default side length of the square feature map.
pub const DEFAULT_FEATURE_MAP_SIZE: usize = 80;

/// Default maximum laser range (m).
pub const DEFAULT_LASER_MAX_RANGE: f32 = 9.0;

/// Default region of interest spanned by a feature map (m).
pub const DEFAULT_ROI_IN_M: f32 = 20.0;

// ============================================================================
// Value Bounds
// ============================================================================

/// Upper bound on the goal/subgoal distance feature (m).
pub const GOAL_MAX_DIST: f32 = 50.0;

/// Pedestrian speed bound per axis (m/s); velocity maps span the
/// symmetric range around zero.
pub const PED_MAX_SPEED: f32 = 5.0;

/// Highest pedestrian type id rasterized into the type map.
pub const PED_TYPE_MAX: f32 = 3.0;

/// Highest pedestrian social-state id rasterized into the social-state map.
pub const PED_SOCIAL_STATE_MAX: f32 = 16.0;

/// Robot linear velocity bound per axis (m/s).
pub const MAX_LINEAR_VEL: f32 = 5.0;

/// Robot angular velocity bound (rad/s).
pub const MAX_ANGULAR_VEL: f32 = 10.0;
