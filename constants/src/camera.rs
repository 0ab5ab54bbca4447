/// Vertical field of view of the perspective camera, in degrees.
pub const VIEW_ANGLE_DEGREES: f32 = 45.0;
pub const NEAR_CLIPPING_PLANE: f32 = 0.1;
pub const FAR_CLIPPING_PLANE: f32 = 50000.0;

/// Orbit controls
pub const ORBIT_ZOOM_SPEED: f32 = 3.0;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
/// One full turn every 30 seconds at a speed of 2.0.
pub const ORBIT_AUTO_ROTATE_SPEED: f32 = 2.0;
pub const ORBIT_MIN_DISTANCE: f32 = 0.0;
pub const ORBIT_MAX_DISTANCE: f32 = 15000.0;
/// Keeps the polar angle off the poles so `look_at` never degenerates.
pub const ORBIT_POLAR_EPSILON: f32 = 0.000001;
/// Pixel scroll deltas are converted to line steps with this factor.
pub const PIXELS_PER_SCROLL_LINE: f32 = 100.0;

/// First person controls
pub const FIRST_PERSON_YAW_SENSITIVITY: f32 = 0.0035;
pub const FIRST_PERSON_PITCH_SENSITIVITY: f32 = 0.0030;
pub const FIRST_PERSON_PITCH_LIMIT: f32 = 1.55;
pub const FIRST_PERSON_MOVEMENT_SPEED: f32 = 100.0;
pub const FIRST_PERSON_FAST_MULTIPLIER: f32 = 3.5;
pub const FIRST_PERSON_SLOW_MULTIPLIER: f32 = 0.25;
