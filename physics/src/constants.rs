/// Vertical acceleration applied while airborne (units per second squared).
///
/// Negative values pull the player down.
pub const GRAVITY: f32 = -15.0;

/// Initial upward velocity when a jump starts (units per second).
pub const JUMP_SPEED: f32 = 6.0;

/// Cruise speed along the track while the player keeps advancing (units per second).
pub const RUN_SPEED: f32 = 5.0;

/// Per-tick blend factor used to ease the run speed toward [`RUN_SPEED`].
///
/// Convention: `v = v * SPEED_SMOOTHING + target * (1 - SPEED_SMOOTHING)`.
/// - 0.0 = snap to the target speed immediately
/// - 1.0 = never accelerate
pub const SPEED_SMOOTHING: f32 = 0.9;

/// Per-tick multiplier applied to the run speed once the player stops advancing.
pub const DECELERATION: f32 = 0.85;

/// Run speeds below this magnitude are treated as standing still.
pub const STOP_SPEED: f32 = 0.05;

/// Default full extents of the player box (width, height, depth).
pub const PLAYER_SIZE: [f32; 3] = [0.5, 1.8, 0.5];

/// Default offset from the player's anchor (feet) to the center of its box.
pub const PLAYER_CENTER_OFFSET: [f32; 3] = [0.0, 0.9, 0.0];
