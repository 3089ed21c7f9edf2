//! Simulation and spawn tuning constants

/// Downward acceleration applied to every particle (px/s²)
pub const GRAVITY: f32 = 900.0;
/// Velocity retained per tick. Not time-scaled: frame deltas are already
/// clamped to a narrow band upstream.
pub const DAMPING: f32 = 0.995;
/// Extra per-tick alpha decay once a particle has hit a wall
pub const BOUNDARY_FADE_MULTIPLIER: f32 = 0.94;
/// Particles below this opacity are removed
pub const MIN_ALPHA: f32 = 0.02;

/// Launch speed range before duration scaling (px/s)
pub const SPEED_MIN: f32 = 120.0;
pub const SPEED_MAX: f32 = 420.0;
/// Burst population range used by the controllers
pub const PARTICLE_COUNT_MIN: usize = 200;
pub const PARTICLE_COUNT_MAX: usize = 500;
/// Particle radius range (px)
pub const RADIUS_MIN: f32 = 3.0;
pub const RADIUS_MAX: f32 = 6.0;
/// Vertical launch bias; MAX sits below MIN on the Y-down axis
pub const UPWARD_BIAS_MIN: f32 = -0.3;
pub const UPWARD_BIAS_MAX: f32 = -0.7;
/// Per-particle speed variation factors
pub const SPEED_VARIATION_MIN: f32 = 0.7;
pub const SPEED_VARIATION_MAX: f32 = 1.3;
/// Total width of the uniform max-age jitter band (±10%)
pub const MAX_AGE_JITTER: f32 = 0.2;
/// Duration at which the configured speed range applies unscaled (s)
pub const DEFAULT_DURATION_DIVISOR: f32 = 3.0;
