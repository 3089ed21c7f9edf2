//! Particle data model: plain mutable simulation records

use ember_core::{Rgb, Vec2};

/// One animated point of a burst.
///
/// Owned and mutated in place by the physics engine; renderers only ever
/// see read-only snapshots. `base_color` is an independent copy, never a
/// reference into the spawning config's palette.
#[derive(Clone, Debug)]
pub struct Particle {
    /// Canvas pixel position, unbounded until the boundary clamp
    pub position: Vec2,
    /// px/s
    pub velocity: Vec2,
    /// px/s², fixed at creation; the physics step reads this field so a
    /// future config can vary it per burst
    pub gravity: f32,
    pub age_seconds: f32,
    /// Natural lifetime including jitter
    pub max_age_seconds: f32,
    pub base_color: Rgb,
    /// Current opacity in 0..1, recomputed every tick
    pub alpha: f32,
    pub radius_px: f32,
    /// Sticky: set on first wall contact, never cleared
    pub has_touched_boundary: bool,
}

impl Particle {
    /// Normalized age in [0, 1]
    pub fn age_ratio(&self) -> f32 {
        if self.max_age_seconds <= 0.0 {
            1.0
        } else {
            (self.age_seconds / self.max_age_seconds).min(1.0)
        }
    }
}

/// A burst: particles sharing one spawn point and lifecycle.
///
/// Becomes complete exactly once, when its particle collection empties;
/// no other condition completes it and it is never resurrected.
#[derive(Clone, Debug, Default)]
pub struct Firework {
    pub particles: Vec<Particle>,
    pub is_complete: bool,
}

/// Ephemeral construction input for one burst
#[derive(Clone, Debug)]
pub struct FireworkConfig {
    /// Seconds; must be positive (caller contract)
    pub duration_seconds: f32,
    /// Candidate colors; must be non-empty (caller contract)
    pub color_options: Vec<Rgb>,
    /// Must be positive (caller contract)
    pub particle_count: usize,
}
