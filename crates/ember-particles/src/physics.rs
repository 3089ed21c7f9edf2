//! Per-tick particle integration and lifecycle rules

use crate::constants::{BOUNDARY_FADE_MULTIPLIER, DAMPING, MIN_ALPHA};
use crate::particle::Particle;
use ember_core::Bounds;

/// Advance one particle by `delta_time` seconds.
///
/// Returns `false` when the particle must be removed from its firework,
/// either because its lifetime ran out or because it faded below the
/// visibility floor. Step order matters: integration before the boundary
/// clamp, the clamp before the alpha recompute.
pub fn update_particle(particle: &mut Particle, delta_time: f32, bounds: Bounds) -> bool {
    particle.age_seconds += delta_time;
    if particle.age_seconds >= particle.max_age_seconds {
        // Lifetime exhausted; skip the rest of the tick entirely
        return false;
    }

    particle.velocity.y += particle.gravity * delta_time;

    particle.velocity.x *= DAMPING;
    particle.velocity.y *= DAMPING;

    particle.position.x += particle.velocity.x * delta_time;
    particle.position.y += particle.velocity.y * delta_time;

    handle_boundary_collision(particle, bounds);
    update_alpha(particle);

    particle.alpha >= MIN_ALPHA
}

/// Clamp each axis into [0, bound]. The opacity penalty applies on the
/// first contact only; later contacts still clamp position.
fn handle_boundary_collision(particle: &mut Particle, bounds: Bounds) {
    let mut boundary_hit = false;

    if particle.position.x < 0.0 {
        particle.position.x = 0.0;
        boundary_hit = true;
    } else if particle.position.x > bounds.width {
        particle.position.x = bounds.width;
        boundary_hit = true;
    }

    if particle.position.y < 0.0 {
        particle.position.y = 0.0;
        boundary_hit = true;
    } else if particle.position.y > bounds.height {
        particle.position.y = bounds.height;
        boundary_hit = true;
    }

    if boundary_hit && !particle.has_touched_boundary {
        particle.has_touched_boundary = true;
        particle.alpha = particle.alpha.min(0.7);
    }
}

/// Linear fade over the lifetime; once boundary-touched, alpha follows the
/// lower envelope of that fade and an exponential decay since contact.
fn update_alpha(particle: &mut Particle) {
    let age_factor = 1.0 - particle.age_seconds / particle.max_age_seconds;
    let mut base_alpha = age_factor;

    if particle.has_touched_boundary {
        particle.alpha *= BOUNDARY_FADE_MULTIPLIER;
        base_alpha = base_alpha.min(particle.alpha);
    }

    particle.alpha = base_alpha;
}
