//! Click-to-burst spawning

use crate::state::AppState;
use ember_core::XorShiftRng;
use ember_particles::constants::{PARTICLE_COUNT_MAX, PARTICLE_COUNT_MIN};
use ember_particles::{create_firework, FireworkConfig, ParticleSystem};

/// Turns pointer positions into bursts using the latest host state
pub struct FireworkController {
    state: AppState,
}

impl FireworkController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn update_state(&mut self, state: AppState) {
        self.state = state;
    }

    /// Spawn a burst at a pointer position. Ignored while celebration mode
    /// owns the display.
    pub fn spawn_at(&self, system: &mut ParticleSystem, rng: &mut XorShiftRng, x: f32, y: f32) {
        if self.state.celebration_enabled {
            return;
        }

        let config = FireworkConfig {
            duration_seconds: self.state.duration_seconds,
            color_options: self.state.effective_colors(),
            particle_count: rng.int_range(PARTICLE_COUNT_MIN, PARTICLE_COUNT_MAX),
        };

        system.add_firework(create_firework(x, y, &config, rng));
    }
}
