//! Countdown-driven auto-spawn mode
//!
//! The whole engine runs on one logical thread, so the rescheduling
//! one-shot timer is a countdown decremented by frame deltas. Disabling
//! cancels only the pending countdown; bursts already spawned keep living.

use crate::state::AppState;
use ember_core::{select_random_colors, Bounds, Rgb, XorShiftRng, EXTENDED_PALETTE};
use ember_particles::constants::{PARTICLE_COUNT_MAX, PARTICLE_COUNT_MIN};
use ember_particles::{create_firework, FireworkConfig, ParticleSystem};

/// Pause between bursts (s)
pub const SPAWN_INTERVAL_MIN: f32 = 0.2;
pub const SPAWN_INTERVAL_MAX: f32 = 0.5;
/// Per-burst duration range (s)
pub const BURST_DURATION_MIN: f32 = 1.0;
pub const BURST_DURATION_MAX: f32 = 5.0;
/// Colors sampled from the extended palette when none are selected
pub const RANDOM_COLORS_MIN: usize = 1;
pub const RANDOM_COLORS_MAX: usize = 4;

pub struct CelebrationController {
    state: AppState,
    bounds: Bounds,
    /// Seconds until the next burst; None while disabled
    next_spawn_in: Option<f32>,
}

impl CelebrationController {
    pub fn new(state: AppState) -> Self {
        let next_spawn_in = state.celebration_enabled.then_some(0.0);
        Self {
            state,
            bounds: Bounds::new(800.0, 600.0),
            next_spawn_in,
        }
    }

    /// Absorb a host state change, reacting to the enabled-flag edge:
    /// off→on schedules an immediate burst, on→off cancels the pending one.
    pub fn update_state(&mut self, state: AppState) {
        let was_enabled = self.state.celebration_enabled;
        self.state = state;

        if self.state.celebration_enabled && !was_enabled {
            self.next_spawn_in = Some(0.0);
        } else if !self.state.celebration_enabled && was_enabled {
            self.next_spawn_in = None;
        }
    }

    /// Track the drawable region so spawn points stay on screen
    pub fn update_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Advance the countdown by one frame delta; spawns when it expires
    /// and reschedules with a fresh random interval.
    pub fn tick(&mut self, delta_time: f32, system: &mut ParticleSystem, rng: &mut XorShiftRng) {
        let Some(remaining) = self.next_spawn_in else {
            return;
        };

        let remaining = remaining - delta_time;
        if remaining > 0.0 {
            self.next_spawn_in = Some(remaining);
            return;
        }

        let x = rng.next_f32() * self.bounds.width;
        let y = rng.next_f32() * self.bounds.height;
        let config = FireworkConfig {
            duration_seconds: rng.range(BURST_DURATION_MIN, BURST_DURATION_MAX),
            color_options: self.burst_colors(rng),
            particle_count: rng.int_range(PARTICLE_COUNT_MIN, PARTICLE_COUNT_MAX),
        };
        system.add_firework(create_firework(x, y, &config, rng));

        self.next_spawn_in = Some(rng.range(SPAWN_INTERVAL_MIN, SPAWN_INTERVAL_MAX));
    }

    /// Selected colors when present, otherwise a small distinct sample
    /// from the extended palette
    fn burst_colors(&self, rng: &mut XorShiftRng) -> Vec<Rgb> {
        if !self.state.selected_colors.is_empty() {
            return self.state.selected_colors.clone();
        }
        let count = rng.int_range(RANDOM_COLORS_MIN, RANDOM_COLORS_MAX);
        select_random_colors(rng, &EXTENDED_PALETTE, count)
    }
}
