//! Owns the live firework collection and drives per-frame update and draw

use crate::particle::Firework;
use crate::physics;
use ember_core::Bounds;
use ember_render::{ParticleView, Renderer};

/// Insertion-ordered collection of live bursts. Duplicates are legal;
/// celebration mode routinely stacks bursts at the same point.
#[derive(Default)]
pub struct ParticleSystem {
    fireworks: Vec<Firework>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self {
            fireworks: Vec::new(),
        }
    }

    pub fn add_firework(&mut self, firework: Firework) {
        self.fireworks.push(firework);
    }

    /// Advance every incomplete firework by one tick, dropping dead
    /// particles and then completed fireworks. Both filters preserve
    /// insertion order.
    pub fn update(&mut self, delta_time: f32, bounds: Bounds) {
        for firework in &mut self.fireworks {
            if firework.is_complete {
                continue;
            }

            firework
                .particles
                .retain_mut(|particle| physics::update_particle(particle, delta_time, bounds));

            if firework.particles.is_empty() {
                firework.is_complete = true;
            }
        }

        self.fireworks.retain(|firework| !firework.is_complete);
    }

    /// Hand every live particle to the renderer in insertion order as a
    /// read-only snapshot.
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        for firework in &self.fireworks {
            for particle in &firework.particles {
                renderer.draw_particle(&ParticleView {
                    position: particle.position,
                    color: particle.base_color,
                    alpha: particle.alpha,
                    radius_px: particle.radius_px,
                });
            }
        }
    }

    pub fn firework_count(&self) -> usize {
        self.fireworks.len()
    }

    pub fn particle_count(&self) -> usize {
        self.fireworks.iter().map(|f| f.particles.len()).sum()
    }
}
