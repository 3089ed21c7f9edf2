//! Ember Particles - firework particle simulation core
//!
//! Provides the reusable heart of the display:
//! - Mutable particle/firework data model
//! - Burst factory with uniform-on-sphere launch sampling
//! - Per-tick physics: aging, gravity, damping, boundary clamp, alpha fade
//! - The system owning live fireworks, driving updates and draw calls

pub mod constants;
pub mod factory;
pub mod particle;
pub mod physics;
pub mod system;

pub use factory::{create_firework, create_particle};
pub use particle::{Firework, FireworkConfig, Particle};
pub use system::ParticleSystem;
