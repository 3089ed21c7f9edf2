//! Ember Render - drawing backends for the Ember firework engine
//!
//! The simulation core draws through the [`Renderer`] capability and never
//! touches a concrete backend. Two backends are provided:
//! - `TerminalRenderer` — truecolor half-block output with additive glow
//!   accumulation and motion trails
//! - `HeadlessRenderer` — records frames and draw calls for tests and
//!   headless runs

mod error;
mod glow;
mod headless;
mod renderer;
mod terminal;

pub use error::RenderError;
pub use glow::GlowBuffer;
pub use headless::HeadlessRenderer;
pub use renderer::{ParticleView, Renderer};
pub use terminal::TerminalRenderer;

/// Fraction of accumulated glow removed at every frame start; what remains
/// reads as a motion trail.
pub const TRAIL_ALPHA: f32 = 0.08;
