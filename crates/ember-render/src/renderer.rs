//! Renderer capability consumed by the particle system

use crate::error::RenderError;
use ember_core::{Bounds, Rgb, Vec2};

/// Read-only snapshot of one particle, handed to a backend per draw call.
/// Backends never see (or mutate) the particle's simulation state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleView {
    pub position: Vec2,
    pub color: Rgb,
    pub alpha: f32,
    pub radius_px: f32,
}

/// Immediate-mode drawing capability.
///
/// One frame is `begin_frame` → any number of `draw_particle` calls →
/// `end_frame`. The displayed opacity and color of each particle must
/// reflect the passed values; everything else (glow shape, trails) is the
/// backend's business.
pub trait Renderer {
    /// Start a new frame. Backends with persistent accumulation apply
    /// their trail decay here.
    fn begin_frame(&mut self);

    /// Draw one particle, additively blended with whatever is already in
    /// the frame.
    fn draw_particle(&mut self, particle: &ParticleView);

    /// Present the frame.
    fn end_frame(&mut self) -> Result<(), RenderError>;

    /// Current drawable region in pixels.
    fn bounds(&self) -> Bounds;

    /// Host-reported size change, in pixels.
    fn handle_resize(&mut self, width: f32, height: f32);
}
