//! Headless backend that records draw calls instead of presenting
//!
//! Used by tests and the `simulate` subcommand, where assertions and
//! diagnostics need counts rather than pixels.

use crate::error::RenderError;
use crate::renderer::{ParticleView, Renderer};
use ember_core::Bounds;

pub struct HeadlessRenderer {
    bounds: Bounds,
    frames_begun: usize,
    frames_presented: usize,
    draws_this_frame: usize,
    last_frame_draws: usize,
    total_draws: usize,
}

impl HeadlessRenderer {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            bounds: Bounds::new(width, height),
            frames_begun: 0,
            frames_presented: 0,
            draws_this_frame: 0,
            last_frame_draws: 0,
            total_draws: 0,
        }
    }

    pub fn frames_begun(&self) -> usize {
        self.frames_begun
    }

    pub fn frames_presented(&self) -> usize {
        self.frames_presented
    }

    /// Draw calls in the most recently presented frame
    pub fn last_frame_draws(&self) -> usize {
        self.last_frame_draws
    }

    pub fn total_draws(&self) -> usize {
        self.total_draws
    }
}

impl Renderer for HeadlessRenderer {
    fn begin_frame(&mut self) {
        self.frames_begun += 1;
        self.draws_this_frame = 0;
    }

    fn draw_particle(&mut self, _particle: &ParticleView) {
        self.draws_this_frame += 1;
        self.total_draws += 1;
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        self.frames_presented += 1;
        self.last_frame_draws = self.draws_this_frame;
        Ok(())
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn handle_resize(&mut self, width: f32, height: f32) {
        self.bounds = Bounds::new(width, height);
    }
}
