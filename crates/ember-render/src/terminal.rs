//! Truecolor terminal backend built on crossterm
//!
//! Owns the terminal for its whole lifetime: raw mode, alternate screen,
//! hidden cursor, and mouse capture are acquired in `new` and restored on
//! drop. A failed acquisition is fatal: the host must abort setup rather
//! than degrade silently.

use crate::error::RenderError;
use crate::glow::GlowBuffer;
use crate::renderer::{ParticleView, Renderer};
use crate::TRAIL_ALPHA;
use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, terminal,
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use ember_core::Bounds;
use std::io::{stdout, BufWriter, Stdout, Write};

pub struct TerminalRenderer {
    out: BufWriter<Stdout>,
    glow: GlowBuffer,
    frame_buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Result<Self, RenderError> {
        terminal::enable_raw_mode().map_err(|e| RenderError::TerminalInit(e.to_string()))?;

        let mut out = BufWriter::with_capacity(64 * 1024, stdout());
        execute!(
            out,
            EnterAlternateScreen,
            Hide,
            Clear(ClearType::All),
            EnableMouseCapture
        )
        .map_err(|e| RenderError::TerminalInit(e.to_string()))?;

        let (cols, rows) = terminal::size().map_err(|e| RenderError::SizeQuery(e.to_string()))?;
        // Half-block rendering doubles the vertical pixel resolution
        let glow = GlowBuffer::new(cols as usize, rows as usize * 2);

        Ok(Self {
            out,
            glow,
            frame_buf: Vec::with_capacity(cols as usize * rows as usize * 25),
        })
    }
}

impl Renderer for TerminalRenderer {
    fn begin_frame(&mut self) {
        self.glow.fade(1.0 - TRAIL_ALPHA);
    }

    fn draw_particle(&mut self, particle: &ParticleView) {
        self.glow.add_particle(
            particle.position.x,
            particle.position.y,
            particle.color,
            particle.alpha,
            particle.radius_px,
        );
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        self.frame_buf.clear();
        self.glow
            .encode_ansi(&mut self.frame_buf)
            .map_err(|e| RenderError::Present(e.to_string()))?;
        self.out
            .write_all(&self.frame_buf)
            .and_then(|_| self.out.flush())
            .map_err(|e| RenderError::Present(e.to_string()))
    }

    fn bounds(&self) -> Bounds {
        Bounds::new(self.glow.width() as f32, self.glow.height() as f32)
    }

    fn handle_resize(&mut self, width: f32, height: f32) {
        self.glow.resize(width as usize, height as usize);
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        // Best effort: leave the user's terminal usable even on panic
        let _ = execute!(self.out, Show, LeaveAlternateScreen, DisableMouseCapture);
        let _ = terminal::disable_raw_mode();
    }
}
