//! Additive glow accumulation and truecolor half-block encoding
//!
//! One buffer cell is one simulation pixel; vertical resolution is doubled
//! by rendering two cells per terminal row with the `▄` half-block glyph.
//! The buffer persists across frames and is decayed at frame start, which
//! is what produces motion trails.

use ember_core::Rgb;
use std::io::Write;

pub struct GlowBuffer {
    width: usize,
    height: usize,
    /// Linear RGB intensity per cell, 0.0..=1.0 after clamping at encode
    cells: Vec<[f32; 3]>,
}

impl GlowBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![[0.0; 3]; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Scale every cell by `factor`, leaving a decaying trail of previous
    /// frames behind.
    pub fn fade(&mut self, factor: f32) {
        for cell in &mut self.cells {
            cell[0] *= factor;
            cell[1] *= factor;
            cell[2] *= factor;
        }
    }

    /// Splat one particle additively: full intensity at the center, linear
    /// falloff to zero at the radius.
    pub fn add_particle(&mut self, x: f32, y: f32, color: Rgb, alpha: f32, radius: f32) {
        let reach = radius.ceil() as i32;
        let cx = x.round() as i32;
        let cy = y.round() as i32;

        for dy in -reach..=reach {
            for dx in -reach..=reach {
                let px = cx + dx;
                let py = cy + dy;
                if px < 0 || py < 0 || px >= self.width as i32 || py >= self.height as i32 {
                    continue;
                }
                let dist = ((dx * dx + dy * dy) as f32).sqrt();
                let falloff = 1.0 - dist / (radius + 1.0);
                if falloff <= 0.0 {
                    continue;
                }
                let intensity = alpha * falloff;
                let cell = &mut self.cells[py as usize * self.width + px as usize];
                cell[0] += color.r as f32 / 255.0 * intensity;
                cell[1] += color.g as f32 / 255.0 * intensity;
                cell[2] += color.b as f32 / 255.0 * intensity;
            }
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells = vec![[0.0; 3]; width * height];
    }

    fn cell_rgb(&self, x: usize, y: usize) -> (u8, u8, u8) {
        let cell = self.cells[y * self.width + x];
        (
            (cell[0].clamp(0.0, 1.0) * 255.0) as u8,
            (cell[1].clamp(0.0, 1.0) * 255.0) as u8,
            (cell[2].clamp(0.0, 1.0) * 255.0) as u8,
        )
    }

    /// Encode the whole buffer as an ANSI frame: home the cursor, then one
    /// `▄` per column with the upper pixel as background and the lower as
    /// foreground. Color escapes are only emitted when the color changes.
    pub fn encode_ansi(&self, out: &mut Vec<u8>) -> std::io::Result<()> {
        out.extend_from_slice(b"\x1b[H");

        for y in (0..self.height).step_by(2) {
            let mut prev_top: Option<(u8, u8, u8)> = None;
            let mut prev_bot: Option<(u8, u8, u8)> = None;

            for x in 0..self.width {
                let top = self.cell_rgb(x, y);
                let bot = if y + 1 < self.height {
                    self.cell_rgb(x, y + 1)
                } else {
                    top
                };

                if prev_top != Some(top) {
                    write!(out, "\x1b[48;2;{};{};{}m", top.0, top.1, top.2)?;
                    prev_top = Some(top);
                }
                if prev_bot != Some(bot) {
                    write!(out, "\x1b[38;2;{};{};{}m", bot.0, bot.1, bot.2)?;
                    prev_bot = Some(bot);
                }
                out.extend_from_slice("▄".as_bytes());
            }
            out.extend_from_slice(b"\x1b[0m");
            if y + 2 < self.height {
                out.extend_from_slice(b"\r\n");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_scales_all_cells() {
        let mut buf = GlowBuffer::new(4, 4);
        buf.add_particle(1.0, 1.0, Rgb::new(255, 0, 0), 1.0, 1.0);
        let before = buf.cells[5][0];
        assert!(before > 0.0);

        buf.fade(0.5);
        let after = buf.cells[5][0];
        assert!((after - before * 0.5).abs() < 1e-6);
    }

    #[test]
    fn add_particle_is_additive() {
        let mut buf = GlowBuffer::new(4, 4);
        buf.add_particle(2.0, 2.0, Rgb::new(0, 255, 0), 0.5, 1.0);
        let once = buf.cells[10][1];
        buf.add_particle(2.0, 2.0, Rgb::new(0, 255, 0), 0.5, 1.0);
        let twice = buf.cells[10][1];
        assert!((twice - once * 2.0).abs() < 1e-6);
    }

    #[test]
    fn alpha_scales_intensity() {
        let mut full = GlowBuffer::new(4, 4);
        full.add_particle(2.0, 2.0, Rgb::new(0, 0, 255), 1.0, 1.0);
        let mut half = GlowBuffer::new(4, 4);
        half.add_particle(2.0, 2.0, Rgb::new(0, 0, 255), 0.5, 1.0);
        assert!((half.cells[10][2] - full.cells[10][2] * 0.5).abs() < 1e-6);
    }

    #[test]
    fn splat_stays_in_bounds() {
        // Particle at the corner must not index outside the buffer
        let mut buf = GlowBuffer::new(4, 4);
        buf.add_particle(0.0, 0.0, Rgb::new(255, 255, 255), 1.0, 6.0);
        buf.add_particle(3.0, 3.0, Rgb::new(255, 255, 255), 1.0, 6.0);
        assert!(buf.cells[0][0] > 0.0);
    }

    #[test]
    fn encode_emits_home_and_reset() {
        let mut buf = GlowBuffer::new(2, 2);
        let mut out = Vec::new();
        buf.add_particle(0.0, 0.0, Rgb::new(255, 0, 0), 1.0, 1.0);
        buf.encode_ansi(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\x1b[H"));
        assert!(text.contains("\x1b[48;2;"));
        assert!(text.ends_with("\x1b[0m"));
    }

    #[test]
    fn resize_reallocates() {
        let mut buf = GlowBuffer::new(2, 2);
        buf.add_particle(0.0, 0.0, Rgb::new(255, 0, 0), 1.0, 1.0);
        buf.resize(8, 6);
        assert_eq!(buf.width(), 8);
        assert_eq!(buf.height(), 6);
        assert!(buf.cells.iter().all(|c| c == &[0.0; 3]));
    }
}
