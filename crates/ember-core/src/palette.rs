//! Built-in color palettes and sampling helpers

use crate::rand::XorShiftRng;
use crate::types::Rgb;

/// Default burst palette when the host has selected no colors
pub const DEFAULT_PALETTE: [Rgb; 6] = [
    Rgb::new(255, 100, 100), // Red
    Rgb::new(100, 255, 100), // Green
    Rgb::new(100, 100, 255), // Blue
    Rgb::new(255, 255, 100), // Yellow
    Rgb::new(255, 100, 255), // Magenta
    Rgb::new(100, 255, 255), // Cyan
];

/// Extended palette sampled by celebration mode
pub const EXTENDED_PALETTE: [Rgb; 8] = [
    Rgb::new(255, 100, 100), // Red
    Rgb::new(100, 255, 100), // Green
    Rgb::new(100, 100, 255), // Blue
    Rgb::new(255, 255, 100), // Yellow
    Rgb::new(255, 100, 255), // Magenta
    Rgb::new(100, 255, 255), // Cyan
    Rgb::new(255, 200, 100), // Orange
    Rgb::new(200, 100, 255), // Purple
];

/// Select `count` colors from `palette` without replacement.
///
/// Asking for the whole palette (or more) returns it in order; otherwise
/// picks are removed from the candidate pool so no color repeats.
pub fn select_random_colors(rng: &mut XorShiftRng, palette: &[Rgb], count: usize) -> Vec<Rgb> {
    if count == 0 {
        return Vec::new();
    }
    if count >= palette.len() {
        return palette.to_vec();
    }

    let mut available = palette.to_vec();
    let mut selected = Vec::with_capacity(count);
    for _ in 0..count {
        let index = rng.int_range(0, available.len() - 1);
        selected.push(available.remove(index));
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_respects_count() {
        let mut rng = XorShiftRng::new(42);
        let colors = select_random_colors(&mut rng, &EXTENDED_PALETTE, 3);
        assert_eq!(colors.len(), 3);
    }

    #[test]
    fn select_has_no_duplicates() {
        let mut rng = XorShiftRng::new(99);
        for _ in 0..50 {
            let colors = select_random_colors(&mut rng, &EXTENDED_PALETTE, 4);
            for i in 0..colors.len() {
                for j in (i + 1)..colors.len() {
                    assert_ne!(colors[i], colors[j]);
                }
            }
        }
    }

    #[test]
    fn select_whole_palette_returns_all() {
        let mut rng = XorShiftRng::new(1);
        let colors = select_random_colors(&mut rng, &DEFAULT_PALETTE, 10);
        assert_eq!(colors, DEFAULT_PALETTE.to_vec());
    }

    #[test]
    fn select_zero_returns_empty() {
        let mut rng = XorShiftRng::new(1);
        assert!(select_random_colors(&mut rng, &DEFAULT_PALETTE, 0).is_empty());
    }
}
