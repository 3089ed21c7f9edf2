//! Application state and settings file loading

use ember_core::{Result, Rgb, DEFAULT_PALETTE};
use serde::Deserialize;
use std::path::Path;

/// Host-facing duration range in seconds
pub const DURATION_MIN: f32 = 1.0;
pub const DURATION_MAX: f32 = 5.0;
/// Most colors a host may select at once
pub const MAX_SELECTED_COLORS: usize = 10;

/// The configuration surface the host feeds into the controllers.
///
/// Passed by value per call; the simulation core carries no ambient
/// mutable state.
#[derive(Clone, Debug)]
pub struct AppState {
    pub duration_seconds: f32,
    pub selected_colors: Vec<Rgb>,
    pub celebration_enabled: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            duration_seconds: 3.0,
            selected_colors: DEFAULT_PALETTE.to_vec(),
            celebration_enabled: false,
        }
    }
}

impl AppState {
    /// Clamp to the slider range
    pub fn set_duration(&mut self, seconds: f32) {
        self.duration_seconds = seconds.clamp(DURATION_MIN, DURATION_MAX);
    }

    /// Replace the selection, dropping duplicates and truncating to
    /// [`MAX_SELECTED_COLORS`]
    pub fn set_selected_colors(&mut self, colors: &[Rgb]) {
        let mut selection: Vec<Rgb> = Vec::new();
        for &color in colors {
            if !selection.contains(&color) {
                selection.push(color);
            }
            if selection.len() == MAX_SELECTED_COLORS {
                break;
            }
        }
        self.selected_colors = selection;
    }

    pub fn toggle_celebration(&mut self) {
        self.celebration_enabled = !self.celebration_enabled;
    }

    /// Selected colors, or the built-in palette when none are selected
    pub fn effective_colors(&self) -> Vec<Rgb> {
        if self.selected_colors.is_empty() {
            DEFAULT_PALETTE.to_vec()
        } else {
            self.selected_colors.clone()
        }
    }
}

/// On-disk settings, parsed from TOML:
///
/// ```toml
/// duration = 3.0
/// celebration = false
/// colors = ["#ff6464", "#64ff64"]
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    pub duration: Option<f32>,
    pub celebration: Option<bool>,
    pub colors: Option<Vec<String>>,
}

impl Settings {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Fold the file's values into a state, clamping exactly as a host
    /// control surface would
    pub fn apply(&self, state: &mut AppState) -> Result<()> {
        if let Some(duration) = self.duration {
            state.set_duration(duration);
        }
        if let Some(celebration) = self.celebration {
            state.celebration_enabled = celebration;
        }
        if let Some(colors) = &self.colors {
            let parsed = colors
                .iter()
                .map(|hex| Rgb::parse_hex(hex))
                .collect::<Result<Vec<_>>>()?;
            state.set_selected_colors(&parsed);
        }
        Ok(())
    }
}
