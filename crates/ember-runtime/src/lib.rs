//! Ember Runtime - frame loop, application state, and spawn controllers
//!
//! Provides the pieces a host wires around the simulation core:
//! - `TimeLoop` — clamped delta-time source driven by the host frame signal
//! - `AppState` / `Settings` — the configuration surface
//! - `FireworkController` — click-to-burst spawning
//! - `CelebrationController` — countdown-driven auto-spawn mode

mod celebration;
mod clock;
mod controller;
mod state;

pub use celebration::CelebrationController;
pub use clock::{clamp_delta, TimeLoop, MAX_DELTA_TIME};
pub use controller::FireworkController;
pub use state::{AppState, Settings, DURATION_MAX, DURATION_MIN, MAX_SELECTED_COLORS};
