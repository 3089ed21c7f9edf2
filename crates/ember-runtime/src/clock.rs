//! Frame clock with delta clamping

use std::time::{Duration, Instant};

/// Largest delta ever handed to the simulation, in seconds. Long gaps
/// (background tabs, debugger pauses) are clamped instead of integrated,
/// which would otherwise explode the physics.
pub const MAX_DELTA_TIME: f32 = 1.0 / 30.0;

/// Cooperative per-frame scheduler.
///
/// The host calls `tick` once per displayed frame and feeds the returned
/// delta to its frame callback synchronously. `start` is idempotent while
/// running; `stop` halts scheduling without touching in-flight work; a
/// restart measures from the restart instant; missed time is never
/// replayed.
pub struct TimeLoop {
    running: bool,
    last_instant: Option<Instant>,
}

impl TimeLoop {
    pub fn new() -> Self {
        Self {
            running: false,
            last_instant: None,
        }
    }

    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.last_instant = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.last_instant = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The next frame's delta in seconds, or None while stopped.
    pub fn tick(&mut self) -> Option<f32> {
        if !self.running {
            return None;
        }
        let now = Instant::now();
        let last = self.last_instant.replace(now).unwrap_or(now);
        Some(clamp_delta(now.duration_since(last)))
    }
}

impl Default for TimeLoop {
    fn default() -> Self {
        Self::new()
    }
}

/// Seconds for one frame gap, capped at [`MAX_DELTA_TIME`]
pub fn clamp_delta(elapsed: Duration) -> f32 {
    elapsed.as_secs_f32().min(MAX_DELTA_TIME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clamp_caps_long_gaps() {
        // A 5 second stall must come through as exactly the cap
        let delta = clamp_delta(Duration::from_secs(5));
        assert_eq!(delta, MAX_DELTA_TIME);
    }

    #[test]
    fn clamp_passes_short_gaps_through() {
        let delta = clamp_delta(Duration::from_millis(16));
        assert!((delta - 0.016).abs() < 1e-4);
        assert!(delta < MAX_DELTA_TIME);
    }

    #[test]
    fn tick_requires_start() {
        let mut time_loop = TimeLoop::new();
        assert!(time_loop.tick().is_none());

        time_loop.start();
        assert!(time_loop.is_running());
        assert!(time_loop.tick().is_some());

        time_loop.stop();
        assert!(!time_loop.is_running());
        assert!(time_loop.tick().is_none());
    }

    #[test]
    fn start_is_idempotent() {
        let mut time_loop = TimeLoop::new();
        time_loop.start();
        thread::sleep(Duration::from_millis(10));
        // A second start while running must not reset the reference instant
        time_loop.start();
        let delta = time_loop.tick().unwrap();
        assert!(delta >= 0.009);
    }

    #[test]
    fn restart_does_not_replay_missed_time() {
        let mut time_loop = TimeLoop::new();
        time_loop.start();
        time_loop.stop();
        thread::sleep(Duration::from_millis(20));

        time_loop.start();
        let delta = time_loop.tick().unwrap();
        // Measured from the restart, not from the stop
        assert!(delta < 0.015);
    }
}
