//! Interactive terminal display
//!
//! Controls: left click spawns a burst, `c` toggles celebration mode,
//! up/down adjust the burst duration, `q` or Esc quits.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ember_core::XorShiftRng;
use ember_particles::ParticleSystem;
use ember_render::{Renderer, TerminalRenderer};
use ember_runtime::{AppState, CelebrationController, FireworkController, Settings, TimeLoop};
use std::path::Path;
use std::time::Duration;

pub fn run(config: Option<&Path>, duration: Option<f32>, celebration: bool) -> Result<()> {
    let mut state = AppState::default();
    if let Some(path) = config {
        Settings::load(path)?.apply(&mut state)?;
    }
    if let Some(seconds) = duration {
        state.set_duration(seconds);
    }
    if celebration {
        state.celebration_enabled = true;
    }

    // Fatal if the terminal cannot be acquired
    let mut renderer = TerminalRenderer::new()?;

    let mut system = ParticleSystem::new();
    let mut rng = XorShiftRng::from_entropy();
    let mut firework_ctl = FireworkController::new(state.clone());
    let mut celebration_ctl = CelebrationController::new(state.clone());
    celebration_ctl.update_bounds(renderer.bounds());

    let mut time_loop = TimeLoop::new();
    time_loop.start();

    while time_loop.is_running() {
        // Drain host events; poll timeout doubles as frame pacing
        while event::poll(Duration::from_millis(8))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => time_loop.stop(),
                    KeyCode::Char('c') => {
                        state.toggle_celebration();
                        firework_ctl.update_state(state.clone());
                        celebration_ctl.update_state(state.clone());
                    }
                    KeyCode::Up => {
                        state.set_duration(state.duration_seconds + 0.1);
                        firework_ctl.update_state(state.clone());
                        celebration_ctl.update_state(state.clone());
                    }
                    KeyCode::Down => {
                        state.set_duration(state.duration_seconds - 0.1);
                        firework_ctl.update_state(state.clone());
                        celebration_ctl.update_state(state.clone());
                    }
                    _ => {}
                },
                Event::Mouse(mouse) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        // Half-block cells: one terminal row is two pixels
                        firework_ctl.spawn_at(
                            &mut system,
                            &mut rng,
                            mouse.column as f32,
                            mouse.row as f32 * 2.0,
                        );
                    }
                }
                Event::Resize(cols, rows) => {
                    renderer.handle_resize(cols as f32, rows as f32 * 2.0);
                    celebration_ctl.update_bounds(renderer.bounds());
                }
                _ => {}
            }
        }

        let Some(delta) = time_loop.tick() else {
            break;
        };

        celebration_ctl.tick(delta, &mut system, &mut rng);

        let bounds = renderer.bounds();
        system.update(delta, bounds);

        renderer.begin_frame();
        system.draw(&mut renderer);
        renderer.end_frame()?;
    }

    Ok(())
}
