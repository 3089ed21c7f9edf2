//! Headless fixed-step run printing population diagnostics

use anyhow::Result;
use ember_core::{XorShiftRng, DEFAULT_PALETTE};
use ember_particles::{create_firework, FireworkConfig, ParticleSystem};
use ember_render::{HeadlessRenderer, Renderer};

const STEP: f32 = 1.0 / 60.0;

pub fn run(seconds: f32, particles: usize, duration: f32, seed: Option<u32>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => XorShiftRng::new(seed),
        None => XorShiftRng::from_entropy(),
    };

    let mut renderer = HeadlessRenderer::new(800.0, 600.0);
    let mut system = ParticleSystem::new();

    let config = FireworkConfig {
        duration_seconds: duration,
        color_options: DEFAULT_PALETTE.to_vec(),
        particle_count: particles,
    };
    system.add_firework(create_firework(400.0, 300.0, &config, &mut rng));

    println!(
        "[simulate] burst of {particles} particle(s), duration {duration:.1}s, {seconds:.1}s at 60Hz"
    );

    let steps = (seconds / STEP).ceil() as usize;
    for step in 0..steps {
        system.update(STEP, renderer.bounds());

        renderer.begin_frame();
        system.draw(&mut renderer);
        renderer.end_frame()?;

        // One status line per simulated half second
        if (step + 1) % 30 == 0 {
            println!(
                "[simulate] t={:>4.1}s fireworks={} particles={}",
                (step + 1) as f32 * STEP,
                system.firework_count(),
                system.particle_count()
            );
        }
    }

    println!(
        "[simulate] done: {} draw call(s) across {} frame(s)",
        renderer.total_draws(),
        renderer.frames_presented()
    );

    Ok(())
}
