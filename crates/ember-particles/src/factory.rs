//! Burst construction: spherical launch sampling and particle initialization

use crate::constants::{
    DEFAULT_DURATION_DIVISOR, GRAVITY, MAX_AGE_JITTER, RADIUS_MAX, RADIUS_MIN, SPEED_MAX,
    SPEED_MIN, SPEED_VARIATION_MAX, SPEED_VARIATION_MIN, UPWARD_BIAS_MAX, UPWARD_BIAS_MIN,
};
use crate::particle::{Firework, FireworkConfig, Particle};
use ember_core::{Rgb, Vec2, XorShiftRng};
use std::f32::consts::PI;

/// Build one burst: exactly `config.particle_count` particles spawned at
/// the center, each independently randomized.
pub fn create_firework(
    center_x: f32,
    center_y: f32,
    config: &FireworkConfig,
    rng: &mut XorShiftRng,
) -> Firework {
    let particles = (0..config.particle_count)
        .map(|_| create_particle(center_x, center_y, config, rng))
        .collect();

    Firework {
        particles,
        is_complete: false,
    }
}

/// Create a single particle with a 3D-spherical launch direction.
///
/// Sampling on the sphere (rather than a uniform 2D angle) avoids visual
/// clustering and reads as a volumetric burst once projected.
pub fn create_particle(
    center_x: f32,
    center_y: f32,
    config: &FireworkConfig,
    rng: &mut XorShiftRng,
) -> Particle {
    let theta = rng.range(0.0, PI * 2.0);
    // acos of a uniform value gives uniform density on the sphere surface
    let phi = (2.0 * rng.next_f32() - 1.0).acos();

    let velocity = launch_velocity(theta, phi, config.duration_seconds, rng);
    let base_color = pick_color(&config.color_options, rng);
    let max_age_seconds = jittered_max_age(config.duration_seconds, rng);
    let radius_px = rng.range(RADIUS_MIN, RADIUS_MAX);

    Particle {
        position: Vec2::new(center_x, center_y),
        velocity,
        gravity: GRAVITY,
        age_seconds: 0.0,
        max_age_seconds,
        base_color,
        alpha: 1.0,
        radius_px,
        has_touched_boundary: false,
    }
}

/// Project the spherical sample to 2D and scale by a duration-adjusted,
/// per-particle-varied speed.
fn launch_velocity(theta: f32, phi: f32, duration_seconds: f32, rng: &mut XorShiftRng) -> Vec2 {
    let base_speed = rng.range(SPEED_MIN, SPEED_MAX);
    // Longer bursts travel for longer, so scale speed down with duration
    // to keep screen coverage comparable
    let speed = base_speed * (duration_seconds / DEFAULT_DURATION_DIVISOR);
    let final_speed = speed * rng.range(SPEED_VARIATION_MIN, SPEED_VARIATION_MAX);

    let sphere_x = phi.sin() * theta.cos();
    let sphere_y = phi.cos();

    // Bias the vertical component so bursts rise before settling
    // (canvas Y grows downward)
    let upward_bias = rng.range(UPWARD_BIAS_MAX, UPWARD_BIAS_MIN);

    Vec2::new(
        sphere_x * final_speed,
        (sphere_y + upward_bias) * final_speed,
    )
}

/// Uniform pick with replacement; the particle stores its own copy
fn pick_color(color_options: &[Rgb], rng: &mut XorShiftRng) -> Rgb {
    color_options[rng.int_range(0, color_options.len() - 1)]
}

/// Jitter the lifetime ±10% so a burst never vanishes in one frame
fn jittered_max_age(duration_seconds: f32, rng: &mut XorShiftRng) -> f32 {
    let jitter = (rng.next_f32() - 0.5) * MAX_AGE_JITTER;
    duration_seconds * (1.0 + jitter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_core::DEFAULT_PALETTE;

    fn config() -> FireworkConfig {
        FireworkConfig {
            duration_seconds: 3.0,
            color_options: DEFAULT_PALETTE.to_vec(),
            particle_count: 50,
        }
    }

    #[test]
    fn firework_has_requested_population() {
        let mut rng = XorShiftRng::new(42);
        let firework = create_firework(400.0, 300.0, &config(), &mut rng);

        assert_eq!(firework.particles.len(), 50);
        assert!(!firework.is_complete);
        for p in &firework.particles {
            assert_eq!(p.position, Vec2::new(400.0, 300.0));
            assert!((p.alpha - 1.0).abs() < 1e-6);
            assert!((p.age_seconds).abs() < 1e-6);
            assert!(!p.has_touched_boundary);
        }
    }

    #[test]
    fn max_age_stays_within_jitter_band() {
        let mut rng = XorShiftRng::new(7);
        for _ in 0..500 {
            let p = create_particle(0.0, 0.0, &config(), &mut rng);
            assert!(p.max_age_seconds >= 3.0 * 0.9 - 1e-4);
            assert!(p.max_age_seconds <= 3.0 * 1.1 + 1e-4);
        }
    }

    #[test]
    fn radius_stays_within_range() {
        let mut rng = XorShiftRng::new(11);
        for _ in 0..500 {
            let p = create_particle(0.0, 0.0, &config(), &mut rng);
            assert!((RADIUS_MIN..RADIUS_MAX).contains(&p.radius_px));
        }
    }

    #[test]
    fn color_comes_from_the_options() {
        let mut rng = XorShiftRng::new(13);
        for _ in 0..200 {
            let p = create_particle(0.0, 0.0, &config(), &mut rng);
            assert!(DEFAULT_PALETTE.contains(&p.base_color));
        }
    }

    #[test]
    fn base_colors_are_independent_copies() {
        let mut rng = XorShiftRng::new(17);
        let cfg = FireworkConfig {
            duration_seconds: 3.0,
            color_options: vec![Rgb::new(10, 20, 30)],
            particle_count: 2,
        };
        let mut firework = create_firework(0.0, 0.0, &cfg, &mut rng);

        firework.particles[0].base_color = Rgb::new(200, 200, 200);
        assert_eq!(firework.particles[1].base_color, Rgb::new(10, 20, 30));
        assert_eq!(cfg.color_options[0], Rgb::new(10, 20, 30));
    }

    #[test]
    fn speed_scales_with_duration() {
        // Same rng stream, different durations: the launch speed is
        // proportional to duration / 3.0
        let short = FireworkConfig {
            duration_seconds: 1.5,
            ..config()
        };
        let long = config();

        let mut rng_a = XorShiftRng::new(23);
        let mut rng_b = XorShiftRng::new(23);
        let p_short = create_particle(0.0, 0.0, &short, &mut rng_a);
        let p_long = create_particle(0.0, 0.0, &long, &mut rng_b);

        assert!(
            (p_short.velocity.length() * 2.0 - p_long.velocity.length()).abs()
                < p_long.velocity.length() * 1e-3 + 1e-3
        );
    }

    #[test]
    fn vertical_bias_points_upward_on_average() {
        let mut rng = XorShiftRng::new(29);
        let mut upward = 0usize;
        let total = 1000usize;
        for _ in 0..total {
            let p = create_particle(0.0, 0.0, &config(), &mut rng);
            if p.velocity.y < 0.0 {
                upward += 1;
            }
        }
        // cos(phi) is symmetric, so the [-0.7, -0.3] bias must tilt well
        // over half of the launches upward
        assert!(upward > total * 6 / 10);
    }
}
