//! Ember CLI - terminal fireworks display

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{show, simulate};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ember")]
#[command(about = "Interactive particle firework display for the terminal", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive fireworks display
    Show {
        /// Path to a TOML settings file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Burst duration in seconds (clamped to 1.0-5.0)
        #[arg(long)]
        duration: Option<f32>,

        /// Start with celebration mode enabled
        #[arg(long)]
        celebration: bool,
    },

    /// Run a headless burst and print population diagnostics
    Simulate {
        /// Simulated time in seconds
        #[arg(long, default_value_t = 6.0)]
        seconds: f32,

        /// Particles in the initial burst
        #[arg(long, default_value_t = 300)]
        particles: usize,

        /// Burst duration in seconds
        #[arg(long, default_value_t = 3.0)]
        duration: f32,

        /// RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            config,
            duration,
            celebration,
        } => show::run(config.as_deref(), duration, celebration),
        Commands::Simulate {
            seconds,
            particles,
            duration,
            seed,
        } => simulate::run(seconds, particles, duration, seed),
    }
}
