//! Ember Core - Foundational types for the Ember firework engine
//!
//! This crate provides the types that all other Ember crates depend on:
//! - `Rgb` - 8-bit color with component-wise equality
//! - `Vec2`, `Bounds` - 2D types in canvas pixel space
//! - `XorShiftRng` - seedable PRNG for deterministic simulation
//! - Built-in palettes and sampling helpers
//! - Error types and Result alias

mod error;
mod palette;
mod rand;
mod types;

pub use error::{EmberError, Result};
pub use palette::{select_random_colors, DEFAULT_PALETTE, EXTENDED_PALETTE};
pub use rand::XorShiftRng;
pub use types::{Bounds, Rgb, Vec2};
