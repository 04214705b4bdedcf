//! Lurch - A side-scrolling gap runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, run state)
//! - `config`: Data-driven simulation parameters, loaded once and validated
//! - `renderer`: Draw contract and per-frame scene transforms
//! - `platform`: Input contract and press-edge detection
//! - `game`: Frame loop tying the clock, input, simulation and renderer together

pub mod config;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, RecycleSpacing, SimulationConfig};
pub use game::{FrameReport, Game};

/// Game configuration constants
pub mod consts {
    /// Scale applied to every length of the reference layout
    pub const VIRTUAL_PIXEL: f32 = 1.5;

    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Seed used when the caller doesn't supply one
    pub const DEFAULT_SEED: u64 = 0x5EED_1A2C;
}
