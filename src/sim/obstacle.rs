//! Obstacles and their procedural generator
//!
//! An obstacle is a matched pair of barriers sharing an x position. The
//! opening between them spans `y2..y1` (y grows downward on screen): one
//! barrier extends from `y1` toward the ground, the other from `y2` toward
//! the ceiling.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;

/// A barrier pair with an opening between `y2` and `y1`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    /// Edge of the opening with the larger y
    pub y1: f32,
    /// Edge of the opening with the smaller y
    pub y2: f32,
}

impl Obstacle {
    pub fn new(x: f32, y1: f32, y2: f32) -> Self {
        Self { x, y1, y2 }
    }

    /// Height of the opening
    #[inline]
    pub fn gap_height(&self) -> f32 {
        self.y1 - self.y2
    }

    /// Vertical center of the opening
    #[inline]
    pub fn gap_center(&self) -> f32 {
        (self.y1 + self.y2) / 2.0
    }

    /// Strictly inside the opening (the edges themselves are solid)
    #[inline]
    pub fn gap_contains(&self, y: f32) -> bool {
        self.y1 > y && self.y2 < y
    }
}

/// Seeded source of obstacle geometry
///
/// Owns the only RNG the simulation consumes, so a seed fully determines
/// every obstacle of every run.
#[derive(Debug, Clone)]
pub struct ObstacleGenerator {
    rng: Pcg32,
    gap_y: f32,
    gap_y_jitter: f32,
    gap_center_y: f32,
    gap_center_jitter: f32,
}

impl ObstacleGenerator {
    pub fn new(config: &SimulationConfig, seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            gap_y: config.gap_y,
            gap_y_jitter: config.gap_y_jitter,
            gap_center_y: config.gap_center_y,
            gap_center_jitter: config.gap_center_jitter,
        }
    }

    /// Fresh obstacle at `spawn_x` (consumes two draws)
    pub fn generate(&mut self, spawn_x: f32) -> Obstacle {
        let gap = self.gap_y + self.signed_unit() * self.gap_y_jitter;
        let center = self.gap_center_y + self.signed_unit() * self.gap_center_jitter;
        Obstacle::new(spawn_x, center + gap / 2.0, center - gap / 2.0)
    }

    /// Uniform draw in [0, 1) used for horizontal spacing
    pub fn spacing_unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// Uniform draw in [-1, 1]
    fn signed_unit(&mut self) -> f32 {
        self.rng.random_range(-1.0f32..=1.0)
    }
}
