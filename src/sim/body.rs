//! The player-controlled body
//!
//! Only vertical motion is simulated; x stays where the config puts it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;

/// Falling body nudged upward by jumps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    /// Vertical velocity (positive is down)
    pub velocity: f32,
    pub half_width: f32,
    pub half_height: f32,
    /// Velocity as of the last integration; the tilt follows this, not `velocity`
    tilt_velocity: f32,
    gravity: f32,
    jump_impulse: f32,
    tilt_degrees_per_velocity: f32,
}

impl Body {
    /// Body at its start position, at rest
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            x: config.body_x,
            y: config.body_start_y,
            velocity: 0.0,
            half_width: config.body_half_width,
            half_height: config.body_half_height,
            tilt_velocity: 0.0,
            gravity: config.gravity,
            jump_impulse: config.jump_impulse,
            tilt_degrees_per_velocity: config.tilt_degrees_per_velocity,
        }
    }

    /// Apply gravity then move (semi-implicit Euler), then refresh the tilt
    pub fn integrate(&mut self, dt: f32) {
        self.velocity += self.gravity * dt;
        self.y += self.velocity * dt;
        self.tilt_velocity = self.velocity;
    }

    /// Replace the current velocity with the jump impulse
    ///
    /// Jumps don't stack: a second jump before gravity acts is a no-op.
    /// The tilt keeps its value until the next integration.
    pub fn jump(&mut self) {
        self.velocity = self.jump_impulse;
    }

    /// Visual tilt in radians, derived from the velocity of the last integration
    #[inline]
    pub fn rotation(&self) -> f32 {
        (self.tilt_velocity * self.tilt_degrees_per_velocity).to_radians()
    }

    /// Leading-edge point used for collision, rotated with the tilt
    pub fn probe(&self) -> Vec2 {
        let rotation = self.rotation();
        Vec2::new(
            self.x + rotation.cos() * self.half_width,
            self.y + rotation.sin() * self.half_width,
        )
    }
}
