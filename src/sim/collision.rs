//! Collision evaluation for the body's probe point
//!
//! The body is reduced to a single leading-edge point. It dies when that
//! point leaves the playfield vertically, or when it sits inside an
//! obstacle's horizontal band without being strictly inside the opening.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Probe went above the top of the screen
    Ceiling,
    /// Probe reached the ground strip
    Ground,
    /// Probe hit the barriers of the obstacle in this slot
    Obstacle(usize),
}

impl Termination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Termination::Ceiling => "ceiling",
            Termination::Ground => "ground",
            Termination::Obstacle(_) => "obstacle",
        }
    }
}

/// Probe outside the vertical playfield `[0, ground_line]`
pub fn check_bounds(probe: Vec2, ground_line: f32) -> Option<Termination> {
    if probe.y > ground_line {
        Some(Termination::Ground)
    } else if probe.y < 0.0 {
        Some(Termination::Ceiling)
    } else {
        None
    }
}

/// Whether the probe collides with one obstacle
///
/// Inside the band `|probe.x - x| < (obstacle_width + body_half_width) / 2`
/// the probe must lie strictly between `y2` and `y1`; touching an edge of
/// the opening counts as a hit.
pub fn hits_obstacle(probe: Vec2, obstacle: &Obstacle, obstacle_width: f32, body_half_width: f32) -> bool {
    let in_band = (probe.x - obstacle.x).abs() < (obstacle_width + body_half_width) / 2.0;
    in_band && !obstacle.gap_contains(probe.y)
}

/// First obstacle (in slot order) the probe collides with
pub fn first_obstacle_hit(
    probe: Vec2,
    obstacles: &[Obstacle],
    obstacle_width: f32,
    body_half_width: f32,
) -> Option<usize> {
    obstacles
        .iter()
        .position(|o| hits_obstacle(probe, o, obstacle_width, body_half_width))
}
