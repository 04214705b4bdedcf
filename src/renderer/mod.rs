//! Rendering contract
//!
//! The simulation never touches a graphics API. Each frame it computes one
//! model matrix per drawable (a unit quad spanning -1..1 on both axes) and
//! hands it to a [`QuadRenderer`], which owns textures, shaders and the
//! actual draw calls.

pub mod quad;

pub use quad::{QuadInstance, instance_bytes};

use glam::{Mat4, Quat, Vec3};

use crate::config::SimulationConfig;
use crate::sim::{Body, GameState, Obstacle};

/// Texture to stamp onto a quad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Sprite {
    Background = 0,
    Body = 1,
    Barrier = 2,
    Ground = 3,
}

impl Sprite {
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Sprite::Background),
            1 => Some(Sprite::Body),
            2 => Some(Sprite::Barrier),
            3 => Some(Sprite::Ground),
            _ => None,
        }
    }
}

/// Draw backend
pub trait QuadRenderer {
    fn begin_frame(&mut self) {}
    fn draw_textured_quad(&mut self, sprite: Sprite, model: Mat4);
    fn end_frame(&mut self) {}
}

/// Renderer that keeps every draw of the last frame
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub instances: Vec<QuadInstance>,
    pub frames: u64,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bytes(&self) -> &[u8] {
        instance_bytes(&self.instances)
    }
}

impl QuadRenderer for RecordingRenderer {
    fn begin_frame(&mut self) {
        self.instances.clear();
    }

    fn draw_textured_quad(&mut self, sprite: Sprite, model: Mat4) {
        self.instances.push(QuadInstance::new(sprite, model));
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }
}

fn quad(translation: (f32, f32), scale: (f32, f32), rotation: f32) -> Mat4 {
    Mat4::from_scale_rotation_translation(
        Vec3::new(scale.0, scale.1, 1.0),
        Quat::from_rotation_z(rotation),
        Vec3::new(translation.0, translation.1, 0.0),
    )
}

/// Full-screen background
pub fn background_model(config: &SimulationConfig) -> Mat4 {
    let (hw, hh) = (config.screen_width / 2.0, config.screen_height / 2.0);
    quad((hw, hh), (hw, hh), 0.0)
}

/// Ground strip along the bottom edge
pub fn ground_model(config: &SimulationConfig) -> Mat4 {
    let half = config.ground_height / 2.0;
    quad(
        (config.screen_width / 2.0, config.screen_height - half),
        (config.screen_width / 2.0, half),
        0.0,
    )
}

/// Body quad, tilted with its velocity
pub fn body_model(body: &Body) -> Mat4 {
    quad((body.x, body.y), (body.half_width, body.half_height), body.rotation())
}

/// The two barriers of an obstacle: the one beyond `y1` (flipped) and the
/// one beyond `y2`
pub fn barrier_models(obstacle: &Obstacle, config: &SimulationConfig) -> [Mat4; 2] {
    let scale = (config.obstacle_width, config.obstacle_height);
    [
        quad(
            (obstacle.x, obstacle.y1 + config.obstacle_height),
            scale,
            std::f32::consts::PI,
        ),
        quad((obstacle.x, obstacle.y2 - config.obstacle_height), scale, 0.0),
    ]
}

/// Issue every draw for one frame: background, body, barriers, ground
pub fn draw_scene(state: &GameState, renderer: &mut impl QuadRenderer) {
    let config = &state.config;

    renderer.begin_frame();
    renderer.draw_textured_quad(Sprite::Background, background_model(config));
    renderer.draw_textured_quad(Sprite::Body, body_model(&state.body));
    for obstacle in state.obstacles.iter() {
        for model in barrier_models(obstacle, config) {
            renderer.draw_textured_quad(Sprite::Barrier, model);
        }
    }
    renderer.draw_textured_quad(Sprite::Ground, ground_model(config));
    renderer.end_frame();
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn corner(model: Mat4, x: f32, y: f32) -> Vec2 {
        model.transform_point3(Vec3::new(x, y, 0.0)).truncate()
    }

    #[test]
    fn test_background_covers_screen() {
        let config = SimulationConfig::default();
        let model = background_model(&config);
        assert!(corner(model, -1.0, -1.0).abs_diff_eq(Vec2::ZERO, 1e-3));
        assert!(corner(model, 1.0, 1.0).abs_diff_eq(Vec2::new(540.0, 960.0), 1e-3));
    }

    #[test]
    fn test_ground_sits_below_ground_line() {
        let config = SimulationConfig::default();
        let model = ground_model(&config);
        assert!((corner(model, 0.0, -1.0).y - config.ground_line()).abs() < 1e-3);
        assert!((corner(model, 0.0, 1.0).y - config.screen_height).abs() < 1e-3);
    }

    #[test]
    fn test_barriers_frame_the_opening() {
        let config = SimulationConfig::default();
        let obstacle = Obstacle::new(300.0, 600.0, 400.0);
        let [beyond_y1, beyond_y2] = barrier_models(&obstacle, &config);

        // Flipped barrier: its local top edge lands on y1
        assert!((corner(beyond_y1, 0.0, 1.0).y - 600.0).abs() < 1e-2);
        assert!((corner(beyond_y2, 0.0, 1.0).y - 400.0).abs() < 1e-2);
        assert!((corner(beyond_y2, 1.0, 0.0).x - (300.0 + config.obstacle_width)).abs() < 1e-2);
    }

    #[test]
    fn test_body_model_rotates() {
        let config = SimulationConfig::default();
        let mut body = Body::new(&config);
        let level = body_model(&body);
        assert!(corner(level, 1.0, 0.0).abs_diff_eq(Vec2::new(body.x + body.half_width, body.y), 1e-3));

        body.velocity = 600.0;
        body.integrate(0.0);
        let tilted = body_model(&body);
        // Tip of the quad matches the collision probe
        assert!(corner(tilted, 1.0, 0.0).abs_diff_eq(body.probe(), 1e-3));
    }

    #[test]
    fn test_draw_scene_order() {
        let state = GameState::new(SimulationConfig::default(), 1);
        let mut renderer = RecordingRenderer::new();
        draw_scene(&state, &mut renderer);

        let sprites: Vec<_> = renderer.instances.iter().filter_map(|i| i.sprite()).collect();
        assert_eq!(sprites.len(), 3 + 2 * state.obstacles.len());
        assert_eq!(sprites[0], Sprite::Background);
        assert_eq!(sprites[1], Sprite::Body);
        assert!(sprites[2..sprites.len() - 1].iter().all(|s| *s == Sprite::Barrier));
        assert_eq!(*sprites.last().unwrap(), Sprite::Ground);
        assert_eq!(renderer.frames, 1);
        assert_eq!(renderer.bytes().len(), sprites.len() * 80);
    }
}
