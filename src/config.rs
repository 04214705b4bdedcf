//! Simulation configuration
//!
//! Loaded once at startup (JSON, every key optional) and validated before the
//! first frame. Nothing mutates it afterwards.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{MAX_SUBSTEPS, SIM_DT, VIRTUAL_PIXEL};

/// Errors raised while loading or validating a [`SimulationConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// How far a recycled obstacle jumps forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RecycleSpacing {
    /// `count * (gap_x + gap_x_jitter / 2)`: the average of the initial spacing
    #[default]
    HalfJitter,
    /// `count * (gap_x + u * gap_x_jitter)` with a fresh `u` in [0, 1) per recycle
    FreshDraw,
}

/// Immutable simulation parameters
///
/// Screen space has its origin at the top-left corner with y growing
/// downward, so gravity is positive and a jump is a negative velocity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Height of the ground strip; its top edge is the lower collision bound
    pub ground_height: f32,

    // === Timing ===
    /// Fixed simulation step (seconds)
    pub fixed_dt: f32,
    /// Upper bound on steps simulated for a single rendered frame
    pub max_steps_per_frame: u32,

    // === Body ===
    /// Downward acceleration (px/s²)
    pub gravity: f32,
    /// Velocity assigned on jump (px/s, negative is up)
    pub jump_impulse: f32,
    pub body_x: f32,
    pub body_start_y: f32,
    pub body_half_width: f32,
    pub body_half_height: f32,
    /// Visual tilt per unit of vertical velocity
    pub tilt_degrees_per_velocity: f32,

    // === Obstacles ===
    /// Barrier quad half-width
    pub obstacle_width: f32,
    /// Barrier quad half-height
    pub obstacle_height: f32,
    pub obstacle_count: usize,
    /// Nominal horizontal distance between consecutive obstacles
    pub gap_x: f32,
    pub gap_x_jitter: f32,
    /// Nominal vertical opening
    pub gap_y: f32,
    pub gap_y_jitter: f32,
    /// Nominal vertical center of the opening
    pub gap_center_y: f32,
    pub gap_center_jitter: f32,
    /// Leftward scroll speed (px/s)
    pub scroll_speed: f32,
    pub recycle_spacing: RecycleSpacing,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let px = VIRTUAL_PIXEL;
        let screen_width = 360.0 * px;
        let screen_height = 640.0 * px;

        Self {
            screen_width,
            screen_height,
            ground_height: 80.0,

            fixed_dt: SIM_DT,
            max_steps_per_frame: MAX_SUBSTEPS,

            gravity: 750.0 * px,
            jump_impulse: -300.0 * px,
            body_x: screen_width / 3.0,
            body_start_y: screen_height / 2.0,
            body_half_width: 25.5 * px,
            body_half_height: 18.0 * px,
            tilt_degrees_per_velocity: 0.05,

            obstacle_width: 30.0 * px,
            obstacle_height: 300.0 * px,
            obstacle_count: 10,
            gap_x: 200.0 * px,
            gap_x_jitter: 50.0 * px,
            gap_y: 150.0 * px,
            gap_y_jitter: 50.0 * px,
            gap_center_y: screen_height / 2.0,
            gap_center_jitter: screen_height / 4.0,
            scroll_speed: 100.0 * px,
            recycle_spacing: RecycleSpacing::HalfJitter,
        }
    }
}

impl SimulationConfig {
    /// Parse a JSON document; missing keys take their default value
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded simulation config from {}", path.display());
        Ok(config)
    }

    /// Config from `path` when given, otherwise the validated defaults
    ///
    /// Each source is validated exactly once.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// y coordinate of the top of the ground strip
    #[inline]
    pub fn ground_line(&self) -> f32 {
        self.screen_height - self.ground_height
    }

    /// Obstacles left of this x are recycled
    #[inline]
    pub fn recycle_threshold(&self) -> f32 {
        -self.obstacle_width * 2.0
    }

    /// Forward jump of a recycled obstacle for a spacing factor `u` in [0, 1)
    #[inline]
    pub fn recycle_jump(&self, u: f32) -> f32 {
        self.obstacle_count as f32 * (self.gap_x + u * self.gap_x_jitter)
    }

    /// Check every value the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ground_height", self.ground_height),
            ("fixed_dt", self.fixed_dt),
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("body_x", self.body_x),
            ("body_start_y", self.body_start_y),
            ("body_half_width", self.body_half_width),
            ("body_half_height", self.body_half_height),
            ("tilt_degrees_per_velocity", self.tilt_degrees_per_velocity),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_height", self.obstacle_height),
            ("gap_x", self.gap_x),
            ("gap_x_jitter", self.gap_x_jitter),
            ("gap_y", self.gap_y),
            ("gap_y_jitter", self.gap_y_jitter),
            ("gap_center_y", self.gap_center_y),
            ("gap_center_jitter", self.gap_center_jitter),
            ("scroll_speed", self.scroll_speed),
        ];
        if let Some((field, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::invalid(*field, format!("{value} is not finite")));
        }

        if self.screen_width <= 0.0 || self.screen_height <= 0.0 {
            return Err(ConfigError::invalid(
                "screen_width/screen_height",
                "screen dimensions must be positive",
            ));
        }
        if self.ground_height < 0.0 || self.ground_height >= self.screen_height {
            return Err(ConfigError::invalid(
                "ground_height",
                format!("must be in [0, {})", self.screen_height),
            ));
        }
        if self.fixed_dt <= 0.0 {
            return Err(ConfigError::invalid("fixed_dt", "must be positive"));
        }
        if self.max_steps_per_frame == 0 {
            return Err(ConfigError::invalid("max_steps_per_frame", "must be at least 1"));
        }
        if self.obstacle_count == 0 {
            return Err(ConfigError::invalid("obstacle_count", "must be at least 1"));
        }
        if self.obstacle_width <= 0.0 || self.obstacle_height <= 0.0 {
            return Err(ConfigError::invalid(
                "obstacle_width/obstacle_height",
                "barrier extents must be positive",
            ));
        }

        if self.body_half_width <= 0.0 || self.body_half_height <= 0.0 {
            return Err(ConfigError::invalid(
                "body_half_width/body_half_height",
                "body extents must be positive",
            ));
        }
        if self.body_start_y < 0.0 || self.body_start_y > self.ground_line() {
            return Err(ConfigError::invalid(
                "body_start_y",
                format!("{} is outside the playfield [0, {}]", self.body_start_y, self.ground_line()),
            ));
        }
        if self.body_x < 0.0 || self.body_x > self.screen_width {
            return Err(ConfigError::invalid(
                "body_x",
                format!("{} is outside the screen [0, {}]", self.body_x, self.screen_width),
            ));
        }

        let jitters = [
            ("gap_x_jitter", self.gap_x_jitter),
            ("gap_y_jitter", self.gap_y_jitter),
            ("gap_center_jitter", self.gap_center_jitter),
        ];
        if let Some((field, value)) = jitters.iter().find(|(_, v)| *v < 0.0) {
            return Err(ConfigError::invalid(*field, format!("{value} is negative")));
        }

        if self.gap_y <= self.gap_y_jitter {
            return Err(ConfigError::invalid(
                "gap_y",
                format!(
                    "nominal opening {} must exceed its jitter bound {}",
                    self.gap_y, self.gap_y_jitter
                ),
            ));
        }
        let lowest = self.gap_center_y - self.gap_center_jitter;
        let highest = self.gap_center_y + self.gap_center_jitter;
        if lowest < 0.0 || highest > self.ground_line() {
            return Err(ConfigError::invalid(
                "gap_center_jitter",
                format!(
                    "opening center range [{lowest}, {highest}] leaves the playfield [0, {}]",
                    self.ground_line()
                ),
            ));
        }
        if self.scroll_speed <= 0.0 {
            return Err(ConfigError::invalid("scroll_speed", "must be positive"));
        }
        if self.gap_x <= 0.0 {
            return Err(ConfigError::invalid("gap_x", "must be positive"));
        }

        // A recycled obstacle must land off the right edge of the screen
        let shortest_jump = self.recycle_jump(0.0);
        let needed = self.screen_width + self.obstacle_width * 3.0;
        if shortest_jump <= needed {
            return Err(ConfigError::invalid(
                "obstacle_count",
                format!(
                    "recycle jump {shortest_jump} must exceed {needed} so obstacles respawn off-screen"
                ),
            ));
        }

        Ok(())
    }
}
