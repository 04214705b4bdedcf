//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, owned by the obstacle generator
//! - Stable iteration order (by obstacle slot)
//! - No rendering or platform dependencies

pub mod body;
pub mod clock;
pub mod collision;
pub mod obstacle;
pub mod ring;
pub mod state;
pub mod tick;

pub use body::Body;
pub use clock::{FrameClock, StepAccumulator};
pub use collision::{Termination, check_bounds, first_obstacle_hit, hits_obstacle};
pub use obstacle::{Obstacle, ObstacleGenerator};
pub use ring::ObstacleRing;
pub use state::{GameState, RunPhase};
pub use tick::{StepOutcome, run_steps, tick};
