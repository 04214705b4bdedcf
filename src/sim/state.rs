//! Game state and run phase
//!
//! Everything one run needs lives in [`GameState`]: the body, the obstacle
//! ring, and the generator whose RNG determines every obstacle.

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::collision::Termination;
use super::obstacle::ObstacleGenerator;
use super::ring::ObstacleRing;
use crate::config::SimulationConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Waiting for the first press; physics frozen
    Idle,
    /// Body falling, obstacles scrolling
    Running,
}

/// Complete simulation state (deterministic for a given seed and input)
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: SimulationConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: RunPhase,
    pub body: Body,
    pub obstacles: ObstacleRing,
    pub generator: ObstacleGenerator,
    /// Steps simulated in the current run
    pub time_ticks: u64,
    /// Idle -> Running transitions so far
    pub runs_started: u32,
    /// How the most recent run ended
    pub last_termination: Option<Termination>,
}

impl GameState {
    /// Idle state with an initial obstacle layout drawn from `seed`
    pub fn new(config: SimulationConfig, seed: u64) -> Self {
        let mut generator = ObstacleGenerator::new(&config, seed);
        let obstacles = ObstacleRing::populate(&config, &mut generator);
        let body = Body::new(&config);
        Self {
            config,
            seed,
            phase: RunPhase::Idle,
            body,
            obstacles,
            generator,
            time_ticks: 0,
            runs_started: 0,
            last_termination: None,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    /// Idle -> Running: reset the body and regenerate every obstacle
    pub fn start_run(&mut self) {
        self.body = Body::new(&self.config);
        self.obstacles.repopulate(&mut self.generator);
        self.time_ticks = 0;
        self.runs_started += 1;
        self.phase = RunPhase::Running;
        log::info!("Run {} started (seed {})", self.runs_started, self.seed);
    }

    /// Running -> Idle after a collision; the body stays where it died
    pub fn end_run(&mut self, termination: Termination) {
        self.phase = RunPhase::Idle;
        self.last_termination = Some(termination);
        match termination {
            Termination::Obstacle(index) => log::info!(
                "Run {} ended after {} steps: hit obstacle {}",
                self.runs_started,
                self.time_ticks,
                index
            ),
            other => log::info!(
                "Run {} ended after {} steps: hit the {}",
                self.runs_started,
                self.time_ticks,
                other.as_str()
            ),
        }
    }

    /// A press starts a run when idle and jumps when running
    pub fn press(&mut self) {
        match self.phase {
            RunPhase::Idle => self.start_run(),
            RunPhase::Running => self.body.jump(),
        }
    }
}
