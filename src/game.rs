//! Frame loop
//!
//! Per frame: poll input once, apply the press, turn elapsed time into due
//! steps, simulate them (running only), then render the final state.

use crate::config::SimulationConfig;
use crate::platform::{InputSource, JumpTrigger};
use crate::renderer::{QuadRenderer, draw_scene};
use crate::sim::{GameState, StepAccumulator, Termination, run_steps};

/// What happened during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Input produced a start or jump this frame
    pub pressed: bool,
    /// Steps that became due (after clamping)
    pub steps_due: u32,
    /// Steps actually simulated
    pub steps_run: u32,
    pub termination: Option<Termination>,
}

/// Game instance holding all state
pub struct Game {
    state: GameState,
    clock: StepAccumulator,
    trigger: JumpTrigger,
}

impl Game {
    pub fn new(config: SimulationConfig, seed: u64) -> Self {
        let clock = StepAccumulator::new(config.fixed_dt, config.max_steps_per_frame);
        Self {
            state: GameState::new(config, seed),
            clock,
            trigger: JumpTrigger::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Advance by `elapsed` seconds of wall-clock time and draw
    pub fn frame(
        &mut self,
        elapsed: f32,
        input: &mut impl InputSource,
        renderer: &mut impl QuadRenderer,
    ) -> FrameReport {
        let mut report = FrameReport::default();

        if self.trigger.poll(input) {
            self.state.press();
            report.pressed = true;
        }

        if self.state.is_running() {
            report.steps_due = self.clock.accumulate(elapsed);
            let (completed, termination) = run_steps(&mut self.state, report.steps_due);
            report.steps_run = completed;
            report.termination = termination;
        } else {
            // Time keeps flowing while idle so a new run starts without a backlog
            self.clock.skip(elapsed);
        }

        draw_scene(&self.state, renderer);
        report
    }
}
