//! Fixed timestep simulation tick
//!
//! One step: probe the bounds, then scroll, test and recycle each obstacle
//! in slot order, then integrate the body. A collision stops the step where
//! it is found and ends the run.

use super::collision::{Termination, check_bounds, hits_obstacle};
use super::state::GameState;

/// Result of a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Terminated(Termination),
}

/// Advance a running state by one fixed step
///
/// Does nothing while idle. On collision the state is moved back to idle
/// before returning.
pub fn tick(state: &mut GameState, dt: f32) -> StepOutcome {
    if !state.is_running() {
        return StepOutcome::Continue;
    }

    // Probe position is taken once, before anything moves this step
    let probe = state.body.probe();
    if let Some(termination) = check_bounds(probe, state.config.ground_line()) {
        state.end_run(termination);
        return StepOutcome::Terminated(termination);
    }

    let obstacle_width = state.config.obstacle_width;
    let body_half_width = state.body.half_width;
    for index in 0..state.obstacles.len() {
        state.obstacles.advance_slot(index, dt);

        let obstacle = &state.obstacles.as_slice()[index];
        if hits_obstacle(probe, obstacle, obstacle_width, body_half_width) {
            let termination = Termination::Obstacle(index);
            state.end_run(termination);
            return StepOutcome::Terminated(termination);
        }

        state.obstacles.recycle_if_offscreen(index, &mut state.generator);
    }

    state.body.integrate(dt);
    state.time_ticks += 1;
    StepOutcome::Continue
}

/// Run up to `steps` fixed steps, stopping at the first termination
///
/// Returns the number of steps that ran to completion and the termination,
/// if any.
pub fn run_steps(state: &mut GameState, steps: u32) -> (u32, Option<Termination>) {
    let dt = state.config.fixed_dt;
    for completed in 0..steps {
        if !state.is_running() {
            return (completed, None);
        }
        if let StepOutcome::Terminated(termination) = tick(state, dt) {
            return (completed, Some(termination));
        }
    }
    (steps, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::config::SimulationConfig;
    use crate::sim::obstacle::Obstacle;
    use crate::sim::state::RunPhase;

    /// Running state with every obstacle parked far off to the right
    fn open_field(seed: u64) -> GameState {
        let mut state = GameState::new(SimulationConfig::default(), seed);
        state.start_run();
        for i in 0..state.obstacles.len() {
            state.obstacles.set(i, Obstacle::new(5000.0 + i as f32 * 300.0, 600.0, 400.0));
        }
        state
    }

    #[test]
    fn test_idle_tick_is_frozen() {
        let mut state = GameState::new(SimulationConfig::default(), 1);
        let before = state.obstacles.as_slice()[0];
        let y = state.body.y;
        assert_eq!(tick(&mut state, SIM_DT), StepOutcome::Continue);
        assert_eq!(state.obstacles.as_slice()[0], before);
        assert_eq!(state.body.y, y);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_running_tick_moves_everything() {
        let mut state = open_field(1);
        let dt = state.config.fixed_dt;
        let x0 = state.obstacles.as_slice()[0].x;
        assert_eq!(tick(&mut state, dt), StepOutcome::Continue);
        assert!(state.body.velocity > 0.0);
        assert!((state.obstacles.as_slice()[0].x - (x0 - state.config.scroll_speed * dt)).abs() < 1e-3);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_probe_inside_gap_survives() {
        let mut state = open_field(2);
        let probe = state.body.probe();
        // Centered on the probe after this step's scroll
        let x = probe.x + state.config.scroll_speed * state.config.fixed_dt;
        state.obstacles.set(0, Obstacle::new(x, probe.y + 50.0, probe.y - 50.0));
        assert_eq!(tick(&mut state, SIM_DT), StepOutcome::Continue);
        assert!(state.is_running());
    }

    #[test]
    fn test_probe_below_gap_terminates() {
        let mut state = open_field(2);
        let probe = state.body.probe();
        let x = probe.x + state.config.scroll_speed * state.config.fixed_dt;
        // Opening ends one pixel above the probe
        state.obstacles.set(3, Obstacle::new(x, probe.y - 1.0, probe.y - 101.0));
        assert_eq!(
            tick(&mut state, SIM_DT),
            StepOutcome::Terminated(Termination::Obstacle(3))
        );
        assert_eq!(state.phase, RunPhase::Idle);
        assert_eq!(state.last_termination, Some(Termination::Obstacle(3)));
    }

    #[test]
    fn test_jump_keeps_tilt_for_next_step() {
        let mut state = open_field(3);
        state.body.y = 480.0;
        state.body.velocity = 300.0;
        state.body.integrate(0.0);
        let probe = state.body.probe();
        assert!((probe.y - 489.9).abs() < 0.01);

        // Narrow opening around the falling tilt's leading edge
        let x = probe.x + state.config.scroll_speed * SIM_DT;
        state.obstacles.set(0, Obstacle::new(x, 500.0, 475.0));

        state.press();
        assert_eq!(state.body.probe(), probe);
        assert_eq!(tick(&mut state, SIM_DT), StepOutcome::Continue);
        assert!(state.is_running());
        // The jump shows up in the tilt only after integration
        assert!(state.body.rotation() < 0.0);
    }

    #[test]
    fn test_collision_aborts_remaining_slots() {
        let mut state = open_field(4);
        let probe = state.body.probe();
        let x = probe.x + state.config.scroll_speed * state.config.fixed_dt;
        state.obstacles.set(1, Obstacle::new(x, 0.0, -100.0));
        let later = state.obstacles.as_slice()[2];
        let y = state.body.y;

        tick(&mut state, SIM_DT);
        // Slot 2 was never reached and the body never integrated
        assert_eq!(state.obstacles.as_slice()[2], later);
        assert_eq!(state.body.y, y);
    }

    #[test]
    fn test_falling_reaches_ground() {
        let mut state = open_field(5);
        let (completed, termination) = run_steps(&mut state, 10_000);
        assert_eq!(termination, Some(Termination::Ground));
        assert!(completed > 0);
        assert_eq!(state.phase, RunPhase::Idle);
    }

    #[test]
    fn test_rising_reaches_ceiling() {
        let mut state = open_field(6);
        state.body.velocity = -5000.0;
        let (_, termination) = run_steps(&mut state, 10_000);
        assert_eq!(termination, Some(Termination::Ceiling));
    }

    #[test]
    fn test_run_steps_stops_at_termination() {
        let mut state = open_field(7);
        state.body.y = state.config.ground_line() + 1.0;
        let (completed, termination) = run_steps(&mut state, 5);
        assert_eq!(completed, 0);
        assert_eq!(termination, Some(Termination::Ground));
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(SimulationConfig::default(), 99999);
        let mut state2 = GameState::new(SimulationConfig::default(), 99999);
        state1.start_run();
        state2.start_run();

        for step in 0..2000 {
            if step % 40 == 0 {
                state1.press();
                state2.press();
            }
            let a = tick(&mut state1, SIM_DT);
            let b = tick(&mut state2, SIM_DT);
            assert_eq!(a, b);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.body.y, state2.body.y);
        assert_eq!(state1.obstacles.as_slice(), state2.obstacles.as_slice());
    }
}
