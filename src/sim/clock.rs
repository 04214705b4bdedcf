//! Fixed-timestep accumulator
//!
//! Converts variable frame times into a whole number of fixed simulation
//! steps, carrying the fractional remainder into the next poll.

use std::time::Instant;

/// Time accumulator that hands out fixed-size steps
#[derive(Debug, Clone)]
pub struct StepAccumulator {
    dt: f32,
    max_steps: u32,
    acc: f32,
}

impl StepAccumulator {
    pub fn new(dt: f32, max_steps: u32) -> Self {
        Self {
            dt,
            max_steps,
            acc: 0.0,
        }
    }

    /// Fixed step duration
    #[inline]
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Time carried over to the next poll (always less than one step)
    #[inline]
    pub fn remainder(&self) -> f32 {
        self.acc
    }

    /// Add `elapsed` seconds and return how many steps are now due
    ///
    /// At most `max_steps` are returned. When more were due, the backlog
    /// beyond the clamp is dropped and only the sub-step remainder is kept.
    pub fn accumulate(&mut self, elapsed: f32) -> u32 {
        if elapsed.is_finite() && elapsed > 0.0 {
            self.acc += elapsed;
        }

        let due = (self.acc / self.dt).floor();
        self.acc -= due * self.dt;
        // Float error can leave a remainder a hair below zero or at dt
        if self.acc < 0.0 {
            self.acc = 0.0;
        }

        if due > self.max_steps as f32 {
            log::warn!(
                "Dropping {} simulation steps (clamped to {})",
                due as u64 - self.max_steps as u64,
                self.max_steps
            );
            self.max_steps
        } else {
            due as u32
        }
    }

    /// Let `elapsed` pass without simulating it
    ///
    /// Whole steps are dropped silently; the sub-step remainder is kept so
    /// the step grid stays aligned with wall-clock time.
    pub fn skip(&mut self, elapsed: f32) {
        if elapsed.is_finite() && elapsed > 0.0 {
            self.acc += elapsed;
        }
        self.acc = self.acc.rem_euclid(self.dt);
    }

    /// Drop any accumulated time
    pub fn reset(&mut self) {
        self.acc = 0.0;
    }
}

/// Wall-clock driven accumulator
#[derive(Debug, Clone)]
pub struct FrameClock {
    accumulator: StepAccumulator,
    last_t: Instant,
}

impl FrameClock {
    pub fn new(dt: f32, max_steps: u32) -> Self {
        Self {
            accumulator: StepAccumulator::new(dt, max_steps),
            last_t: Instant::now(),
        }
    }

    /// Restart timing from `instant` with an empty accumulator
    pub fn set_now(&mut self, instant: Instant) {
        self.last_t = instant;
        self.accumulator.reset();
    }

    /// Steps due since the previous poll
    pub fn poll(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_t).as_secs_f32();
        self.last_t = now;
        self.accumulator.accumulate(elapsed)
    }

    pub fn accumulator(&self) -> &StepAccumulator {
        &self.accumulator
    }
}
