//! Fixed-size window of scrolling obstacles
//!
//! Slots are never added or removed: an obstacle that scrolls off the left
//! edge is moved far to the right and regenerated in place. Slot order is
//! spawn order, but recycled slots are not re-sorted by x.

use super::obstacle::{Obstacle, ObstacleGenerator};
use crate::config::{RecycleSpacing, SimulationConfig};

#[derive(Debug, Clone)]
pub struct ObstacleRing {
    slots: Box<[Obstacle]>,
    spawn_x: f32,
    gap_x: f32,
    gap_x_jitter: f32,
    scroll_speed: f32,
    recycle_threshold: f32,
    half_jitter_jump: f32,
    spacing: RecycleSpacing,
}

impl ObstacleRing {
    /// Seed `obstacle_count` obstacles starting just past the right edge
    pub fn populate(config: &SimulationConfig, generator: &mut ObstacleGenerator) -> Self {
        let placeholder = Obstacle::new(0.0, 0.0, 0.0);
        let mut ring = Self {
            slots: vec![placeholder; config.obstacle_count].into_boxed_slice(),
            spawn_x: config.screen_width + config.obstacle_width,
            gap_x: config.gap_x,
            gap_x_jitter: config.gap_x_jitter,
            scroll_speed: config.scroll_speed,
            recycle_threshold: config.recycle_threshold(),
            half_jitter_jump: config.recycle_jump(0.5),
            spacing: config.recycle_spacing,
        };
        ring.repopulate(generator);
        ring
    }

    /// Regenerate every slot from scratch, as at game start
    pub fn repopulate(&mut self, generator: &mut ObstacleGenerator) {
        let mut x = self.spawn_x;
        for slot in self.slots.iter_mut() {
            *slot = generator.generate(x);
            x += self.gap_x + generator.spacing_unit() * self.gap_x_jitter;
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Obstacle> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.slots.iter()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.slots
    }

    /// Scroll one slot left by `scroll_speed * dt`
    #[inline]
    pub fn advance_slot(&mut self, index: usize, dt: f32) {
        self.slots[index].x -= self.scroll_speed * dt;
    }

    /// Move a slot that left the screen far to the right with new geometry
    ///
    /// Returns whether the slot was recycled.
    pub fn recycle_if_offscreen(&mut self, index: usize, generator: &mut ObstacleGenerator) -> bool {
        let old_x = self.slots[index].x;
        if old_x >= self.recycle_threshold {
            return false;
        }

        let jump = match self.spacing {
            RecycleSpacing::HalfJitter => self.half_jitter_jump,
            RecycleSpacing::FreshDraw => {
                self.len() as f32 * (self.gap_x + generator.spacing_unit() * self.gap_x_jitter)
            }
        };
        let fresh = generator.generate(old_x + jump);
        self.slots[index] = fresh;
        log::debug!(
            "Recycled obstacle {} from x={:.1} to x={:.1} (opening {:.1}..{:.1})",
            index,
            old_x,
            fresh.x,
            fresh.y2,
            fresh.y1
        );
        true
    }

    /// Scroll every slot and recycle the ones that left the screen
    ///
    /// Returns how many slots were recycled.
    pub fn advance(&mut self, dt: f32, generator: &mut ObstacleGenerator) -> usize {
        let mut recycled = 0;
        for index in 0..self.len() {
            self.advance_slot(index, dt);
            if self.recycle_if_offscreen(index, generator) {
                recycled += 1;
            }
        }
        recycled
    }

    /// Overwrite a slot directly (scenario setup)
    pub fn set(&mut self, index: usize, obstacle: Obstacle) {
        self.slots[index] = obstacle;
    }
}
