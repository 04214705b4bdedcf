//! Platform abstraction layer
//!
//! The window/event backend only has to answer one question per frame:
//! is the jump key down? Edge detection happens here so a held key counts
//! as a single press.

/// Level-triggered jump key query, polled once per frame
pub trait InputSource {
    fn is_jump_pressed(&mut self) -> bool;
}

impl<F: FnMut() -> bool> InputSource for F {
    fn is_jump_pressed(&mut self) -> bool {
        self()
    }
}

/// Turns the key level into one action per press
#[derive(Debug, Clone, Default)]
pub struct JumpTrigger {
    was_down: bool,
}

impl JumpTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// True only on the frame the key goes down
    pub fn update(&mut self, down: bool) -> bool {
        let pressed = down && !self.was_down;
        self.was_down = down;
        pressed
    }

    /// Poll `input` once and report a fresh press
    pub fn poll(&mut self, input: &mut impl InputSource) -> bool {
        let down = input.is_jump_pressed();
        self.update(down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_key_fires_once() {
        let mut trigger = JumpTrigger::new();
        assert!(trigger.update(true));
        assert!(!trigger.update(true));
        assert!(!trigger.update(true));
        assert!(!trigger.update(false));
        assert!(trigger.update(true));
    }

    #[test]
    fn test_poll_closure_source() {
        let mut levels = [false, true, true, false, true].into_iter();
        let mut source = move || levels.next().unwrap_or(false);
        let mut trigger = JumpTrigger::new();
        let fired: Vec<bool> = (0..5).map(|_| trigger.poll(&mut source)).collect();
        assert_eq!(fired, [false, true, false, false, true]);
    }
}
