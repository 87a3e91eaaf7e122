//! Edge-triggered input state machine
//!
//! Raw press/release events land here between simulation steps; `update()`
//! derives the one-step jump edge right before each polling batch is
//! consumed. A tap that is pressed and released inside a single batch is
//! buffered so the jump is never lost to poll timing.

/// The four logical buttons the simulation consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
    Jump,
    Run,
}

/// Held-state booleans plus the derived jump edge.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub run_held: bool,
    pub jump_held: bool,
    /// True for exactly one step after jump transitions to held (or a
    /// buffered tap occurred); cleared by the next `update()`
    pub jump_pressed: bool,
    prev_jump_held: bool,
    buffered_jump: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw press event. `repeat` marks OS key-repeat; repeats keep
    /// the held state but never arm the tap buffer.
    pub fn press(&mut self, button: Button, repeat: bool) {
        match button {
            Button::Left => self.left = true,
            Button::Right => self.right = true,
            Button::Run => self.run_held = true,
            Button::Jump => {
                self.jump_held = true;
                if !repeat {
                    self.buffered_jump = true;
                }
            }
        }
    }

    /// Record a raw release event.
    pub fn release(&mut self, button: Button) {
        match button {
            Button::Left => self.left = false,
            Button::Right => self.right = false,
            Button::Run => self.run_held = false,
            Button::Jump => self.jump_held = false,
        }
    }

    /// Derive the jump edge from events received since the last call.
    /// Call once per polling batch, after all events are applied.
    pub fn update(&mut self) {
        self.jump_pressed = (self.jump_held && !self.prev_jump_held) || self.buffered_jump;
        self.prev_jump_held = self.jump_held;
        self.buffered_jump = false;
    }
}
