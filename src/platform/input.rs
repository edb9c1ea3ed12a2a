//! Keyboard and touch state -> per-tick input
//!
//! Keys are tracked by their `KeyboardEvent.code` string. On-screen touch
//! buttons press and release the same codes, so the sim never knows which
//! device produced a direction.

use std::collections::HashSet;

use crate::sim::TickInput;

pub const KEY_LEFT: &str = "ArrowLeft";
pub const KEY_RIGHT: &str = "ArrowRight";
pub const KEY_UP: &str = "ArrowUp";
pub const KEY_DOWN: &str = "ArrowDown";
pub const KEY_SPACE: &str = "Space";
pub const KEY_ENTER: &str = "Enter";
pub const KEY_PAUSE: &str = "KeyP";
pub const KEY_ESCAPE: &str = "Escape";

/// On-screen touch controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchButton {
    Left,
    Right,
    Up,
    Down,
    Confirm,
}

impl TouchButton {
    /// Key code this button stands in for
    pub fn code(self) -> &'static str {
        match self {
            TouchButton::Left => KEY_LEFT,
            TouchButton::Right => KEY_RIGHT,
            TouchButton::Up => KEY_UP,
            TouchButton::Down => KEY_DOWN,
            TouchButton::Confirm => KEY_SPACE,
        }
    }
}

/// Currently held keys plus pending one-shot requests
#[derive(Debug, Default)]
pub struct KeyState {
    held: HashSet<String>,
    pause_requested: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, code: &str) {
        // Auto-repeat must not toggle pause every frame
        let fresh = self.held.insert(code.to_string());
        if fresh && matches!(code, KEY_PAUSE | KEY_ESCAPE) {
            self.pause_requested = true;
        }
    }

    pub fn key_up(&mut self, code: &str) {
        self.held.remove(code);
    }

    pub fn touch_start(&mut self, button: TouchButton) {
        self.key_down(button.code());
    }

    pub fn touch_end(&mut self, button: TouchButton) {
        self.key_up(button.code());
    }

    /// Drop every held key, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    #[inline]
    pub fn is_held(&self, code: &str) -> bool {
        self.held.contains(code)
    }

    /// Input for the next tick. Consumes a pending pause request.
    pub fn snapshot(&mut self) -> TickInput {
        let input = TickInput {
            left: self.is_held(KEY_LEFT),
            right: self.is_held(KEY_RIGHT),
            up: self.is_held(KEY_UP),
            down: self.is_held(KEY_DOWN),
            confirm: self.is_held(KEY_SPACE) || self.is_held(KEY_ENTER),
            pause: self.pause_requested,
        };
        self.pause_requested = false;
        input
    }
}
