//! Keyboard input: held arrow keys to a movement vector.
use raylib::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Unit step direction, each component in {-1, 0, 1}.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Movement {
    pub dx: i32,
    pub dy: i32,
}

impl HeldKeys {
    pub fn movement(&self) -> Movement {
        Movement {
            dx: self.right as i32 - self.left as i32,
            dy: self.down as i32 - self.up as i32,
        }
    }
}

/// Where the frame loop gets its input from.
pub trait InputSource {
    /// Drains pending window events. Returns true once a quit was requested.
    fn poll_quit(&mut self) -> bool;
    fn held_keys(&self) -> HeldKeys;
}

pub fn read_held_keys(window: &RaylibHandle) -> HeldKeys {
    HeldKeys {
        up: window.is_key_down(KeyboardKey::KEY_UP),
        down: window.is_key_down(KeyboardKey::KEY_DOWN),
        left: window.is_key_down(KeyboardKey::KEY_LEFT),
        right: window.is_key_down(KeyboardKey::KEY_RIGHT),
    }
}
