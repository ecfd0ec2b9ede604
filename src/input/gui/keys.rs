use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::core::animation::PanControlsSnapshot;

/// Held arrow keys plus a pending Escape press, accumulated from keyboard
/// events between frames.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyState {
    left_held: bool,
    right_held: bool,
    up_held: bool,
    down_held: bool,
    quit_pending: bool,
}

impl KeyState {
    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        match key_code {
            KeyCode::ArrowLeft => self.left_held = pressed,
            KeyCode::ArrowRight => self.right_held = pressed,
            KeyCode::ArrowUp => self.up_held = pressed,
            KeyCode::ArrowDown => self.down_held = pressed,
            KeyCode::Escape if pressed => self.quit_pending = true,
            _ => {}
        }
    }

    pub fn quit_pending(&self) -> bool {
        self.quit_pending
    }

    pub fn snapshot(&self) -> PanControlsSnapshot {
        PanControlsSnapshot {
            left: self.left_held,
            right: self.right_held,
            up: self.up_held,
            down: self.down_held,
        }
    }

    /// Releases every held key, e.g. when the window loses focus and
    /// release events would otherwise be missed.
    pub fn release_all(&mut self) {
        *self = Self {
            quit_pending: self.quit_pending,
            ..Self::default()
        };
    }
}
