use std::collections::HashSet;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Adapter that bridges Winit keyboard events to the Controller trait
///
/// Keys stay down from their press event until the matching release; there is
/// no debounce or repeat handling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
}

impl WinitController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            if let PhysicalKey::Code(keycode) = event.physical_key {
                self.process_key(keycode, event.state);
            }
        }
    }

    /// Apply one key transition
    pub fn process_key(&mut self, keycode: KeyCode, state: ElementState) {
        let Some(button) = Self::keycode_to_button(keycode) else {
            return;
        };
        match state {
            ElementState::Pressed => self.pressed_keys.insert(button),
            ElementState::Released => self.pressed_keys.remove(&button),
        };
    }

    /// Drop every held key, e.g. when the window loses focus and releases
    /// would otherwise go unseen
    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
    }

    /// Map Winit KeyCode to Button; the number row and the numpad both count
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::Digit1 | KeyCode::Numpad1 => Some(Button::Digit1),
            KeyCode::Digit2 | KeyCode::Numpad2 => Some(Button::Digit2),
            KeyCode::Digit3 | KeyCode::Numpad3 => Some(Button::Digit3),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }
}
