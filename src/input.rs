//! Keyboard and gamepad state
//!
//! The host feeds key presses/releases and an optional gamepad snapshot;
//! each tick reduces that to a [`TickInput`].

use std::collections::HashSet;

use crate::sim::TickInput;

/// Horizontal stick deflection needed to count as a direction
pub const AXIS_THRESHOLD: f32 = 0.5;

/// Standard gamepad button indices
pub const BUTTON_SOUTH: usize = 0;
pub const BUTTON_DPAD_UP: usize = 12;
pub const BUTTON_DPAD_LEFT: usize = 14;
pub const BUTTON_DPAD_RIGHT: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    A,
    D,
    W,
    Space,
}

impl Key {
    /// Map a DOM-style key name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "ArrowUp" => Some(Key::ArrowUp),
            "a" | "A" => Some(Key::A),
            "d" | "D" => Some(Key::D),
            "w" | "W" => Some(Key::W),
            " " | "Space" => Some(Key::Space),
            _ => None,
        }
    }
}

/// One poll of a gamepad
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GamepadSnapshot {
    pub axes: Vec<f32>,
    pub buttons: Vec<bool>,
}

impl GamepadSnapshot {
    /// Missing axes read as centered
    pub fn axis(&self, index: usize) -> f32 {
        self.axes.get(index).copied().unwrap_or(0.0)
    }

    /// Missing buttons read as released
    pub fn button(&self, index: usize) -> bool {
        self.buttons.get(index).copied().unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
    gamepad: Option<GamepadSnapshot>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the key was not already held
    pub fn press(&mut self, key: Key) -> bool {
        self.held.insert(key)
    }

    pub fn release(&mut self, key: Key) -> bool {
        self.held.remove(&key)
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn set_gamepad(&mut self, gamepad: Option<GamepadSnapshot>) {
        self.gamepad = gamepad;
    }

    pub fn controls(&self) -> TickInput {
        let pad = self.gamepad.as_ref();
        let pad_axis = |i| pad.map_or(0.0, |p| p.axis(i));
        let pad_button = |i| pad.is_some_and(|p| p.button(i));

        let left = self.is_held(Key::ArrowLeft)
            || self.is_held(Key::A)
            || pad_axis(0) < -AXIS_THRESHOLD
            || pad_button(BUTTON_DPAD_LEFT);
        let right = self.is_held(Key::ArrowRight)
            || self.is_held(Key::D)
            || pad_axis(0) > AXIS_THRESHOLD
            || pad_button(BUTTON_DPAD_RIGHT);
        let jump = self.is_held(Key::ArrowUp)
            || self.is_held(Key::W)
            || self.is_held(Key::Space)
            || pad_button(BUTTON_SOUTH)
            || pad_button(BUTTON_DPAD_UP);

        TickInput { left, right, jump }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad(axis0: f32, pressed: &[usize]) -> GamepadSnapshot {
        let mut buttons = vec![false; 16];
        for &b in pressed {
            buttons[b] = true;
        }
        GamepadSnapshot {
            axes: vec![axis0, 0.0],
            buttons,
        }
    }

    #[test]
    fn test_no_input_is_neutral() {
        assert_eq!(InputState::new().controls(), TickInput::default());
    }

    #[test]
    fn test_keyboard_mapping() {
        let mut input = InputState::new();
        input.press(Key::A);
        input.press(Key::Space);
        assert_eq!(
            input.controls(),
            TickInput {
                left: true,
                right: false,
                jump: true
            }
        );

        input.release(Key::A);
        input.release(Key::Space);
        input.press(Key::ArrowRight);
        input.press(Key::W);
        assert_eq!(
            input.controls(),
            TickInput {
                left: false,
                right: true,
                jump: true
            }
        );
    }

    #[test]
    fn test_press_reports_new_keys_only() {
        let mut input = InputState::new();
        assert!(input.press(Key::ArrowUp));
        assert!(!input.press(Key::ArrowUp));
        assert!(input.release(Key::ArrowUp));
        assert!(!input.release(Key::ArrowUp));
    }

    #[test]
    fn test_gamepad_stick_and_buttons() {
        let mut input = InputState::new();
        input.set_gamepad(Some(pad(-0.8, &[BUTTON_SOUTH])));
        let controls = input.controls();
        assert!(controls.left && !controls.right && controls.jump);

        input.set_gamepad(Some(pad(0.3, &[BUTTON_DPAD_RIGHT, BUTTON_DPAD_UP])));
        let controls = input.controls();
        assert!(!controls.left && controls.right && controls.jump);

        // Inside the dead zone
        input.set_gamepad(Some(pad(0.5, &[])));
        assert_eq!(input.controls(), TickInput::default());
    }

    #[test]
    fn test_short_gamepad_is_neutral() {
        let mut input = InputState::new();
        input.set_gamepad(Some(GamepadSnapshot::default()));
        assert_eq!(input.controls(), TickInput::default());
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::ArrowLeft));
        assert_eq!(Key::from_name(" "), Some(Key::Space));
        assert_eq!(Key::from_name("d"), Some(Key::D));
        assert_eq!(Key::from_name("Escape"), None);
        assert_eq!(Key::from_name("ArrowDown"), None);
    }
}
