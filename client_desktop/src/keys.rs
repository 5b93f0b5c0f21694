//! Keyboard input handling

use game_core::{HeldKeys, MatchLength, MenuChoice};
use winit::event::{ElementState, VirtualKeyCode};

/// Tracks which paddle keys are held between frames
#[derive(Debug, Default)]
pub struct KeyTracker {
    held: HeldKeys,
}

impl KeyTracker {
    /// Handle key down / key up
    pub fn record(&mut self, key: VirtualKeyCode, state: ElementState) {
        let pressed = state == ElementState::Pressed;
        match key {
            VirtualKeyCode::W => self.held.up = pressed,
            VirtualKeyCode::S => self.held.down = pressed,
            _ => {}
        }
    }

    /// Forget held keys, e.g. when the window loses focus and releases go missing
    pub fn clear(&mut self) {
        self.held = HeldKeys::new();
    }

    pub fn held(&self) -> HeldKeys {
        self.held
    }
}

/// Map a key press on the game-over screen to a menu selection
pub fn menu_choice_for_key(key: VirtualKeyCode) -> Option<MenuChoice> {
    match key {
        VirtualKeyCode::Key3 | VirtualKeyCode::Numpad3 => {
            Some(MenuChoice::Play(MatchLength::BestOf3))
        }
        VirtualKeyCode::Key5 | VirtualKeyCode::Numpad5 => {
            Some(MenuChoice::Play(MatchLength::BestOf5))
        }
        VirtualKeyCode::Key7 | VirtualKeyCode::Numpad7 => {
            Some(MenuChoice::Play(MatchLength::BestOf7))
        }
        VirtualKeyCode::Escape => Some(MenuChoice::Quit),
        _ => None,
    }
}
