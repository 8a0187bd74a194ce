//! Edge-triggered keyboard state.
//!
//! The frontend feeds one batch of [`KeyTransition`]s per frame into
//! [`Keyboard::update`]. "Just pressed" and "just released" hold for exactly
//! that frame; "held" lasts until the matching release.

use bitflags::bitflags;
use strum::EnumCount;

/// Keys the screens react to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumCount, strum::EnumIter,
)]
pub enum Key {
    W,
    A,
    S,
    D,
    M,
    Space,
    Enter,
    Backspace,
    Escape,
}

bitflags! {
    /// Per-key state bits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct KeyState: u8 {
        const HELD          = 1 << 0;
        const JUST_PRESSED  = 1 << 1;
        const JUST_RELEASED = 1 << 2;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyTransition {
    Down(Key),
    Up(Key),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Keyboard {
    states: [KeyState; Key::COUNT],
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame: expire last frame's edges, then apply `transitions`.
    pub fn update(&mut self, transitions: &[KeyTransition]) {
        for state in &mut self.states {
            state.remove(KeyState::JUST_PRESSED | KeyState::JUST_RELEASED);
        }
        for transition in transitions {
            match *transition {
                KeyTransition::Down(key) => {
                    let state = &mut self.states[key as usize];
                    if !state.contains(KeyState::HELD) {
                        state.insert(KeyState::HELD | KeyState::JUST_PRESSED);
                    }
                }
                KeyTransition::Up(key) => {
                    let state = &mut self.states[key as usize];
                    if state.contains(KeyState::HELD) {
                        state.remove(KeyState::HELD);
                        state.insert(KeyState::JUST_RELEASED);
                    }
                }
            }
        }
    }

    pub fn state(&self, key: Key) -> KeyState {
        self.states[key as usize]
    }

    pub fn is_key_just_pressed(&self, key: Key) -> bool {
        self.state(key).contains(KeyState::JUST_PRESSED)
    }

    pub fn is_key_held(&self, key: Key) -> bool {
        self.state(key).contains(KeyState::HELD)
    }

    pub fn is_key_just_released(&self, key: Key) -> bool {
        self.state(key).contains(KeyState::JUST_RELEASED)
    }

    /// Keyboard with `keys` pressed this frame. Test and replay helper.
    pub fn pressed(keys: &[Key]) -> Self {
        let mut keyboard = Self::new();
        let transitions: Vec<KeyTransition> = keys.iter().copied().map(KeyTransition::Down).collect();
        keyboard.update(&transitions);
        keyboard
    }
}
