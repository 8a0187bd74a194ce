//! Input processing for the CLI client.
//!
//! This module owns the crossterm-to-[`Key`] mapping so screens only ever see
//! the edge-triggered [`Keyboard`](client_frontend_core::Keyboard). Most
//! terminals report presses only; for those the handler synthesizes the
//! matching release one frame later.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use client_frontend_core::{Key, KeyTransition};

/// Translates `KeyEvent`s into per-frame key transitions.
#[derive(Debug, Default)]
pub struct InputHandler {
    /// Keys pressed last frame still awaiting a synthetic release.
    pending_release: Vec<Key>,
    /// Set once the terminal has delivered a real release event.
    reports_releases: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps a raw key code onto a game key.
    pub fn map_key(code: KeyCode) -> Option<Key> {
        match code {
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'w' => Some(Key::W),
                'a' => Some(Key::A),
                's' => Some(Key::S),
                'd' => Some(Key::D),
                'm' => Some(Key::M),
                ' ' => Some(Key::Space),
                _ => None,
            },
            KeyCode::Up => Some(Key::W),
            KeyCode::Left => Some(Key::A),
            KeyCode::Down => Some(Key::S),
            KeyCode::Right => Some(Key::D),
            KeyCode::Enter => Some(Key::Enter),
            KeyCode::Backspace => Some(Key::Backspace),
            KeyCode::Esc => Some(Key::Escape),
            _ => None,
        }
    }

    /// Transitions for one frame, given the key events read during it.
    pub fn frame_transitions(&mut self, events: &[KeyEvent]) -> Vec<KeyTransition> {
        if events.iter().any(|event| event.kind == KeyEventKind::Release) {
            self.reports_releases = true;
        }

        let mut transitions: Vec<KeyTransition> = self
            .pending_release
            .drain(..)
            .map(KeyTransition::Up)
            .collect();

        for event in events {
            let Some(key) = Self::map_key(event.code) else {
                continue;
            };
            match event.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    transitions.push(KeyTransition::Down(key));
                    if !self.reports_releases && !self.pending_release.contains(&key) {
                        self.pending_release.push(key);
                    }
                }
                KeyEventKind::Release => transitions.push(KeyTransition::Up(key)),
            }
        }
        transitions
    }
}
