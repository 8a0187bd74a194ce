//! Ratatui widgets composing the terminal UI.

pub mod canvas;
pub mod messages;
