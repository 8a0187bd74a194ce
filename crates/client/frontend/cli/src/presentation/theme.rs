//! Ratatui styling for canvas colours and message levels.

use client_frontend_core::{Colour, MessageLevel};
use ratatui::style::{Color, Modifier, Style};

/// Maps the frontend palette onto terminal colours.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    pub fn color(&self, colour: Colour) -> Color {
        match colour {
            Colour::Black => Color::Black,
            Colour::Red => Color::LightRed,
            Colour::Green => Color::Green,
            Colour::Yellow => Color::Yellow,
            Colour::Blue => Color::LightBlue,
            Colour::Magenta => Color::Magenta,
            Colour::Cyan => Color::Cyan,
            Colour::White => Color::White,
            Colour::Grey => Color::DarkGray,
        }
    }

    pub fn style(&self, colour: Colour) -> Style {
        let style = Style::default().fg(self.color(colour));
        match colour {
            Colour::Yellow => style.add_modifier(Modifier::BOLD),
            _ => style,
        }
    }

    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn border(&self) -> Style {
        Style::default().fg(Color::Gray)
    }
}
