//! Composes the screen canvas and the message panel into one terminal frame.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::presentation::{terminal::Tui, theme::RatatuiTheme, widgets};
use client_frontend_core::{MessageLog, TextBuffer};

/// Everything the terminal needs to draw one frame.
pub struct RenderContext<'a> {
    pub canvas: &'a TextBuffer,
    pub messages: &'a MessageLog,
    pub message_panel_height: u16,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme::new();

    terminal.draw(|frame| {
        let chunks = split(frame.area(), ctx.message_panel_height);
        frame.render_widget(widgets::canvas::CanvasView::new(ctx.canvas, theme), chunks[0]);
        widgets::messages::render(frame, chunks[1], ctx.messages, &theme);
    })?;

    Ok(())
}

/// Canvas on top, message panel of fixed height below.
fn split(area: Rect, message_panel_height: u16) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                       // Screen canvas
            Constraint::Length(message_panel_height), // Messages
        ])
        .split(area);
    [chunks[0], chunks[1]]
}
