//! Blits the screen's [`TextBuffer`] onto the ratatui buffer.

use client_frontend_core::{Canvas, TextBuffer};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::presentation::theme::RatatuiTheme;

/// Borrowed view of a text buffer, clipped to the target area.
pub struct CanvasView<'a> {
    buffer: &'a TextBuffer,
    theme: RatatuiTheme,
}

impl<'a> CanvasView<'a> {
    pub fn new(buffer: &'a TextBuffer, theme: RatatuiTheme) -> Self {
        Self { buffer, theme }
    }
}

impl Widget for CanvasView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = self.buffer.height().min(area.height);
        let width = self.buffer.width().min(area.width);
        for y in 0..height {
            for (x, cell) in (0..width).zip(self.buffer.row(y)) {
                if let Some(target) = buf.cell_mut((area.x + x, area.y + y)) {
                    target
                        .set_char(cell.glyph)
                        .set_style(self.theme.style(cell.colour));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::Colour;
    use ratatui::style::Color;

    #[test]
    fn copies_glyphs_and_colours_within_area() {
        let mut text = TextBuffer::new(6, 2);
        text.write(0, 0, "Potion", Colour::Green).unwrap();
        text.write(0, 1, "x5", Colour::White).unwrap();

        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));
        CanvasView::new(&text, RatatuiTheme::new()).render(Rect::new(0, 0, 4, 2), &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "P");
        assert_eq!(buf[(3, 0)].symbol(), "i");
        assert_eq!(buf[(0, 0)].fg, Color::Green);
        assert_eq!(buf[(1, 1)].symbol(), "5");
    }
}
