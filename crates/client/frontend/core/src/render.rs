//! Write-only character grid that screens draw into.
//!
//! Screens never talk to a terminal. They write coloured text into a
//! [`Canvas`]; the concrete [`TextBuffer`] is handed to a frontend that
//! presents it.

/// Palette available to screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
pub enum Colour {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    #[default]
    White,
    Grey,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("write of width {len} at ({x}, {y}) exceeds the {width}x{height} canvas")]
    OutOfBounds {
        x: u16,
        y: u16,
        len: usize,
        width: u16,
        height: u16,
    },
}

/// Render collaborator.
///
/// A write that would cross the canvas edge writes nothing and returns
/// [`RenderError::OutOfBounds`]; text never wraps.
pub trait Canvas {
    fn width(&self) -> u16;

    fn height(&self) -> u16;

    fn write(&mut self, x: u16, y: u16, text: &str, colour: Colour) -> Result<(), RenderError>;

    fn clear(&mut self);

    fn draw_panel_horz(
        &mut self,
        x: u16,
        y: u16,
        len: u16,
        colour: Colour,
        glyph: char,
    ) -> Result<(), RenderError> {
        let line: String = std::iter::repeat_n(glyph, usize::from(len)).collect();
        self.write(x, y, &line, colour)
    }

    fn draw_panel_vert(
        &mut self,
        x: u16,
        y: u16,
        len: u16,
        colour: Colour,
        glyph: char,
    ) -> Result<(), RenderError> {
        let end = u32::from(y) + u32::from(len);
        if end > u32::from(self.height()) {
            return Err(RenderError::OutOfBounds {
                x,
                y,
                len: usize::from(len),
                width: self.width(),
                height: self.height(),
            });
        }
        let mut buffer = [0u8; 4];
        let glyph = glyph.encode_utf8(&mut buffer);
        for row in y..y + len {
            self.write(x, row, glyph, colour)?;
        }
        Ok(())
    }

    /// Rectangle outline whose top-left corner is at `(x, y)`.
    fn draw_panel(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        colour: Colour,
    ) -> Result<(), RenderError> {
        if width < 2 || height < 2 {
            return Ok(());
        }
        let inner = width - 2;
        let edge = format!("+{}+", "-".repeat(usize::from(inner)));
        self.write(x, y, &edge, colour)?;
        self.write(x, y + height - 1, &edge, colour)?;
        self.draw_panel_vert(x, y + 1, height - 2, colour, '|')?;
        self.draw_panel_vert(x + width - 1, y + 1, height - 2, colour, '|')
    }
}

/// One character cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub colour: Colour,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            colour: Colour::White,
        }
    }
}

/// Fixed-size grid of [`Cell`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl TextBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
        }
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(self.offset(x, y)).copied()
    }

    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = self.offset(0, y);
        &self.cells[start..start + usize::from(self.width)]
    }

    /// Glyphs of row `y` with trailing blanks removed.
    pub fn row_text(&self, y: u16) -> String {
        let text: String = self.row(y).iter().map(|cell| cell.glyph).collect();
        text.trim_end().to_owned()
    }

    /// Whether any row contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        (0..self.height).any(|y| self.row_text(y).contains(needle))
    }

    fn offset(&self, x: u16, y: u16) -> usize {
        usize::from(y) * usize::from(self.width) + usize::from(x)
    }
}

impl Canvas for TextBuffer {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn write(&mut self, x: u16, y: u16, text: &str, colour: Colour) -> Result<(), RenderError> {
        let len = text.chars().count();
        if y >= self.height || usize::from(x) + len > usize::from(self.width) {
            return Err(RenderError::OutOfBounds {
                x,
                y,
                len,
                width: self.width,
                height: self.height,
            });
        }
        let start = self.offset(x, y);
        for (cell, glyph) in self.cells[start..start + len].iter_mut().zip(text.chars()) {
            *cell = Cell { glyph, colour };
        }
        Ok(())
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_places_coloured_text() {
        let mut buffer = TextBuffer::new(10, 3);
        buffer.write(2, 1, "BUY", Colour::Red).unwrap();
        assert_eq!(buffer.row_text(1), "  BUY");
        assert_eq!(
            buffer.cell(2, 1),
            Some(Cell {
                glyph: 'B',
                colour: Colour::Red
            })
        );
    }

    #[test]
    fn out_of_bounds_writes_nothing() {
        let mut buffer = TextBuffer::new(5, 2);
        assert!(matches!(
            buffer.write(3, 0, "abc", Colour::White),
            Err(RenderError::OutOfBounds { .. })
        ));
        assert!(buffer.write(0, 2, "a", Colour::White).is_err());
        assert_eq!(buffer.row_text(0), "");
        assert!(buffer.write(2, 0, "abc", Colour::White).is_ok());
    }

    #[test]
    fn panel_outline() {
        let mut buffer = TextBuffer::new(6, 4);
        buffer.draw_panel(0, 0, 5, 3, Colour::White).unwrap();
        assert_eq!(buffer.row_text(0), "+---+");
        assert_eq!(buffer.row_text(1), "|   |");
        assert_eq!(buffer.row_text(2), "+---+");
        assert!(buffer.draw_panel(2, 2, 5, 3, Colour::White).is_err());
    }

    #[test]
    fn clear_resets_cells() {
        let mut buffer = TextBuffer::new(4, 1);
        buffer.draw_panel_horz(0, 0, 4, Colour::Blue, '=').unwrap();
        assert_eq!(buffer.row_text(0), "====");
        buffer.clear();
        assert_eq!(buffer.row_text(0), "");
    }
}
