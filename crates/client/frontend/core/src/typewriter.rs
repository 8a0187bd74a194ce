//! Dialog box that reveals its text one character at a time.

use crate::render::{Canvas, Colour, RenderError};

/// Split `text` into lines of at most `width` characters.
///
/// A line ends at `\n`, or at the last space, `!` or `?` before the limit.
/// A run with no break character is cut at the limit.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let chars: Vec<char> = text.chars().collect();
    let mut lines = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let limit = (start + width).min(chars.len());
        if let Some(newline) = chars[start..limit].iter().position(|&c| c == '\n') {
            lines.push(chars[start..start + newline].iter().collect());
            start += newline + 1;
            continue;
        }
        if limit == chars.len() {
            lines.push(chars[start..].iter().collect());
            break;
        }

        let end = chars[start..limit]
            .iter()
            .rposition(|&c| matches!(c, ' ' | '!' | '?'))
            .map_or(limit, |position| start + position + 1);
        let line: String = chars[start..end].iter().collect();
        lines.push(line.trim_end().to_owned());
        start = end;
    }
    lines
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    x: u16,
    y: u16,
    wrap: u16,
    speed: u32,
    lines: Vec<String>,
    total: usize,
    revealed: usize,
    frames: u32,
    text_colour: Colour,
    border_colour: Colour,
}

impl Typewriter {
    /// Text starts at `(x, y)`; the border sits two cells up and left of it.
    pub fn new(x: u16, y: u16, text: &str, wrap: u16, speed: u32) -> Self {
        let mut typewriter = Self {
            x,
            y,
            wrap: wrap.max(1),
            speed: speed.max(1),
            lines: Vec::new(),
            total: 0,
            revealed: 0,
            frames: 0,
            text_colour: Colour::White,
            border_colour: Colour::Cyan,
        };
        typewriter.set_text(text);
        typewriter
    }

    pub fn with_colours(mut self, text: Colour, border: Colour) -> Self {
        self.text_colour = text;
        self.border_colour = border;
        self
    }

    /// Replace the text and restart the reveal.
    pub fn set_text(&mut self, text: &str) {
        self.lines = wrap_text(text, usize::from(self.wrap));
        self.total = self.lines.iter().map(|line| line.chars().count()).sum();
        self.revealed = 0;
        self.frames = 0;
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Advance one frame.
    pub fn update(&mut self) {
        if self.finished() {
            return;
        }
        self.frames += 1;
        if self.frames >= self.speed {
            self.frames = 0;
            self.revealed += 1;
        }
    }

    pub fn finished(&self) -> bool {
        self.revealed >= self.total
    }

    pub fn skip(&mut self) {
        self.revealed = self.total;
    }

    pub fn revealed_text(&self) -> String {
        let mut remaining = self.revealed;
        let mut shown = Vec::new();
        for line in &self.lines {
            if remaining == 0 {
                break;
            }
            let count = remaining.min(line.chars().count());
            shown.push(line.chars().take(count).collect::<String>());
            remaining -= count;
        }
        shown.join("\n")
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) -> Result<(), RenderError> {
        let rows = u16::try_from(self.lines.len()).unwrap_or(u16::MAX);
        canvas.draw_panel(
            self.x.saturating_sub(2),
            self.y.saturating_sub(2),
            self.wrap.saturating_add(3),
            rows.saturating_add(3),
            self.border_colour,
        )?;

        let mut remaining = self.revealed;
        for (row, line) in (self.y..).zip(&self.lines) {
            if remaining == 0 {
                break;
            }
            let count = remaining.min(line.chars().count());
            let shown: String = line.chars().take(count).collect();
            canvas.write(self.x, row, &shown, self.text_colour)?;
            remaining -= count;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TextBuffer;

    #[test]
    fn wraps_at_last_break_character() {
        assert_eq!(
            wrap_text("Hello there! How are you?", 10),
            ["Hello", "there!", "How are", "you?"]
        );
    }

    #[test]
    fn wraps_at_newline_and_hard_limit() {
        assert_eq!(wrap_text("Hi\nthere", 10), ["Hi", "there"]);
        assert_eq!(wrap_text("abcdefghij", 4), ["abcd", "efgh", "ij"]);
        assert!(wrap_text("", 4).is_empty());
    }

    #[test]
    fn reveals_one_character_per_speed_frames() {
        let mut typewriter = Typewriter::new(2, 2, "Hi you", 10, 2);
        typewriter.update();
        assert_eq!(typewriter.revealed_text(), "");
        typewriter.update();
        assert_eq!(typewriter.revealed_text(), "H");

        for _ in 0..20 {
            typewriter.update();
        }
        assert!(typewriter.finished());
        assert_eq!(typewriter.revealed_text(), "Hi you");
    }

    #[test]
    fn skip_reveals_everything() {
        let mut typewriter = Typewriter::new(2, 2, "Welcome to the shop!", 8, 5);
        assert!(!typewriter.finished());
        typewriter.skip();
        assert!(typewriter.finished());
        assert_eq!(typewriter.revealed_text(), "Welcome\nto the\nshop!");
    }

    #[test]
    fn draws_revealed_text_inside_border() {
        let mut typewriter = Typewriter::new(2, 2, "Hi you", 10, 1);
        typewriter.update();
        let mut buffer = TextBuffer::new(20, 6);
        typewriter.draw(&mut buffer).unwrap();

        assert_eq!(buffer.row_text(0), "+-----------+");
        assert_eq!(buffer.cell(2, 2).map(|c| c.glyph), Some('H'));
        assert_eq!(buffer.cell(3, 2).map(|c| c.glyph), Some(' '));
        assert_eq!(buffer.cell(12, 2).map(|c| c.glyph), Some('|'));
        assert_eq!(buffer.row_text(3), "+-----------+");
    }
}
