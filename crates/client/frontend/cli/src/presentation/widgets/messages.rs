//! Message log panel.

use client_frontend_core::{Colour, MessageLog};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Newest messages at the bottom, as many as fit inside the border.
pub fn render(frame: &mut Frame, area: Rect, log: &MessageLog, theme: &RatatuiTheme) {
    let visible = usize::from(area.height.saturating_sub(2));
    let mut lines: Vec<Line> = log
        .recent(visible)
        .map(|entry| {
            let stamp = entry
                .frame
                .map(|tick| format!("[{tick:>6}] "))
                .unwrap_or_default();
            Line::from(vec![
                Span::styled(stamp, theme.style(Colour::Grey)),
                Span::styled(entry.text.clone(), theme.style_message(entry.level)),
            ])
        })
        .collect();
    lines.reverse();

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(" Messages "),
    );
    frame.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::{MessageEntry, MessageLevel};
    use ratatui::{Terminal, backend::TestBackend};

    fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn newest_message_is_last() {
        let mut log = MessageLog::new(8);
        log.push_text("first");
        log.push_text("second");
        log.push(MessageEntry::new("third", Some(12), MessageLevel::Warning));

        let mut terminal = Terminal::new(TestBackend::new(30, 4)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &log, &RatatuiTheme::new()))
            .unwrap();

        assert!(row(&terminal, 0).contains("Messages"));
        assert!(row(&terminal, 1).contains("second"));
        assert!(row(&terminal, 2).contains("[    12] third"));
    }
}
