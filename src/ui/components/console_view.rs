use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::palette::{ACCENT_SUCCESS, BORDER_DEFAULT, TEXT_BRIGHT, TEXT_FAINT};
use super::truncate_to_width;

/// Simulated console output, newest line at the bottom
pub struct ConsoleView<'a> {
    lines: &'a [String],
}

impl<'a> ConsoleView<'a> {
    pub fn new(lines: &'a [String]) -> Self {
        Self { lines }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_DEFAULT))
            .title(Span::styled(
                " Console ",
                Style::default()
                    .fg(ACCENT_SUCCESS)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.lines.is_empty() {
            Paragraph::new(Span::styled(
                "(no output yet)",
                Style::default().fg(TEXT_FAINT),
            ))
            .render(inner, buf);
            return;
        }

        // Keep the tail visible when output outgrows the panel
        let visible = inner.height as usize;
        let skip = self.lines.len().saturating_sub(visible);
        let width = inner.width.saturating_sub(2) as usize;
        let lines: Vec<Line> = self
            .lines
            .iter()
            .skip(skip)
            .map(|line| {
                Line::from(vec![
                    Span::styled("› ", Style::default().fg(TEXT_FAINT)),
                    Span::styled(
                        truncate_to_width(line, width),
                        Style::default().fg(TEXT_BRIGHT),
                    ),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
