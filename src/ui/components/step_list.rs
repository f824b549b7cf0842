use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::palette::{
    ACCENT_PRIMARY, ACCENT_SUCCESS, BORDER_DEFAULT, SELECTED_BG, TEXT_BRIGHT, TEXT_MUTED,
    TEXT_SECONDARY,
};
use super::truncate_to_width;
use crate::script::StepScript;

/// Narrated list of script steps with the cursor highlighted.
///
/// Applied steps are checked off, the step the next advance will apply is
/// marked, and the list scrolls to keep that step in view.
pub struct StepList<'a> {
    script: &'a StepScript,
    cursor: usize,
}

impl<'a> StepList<'a> {
    pub fn new(script: &'a StepScript, cursor: usize) -> Self {
        Self { script, cursor }
    }

    /// First visible row so that the cursor sits near the middle
    pub fn scroll_offset(&self, visible_rows: usize) -> usize {
        if visible_rows == 0 {
            return 0;
        }
        let max_offset = self.script.len().saturating_sub(visible_rows);
        self.cursor
            .saturating_sub(visible_rows / 2)
            .min(max_offset)
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_DEFAULT))
            .title(Span::styled(
                format!(" Script: {} ", self.script.name()),
                Style::default()
                    .fg(ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let visible = inner.height as usize;
        let offset = self.scroll_offset(visible);
        let number_width = self.script.len().to_string().len();
        // marker + space + number + ". "
        let prefix_width = 2 + number_width + 2;
        let text_width = (inner.width as usize).saturating_sub(prefix_width);

        let lines: Vec<Line> = self
            .script
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(index, step)| {
                let (marker, marker_style, text_style) = if index < self.cursor {
                    (
                        "✓",
                        Style::default().fg(ACCENT_SUCCESS),
                        Style::default().fg(TEXT_MUTED),
                    )
                } else if index == self.cursor {
                    (
                        "▶",
                        Style::default().fg(ACCENT_PRIMARY).bg(SELECTED_BG),
                        Style::default()
                            .fg(TEXT_BRIGHT)
                            .bg(SELECTED_BG)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    (
                        " ",
                        Style::default(),
                        Style::default().fg(TEXT_SECONDARY),
                    )
                };
                Line::from(vec![
                    Span::styled(format!("{} ", marker), marker_style),
                    Span::styled(
                        format!("{:>width$}. ", index + 1, width = number_width),
                        text_style,
                    ),
                    Span::styled(truncate_to_width(&step.description, text_width), text_style),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
