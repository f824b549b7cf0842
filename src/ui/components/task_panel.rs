use std::collections::VecDeque;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::palette::{
    ACCENT_MACROTASK, ACCENT_MICROTASK, ACCENT_PRIMARY, BORDER_DEFAULT, TEXT_FAINT, TEXT_PRIMARY,
};
use super::truncate_to_width;

/// Which runtime structure a panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    CallStack,
    Microtasks,
    Macrotasks,
}

impl PanelKind {
    fn title(&self) -> &'static str {
        match self {
            PanelKind::CallStack => "Call Stack",
            PanelKind::Microtasks => "Microtask Queue",
            PanelKind::Macrotasks => "Macrotask Queue",
        }
    }

    fn accent(&self) -> Color {
        match self {
            PanelKind::CallStack => ACCENT_PRIMARY,
            PanelKind::Microtasks => ACCENT_MICROTASK,
            PanelKind::Macrotasks => ACCENT_MACROTASK,
        }
    }
}

/// Bordered list of call-stack frames or queued tasks.
///
/// The call stack is drawn top frame first; queues are drawn front first.
pub struct TaskPanel<'a> {
    kind: PanelKind,
    items: Vec<&'a str>,
}

impl<'a> TaskPanel<'a> {
    pub fn call_stack(frames: &'a [String]) -> Self {
        Self {
            kind: PanelKind::CallStack,
            items: frames.iter().rev().map(String::as_str).collect(),
        }
    }

    pub fn microtasks(queue: &'a VecDeque<String>) -> Self {
        Self {
            kind: PanelKind::Microtasks,
            items: queue.iter().map(String::as_str).collect(),
        }
    }

    pub fn macrotasks(queue: &'a VecDeque<String>) -> Self {
        Self {
            kind: PanelKind::Macrotasks,
            items: queue.iter().map(String::as_str).collect(),
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let accent = self.kind.accent();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_DEFAULT))
            .title(Span::styled(
                format!(" {} ({}) ", self.kind.title(), self.items.len()),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines: Vec<Line> = if self.items.is_empty() {
            vec![Line::from(Span::styled(
                "(empty)",
                Style::default().fg(TEXT_FAINT),
            ))]
        } else {
            let width = inner.width.saturating_sub(2) as usize;
            self.items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    // Highlight the frame or task that runs next
                    let style = if i == 0 {
                        Style::default().fg(accent).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(TEXT_PRIMARY)
                    };
                    Line::from(vec![
                        Span::styled(if i == 0 { "▸ " } else { "  " }, style),
                        Span::styled(truncate_to_width(item, width), style),
                    ])
                })
                .collect()
        };

        Paragraph::new(lines).render(inner, buf);
    }
}
