use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::key_hints::{key_hint_spans, KeyHintBarStyle};
use super::palette::{
    ACCENT_PRIMARY, ACCENT_SUCCESS, ACCENT_WARNING, KEY_HINT_BG, STATUS_BAR_BG, TEXT_BRIGHT,
    TEXT_FAINT, TEXT_MUTED,
};
use crate::engine::Phase;

/// Bottom bar: phase badge, step counter, and key hints
pub struct StatusBar {
    phase: Phase,
    cursor: usize,
    total: usize,
    playing: bool,
    spinner_frame: &'static str,
    hints: Vec<(String, String)>,
}

impl StatusBar {
    pub fn new(phase: Phase, cursor: usize, total: usize) -> Self {
        Self {
            phase,
            cursor,
            total,
            playing: false,
            spinner_frame: "",
            hints: Vec::new(),
        }
    }

    pub fn playing(mut self, playing: bool, spinner_frame: &'static str) -> Self {
        self.playing = playing;
        self.spinner_frame = spinner_frame;
        self
    }

    pub fn hints(mut self, hints: Vec<(String, String)>) -> Self {
        self.hints = hints;
        self
    }

    fn badge_color(&self) -> Color {
        match self.phase {
            Phase::Idle => TEXT_MUTED,
            Phase::Running => ACCENT_WARNING,
            Phase::Done => ACCENT_SUCCESS,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let background = Style::default().bg(STATUS_BAR_BG);
        buf.set_style(area, background);

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(
                format!(" {} ", self.phase.label().to_uppercase()),
                Style::default()
                    .fg(Color::Black)
                    .bg(self.badge_color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("step {}/{}", self.cursor, self.total),
                Style::default().fg(TEXT_BRIGHT),
            ),
        ];

        if self.playing {
            spans.push(Span::styled(" │ ", Style::default().fg(TEXT_FAINT)));
            spans.push(Span::styled(
                self.spinner_frame,
                Style::default().fg(ACCENT_PRIMARY),
            ));
            spans.push(Span::styled(" playing", Style::default().fg(ACCENT_PRIMARY)));
        }

        Paragraph::new(Line::from(spans))
            .style(background)
            .render(area, buf);

        if !self.hints.is_empty() {
            let style = KeyHintBarStyle::footer_bar(KEY_HINT_BG, STATUS_BAR_BG);
            let hints = key_hint_spans(&self.hints, style);
            Paragraph::new(Line::from(hints))
                .alignment(Alignment::Right)
                .render(area, buf);
        }
    }
}
