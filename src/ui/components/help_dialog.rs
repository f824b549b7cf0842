use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::dialog::{DialogFrame, InstructionBar};
use super::palette::{ACCENT_MACROTASK, ACCENT_MICROTASK, ACCENT_PRIMARY, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::config::{KeyContext, KeybindingConfig};
use crate::ui::action::Action;

const GLOSSARY: &[(&str, &str)] = &[
    (
        "Call stack",
        "the synchronous frames currently executing, top frame first.",
    ),
    (
        "Microtasks",
        "promise continuations; drained completely whenever the stack empties.",
    ),
    (
        "Macrotasks",
        "timer callbacks; one runs per turn, only after microtasks are drained.",
    ),
];

/// One row of the key reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeybindingEntry {
    pub keys: String,
    pub description: &'static str,
}

/// Key reference and glossary overlay
pub struct HelpDialog {
    entries: Vec<KeybindingEntry>,
    /// Keys that close the overlay, e.g. `<Esc>/q`
    close_keys: Option<String>,
}

impl HelpDialog {
    /// Build the key reference from the active bindings of the visualizer view
    pub fn from_keybindings(keys: &KeybindingConfig) -> Self {
        let entries = Action::ALL
            .iter()
            .filter(|action| **action != Action::Cancel)
            .filter_map(|action| {
                let bound = keys.keys_for(*action, KeyContext::Visualizer);
                if bound.is_empty() {
                    return None;
                }
                let labels: Vec<String> = bound.iter().map(ToString::to_string).collect();
                Some(KeybindingEntry {
                    keys: labels.join(", "),
                    description: action.description(),
                })
            })
            .collect();

        let close: Vec<String> = keys
            .keys_for(Action::Cancel, KeyContext::Help)
            .iter()
            .map(ToString::to_string)
            .collect();
        let close_keys = (!close.is_empty()).then(|| close.join("/"));

        Self {
            entries,
            close_keys,
        }
    }

    pub fn entries(&self) -> &[KeybindingEntry] {
        &self.entries
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let width = (area.width / 10 * 7).clamp(40, 72);
        let height = (self.entries.len() + GLOSSARY.len() * 2 + 6) as u16;
        let inner = DialogFrame::new("Help", width, height).render(area, buf);

        if inner.height < 3 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let key_width = self
            .entries
            .iter()
            .map(|entry| entry.keys.chars().count())
            .max()
            .unwrap_or(0);

        let mut lines: Vec<Line> = self
            .entries
            .iter()
            .map(|entry| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<width$}", entry.keys, width = key_width),
                        Style::default().fg(ACCENT_PRIMARY),
                    ),
                    Span::raw("  "),
                    Span::styled(entry.description, Style::default().fg(TEXT_PRIMARY)),
                ])
            })
            .collect();

        lines.push(Line::raw(""));
        for (term, definition) in GLOSSARY {
            let color = match *term {
                "Microtasks" => ACCENT_MICROTASK,
                "Macrotasks" => ACCENT_MACROTASK,
                _ => ACCENT_PRIMARY,
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {}: ", term),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*definition, Style::default().fg(TEXT_SECONDARY)),
            ]));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(chunks[0], buf);

        if let Some(close_keys) = &self.close_keys {
            InstructionBar::new(vec![(close_keys.as_str(), "Close")]).render(chunks[1], buf);
        }
    }
}
