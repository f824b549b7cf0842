//! Frame layout for the visualizer screen.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
    Frame,
};

use crate::ui::action::Action;
use crate::ui::app_state::AppState;
use crate::ui::components::{
    ConsoleView, HelpDialog, StatusBar, StepList, TaskPanel, ACCENT_PRIMARY, BORDER_DEFAULT,
    TEXT_BRIGHT, TEXT_MUTED, TEXT_SECONDARY,
};
use crate::ui::events::InputMode;

/// Render the whole screen for `state`
pub fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    render(state, area, frame.buffer_mut());
}

/// Render into a raw buffer; used by [`draw`] and by tests
pub fn render(state: &AppState, area: Rect, buf: &mut Buffer) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(area);

    render_narration(state, rows[0], buf);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    let vis = &state.visualizer;
    StepList::new(vis.script(), vis.cursor()).render(body[0], buf);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(body[1]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(right[0]);

    let runtime = vis.state();
    TaskPanel::call_stack(&runtime.call_stack).render(panels[0], buf);
    TaskPanel::microtasks(&runtime.microtask_queue).render(panels[1], buf);
    TaskPanel::macrotasks(&runtime.macrotask_queue).render(panels[2], buf);
    ConsoleView::new(&runtime.output).render(right[1], buf);

    StatusBar::new(vis.phase(), vis.cursor(), vis.len())
        .playing(vis.is_playing(), state.spinner.frame())
        .hints(state.status_hints())
        .render(rows[2], buf);

    if state.input_mode == InputMode::ShowingHelp {
        HelpDialog::from_keybindings(&state.keybindings).render(area, buf);
    }
}

/// Describe what the last step did, or prompt before the first one
fn render_narration(state: &AppState, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_DEFAULT))
        .title(Span::styled(
            " loopscope ",
            Style::default()
                .fg(ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    block.render(area, buf);

    let line = match state.visualizer.last_applied() {
        Some(step) => Line::from(vec![
            Span::styled(
                format!("{}. ", state.visualizer.cursor()),
                Style::default().fg(TEXT_SECONDARY),
            ),
            Span::styled(step.description.clone(), Style::default().fg(TEXT_BRIGHT)),
        ]),
        None => {
            let advance = state
                .keybindings
                .hint_for(Action::Advance, state.key_context())
                .unwrap_or_default();
            Line::from(Span::styled(
                format!("Press {} to apply the first step", advance),
                Style::default().fg(TEXT_MUTED),
            ))
        }
    };

    Paragraph::new(line)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}
