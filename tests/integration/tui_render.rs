//! Integration tests for the visualizer screen
//!
//! Renders full frames through `TestBackend` after driving the reducer with
//! key presses, the same path the terminal event loop takes.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use loopscope::script::builtin;
use loopscope::ui::{AppState, InputMode};
use loopscope::Config;

use super::common::terminal::{
    assert_screen_contains, buffer_contains, find_row, render_state,
};

fn canonical_state() -> AppState {
    AppState::new(
        &Config::default(),
        Arc::new(builtin("canonical").expect("canonical script")),
    )
}

fn press(state: &mut AppState, code: KeyCode) {
    let mut effects = Vec::new();
    state.handle_key(KeyEvent::new(code, KeyModifiers::NONE), &mut effects);
}

#[test]
fn test_initial_frame_shows_every_panel() {
    let state = canonical_state();
    let terminal = render_state(&state, 140, 32);
    let buffer = terminal.backend().buffer();

    assert_screen_contains(buffer, "Script: canonical");
    assert_screen_contains(buffer, "Call Stack");
    assert_screen_contains(buffer, "Microtask Queue");
    assert_screen_contains(buffer, "Macrotask Queue");
    assert_screen_contains(buffer, "Console");
    assert_screen_contains(buffer, "step 0/12");
    assert_screen_contains(buffer, " n  step");
}

#[test]
fn test_status_bar_is_last_row() {
    let state = canonical_state();
    let terminal = render_state(&state, 140, 32);
    let buffer = terminal.backend().buffer();

    assert_eq!(find_row(buffer, "step 0/12"), Some(31));
}

#[test]
fn test_frames_follow_key_presses() {
    let mut state = canonical_state();

    press(&mut state, KeyCode::Char('n'));
    let terminal = render_state(&state, 140, 32);
    assert_screen_contains(terminal.backend().buffer(), "step 1/12");
    assert_screen_contains(terminal.backend().buffer(), "console.log");

    press(&mut state, KeyCode::Right);
    for _ in 0..4 {
        press(&mut state, KeyCode::Char(' '));
    }
    let terminal = render_state(&state, 140, 32);
    let buffer = terminal.backend().buffer();
    assert_screen_contains(buffer, "step 6/12");
    assert_screen_contains(buffer, "setTimeout callback");
    assert_screen_contains(buffer, "Promise callback");
}

#[test]
fn test_done_frame_drops_advance_hint() {
    let mut state = canonical_state();
    for _ in 0..12 {
        press(&mut state, KeyCode::Char('n'));
    }
    let terminal = render_state(&state, 140, 32);
    let buffer = terminal.backend().buffer();

    assert_screen_contains(buffer, "DONE");
    assert_screen_contains(buffer, "Timeout");
    assert!(!buffer_contains(buffer, " n  step"));
}

#[test]
fn test_reset_key_clears_frame() {
    let mut state = canonical_state();
    for _ in 0..3 {
        press(&mut state, KeyCode::Char('n'));
    }
    press(&mut state, KeyCode::Char('r'));
    let terminal = render_state(&state, 140, 32);

    assert_screen_contains(terminal.backend().buffer(), "IDLE");
    assert_screen_contains(terminal.backend().buffer(), "step 0/12");
}

#[test]
fn test_help_overlay_lists_bindings() {
    let mut state = canonical_state();
    press(&mut state, KeyCode::Char('?'));
    assert_eq!(state.input_mode, InputMode::ShowingHelp);

    let terminal = render_state(&state, 140, 32);
    let buffer = terminal.backend().buffer();
    assert_screen_contains(buffer, "Help");
    assert_screen_contains(buffer, "<CR>, a");
    assert_screen_contains(buffer, "<Esc>/q Close");

    press(&mut state, KeyCode::Esc);
    let terminal = render_state(&state, 140, 32);
    assert!(!buffer_contains(terminal.backend().buffer(), "<Esc>/q Close"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut state = canonical_state();
    press(&mut state, KeyCode::Char('n'));
    press(&mut state, KeyCode::Char('?'));
    render_state(&state, 20, 6);
    render_state(&state, 1, 1);
}
