use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::config::{Config, KeyCombo, KeyContext, KeybindingConfig};
use crate::engine::{Generation, TickOutcome, Visualizer};
use crate::script::StepScript;
use crate::ui::action::Action;
use crate::ui::components::Spinner;
use crate::ui::effect::Effect;
use crate::ui::events::InputMode;

/// Everything the TUI renders, plus the reducer that mutates it.
///
/// Handlers never perform I/O or spawn tasks; they push [`Effect`]s for the
/// event loop to execute.
#[derive(Debug)]
pub struct AppState {
    pub visualizer: Visualizer,
    pub keybindings: KeybindingConfig,
    pub interval: Duration,
    pub input_mode: InputMode,
    pub spinner: Spinner,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: &Config, script: Arc<StepScript>) -> Self {
        Self {
            visualizer: Visualizer::new(script),
            keybindings: config.keybindings.clone(),
            interval: config.interval,
            input_mode: InputMode::Normal,
            spinner: Spinner::new(),
            should_quit: false,
        }
    }

    pub fn key_context(&self) -> KeyContext {
        match self.input_mode {
            InputMode::Normal => KeyContext::Visualizer,
            InputMode::ShowingHelp => KeyContext::Help,
        }
    }

    /// Resolve a key press against the active bindings and apply it
    pub fn handle_key(&mut self, key: KeyEvent, effects: &mut Vec<Effect>) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let combo = KeyCombo::from_key_event(&key);
        if let Some(action) = self.keybindings.get_action(&combo, self.key_context()) {
            self.handle_action(action, effects);
        }
    }

    pub fn handle_action(&mut self, action: Action, effects: &mut Vec<Effect>) {
        let is_playback = matches!(action, Action::Advance | Action::RunAll | Action::Reset);
        if is_playback && self.input_mode != InputMode::Normal {
            tracing::debug!(action = action.name(), "Playback action ignored while overlay is open");
            return;
        }

        match action {
            Action::Advance => {
                if self.visualizer.is_done() {
                    tracing::debug!("Advance ignored, every step applied");
                    return;
                }
                let was_playing = self.visualizer.is_playing();
                self.visualizer.advance();
                if was_playing && !self.visualizer.is_playing() {
                    effects.push(Effect::CancelPlayback);
                }
            }
            Action::RunAll => {
                let generation = self.visualizer.begin_run_all();
                effects.push(Effect::StartPlayback {
                    generation,
                    interval: self.interval,
                });
            }
            Action::Reset => {
                self.visualizer.reset();
                effects.push(Effect::CancelPlayback);
            }
            Action::ToggleHelp => {
                self.input_mode = match self.input_mode {
                    InputMode::Normal => InputMode::ShowingHelp,
                    InputMode::ShowingHelp => InputMode::Normal,
                };
            }
            Action::Cancel => {
                self.input_mode = InputMode::Normal;
            }
            Action::Quit => {
                self.should_quit = true;
                effects.push(Effect::CancelPlayback);
            }
        }
    }

    /// Deliver a ticker event; stale ticks change nothing
    pub fn handle_playback_tick(&mut self, generation: Generation, effects: &mut Vec<Effect>) {
        if self.visualizer.tick(generation) == TickOutcome::Finished {
            effects.push(Effect::CancelPlayback);
        }
    }

    /// Advance animations; called on the UI frame timer
    pub fn tick_animation(&mut self) {
        if self.visualizer.is_playing() {
            self.spinner.tick();
        }
    }

    /// Key hints for the status bar, skipping the advance trigger once done
    pub fn status_hints(&self) -> Vec<(String, String)> {
        let context = self.key_context();
        let actions: &[Action] = match self.input_mode {
            InputMode::ShowingHelp => &[Action::Cancel, Action::Quit],
            InputMode::Normal if self.visualizer.is_done() => {
                &[Action::RunAll, Action::Reset, Action::ToggleHelp, Action::Quit]
            }
            InputMode::Normal => &[
                Action::Advance,
                Action::RunAll,
                Action::Reset,
                Action::ToggleHelp,
                Action::Quit,
            ],
        };

        actions
            .iter()
            .filter_map(|action| {
                self.keybindings
                    .hint_for(*action, context)
                    .map(|key| (key, action.description().to_string()))
            })
            .collect()
    }
}
