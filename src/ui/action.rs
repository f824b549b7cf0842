//! Actions that can be triggered by keybindings
//!
//! Each action represents a single, atomic operation on the visualizer UI.

use serde::{Deserialize, Serialize};

/// All mappable UI actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ========== Playback ==========
    /// Apply the next step
    Advance,
    /// Reset, then play every step on the configured cadence
    RunAll,
    /// Restore the initial state and cancel any running playback
    Reset,

    // ========== Global ==========
    /// Show or hide the key reference overlay
    ToggleHelp,
    /// Close the current overlay
    Cancel,
    /// Quit the application
    Quit,
}

impl Action {
    /// Every action, in the order the help overlay lists them
    pub const ALL: &'static [Action] = &[
        Action::Advance,
        Action::RunAll,
        Action::Reset,
        Action::ToggleHelp,
        Action::Cancel,
        Action::Quit,
    ];

    /// Config file name of the action
    pub fn name(&self) -> &'static str {
        match self {
            Action::Advance => "advance",
            Action::RunAll => "run_all",
            Action::Reset => "reset",
            Action::ToggleHelp => "toggle_help",
            Action::Cancel => "cancel",
            Action::Quit => "quit",
        }
    }

    /// Short label for key hints
    pub fn description(&self) -> &'static str {
        match self {
            Action::Advance => "step",
            Action::RunAll => "run all",
            Action::Reset => "reset",
            Action::ToggleHelp => "help",
            Action::Cancel => "close",
            Action::Quit => "quit",
        }
    }
}

/// Parse an action name string into an Action
pub fn parse_action(name: &str) -> Option<Action> {
    match name {
        "advance" | "step" | "next" => Some(Action::Advance),
        "run_all" | "play" => Some(Action::RunAll),
        "reset" => Some(Action::Reset),
        "toggle_help" | "help" => Some(Action::ToggleHelp),
        "cancel" => Some(Action::Cancel),
        "quit" | "q" => Some(Action::Quit),
        _ => None,
    }
}
