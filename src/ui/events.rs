use crate::engine::Generation;

/// Application-level events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Terminal input event
    Input(crossterm::event::Event),

    /// Playback ticker fired for the given run
    PlaybackTick(Generation),
}

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Main visualizer view
    #[default]
    Normal,
    /// Key reference overlay is open
    ShowingHelp,
}
