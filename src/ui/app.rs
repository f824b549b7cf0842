use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::config::Config;
use crate::engine::{spawn_ticker, PlaybackHandle};
use crate::script::StepScript;
use crate::ui::app_state::AppState;
use crate::ui::effect::Effect;
use crate::ui::events::AppEvent;
use crate::ui::terminal_guard::{install_panic_hook, TerminalGuard};
use crate::ui::view;

/// Spinner animation cadence
const ANIMATION_INTERVAL: Duration = Duration::from_millis(100);

/// Main application
pub struct App {
    /// Render and reducer state
    state: AppState,
    /// Ticker for the current run-all, if any
    playback: Option<PlaybackHandle>,
    /// Event channel sender
    event_tx: mpsc::UnboundedSender<AppEvent>,
    /// Event channel receiver
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(config: Config, script: Arc<StepScript>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Self {
            state: AppState::new(&config, script),
            playback: None,
            event_tx,
            event_rx,
        }
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut guard = TerminalGuard::new();

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        tracing::info!(
            script = %self.state.visualizer.script().name(),
            steps = self.state.visualizer.len(),
            "Starting visualizer"
        );

        let result = self.event_loop(&mut terminal).await;

        self.cancel_playback();
        guard.cleanup()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut input = EventStream::new();
        let mut animation = tokio::time::interval(ANIMATION_INTERVAL);
        animation.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            terminal.draw(|f| view::draw(f, &self.state))?;

            tokio::select! {
                maybe_event = input.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_app_event(AppEvent::Input(event)),
                        Some(Err(e)) => return Err(e.into()),
                        None => break,
                    }
                }

                _ = animation.tick() => {
                    self.state.tick_animation();
                }

                Some(event) = self.event_rx.recv() => {
                    self.handle_app_event(event);
                }
            }

            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        let mut effects = Vec::new();
        match event {
            AppEvent::Input(Event::Key(key)) => self.state.handle_key(key, &mut effects),
            // Resize and focus events only need a redraw
            AppEvent::Input(_) => {}
            AppEvent::PlaybackTick(generation) => {
                self.state.handle_playback_tick(generation, &mut effects);
            }
        }
        self.run_effects(effects);
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartPlayback {
                    generation,
                    interval,
                } => {
                    self.cancel_playback();
                    let tx = self.event_tx.clone();
                    self.playback = Some(spawn_ticker(generation, interval, move |g| {
                        tx.send(AppEvent::PlaybackTick(g)).is_ok()
                    }));
                }
                Effect::CancelPlayback => self.cancel_playback(),
            }
        }
    }

    fn cancel_playback(&mut self) {
        if let Some(handle) = self.playback.take() {
            handle.cancel();
        }
    }
}
