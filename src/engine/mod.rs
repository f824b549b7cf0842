//! Visualizer state machine
//!
//! [`Visualizer`] owns the observable runtime state and a cursor into an
//! injected [`StepScript`]. All transitions are total: advancing past the end
//! is a no-op and reset is idempotent.
//!
//! Timed playback is tracked with a [`Generation`] counter. Every reset and
//! every new run bumps the generation, so ticks scheduled under an older run
//! are recognized as stale and ignored.

mod playback;

use std::collections::VecDeque;
use std::sync::Arc;

use serde::Serialize;

use crate::script::{Step, StepScript};

pub use playback::{play_to_end, spawn_ticker, PlaybackHandle, MIN_TICK_INTERVAL};

/// Observable state of the simulated runtime
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VisualizerState {
    /// Index of the next step to apply
    pub cursor: usize,
    /// Console output lines
    pub output: Vec<String>,
    /// Call stack frames, bottom first
    pub call_stack: Vec<String>,
    pub microtask_queue: VecDeque<String>,
    pub macrotask_queue: VecDeque<String>,
}

/// Coarse playback phase derived from the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing applied yet
    Idle,
    /// Some, but not all, steps applied
    Running,
    /// Every step applied
    Done,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Done => "done",
        }
    }
}

/// Playback epoch identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Generation(self.0.wrapping_add(1))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// Result of delivering a playback tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick belonged to a cancelled or superseded run; nothing changed
    Stale,
    /// One step was applied and more remain
    Advanced,
    /// The last step was applied (or none remained); playback is over
    Finished,
}

/// Step-driven event loop visualizer
#[derive(Debug, Clone)]
pub struct Visualizer {
    script: Arc<StepScript>,
    state: VisualizerState,
    generation: Generation,
    playing: bool,
}

impl Visualizer {
    pub fn new(script: Arc<StepScript>) -> Self {
        Self {
            script,
            state: VisualizerState::default(),
            generation: Generation::default(),
            playing: false,
        }
    }

    pub fn script(&self) -> &StepScript {
        &self.script
    }

    pub fn state(&self) -> &VisualizerState {
        &self.state
    }

    pub fn cursor(&self) -> usize {
        self.state.cursor
    }

    /// Number of steps in the script
    pub fn len(&self) -> usize {
        self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Whether a timed run is in progress
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_done(&self) -> bool {
        self.state.cursor >= self.script.len()
    }

    pub fn phase(&self) -> Phase {
        if self.is_done() {
            Phase::Done
        } else if self.state.cursor == 0 {
            Phase::Idle
        } else {
            Phase::Running
        }
    }

    /// The step that the next `advance` will apply
    pub fn current_step(&self) -> Option<&Step> {
        self.script.get(self.state.cursor)
    }

    /// The most recently applied step
    pub fn last_applied(&self) -> Option<&Step> {
        self.state
            .cursor
            .checked_sub(1)
            .and_then(|index| self.script.get(index))
    }

    /// Apply the step under the cursor and move past it.
    ///
    /// Returns `false` without touching state when every step has been applied.
    pub fn advance(&mut self) -> bool {
        let Some(step) = self.script.get(self.state.cursor) else {
            return false;
        };
        step.apply(&mut self.state);
        self.state.cursor += 1;
        tracing::debug!(
            cursor = self.state.cursor,
            total = self.script.len(),
            step = %step.description,
            "Applied step"
        );
        if self.is_done() {
            self.playing = false;
        }
        true
    }

    /// Restore the initial state and invalidate any in-flight playback
    pub fn reset(&mut self) {
        self.state = VisualizerState::default();
        self.generation = self.generation.next();
        self.playing = false;
        tracing::info!(
            generation = self.generation.value(),
            script = %self.script.name(),
            "Visualizer reset"
        );
    }

    /// Reset and start a new timed run.
    ///
    /// Returns the generation that ticks for this run must carry.
    pub fn begin_run_all(&mut self) -> Generation {
        self.reset();
        self.playing = true;
        tracing::info!(
            generation = self.generation.value(),
            steps = self.script.len(),
            "Playback started"
        );
        self.generation
    }

    /// Deliver one playback tick scheduled under `generation`
    pub fn tick(&mut self, generation: Generation) -> TickOutcome {
        if generation != self.generation || !self.playing {
            tracing::debug!(
                tick = generation.value(),
                current = self.generation.value(),
                "Ignoring stale playback tick"
            );
            return TickOutcome::Stale;
        }
        self.advance();
        if self.is_done() {
            self.playing = false;
            tracing::info!(generation = generation.value(), "Playback finished");
            TickOutcome::Finished
        } else {
            TickOutcome::Advanced
        }
    }
}
