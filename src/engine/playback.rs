//! Timed playback
//!
//! A run-all is a single ticker task that emits one tick per interval,
//! tagged with the generation it was started under. The task stops when its
//! [`PlaybackHandle`] is cancelled or dropped, or when the receiving side is
//! gone.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use super::{Generation, TickOutcome, Visualizer};

/// Shortest cadence the ticker will run at
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Cancellable handle to a running ticker task
#[derive(Debug)]
pub struct PlaybackHandle {
    generation: Generation,
    token: CancellationToken,
}

impl PlaybackHandle {
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Stop the ticker; pending ticks already delivered are left to the
    /// generation check
    pub fn cancel(&self) {
        if !self.token.is_cancelled() {
            tracing::debug!(
                generation = self.generation.value(),
                "Cancelling playback ticker"
            );
            self.token.cancel();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for PlaybackHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Spawn a ticker that calls `emit` every `interval`, starting immediately.
///
/// `emit` returns `false` when nobody is listening anymore, which ends the task.
/// Must be called from within a tokio runtime.
pub fn spawn_ticker<F>(generation: Generation, interval: Duration, mut emit: F) -> PlaybackHandle
where
    F: FnMut(Generation) -> bool + Send + 'static,
{
    let token = CancellationToken::new();
    let child = token.clone();
    let period = interval.max(MIN_TICK_INTERVAL);

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut emitted: u64 = 0;

        loop {
            tokio::select! {
                biased;
                _ = child.cancelled() => break,
                _ = ticker.tick() => {
                    if !emit(generation) {
                        break;
                    }
                    emitted += 1;
                }
            }
        }

        tracing::debug!(
            generation = generation.value(),
            emitted,
            "Playback ticker stopped"
        );
    });

    PlaybackHandle { generation, token }
}

/// Reset `visualizer` and play every step on the given cadence.
///
/// `on_step` runs after each applied step.
pub async fn play_to_end<F>(visualizer: &mut Visualizer, interval: Duration, mut on_step: F)
where
    F: FnMut(&Visualizer),
{
    let (tx, mut rx) = mpsc::unbounded_channel();
    let generation = visualizer.begin_run_all();
    let handle = spawn_ticker(generation, interval, move |g| tx.send(g).is_ok());

    while let Some(tick) = rx.recv().await {
        match visualizer.tick(tick) {
            TickOutcome::Stale => continue,
            TickOutcome::Advanced => on_step(&*visualizer),
            TickOutcome::Finished => {
                on_step(&*visualizer);
                break;
            }
        }
    }

    handle.cancel();
}
