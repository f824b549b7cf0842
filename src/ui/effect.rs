use std::time::Duration;

use crate::engine::Generation;

/// Side effects that should be executed outside the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Spawn a ticker for the run identified by `generation`,
    /// replacing any ticker that is still alive
    StartPlayback {
        generation: Generation,
        interval: Duration,
    },
    /// Stop the current ticker, if any
    CancelPlayback,
}
