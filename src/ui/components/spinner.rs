/// Animated spinner shown while a run-all is in progress
#[derive(Debug, Clone)]
pub struct Spinner {
    frames: &'static [&'static str],
    tick: usize,
}

impl Spinner {
    /// Create a new spinner with default frames
    pub fn new() -> Self {
        Self {
            frames: &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
            tick: 0,
        }
    }

    /// Advance to the next frame
    pub fn tick(&mut self) {
        self.tick = (self.tick + 1) % self.frames.len();
    }

    /// Get current frame
    pub fn frame(&self) -> &'static str {
        self.frames[self.tick % self.frames.len()]
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}
