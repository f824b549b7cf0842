pub mod config;
pub mod engine;
pub mod script;
pub mod ui;
pub mod util;

pub use config::Config;
pub use engine::{Generation, Phase, TickOutcome, Visualizer, VisualizerState};
pub use script::{ScriptError, Step, StepOp, StepScript};
pub use ui::App;
