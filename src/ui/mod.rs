pub mod action;
pub mod app;
pub mod app_state;
pub mod components;
pub mod effect;
pub mod events;
pub mod terminal_guard;
pub mod view;

pub use action::Action;
pub use app::App;
pub use app_state::AppState;
pub use effect::Effect;
pub use events::{AppEvent, InputMode};
