pub mod default_keys;
pub mod keys;
mod settings;

pub use default_keys::default_keybindings;
pub use keys::{parse_key_notation, KeyCombo, KeyContext, KeyParseError, KeybindingConfig};
pub use settings::{
    Config, ConfigError, DEFAULT_INTERVAL_MS, DEFAULT_SCRIPT, EXAMPLE_CONFIG, MIN_INTERVAL_MS,
};
