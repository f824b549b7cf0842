use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::ui::action::{parse_action, Action};
use crate::util::paths::config_path;

use super::default_keys::default_keybindings;
use super::keys::{parse_key_notation, KeyCombo, KeyContext, KeybindingConfig};

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Default delay between steps during run-all
pub const DEFAULT_INTERVAL_MS: u64 = 500;

/// Lower bound for the run-all delay
pub const MIN_INTERVAL_MS: u64 = 10;

/// Built-in script opened when nothing else is configured
pub const DEFAULT_SCRIPT: &str = "canonical";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Delay between steps during run-all
    pub interval: Duration,
    /// Built-in script name or script file path
    pub script: String,
    /// Keybinding configuration
    pub keybindings: KeybindingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            script: DEFAULT_SCRIPT.to_string(),
            keybindings: default_keybindings(),
        }
    }
}

/// TOML representation of keybinding configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlKeybindings {
    /// Global keybindings (apply to all contexts)
    #[serde(flatten)]
    pub global: HashMap<String, toml::Value>,

    /// Visualizer keybindings
    pub visualizer: Option<HashMap<String, String>>,

    /// Help overlay keybindings
    pub help: Option<HashMap<String, String>>,
}

/// TOML representation of playback configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlPlaybackConfig {
    pub interval_ms: Option<u64>,
    pub script: Option<String>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub playback: Option<TomlPlaybackConfig>,
    pub keys: Option<TomlKeybindings>,
}

impl TomlKeybindings {
    /// Convert TOML keybindings to KeybindingConfig
    fn to_keybinding_config(&self) -> KeybindingConfig {
        let mut config = KeybindingConfig::new();

        for (action_name, value) in &self.global {
            // Context tables are deserialized separately
            let toml::Value::String(key_str) = value else {
                continue;
            };
            if let Some((combo, action)) = parse_binding(action_name, key_str) {
                config.global.insert(combo, action);
            }
        }

        if let Some(visualizer) = &self.visualizer {
            parse_context_bindings(&mut config, KeyContext::Visualizer, visualizer);
        }
        if let Some(help) = &self.help {
            parse_context_bindings(&mut config, KeyContext::Help, help);
        }

        config
    }
}

/// Parse one `action = "key"` entry, logging and skipping bad entries
fn parse_binding(action_name: &str, key_str: &str) -> Option<(KeyCombo, Action)> {
    let Some(action) = parse_action(action_name) else {
        tracing::warn!(action = %action_name, "Unknown action in keybinding config");
        return None;
    };
    match parse_key_notation(key_str) {
        Ok(combo) => Some((combo, action)),
        Err(e) => {
            tracing::warn!(
                action = %action_name,
                key = %key_str,
                error = %e,
                "Invalid key notation in keybinding config"
            );
            None
        }
    }
}

/// Parse context-specific keybindings
fn parse_context_bindings(
    config: &mut KeybindingConfig,
    context: KeyContext,
    bindings: &HashMap<String, String>,
) {
    let context_map = config.context.entry(context).or_default();
    for (action_name, key_str) in bindings {
        if let Some((combo, action)) = parse_binding(action_name, key_str) {
            context_map.insert(combo, action);
        }
    }
}

impl Config {
    /// Load configuration from the default path, merging with defaults.
    ///
    /// Writes the bundled example config on first run.
    pub fn load() -> Result<Self, ConfigError> {
        let config_file = config_path();

        if !config_file.exists() {
            Self::create_default_config(&config_file);
            return Ok(Self::default());
        }

        Self::load_from(&config_file)
    }

    /// Load configuration from an explicit file, merging with defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse configuration text, merging it on top of defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let toml_config: TomlConfig = toml::from_str(contents)?;
        let mut config = Self::default();

        if let Some(playback) = toml_config.playback {
            if let Some(interval_ms) = playback.interval_ms {
                config = config.with_interval_ms(interval_ms);
            }
            if let Some(script) = playback.script {
                config.script = script;
            }
        }

        if let Some(keys) = toml_config.keys {
            let user_bindings = keys.to_keybinding_config();
            config.keybindings.merge(user_bindings);
        }

        Ok(config)
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::warn!(
                        path = %parent.display(),
                        error = %e,
                        "Failed to create config directory"
                    );
                    return;
                }
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(path = %path.display(), error = %e, "Failed to write default config");
        }
    }

    /// Set the run-all delay, clamped to the minimum
    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        if interval_ms < MIN_INTERVAL_MS {
            tracing::warn!(
                requested = interval_ms,
                minimum = MIN_INTERVAL_MS,
                "Playback interval below minimum, clamping"
            );
        }
        self.interval = Duration::from_millis(interval_ms.max(MIN_INTERVAL_MS));
        self
    }

    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = script.into();
        self
    }
}
