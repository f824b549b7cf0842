//! Default keybindings
//!
//! This module defines the default keybindings that are used
//! when no user configuration is present.

use std::collections::HashMap;

use super::keys::{KeyCombo, KeyContext, KeybindingConfig};
use crate::ui::action::Action;

/// Helper to insert a keybinding
fn bind(map: &mut HashMap<KeyCombo, Action>, key: &str, action: Action) {
    if let Ok(combo) = key.parse() {
        map.insert(combo, action);
    }
}

/// Create the default keybindings configuration
pub fn default_keybindings() -> KeybindingConfig {
    let mut config = KeybindingConfig::new();

    // ========== Global Keybindings ==========
    bind(&mut config.global, "C-c", Action::Quit);
    bind(&mut config.global, "q", Action::Quit);
    bind(&mut config.global, "?", Action::ToggleHelp);
    bind(&mut config.global, "<F1>", Action::ToggleHelp);

    // ========== Visualizer ==========
    let visualizer = config.context.entry(KeyContext::Visualizer).or_default();

    bind(visualizer, "n", Action::Advance);
    bind(visualizer, "<Space>", Action::Advance);
    bind(visualizer, "<Right>", Action::Advance);
    bind(visualizer, "a", Action::RunAll);
    bind(visualizer, "<CR>", Action::RunAll);
    bind(visualizer, "r", Action::Reset);
    bind(visualizer, "<BS>", Action::Reset);

    // ========== Help Overlay ==========
    let help = config.context.entry(KeyContext::Help).or_default();

    bind(help, "<Esc>", Action::Cancel);
    bind(help, "q", Action::Cancel);

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_key_notation;

    fn lookup(config: &KeybindingConfig, key: &str, context: KeyContext) -> Option<Action> {
        config.get_action(&parse_key_notation(key).unwrap(), context)
    }

    #[test]
    fn test_playback_keys() {
        let config = default_keybindings();
        assert_eq!(
            lookup(&config, "n", KeyContext::Visualizer),
            Some(Action::Advance)
        );
        assert_eq!(
            lookup(&config, "<Space>", KeyContext::Visualizer),
            Some(Action::Advance)
        );
        assert_eq!(
            lookup(&config, "a", KeyContext::Visualizer),
            Some(Action::RunAll)
        );
        assert_eq!(
            lookup(&config, "r", KeyContext::Visualizer),
            Some(Action::Reset)
        );
    }

    #[test]
    fn test_playback_keys_inactive_in_help() {
        let config = default_keybindings();
        assert_eq!(lookup(&config, "n", KeyContext::Help), None);
        assert_eq!(lookup(&config, "q", KeyContext::Help), Some(Action::Cancel));
        assert_eq!(lookup(&config, "C-c", KeyContext::Help), Some(Action::Quit));
    }

    #[test]
    fn test_hint_prefers_short_label() {
        let config = default_keybindings();
        assert_eq!(
            config.hint_for(Action::Advance, KeyContext::Visualizer),
            Some("n".to_string())
        );
        assert_eq!(
            config.hint_for(Action::ToggleHelp, KeyContext::Visualizer),
            Some("?".to_string())
        );
    }
}
