//! Integration tests for TOML step scripts and config files

use std::sync::Arc;
use std::time::Duration;

use loopscope::config::{Config, ConfigError};
use loopscope::{ScriptError, StepScript, Visualizer};

use super::common::fixtures::{Fixtures, TIMER_SCRIPT};

#[test]
fn test_script_file_plays_like_builtin() {
    let fixtures = Fixtures::new();
    let path = fixtures.write("timer.toml", TIMER_SCRIPT);

    let script = StepScript::resolve(path.to_str().expect("utf-8 path")).expect("script loads");
    assert_eq!(script.name(), "tiny-timer");
    assert_eq!(script.len(), 2);

    let mut vis = Visualizer::new(Arc::new(script));
    assert!(vis.advance());
    assert_eq!(vis.state().output, vec!["sync"]);
    assert_eq!(vis.state().call_stack, Vec::<String>::new());
    assert_eq!(vis.state().macrotask_queue.front().map(String::as_str), Some("timer"));

    assert!(vis.advance());
    assert!(!vis.advance());
    assert_eq!(vis.state().output, vec!["sync", "timer"]);
    assert!(vis.state().macrotask_queue.is_empty());
}

#[test]
fn test_script_name_falls_back_to_file_stem() {
    let fixtures = Fixtures::new();
    let body = TIMER_SCRIPT.replace("name = \"tiny-timer\"", "");
    let path = fixtures.write("from-stem.toml", &body);

    let script = StepScript::from_file(&path).expect("script loads");
    assert_eq!(script.name(), "from-stem");
}

#[test]
fn test_invalid_script_files_are_rejected() {
    let fixtures = Fixtures::new();

    let empty = fixtures.write("empty.toml", "name = \"nothing\"\nsteps = []\n");
    assert!(matches!(StepScript::from_file(&empty), Err(ScriptError::Empty)));

    let blank = fixtures.write(
        "blank.toml",
        "[[steps]]\ndescription = \"ok\"\n\n[[steps]]\ndescription = \"  \"\n",
    );
    assert!(matches!(
        StepScript::from_file(&blank),
        Err(ScriptError::EmptyDescription { index: 1 })
    ));

    let unknown_op = fixtures.write(
        "unknown.toml",
        "[[steps]]\ndescription = \"x\"\nops = [{ op = \"teleport\" }]\n",
    );
    assert!(matches!(
        StepScript::from_file(&unknown_op),
        Err(ScriptError::Parse { .. })
    ));

    assert!(matches!(
        StepScript::resolve("no-such-script"),
        Err(ScriptError::UnknownBuiltin(_))
    ));
}

#[test]
fn test_config_file_overrides_playback() {
    let fixtures = Fixtures::new();
    let script_path = fixtures.write("timer.toml", TIMER_SCRIPT);
    let config_path = fixtures.write(
        "config.toml",
        &format!(
            "[playback]\ninterval_ms = 5\nscript = {:?}\n",
            script_path.display().to_string()
        ),
    );

    let config = Config::load_from(&config_path).expect("config loads");
    // Clamped to the minimum
    assert_eq!(config.interval, Duration::from_millis(10));

    let script = StepScript::resolve(&config.script).expect("configured script loads");
    assert_eq!(script.name(), "tiny-timer");
}

#[test]
fn test_broken_config_is_an_error() {
    let fixtures = Fixtures::new();
    let path = fixtures.write("config.toml", "[playback]\ninterval_ms = \"fast\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::Parse { .. })
    ));
}
