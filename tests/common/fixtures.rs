//! Script and config file fixtures
//!
//! Files are written into a [`TempDir`] that must outlive the test.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A two-step script: one synchronous log, then one timer callback
pub const TIMER_SCRIPT: &str = r#"
name = "tiny-timer"

[[steps]]
description = "console.log('sync') runs immediately"
ops = [
    { op = "push", value = "console.log" },
    { op = "log", value = "sync" },
    { op = "pop" },
    { op = "enqueue_macrotask", value = "timer" },
]

[[steps]]
description = "The timer callback runs once the stack is empty"
ops = [
    { op = "run_macrotask" },
    { op = "log", value = "timer" },
    { op = "pop" },
]
"#;

/// Scratch directory holding fixture files
pub struct Fixtures {
    dir: TempDir,
}

impl Fixtures {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Write `contents` to `name` inside the fixture directory
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("Failed to write fixture");
        path
    }
}
