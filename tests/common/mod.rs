//! Shared test utilities for loopscope
//!
//! This module provides common helpers for integration tests:
//! - Script file fixtures
//! - TUI terminal testing helpers

pub mod fixtures;
pub mod terminal;
