//! Integration tests for loopscope
//!
//! These tests verify that multiple components work together correctly.

#[path = "../common/mod.rs"]
pub mod common;

pub mod cli;
pub mod playback_flow;
pub mod script_files;
pub mod tui_render;
