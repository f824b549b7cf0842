//! Primitive state mutations a step can perform.

use serde::{Deserialize, Serialize};

use crate::engine::VisualizerState;

/// A single mutation of the simulated runtime.
///
/// Every operation is total: popping or dequeuing from an empty sequence is a
/// no-op rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum StepOp {
    /// Push a frame onto the call stack
    Push(String),
    /// Pop the top frame off the call stack
    Pop,
    /// Append a line to the console output
    Log(String),
    /// Queue a microtask (promise continuation)
    EnqueueMicrotask(String),
    /// Drop the front microtask
    DequeueMicrotask,
    /// Queue a macrotask (timer callback)
    EnqueueMacrotask(String),
    /// Drop the front macrotask
    DequeueMacrotask,
    /// Move the front microtask onto the call stack
    RunMicrotask,
    /// Move the front macrotask onto the call stack
    RunMacrotask,
}

impl StepOp {
    pub fn apply(&self, state: &mut VisualizerState) {
        match self {
            StepOp::Push(frame) => state.call_stack.push(frame.clone()),
            StepOp::Pop => {
                state.call_stack.pop();
            }
            StepOp::Log(line) => state.output.push(line.clone()),
            StepOp::EnqueueMicrotask(label) => state.microtask_queue.push_back(label.clone()),
            StepOp::DequeueMicrotask => {
                state.microtask_queue.pop_front();
            }
            StepOp::EnqueueMacrotask(label) => state.macrotask_queue.push_back(label.clone()),
            StepOp::DequeueMacrotask => {
                state.macrotask_queue.pop_front();
            }
            StepOp::RunMicrotask => {
                if let Some(task) = state.microtask_queue.pop_front() {
                    state.call_stack.push(task);
                }
            }
            StepOp::RunMacrotask => {
                if let Some(task) = state.macrotask_queue.pop_front() {
                    state.call_stack.push(task);
                }
            }
        }
    }

    /// Short human label, used by the headless runner's verbose output
    pub fn label(&self) -> String {
        match self {
            StepOp::Push(frame) => format!("push {}", frame),
            StepOp::Pop => "pop".to_string(),
            StepOp::Log(line) => format!("log {:?}", line),
            StepOp::EnqueueMicrotask(label) => format!("microtask += {}", label),
            StepOp::DequeueMicrotask => "microtask -= front".to_string(),
            StepOp::EnqueueMacrotask(label) => format!("macrotask += {}", label),
            StepOp::DequeueMacrotask => "macrotask -= front".to_string(),
            StepOp::RunMicrotask => "run microtask".to_string(),
            StepOp::RunMacrotask => "run macrotask".to_string(),
        }
    }
}
