//! Built-in scripts shipped with the binary.

use super::{Step, StepOp, StepScript};

/// Names and one-line summaries of every built-in script
pub const BUILTIN_SCRIPTS: &[(&str, &str)] = &[
    (
        "canonical",
        "console.log, setTimeout and Promise.then: microtasks before macrotasks",
    ),
    (
        "promise-chain",
        "chained .then callbacks drain fully before the timer fires",
    ),
    (
        "nested-timers",
        "a microtask queued inside a timer runs before the next timer",
    ),
];

pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_SCRIPTS.iter().map(|(name, _)| *name)
}

/// Look up a built-in script by name
pub fn builtin(name: &str) -> Option<StepScript> {
    let steps = match name {
        "canonical" => canonical(),
        "promise-chain" => promise_chain(),
        "nested-timers" => nested_timers(),
        _ => return None,
    };
    Some(StepScript {
        name: name.to_string(),
        steps,
    })
}

fn step(description: &str, ops: Vec<StepOp>) -> Step {
    Step::new(description, ops)
}

fn push(frame: &str) -> StepOp {
    StepOp::Push(frame.to_string())
}

fn log(line: &str) -> StepOp {
    StepOp::Log(line.to_string())
}

fn micro(label: &str) -> StepOp {
    StepOp::EnqueueMicrotask(label.to_string())
}

fn macro_task(label: &str) -> StepOp {
    StepOp::EnqueueMacrotask(label.to_string())
}

// console.log('Start');
// setTimeout(() => console.log('Timeout'), 0);
// Promise.resolve().then(() => console.log('Promise'));
// console.log('End');
fn canonical() -> Vec<Step> {
    vec![
        step(
            "console.log('Start') is pushed onto the call stack and prints",
            vec![push("console.log"), log("Start")],
        ),
        step("console.log('Start') returns and is popped", vec![StepOp::Pop]),
        step("setTimeout(...) is called", vec![push("setTimeout")]),
        step(
            "setTimeout registers its callback in the macrotask queue and returns",
            vec![StepOp::Pop, macro_task("setTimeout callback")],
        ),
        step(
            "Promise.resolve().then(...) is called",
            vec![push("Promise.then")],
        ),
        step(
            "The then callback is queued as a microtask",
            vec![StepOp::Pop, micro("Promise callback")],
        ),
        step(
            "console.log('End') is pushed onto the call stack and prints",
            vec![push("console.log"), log("End")],
        ),
        step(
            "console.log('End') returns; the script body is finished",
            vec![StepOp::Pop],
        ),
        step(
            "Call stack is empty: the event loop drains the microtask queue first",
            vec![StepOp::RunMicrotask],
        ),
        step(
            "The promise callback prints and returns",
            vec![log("Promise"), StepOp::Pop],
        ),
        step(
            "Microtask queue is empty: the event loop takes the next macrotask",
            vec![StepOp::RunMacrotask],
        ),
        step(
            "The timer callback prints and returns",
            vec![log("Timeout"), StepOp::Pop],
        ),
    ]
}

// console.log('A');
// setTimeout(() => console.log('timeout'), 0);
// Promise.resolve()
//   .then(() => console.log('then 1'))
//   .then(() => console.log('then 2'));
// console.log('B');
fn promise_chain() -> Vec<Step> {
    vec![
        step("console.log('A') prints", vec![push("console.log"), log("A")]),
        step("console.log('A') returns", vec![StepOp::Pop]),
        step("setTimeout(...) is called", vec![push("setTimeout")]),
        step(
            "The timer callback is queued as a macrotask",
            vec![StepOp::Pop, macro_task("timeout callback")],
        ),
        step("The .then chain is set up", vec![push("Promise.then")]),
        step(
            "The first then callback is queued as a microtask",
            vec![StepOp::Pop, micro("then 1")],
        ),
        step("console.log('B') prints", vec![push("console.log"), log("B")]),
        step(
            "console.log('B') returns; the script body is finished",
            vec![StepOp::Pop],
        ),
        step(
            "The event loop runs the first microtask",
            vec![StepOp::RunMicrotask],
        ),
        step(
            "then 1 prints and resolves its promise, queueing then 2",
            vec![log("then 1"), StepOp::Pop, micro("then 2")],
        ),
        step(
            "The microtask queue is not empty yet: then 2 runs next",
            vec![StepOp::RunMicrotask],
        ),
        step("then 2 prints and returns", vec![log("then 2"), StepOp::Pop]),
        step(
            "Only now does the event loop take the timer macrotask",
            vec![StepOp::RunMacrotask],
        ),
        step(
            "The timer callback prints and returns",
            vec![log("timeout"), StepOp::Pop],
        ),
    ]
}

// setTimeout(() => {
//   console.log('timer 1');
//   Promise.resolve().then(() => console.log('micro'));
// }, 0);
// setTimeout(() => console.log('timer 2'), 0);
fn nested_timers() -> Vec<Step> {
    vec![
        step("The first setTimeout(...) is called", vec![push("setTimeout")]),
        step(
            "timer 1 is queued as a macrotask",
            vec![StepOp::Pop, macro_task("timer 1")],
        ),
        step("The second setTimeout(...) is called", vec![push("setTimeout")]),
        step(
            "timer 2 is queued behind it",
            vec![StepOp::Pop, macro_task("timer 2")],
        ),
        step(
            "Call stack and microtask queue are empty: timer 1 runs",
            vec![StepOp::RunMacrotask],
        ),
        step(
            "timer 1 prints",
            vec![push("console.log"), log("timer 1")],
        ),
        step("console.log returns", vec![StepOp::Pop]),
        step("timer 1 calls Promise.then", vec![push("Promise.then")]),
        step(
            "The then callback is queued as a microtask",
            vec![StepOp::Pop, micro("micro")],
        ),
        step("timer 1 returns", vec![StepOp::Pop]),
        step(
            "Before the next macrotask, the microtask queue is drained",
            vec![StepOp::RunMicrotask],
        ),
        step("The microtask prints and returns", vec![log("micro"), StepOp::Pop]),
        step("timer 2 runs", vec![StepOp::RunMacrotask]),
        step("timer 2 prints and returns", vec![log("timer 2"), StepOp::Pop]),
    ]
}
