// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal introspection helpers for the host layer and the `sel` binary:
//! piped stdin/stdout detection and interactivity checks.

use std::io::IsTerminal as _;

#[derive(Debug)]
pub enum StdinIsPipedResult {
    StdinIsPiped,
    StdinIsNotPiped,
}

#[derive(Debug)]
pub enum StdoutIsPipedResult {
    StdoutIsPiped,
    StdoutIsNotPiped,
}

/// If you run `echo "test" | sel ...` the following will return
/// [`StdinIsPipedResult::StdinIsPiped`].
/// More info: <https://unix.stackexchange.com/questions/597083/how-does-piping-affect-stdin>
pub fn is_stdin_piped() -> StdinIsPipedResult {
    if !std::io::stdin().is_terminal() {
        StdinIsPipedResult::StdinIsPiped
    } else {
        StdinIsPipedResult::StdinIsNotPiped
    }
}

/// If you run `sel ... | grep foo` the following will return
/// [`StdoutIsPipedResult::StdoutIsPiped`].
pub fn is_stdout_piped() -> StdoutIsPipedResult {
    if !std::io::stdout().is_terminal() {
        StdoutIsPipedResult::StdoutIsPiped
    } else {
        StdoutIsPipedResult::StdoutIsNotPiped
    }
}

#[derive(Debug)]
pub enum TTYResult {
    IsInteractive,
    IsNotInteractive,
}

/// Returns [`TTYResult::IsInteractive`] if stdin is attached to a terminal.
///
/// There are situations where some streams can be interactive and others
/// not, such as when piping is active.
pub fn is_fully_interactive_terminal() -> TTYResult {
    match std::io::stdin().is_terminal() {
        true => TTYResult::IsInteractive,
        false => TTYResult::IsNotInteractive,
    }
}

/// Returns [`TTYResult::IsNotInteractive`] if stdin, stdout, and stderr are
/// *all* uninteractive. This happens when `cargo test` runs.
pub fn is_fully_uninteractive_terminal() -> TTYResult {
    let stdin_is_tty = std::io::stdin().is_terminal();
    let stdout_is_tty = std::io::stdout().is_terminal();
    let stderr_is_tty = std::io::stderr().is_terminal();
    match !stdin_is_tty && !stdout_is_tty && !stderr_is_tty {
        true => TTYResult::IsNotInteractive,
        false => TTYResult::IsInteractive,
    }
}
