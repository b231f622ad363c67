// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The host event loop. Strictly sequential: each key press is read, reduced
//! into a state transition, and followed by at most one re-render before the
//! next key press is accepted. The loop owns raw mode and cursor visibility;
//! the reducer and the renderer stay free of terminal concerns.

use std::io::{Result, Write};

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode},
};

use crate::{
    is_fully_uninteractive_terminal, FunctionComponent, KeyPress, KeyPressReader, TTYResult,
    DEVELOPMENT_MODE,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventLoopResult<V> {
    /// Nothing changed; keep waiting for input.
    Continue,
    /// State changed; repaint before waiting for input.
    ContinueAndRerender,
    /// The user confirmed a choice.
    ExitWithResult(V),
    /// The user aborted (esc / ctrl+c).
    ExitWithoutResult,
    /// The input stream failed or the terminal is not interactive.
    ExitWithError,
}

/// Run the prompt until a key press produces an exit result.
///
/// Returns [`EventLoopResult::ExitWithError`] without touching the terminal
/// if it is *fully* uninteractive. This is useful so that it won't block
/// `cargo test` or non-interactive CI/CD environments.
pub fn enter_event_loop<W: Write, S, V>(
    state: &mut S,
    function_component: &mut impl FunctionComponent<W, S>,
    on_keypress: impl Fn(&mut S, KeyPress) -> EventLoopResult<V>,
    key_press_reader: &mut impl KeyPressReader,
) -> Result<EventLoopResult<V>> {
    if let TTYResult::IsNotInteractive = is_fully_uninteractive_terminal() {
        return Ok(EventLoopResult::ExitWithError);
    }

    run_before_event_loop(state, function_component)?;

    let return_this: EventLoopResult<V>;

    loop {
        match key_press_reader.read_key_press() {
            Some(key_press) => {
                if DEVELOPMENT_MODE {
                    tracing::debug!(?key_press, "event loop: read key press");
                }
                match on_keypress(state, key_press) {
                    EventLoopResult::ContinueAndRerender => {
                        function_component.render(state)?;
                    }
                    EventLoopResult::Continue => {
                        // Noop. Simply continue the loop.
                    }
                    EventLoopResult::ExitWithResult(it) => {
                        function_component.clear_viewport(state)?;
                        // The state is done at this point, so this paints the
                        // collapsed result line.
                        function_component.render(state)?;
                        return_this = EventLoopResult::ExitWithResult(it);
                        break;
                    }
                    EventLoopResult::ExitWithoutResult => {
                        function_component.clear_viewport(state)?;
                        return_this = EventLoopResult::ExitWithoutResult;
                        break;
                    }
                    EventLoopResult::ExitWithError => {
                        function_component.clear_viewport(state)?;
                        return_this = EventLoopResult::ExitWithError;
                        break;
                    }
                }
            }
            None => {
                function_component.clear_viewport(state)?;
                return_this = EventLoopResult::ExitWithError;
                break;
            }
        }
    }

    run_after_event_loop(state, function_component)?;

    Ok(return_this)
}

fn run_before_event_loop<W: Write, S>(
    state: &mut S,
    function_component: &mut impl FunctionComponent<W, S>,
) -> Result<()> {
    execute!(function_component.get_write(), Hide)?;
    enable_raw_mode()?;

    function_component.allocate_viewport_height_space(state)?;

    // First render before blocking for user input.
    function_component.render(state)?;

    Ok(())
}

fn run_after_event_loop<W: Write, S>(
    _state: &mut S,
    function_component: &mut impl FunctionComponent<W, S>,
) -> Result<()> {
    execute!(function_component.get_write(), Show)?;
    disable_raw_mode()?;
    Ok(())
}
