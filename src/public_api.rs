// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The public entry points: [`SelectConfig`] describing one prompt
//! invocation, [`select_from_list`] which drives the real terminal, and the
//! reducer [`keypress_handler`] which maps key presses to state transitions.

use std::{
    fmt::Display,
    io::{stdout, Stdout, Write},
};

use crate::{
    enter_event_loop, CrosstermKeyPressReader, EventLoopResult, KeyPress, KeyPressReader,
    SelectComponent, SelectEntry, State, Status, Theme, DEVELOPMENT_MODE,
};

/// Configuration of one prompt invocation. The entries and the default value
/// are consumed at construction; only the selection state mutates afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectConfig<V> {
    /// Prompt header text, always shown.
    pub message: String,
    /// Ordered separator/choice entries.
    pub entries: Vec<SelectEntry<V>>,
    /// Value to pre-select; ignored if not found among the enabled choices.
    pub default_value: Option<V>,
    /// Wraparound navigation at the list ends. Defaults to on.
    pub wrap_around: bool,
    /// Accepted for parity with the host configuration surface; no windowing
    /// logic consumes it. Lists taller than the terminal rely on scrollback.
    pub page_size: Option<usize>,
    pub theme: Theme,
}

impl<V> SelectConfig<V> {
    pub fn new(message: impl Into<String>, entries: Vec<SelectEntry<V>>) -> Self {
        Self {
            message: message.into(),
            entries,
            default_value: None,
            wrap_around: true,
            page_size: None,
            theme: Theme::default(),
        }
    }

    pub fn with_default_value(mut self, value: V) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn with_wrap_around(mut self, wrap_around: bool) -> Self {
        self.wrap_around = wrap_around;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

/// Show the prompt on `stdout`, reading key presses from the terminal, and
/// return the value of the confirmed choice. Returns `None` when the user
/// aborts (esc / ctrl+c) or the terminal is fully uninteractive.
pub fn select_from_list<V>(config: SelectConfig<V>) -> Option<V>
where
    V: Clone + Display + PartialEq,
{
    select_from_list_with_io::<V, Stdout>(config, stdout(), &mut CrosstermKeyPressReader)
}

/// [`select_from_list`] with the output writer and key-press reader injected.
/// This is the seam tests and embedders use to drive the prompt with
/// synthetic key events and capture the emitted frames.
pub fn select_from_list_with_io<V, W>(
    config: SelectConfig<V>,
    writer: W,
    key_press_reader: &mut impl KeyPressReader,
) -> Option<V>
where
    V: Clone + Display + PartialEq,
    W: Write,
{
    let SelectConfig {
        message,
        entries,
        default_value,
        wrap_around,
        page_size: _,
        theme,
    } = config;

    let mut state = State::new(entries, default_value.as_ref(), wrap_around);

    let mut function_component = SelectComponent {
        write: writer,
        message,
        theme,
    };

    let result_user_input = enter_event_loop(
        &mut state,
        &mut function_component,
        keypress_handler,
        key_press_reader,
    );

    match result_user_input {
        Ok(EventLoopResult::ExitWithResult(it)) => Some(it),
        _ => None,
    }
}

/// The reducer: a strictly sequential state machine over discrete key
/// events. All transitions are self-loops on [`Status::Idle`] except enter,
/// which resolves the prompt; after that every event is ignored.
pub fn keypress_handler<V: Clone>(
    state: &mut State<V>,
    key_press: KeyPress,
) -> EventLoopResult<V> {
    if state.status == Status::Done {
        return EventLoopResult::Continue;
    }

    match key_press {
        KeyPress::Previous => {
            state.move_previous();
            EventLoopResult::ContinueAndRerender
        }
        KeyPress::Next => {
            state.move_next();
            EventLoopResult::ContinueAndRerender
        }
        KeyPress::Enter => {
            if DEVELOPMENT_MODE {
                tracing::debug!(active_index = state.active_index, "confirm");
            }
            match state.confirm() {
                Some(choice) => EventLoopResult::ExitWithResult(choice.value.clone()),
                // Nothing selectable: an explicit stuck state, not an error.
                None => EventLoopResult::Continue,
            }
        }
        KeyPress::Esc | KeyPress::CtrlC => EventLoopResult::ExitWithoutResult,
        KeyPress::Noop => EventLoopResult::Continue,
    }
}

#[cfg(test)]
mod test_keypress_handler {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ChoiceSpec;

    fn create_state() -> State<&'static str> {
        State::new(
            vec![
                SelectEntry::choice("a"),
                SelectEntry::choice("b"),
                SelectEntry::choice("c"),
            ],
            None,
            true,
        )
    }

    #[test]
    fn test_navigation_rerenders_and_moves_cursor() {
        let mut state = create_state();

        let result = keypress_handler(&mut state, KeyPress::Next);
        assert_eq!(result, EventLoopResult::ContinueAndRerender);
        assert_eq!(state.active_index, 1);

        let result = keypress_handler(&mut state, KeyPress::Previous);
        assert_eq!(result, EventLoopResult::ContinueAndRerender);
        assert_eq!(state.active_index, 0);
    }

    #[test]
    fn test_enter_resolves_active_choice() {
        let mut state = create_state();
        keypress_handler(&mut state, KeyPress::Next);
        keypress_handler(&mut state, KeyPress::Next);

        let result = keypress_handler(&mut state, KeyPress::Enter);
        assert_eq!(result, EventLoopResult::ExitWithResult("c"));
        assert_eq!(state.status, Status::Done);
    }

    #[test]
    fn test_no_events_are_processed_after_done() {
        let mut state = create_state();
        let result = keypress_handler(&mut state, KeyPress::Enter);
        assert_eq!(result, EventLoopResult::ExitWithResult("a"));

        // Navigation after the fact must not alter the outcome.
        let result = keypress_handler(&mut state, KeyPress::Next);
        assert_eq!(result, EventLoopResult::Continue);
        assert_eq!(state.active_index, 0);

        let result = keypress_handler(&mut state, KeyPress::Enter);
        assert_eq!(result, EventLoopResult::Continue);
    }

    #[test]
    fn test_enter_is_noop_when_nothing_is_selectable() {
        let entries: Vec<SelectEntry<&str>> = vec![
            SelectEntry::separator(),
            SelectEntry::Choice(ChoiceSpec::new("a").with_disabled(true)),
        ];
        let mut state = State::new(entries, None, true);

        let result = keypress_handler(&mut state, KeyPress::Enter);
        assert_eq!(result, EventLoopResult::Continue);
        assert_eq!(state.status, Status::Idle);
    }

    #[test]
    fn test_unrelated_keys_are_ignored() {
        let mut state = create_state();
        let before = state.clone();

        let result = keypress_handler(&mut state, KeyPress::Noop);
        assert_eq!(result, EventLoopResult::Continue);
        assert_eq!(state, before);
    }

    #[test]
    fn test_esc_and_ctrl_c_abort_without_result() {
        let mut state = create_state();
        assert_eq!(
            keypress_handler(&mut state, KeyPress::Esc),
            EventLoopResult::ExitWithoutResult
        );
        assert_eq!(
            keypress_handler(&mut state, KeyPress::CtrlC),
            EventLoopResult::ExitWithoutResult
        );
        // Aborting is a host concern; the core state stays idle.
        assert_eq!(state.status, Status::Idle);
    }
}
