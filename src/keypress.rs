// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decoding of raw terminal events into the semantic key presses the reducer
//! understands. Navigation keys come in three flavors each: arrow keys, vim
//! keys (`j`/`k`), and emacs-style control chords (`ctrl+n`/`ctrl+p`).

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum KeyPress {
    /// Up arrow, `k`, or `ctrl+p`.
    Previous,
    /// Down arrow, `j`, or `ctrl+n`.
    Next,
    Enter,
    Esc,
    CtrlC,
    #[default]
    Noop,
}

/// Map a crossterm event to a [`KeyPress`]. Only key-down events are
/// considered; everything unrecognized is [`KeyPress::Noop`].
pub fn keypress_from_event(event: Event) -> KeyPress {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => match (code, modifiers) {
            (KeyCode::Up, KeyModifiers::NONE) => KeyPress::Previous,
            (KeyCode::Down, KeyModifiers::NONE) => KeyPress::Next,
            (KeyCode::Char('k'), KeyModifiers::NONE) => KeyPress::Previous,
            (KeyCode::Char('j'), KeyModifiers::NONE) => KeyPress::Next,
            (KeyCode::Char('p'), KeyModifiers::CONTROL) => KeyPress::Previous,
            (KeyCode::Char('n'), KeyModifiers::CONTROL) => KeyPress::Next,
            (KeyCode::Enter, KeyModifiers::NONE) => KeyPress::Enter,
            (KeyCode::Esc, KeyModifiers::NONE) => KeyPress::Esc,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyPress::CtrlC,
            _ => KeyPress::Noop,
        },
        _ => KeyPress::Noop,
    }
}

/// Source of key presses for the event loop. Implemented by the real
/// crossterm reader and by [`crate::test_utils::TestVecKeyPressReader`].
pub trait KeyPressReader {
    /// Block until the next key press. `None` means the underlying input
    /// stream failed and the event loop should bail out.
    fn read_key_press(&mut self) -> Option<KeyPress>;
}

#[derive(Debug)]
pub struct CrosstermKeyPressReader;

impl KeyPressReader for CrosstermKeyPressReader {
    fn read_key_press(&mut self) -> Option<KeyPress> {
        let event = crossterm::event::read().ok()?;
        Some(keypress_from_event(event))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn key_event(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_navigation_key_aliases() {
        for (code, modifiers, expected) in [
            (KeyCode::Up, KeyModifiers::NONE, KeyPress::Previous),
            (KeyCode::Char('k'), KeyModifiers::NONE, KeyPress::Previous),
            (KeyCode::Char('p'), KeyModifiers::CONTROL, KeyPress::Previous),
            (KeyCode::Down, KeyModifiers::NONE, KeyPress::Next),
            (KeyCode::Char('j'), KeyModifiers::NONE, KeyPress::Next),
            (KeyCode::Char('n'), KeyModifiers::CONTROL, KeyPress::Next),
        ] {
            assert_eq!(keypress_from_event(key_event(code, modifiers)), expected);
        }
    }

    #[test]
    fn test_confirm_and_abort_keys() {
        assert_eq!(
            keypress_from_event(key_event(KeyCode::Enter, KeyModifiers::NONE)),
            KeyPress::Enter
        );
        assert_eq!(
            keypress_from_event(key_event(KeyCode::Esc, KeyModifiers::NONE)),
            KeyPress::Esc
        );
        assert_eq!(
            keypress_from_event(key_event(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyPress::CtrlC
        );
    }

    #[test]
    fn test_unrecognized_events_are_noops() {
        assert_eq!(
            keypress_from_event(key_event(KeyCode::Char('x'), KeyModifiers::NONE)),
            KeyPress::Noop
        );
        assert_eq!(
            keypress_from_event(key_event(KeyCode::Char('j'), KeyModifiers::ALT)),
            KeyPress::Noop
        );
        assert_eq!(
            keypress_from_event(Event::FocusGained),
            KeyPress::Noop
        );
    }

    #[test]
    fn test_key_release_events_are_noops() {
        let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(keypress_from_event(Event::Key(release)), KeyPress::Noop);
    }
}
