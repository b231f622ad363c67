// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The renderer. [`build_frame`] is a pure function from prompt state to an
//! ordered list of display lines; [`SelectComponent`] writes those lines to
//! its writer with a full-frame redraw (clear each row, reprint, reposition
//! the cursor).
//!
//! Cursor placement counts *enabled* choices only: separators and disabled
//! choices are transparent to the running counter that is compared against
//! `active_index`. Indexing into the raw item list instead would misplace the
//! cursor whenever a separator or disabled item precedes the active one.

use std::{
    fmt::Display,
    io::{Result, Write},
};

use crossterm::{
    cursor::{MoveToColumn, MoveToNextLine, MoveToPreviousLine},
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use smallvec::smallvec;

use crate::{
    FunctionComponent, HelpMode, InlineVec, Item, State, Status, Theme, DEVELOPMENT_MODE,
    DISABLED_ANNOTATION,
};

/// Help-tip line describing the navigation keys, appended after the item
/// lines when visible.
pub const HELP_TIP_TEXT: &str = "(Use arrow keys, j/k, or ctrl+n/ctrl+p to navigate)";

/// Under [`HelpMode::Auto`] the help tip appears only when the selectable
/// count exceeds this.
pub const HELP_TIP_AUTO_THRESHOLD: usize = 6;

/// Cursor placeholder on inactive choice lines.
const NO_CURSOR: &str = " ";

/// Build one frame: the full textual representation of the prompt for the
/// given state. No side effects; the caller owns writing and clearing.
///
/// Once the prompt is done this collapses to a single line of the form
/// `<prefix> <message> <chosen label>`.
pub fn build_frame<V: Display>(
    state: &State<V>,
    message: &str,
    theme: &Theme,
) -> InlineVec<String> {
    let prefix = theme.prefix_style.paint(&theme.prefix_icon);
    let message = theme.message_style.paint(message);

    if state.status == Status::Done {
        let chosen_label = state
            .active_choice()
            .map(|choice| choice.label.as_str())
            .unwrap_or_default();
        return smallvec![format!(
            "{prefix} {message} {}",
            theme.answer_style.paint(chosen_label)
        )];
    }

    let mut lines: InlineVec<String> = InlineVec::with_capacity(state.items.len() + 3);

    lines.push(format!("{prefix} {message}"));

    // Walk the full item sequence, counting selectable positions separately.
    let mut selectable_counter = 0;
    for item in &state.items {
        match item {
            Item::Separator(label) => {
                lines.push(format!(" {}", theme.separator_style.paint(label)));
            }
            Item::Choice(choice) if choice.disabled.is_disabled() => {
                let annotation = choice.disabled.annotation().unwrap_or(DISABLED_ANNOTATION);
                lines.push(
                    theme
                        .disabled_style
                        .paint(&format!("- {} {annotation}", choice.label)),
                );
            }
            Item::Choice(choice) => {
                let is_active = selectable_counter == state.active_index;
                selectable_counter += 1;
                if is_active {
                    lines.push(theme.highlight_style.paint(&format!(
                        "{} {}",
                        theme.cursor_icon, choice.label
                    )));
                } else {
                    lines.push(
                        theme
                            .normal_style
                            .paint(&format!("{NO_CURSOR} {}", choice.label)),
                    );
                }
            }
        }
    }

    if is_help_tip_visible(state, theme) {
        lines.push(theme.help_tip_style.paint(HELP_TIP_TEXT));
    }

    if let Some(description) = state
        .active_choice()
        .and_then(|choice| choice.description.as_deref())
    {
        lines.push(theme.description_style.paint(description));
    }

    lines
}

/// The help tip depends only on data that is fixed for the lifetime of the
/// prompt (selectable count and theme), so its row can be accounted for in
/// the viewport height up front.
pub fn is_help_tip_visible<V>(state: &State<V>, theme: &Theme) -> bool {
    match theme.help_mode {
        HelpMode::Always => true,
        HelpMode::Never => false,
        HelpMode::Auto => state.selectable_count() > HELP_TIP_AUTO_THRESHOLD,
    }
}

pub struct SelectComponent<W: Write> {
    pub write: W,
    pub message: String,
    pub theme: Theme,
}

impl<W: Write, V: Display> FunctionComponent<W, State<V>> for SelectComponent<W> {
    fn get_write(&mut self) -> &mut W { &mut self.write }

    /// Height of the managed display area: header row, one row per item, a
    /// help-tip row when visible, and one reserved description row when any
    /// choice carries a description. Constant per prompt invocation
    /// regardless of the lifecycle status, so that allocation and clearing
    /// always cover the same rows.
    fn calculate_viewport_height(&self, state: &State<V>) -> usize {
        let has_description_row = state.items.iter().any(|item| {
            matches!(item, Item::Choice(choice) if choice.description.is_some())
        });
        1 + state.items.len()
            + usize::from(is_help_tip_visible(state, &self.theme))
            + usize::from(has_description_row)
    }

    fn render(&mut self, state: &State<V>) -> Result<()> {
        let frame = build_frame(state, &self.message, &self.theme);

        if DEVELOPMENT_MODE {
            tracing::debug!(
                active_index = state.active_index,
                status = ?state.status,
                frame_rows = frame.len(),
                "render"
            );
        }

        match state.status {
            // Collapsed result line; leave the cursor below it so the shell
            // prompt continues after the answer.
            Status::Done => {
                let writer = FunctionComponent::<W, State<V>>::get_write(self);
                for line in &frame {
                    queue!(
                        writer,
                        MoveToColumn(0),
                        Clear(ClearType::CurrentLine),
                        Print(line),
                        MoveToNextLine(1),
                    )?;
                }
                writer.flush()?;
            }
            // Full frame, padded to the viewport height so stale rows from
            // the previous frame are always overwritten; cursor returns to
            // the first row for the next redraw.
            Status::Idle => {
                let viewport_height = self.calculate_viewport_height(state);
                let writer = FunctionComponent::<W, State<V>>::get_write(self);
                for row_index in 0..viewport_height {
                    let line = frame.get(row_index).map(String::as_str).unwrap_or("");
                    queue!(
                        writer,
                        MoveToColumn(0),
                        Clear(ClearType::CurrentLine),
                        Print(line),
                        MoveToNextLine(1),
                    )?;
                }
                queue!(writer, MoveToPreviousLine(viewport_height as u16))?;
                writer.flush()?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ChoiceSpec, SelectEntry};

    fn create_state(entries: Vec<SelectEntry<&'static str>>) -> State<&'static str> {
        State::new(entries, None, true)
    }

    #[test]
    fn test_cursor_skips_separators_and_disabled_choices() {
        let mut state = create_state(vec![
            SelectEntry::separator_with_label("────"),
            SelectEntry::choice("A"),
            SelectEntry::Choice(ChoiceSpec::new("B").with_disabled(true)),
            SelectEntry::choice("C"),
        ]);
        state.active_index = 1;

        let frame = build_frame(&state, "Pick one", &Theme::monochrome());

        assert_eq!(
            frame.as_slice(),
            [
                "? Pick one".to_string(),
                " ────".to_string(),
                "  A".to_string(),
                "- B (disabled)".to_string(),
                "❯ C".to_string(),
            ]
        );
    }

    #[test]
    fn test_disabled_reason_replaces_default_annotation() {
        let state = create_state(vec![
            SelectEntry::choice("A"),
            SelectEntry::Choice(ChoiceSpec::new("B").with_disabled("requires login")),
        ]);

        let frame = build_frame(&state, "Pick one", &Theme::monochrome());

        assert_eq!(frame[2], "- B requires login");
    }

    #[test]
    fn test_done_frame_collapses_to_result_line() {
        let mut state = create_state(vec![
            SelectEntry::choice("first"),
            SelectEntry::choice("second"),
        ]);
        state.move_next();
        state.confirm();

        let frame = build_frame(&state, "Pick one", &Theme::monochrome());

        assert_eq!(frame.as_slice(), ["? Pick one second".to_string()]);
    }

    #[test]
    fn test_description_of_active_choice_is_trailing_line() {
        let mut state = create_state(vec![
            SelectEntry::Choice(ChoiceSpec::new("vite").with_description("Vite official template")),
            SelectEntry::choice("next"),
        ]);

        let frame = build_frame(&state, "Pick one", &Theme::monochrome());
        assert_eq!(frame.last().unwrap(), "Vite official template");

        // Moving away from the described choice drops the trailing line.
        state.move_next();
        let frame = build_frame(&state, "Pick one", &Theme::monochrome());
        assert_eq!(frame.last().unwrap(), "❯ next");
    }

    #[test]
    fn test_help_tip_auto_threshold() {
        let seven: Vec<SelectEntry<String>> =
            (1..=7).map(|it| SelectEntry::choice(it.to_string())).collect();
        let five: Vec<SelectEntry<String>> =
            (1..=5).map(|it| SelectEntry::choice(it.to_string())).collect();

        let theme = Theme::monochrome();

        // 7 selectable: the tip line follows the item lines.
        let state = State::new(seven, None, true);
        let frame = build_frame(&state, "Pick", &theme);
        assert_eq!(frame.len(), 9);
        assert_eq!(frame.last().unwrap(), HELP_TIP_TEXT);

        // 5 selectable: no tip line.
        let state = State::new(five, None, true);
        let frame = build_frame(&state, "Pick", &theme);
        assert_eq!(frame.len(), 6);
        assert!(frame.iter().all(|line| line != HELP_TIP_TEXT));
    }

    #[test]
    fn test_help_tip_always_and_never_modes() {
        let entries: Vec<SelectEntry<&str>> = vec![SelectEntry::choice("only")];

        let mut theme = Theme::monochrome();
        theme.help_mode = HelpMode::Always;
        let state = State::new(entries.clone(), None, true);
        let frame = build_frame(&state, "Pick", &theme);
        assert_eq!(
            frame.as_slice(),
            [
                "? Pick".to_string(),
                "❯ only".to_string(),
                HELP_TIP_TEXT.to_string(),
            ]
        );

        theme.help_mode = HelpMode::Never;
        let state = State::new(entries, None, true);
        let frame = build_frame(&state, "Pick", &theme);
        assert_eq!(
            frame.as_slice(),
            ["? Pick".to_string(), "❯ only".to_string()]
        );
    }

    #[test]
    fn test_help_tip_precedes_description_line() {
        let mut theme = Theme::monochrome();
        theme.help_mode = HelpMode::Always;

        let state = create_state(vec![SelectEntry::Choice(
            ChoiceSpec::new("a").with_description("the first letter"),
        )]);
        let frame = build_frame(&state, "Pick", &theme);

        assert_eq!(
            frame.as_slice(),
            [
                "? Pick".to_string(),
                "❯ a".to_string(),
                HELP_TIP_TEXT.to_string(),
                "the first letter".to_string(),
            ]
        );
    }

    #[test]
    fn test_viewport_height_reserves_description_row() {
        let component = SelectComponent {
            write: Vec::<u8>::new(),
            message: "Pick".to_string(),
            theme: Theme::monochrome(),
        };

        let without_descriptions =
            create_state(vec![SelectEntry::choice("a"), SelectEntry::choice("b")]);
        assert_eq!(component.calculate_viewport_height(&without_descriptions), 3);

        let with_description = create_state(vec![
            SelectEntry::choice("a"),
            SelectEntry::Choice(ChoiceSpec::new("b").with_description("described")),
        ]);
        assert_eq!(component.calculate_viewport_height(&with_description), 4);
    }
}
