// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Styling for the prompt. A [`Theme`] is an explicit configuration struct
//! threaded into the renderer, never a module-level singleton; callers
//! override any part of it per invocation.

use crossterm::style::{Attribute, Color, ContentStyle};

/// Visibility of the navigation help tip in the header line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HelpMode {
    Always,
    Never,
    /// Show only when the selectable count exceeds
    /// [`crate::HELP_TIP_AUTO_THRESHOLD`].
    #[default]
    Auto,
}

/// A renderable text style. Kept deliberately small: the subset of terminal
/// styling this prompt actually uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
}

impl TextStyle {
    pub fn new() -> Self { Self::default() }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Apply the style to `text`, producing a string with ANSI escape
    /// sequences. A default (empty) style returns the text verbatim, which
    /// keeps frames byte-comparable in tests.
    pub fn paint(&self, text: &str) -> String {
        let mut content_style = ContentStyle::new();
        content_style.foreground_color = self.fg;
        content_style.background_color = self.bg;
        if self.bold {
            content_style.attributes.set(Attribute::Bold);
        }
        if self.dim {
            content_style.attributes.set(Attribute::Dim);
        }
        if self.italic {
            content_style.attributes.set(Attribute::Italic);
        }
        if self.underline {
            content_style.attributes.set(Attribute::Underlined);
        }
        content_style.apply(text).to_string()
    }
}

/// Styling hooks for every part of a rendered frame, plus the help-tip
/// visibility mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Glyph in front of the message, e.g. `?`.
    pub prefix_icon: String,
    pub prefix_style: TextStyle,
    /// Glyph marking the active choice, e.g. `❯`.
    pub cursor_icon: String,
    pub message_style: TextStyle,
    /// Style of the active choice line.
    pub highlight_style: TextStyle,
    /// Style of inactive enabled choice lines.
    pub normal_style: TextStyle,
    pub separator_style: TextStyle,
    pub disabled_style: TextStyle,
    pub description_style: TextStyle,
    pub help_tip_style: TextStyle,
    /// Style of the chosen label in the collapsed result line.
    pub answer_style: TextStyle,
    pub help_mode: HelpMode,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            prefix_icon: "?".to_string(),
            prefix_style: TextStyle::new().fg(Color::Green),
            cursor_icon: "❯".to_string(),
            message_style: TextStyle::new().bold(),
            highlight_style: TextStyle::new().fg(Color::Cyan),
            normal_style: TextStyle::new(),
            separator_style: TextStyle::new().dim(),
            disabled_style: TextStyle::new().dim(),
            description_style: TextStyle::new().fg(Color::Cyan),
            help_tip_style: TextStyle::new().dim(),
            answer_style: TextStyle::new().fg(Color::Cyan),
            help_mode: HelpMode::Auto,
        }
    }
}

impl Theme {
    /// No colors, no attributes. Frames render as plain text; used by tests
    /// and by terminals where escape sequences are unwelcome.
    pub fn monochrome() -> Self {
        Self {
            prefix_icon: "?".to_string(),
            prefix_style: TextStyle::new(),
            cursor_icon: "❯".to_string(),
            message_style: TextStyle::new(),
            highlight_style: TextStyle::new(),
            normal_style: TextStyle::new(),
            separator_style: TextStyle::new(),
            disabled_style: TextStyle::new(),
            description_style: TextStyle::new(),
            help_tip_style: TextStyle::new(),
            answer_style: TextStyle::new(),
            help_mode: HelpMode::Auto,
        }
    }

    pub fn lizard_green() -> Self {
        let lizard_green = Color::Rgb {
            r: 20,
            g: 244,
            b: 0,
        };
        let dusty_light_blue = Color::Rgb {
            r: 171,
            g: 204,
            b: 242,
        };
        let light_gray = Color::Rgb {
            r: 94,
            g: 103,
            b: 111,
        };
        Self {
            prefix_icon: "?".to_string(),
            prefix_style: TextStyle::new().fg(lizard_green),
            cursor_icon: "❯".to_string(),
            message_style: TextStyle::new().bold(),
            highlight_style: TextStyle::new().fg(lizard_green),
            normal_style: TextStyle::new(),
            separator_style: TextStyle::new().dim(),
            disabled_style: TextStyle::new().dim().fg(light_gray),
            description_style: TextStyle::new().fg(dusty_light_blue),
            help_tip_style: TextStyle::new().dim().fg(light_gray),
            answer_style: TextStyle::new().fg(dusty_light_blue),
            help_mode: HelpMode::Auto,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_utils::contains_ansi_escape_sequence;

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();

        assert_eq!(theme.prefix_icon, "?");
        assert_eq!(theme.cursor_icon, "❯");
        assert_eq!(theme.prefix_style.fg, Some(Color::Green));
        assert_eq!(theme.highlight_style.fg, Some(Color::Cyan));
        assert_eq!(theme.description_style.fg, Some(Color::Cyan));
        assert!(theme.message_style.bold);
        assert!(theme.separator_style.dim);
        assert!(theme.disabled_style.dim);
        assert!(theme.help_tip_style.dim);
        assert_eq!(theme.help_mode, HelpMode::Auto);
    }

    #[test]
    fn test_paint_styled_text_emits_ansi() {
        let painted = TextStyle::new().bold().fg(Color::Cyan).paint("text");
        assert!(contains_ansi_escape_sequence(&painted));
        assert!(painted.contains("text"));
    }

    #[test]
    fn test_paint_empty_style_is_verbatim() {
        let painted = TextStyle::new().paint("plain text");
        assert_eq!(painted, "plain text");
        assert!(!contains_ansi_escape_sequence(&painted));
    }

    #[test]
    fn test_monochrome_theme_paints_nothing() {
        let theme = Theme::monochrome();
        let painted = theme.highlight_style.paint("choice");
        assert_eq!(painted, "choice");
    }
}
