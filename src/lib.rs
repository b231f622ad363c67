// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # selectify
//!
//! A keystroke-driven single-select list prompt for CLI apps. It renders a
//! navigable list of choices (including disabled entries and non-selectable
//! separators), tracks a logical cursor over the enabled choices only, and
//! resolves to the chosen value when the user presses enter.
//!
//! This crate can be used in two ways:
//! 1. As a library. The function that does the work of rendering the prompt is
//!    [`select_from_list`]. It takes a [`SelectConfig`] describing the message,
//!    the choice entries, an optional pre-selected value, and a [`Theme`], and
//!    returns the selected value. If the user does not select anything, it
//!    returns `None`.
//! 1. As a binary. The binary target is called `sel`. It reads choices from
//!    `stdin` (one per line, or JSON records with `--json`), shows the prompt,
//!    and runs a command of your choosing with the selection.
//!
//! ```no_run
//! use selectify::{select_from_list, SelectConfig, SelectEntry};
//!
//! let entries = vec![
//!     SelectEntry::separator_with_label("── starters ──"),
//!     SelectEntry::choice("vite"),
//!     SelectEntry::choice("next"),
//! ];
//!
//! let config = SelectConfig::new("Select a project template:", entries)
//!     .with_default_value("next");
//!
//! match select_from_list(config) {
//!     Some(it) => println!("User selected: {it}"),
//!     None => println!("User did not select anything"),
//! }
//! ```
//!
//! Navigation keys: up arrow / `k` / `ctrl+p` move the cursor to the previous
//! enabled choice, down arrow / `j` / `ctrl+n` to the next one, and enter
//! confirms. Separators and disabled choices are skipped transparently. The
//! cursor wraps around the list ends unless wraparound is switched off in the
//! [`SelectConfig`].
//!
//! If the terminal is *fully* uninteractive the prompt exits immediately
//! without a result. This is useful so that it won't block `cargo test` or
//! when run in non-interactive CI/CD environments.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(clippy::unwrap_in_result)]
#![warn(rust_2018_idioms)]

pub mod choices;
pub mod components;
pub mod event_loop;
pub mod function_component;
pub mod keypress;
pub mod logging;
pub mod public_api;
pub mod state;
pub mod term;
pub mod test_utils;

pub use choices::*;
pub use components::*;
pub use event_loop::*;
pub use function_component::*;
pub use keypress::*;
pub use logging::*;
pub use public_api::*;
pub use state::*;
pub use term::*;

use smallvec::SmallVec;

/// Enable debug tracing in the event loop and reducer. The traces go to the
/// `tracing` subscriber, if one is installed (see
/// [`logging::try_initialize_logging`]); you can use `tail -f <log file>` to
/// watch them.
pub const DEVELOPMENT_MODE: bool = true;

/// Tuning parameter for [`InlineVec`]. Lists shorter than this live on the
/// stack.
pub const INLINE_VEC_SIZE: usize = 8;

/// Stack-allocated vector for short lists (frame lines, selectable indices).
/// Spills to the heap past [`INLINE_VEC_SIZE`] items.
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
