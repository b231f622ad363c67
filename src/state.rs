// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Selection state: the logical cursor over the selectable subset, and the
//! prompt lifecycle status. This is the only mutable data of a prompt
//! invocation; the items and the selectable subset are frozen at
//! construction.

use std::fmt::Display;

use crate::{normalize_entries, selectable_indices, ChoiceItem, InlineVec, Item, SelectEntry};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Status {
    /// Awaiting input.
    #[default]
    Idle,
    /// A confirm event has been accepted. Terminal: no further key events are
    /// processed.
    Done,
}

/// Prompt state. `active_index` is an index into the selectable subset, NOT
/// into the full item sequence: separators and disabled choices are invisible
/// to navigation.
///
/// Invariant: `active_index` stays in `[0, selectable_count)` whenever
/// `selectable_count > 0`. When every item is a separator or disabled,
/// `active_index` is meaningless and [`State::confirm`] never resolves; the
/// caller is responsible for not invoking the prompt with such a list.
#[derive(Debug, Clone, PartialEq)]
pub struct State<V> {
    pub items: Vec<Item<V>>,
    selectable: InlineVec<usize>,
    pub active_index: usize,
    pub status: Status,
    pub wrap_around: bool,
}

impl<V: Display + PartialEq> State<V> {
    /// Normalize the entries, derive the selectable subset, and resolve the
    /// default value to the initial `active_index` (falling back to 0 when
    /// the default is absent from the selectable subset).
    pub fn new(
        entries: Vec<SelectEntry<V>>,
        default_value: Option<&V>,
        wrap_around: bool,
    ) -> Self {
        let items = normalize_entries(entries);
        let selectable = selectable_indices(&items);

        let active_index = default_value
            .and_then(|default_value| {
                selectable.iter().position(|&item_index| {
                    matches!(
                        &items[item_index],
                        Item::Choice(choice) if &choice.value == default_value
                    )
                })
            })
            .unwrap_or(0);

        Self {
            items,
            selectable,
            active_index,
            status: Status::Idle,
            wrap_around,
        }
    }
}

impl<V> State<V> {
    pub fn selectable_count(&self) -> usize { self.selectable.len() }

    /// The choice the cursor is on, if any choice is selectable at all.
    pub fn active_choice(&self) -> Option<&ChoiceItem<V>> {
        let item_index = *self.selectable.get(self.active_index)?;
        match &self.items[item_index] {
            Item::Choice(choice) => Some(choice),
            Item::Separator(_) => None,
        }
    }

    /// Move the cursor to the previous selectable choice. Wraps from 0 to the
    /// last index when wraparound is on, clamps at 0 otherwise.
    pub fn move_previous(&mut self) {
        let count = self.selectable_count();
        if count == 0 {
            return;
        }
        self.active_index = if self.wrap_around {
            (self.active_index + count - 1) % count
        } else {
            self.active_index.saturating_sub(1)
        };
    }

    /// Move the cursor to the next selectable choice. Wraps from the last
    /// index to 0 when wraparound is on, clamps at the end otherwise.
    pub fn move_next(&mut self) {
        let count = self.selectable_count();
        if count == 0 {
            return;
        }
        self.active_index = if self.wrap_around {
            (self.active_index + 1) % count
        } else {
            (self.active_index + 1).min(count - 1)
        };
    }

    /// Accept a confirm event: transition to [`Status::Done`] and return the
    /// active choice. A no-op returning `None` when nothing is selectable.
    pub fn confirm(&mut self) -> Option<&ChoiceItem<V>> {
        if self.selectable.is_empty() {
            return None;
        }
        self.status = Status::Done;
        self.active_choice()
    }
}
