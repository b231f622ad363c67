// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Choice normalization. Caller-supplied heterogeneous entries (choices and
//! separators, with optional labels, descriptions, and disabled markers) are
//! converted once, at prompt construction time, into a uniform ordered
//! sequence of [`Item`]s. Relative order is never changed, nothing fails:
//! best-effort defaults are applied instead.

use std::fmt::Display;

use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::InlineVec;

/// Width of the horizontal rule used when a separator carries no label.
pub const SEPARATOR_RULE_WIDTH: usize = 50;

/// Annotation rendered for a disabled choice that carries no reason string.
pub const DISABLED_ANNOTATION: &str = "(disabled)";

/// Disabled marker of a choice. A choice is selectable iff this is
/// [`Disabled::No`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Disabled {
    #[default]
    No,
    Yes,
    /// Disabled with a reason string, rendered verbatim in place of the
    /// default [`DISABLED_ANNOTATION`].
    Reason(String),
}

impl Disabled {
    pub fn is_disabled(&self) -> bool { !matches!(self, Disabled::No) }

    /// The annotation to render next to the label, or `None` when enabled.
    pub fn annotation(&self) -> Option<&str> {
        match self {
            Disabled::No => None,
            Disabled::Yes => Some(DISABLED_ANNOTATION),
            Disabled::Reason(reason) => Some(reason),
        }
    }
}

impl From<bool> for Disabled {
    fn from(flag: bool) -> Self {
        match flag {
            true => Disabled::Yes,
            false => Disabled::No,
        }
    }
}

impl From<&str> for Disabled {
    fn from(reason: &str) -> Self { Disabled::Reason(reason.to_string()) }
}

impl From<String> for Disabled {
    fn from(reason: String) -> Self { Disabled::Reason(reason) }
}

/// A caller-supplied choice record, prior to normalization. Only the value is
/// required.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceSpec<V> {
    pub value: V,
    /// Display label. Defaults to the value's [`Display`] form.
    pub label: Option<String>,
    pub description: Option<String>,
    pub disabled: Disabled,
}

impl<V> ChoiceSpec<V> {
    pub fn new(value: V) -> Self {
        Self {
            value,
            label: None,
            description: None,
            disabled: Disabled::No,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_disabled(mut self, disabled: impl Into<Disabled>) -> Self {
        self.disabled = disabled.into();
        self
    }
}

/// One caller-supplied entry of the prompt: either a separator (with an
/// optional label) or a choice record.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectEntry<V> {
    Separator(Option<String>),
    Choice(ChoiceSpec<V>),
}

impl<V> SelectEntry<V> {
    pub fn separator() -> Self { SelectEntry::Separator(None) }

    pub fn separator_with_label(label: impl Into<String>) -> Self {
        SelectEntry::Separator(Some(label.into()))
    }

    pub fn choice(value: V) -> Self { SelectEntry::Choice(ChoiceSpec::new(value)) }
}

impl<V> From<ChoiceSpec<V>> for SelectEntry<V> {
    fn from(spec: ChoiceSpec<V>) -> Self { SelectEntry::Choice(spec) }
}

/// A normalized choice. All defaults have been applied; immutable for the
/// lifetime of the prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceItem<V> {
    pub value: V,
    pub label: String,
    pub description: Option<String>,
    pub disabled: Disabled,
}

impl<V> ChoiceItem<V> {
    pub fn is_selectable(&self) -> bool { !self.disabled.is_disabled() }
}

/// A normalized prompt item: the tagged union all downstream logic matches
/// on. Separators are never selectable and never focusable.
#[derive(Debug, Clone, PartialEq)]
pub enum Item<V> {
    Separator(String),
    Choice(ChoiceItem<V>),
}

pub fn default_separator_label() -> String { "─".repeat(SEPARATOR_RULE_WIDTH) }

/// Convert caller entries into normalized items, preserving relative order.
/// Separator labels default to a horizontal rule, choice labels to the
/// value's [`Display`] form, disabled markers to enabled.
pub fn normalize_entries<V: Display>(entries: Vec<SelectEntry<V>>) -> Vec<Item<V>> {
    entries
        .into_iter()
        .map(|entry| match entry {
            SelectEntry::Separator(maybe_label) => {
                Item::Separator(maybe_label.unwrap_or_else(default_separator_label))
            }
            SelectEntry::Choice(ChoiceSpec {
                value,
                label,
                description,
                disabled,
            }) => {
                let label = label.unwrap_or_else(|| value.to_string());
                Item::Choice(ChoiceItem {
                    value,
                    label,
                    description,
                    disabled,
                })
            }
        })
        .collect()
}

/// Indices (into the full item sequence) of the selectable subset: enabled
/// choices only, in order. Computed exactly once per prompt invocation.
pub fn selectable_indices<V>(items: &[Item<V>]) -> InlineVec<usize> {
    items
        .iter()
        .enumerate()
        .filter_map(|(item_index, item)| match item {
            Item::Choice(choice) if choice.is_selectable() => Some(item_index),
            _ => None,
        })
        .collect()
}

/// JSON choice record as accepted by the `sel` binary (`--json`). Field names
/// follow the wire form: `value` is required, `name` (alias `label`),
/// `description`, and `disabled` (boolean or reason string) are optional.
#[derive(Debug, Clone, Deserialize)]
struct RawChoiceRecord {
    value: JsonValue,
    #[serde(default, alias = "label")]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    disabled: Option<JsonValue>,
}

/// Decode one `stdin` line into an entry. A line that is not valid JSON is a
/// plain choice whose value is the raw line.
pub fn entry_from_json_line(line: &str) -> SelectEntry<String> {
    match serde_json::from_str::<JsonValue>(line) {
        Ok(value) => entry_from_json_value(value),
        Err(_) => SelectEntry::Choice(ChoiceSpec::new(line.to_string())),
    }
}

/// Recognition rules for heterogeneous JSON entries: an object carrying a
/// `"type": "separator"` tag or a `"separator"` field is a separator (label
/// taken from that field when it is a string); anything else is treated as a
/// choice.
pub fn entry_from_json_value(value: JsonValue) -> SelectEntry<String> {
    if let JsonValue::Object(ref map) = value {
        let is_separator = map.get("type").and_then(JsonValue::as_str) == Some("separator")
            || map.contains_key("separator");
        if is_separator {
            let label = map
                .get("separator")
                .and_then(JsonValue::as_str)
                .map(str::to_owned);
            return SelectEntry::Separator(label);
        }

        if let Ok(record) = serde_json::from_value::<RawChoiceRecord>(value.clone()) {
            let mut spec = ChoiceSpec::new(json_value_to_display_string(&record.value));
            if let Some(name) = record.name {
                spec = spec.with_label(name);
            }
            if let Some(description) = record.description {
                spec = spec.with_description(description);
            }
            spec.disabled = disabled_from_json(record.disabled.as_ref());
            return SelectEntry::Choice(spec);
        }
    }

    // Not recognized as a separator, not choice-shaped: best-effort choice.
    SelectEntry::Choice(ChoiceSpec::new(json_value_to_display_string(&value)))
}

fn disabled_from_json(value: Option<&JsonValue>) -> Disabled {
    match value {
        Some(JsonValue::Bool(true)) => Disabled::Yes,
        Some(JsonValue::String(reason)) => Disabled::Reason(reason.clone()),
        _ => Disabled::No,
    }
}

fn json_value_to_display_string(value: &JsonValue) -> String {
    match value {
        JsonValue::String(text) => text.clone(),
        other => other.to_string(),
    }
}
