// SPDX-License-Identifier: PMPL-1.0-or-later
//! Heuristic predicates and their tunable data tables.
//!
//! Every classification the checks rely on (generic text detection, the
//! decorative-image rule, the coarse light/dark color split, keyboard
//! handler presence) lives here as a pure function over a [`Heuristics`]
//! table, so behavior can be tuned through configuration without touching
//! the checks themselves.

use crate::page::PageNode;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Tunable heuristic tables. `Default` carries the baseline values the
/// checks are tested against; callers may deserialize overrides from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Heuristics {
    /// Substrings that mark alt text as generic (matched case-insensitively)
    pub generic_alt_terms: Vec<String>,
    /// Alt text at or above this length is never flagged as generic
    pub generic_alt_max_len: usize,
    /// Exact (case-insensitive) button labels considered generic
    pub generic_button_text: Vec<String>,
    /// Button labels shorter than this are considered generic
    pub generic_button_min_len: usize,
    /// Class names marking an image (or its parent) as decorative
    pub decorative_classes: Vec<String>,
    /// Inline handler attributes that count as keyboard support
    pub keyboard_handler_attrs: Vec<String>,
    /// Lexical tokens denoting pure white
    pub light_color_tokens: Vec<String>,
    /// Focus-indicator findings truncate node text to this many characters
    pub context_snippet_len: usize,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            generic_alt_terms: strings(&["image", "picture", "photo", "graphic", "icon", "logo"]),
            generic_alt_max_len: 20,
            generic_button_text: strings(&["click", "button", "here", "link", "more"]),
            generic_button_min_len: 3,
            decorative_classes: strings(&["decoration", "background"]),
            keyboard_handler_attrs: strings(&["onkeydown", "onkeyup", "onkeypress"]),
            light_color_tokens: strings(&["rgb(255", "#fff", "white"]),
            context_snippet_len: 30,
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Alt text is generic when it contains one of the generic terms AND is
/// short. Both conditions are required: a long descriptive sentence that
/// happens to contain "photo" is not flagged.
pub fn is_generic_alt_text(alt: &str, heuristics: &Heuristics) -> bool {
    if alt.chars().count() >= heuristics.generic_alt_max_len {
        return false;
    }
    let lower = alt.to_lowercase();
    heuristics
        .generic_alt_terms
        .iter()
        .any(|term| lower.contains(term.as_str()))
}

/// Button text is generic on an exact case-insensitive match against the
/// generic set, or when the trimmed label is shorter than the minimum.
pub fn is_generic_button_text(text: &str, heuristics: &Heuristics) -> bool {
    let lower = text.trim().to_lowercase();
    heuristics.generic_button_text.iter().any(|t| *t == lower)
        || lower.chars().count() < heuristics.generic_button_min_len
}

/// An image is decorative when it or its immediate parent carries one of
/// the decorative class names (exact class-list membership, not substring).
pub fn is_decorative_image(node: &dyn PageNode, heuristics: &Heuristics) -> bool {
    let own = node.classes();
    let parent = node.parent_classes();
    heuristics
        .decorative_classes
        .iter()
        .any(|class| own.contains(class) || parent.contains(class))
}

/// Whether the node carries any recognized inline keyboard handler
/// attribute. Detection is deliberately attribute-only: handlers attached
/// through a separate registration capability are invisible to a snapshot.
pub fn has_keyboard_handler(node: &dyn PageNode, heuristics: &Heuristics) -> bool {
    heuristics
        .keyboard_handler_attrs
        .iter()
        .any(|attr| node.attr(attr).is_some())
}

/// Coarse lexical classification of a computed color string.
///
/// This is not colorimetry: "light" means the string lexically denotes pure
/// white, "dark" means any other recognized color form. Strings the
/// heuristic does not recognize classify as [`ColorClass::Unknown`] and
/// never trigger a contrast flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorClass {
    Light,
    Dark,
    Transparent,
    Unknown,
}

/// Named CSS colors the dark branch recognizes
const NAMED_COLORS: &[&str] = &[
    "black", "red", "green", "blue", "yellow", "gray", "grey", "silver", "maroon", "olive",
    "lime", "aqua", "cyan", "teal", "navy", "fuchsia", "magenta", "purple", "orange",
];

/// Classify a color string into the coarse light/dark/transparent split
pub fn classify_color(value: &str, heuristics: &Heuristics) -> ColorClass {
    let lower = value.trim().to_lowercase();
    if lower.is_empty() {
        return ColorClass::Unknown;
    }

    let transparent_re =
        Regex::new(r"^rgba\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*,\s*0(\.0+)?\s*\)$").expect("valid regex");
    if lower == "transparent" || transparent_re.is_match(&lower) {
        return ColorClass::Transparent;
    }

    if heuristics
        .light_color_tokens
        .iter()
        .any(|token| lower.contains(token.as_str()))
    {
        return ColorClass::Light;
    }

    let rgb_re = Regex::new(r"^rgba?\(\s*\d+\s*,\s*\d+\s*,\s*\d+").expect("valid regex");
    let hex_re = Regex::new(r"^#[0-9a-f]{3}([0-9a-f]{3})?$").expect("valid regex");
    if rgb_re.is_match(&lower) || hex_re.is_match(&lower) || NAMED_COLORS.contains(&lower.as_str())
    {
        return ColorClass::Dark;
    }

    ColorClass::Unknown
}

/// Truncate trimmed node text to the configured context snippet length
pub fn text_snippet(text: &str, heuristics: &Heuristics) -> String {
    text.chars().take(heuristics.context_snippet_len).collect()
}
