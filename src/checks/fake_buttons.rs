// SPDX-License-Identifier: PMPL-1.0-or-later
//! Fake-button inspection: non-native elements wired to pointer clicks.
//!
//! Nodes carrying `onclick` or `data-click` that are not native buttons or
//! links need the full keyboard-affordance set: `role="button"`, a
//! `tabindex`, and a keyboard handler. The three checks fire independently.

use crate::checks::Check;
use crate::finding::Finding;
use crate::heuristics::{self, Heuristics};
use crate::page::{Page, QueryError};

/// Natively accessible tags exempt from this check
const NATIVE_CLICKABLE: &[&str] = &["button", "a"];

pub struct FakeButtonCheck;

impl Check for FakeButtonCheck {
    fn name(&self) -> &str {
        "fake-buttons"
    }

    fn description(&self) -> &str {
        "Checks clickable non-button elements for role, tabindex, and keyboard handlers"
    }

    fn run(&self, page: &dyn Page, heuristics: &Heuristics) -> Result<Vec<Finding>, QueryError> {
        let mut findings = Vec::new();

        for node in page.query("[onclick], [data-click]")? {
            let tag = node.tag();
            if NATIVE_CLICKABLE.contains(&tag.as_str()) {
                continue;
            }

            let context = format!("text: {}", node.text());

            // Exact value match; role="link" or a bare role does not count
            if node.attr("role").as_deref() != Some("button") {
                findings.push(
                    Finding::issue("Clickable element missing role=\"button\"")
                        .with_element(&tag)
                        .with_context(context.clone())
                        .with_suggestion("Add role=\"button\" to clickable non-button elements"),
                );
            }

            // Presence check only; the value is not validated
            if node.attr("tabindex").is_none() {
                findings.push(
                    Finding::issue("Clickable element not keyboard accessible")
                        .with_element(&tag)
                        .with_context(context.clone())
                        .with_suggestion("Add tabindex=\"0\" to make element keyboard accessible"),
                );
            }

            if !heuristics::has_keyboard_handler(node.as_ref(), heuristics) {
                findings.push(
                    Finding::warning("Clickable element may not respond to keyboard")
                        .with_element(&tag)
                        .with_context(context.clone())
                        .with_suggestion("Add keyboard event handlers (Enter/Space keys)"),
                );
            }
        }

        Ok(findings)
    }
}
