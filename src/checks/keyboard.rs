// SPDX-License-Identifier: PMPL-1.0-or-later
//! Keyboard navigation inspection.
//!
//! Two independent checks: a page-level scan for in-page anchor links
//! (their absence earns a single skip-navigation suggestion), and a
//! per-node scan of focusable elements whose focus state suppresses the
//! outline without providing any replacement indicator.

use crate::checks::Check;
use crate::finding::Finding;
use crate::heuristics::{text_snippet, Heuristics};
use crate::page::{Page, PageNode, QueryError};

/// Elements reachable by keyboard
const FOCUSABLE_SELECTOR: &str =
    r#"a, button, input, textarea, select, [tabindex]:not([tabindex="-1"])"#;

pub struct KeyboardCheck;

impl Check for KeyboardCheck {
    fn name(&self) -> &str {
        "keyboard"
    }

    fn description(&self) -> &str {
        "Checks for skip links and visible focus indicators"
    }

    fn run(&self, page: &dyn Page, heuristics: &Heuristics) -> Result<Vec<Finding>, QueryError> {
        let mut findings = Vec::new();

        // At most one skip-link suggestion per run, with no element tag:
        // this is a page-level observation.
        if page.query(r##"a[href^="#"]"##)?.is_empty() {
            findings.push(
                Finding::suggestion("Consider adding skip navigation links")
                    .with_suggestion("Add \"Skip to main content\" link for keyboard users"),
            );
        }

        for node in page.query(FOCUSABLE_SELECTOR)? {
            if focus_indicator_missing(node.as_ref()) {
                findings.push(
                    Finding::warning("Element may lack visible focus indicator")
                        .with_element(node.tag())
                        .with_context(format!("text: {}", text_snippet(&node.text(), heuristics)))
                        .with_suggestion(
                            "Ensure focus indicators are visible for keyboard navigation",
                        ),
                );
            }
        }

        Ok(findings)
    }
}

/// Outline suppressed in the focus state with no box-shadow or border to
/// stand in for it
fn focus_indicator_missing(node: &dyn PageNode) -> bool {
    let outline_suppressed = node
        .focus_style("outline")
        .map(|v| {
            let v = v.trim();
            v.eq_ignore_ascii_case("none") || v == "0"
        })
        .unwrap_or(false);

    outline_suppressed
        && !focus_property_present(node, "box-shadow")
        && !focus_property_present(node, "border")
}

fn focus_property_present(node: &dyn PageNode, property: &str) -> bool {
    node.focus_style(property)
        .map(|v| {
            let v = v.trim();
            !v.is_empty() && !v.eq_ignore_ascii_case("none") && v != "0"
        })
        .unwrap_or(false)
}
