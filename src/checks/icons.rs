// SPDX-License-Identifier: PMPL-1.0-or-later
//! Icon inspection: icon-font spans and inline SVG.
//!
//! An icon is fine if it declares itself decorative (`aria-hidden`), names
//! itself (`aria-label` or a descendant `<title>`), or carries an explicit
//! `role`. The four signals form an OR-gated sufficiency set: any one of
//! them suppresses the warning.

use crate::checks::Check;
use crate::finding::Finding;
use crate::heuristics::Heuristics;
use crate::page::{Page, QueryError};

/// Class-name patterns and node types treated as icons
const ICON_SELECTOR: &str = r#"[class*="icon"], [class*="fa-"], svg"#;

pub struct IconCheck;

impl Check for IconCheck {
    fn name(&self) -> &str {
        "icons"
    }

    fn description(&self) -> &str {
        "Checks icon elements for accessibility attributes"
    }

    fn run(&self, page: &dyn Page, _heuristics: &Heuristics) -> Result<Vec<Finding>, QueryError> {
        let mut findings = Vec::new();

        for icon in page.query(ICON_SELECTOR)? {
            let accessible = icon.attr("aria-hidden").is_some()
                || icon.attr("aria-label").is_some()
                || icon.attr("role").is_some()
                || icon.has_descendant("title");

            if !accessible {
                findings.push(
                    Finding::warning("Icon may need accessibility attributes")
                        .with_element(icon.tag())
                        .with_context(format!("class: {}", icon.attr("class").unwrap_or_default()))
                        .with_suggestion(
                            "Add aria-hidden=\"true\" for decorative icons or aria-label for informative icons",
                        ),
                );
            }
        }

        Ok(findings)
    }
}
