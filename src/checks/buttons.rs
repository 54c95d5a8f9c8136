// SPDX-License-Identifier: PMPL-1.0-or-later
//! Native button inspection: accessible names, label quality, and
//! disabled-but-focusable state.
//!
//! The three checks are independent per node; one button can produce
//! multiple findings.

use crate::checks::Check;
use crate::finding::Finding;
use crate::heuristics::{self, Heuristics};
use crate::page::{Page, QueryError};

pub struct ButtonCheck;

impl Check for ButtonCheck {
    fn name(&self) -> &str {
        "buttons"
    }

    fn description(&self) -> &str {
        "Checks <button> elements for accessible names and keyboard sanity"
    }

    fn run(&self, page: &dyn Page, heuristics: &Heuristics) -> Result<Vec<Finding>, QueryError> {
        let mut findings = Vec::new();

        for button in page.query("button")? {
            let text = button.text();
            let class_context = format!("class: {}", button.attr("class").unwrap_or_default());

            if text.is_empty()
                && button.attr("aria-label").is_none()
                && button.attr("aria-labelledby").is_none()
            {
                findings.push(
                    Finding::issue("Button has no accessible name")
                        .with_element("button")
                        .with_context(class_context.clone())
                        .with_suggestion(
                            "Add text content, aria-label, or aria-labelledby attribute",
                        ),
                );
            }

            if !text.is_empty() && heuristics::is_generic_button_text(&text, heuristics) {
                findings.push(
                    Finding::warning(format!("Button has generic text: \"{text}\""))
                        .with_element("button")
                        .with_context(class_context.clone())
                        .with_suggestion(
                            "Use more descriptive button text that explains the action",
                        ),
                );
            }

            if button.attr("disabled").is_some() && button.tab_index() >= 0 {
                findings.push(
                    Finding::warning("Disabled button is still focusable")
                        .with_element("button")
                        .with_context(format!("text: {text}"))
                        .with_suggestion("Remove tabindex or set to -1 for disabled buttons"),
                );
            }
        }

        Ok(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::Severity;
    use crate::page::HtmlPage;

    fn run(html: &str) -> Vec<Finding> {
        ButtonCheck
            .run(&HtmlPage::parse(html), &Heuristics::default())
            .expect("check runs")
    }

    #[test]
    fn test_no_accessible_name_is_issue() {
        let findings = run(r#"<button class="icon-btn"></button>"#);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Issue);
        assert_eq!(findings[0].context.as_deref(), Some("class: icon-btn"));
    }

    #[test]
    fn test_any_naming_mechanism_suppresses_issue() {
        assert!(run("<button>Save</button>").is_empty());
        assert!(run(r#"<button aria-label="Close dialog"></button>"#).is_empty());
        assert!(run(r#"<button aria-labelledby="close-label"></button>"#).is_empty());
    }

    #[test]
    fn test_generic_text_is_warning() {
        let findings = run("<button>Click</button>");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert!(findings[0].message.contains("\"Click\""));
    }

    #[test]
    fn test_short_text_is_generic() {
        let findings = run("<button>OK</button>");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
    }

    #[test]
    fn test_descriptive_text_is_clean() {
        assert!(run("<button>Download annual report</button>").is_empty());
    }

    #[test]
    fn test_disabled_button_default_tab_order_is_warning() {
        // No explicit tabindex; buttons default into the tab order
        let findings = run("<button disabled>Submit order</button>");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "Disabled button is still focusable");
    }

    #[test]
    fn test_disabled_button_removed_from_tab_order_is_clean() {
        assert!(run(r#"<button disabled tabindex="-1">Submit order</button>"#).is_empty());
    }

    #[test]
    fn test_checks_are_independent_per_node() {
        // Disabled, focusable, and generic: two findings from one button
        let findings = run("<button disabled>More</button>");
        assert_eq!(findings.len(), 2);
    }
}
