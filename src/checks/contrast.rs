// SPDX-License-Identifier: PMPL-1.0-or-later
//! Coarse color contrast inspection.
//!
//! This is a lexical heuristic, not colorimetry: a color is "light" only
//! when its string denotes pure white, "dark" when it is any other
//! recognized color form. Light-on-light and dark-on-dark (over a
//! non-transparent background) both flag. Unrecognized color strings never
//! flag, erring toward under-reporting.

use crate::checks::Check;
use crate::finding::Finding;
use crate::heuristics::{classify_color, ColorClass, Heuristics};
use crate::page::{Page, QueryError};

/// Text-bearing node types inspected for contrast
const TEXT_SELECTOR: &str = "p, h1, h2, h3, h4, h5, h6, span, div, button, a";

pub struct ContrastCheck;

impl Check for ContrastCheck {
    fn name(&self) -> &str {
        "contrast"
    }

    fn description(&self) -> &str {
        "Flags light-on-light and dark-on-dark foreground/background pairs"
    }

    fn run(&self, page: &dyn Page, heuristics: &Heuristics) -> Result<Vec<Finding>, QueryError> {
        let mut findings = Vec::new();

        for node in page.query(TEXT_SELECTOR)? {
            let Some(color) = node.style("color") else {
                continue;
            };
            let Some(background) = node.style("background-color") else {
                continue;
            };

            let pair = (
                classify_color(&color, heuristics),
                classify_color(&background, heuristics),
            );
            let flagged = matches!(
                pair,
                (ColorClass::Light, ColorClass::Light) | (ColorClass::Dark, ColorClass::Dark)
            );

            if flagged {
                findings.push(
                    Finding::warning("Potential color contrast issue")
                        .with_element(node.tag())
                        .with_context(format!("color: {color}, background: {background}"))
                        .with_suggestion(
                            "Verify color contrast meets WCAG guidelines (4.5:1 for normal text)",
                        ),
                );
            }
        }

        Ok(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::HtmlPage;

    fn run(html: &str) -> Vec<Finding> {
        ContrastCheck
            .run(&HtmlPage::parse(html), &Heuristics::default())
            .expect("check runs")
    }

    #[test]
    fn test_white_on_white_flags() {
        let findings = run(r#"<p style="color: #fff; background-color: white">ghost</p>"#);
        assert_eq!(findings.len(), 1);
        assert_eq!(
            findings[0].context.as_deref(),
            Some("color: #fff, background: white")
        );
    }

    #[test]
    fn test_dark_on_dark_flags() {
        let findings = run(r#"<div style="color: #333; background-color: rgb(20, 20, 20)">dim</div>"#);
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_dark_on_transparent_does_not_flag() {
        let html = r#"<span style="color: #333; background-color: rgba(0, 0, 0, 0)">ok</span>"#;
        assert!(run(html).is_empty());
    }

    #[test]
    fn test_dark_on_light_does_not_flag() {
        assert!(run(r#"<p style="color: #000; background-color: #fff">ok</p>"#).is_empty());
    }

    #[test]
    fn test_unrecognized_color_does_not_flag_or_crash() {
        let html = r#"<p style="color: var(--ink); background-color: color-mix(in srgb, red, blue)">x</p>"#;
        assert!(run(html).is_empty());
    }

    #[test]
    fn test_nodes_without_both_styles_are_skipped() {
        assert!(run(r#"<p style="color: #333">no background</p>"#).is_empty());
        assert!(run("<p>no styles at all</p>").is_empty());
    }
}
