// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image inspection: alt attribute presence and quality.
//!
//! - Missing `alt` entirely (absent, not merely empty) is an issue.
//! - Empty `alt` on an image the decorative heuristic does not recognize
//!   is a warning: the image may be informative.
//! - Generic alt text ("photo", "logo", ... under 20 characters) is a
//!   warning quoting the actual text.

use crate::checks::Check;
use crate::finding::Finding;
use crate::heuristics::{self, Heuristics};
use crate::page::{Page, QueryError};

pub struct ImageCheck;

impl Check for ImageCheck {
    fn name(&self) -> &str {
        "images"
    }

    fn description(&self) -> &str {
        "Checks <img> elements for missing, empty, or generic alt text"
    }

    fn run(&self, page: &dyn Page, heuristics: &Heuristics) -> Result<Vec<Finding>, QueryError> {
        let mut findings = Vec::new();

        for image in page.query("img")? {
            let context = format!("src: {}", image.attr("src").unwrap_or_default());

            match image.attr("alt") {
                None => {
                    findings.push(
                        Finding::issue("Image missing alt attribute")
                            .with_element("img")
                            .with_context(context.clone())
                            .with_suggestion(
                                "Add descriptive alt text or alt=\"\" for decorative images",
                            ),
                    );
                }
                Some(alt) if alt.is_empty() => {
                    if !heuristics::is_decorative_image(image.as_ref(), heuristics) {
                        findings.push(
                            Finding::warning("Image has empty alt text but may not be decorative")
                                .with_element("img")
                                .with_context(context.clone())
                                .with_suggestion(
                                    "Consider adding descriptive alt text if image conveys information",
                                ),
                        );
                    }
                }
                Some(alt) => {
                    if heuristics::is_generic_alt_text(&alt, heuristics) {
                        findings.push(
                            Finding::warning(format!("Image has generic alt text: \"{alt}\""))
                                .with_element("img")
                                .with_context(context.clone())
                                .with_suggestion(
                                    "Use more descriptive alt text that explains the image content",
                                ),
                        );
                    }
                }
            }
        }

        Ok(findings)
    }
}
