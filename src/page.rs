// SPDX-License-Identifier: PMPL-1.0-or-later
//! Node query adapter over the host document tree.
//!
//! The audit engine never touches a concrete DOM; it consumes the [`Page`]
//! and [`PageNode`] traits, which expose exactly the capabilities the checks
//! need: selector queries, attribute reads (distinguishing an attribute that
//! is present-but-empty from one that is absent), trimmed visible text,
//! class membership, and computed style properties in the default and focus
//! states.
//!
//! [`HtmlPage`] is the reference adapter for static HTML snapshots, backed
//! by [`scraper`]. A static snapshot has no style engine, so both style
//! states are read from the inline `style` attribute; hosts with a real
//! renderer (headless browsers, embedded webviews) supply their own `Page`
//! implementation with true computed styles.

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

/// Errors raised by the node query capability
#[derive(Debug, Error)]
pub enum QueryError {
    /// The selector string could not be parsed
    #[error("invalid selector \"{selector}\": {reason}")]
    InvalidSelector { selector: String, reason: String },
}

/// A queryable document snapshot
pub trait Page {
    /// Select all nodes matching a CSS selector, scoped to the whole document
    fn query<'a>(&'a self, selector: &str) -> Result<Vec<Box<dyn PageNode + 'a>>, QueryError>;
}

/// One node of the document tree, as seen by the checks
pub trait PageNode {
    /// Lowercase tag name
    fn tag(&self) -> String;

    /// Read a named attribute. `Some("")` (present but empty) and `None`
    /// (absent) are distinct, and that distinction is load-bearing for the
    /// alt-text and accessible-name checks.
    fn attr(&self, name: &str) -> Option<String>;

    /// Trimmed visible text content, including descendants
    fn text(&self) -> String;

    /// Class list of this node
    fn classes(&self) -> Vec<String>;

    /// Class list of the immediate parent element, if any
    fn parent_classes(&self) -> Vec<String>;

    /// Whether a descendant element with the given tag exists
    fn has_descendant(&self, tag: &str) -> bool;

    /// Computed style property in the default state
    fn style(&self, property: &str) -> Option<String>;

    /// Computed style property in the focus pseudo-state
    fn focus_style(&self, property: &str) -> Option<String>;

    /// Effective tab order index: the explicit `tabindex` attribute when
    /// present and parseable, otherwise 0 for natively focusable tags and
    /// -1 for everything else
    fn tab_index(&self) -> i32;
}

/// Reference [`Page`] adapter over a parsed static HTML document
pub struct HtmlPage {
    document: Html,
}

impl HtmlPage {
    /// Parse an HTML snapshot
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }
}

impl Page for HtmlPage {
    fn query<'a>(&'a self, selector: &str) -> Result<Vec<Box<dyn PageNode + 'a>>, QueryError> {
        let parsed = Selector::parse(selector).map_err(|e| QueryError::InvalidSelector {
            selector: selector.to_string(),
            reason: e.to_string(),
        })?;

        Ok(self
            .document
            .select(&parsed)
            .map(|el| Box::new(HtmlNode { el }) as Box<dyn PageNode + 'a>)
            .collect())
    }
}

/// A node handle borrowed from an [`HtmlPage`]
struct HtmlNode<'a> {
    el: ElementRef<'a>,
}

impl HtmlNode<'_> {
    fn inline_style(&self) -> Option<String> {
        self.el.value().attr("style").map(|s| s.to_string())
    }
}

impl PageNode for HtmlNode<'_> {
    fn tag(&self) -> String {
        self.el.value().name().to_ascii_lowercase()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.el.value().attr(name).map(|v| v.to_string())
    }

    fn text(&self) -> String {
        self.el.text().collect::<String>().trim().to_string()
    }

    fn classes(&self) -> Vec<String> {
        self.el.value().classes().map(|c| c.to_string()).collect()
    }

    fn parent_classes(&self) -> Vec<String> {
        self.el
            .parent()
            .and_then(ElementRef::wrap)
            .map(|parent| parent.value().classes().map(|c| c.to_string()).collect())
            .unwrap_or_default()
    }

    fn has_descendant(&self, tag: &str) -> bool {
        match Selector::parse(tag) {
            Ok(selector) => self.el.select(&selector).next().is_some(),
            Err(_) => false,
        }
    }

    fn style(&self, property: &str) -> Option<String> {
        self.inline_style()
            .and_then(|style| style_property(&style, property))
    }

    fn focus_style(&self, property: &str) -> Option<String> {
        // No style engine for a static snapshot; the inline style applies in
        // every state, including :focus.
        self.style(property)
    }

    fn tab_index(&self) -> i32 {
        if let Some(value) = self.attr("tabindex") {
            if let Ok(index) = value.trim().parse::<i32>() {
                return index;
            }
        }
        match self.tag().as_str() {
            "button" | "input" | "select" | "textarea" => 0,
            "a" if self.attr("href").is_some() => 0,
            _ => -1,
        }
    }
}

/// Extract one property value from an inline style declaration list
fn style_property(style: &str, property: &str) -> Option<String> {
    for declaration in style.split(';') {
        if let Some((name, value)) = declaration.split_once(':') {
            if name.trim().eq_ignore_ascii_case(property) {
                return Some(value.trim().to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first<'a>(page: &'a HtmlPage, selector: &str) -> Box<dyn PageNode + 'a> {
        page.query(selector)
            .expect("valid selector")
            .into_iter()
            .next()
            .expect("node present")
    }

    #[test]
    fn test_attr_empty_vs_absent() {
        let page = HtmlPage::parse(r#"<img src="a.png" alt=""><img src="b.png">"#);
        let images = page.query("img").expect("valid selector");
        assert_eq!(images[0].attr("alt").as_deref(), Some(""));
        assert_eq!(images[1].attr("alt"), None);
    }

    #[test]
    fn test_text_is_trimmed() {
        let page = HtmlPage::parse("<button>  Save draft \n</button>");
        assert_eq!(first(&page, "button").text(), "Save draft");
    }

    #[test]
    fn test_classes_and_parent_classes() {
        let page = HtmlPage::parse(r#"<div class="decoration"><img class="hero wide" src="x"></div>"#);
        let img = first(&page, "img");
        assert_eq!(img.classes(), vec!["hero", "wide"]);
        assert_eq!(img.parent_classes(), vec!["decoration"]);
    }

    #[test]
    fn test_has_descendant() {
        let page = HtmlPage::parse("<svg><title>Close</title></svg><svg></svg>");
        let svgs = page.query("svg").expect("valid selector");
        assert!(svgs[0].has_descendant("title"));
        assert!(!svgs[1].has_descendant("title"));
    }

    #[test]
    fn test_inline_style_reads() {
        let page = HtmlPage::parse(r#"<p style="color: #fff; background-color: white">hi</p>"#);
        let p = first(&page, "p");
        assert_eq!(p.style("color").as_deref(), Some("#fff"));
        assert_eq!(p.style("background-color").as_deref(), Some("white"));
        assert_eq!(p.style("outline"), None);
    }

    #[test]
    fn test_tab_index_defaults() {
        let page = HtmlPage::parse(
            r#"<button>b</button><a href="/x">l</a><a>anchorless</a><div>d</div><div tabindex="2">t</div>"#,
        );
        assert_eq!(first(&page, "button").tab_index(), 0);
        assert_eq!(first(&page, "a[href]").tab_index(), 0);
        assert_eq!(first(&page, "a:not([href])").tab_index(), -1);
        assert_eq!(first(&page, "div:not([tabindex])").tab_index(), -1);
        assert_eq!(first(&page, "div[tabindex]").tab_index(), 2);
    }

    #[test]
    fn test_invalid_selector_is_reported() {
        let page = HtmlPage::parse("<p>x</p>");
        let Err(err) = page.query("p[[") else {
            panic!("malformed selector should not produce nodes");
        };
        assert!(matches!(err, QueryError::InvalidSelector { .. }));
        assert!(err.to_string().contains("p[["));
    }
}
