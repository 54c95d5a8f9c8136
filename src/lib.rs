// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11y-audit - heuristic accessibility auditor for rendered HTML snapshots.
//!
//! Scans a document snapshot and reports likely accessibility defects
//! (missing alt text, inaccessible interactive controls, weak color
//! contrast, missing focus indicators) as findings grouped by severity.
//!
//! ## Checks
//!
//! - **images**: missing, empty, or generic alt text
//! - **buttons**: accessible names, generic labels, disabled-but-focusable
//! - **fake-buttons**: clickable non-buttons lacking role/tabindex/keyboard
//! - **icons**: icon elements without accessibility attributes
//! - **contrast**: coarse light-on-light / dark-on-dark detection
//! - **keyboard**: skip links and visible focus indicators
//!
//! Checks are heuristic by design: they trade WCAG-grade precision for a
//! fast synchronous pass over the tree, erring toward under-reporting when
//! input is ambiguous.
//!
//! ## Usage
//!
//! ```
//! use a11y_audit::check_page_accessibility;
//!
//! let report = check_page_accessibility(r#"<img src="hero.png">"#)?;
//! assert_eq!(report.summary.issues, 1);
//! # Ok::<(), a11y_audit::AuditError>(())
//! ```
//!
//! Hosts with a richer tree than static HTML (a headless browser, an
//! embedded webview) implement [`page::Page`] themselves and call
//! [`audit::Auditor`] directly.

pub mod audit;
pub mod checks;
pub mod finding;
pub mod heuristics;
pub mod page;
pub mod report;

pub use audit::{AuditError, Auditor};
pub use finding::{Finding, Report, Severity, Summary};
pub use heuristics::Heuristics;
pub use page::{HtmlPage, Page, PageNode, QueryError};
pub use report::{render_report, write_report, OutputFormat};

use std::path::Path;
use tracing::error;

/// Audit a static HTML snapshot with the built-in checks and baseline
/// heuristics.
pub fn check_page_accessibility(html: &str) -> Result<Report, AuditError> {
    let page = HtmlPage::parse(html);
    Auditor::new().audit(&page)
}

/// Audit a snapshot and immediately render the report to a mount target
/// (a file path, or stdout when `None`).
///
/// A missing mount target is recoverable: the condition is logged and the
/// report - which was already produced successfully - is still returned.
pub fn audit_and_render(
    html: &str,
    format: OutputFormat,
    target: Option<&Path>,
) -> Result<Report, AuditError> {
    let report = check_page_accessibility(html)?;
    let rendered = render_report(&report, format);
    if let Err(io_error) = write_report(&rendered, target) {
        error!(%io_error, "could not render report to target");
    }
    Ok(report)
}
