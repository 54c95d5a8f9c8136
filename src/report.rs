// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report rendering.
//!
//! Turns a [`Report`] into a presentation: a sectioned text report for
//! consoles, JSON for programmatic consumption, or an HTML fragment for
//! hosts that mount the report into a page. All formats show the three
//! severity counts and group findings in the fixed order
//! issue, warning, suggestion.

use crate::finding::{Finding, Report, Severity};
use std::path::Path;
use tracing::error;

/// Output format for rendered reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// HTML fragment for mounting into a page
    Html,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "html" => Ok(OutputFormat::Html),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Render a report in the requested format
pub fn render_report(report: &Report, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => render_json(report),
        OutputFormat::Html => render_html(report),
    }
}

/// The severity sections in presentation order
fn sections(report: &Report) -> [(Severity, &str, &[Finding]); 3] {
    [
        (Severity::Issue, "Issues (Must Fix)", report.issues.as_slice()),
        (Severity::Warning, "Warnings (Should Fix)", report.warnings.as_slice()),
        (Severity::Suggestion, "Suggestions (Consider)", report.suggestions.as_slice()),
    ]
}

fn render_text(report: &Report) -> String {
    let mut output = String::new();

    output.push_str("=== Accessibility Report ===\n\n");
    output.push_str(&format!(
        "{} issue(s), {} warning(s), {} suggestion(s)\n\n",
        report.summary.issues, report.summary.warnings, report.summary.suggestions
    ));

    if report.is_clean() {
        output.push_str("No accessibility findings. All checks passed.\n");
        return output;
    }

    for (severity, title, findings) in sections(report) {
        if findings.is_empty() {
            continue;
        }

        output.push_str(&format!("--- {} ({}) ---\n", title, findings.len()));
        for finding in findings {
            output.push_str(&format!("[{}] {}\n", severity, finding.message));
            match (&finding.element, &finding.context) {
                (Some(element), Some(context)) => {
                    output.push_str(&format!("  Element: {} - {}\n", element, context));
                }
                (Some(element), None) => {
                    output.push_str(&format!("  Element: {}\n", element));
                }
                (None, Some(context)) => {
                    output.push_str(&format!("  Context: {}\n", context));
                }
                (None, None) => {}
            }
            if let Some(suggestion) = &finding.suggestion {
                output.push_str(&format!("  Fix: {}\n", suggestion));
            }
            output.push('\n');
        }
    }

    output
}

fn render_json(report: &Report) -> String {
    serde_json::to_string_pretty(report)
        .unwrap_or_else(|e| format!("{{\"error\": \"Failed to serialize report: {}\"}}", e))
}

fn render_html(report: &Report) -> String {
    let mut html = String::new();

    html.push_str("<div class=\"a11y-report\">\n");
    html.push_str("  <h2>Accessibility Report</h2>\n");
    html.push_str(&format!(
        "  <div class=\"summary\">\n    <span class=\"issues\">{} Issues</span>\n    <span class=\"warnings\">{} Warnings</span>\n    <span class=\"suggestions\">{} Suggestions</span>\n  </div>\n",
        report.summary.issues, report.summary.warnings, report.summary.suggestions
    ));

    for (_, title, findings) in sections(report) {
        if findings.is_empty() {
            continue;
        }

        html.push_str(&format!("  <h3>{}</h3>\n  <ul>\n", escape(title)));
        for finding in findings {
            html.push_str("    <li><strong>");
            html.push_str(&escape(&finding.message));
            html.push_str("</strong>");
            if let Some(element) = &finding.element {
                html.push_str("<br>Element: ");
                html.push_str(&escape(element));
                if let Some(context) = &finding.context {
                    html.push_str(" - ");
                    html.push_str(&escape(context));
                }
            }
            if let Some(suggestion) = &finding.suggestion {
                html.push_str("<br><em>Suggestion: ");
                html.push_str(&escape(suggestion));
                html.push_str("</em>");
            }
            html.push_str("</li>\n");
        }
        html.push_str("  </ul>\n");
    }

    html.push_str("</div>\n");
    html
}

/// Minimal HTML escaping; finding text can quote markup from the page
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Write a rendered report to a file, or to stdout when no target is given.
///
/// A file target whose parent directory does not exist is treated as a
/// missing mount point: the condition is logged and reported as a
/// recoverable error, since the audit itself already succeeded.
pub fn write_report(content: &str, target: Option<&Path>) -> std::io::Result<()> {
    match target {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    error!("report target directory {} not found", parent.display());
                    return Err(std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        format!("report target directory {} not found", parent.display()),
                    ));
                }
            }
            std::fs::write(path, content)?;
            eprintln!("Report written to {}", path.display());
            Ok(())
        }
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> Report {
        Report::from_findings(vec![
            Finding::issue("Image missing alt attribute")
                .with_element("img")
                .with_context("src: hero.png")
                .with_suggestion("Add descriptive alt text or alt=\"\" for decorative images"),
            Finding::warning("Potential color contrast issue")
                .with_element("p")
                .with_context("color: #fff, background: white"),
            Finding::suggestion("Consider adding skip navigation links")
                .with_suggestion("Add \"Skip to main content\" link for keyboard users"),
        ])
    }

    #[test]
    fn test_text_report_groups_in_severity_order() {
        let text = render_report(&sample_report(), OutputFormat::Text);
        let issues_at = text.find("Issues (Must Fix)").expect("issues section");
        let warnings_at = text.find("Warnings (Should Fix)").expect("warnings section");
        let suggestions_at = text.find("Suggestions (Consider)").expect("suggestions section");
        assert!(issues_at < warnings_at && warnings_at < suggestions_at);
        assert!(text.contains("1 issue(s), 1 warning(s), 1 suggestion(s)"));
    }

    #[test]
    fn test_text_report_clean() {
        let text = render_report(&Report::default(), OutputFormat::Text);
        assert!(text.contains("All checks passed"));
    }

    #[test]
    fn test_json_report_is_valid() {
        let json = render_report(&sample_report(), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        assert_eq!(parsed["summary"]["issues"], 1);
        assert!(parsed["issues"].is_array());
    }

    #[test]
    fn test_html_report_shows_counts_and_escapes() {
        let html = render_report(&sample_report(), OutputFormat::Html);
        assert!(html.contains("1 Issues"));
        assert!(html.contains("1 Warnings"));
        assert!(html.contains("1 Suggestions"));
        // alt="" in a suggestion must not leak raw quotes into attributes
        assert!(html.contains("alt=&quot;&quot;"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("html".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert!("sarif".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_write_report_missing_target_directory() {
        let err = write_report("x", Some(Path::new("/nonexistent-a11y/report.txt"))).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
