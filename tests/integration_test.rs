// SPDX-License-Identifier: PMPL-1.0-or-later
//! End-to-end audits over HTML fixtures.

use a11y_audit::{check_page_accessibility, render_report, OutputFormat, Severity};

fn fixture(name: &str) -> String {
    let path = format!("tests/fixtures/{name}");
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {path}: {e}"))
}

#[test]
fn test_accessible_fixture_is_clean() {
    let report = check_page_accessibility(&fixture("accessible.html")).expect("audit succeeds");
    assert!(
        report.is_clean(),
        "accessible fixture should produce no findings, got: {:#?}",
        report
    );
}

#[test]
fn test_inaccessible_fixture_counts() {
    let report = check_page_accessibility(&fixture("inaccessible.html")).expect("audit succeeds");

    // missing alt, unnamed button, fake-button role + tabindex
    assert_eq!(report.summary.issues, 4, "issues: {:#?}", report.issues);
    // empty alt, generic alt, generic button text, disabled-but-focusable,
    // fake-button keyboard, two icons, contrast, suppressed focus outline
    assert_eq!(report.summary.warnings, 9, "warnings: {:#?}", report.warnings);
    // skip navigation link
    assert_eq!(report.summary.suggestions, 1);
}

#[test]
fn test_inaccessible_fixture_finding_details() {
    let report = check_page_accessibility(&fixture("inaccessible.html")).expect("audit succeeds");

    assert_eq!(report.issues[0].message, "Image missing alt attribute");
    assert_eq!(report.issues[0].context.as_deref(), Some("src: hero.png"));
    assert_eq!(report.issues[1].message, "Button has no accessible name");
    assert!(report
        .warnings
        .iter()
        .any(|f| f.message == "Potential color contrast issue"));
    assert!(report
        .suggestions
        .iter()
        .all(|f| f.element.is_none()), "page-level suggestions carry no element tag");
}

#[test]
fn test_mixed_page_scenario() {
    // One alt-less image, one short-labelled button, one bare clickable div,
    // and no in-page anchor links.
    let html = r#"
        <html><body>
            <img src="logo.png">
            <button>OK</button>
            <div onclick="doThing()">Do the thing</div>
        </body></html>
    "#;
    let report = check_page_accessibility(html).expect("audit succeeds");

    assert_eq!(report.summary.issues, 3);
    assert_eq!(report.summary.warnings, 2);
    assert_eq!(report.summary.suggestions, 1);

    let fake_button_findings: Vec<_> = report
        .all_findings()
        .filter(|f| f.element.as_deref() == Some("div"))
        .collect();
    assert_eq!(fake_button_findings.len(), 3);
    assert_eq!(
        fake_button_findings
            .iter()
            .filter(|f| f.severity == Severity::Issue)
            .count(),
        2
    );
}

#[test]
fn test_repeated_runs_render_identically() {
    let html = fixture("inaccessible.html");
    let first = check_page_accessibility(&html).expect("audit succeeds");
    let second = check_page_accessibility(&html).expect("audit succeeds");

    assert_eq!(first, second);
    assert_eq!(
        render_report(&first, OutputFormat::Json),
        render_report(&second, OutputFormat::Json),
        "no hidden run-order state may leak between invocations"
    );
}

#[test]
fn test_json_report_shape() {
    let report = check_page_accessibility(&fixture("inaccessible.html")).expect("audit succeeds");
    let json = render_report(&report, OutputFormat::Json);
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

    assert_eq!(parsed["summary"]["issues"], 4);
    assert!(parsed["issues"].is_array());
    assert!(parsed["warnings"].is_array());
    assert!(parsed["suggestions"].is_array());
}

#[test]
fn test_text_report_renders_every_finding() {
    let report = check_page_accessibility(&fixture("inaccessible.html")).expect("audit succeeds");
    let text = render_report(&report, OutputFormat::Text);

    for finding in report.all_findings() {
        assert!(
            text.contains(&finding.message),
            "text report missing finding: {}",
            finding.message
        );
    }
}
