// SPDX-License-Identifier: PMPL-1.0-or-later
//! Finding and report types produced by an audit run.
//!
//! A [`Finding`] is one reported accessibility observation; a [`Report`]
//! groups the findings of a full audit by severity, preserving the order
//! in which they were emitted.

use serde::{Deserialize, Serialize};

/// Severity tiers for findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Must fix - likely accessibility violation
    Issue,
    /// Should fix - probable but unconfirmed issue
    Warning,
    /// Consider - optional improvement, not tied to a specific node
    Suggestion,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Issue => write!(f, "issue"),
            Severity::Warning => write!(f, "warning"),
            Severity::Suggestion => write!(f, "suggestion"),
        }
    }
}

/// One reported accessibility observation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Severity tier
    pub severity: Severity,
    /// Tag name of the inspected node; absent for page-level suggestions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    /// Human-readable description of the defect
    pub message: String,
    /// Free-form string identifying the concrete node (source locator or
    /// text snippet), for disambiguation only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Remediation text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Finding {
    /// Create a new finding
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            element: None,
            message: message.into(),
            context: None,
            suggestion: None,
        }
    }

    /// Shorthand for an issue-severity finding
    pub fn issue(message: impl Into<String>) -> Self {
        Self::new(Severity::Issue, message)
    }

    /// Shorthand for a warning-severity finding
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Shorthand for a suggestion-severity finding
    pub fn suggestion(message: impl Into<String>) -> Self {
        Self::new(Severity::Suggestion, message)
    }

    /// Set the element tag name
    pub fn with_element(mut self, tag: impl Into<String>) -> Self {
        self.element = Some(tag.into());
        self
    }

    /// Set the disambiguating context string
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Set the remediation text
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Finding counts per severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub issues: usize,
    pub warnings: usize,
    pub suggestions: usize,
}

impl Summary {
    /// Total findings across all severities
    pub fn total(&self) -> usize {
        self.issues + self.warnings + self.suggestions
    }
}

/// The output of a full audit run: findings grouped by severity with counts.
///
/// Built fresh per invocation; findings carry no identity beyond the run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub summary: Summary,
    pub issues: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub suggestions: Vec<Finding>,
}

impl Report {
    /// Fold a sequence of findings into a report.
    ///
    /// Pure and order-preserving: within each severity bucket, findings keep
    /// the order they were emitted in. No deduplication - the same node may
    /// legitimately appear multiple times across and within passes.
    pub fn from_findings(findings: impl IntoIterator<Item = Finding>) -> Self {
        let mut report = Report::default();
        for finding in findings {
            match finding.severity {
                Severity::Issue => report.issues.push(finding),
                Severity::Warning => report.warnings.push(finding),
                Severity::Suggestion => report.suggestions.push(finding),
            }
        }
        report.summary = Summary {
            issues: report.issues.len(),
            warnings: report.warnings.len(),
            suggestions: report.suggestions.len(),
        };
        report
    }

    /// Whether any issue-severity findings were reported
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Whether the audit found nothing at all
    pub fn is_clean(&self) -> bool {
        self.summary.total() == 0
    }

    /// Iterate all findings in severity order (issues, warnings, suggestions)
    pub fn all_findings(&self) -> impl Iterator<Item = &Finding> {
        self.issues
            .iter()
            .chain(self.warnings.iter())
            .chain(self.suggestions.iter())
    }
}
