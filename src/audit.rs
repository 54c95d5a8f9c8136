// SPDX-License-Identifier: PMPL-1.0-or-later
//! Audit orchestration.
//!
//! The [`Auditor`] runs every registered check against one page snapshot in
//! a fixed order and folds their findings into a [`Report`]. Checks return
//! values rather than mutating shared buffers, so every invocation builds
//! its report from scratch and repeated runs over the same snapshot are
//! identical.

use crate::checks::{default_checks, Check};
use crate::finding::{Finding, Report};
use crate::heuristics::Heuristics;
use crate::page::{Page, QueryError};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from a baseline (non-resilient) audit
#[derive(Debug, Error)]
pub enum AuditError {
    /// A check could not complete because a page query failed
    #[error("check \"{check}\" failed: {source}")]
    CheckFailed {
        check: String,
        #[source]
        source: QueryError,
    },
}

/// Runs the check registry against page snapshots
pub struct Auditor {
    checks: Vec<Box<dyn Check>>,
    heuristics: Heuristics,
}

impl Default for Auditor {
    fn default() -> Self {
        Self::new()
    }
}

impl Auditor {
    /// An auditor with the built-in checks and baseline heuristics
    pub fn new() -> Self {
        Self {
            checks: default_checks(),
            heuristics: Heuristics::default(),
        }
    }

    /// Replace the heuristic tables
    pub fn with_heuristics(mut self, heuristics: Heuristics) -> Self {
        self.heuristics = heuristics;
        self
    }

    /// Append a custom check; it runs after the built-in ones
    pub fn register(mut self, check: Box<dyn Check>) -> Self {
        self.checks.push(check);
        self
    }

    /// Run a full audit. The first failing check aborts the run; callers
    /// needing partial results use [`Auditor::audit_resilient`].
    pub fn audit(&self, page: &dyn Page) -> Result<Report, AuditError> {
        let mut findings = Vec::new();

        for check in &self.checks {
            let mut emitted =
                check
                    .run(page, &self.heuristics)
                    .map_err(|source| AuditError::CheckFailed {
                        check: check.name().to_string(),
                        source,
                    })?;
            debug!(check = check.name(), findings = emitted.len(), "check complete");
            findings.append(&mut emitted);
        }

        Ok(Report::from_findings(findings))
    }

    /// Run a full audit, downgrading a failed check to a diagnostic warning
    /// finding naming the check, so the remaining checks still contribute.
    pub fn audit_resilient(&self, page: &dyn Page) -> Report {
        let mut findings = Vec::new();

        for check in &self.checks {
            match check.run(page, &self.heuristics) {
                Ok(mut emitted) => {
                    debug!(check = check.name(), findings = emitted.len(), "check complete");
                    findings.append(&mut emitted);
                }
                Err(error) => {
                    warn!(check = check.name(), %error, "check could not complete");
                    findings.push(
                        Finding::warning(format!(
                            "Check \"{}\" could not complete: {error}",
                            check.name()
                        ))
                        .with_suggestion("Partial results; re-run after fixing the page snapshot"),
                    );
                }
            }
        }

        Report::from_findings(findings)
    }
}
