// SPDX-License-Identifier: PMPL-1.0-or-later
//! The inspection passes making up the rule engine.
//!
//! Each check encodes one heuristic accessibility rule. Checks are
//! independent: none reads another's findings, and each returns its own
//! `Vec<Finding>` for the orchestrator to fold into the report. Run order
//! only affects finding order, never content.

pub mod buttons;
pub mod contrast;
pub mod fake_buttons;
pub mod icons;
pub mod images;
pub mod keyboard;

use crate::finding::Finding;
use crate::heuristics::Heuristics;
use crate::page::{Page, QueryError};

/// One heuristic accessibility rule
pub trait Check: Send + Sync {
    /// Short identifier used in logs and diagnostic findings
    fn name(&self) -> &str;

    /// One-line description of what the check looks for
    fn description(&self) -> &str;

    /// Inspect the page and return zero or more findings
    fn run(&self, page: &dyn Page, heuristics: &Heuristics) -> Result<Vec<Finding>, QueryError>;
}

/// The built-in checks, in their fixed run order
pub fn default_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(images::ImageCheck),
        Box::new(buttons::ButtonCheck),
        Box::new(fake_buttons::FakeButtonCheck),
        Box::new(icons::IconCheck),
        Box::new(contrast::ContrastCheck),
        Box::new(keyboard::KeyboardCheck),
    ]
}
