use std::path::PathBuf;

use super::{Severity, Violation};

/// Append-only store of the violations produced during one run.
///
/// Entries are kept in insertion order and are never merged or removed.
/// Deduplication, where a rule needs it, is the rule's own business.
#[derive(Debug, Default)]
pub struct ViolationCollector {
    violations: Vec<Violation>,
}

impl ViolationCollector {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    pub fn push(
        &mut self,
        severity: Severity,
        code: impl Into<String>,
        subject: Option<PathBuf>,
        args: Vec<String>,
    ) {
        self.violations
            .push(Violation::new(severity, code, subject, args));
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(move |v| v.severity() == severity)
    }

    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.with_severity(severity).count()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity() == Severity::Fail)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.violations.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}
