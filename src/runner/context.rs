use std::path::PathBuf;

use indexmap::IndexSet;

use crate::violation::{Severity, ViolationCollector};

/// What a rule can see and do while it runs.
pub struct RuleContext<'a> {
    collector: &'a mut ViolationCollector,
    failed: &'a IndexSet<String>,
    terminate: bool,
}

impl<'a> RuleContext<'a> {
    pub(crate) const fn new(
        collector: &'a mut ViolationCollector,
        failed: &'a IndexSet<String>,
    ) -> Self {
        Self {
            collector,
            failed,
            terminate: false,
        }
    }

    pub fn push(
        &mut self,
        severity: Severity,
        code: impl Into<String>,
        subject: Option<PathBuf>,
        args: Vec<String>,
    ) {
        self.collector.push(severity, code, subject, args);
    }

    pub const fn collector(&mut self) -> &mut ViolationCollector {
        self.collector
    }

    /// Stop the run after the current rule. Always returns `false` so a rule
    /// can end with `return ctx.terminate();`.
    pub const fn terminate(&mut self) -> bool {
        self.terminate = true;
        false
    }

    #[must_use]
    pub const fn termination_requested(&self) -> bool {
        self.terminate
    }

    /// Whether an earlier rule in this run failed.
    #[must_use]
    pub fn failed_test(&self, id: &str) -> bool {
        self.failed.contains(id)
    }
}
