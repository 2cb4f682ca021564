//! Ordered rule execution with early termination.

mod context;

pub use context::RuleContext;

use indexmap::IndexSet;
use serde::Serialize;

use crate::error::{PkgGuardError, Result};
use crate::violation::{Severity, Violation, ViolationCollector};

/// Code of the warning pushed when a rule stops the run.
pub const TESTING_TERMINATED: &str = "TESTING_TERMINATED";

/// A named, self-contained check.
pub trait Rule {
    fn id(&self) -> &str;

    /// Run the check. `true` means passed.
    fn check(&mut self, ctx: &mut RuleContext<'_>) -> bool;
}

/// Adapter turning a closure into a [`Rule`].
pub struct FnRule<F> {
    id: String,
    check: F,
}

impl<F> FnRule<F>
where
    F: FnMut(&mut RuleContext<'_>) -> bool,
{
    pub fn new(id: impl Into<String>, check: F) -> Self {
        Self {
            id: id.into(),
            check,
        }
    }
}

impl<F> Rule for FnRule<F>
where
    F: FnMut(&mut RuleContext<'_>) -> bool,
{
    fn id(&self) -> &str {
        &self.id
    }

    fn check(&mut self, ctx: &mut RuleContext<'_>) -> bool {
        (self.check)(ctx)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    pub id: String,
    pub passed: bool,
}

/// Everything a finished run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub failed_tests: Vec<String>,
    pub outcomes: Vec<RuleOutcome>,
    pub terminated: bool,
    pub violations: Vec<Violation>,
}

impl RunReport {
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity() == Severity::Fail)
    }
}

/// Executes registered rules in registration order.
///
/// A rule that returns `false` is recorded as failed. A rule that requests
/// termination is recorded as failed too, and no rule after it runs.
#[derive(Default)]
pub struct Runner<'r> {
    rules: Vec<Box<dyn Rule + 'r>>,
    collector: ViolationCollector,
    failed: IndexSet<String>,
    outcomes: Vec<RuleOutcome>,
    terminated: bool,
}

impl<'r> Runner<'r> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule to the execution order.
    ///
    /// # Errors
    /// Returns an error if a rule with the same id is already registered.
    pub fn register(&mut self, rule: impl Rule + 'r) -> Result<()> {
        if self.rules.iter().any(|r| r.id() == rule.id()) {
            return Err(PkgGuardError::DuplicateRule(rule.id().to_string()));
        }
        self.rules.push(Box::new(rule));
        Ok(())
    }

    /// Register a closure as a rule.
    ///
    /// # Errors
    /// Returns an error if a rule with the same id is already registered.
    pub fn register_fn<F>(&mut self, id: impl Into<String>, check: F) -> Result<()>
    where
        F: FnMut(&mut RuleContext<'_>) -> bool + 'r,
    {
        self.register(FnRule::new(id, check))
    }

    #[must_use]
    pub fn rule_ids(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Run every registered rule once, stopping early on termination.
    ///
    /// Rules are consumed; calling `run` again does nothing.
    pub fn run(&mut self) {
        for mut rule in std::mem::take(&mut self.rules) {
            let id = rule.id().to_string();

            let (passed, terminate) = {
                let mut ctx = RuleContext::new(&mut self.collector, &self.failed);
                let passed = rule.check(&mut ctx);
                (passed, ctx.termination_requested())
            };
            tracing::debug!(rule = %id, passed, terminate, "rule finished");

            if !passed || terminate {
                self.failed.insert(id.clone());
            }
            self.outcomes.push(RuleOutcome {
                id: id.clone(),
                passed: passed && !terminate,
            });

            if terminate {
                tracing::warn!(rule = %id, "testing terminated");
                self.collector
                    .push(Severity::Warning, TESTING_TERMINATED, None, Vec::new());
                self.terminated = true;
                return;
            }
        }
    }

    /// Ids of failed rules, in execution order.
    #[must_use]
    pub const fn failed_tests(&self) -> &IndexSet<String> {
        &self.failed
    }

    #[must_use]
    pub fn failed_test(&self, id: &str) -> bool {
        self.failed.contains(id)
    }

    #[must_use]
    pub fn outcomes(&self) -> &[RuleOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        self.terminated
    }

    #[must_use]
    pub const fn collector(&self) -> &ViolationCollector {
        &self.collector
    }

    #[must_use]
    pub fn into_report(self) -> RunReport {
        RunReport {
            failed_tests: self.failed.into_iter().collect(),
            outcomes: self.outcomes,
            terminated: self.terminated,
            violations: self.collector.into_violations(),
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
