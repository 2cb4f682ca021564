use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::runner::{RuleOutcome, RunReport};
use crate::violation::{Severity, Violation};

use super::{OutputFormatter, render_message};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary<'a>,
    outcomes: &'a [RuleOutcome],
    violations: Vec<JsonViolation<'a>>,
}

#[derive(Serialize)]
struct Summary<'a> {
    rules_run: usize,
    failures: usize,
    warnings: usize,
    notices: usize,
    terminated: bool,
    failed_tests: &'a [String],
}

#[derive(Serialize)]
struct JsonViolation<'a> {
    severity: Severity,
    code: &'a str,
    subject: Option<String>,
    args: &'a [String],
    message: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let count = |severity: Severity| {
            report
                .violations
                .iter()
                .filter(|v| v.severity() == severity)
                .count()
        };

        let output = JsonOutput {
            summary: Summary {
                rules_run: report.outcomes.len(),
                failures: count(Severity::Fail),
                warnings: count(Severity::Warning),
                notices: count(Severity::Notice),
                terminated: report.terminated,
                failed_tests: &report.failed_tests,
            },
            outcomes: &report.outcomes,
            violations: report.violations.iter().map(convert_violation).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_violation(violation: &Violation) -> JsonViolation<'_> {
    JsonViolation {
        severity: violation.severity(),
        code: violation.code(),
        subject: violation
            .subject()
            .map(|p: &Path| p.to_string_lossy().replace('\\', "/")),
        args: violation.args(),
        message: render_message(violation),
    }
}
