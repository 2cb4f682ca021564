use std::fmt::Write;

use crate::error::Result;
use crate::runner::RunReport;
use crate::violation::{Severity, Violation};

use super::{OutputFormatter, render_message};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn severity_icon(severity: Severity) -> &'static str {
        match severity {
            Severity::Fail => "✗",
            Severity::Warning => "⚠",
            Severity::Notice => "ℹ",
        }
    }

    const fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Fail => ansi::RED,
            Severity::Warning => ansi::YELLOW,
            Severity::Notice => ansi::CYAN,
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_violation(&self, violation: &Violation, output: &mut String) {
        let severity = violation.severity();
        let label = self.colorize(
            &severity.as_str().to_uppercase(),
            Self::severity_color(severity),
        );
        let icon = Self::severity_icon(severity);
        let message = render_message(violation);

        let _ = match violation.subject() {
            Some(path) => writeln!(output, "{icon} {label}: {}: {message}", path.display()),
            None => writeln!(output, "{icon} {label}: {message}"),
        };

        if self.verbose > 0 {
            writeln!(output, "   Code: {}", violation.code()).ok();
        }
    }

    fn format_summary(&self, report: &RunReport, output: &mut String) {
        let count = |severity: Severity| {
            report
                .violations
                .iter()
                .filter(|v| v.severity() == severity)
                .count()
        };
        let fails = self.colorize(&count(Severity::Fail).to_string(), ansi::RED);
        let warnings = self.colorize(&count(Severity::Warning).to_string(), ansi::YELLOW);
        let notices = self.colorize(&count(Severity::Notice).to_string(), ansi::CYAN);

        writeln!(
            output,
            "Summary: {} rules run, {fails} failures, {warnings} warnings, {notices} notices",
            report.outcomes.len()
        )
        .ok();

        if report.failed_tests.is_empty() {
            let ok = self.colorize("none", ansi::GREEN);
            writeln!(output, "Failed tests: {ok}").ok();
        } else {
            writeln!(output, "Failed tests: {}", report.failed_tests.join(", ")).ok();
        }

        if self.verbose > 0 {
            for outcome in &report.outcomes {
                let status = if outcome.passed { "passed" } else { "failed" };
                writeln!(output, "   {}: {status}", outcome.id).ok();
            }
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let mut output = String::new();

        for violation in &report.violations {
            self.format_violation(violation, &mut output);
        }

        if !report.violations.is_empty() {
            output.push('\n');
        }
        self.format_summary(report, &mut output);

        Ok(output)
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}
