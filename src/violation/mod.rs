mod collector;

pub use collector::ViolationCollector;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// How serious a violation is.
///
/// `Fail` violations make the package invalid; `Warning` and `Notice` are
/// informational and never change the exit status on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Fail,
    Warning,
    Notice,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::Warning => "warning",
            Self::Notice => "notice",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fail" | "error" => Ok(Self::Fail),
            "warning" | "warn" => Ok(Self::Warning),
            "notice" => Ok(Self::Notice),
            _ => Err(format!("Unknown severity: {s}")),
        }
    }
}

/// One detected non-compliance.
///
/// `code` is a symbolic message key (e.g. `NO_LICENSE`) and `args` are the
/// positional values a renderer substitutes into the message template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    severity: Severity,
    code: String,
    subject: Option<PathBuf>,
    args: Vec<String>,
}

impl Violation {
    #[must_use]
    pub fn new(
        severity: Severity,
        code: impl Into<String>,
        subject: Option<PathBuf>,
        args: Vec<String>,
    ) -> Self {
        Self {
            severity,
            code: code.into(),
            subject,
            args,
        }
    }

    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn subject(&self) -> Option<&Path> {
        self.subject.as_deref()
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

#[cfg(test)]
#[path = "violation_tests.rs"]
mod tests;
