//! Substring and regex predicates evaluated over classified lines.

use std::path::Path;

use regex::Regex;

use crate::classifier::{CommentSyntax, IgnoreSet, LineClassifier};
use crate::violation::{Severity, ViolationCollector};

/// What a content rule looks for.
#[derive(Debug, Clone)]
pub enum MatchPredicate {
    /// Case-sensitive containment in the comment-stripped, ignore-filtered content.
    Substring(String),
    /// Pattern tested against the raw line.
    ///
    /// Regex predicates deliberately see the line exactly as read: comment
    /// text is not stripped and the ignore set is not consulted, so a banned
    /// pattern written inside a comment still matches. Substring predicates
    /// honour both. Keep this in mind when choosing between the two.
    Regex(Regex),
}

impl MatchPredicate {
    fn is_match(&self, raw: &str, matchable: &str) -> bool {
        match self {
            Self::Substring(needle) => matchable.contains(needle.as_str()),
            Self::Regex(re) => re.is_match(raw),
        }
    }
}

pub struct PatternMatcher<'a> {
    predicate: &'a MatchPredicate,
    severity: Severity,
    code: &'a str,
    classifier: LineClassifier<'a>,
}

impl<'a> PatternMatcher<'a> {
    #[must_use]
    pub const fn new(
        predicate: &'a MatchPredicate,
        severity: Severity,
        code: &'a str,
        syntax: &'a CommentSyntax,
        ignore: &'a IgnoreSet,
    ) -> Self {
        Self {
            predicate,
            severity,
            code,
            classifier: LineClassifier::new(syntax, ignore),
        }
    }

    /// Scan `lines` and push one violation per matching line.
    ///
    /// Each violation carries the 1-based line number and the trimmed raw line
    /// wrapped in `[code]...[/code]`. Returns `true` if any line matched.
    pub fn scan<S: AsRef<str>>(
        &self,
        subject: Option<&Path>,
        lines: &[S],
        collector: &mut ViolationCollector,
    ) -> bool {
        let mut found = false;

        for line in self.classifier.classify(lines) {
            if !self.predicate.is_match(line.raw, &line.matchable) {
                continue;
            }

            collector.push(
                self.severity,
                self.code,
                subject.map(Path::to_path_buf),
                vec![line.number.to_string(), render_code(line.raw)],
            );
            found = true;
        }

        found
    }
}

/// Bracket-delimited rendering of a raw line for display.
#[must_use]
pub fn render_code(raw: &str) -> String {
    format!("[code]{}[/code]", raw.trim())
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
