use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use regex::Regex;

use crate::classifier::{CommentSyntax, IgnoreSet};
use crate::config::ContentRule;
use crate::error::{PkgGuardError, Result};
use crate::matcher::{MatchPredicate, PatternMatcher};
use crate::package::{Package, PackageContents};
use crate::runner::{Rule, RuleContext};
use crate::violation::Severity;

/// A `[[content.rules]]` entry with its patterns compiled.
#[derive(Debug)]
pub struct CompiledContentRule {
    id: String,
    code: String,
    severity: Severity,
    predicate: MatchPredicate,
    syntax: CommentSyntax,
    ignore: IgnoreSet,
    files: GlobSet,
}

impl CompiledContentRule {
    /// # Errors
    /// Returns an error if the rule has no single predicate, or a regex or
    /// glob does not compile.
    pub fn compile(rule: &ContentRule, default_syntax: &CommentSyntax) -> Result<Self> {
        Ok(Self {
            id: rule.id.clone(),
            code: rule.code.clone(),
            severity: rule.severity,
            predicate: compile_predicate(rule)?,
            syntax: rule
                .comments
                .clone()
                .unwrap_or_else(|| default_syntax.clone()),
            ignore: IgnoreSet::new(rule.ignore.clone()),
            files: compile_globs(&rule.files)?,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the package file at `path` is scanned by this rule.
    #[must_use]
    pub fn selects(&self, path: &str) -> bool {
        self.files.is_match(path)
    }
}

fn compile_predicate(rule: &ContentRule) -> Result<MatchPredicate> {
    match (&rule.contains, &rule.regex) {
        (Some(needle), None) => Ok(MatchPredicate::Substring(needle.clone())),
        (None, Some(pattern)) => Regex::new(pattern)
            .map(MatchPredicate::Regex)
            .map_err(|source| PkgGuardError::InvalidRegex {
                rule: rule.id.clone(),
                pattern: pattern.clone(),
                source,
            }),
        _ => Err(PkgGuardError::Config(format!(
            "content rule '{}': exactly one of contains or regex must be set",
            rule.id
        ))),
    }
}

fn compile_globs(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| PkgGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| PkgGuardError::InvalidPattern {
        pattern: "combined patterns".to_string(),
        source,
    })
}

/// Runs one compiled content rule over every file it selects.
///
/// Fails if any line of any selected file matches.
pub struct ContentCheck<'a> {
    rule: &'a CompiledContentRule,
    package: &'a Package,
    contents: &'a PackageContents,
}

impl<'a> ContentCheck<'a> {
    #[must_use]
    pub const fn new(
        rule: &'a CompiledContentRule,
        package: &'a Package,
        contents: &'a PackageContents,
    ) -> Self {
        Self {
            rule,
            package,
            contents,
        }
    }
}

impl Rule for ContentCheck<'_> {
    fn id(&self) -> &str {
        &self.rule.id
    }

    fn check(&mut self, ctx: &mut RuleContext<'_>) -> bool {
        let rule = self.rule;
        let matcher = PatternMatcher::new(
            &rule.predicate,
            rule.severity,
            &rule.code,
            &rule.syntax,
            &rule.ignore,
        );

        let mut found = false;
        for path in self.package.files().iter().filter(|f| rule.selects(f)) {
            let Some(lines) = self.contents.lines(path) else {
                continue;
            };
            found |= matcher.scan(Some(Path::new(path)), lines, ctx.collector());
        }

        !found
    }
}
