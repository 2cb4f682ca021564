use indexmap::IndexSet;
use regex::{Regex, RegexBuilder};

use crate::error::{PkgGuardError, Result};
use crate::package::Package;
use crate::runner::{Rule, RuleContext};
use crate::violation::Severity;

use super::codes;

/// Reports operating-system and VCS leftovers (`__MACOSX`, `.svn`, ...).
///
/// A name matches when it is a whole path segment, case-insensitively. Every
/// (directory, name) pair is reported once, however many files sit below it.
pub struct UnwantedRule<'a> {
    package: &'a Package,
    matcher: Option<Regex>,
}

impl<'a> UnwantedRule<'a> {
    pub const ID: &'static str = "unwanted";

    /// # Errors
    /// Returns an error if the combined name pattern cannot be compiled.
    pub fn new(package: &'a Package, names: &[String]) -> Result<Self> {
        let matcher = if names.is_empty() {
            None
        } else {
            Some(build_matcher(names)?)
        };
        Ok(Self { package, matcher })
    }
}

fn build_matcher(names: &[String]) -> Result<Regex> {
    let alternatives: Vec<String> = names.iter().map(|n| regex::escape(n)).collect();
    // Group 1 is the directory prefix up to and including the last `/` before
    // the match; group 2 is the name as written in the path.
    let pattern = format!("^(.*/)?({})(?:/|$)", alternatives.join("|"));
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| PkgGuardError::InvalidRegex {
            rule: UnwantedRule::ID.to_string(),
            pattern,
            source,
        })
}

impl Rule for UnwantedRule<'_> {
    fn id(&self) -> &str {
        Self::ID
    }

    fn check(&mut self, ctx: &mut RuleContext<'_>) -> bool {
        let Some(matcher) = &self.matcher else {
            return true;
        };

        let mut reported: IndexSet<(String, String)> = IndexSet::new();
        for path in self.package.files() {
            let Some(caps) = matcher.captures(path) else {
                continue;
            };
            let dir = caps.get(1).map_or("", |m| m.as_str());
            let name = caps.get(2).map_or("", |m| m.as_str());

            if !reported.insert((dir.to_lowercase(), name.to_lowercase())) {
                continue;
            }

            let dir = if dir.is_empty() { "./" } else { dir };
            ctx.push(
                Severity::Notice,
                codes::UNWANTED_FILE,
                None,
                vec![dir.to_string(), name.to_string()],
            );
        }

        reported.is_empty()
    }
}
