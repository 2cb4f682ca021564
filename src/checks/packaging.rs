use crate::package::{Package, basename_lower};
use crate::runner::{Rule, RuleContext};
use crate::violation::Severity;

use super::codes;

/// An empty package leaves nothing for the remaining rules to check, so this
/// rule terminates the run.
pub struct PackageFilesRule<'a> {
    package: &'a Package,
}

impl<'a> PackageFilesRule<'a> {
    pub const ID: &'static str = "package_files";

    #[must_use]
    pub const fn new(package: &'a Package) -> Self {
        Self { package }
    }
}

impl Rule for PackageFilesRule<'_> {
    fn id(&self) -> &str {
        Self::ID
    }

    fn check(&mut self, ctx: &mut RuleContext<'_>) -> bool {
        if self.package.is_empty() {
            ctx.push(Severity::Fail, codes::NO_FILES, None, Vec::new());
            return ctx.terminate();
        }
        true
    }
}

/// The package must ship at least one stylesheet.
pub struct StylesheetRule<'a> {
    package: &'a Package,
    extension: &'a str,
}

impl<'a> StylesheetRule<'a> {
    pub const ID: &'static str = "xsl";

    #[must_use]
    pub const fn new(package: &'a Package, extension: &'a str) -> Self {
        Self { package, extension }
    }
}

impl Rule for StylesheetRule<'_> {
    fn id(&self) -> &str {
        Self::ID
    }

    fn check(&mut self, ctx: &mut RuleContext<'_>) -> bool {
        let count = self.package.files_with_extension(self.extension).count();
        tracing::debug!(count, extension = self.extension, "stylesheets found");
        if count == 0 {
            ctx.push(Severity::Fail, codes::NO_XSL_FILE, None, Vec::new());
            return false;
        }
        true
    }
}

/// The package must contain the license file somewhere.
pub struct LicenseRule<'a> {
    package: &'a Package,
    license_file: String,
}

impl<'a> LicenseRule<'a> {
    pub const ID: &'static str = "license";

    #[must_use]
    pub fn new(package: &'a Package, license_file: &str) -> Self {
        Self {
            package,
            license_file: license_file.to_lowercase(),
        }
    }
}

impl Rule for LicenseRule<'_> {
    fn id(&self) -> &str {
        Self::ID
    }

    fn check(&mut self, ctx: &mut RuleContext<'_>) -> bool {
        if self
            .package
            .files()
            .iter()
            .any(|f| basename_lower(f) == self.license_file)
        {
            return true;
        }
        ctx.push(Severity::Fail, codes::NO_LICENSE, None, Vec::new());
        false
    }
}

/// Style and language install files must not be named like the main install file.
///
/// Flags `prosilver.xml` or any `.xml` name containing `prosilver`, and
/// `en.xml` or any `.xml` name containing `english`.
pub struct MainInstallFileRule<'a> {
    package: &'a Package,
}

impl<'a> MainInstallFileRule<'a> {
    pub const ID: &'static str = "prosilver_english";

    #[must_use]
    pub const fn new(package: &'a Package) -> Self {
        Self { package }
    }
}

fn looks_like(name: &str, exact: &str, fragment: &str) -> bool {
    name == exact || (name.contains(fragment) && name.contains(".xml"))
}

impl Rule for MainInstallFileRule<'_> {
    fn id(&self) -> &str {
        Self::ID
    }

    fn check(&mut self, ctx: &mut RuleContext<'_>) -> bool {
        let mut passed = true;
        for path in self.package.files() {
            let name = basename_lower(path);

            if looks_like(&name, "prosilver.xml", "prosilver") {
                ctx.push(
                    Severity::Fail,
                    codes::PROSILVER_NO_MAIN_MODX,
                    None,
                    vec![path.clone()],
                );
                passed = false;
            }

            if looks_like(&name, "en.xml", "english") {
                ctx.push(
                    Severity::Fail,
                    codes::ENGLISH_NO_MAIN_MODX,
                    None,
                    vec![path.clone()],
                );
                passed = false;
            }
        }
        passed
    }
}
