//! English message templates for the built-in violation codes.
//!
//! Templates use `%s` for positional arguments. Codes without a template are
//! rendered as the code followed by its arguments.

use crate::checks::codes;
use crate::runner::TESTING_TERMINATED;
use crate::violation::Violation;

fn template(code: &str) -> Option<&'static str> {
    let text = match code {
        codes::NO_FILES => "The package does not contain any files",
        codes::NO_XSL_FILE => "No stylesheet found in the package",
        codes::NO_LICENSE => "The package does not contain the required license file",
        codes::PROSILVER_NO_MAIN_MODX => {
            "%s looks like a prosilver install file; the main install file must not be named after a style"
        }
        codes::ENGLISH_NO_MAIN_MODX => {
            "%s looks like an English install file; the main install file must not be named after a language"
        }
        codes::UNWANTED_FILE => "Unwanted file or directory found: %s%s",
        TESTING_TERMINATED => "Testing terminated; the remaining rules were not run",
        _ => return None,
    };
    Some(text)
}

fn substitute(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut parts = template.split("%s").peekable();
    while let Some(part) = parts.next() {
        out.push_str(part);
        if parts.peek().is_some() {
            out.push_str(args.next().map_or("", String::as_str));
        }
    }
    out
}

/// Human-readable text for a violation.
#[must_use]
pub fn render_message(violation: &Violation) -> String {
    template(violation.code()).map_or_else(
        || {
            let mut text = violation.code().to_string();
            for arg in violation.args() {
                text.push(' ');
                text.push_str(arg);
            }
            text
        },
        |t| substitute(t, violation.args()),
    )
}
