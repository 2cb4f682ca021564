use std::fs;

use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, PkgGuardError, Result};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(PkgGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# pkg-guard configuration file
version = "1"

[package]
# Extension of the stylesheet every package must ship
stylesheet_extension = "xsl"

# Required license file (basename, compared case-insensitively)
license_file = "license.txt"

# File and directory names that should not be shipped
unwanted = ["__macosx", ".ds_store", "thumbs.db", ".svn"]

# Comment markers used when scanning file contents
[comments]
line = ["//"]
block_start = "/*"
block_end = "*/"

# Content rules scan selected files line by line.
# `contains` matches code with comments removed and honours `ignore`;
# `regex` matches the raw line, comments included, and ignores `ignore`.
#
# [[content.rules]]
# id = "no_eval"
# code = "USAGE_EVAL"
# severity = "fail"
# contains = "eval("
# ignore = ["TODO"]
# files = ["**/*.php"]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
