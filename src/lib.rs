pub mod checks;
pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod matcher;
pub mod output;
pub mod package;
pub mod runner;
pub mod violation;

pub use error::{PkgGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURES: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
