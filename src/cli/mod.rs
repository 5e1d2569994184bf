//! CLI command handlers for LazyBooks.
//!
//! Headless, scriptable access to the book collection for automation and
//! testing. Every command works on the store resolved from `--file` or the
//! configuration.

pub mod books;
pub mod common;
pub mod config;

// Re-export types used by main.rs and tests
pub use books::{AddArgs, DeleteArgs, ListArgs, ProgressArgs, SearchArgs, UpdateArgs};
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
