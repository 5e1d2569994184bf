//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and default file locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "LazyBooks";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "lazybooks";

/// Directory name under the platform config dir.
pub const APP_CONFIG_DIR_NAME: &str = "LazyBooks";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV_VAR: &str = "LAZYBOOKS_CONFIG_DIR";

/// Default book file, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "books_data.json";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV_VAR: &str = "LAZYBOOKS_LOG";

/// Base name of the log file.
pub const LOG_FILE_NAME: &str = "lazybooks.log";
