//! Built-in defaults used when neither the command line nor a config file
//! supplies a value.

/// Name of the per-project configuration file.
pub const CONFIG_FILENAME: &str = ".linestrip.toml";

/// File stripped when no path is given, relative to the working directory.
pub const DEFAULT_TARGET_PATH: &str = "pages/ClientDashboard.tsx";

/// First line removed by default (1-based, inclusive).
pub const DEFAULT_RANGE_START: usize = 882;

/// Last line removed by default (1-based, inclusive).
pub const DEFAULT_RANGE_END: usize = 896;

/// Prefix of the confirmation line printed after a successful strip.
pub const CONFIRMATION_PREFIX: &str = "Fixed - removed lines";
