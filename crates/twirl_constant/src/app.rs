//! Application metadata constants

pub const NAME: &str = "twirl";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Single-line animated terminal spinners";

/// Directory name for twirl settings within the home directory
pub const CONFIG_DIR: &str = ".twirl";
/// Settings file name inside CONFIG_DIR
pub const CONFIG_FILE: &str = "config.toml";

/// Default spin interval in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 100;
/// Appended to every non-empty status message.
pub const DOTS_SUFFIX: &str = "...";
/// Single spacer column used for inline mode and part separators.
pub const ONE_SPACE: &str = " ";
