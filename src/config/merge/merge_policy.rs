//! Merge rules: defaults, override order, conflict handling.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

pub const DEFAULT_SOCKET_PATH: &str = "/var/run/meshd.sock";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Create a Config builder with merge policy defaults applied.
///
/// Sources added afterwards override these in the order they are added.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("daemon.socket_path", DEFAULT_SOCKET_PATH)?
        .set_default("daemon.timeout_ms", DEFAULT_TIMEOUT_MS as i64)?
        .set_default("logging.level", "warn")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")?
        .set_default("logging.color", true)
}
