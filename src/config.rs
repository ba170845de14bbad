//! Configuration System
//!
//! Layered configuration for meshctl: built-in defaults, the global config
//! file, an explicit `--config` file, then `MESHCTL_*` environment variables.
//! CLI flags are applied on top by the binary.

use crate::error::StatusError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

mod merge;
mod sources;

pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeshctlConfig {
    /// Daemon connection settings
    #[serde(default)]
    pub daemon: DaemonConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where and how to reach the daemon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Daemon control socket
    #[serde(default = "default_socket_path")]
    pub socket_path: PathBuf,

    /// Connect and exchange deadline, milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_socket_path() -> PathBuf {
    PathBuf::from(merge::merge_policy::DEFAULT_SOCKET_PATH)
}

fn default_timeout_ms() -> u64 {
    merge::merge_policy::DEFAULT_TIMEOUT_MS
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            socket_path: default_socket_path(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl DaemonConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.socket_path.as_os_str().is_empty() {
            return Err("Daemon socket path cannot be empty".to_string());
        }
        if self.timeout_ms == 0 {
            return Err("Daemon timeout must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl MeshctlConfig {
    pub fn validate(&self) -> Result<(), StatusError> {
        self.daemon.validate().map_err(StatusError::Config)
    }
}

/// Loads [`MeshctlConfig`] from every source in precedence order.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load using the default global config location.
    pub fn load(explicit: Option<&Path>) -> Result<MeshctlConfig, StatusError> {
        Self::load_with_global(global_config_path(), explicit)
    }

    /// Load with a caller-chosen global config path (`None` skips it).
    pub fn load_with_global(
        global: Option<PathBuf>,
        explicit: Option<&Path>,
    ) -> Result<MeshctlConfig, StatusError> {
        let mut builder = merge::merge_policy::builder_with_defaults()?;
        builder = sources::global_file::add_to_builder(builder, global)?;
        if let Some(path) = explicit {
            builder = sources::explicit_file::add_to_builder(builder, path)?;
        }
        builder = sources::environment::add_to_builder(builder);

        let config: MeshctlConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
