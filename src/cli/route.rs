//! CLI route: run context and command dispatch.

use crate::cli::parse::{Commands, StatusArgs};
use crate::config::MeshctlConfig;
use crate::daemon::{DaemonClient, IpcDaemonClient};
use crate::error::StatusError;
use crate::status::{run_status, OutputMode, StatusOptions};
use std::path::PathBuf;
use tracing::info;

/// Runtime context for CLI execution: resolved config and the daemon client.
pub struct RunContext {
    config: MeshctlConfig,
    client: Box<dyn DaemonClient>,
}

impl RunContext {
    /// Build from loaded config, overriding the socket when `daemon_addr` is given.
    pub fn new(mut config: MeshctlConfig, daemon_addr: Option<PathBuf>) -> Result<Self, StatusError> {
        if let Some(addr) = daemon_addr {
            config.daemon.socket_path = addr;
        }
        config.validate()?;

        let client = IpcDaemonClient::new(&config.daemon.socket_path, config.daemon.timeout());
        Ok(Self {
            config,
            client: Box::new(client),
        })
    }

    pub fn config(&self) -> &MeshctlConfig {
        &self.config
    }

    /// Execute a CLI command and return the text to print.
    pub fn execute(&self, command: &Commands) -> Result<String, StatusError> {
        match command {
            Commands::Status(args) => {
                let options = status_options(args);
                info!(mode = ?options.mode, "Running status command");
                run_status(self.client.as_ref(), &options)
            }
        }
    }
}

/// Translate parsed flags into orchestrator options.
pub fn status_options(args: &StatusArgs) -> StatusOptions {
    let mode = if args.detail {
        OutputMode::Detail
    } else if args.json {
        OutputMode::Json
    } else if args.yaml {
        OutputMode::Yaml
    } else if args.ipv4 {
        OutputMode::Ipv4
    } else {
        OutputMode::Summary
    };

    StatusOptions {
        mode,
        status_filter: args.filter_by_status.clone(),
        ip_filter: args
            .filter_by_ips
            .iter()
            .filter(|addr| !addr.is_empty())
            .cloned()
            .collect(),
    }
}
