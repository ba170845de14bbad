//! CLI parse: clap types for meshctl. No behavior; definitions only.

use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

/// meshctl - connectivity status of the mesh daemon
#[derive(Parser)]
#[command(name = "meshctl")]
#[command(version)]
#[command(about = "Report the connectivity state of the mesh networking daemon")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (layered over the global config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Daemon control socket path
    #[arg(long, global = true)]
    pub daemon_addr: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Status of the mesh daemon
    Status(StatusArgs),
}

#[derive(Args, Debug, Clone, Default)]
#[command(group(
    ArgGroup::new("output")
        .args(["detail", "json", "yaml", "ipv4"])
        .multiple(false)
))]
pub struct StatusArgs {
    /// Display detailed status information in human-readable format
    #[arg(short, long)]
    pub detail: bool,

    /// Display detailed status information in json format
    #[arg(long)]
    pub json: bool,

    /// Display detailed status information in yaml format
    #[arg(long)]
    pub yaml: bool,

    /// Display only the mesh IPv4 of this peer, e.g., --ipv4 will output 100.64.0.33
    #[arg(long)]
    pub ipv4: bool,

    /// Filter the detailed output by a list of one or more IPs, e.g., --filter-by-ips 100.64.0.100,100.64.0.200
    #[arg(long = "filter-by-ips", value_delimiter = ',')]
    pub filter_by_ips: Vec<String>,

    /// Filter the detailed output by connection status (connected|disconnected), e.g., --filter-by-status connected
    #[arg(long = "filter-by-status", default_value = "")]
    pub filter_by_status: String,
}
