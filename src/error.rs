//! Error types for the meshctl status tool.

use std::net::AddrParseError;
use thiserror::Error;

/// Filter validation errors, raised before the daemon is contacted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("wrong status filter, should be one of connected|disconnected, got: {0}")]
    InvalidStatusFilter(String),

    #[error("got an invalid IP address in the filter: address {addr}, error {source}")]
    InvalidIpFilter {
        addr: String,
        #[source]
        source: AddrParseError,
    },
}

/// Transport-level errors from the daemon client.
#[derive(Debug, Error)]
pub enum DaemonError {
    #[error("cannot connect to {addr}: {reason}")]
    Connect { addr: String, reason: String },

    #[error("{message}")]
    Rpc { code: String, message: String },

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("daemon exchange timed out after {0} ms")]
    Timeout(u64),

    #[error("daemon I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DaemonError {
    pub fn protocol(msg: impl Into<String>) -> Self {
        DaemonError::Protocol(msg.into())
    }
}

/// Errors surfaced by `meshctl status`.
#[derive(Debug, Error)]
pub enum StatusError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(
        "failed to connect to daemon error: {reason}\n\
         If the daemon is not running please run: \n\
         meshd service install \n\
         meshd service start\n"
    )]
    Connection { addr: String, reason: String },

    #[error("status failed: {0}")]
    Rpc(String),

    #[error("{format} marshal failed: {reason}")]
    Serialization { format: &'static str, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<DaemonError> for StatusError {
    fn from(err: DaemonError) -> Self {
        match err {
            DaemonError::Connect { addr, reason } => StatusError::Connection { addr, reason },
            DaemonError::Rpc { message, .. } => StatusError::Rpc(message),
            other => StatusError::Rpc(other.to_string()),
        }
    }
}

impl From<config::ConfigError> for StatusError {
    fn from(err: config::ConfigError) -> Self {
        StatusError::Config(err.to_string())
    }
}
