//! `meshctl status`: fetch, map, and render in the selected output mode.

use crate::daemon::{DaemonClient, StatusRequest};
use crate::error::StatusError;
use crate::status::filter::FilterConfig;
use crate::status::mapper::from_wire_full_status;
use crate::status::render::{
    daemon_status_line, format_detail, format_interface_ip, format_json, format_login_required,
    format_yaml,
};
use tracing::debug;

/// Daemon states that need an interactive login before a snapshot is useful.
pub const STATUS_NEEDS_LOGIN: &str = "NeedsLogin";
pub const STATUS_LOGIN_FAILED: &str = "LoginFailed";

pub fn requires_login(daemon_status: &str) -> bool {
    daemon_status == STATUS_NEEDS_LOGIN || daemon_status == STATUS_LOGIN_FAILED
}

/// Output representation. At most one is selected per invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Daemon status line only.
    #[default]
    Summary,
    Detail,
    Json,
    Yaml,
    Ipv4,
}

/// Raw status-command input as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct StatusOptions {
    pub mode: OutputMode,
    pub status_filter: String,
    pub ip_filter: Vec<String>,
}

/// Run the status command against a daemon and return the text to print.
///
/// Filters are validated before the daemon is contacted.
pub fn run_status(
    client: &dyn DaemonClient,
    options: &StatusOptions,
) -> Result<String, StatusError> {
    let filter = FilterConfig::parse(&options.status_filter, options.ip_filter.as_slice())?;
    debug!(
        status_filter = ?filter.status(),
        ip_filter_len = filter.ips().len(),
        "Validated status filters"
    );

    let response = client.status(&StatusRequest::full())?;
    debug!(
        daemon_status = %response.status,
        daemon_version = %response.daemon_version,
        "Fetched daemon status"
    );

    if requires_login(&response.status) {
        return Ok(format_login_required(&response.status));
    }

    let full_status = from_wire_full_status(response.full_status.as_ref());
    debug!(
        peers = full_status.peers.len(),
        connected = full_status.connected_peers(),
        mode = ?options.mode,
        "Rendering status"
    );

    match options.mode {
        OutputMode::Summary => Ok(daemon_status_line(&response.status)),
        OutputMode::Detail => Ok(format_detail(
            &full_status,
            &filter,
            &response.status,
            &response.daemon_version,
        )),
        OutputMode::Json => format_json(&full_status),
        OutputMode::Yaml => format_yaml(&full_status),
        OutputMode::Ipv4 => Ok(format_interface_ip(&full_status.local_peer_state.ip)),
    }
}
