//! Output renderers: human-readable detail, JSON, YAML, and bare IPv4.

use crate::error::StatusError;
use crate::status::filter::FilterConfig;
use crate::status::model::{FullStatus, PeerState};
use crate::status::sort::sort_peers;
use ipnet::IpNet;
use std::str::FromStr;

/// Timestamp layout for the detail view.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Version of this CLI, reported in the summary block.
pub fn cli_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// `"Daemon status: <status>\n"`.
pub fn daemon_status_line(status: &str) -> String {
    format!("Daemon status: {}\n", status)
}

/// Preamble plus instructions shown when the daemon is waiting for login.
pub fn format_login_required(daemon_status: &str) -> String {
    format!(
        "{}\n\
         Run UP command to log in with SSO (interactive login):\n\n \
         meshctl up \n\n\
         If you are running a self-hosted version and no SSO provider has been configured in your Management Server,\n\
         you can use a setup-key:\n\n \
         meshctl up --management-url <YOUR_MANAGEMENT_URL> --setup-key <YOUR_SETUP_KEY>\n\n",
        daemon_status_line(daemon_status)
    )
}

/// Detail report: filtered and sorted peer blocks, then the summary.
///
/// The peer count in the summary covers every peer, not only the ones the
/// filter let through.
pub fn format_detail(
    status: &FullStatus,
    filter: &FilterConfig,
    daemon_status: &str,
    daemon_version: &str,
) -> String {
    let mut peers = status.peers.clone();
    sort_peers(&mut peers);

    let mut out = String::from("Peers detail:");
    for peer in filter.select(&peers) {
        out.push_str(&format_peer(peer));
    }
    out.push('\n');
    out.push_str(&format_summary(status, daemon_status, daemon_version));
    out
}

fn format_peer(peer: &PeerState) -> String {
    let connected = peer.conn_status.is_connected();

    let (conn_type, local_ice, remote_ice) = if connected {
        let conn_type = if peer.relayed { "Relayed" } else { "P2P" };
        (
            conn_type,
            peer.local_ice_candidate_type.as_str(),
            peer.remote_ice_candidate_type.as_str(),
        )
    } else {
        ("-", "-", "-")
    };

    format!(
        "\n {}:\n  \
         Mesh IP: {}\n  \
         Public key: {}\n  \
         Status: {}\n  \
         -- detail --\n  \
         Connection type: {}\n  \
         Direct: {}\n  \
         ICE candidate (Local/Remote): {}/{}\n  \
         Last connection update: {}\n",
        peer.fqdn,
        peer.ip,
        peer.pub_key,
        peer.conn_status,
        conn_type,
        peer.direct,
        local_ice,
        remote_ice,
        peer.conn_status_update.format(TIMESTAMP_FORMAT),
    )
}

fn connection_word(connected: bool) -> &'static str {
    if connected {
        "Connected"
    } else {
        "Disconnected"
    }
}

/// Interface type and the address to display next to it.
fn interface_summary(status: &FullStatus) -> (&'static str, &str) {
    let local = &status.local_peer_state;
    if local.kernel_interface {
        ("Kernel", local.ip.as_str())
    } else if local.ip.is_empty() {
        ("N/A", "")
    } else {
        ("Userspace", local.ip.as_str())
    }
}

fn format_summary(status: &FullStatus, daemon_status: &str, daemon_version: &str) -> String {
    let (interface_type, interface_ip) = interface_summary(status);

    format!(
        "Daemon version: {}\n\
         CLI version: {}\n\
         {}\
         Management: {} to {}\n\
         Signal: {} to {}\n\
         Domain: {}\n\
         Mesh IP: {}\n\
         Interface type: {}\n\
         Peers count: {}/{} Connected\n",
        daemon_version,
        cli_version(),
        daemon_status_line(daemon_status),
        connection_word(status.management_state.connected),
        status.management_state.url,
        connection_word(status.signal_state.connected),
        status.signal_state.url,
        status.local_peer_state.fqdn,
        interface_ip,
        interface_type,
        status.connected_peers(),
        status.peers.len(),
    )
}

/// Compact JSON of the full, unfiltered snapshot.
pub fn format_json(status: &FullStatus) -> Result<String, StatusError> {
    serde_json::to_string(status).map_err(|e| StatusError::Serialization {
        format: "json",
        reason: e.to_string(),
    })
}

/// YAML of the full, unfiltered snapshot.
pub fn format_yaml(status: &FullStatus) -> Result<String, StatusError> {
    serde_yaml::to_string(status).map_err(|e| StatusError::Serialization {
        format: "yaml",
        reason: e.to_string(),
    })
}

/// Address part of the local interface CIDR, newline-terminated.
///
/// Returns an empty string when the value is not valid CIDR; this renderer
/// never fails.
pub fn format_interface_ip(interface_ip: &str) -> String {
    match IpNet::from_str(interface_ip) {
        Ok(net) => format!("{}\n", net.addr()),
        Err(_) => String::new(),
    }
}
