//! Domain model for a daemon status snapshot.
//!
//! Field names serialize as the daemon's domain names (`ManagementState`,
//! `URL`, `IP`, ...) so JSON and YAML output keep one vocabulary.

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Management service connection state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManagementState {
    #[serde(rename = "URL")]
    pub url: String,
    pub connected: bool,
}

/// Signal service connection state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignalState {
    #[serde(rename = "URL")]
    pub url: String,
    pub connected: bool,
}

/// Identity of this node inside the mesh.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocalPeerState {
    /// Interface address in CIDR notation, e.g. `100.64.0.33/16`.
    #[serde(rename = "IP")]
    pub ip: String,
    pub pub_key: String,
    pub kernel_interface: bool,
    #[serde(rename = "FQDN")]
    pub fqdn: String,
}

/// Connection status of a remote peer.
///
/// Known tokens get their own variant; anything else the daemon reports is
/// kept verbatim in `Other` so it can still be displayed and re-serialized.
/// Build values with `ConnStatus::from`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConnStatus {
    Idle,
    Connecting,
    Connected,
    Disconnected,
    Other(UnknownStatus),
}

/// A status token outside the known vocabulary. Never holds a known token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownStatus(String);

impl UnknownStatus {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ConnStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ConnStatus::Idle => "Idle",
            ConnStatus::Connecting => "Connecting",
            ConnStatus::Connected => "Connected",
            ConnStatus::Disconnected => "Disconnected",
            ConnStatus::Other(raw) => raw.as_str(),
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, ConnStatus::Connected)
    }
}

impl Default for ConnStatus {
    fn default() -> Self {
        ConnStatus::Other(UnknownStatus(String::new()))
    }
}

impl From<&str> for ConnStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "Idle" => ConnStatus::Idle,
            "Connecting" => ConnStatus::Connecting,
            "Connected" => ConnStatus::Connected,
            "Disconnected" => ConnStatus::Disconnected,
            other => ConnStatus::Other(UnknownStatus(other.to_string())),
        }
    }
}

impl From<String> for ConnStatus {
    fn from(raw: String) -> Self {
        ConnStatus::from(raw.as_str())
    }
}

impl fmt::Display for ConnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ConnStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ConnStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ConnStatus::from(raw))
    }
}

/// State of one remote peer as last reported by the daemon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PeerState {
    #[serde(rename = "IP")]
    pub ip: String,
    pub pub_key: String,
    pub conn_status: ConnStatus,
    /// Last status change, in the local time zone.
    pub conn_status_update: DateTime<Local>,
    pub relayed: bool,
    pub direct: bool,
    pub local_ice_candidate_type: String,
    pub remote_ice_candidate_type: String,
    #[serde(rename = "FQDN")]
    pub fqdn: String,
}

/// Full status snapshot. Peers keep the order the daemon sent them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FullStatus {
    pub management_state: ManagementState,
    pub signal_state: SignalState,
    pub local_peer_state: LocalPeerState,
    #[serde(default)]
    pub peers: Vec<PeerState>,
}

impl FullStatus {
    /// Number of peers whose status is `Connected`, over the whole peer list.
    pub fn connected_peers(&self) -> usize {
        self.peers
            .iter()
            .filter(|peer| peer.conn_status.is_connected())
            .count()
    }
}
