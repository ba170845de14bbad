//! Wire types exchanged with the daemon.
//!
//! Sub-messages are optional and every scalar defaults, so a sparse or
//! partially populated snapshot always decodes.

use serde::{Deserialize, Serialize};

/// Request sent to the daemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DaemonRequest {
    Status(StatusRequest),
}

/// Response received from the daemon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DaemonResponse {
    Status(StatusResponse),
    /// Error envelope for a failed call.
    Error {
        #[serde(default)]
        code: String,
        message: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRequest {
    #[serde(default)]
    pub get_full_peer_status: bool,
}

impl StatusRequest {
    pub fn full() -> Self {
        Self {
            get_full_peer_status: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusResponse {
    /// Daemon state, e.g. `Connected` or `NeedsLogin`.
    pub status: String,
    pub daemon_version: String,
    pub full_status: Option<FullStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullStatus {
    pub management_state: Option<ManagementState>,
    pub signal_state: Option<SignalState>,
    pub local_peer_state: Option<LocalPeerState>,
    pub peers: Vec<PeerState>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagementState {
    pub url: String,
    pub connected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalState {
    pub url: String,
    pub connected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalPeerState {
    pub ip: String,
    pub pub_key: String,
    pub kernel_interface: bool,
    pub fqdn: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeerState {
    pub ip: String,
    pub pub_key: String,
    pub conn_status: String,
    pub conn_status_update: Option<Timestamp>,
    pub relayed: bool,
    pub direct: bool,
    pub local_ice_candidate_type: String,
    pub remote_ice_candidate_type: String,
    pub fqdn: String,
}

/// Point in time as seconds and nanoseconds since the Unix epoch, UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: i32,
}
