//! Wire snapshot to domain model.

use crate::daemon::proto;
use crate::status::model::{
    ConnStatus, FullStatus, LocalPeerState, ManagementState, PeerState, SignalState,
};
use chrono::{DateTime, Local, Utc};

/// Copy a wire snapshot into the domain model.
///
/// Never fails: absent sub-messages become zero values and each peer's
/// status timestamp is moved into the local time zone.
pub fn from_wire_full_status(wire: Option<&proto::FullStatus>) -> FullStatus {
    let Some(wire) = wire else {
        return FullStatus::default();
    };

    let management = wire.management_state.clone().unwrap_or_default();
    let signal = wire.signal_state.clone().unwrap_or_default();
    let local = wire.local_peer_state.clone().unwrap_or_default();

    FullStatus {
        management_state: ManagementState {
            url: management.url,
            connected: management.connected,
        },
        signal_state: SignalState {
            url: signal.url,
            connected: signal.connected,
        },
        local_peer_state: LocalPeerState {
            ip: local.ip,
            pub_key: local.pub_key,
            kernel_interface: local.kernel_interface,
            fqdn: local.fqdn,
        },
        peers: wire.peers.iter().map(from_wire_peer).collect(),
    }
}

fn from_wire_peer(peer: &proto::PeerState) -> PeerState {
    PeerState {
        ip: peer.ip.clone(),
        pub_key: peer.pub_key.clone(),
        conn_status: ConnStatus::from(peer.conn_status.as_str()),
        conn_status_update: to_local_time(peer.conn_status_update.unwrap_or_default()),
        relayed: peer.relayed,
        direct: peer.direct,
        local_ice_candidate_type: peer.local_ice_candidate_type.clone(),
        remote_ice_candidate_type: peer.remote_ice_candidate_type.clone(),
        fqdn: peer.fqdn.clone(),
    }
}

/// Convert a wire timestamp to local time.
///
/// Negative nanos are dropped; instants chrono cannot represent collapse
/// to the Unix epoch.
pub fn to_local_time(ts: proto::Timestamp) -> DateTime<Local> {
    let nanos = u32::try_from(ts.nanos).unwrap_or(0);
    DateTime::<Utc>::from_timestamp(ts.seconds, nanos)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        .with_timezone(&Local)
}
