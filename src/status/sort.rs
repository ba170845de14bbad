//! Deterministic peer ordering.

use crate::status::model::PeerState;
use std::net::IpAddr;

/// Sort key for a peer: its parsed address, `None` when the IP field does
/// not parse. `None` orders before every address and IPv4 before IPv6.
pub fn peer_sort_key(peer: &PeerState) -> Option<IpAddr> {
    peer.ip.parse().ok()
}

/// Stable ascending sort by parsed IP address.
///
/// Unparsable addresses sort first and keep their relative order.
pub fn sort_peers(peers: &mut [PeerState]) {
    peers.sort_by_key(peer_sort_key);
}
