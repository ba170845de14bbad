//! IpcDaemonClient against a fake daemon over a real socket.

use meshctl::daemon::proto::{DaemonResponse, StatusRequest};
use meshctl::daemon::{DaemonClient, IpcDaemonClient};
use meshctl::error::DaemonError;
use meshctl::status::{from_wire_full_status, ConnStatus};
use std::time::Duration;

use crate::integration::test_utils::{status_response, wire_peer, FakeDaemon};

#[test]
fn blocking_status_call_returns_snapshot() {
    let daemon = FakeDaemon::serve(vec![status_response(vec![
        wire_peer("100.64.0.2", "Connected", "alpha.mesh.example"),
        wire_peer("100.64.0.3", "Connecting", "bravo.mesh.example"),
    ])]);

    let client = IpcDaemonClient::new(daemon.socket_path(), Duration::from_secs(2));
    let resp = client.status(&StatusRequest::full()).unwrap();
    assert_eq!(resp.daemon_version, "0.24.1");

    let status = from_wire_full_status(resp.full_status.as_ref());
    assert_eq!(status.peers.len(), 2);
    assert_eq!(status.peers[1].conn_status, ConnStatus::Connecting);
    assert_eq!(status.peers[0].conn_status_update.timestamp(), 1_710_000_000);
    assert_eq!(status.connected_peers(), 1);
    daemon.finish();
}

#[test]
fn error_envelope_surfaces_as_rpc() {
    let daemon = FakeDaemon::serve(vec![DaemonResponse::Error {
        code: "internal".to_string(),
        message: "no engine".to_string(),
    }]);
    let client = IpcDaemonClient::new(daemon.socket_path(), Duration::from_secs(2));
    let err = client.status(&StatusRequest::full()).unwrap_err();
    assert!(matches!(err, DaemonError::Rpc { .. }));
    assert_eq!(err.to_string(), "no engine");
    daemon.finish();
}
