//! End-to-end `meshctl status` through the run context and a fake daemon.

use meshctl::cli::{Cli, RunContext};
use meshctl::config::MeshctlConfig;
use meshctl::daemon::proto::{DaemonRequest, DaemonResponse, StatusRequest, StatusResponse};
use meshctl::error::StatusError;
use clap::Parser;

use crate::integration::test_utils::{status_response, wire_peer, FakeDaemon};

fn run(daemon: &FakeDaemon, args: &[&str]) -> Result<String, StatusError> {
    let cli = Cli::try_parse_from(args).unwrap();
    let ctx = RunContext::new(MeshctlConfig::default(), Some(daemon.socket_path())).unwrap();
    ctx.execute(&cli.command)
}

#[test]
fn detail_with_status_filter_shows_only_connected() {
    let daemon = FakeDaemon::serve(vec![status_response(vec![
        wire_peer("100.64.0.2", "Connected", "alpha.mesh.example"),
        wire_peer("100.64.0.1", "Disconnected", "bravo.mesh.example"),
    ])]);

    let out = run(
        &daemon,
        &["meshctl", "status", "--detail", "--filter-by-status", "connected"],
    )
    .unwrap();

    assert!(out.starts_with("Peers detail:\n alpha.mesh.example:\n"));
    assert!(!out.contains("bravo.mesh.example"));
    assert!(out.contains("Daemon version: 0.24.1\n"));
    assert!(out.contains("Daemon status: Connected\n"));
    assert!(out.contains("Peers count: 1/2 Connected\n"));

    let seen = daemon.finish();
    assert_eq!(seen, vec![DaemonRequest::Status(StatusRequest::full())]);
}

#[test]
fn detail_with_ip_filter_keeps_true_peer_count() {
    let daemon = FakeDaemon::serve(vec![status_response(vec![
        wire_peer("100.64.0.5", "Connected", "five.mesh.example"),
        wire_peer("100.64.0.6", "Connected", "six.mesh.example"),
    ])]);

    let out = run(&daemon, &["meshctl", "status", "-d", "--filter-by-ips", "100.64.0.5"]).unwrap();

    assert!(out.contains(" five.mesh.example:\n"));
    assert!(!out.contains("six.mesh.example"));
    assert!(out.contains("Peers count: 2/2 Connected\n"));
    daemon.finish();
}

#[test]
fn detail_is_sorted_by_address() {
    let daemon = FakeDaemon::serve(vec![status_response(vec![
        wire_peer("100.64.0.30", "Connected", "thirty.mesh.example"),
        wire_peer("100.64.0.4", "Idle", "four.mesh.example"),
        wire_peer("100.64.0.200", "Connected", "two-hundred.mesh.example"),
    ])]);

    let out = run(&daemon, &["meshctl", "status", "-d"]).unwrap();
    let four = out.find("four.mesh.example").unwrap();
    let thirty = out.find("thirty.mesh.example").unwrap();
    let two_hundred = out.find("two-hundred.mesh.example").unwrap();
    assert!(four < thirty && thirty < two_hundred);
    daemon.finish();
}

#[test]
fn json_ignores_filters_and_keeps_daemon_order() {
    let daemon = FakeDaemon::serve(vec![status_response(vec![
        wire_peer("100.64.0.9", "Connected", "nine.mesh.example"),
        wire_peer("100.64.0.1", "Disconnected", "one.mesh.example"),
    ])]);

    let out = run(
        &daemon,
        &["meshctl", "status", "--json", "--filter-by-status", "connected"],
    )
    .unwrap();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let peers = value["Peers"].as_array().unwrap();
    assert_eq!(peers.len(), 2);
    assert_eq!(peers[0]["FQDN"], "nine.mesh.example");
    assert_eq!(peers[1]["ConnStatus"], "Disconnected");
    assert_eq!(value["LocalPeerState"]["IP"], "100.64.0.33/16");
    daemon.finish();
}

#[test]
fn yaml_contains_every_peer() {
    let daemon = FakeDaemon::serve(vec![status_response(vec![
        wire_peer("100.64.0.9", "Connected", "nine.mesh.example"),
        wire_peer("100.64.0.1", "Disconnected", "one.mesh.example"),
    ])]);

    let out = run(
        &daemon,
        &["meshctl", "status", "--yaml", "--filter-by-ips", "100.64.0.9"],
    )
    .unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
    let peers = value["Peers"].as_sequence().unwrap();
    assert_eq!(peers.len(), 2);
    daemon.finish();
}

#[test]
fn ipv4_prints_bare_address() {
    let daemon = FakeDaemon::serve(vec![status_response(Vec::new())]);
    let out = run(&daemon, &["meshctl", "status", "--ipv4"]).unwrap();
    assert_eq!(out, "100.64.0.33\n");
    daemon.finish();
}

#[test]
fn ipv4_with_unset_address_prints_nothing() {
    let daemon = FakeDaemon::serve(vec![DaemonResponse::Status(StatusResponse {
        status: "Idle".to_string(),
        daemon_version: "0.24.1".to_string(),
        full_status: None,
    })]);
    let out = run(&daemon, &["meshctl", "status", "--ipv4"]).unwrap();
    assert_eq!(out, "");
    daemon.finish();
}

#[test]
fn needs_login_prints_instructions() {
    let daemon = FakeDaemon::serve(vec![DaemonResponse::Status(StatusResponse {
        status: "NeedsLogin".to_string(),
        daemon_version: "0.24.1".to_string(),
        full_status: None,
    })]);
    let out = run(&daemon, &["meshctl", "status", "-d"]).unwrap();
    assert!(out.starts_with("Daemon status: NeedsLogin\n\n"));
    assert!(out.contains("meshctl up --management-url"));
    assert!(!out.contains("Peers detail:"));
    daemon.finish();
}

#[test]
fn default_mode_prints_status_line() {
    let daemon = FakeDaemon::serve(vec![status_response(Vec::new())]);
    let out = run(&daemon, &["meshctl", "status"]).unwrap();
    assert_eq!(out, "Daemon status: Connected\n");
    daemon.finish();
}

#[test]
fn rpc_error_is_unwrapped() {
    let daemon = FakeDaemon::serve(vec![DaemonResponse::Error {
        code: "unavailable".to_string(),
        message: "engine is restarting".to_string(),
    }]);
    let err = run(&daemon, &["meshctl", "status", "--json"]).unwrap_err();
    assert_eq!(err.to_string(), "status failed: engine is restarting");
    daemon.finish();
}

#[test]
fn invalid_filter_never_contacts_daemon() {
    let daemon = FakeDaemon::serve(Vec::new());
    let err = run(
        &daemon,
        &["meshctl", "status", "-d", "--filter-by-status", "maybe"],
    )
    .unwrap_err();
    assert!(matches!(err, StatusError::Validation(_)));
    assert!(daemon.finish().is_empty());
}

#[test]
fn unreachable_daemon_reports_remediation() {
    let dir = tempfile::TempDir::new().unwrap();
    let cli = Cli::try_parse_from(["meshctl", "status", "-d"]).unwrap();
    let ctx = RunContext::new(MeshctlConfig::default(), Some(dir.path().join("gone.sock"))).unwrap();
    let err = ctx.execute(&cli.command).unwrap_err();
    assert!(matches!(err, StatusError::Connection { .. }));
    assert!(err.to_string().contains("meshd service install"));
}
