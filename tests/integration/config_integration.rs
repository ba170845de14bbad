//! Configuration feeding the run context.

use meshctl::cli::{Cli, RunContext};
use meshctl::config::ConfigLoader;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::integration::test_utils::{status_response, FakeDaemon};

#[test]
fn config_file_points_at_daemon_socket() {
    let daemon = FakeDaemon::serve(vec![status_response(Vec::new())]);
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("meshctl.toml");

    let mut table = toml::map::Map::new();
    let mut daemon_table = toml::map::Map::new();
    daemon_table.insert(
        "socket_path".to_string(),
        toml::Value::String(daemon.socket_path().display().to_string()),
    );
    daemon_table.insert("timeout_ms".to_string(), toml::Value::Integer(2000));
    table.insert("daemon".to_string(), toml::Value::Table(daemon_table));
    fs::write(&config_path, toml::to_string(&table).unwrap()).unwrap();

    let config = ConfigLoader::load_with_global(None, Some(&config_path)).unwrap();
    assert_eq!(config.daemon.socket_path, daemon.socket_path());
    assert_eq!(config.daemon.timeout_ms, 2000);

    let ctx = RunContext::new(config, None).unwrap();
    let cli = Cli::try_parse_from(["meshctl", "status", "--ipv4"]).unwrap();
    assert_eq!(ctx.execute(&cli.command).unwrap(), "100.64.0.33\n");
    daemon.finish();
}

#[test]
fn daemon_addr_flag_beats_config_file() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("meshctl.toml");
    fs::write(&config_path, "[daemon]\nsocket_path = \"/run/from-file.sock\"\n").unwrap();

    let config = ConfigLoader::load_with_global(None, Some(&config_path)).unwrap();
    let ctx = RunContext::new(config, Some(PathBuf::from("/run/from-flag.sock"))).unwrap();
    assert_eq!(
        ctx.config().daemon.socket_path,
        PathBuf::from("/run/from-flag.sock")
    );
}

#[test]
fn logging_section_is_read() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("meshctl.toml");
    fs::write(&config_path, "[logging]\nlevel = \"debug\"\nformat = \"json\"\n").unwrap();

    let config = ConfigLoader::load_with_global(None, Some(&config_path)).unwrap();
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.logging.output, "stderr");
}
