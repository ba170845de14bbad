//! Integration tests for meshctl

mod config_integration;
mod daemon_client;
mod status_cli;
