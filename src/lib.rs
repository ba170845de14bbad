//! meshctl: connectivity status for the mesh networking daemon
//!
//! Queries the daemon for a status snapshot and renders it as a detailed
//! report, JSON, YAML, or the bare interface address.

pub mod cli;
pub mod config;
pub mod daemon;
pub mod error;
pub mod logging;
pub mod status;
