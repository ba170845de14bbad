//! Daemon transport: wire types, framing, and the status client.
//!
//! # Example
//!
//! ```no_run
//! use meshctl::daemon::{DaemonClient, IpcDaemonClient, StatusRequest};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = IpcDaemonClient::new("/var/run/meshd.sock", Duration::from_secs(5));
//! let response = client.status(&StatusRequest::full())?;
//! println!("Daemon status: {}", response.status);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod codec;
pub mod proto;

pub use client::{DaemonClient, IpcDaemonClient};
pub use codec::{decode_message, encode_message, LENGTH_PREFIX_SIZE, MAX_MESSAGE_SIZE};
pub use proto::{DaemonRequest, DaemonResponse, StatusRequest, StatusResponse};
