//! Daemon client: one blocking status round-trip over a Unix socket.

use crate::daemon::codec::{read_frame, write_frame};
use crate::daemon::proto::{DaemonRequest, DaemonResponse, StatusRequest, StatusResponse};
use crate::error::DaemonError;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::net::UnixStream;
use tracing::{debug, warn};

/// Source of daemon status snapshots.
pub trait DaemonClient {
    fn status(&self, request: &StatusRequest) -> Result<StatusResponse, DaemonError>;
}

/// Client for the daemon's control socket.
pub struct IpcDaemonClient {
    socket_path: PathBuf,
    timeout: Duration,
}

impl IpcDaemonClient {
    pub fn new(socket_path: impl AsRef<Path>, timeout: Duration) -> Self {
        Self {
            socket_path: socket_path.as_ref().to_path_buf(),
            timeout,
        }
    }

    /// Send one request and wait for its response.
    pub async fn send(&self, request: &DaemonRequest) -> Result<DaemonResponse, DaemonError> {
        let addr = self.socket_path.display().to_string();
        let timeout_ms = self.timeout.as_millis() as u64;

        let connect = UnixStream::connect(&self.socket_path);
        let mut stream = match tokio::time::timeout(self.timeout, connect).await {
            Ok(Ok(stream)) => stream,
            Ok(Err(e)) => {
                warn!(socket = %addr, error = %e, "Daemon socket unreachable");
                return Err(DaemonError::Connect {
                    addr,
                    reason: e.to_string(),
                });
            }
            Err(_) => {
                warn!(socket = %addr, timeout_ms, "Timed out connecting to daemon");
                return Err(DaemonError::Connect {
                    addr,
                    reason: format!("connection timed out after {} ms", timeout_ms),
                });
            }
        };
        debug!(socket = %addr, "Connected to daemon");

        let exchange = async {
            write_frame(&mut stream, request).await?;
            read_frame::<_, DaemonResponse>(&mut stream).await
        };

        match tokio::time::timeout(self.timeout, exchange).await {
            Ok(result) => result,
            Err(_) => Err(DaemonError::Timeout(timeout_ms)),
        }
    }

    /// Async status call; the sync trait wraps this in a runtime.
    pub async fn status_async(&self, request: &StatusRequest) -> Result<StatusResponse, DaemonError> {
        let response = self.send(&DaemonRequest::Status(request.clone())).await?;
        match response {
            DaemonResponse::Status(status) => {
                debug!(daemon_status = %status.status, "Received status response");
                Ok(status)
            }
            DaemonResponse::Error { code, message } => {
                warn!(code = %code, message = %message, "Daemon rejected status request");
                Err(DaemonError::Rpc { code, message })
            }
        }
    }
}

impl DaemonClient for IpcDaemonClient {
    fn status(&self, request: &StatusRequest) -> Result<StatusResponse, DaemonError> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        rt.block_on(self.status_async(request))
    }
}
