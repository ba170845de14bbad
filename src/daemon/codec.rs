//! Length-prefixed JSON framing.
//!
//! - 4 bytes: message length (big-endian u32)
//! - N bytes: JSON-encoded request or response

use crate::error::DaemonError;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

pub const MAX_MESSAGE_SIZE: usize = 1024 * 1024; // 1 MB
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Encode a message with its length prefix.
pub fn encode_message<T: Serialize>(msg: &T) -> Result<Vec<u8>, DaemonError> {
    let json = serde_json::to_vec(msg).map_err(|e| DaemonError::protocol(e.to_string()))?;
    if json.len() > MAX_MESSAGE_SIZE {
        return Err(DaemonError::protocol(format!(
            "Message too large: {} bytes",
            json.len()
        )));
    }

    let mut buf = Vec::with_capacity(LENGTH_PREFIX_SIZE + json.len());
    buf.extend_from_slice(&(json.len() as u32).to_be_bytes());
    buf.extend_from_slice(&json);
    Ok(buf)
}

/// Decode a message body (without prefix).
pub fn decode_message<T: for<'de> Deserialize<'de>>(data: &[u8]) -> Result<T, DaemonError> {
    serde_json::from_slice(data).map_err(|e| DaemonError::protocol(e.to_string()))
}

/// Write one framed message and flush.
pub async fn write_frame<W, T>(writer: &mut W, msg: &T) -> Result<(), DaemonError>
where
    W: AsyncWrite + Unpin,
    T: Serialize,
{
    let encoded = encode_message(msg)?;
    writer.write_all(&encoded).await?;
    writer.flush().await?;
    Ok(())
}

/// Read one framed message.
pub async fn read_frame<R, T>(reader: &mut R) -> Result<T, DaemonError>
where
    R: AsyncRead + Unpin,
    T: for<'de> Deserialize<'de>,
{
    let mut len_buf = [0u8; LENGTH_PREFIX_SIZE];
    reader.read_exact(&mut len_buf).await?;
    let msg_len = u32::from_be_bytes(len_buf) as usize;

    if msg_len > MAX_MESSAGE_SIZE {
        return Err(DaemonError::protocol(format!(
            "Response too large: {} bytes",
            msg_len
        )));
    }

    let mut msg_buf = vec![0u8; msg_len];
    reader.read_exact(&mut msg_buf).await?;
    decode_message(&msg_buf)
}
