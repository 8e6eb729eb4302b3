//! # Raw TCP Transport
//!
//! Zebra printers accept label formats on a raw socket, usually port 9100.
//!
//! ## Session
//!
//! ```text
//! client                          printer
//!   │ ── <password>\r\n (optional) ──► │
//!   │ ── ^XA ... ^XZ ────────────────► │
//!   │ ── FIN (write half closed) ────► │
//!   │ ◄──────────────── reply / close ─│
//! ```
//!
//! Shutting down the write half tells the printer the job is complete; most
//! printers then close the socket without a reply, which [`receive`] reports
//! as an empty buffer. A reply is read until the printer closes the socket or
//! stays silent for [`IDLE_GAP`] after its last bytes. The caller's deadline
//! bounds the wait for the first byte.
//!
//! [`receive`]: super::Connection::receive

use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, info, instrument, warn};

use super::{Connection, Endpoint, Transport};
use crate::error::{Result, ZebrellaError};

/// Read buffer size for printer replies
const READ_BUFFER: usize = 4096;

/// Silence after the last reply bytes that ends the read
pub const IDLE_GAP: Duration = Duration::from_millis(500);

/// Opens [`TcpConnection`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpTransport;

#[async_trait]
impl Transport for TcpTransport {
    #[instrument(skip(self, endpoint), fields(addr = %endpoint.authority()))]
    async fn connect(&self, endpoint: &Endpoint) -> Result<Box<dyn Connection>> {
        info!("Connecting to printer");
        let stream = TcpStream::connect((endpoint.address.as_str(), endpoint.port))
            .await
            .map_err(|e| ZebrellaError::ConnectionFailed(format!("{}: {}", endpoint.authority(), e)))?;
        info!("Connected");

        Ok(Box::new(TcpConnection {
            stream: Some(stream),
            authority: endpoint.authority(),
            password: endpoint.password.clone(),
        }))
    }
}

/// An open socket to a printer.
#[derive(Debug)]
pub struct TcpConnection {
    stream: Option<TcpStream>,
    authority: String,
    password: Option<String>,
}

impl TcpConnection {
    fn stream(&mut self) -> Result<&mut TcpStream> {
        self.stream
            .as_mut()
            .ok_or_else(|| ZebrellaError::ConnectionFailed(format!("{}: connection closed", self.authority)))
    }

    fn failed(&self, action: &str, e: std::io::Error) -> ZebrellaError {
        ZebrellaError::ConnectionFailed(format!("{} failed on {}: {}", action, self.authority, e))
    }
}

#[async_trait]
impl Connection for TcpConnection {
    #[instrument(skip(self, command), fields(addr = %self.authority, len = command.len()))]
    async fn send(&mut self, command: &str) -> Result<()> {
        let password = self.password.clone();
        let stream = self.stream()?;

        let mut payload = Vec::with_capacity(command.len() + 16);
        if let Some(password) = password {
            payload.extend_from_slice(password.as_bytes());
            payload.extend_from_slice(b"\r\n");
        }
        payload.extend_from_slice(command.as_bytes());

        let result = async {
            stream.write_all(&payload).await?;
            stream.flush().await?;
            stream.shutdown().await
        }
        .await;
        result.map_err(|e| self.failed("Write", e))?;

        debug!(bytes = payload.len(), "Command sent");
        Ok(())
    }

    #[instrument(skip(self), fields(addr = %self.authority))]
    async fn receive(&mut self) -> Result<Vec<u8>> {
        let stream = self.stream()?;
        let mut reply = Vec::new();
        let mut chunk = [0u8; READ_BUFFER];

        let result = loop {
            let read = if reply.is_empty() {
                stream.read(&mut chunk).await
            } else {
                match tokio::time::timeout(IDLE_GAP, stream.read(&mut chunk)).await {
                    Ok(read) => read,
                    Err(_) => {
                        debug!("Printer went idle after reply");
                        break Ok(());
                    }
                }
            };
            match read {
                Ok(0) => break Ok(()),
                Ok(n) => reply.extend_from_slice(&chunk[..n]),
                Err(e) => break Err(e),
            }
        };
        result.map_err(|e| self.failed("Read", e))?;

        if reply.is_empty() {
            debug!("Printer closed connection without reply");
        } else {
            debug!(bytes = reply.len(), "Received reply");
        }
        Ok(reply)
    }

    async fn close(&mut self) -> Result<()> {
        if let Some(mut stream) = self.stream.take() {
            // The write half may already be shut down after send
            if let Err(e) = stream.shutdown().await {
                debug!(error = %e, "Shutdown on close");
            }
            info!(addr = %self.authority, "Connection closed");
        }
        Ok(())
    }
}

impl Drop for TcpConnection {
    fn drop(&mut self) {
        if self.stream.is_some() {
            warn!(addr = %self.authority, "Connection dropped without close");
        }
    }
}
