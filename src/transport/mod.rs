//! # Printer Transport Layer
//!
//! This module provides communication backends for sending label formats to
//! printers.
//!
//! ## Available Transports
//!
//! - [`tcp`]: raw TCP (port 9100) for networked printers
//!
//! Anything implementing [`Transport`] can stand in for the network, which is
//! how the print orchestrator is tested.
//!
//! ## Connection Lifecycle
//!
//! ```text
//! connect ──► send ──► receive ──► close
//!    │          │          │
//!    └──────────┴──────────┴──► close (on any failure)
//! ```
//!
//! `close` is idempotent and must be called on every exit path.

pub mod tcp;

pub use tcp::{TcpConnection, TcpTransport};

use async_trait::async_trait;

use crate::error::Result;
use crate::printer::PrinterProfile;

/// Where and how to reach a printer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub address: String,
    pub port: u16,
    /// Sent before the label when the printer requires it
    pub password: Option<String>,
}

impl Endpoint {
    pub fn new(address: impl Into<String>, port: u16) -> Self {
        Self {
            address: address.into(),
            port,
            password: None,
        }
    }

    /// `host:port`
    pub fn authority(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

impl From<&PrinterProfile> for Endpoint {
    fn from(profile: &PrinterProfile) -> Self {
        Self {
            address: profile.address.clone(),
            port: profile.port,
            password: profile.password.clone(),
        }
    }
}

/// Opens connections to printers.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn connect(&self, endpoint: &Endpoint) -> Result<Box<dyn Connection>>;
}

/// One open printer connection.
#[async_trait]
pub trait Connection: Send {
    /// Transmit a complete command.
    async fn send(&mut self, command: &str) -> Result<()>;

    /// Wait for the printer's reply. An empty buffer means the printer
    /// closed the connection without answering.
    async fn receive(&mut self) -> Result<Vec<u8>>;

    /// Release the connection. Safe to call more than once.
    async fn close(&mut self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::PrinterModel;

    #[test]
    fn test_endpoint_from_profile() {
        let mut profile = PrinterModel::ZEBRA_ZD420.profile("192.168.1.40");
        profile.password = Some("1234".into());
        let endpoint = Endpoint::from(&profile);
        assert_eq!(endpoint.authority(), "192.168.1.40:9100");
        assert_eq!(endpoint.password.as_deref(), Some("1234"));
    }
}
