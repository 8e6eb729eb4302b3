//! # Error Types
//!
//! This module defines error types used throughout the zebrella library.
//!
//! Builder and resolver errors ([`ZebrellaError::UnknownModel`],
//! [`ZebrellaError::UnknownTemplate`], [`ZebrellaError::BuilderAlreadyFinalized`],
//! [`ZebrellaError::DirectiveOrder`], [`ZebrellaError::InvalidContent`]) are
//! raised before any network activity. Transport errors
//! ([`ZebrellaError::ConnectionFailed`], [`ZebrellaError::Timeout`]) are the
//! outcome of a single print job.

use std::time::Duration;

use thiserror::Error;

/// Main error type for zebrella operations
#[derive(Debug, Error)]
pub enum ZebrellaError {
    /// Printer model is not in the profile registry
    #[error("Unknown printer model: {0}")]
    UnknownModel(String),

    /// Template name is not registered in the catalog
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// A directive (or a second `end`) was issued after the label was finalized
    #[error("Label builder already finalized")]
    BuilderAlreadyFinalized,

    /// Directive issued in a position the protocol does not allow
    #[error("Invalid directive order: {0}")]
    DirectiveOrder(String),

    /// Content record does not match the template's fields
    #[error("Invalid content for template '{template}': {message}")]
    InvalidContent { template: String, message: String },

    /// Could not open, write to, or read from the printer connection
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Printer did not answer before the job deadline
    #[error("Timeout: no response from printer within {0:?}")]
    Timeout(Duration),

    /// Inbound request body is not a valid content record
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// Image processing error
    #[error("Image error: {0}")]
    Image(String),

    /// HTTP listener error
    #[error("Server error: {0}")]
    Server(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ZebrellaError {
    /// Whether this error came from the printer connection rather than
    /// from building the label.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ZebrellaError::ConnectionFailed(_) | ZebrellaError::Timeout(_)
        )
    }
}

/// Result type for zebrella operations
pub type Result<T> = std::result::Result<T, ZebrellaError>;
