//! # Runtime Configuration
//!
//! One [`Config`] value is built at startup from command-line options and
//! shared read-only by the CLI and the HTTP endpoint.
//!
//! Print parameters may also be passed as JSON:
//!
//! ```json
//! {
//!   "printer": { "model": "ZEBRA_GK420T", "address": "10.0.0.9" },
//!   "template": "nameBadge",
//!   "content": { "firstName": "Ada", "lastName": "Lovelace", "region": "East", "team": "1" }
//! }
//! ```

use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, ZebrellaError};
use crate::print::{DEFAULT_TIMEOUT, PrintJob};
use crate::printer::{MediaSpec, PrinterModel, PrinterOverride, PrinterProfile};
use crate::template::{Content, DEFAULT_TEMPLATE};

/// Address a printer profile gets when none is configured.
pub const DEFAULT_ADDRESS: &str = "127.0.0.1";

/// Default listen address for `serve`.
pub const DEFAULT_LISTEN: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub printer: PrinterProfile,
    pub media: MediaSpec,
    /// Template used when a job does not name one
    pub template: String,
    pub timeout: Duration,
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            printer: PrinterModel::default().profile(DEFAULT_ADDRESS),
            media: MediaSpec::default(),
            template: DEFAULT_TEMPLATE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            dry_run: false,
        }
    }
}

impl Config {
    /// A job for the configured printer and template.
    pub fn job(&self, content: Option<Content>) -> PrintJob {
        PrintJob {
            printer: self.printer.clone(),
            template: self.template.clone().into(),
            content,
            media: self.media,
            dry_run: self.dry_run,
        }
    }

    /// A job for `params`, falling back to the configured values for
    /// anything they leave out.
    pub fn job_with(&self, params: PrintParameters) -> Result<PrintJob> {
        let printer = match &params.printer {
            Some(overrides) => overrides.apply(self.printer.clone())?,
            None => self.printer.clone(),
        };
        Ok(PrintJob {
            printer,
            template: params.template.unwrap_or_else(|| self.template.clone()).into(),
            content: params.content,
            media: params.media.unwrap_or(self.media),
            dry_run: self.dry_run,
        })
    }
}

/// Settings for the HTTP endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    pub config: Config,
}

/// Print parameters supplied as JSON.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrintParameters {
    #[serde(default)]
    pub printer: Option<PrinterOverride>,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub media: Option<MediaSpec>,
}

impl PrintParameters {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ZebrellaError::MalformedRequest(e.to_string()))
    }
}
