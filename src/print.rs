//! # Print Orchestrator
//!
//! Runs one print job end to end:
//!
//! ```text
//! resolve template ──► render label ──► dry run? ──yes──► DryRun { command }
//!                                          │ no
//!                                          ▼
//!        Connecting ──► Sending ──► AwaitingResponse ──► Closed
//!             │            │               │
//!             └────────────┴───────────────┴──► Failed ──► Closed
//! ```
//!
//! Template and builder errors abort before any connection is opened. One
//! deadline, started when the connection is opened, bounds connect, send and
//! the wait for a reply.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use crate::error::{Result, ZebrellaError};
use crate::printer::{MediaSpec, PrinterProfile};
use crate::template::{Content, TemplateCatalog, TemplateRef};
use crate::transport::{Connection, Endpoint, Transport};

/// Default time allowed for connect, send and reply together.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// One request to print one label.
#[derive(Debug, Clone)]
pub struct PrintJob {
    pub printer: PrinterProfile,
    pub template: TemplateRef,
    /// `None` prints the template's default content
    pub content: Option<Content>,
    pub media: MediaSpec,
    /// Build the command but do not open a connection
    pub dry_run: bool,
}

impl PrintJob {
    pub fn new(printer: PrinterProfile, template: impl Into<TemplateRef>) -> Self {
        Self {
            printer,
            template: template.into(),
            content: None,
            media: MediaSpec::default(),
            dry_run: false,
        }
    }

    pub fn content(mut self, content: Content) -> Self {
        self.content = Some(content);
        self
    }

    pub fn media(mut self, media: MediaSpec) -> Self {
        self.media = media;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Result of a successful job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum PrintOutcome {
    /// Command built, nothing sent
    DryRun { command: String },
    /// Command delivered; `response` is empty when the printer closed
    /// without replying
    Printed {
        command: String,
        #[serde(serialize_with = "serialize_lossy")]
        response: Vec<u8>,
    },
}

impl PrintOutcome {
    /// The label command text.
    pub fn command(&self) -> &str {
        match self {
            PrintOutcome::DryRun { command } | PrintOutcome::Printed { command, .. } => command,
        }
    }
}

fn serialize_lossy<S: serde::Serializer>(bytes: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}

/// Where a printer connection is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connecting,
    Sending,
    AwaitingResponse,
    Closed,
    Failed,
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConnectionState::Connecting => "connecting",
            ConnectionState::Sending => "sending",
            ConnectionState::AwaitingResponse => "awaiting-response",
            ConnectionState::Closed => "closed",
            ConnectionState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Submits print jobs.
///
/// Cheap to clone; the catalog and transport are shared.
#[derive(Clone)]
pub struct PrintService {
    catalog: Arc<TemplateCatalog>,
    transport: Arc<dyn Transport>,
    timeout: Duration,
}

impl PrintService {
    pub fn new(catalog: Arc<TemplateCatalog>, transport: Arc<dyn Transport>) -> Self {
        Self {
            catalog,
            transport,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run a job to completion.
    #[instrument(
        skip(self, job),
        fields(
            job_id = %Uuid::new_v4(),
            template = job.template.name(),
            printer = %job.printer.name,
            dry_run = job.dry_run,
        )
    )]
    pub async fn submit(&self, job: PrintJob) -> Result<PrintOutcome> {
        let resolved = self.catalog.resolve(&job.template, job.content)?;
        let label = resolved.render(&job.printer)?;
        let command = label.text;

        debug!(
            media_width_mm = job.media.width_mm,
            media_length_mm = job.media.length_mm,
            "Command: {}",
            command
        );

        if job.dry_run {
            info!("Dry run, not sending");
            return Ok(PrintOutcome::DryRun { command });
        }

        let response = self.send_raw(&job.printer, &command).await?;
        Ok(PrintOutcome::Printed { command, response })
    }

    /// Deliver an already-built command to a printer and return its reply.
    ///
    /// Used for commands that are not labels, such as graphic downloads.
    pub async fn send_raw(&self, printer: &PrinterProfile, command: &str) -> Result<Vec<u8>> {
        let endpoint = Endpoint::from(printer);
        info!("Connecting to printer at {}", endpoint.authority());

        let deadline = Instant::now() + self.timeout;
        let mut state = ConnectionState::Connecting;

        let mut conn = match tokio::time::timeout_at(deadline, self.transport.connect(&endpoint)).await {
            Ok(Ok(conn)) => conn,
            Ok(Err(e)) => {
                transition(&mut state, ConnectionState::Failed);
                error!(error = %e, "Connection failed");
                return Err(e);
            }
            Err(_) => {
                transition(&mut state, ConnectionState::Failed);
                warn!("Socket timeout while connecting");
                return Err(ZebrellaError::Timeout(self.timeout));
            }
        };

        let exchanged = self.exchange(conn.as_mut(), command, deadline, &mut state).await;
        if exchanged.is_err() {
            transition(&mut state, ConnectionState::Failed);
        }

        if let Err(e) = conn.close().await {
            warn!(error = %e, "Close failed");
        }
        transition(&mut state, ConnectionState::Closed);

        exchanged
    }

    async fn exchange(
        &self,
        conn: &mut dyn Connection,
        command: &str,
        deadline: Instant,
        state: &mut ConnectionState,
    ) -> Result<Vec<u8>> {
        let result = tokio::time::timeout_at(deadline, async {
            transition(state, ConnectionState::Sending);
            conn.send(command).await?;
            transition(state, ConnectionState::AwaitingResponse);
            conn.receive().await
        })
        .await;

        match result {
            Ok(Ok(response)) => {
                debug!(response = %String::from_utf8_lossy(&response), "Printer response");
                Ok(response)
            }
            Ok(Err(e)) => {
                error!(error = %e, "Transport failure");
                Err(e)
            }
            Err(_) => {
                warn!("Socket timeout");
                Err(ZebrellaError::Timeout(self.timeout))
            }
        }
    }
}

impl fmt::Debug for PrintService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrintService")
            .field("catalog", &self.catalog)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

fn transition(state: &mut ConnectionState, next: ConnectionState) {
    debug!(from = %state, to = %next, "Connection state");
    *state = next;
}

// ============================================================================
// TESTS
// ============================================================================
