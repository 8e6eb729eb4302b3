//! # Zebrella - ZPL Label Printing Library
//!
//! Zebrella builds ZPL label formats for Zebra thermal label printers and
//! delivers them over the network. It provides:
//!
//! - **Protocol implementation**: ZPL command builders
//! - **Label builder**: fluent, order-preserving directive accumulator
//! - **Templates**: named badge layouts with default content
//! - **Print orchestration**: dry run, connect, send, timeout, close
//! - **HTTP endpoint**: one request, one printed label
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use zebrella::{
//!     print::{PrintJob, PrintService},
//!     printer::PrinterModel,
//!     template::TemplateCatalog,
//!     transport::TcpTransport,
//! };
//!
//! # async fn example() -> zebrella::Result<()> {
//! let service = PrintService::new(Arc::new(TemplateCatalog::builtin()), Arc::new(TcpTransport));
//!
//! let printer = PrinterModel::ZEBRA_GK420T.profile("10.0.0.9");
//! let job = PrintJob::new(printer, "basicNameBadge");
//!
//! service.submit(job).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ZPL command builders |
//! | [`label`] | Label builder and serialization |
//! | [`template`] | Named label templates |
//! | [`graphic`] | Image to stored-graphic conversion |
//! | [`print`] | Print job orchestration |
//! | [`transport`] | Communication backends |
//! | [`server`] | HTTP request endpoint |
//! | [`printer`] | Printer models, profiles and unit conversion |
//! | [`config`] | Runtime configuration |
//! | [`error`] | Error types |
//!
//! ## Supported Printers
//!
//! - Zebra GX430t (300 DPI)
//! - Zebra GK420t, ZD420, ZT410 (203 DPI)
//!
//! Other ZPL II printers reachable on a raw TCP port work with a profile
//! override for their resolution.

pub mod config;
pub mod error;
pub mod graphic;
pub mod label;
pub mod print;
pub mod printer;
pub mod protocol;
pub mod server;
pub mod template;
pub mod transport;

// Re-exports for convenience
pub use error::{Result, ZebrellaError};
pub use label::{Label, LabelCommand};
pub use print::{PrintJob, PrintOutcome, PrintService};
pub use printer::{PrinterModel, PrinterProfile};
pub use template::{LabelTemplate, TemplateCatalog, TemplateRef};
pub use transport::TcpTransport;
