//! # Printer Module
//!
//! This module provides printer-specific configurations and utilities.
//!
//! ## Modules
//!
//! - [`config`]: Printer model registry and per-job printer profiles
//! - [`units`]: Inch/millimeter to dot conversion

pub mod config;
pub mod units;

pub use config::{MediaSpec, PrinterModel, PrinterOverride, PrinterProfile};
pub use units::Axis;
