//! # Label Builder
//!
//! This module turns fluent drawing calls into a ZPL label format.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────────┐     ┌──────────┐
//! │ Label (fluent│ ──► │   Directives    │ ──► │ Codegen  │ ──► ^XA ... ^XZ
//! │   builder)   │     │ (Vec<Directive>)│     │  (text)  │
//! └──────────────┘     └─────────────────┘     └──────────┘
//! ```
//!
//! There is no optimizer: printers execute ZPL in
//! the order received, so the recorded order is emitted 1:1.

mod builder;
mod codegen;
mod directive;

pub use builder::{Label, LabelCommand};
pub use codegen::to_zpl;
pub use directive::Directive;
