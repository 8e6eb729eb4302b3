//! # ZPL II Protocol Implementation
//!
//! This module provides low-level command builders for the Zebra
//! Programming Language used by Zebra thermal label printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Label format brackets and field positioning
//! - [`text`]: Fonts, field blocks and field data
//! - [`graphics`]: Stored graphic download and recall
//! - [`barcode`]: QR codes
//!
//! ## Usage Example
//!
//! ```
//! use zebrella::protocol::{commands, text};
//! use zebrella::protocol::commands::FieldJustification;
//! use zebrella::protocol::text::{Font, Orientation};
//!
//! let mut zpl = String::new();
//! zpl.push_str(&commands::start_format());
//! zpl.push_str(&commands::field_origin(20, 20, FieldJustification::Left));
//! zpl.push_str(&text::font(&Font::SCALABLE, Orientation::Normal, Some(60), None));
//! zpl.push_str(&text::field_data("HELLO"));
//! zpl.push_str(&commands::end_format());
//!
//! assert_eq!(zpl, "^XA^FO20,20,0^A0N,60^FDHELLO^FS^XZ");
//! ```
//!
//! Every function returns the command text for exactly one command; the
//! label builder concatenates them in order.

pub mod barcode;
pub mod commands;
pub mod graphics;
pub mod text;
