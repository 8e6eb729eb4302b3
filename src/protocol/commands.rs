//! # ZPL Format Commands
//!
//! This module implements the structural commands of Zebra Programming
//! Language II: label format brackets, the label home, and field placement.
//!
//! ## Protocol Overview
//!
//! ZPL is a textual protocol. Every format command starts with a caret (`^`),
//! every control command with a tilde (`~`), followed by a two-character
//! mnemonic and comma-separated parameters:
//!
//! ```text
//! ^XA                     start of label format
//! ^LH20,20                label home (origin for all fields)
//! ^FO20,71,0              field origin
//! ^A0N,90                 font
//! ^FDHello^FS             field data + field separator
//! ^XZ                     end of label format
//! ```
//!
//! Coordinates are in dots relative to the label home. Parameters that are
//! omitted keep the printer's default value.
//!
//! ## Reference
//!
//! Based on "ZPL II Programming Guide" by Zebra Technologies.

/// Caret - format command prefix
pub const CARET: char = '^';

/// Tilde - control command prefix
pub const TILDE: char = '~';

// ============================================================================
// FIELD JUSTIFICATION
// ============================================================================

/// Field origin justification (third `^FO` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldJustification {
    #[default]
    Left = 0,
    Right = 1,
    /// Follows the script direction of the field data
    Auto = 2,
}

// ============================================================================
// LABEL FORMAT BRACKETS
// ============================================================================

/// # Start Format (^XA)
///
/// Opens a label format. Every command up to the matching `^XZ` belongs to
/// the same label.
///
/// ## Example
///
/// ```
/// use zebrella::protocol::commands;
///
/// assert_eq!(commands::start_format(), "^XA");
/// ```
#[inline]
pub fn start_format() -> String {
    "^XA".to_string()
}

/// # End Format (^XZ)
///
/// Closes the label format and prints it.
#[inline]
pub fn end_format() -> String {
    "^XZ".to_string()
}

/// # Change International Encoding to UTF-8 (^CI28)
///
/// Makes the printer read field data in the rest of the format as UTF-8.
/// Without it the printer uses its configured code page, usually Code Page
/// 850, and multi-byte characters print as several glyphs.
///
/// ## Example
///
/// ```
/// use zebrella::protocol::commands;
///
/// assert_eq!(commands::utf8_encoding(), "^CI28");
/// ```
#[inline]
pub fn utf8_encoding() -> String {
    "^CI28".to_string()
}

/// # Field Separator (^FS)
///
/// Terminates the current field.
#[inline]
pub fn field_separator() -> String {
    "^FS".to_string()
}

// ============================================================================
// POSITIONING
// ============================================================================

/// # Label Home (^LHx,y)
///
/// Sets the origin that every subsequent `^FO` is measured from.
///
/// ## Protocol Details
///
/// | Format | Text |
/// |--------|------|
/// | ASCII  | ^LHx,y |
///
/// ## Parameters
///
/// - `x`: horizontal offset in dots
/// - `y`: vertical offset in dots
///
/// ## Example
///
/// ```
/// use zebrella::protocol::commands::label_home;
///
/// assert_eq!(label_home(20, 20), "^LH20,20");
/// ```
#[inline]
pub fn label_home(x: i32, y: i32) -> String {
    format!("^LH{},{}", x, y)
}

/// # Field Origin (^FOx,y,z)
///
/// Starts a new field at a dot offset from the label home.
///
/// ## Parameters
///
/// - `x`, `y`: offset in dots
/// - `z`: justification, 0 = left, 1 = right, 2 = auto
///
/// ## Example
///
/// ```
/// use zebrella::protocol::commands::{field_origin, FieldJustification};
///
/// assert_eq!(field_origin(20, 71, FieldJustification::Left), "^FO20,71,0");
/// ```
#[inline]
pub fn field_origin(x: i32, y: i32, justification: FieldJustification) -> String {
    format!("^FO{},{},{}", x, y, justification as u8)
}

// ============================================================================
// TESTS
// ============================================================================
