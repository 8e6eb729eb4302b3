//! # Unit Conversion
//!
//! Converts physical lengths to printer dots.
//!
//! ```text
//! dots = round(inches * dpi)
//!
//! For a 203 DPI printer:
//!   0.1"  →  20 dots
//!   0.35" →  71 dots
//!   1.0"  → 203 dots
//! ```
//!
//! No bounds checking is performed. Negative lengths follow the same formula
//! and values outside the printable area are passed through unchanged.

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Print axis, used to pick the matching resolution on printers whose
/// horizontal and vertical DPI differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Convert a length in inches to dots at the given resolution.
///
/// ## Example
///
/// ```
/// use zebrella::printer::units::dots;
///
/// assert_eq!(dots(0.1, 203), 20);
/// assert_eq!(dots(1.0, 300), 300);
/// ```
#[inline]
pub fn dots(inches: f64, dpi: u32) -> i32 {
    (inches * dpi as f64).round() as i32
}

/// Convert a length in millimeters to dots at the given resolution.
#[inline]
pub fn mm_to_dots(mm: f64, dpi: u32) -> i32 {
    dots(mm / MM_PER_INCH, dpi)
}
