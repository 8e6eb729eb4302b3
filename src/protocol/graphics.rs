//! # ZPL Graphics Commands
//!
//! Stored graphics: download a 1-bit image into printer memory once with
//! `~DG`, then place it on any label with `^XG`.
//!
//! ## Data Layout
//!
//! ```text
//! bytes_per_row = ceil(width / 8)
//! total_bytes   = bytes_per_row * height
//!
//! Each byte: 8 horizontal pixels, MSB = leftmost, 1 = black
//! Sent as two uppercase ASCII hex digits per byte
//! ```

use super::commands;

/// # Recall Graphic (^XGd:o.x,mx,my^FS)
///
/// Prints a graphic previously stored on the printer at the current field
/// origin, at 1:1 magnification.
///
/// ## Example
///
/// ```
/// use zebrella::protocol::graphics::recall_graphic;
///
/// assert_eq!(recall_graphic("E:CAI.GRF"), "^XGE:CAI.GRF,1,1^FS");
/// ```
#[inline]
pub fn recall_graphic(reference: &str) -> String {
    format!("^XG{},1,1{}", reference, commands::field_separator())
}

/// # Download Graphic (~DGd:o.x,t,w,data)
///
/// Stores a 1-bit image on the printer under `reference`.
///
/// ## Parameters
///
/// - `reference`: device and file name, e.g. `E:CAI.GRF`
/// - `bytes_per_row`: packed row width in bytes
/// - `data`: packed rows, `bytes_per_row * height` bytes
///
/// ## Example
///
/// ```
/// use zebrella::protocol::graphics::download_graphic;
///
/// // 8x2 image: top row black, bottom row white
/// let cmd = download_graphic("R:BAR.GRF", 1, &[0xFF, 0x00]);
/// assert_eq!(cmd, "~DGR:BAR.GRF,2,1,FF00");
/// ```
pub fn download_graphic(reference: &str, bytes_per_row: usize, data: &[u8]) -> String {
    let mut out = format!("~DG{},{},{},", reference, data.len(), bytes_per_row);
    out.reserve(data.len() * 2);
    for byte in data {
        out.push_str(&format!("{:02X}", byte));
    }
    out
}
