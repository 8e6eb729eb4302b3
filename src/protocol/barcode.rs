//! # ZPL Barcode Commands
//!
//! Only the QR code symbology is exposed; the printer renders the symbol
//! itself from the field data.

use super::text::data_payload;

/// # QR Code (^BQN,2,m + ^FDQA,data^FS)
///
/// Emits a model 2 QR code at the current field origin with automatic
/// error correction and input mode selection.
///
/// ## Parameters
///
/// - `magnification`: module size in dots, 1-10
///
/// ## Example
///
/// ```
/// use zebrella::protocol::barcode::qr_code;
///
/// assert_eq!(
///     qr_code("example.com/labels/HelloWorld", 4),
///     "^BQN,2,4^FDQA,example.com/labels/HelloWorld^FS"
/// );
/// ```
pub fn qr_code(data: &str, magnification: u8) -> String {
    format!("^BQN,2,{}{}", magnification, data_payload("QA,", data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qr_code_escapes_payload() {
        assert_eq!(qr_code("a^b", 3), "^BQN,2,3^FH_^FDQA,a_5Eb^FS");
    }
}
