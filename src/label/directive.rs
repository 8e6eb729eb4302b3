//! # Label Directives
//!
//! One directive per fluent builder call. Each directive maps to exactly one
//! ZPL command substring (see [`codegen`](super::codegen)), and the order they
//! are recorded in is the order the printer executes them.

use crate::protocol::commands::FieldJustification;
use crate::protocol::text::{Font, Orientation, TextJustification};

/// Recorded drawing/formatting instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Origin for all subsequent field placements (^LH).
    LabelHome { x: i32, y: i32 },

    /// Start a new field (^FO).
    FieldOrigin {
        x: i32,
        y: i32,
        justification: FieldJustification,
    },

    /// Font for the current field (^A / ^A@).
    SetFont {
        font: Font,
        orientation: Orientation,
        height: Option<i32>,
        width: Option<i32>,
    },

    /// Word-wrap geometry for the current field (^FB).
    FieldBlock {
        max_width: i32,
        max_lines: u32,
        line_spacing: i32,
        justification: TextJustification,
    },

    /// Literal text payload (^FD...^FS).
    FieldData(String),

    /// Stored graphic at the current field origin (^XG).
    ImageLoad(String),

    /// QR code at the current field origin (^BQ).
    QrCode { data: String, magnification: u8 },
}

impl Directive {
    /// Whether this directive places or fills a field. `LabelHome` must come
    /// before all of these.
    pub fn is_field(&self) -> bool {
        !matches!(self, Directive::LabelHome { .. })
    }

    /// Text payload carried by this directive, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Directive::FieldData(text) => Some(text),
            Directive::QrCode { data, .. } => Some(data),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_home_is_not_a_field() {
        assert!(!Directive::LabelHome { x: 0, y: 0 }.is_field());
        assert!(Directive::FieldData("x".into()).is_field());
        assert!(Directive::ImageLoad("E:CAI.GRF".into()).is_field());
    }

    #[test]
    fn test_text_payload() {
        assert_eq!(Directive::FieldData("Ada".into()).text(), Some("Ada"));
        let qr = Directive::QrCode {
            data: "url".into(),
            magnification: 3,
        };
        assert_eq!(qr.text(), Some("url"));
        assert_eq!(Directive::ImageLoad("E:CAI.GRF".into()).text(), None);
    }
}
