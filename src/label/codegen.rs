//! # Code Generation
//!
//! Converts recorded directives to ZPL command text.

use super::directive::Directive;
use crate::protocol::{barcode, commands, graphics, text};

impl Directive {
    /// Compile this directive to its single ZPL command substring.
    pub fn to_zpl(&self) -> String {
        match self {
            Directive::LabelHome { x, y } => commands::label_home(*x, *y),
            Directive::FieldOrigin {
                x,
                y,
                justification,
            } => commands::field_origin(*x, *y, *justification),
            Directive::SetFont {
                font,
                orientation,
                height,
                width,
            } => text::font(font, *orientation, *height, *width),
            Directive::FieldBlock {
                max_width,
                max_lines,
                line_spacing,
                justification,
            } => text::field_block(*max_width, *max_lines, *line_spacing, *justification),
            Directive::FieldData(data) => text::field_data(data),
            Directive::ImageLoad(reference) => graphics::recall_graphic(reference),
            Directive::QrCode {
                data,
                magnification,
            } => barcode::qr_code(data, *magnification),
        }
    }
}

/// Compile a directive sequence into one label format.
///
/// The output is `^XA`, then each directive in recorded order, then `^XZ`.
/// Nothing is reordered, merged or dropped. A label with non-ASCII text also
/// gets `^CI28` right after `^XA`.
pub fn to_zpl(directives: &[Directive]) -> String {
    let mut out = commands::start_format();
    if directives.iter().any(needs_utf8) {
        out.push_str(&commands::utf8_encoding());
    }
    for directive in directives {
        out.push_str(&directive.to_zpl());
    }
    out.push_str(&commands::end_format());
    out
}

fn needs_utf8(directive: &Directive) -> bool {
    directive.text().is_some_and(|text| !text.is_ascii())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::commands::FieldJustification;
    use crate::protocol::text::{Font, Orientation, TextJustification};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_label() {
        assert_eq!(to_zpl(&[]), "^XA^XZ");
    }

    #[test]
    fn test_each_directive_emits_one_command() {
        let directives = vec![
            Directive::LabelHome { x: 20, y: 20 },
            Directive::FieldOrigin {
                x: 20,
                y: 71,
                justification: FieldJustification::Left,
            },
            Directive::SetFont {
                font: Font::SCALABLE,
                orientation: Orientation::Normal,
                height: Some(61),
                width: None,
            },
            Directive::FieldBlock {
                max_width: 700,
                max_lines: 8,
                line_spacing: 0,
                justification: TextJustification::Center,
            },
            Directive::FieldData("Eric".into()),
            Directive::ImageLoad("E:CAI.GRF".into()),
        ];

        assert_eq!(
            to_zpl(&directives),
            "^XA^LH20,20^FO20,71,0^A0N,61^FB700,8,0,C^FDEric^FS^XGE:CAI.GRF,1,1^FS^XZ"
        );
    }

    #[test]
    fn test_non_ascii_text_selects_utf8() {
        let directives = vec![
            Directive::LabelHome { x: 20, y: 20 },
            Directive::FieldData("José".into()),
        ];
        assert_eq!(to_zpl(&directives), "^XA^CI28^LH20,20^FDJosé^FS^XZ");

        let qr = vec![Directive::QrCode {
            data: "café.example".into(),
            magnification: 2,
        }];
        assert!(to_zpl(&qr).starts_with("^XA^CI28^BQN,2,2"));
    }

    #[test]
    fn test_ascii_label_has_no_code_page() {
        let directives = vec![Directive::FieldData("Jose ^ Co".into())];
        assert_eq!(to_zpl(&directives), "^XA^FH_^FDJose _5E Co^FS^XZ");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let directives = vec![
            Directive::FieldData("same".into()),
            Directive::FieldData("same".into()),
        ];
        assert_eq!(to_zpl(&directives), "^XA^FDsame^FS^FDsame^FS^XZ");
    }
}
