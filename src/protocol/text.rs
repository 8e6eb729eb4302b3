//! # ZPL Text Commands
//!
//! Font selection, word-wrap blocks and field data.
//!
//! ## Font Selection
//!
//! | Command | Font | Example |
//! |---------|------|---------|
//! | `^Afo,h,w` | Built-in font `f` (`0`, `A`-`Z`) | `^A0N,90` |
//! | `^A@o,h,w,d:f.x` | Font stored on the printer | `^A@N,44,24,E:RAVIE.TTF` |
//!
//! ## Orientation
//!
//! ```text
//! N  normal
//! R  rotated 90° clockwise
//! I  inverted 180°
//! B  read from bottom up, 270°
//! ```
//!
//! ## Reserved Characters
//!
//! `^` and `~` start commands, so they cannot appear literally in field data.
//! Text containing them is sent through the field hexadecimal indicator
//! (`^FH_`), with each reserved character written as `_` plus its two-digit
//! hex code. `_` itself becomes `_5F` in that mode.

use std::fmt;

use super::commands::{self, CARET, TILDE};

// ============================================================================
// ORIENTATION
// ============================================================================

/// Field rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Normal,
    Rotated,
    Inverted,
    Bottom,
}

impl Orientation {
    /// ZPL parameter letter.
    pub fn code(self) -> char {
        match self {
            Orientation::Normal => 'N',
            Orientation::Rotated => 'R',
            Orientation::Inverted => 'I',
            Orientation::Bottom => 'B',
        }
    }
}

// ============================================================================
// FONTS
// ============================================================================

/// Font reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Font {
    /// Resident bitmap or scalable font, by its single-character id
    Builtin(char),
    /// Font file stored on the printer, e.g. `E:ARIAL.TTF`
    Stored(String),
}

impl Font {
    /// The scalable resident font (CG Triumvirate Bold Condensed).
    pub const SCALABLE: Font = Font::Builtin('0');

    /// Stored font from a bare name and extension, on drive `E:`.
    pub fn stored(name: &str, extension: &str) -> Self {
        Font::Stored(format!("E:{}.{}", name.to_uppercase(), extension.to_uppercase()))
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Font::Builtin(id) => write!(f, "{}", id),
            Font::Stored(path) => write!(f, "{}", path),
        }
    }
}

impl From<char> for Font {
    fn from(id: char) -> Self {
        Font::Builtin(id)
    }
}

fn optional(value: Option<i32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// # Select Font (^A / ^A@)
///
/// Selects the font for the current field.
///
/// ## Parameters
///
/// - `font`: built-in id or stored font path
/// - `orientation`: field rotation
/// - `height`, `width`: character size in dots; `None` keeps the font default
///
/// Trailing omitted sizes are dropped; an omitted height followed by a width
/// is left empty (`^A0N,,30`).
///
/// ## Example
///
/// ```
/// use zebrella::protocol::text::{font, Font, Orientation};
///
/// assert_eq!(font(&Font::SCALABLE, Orientation::Normal, Some(90), None), "^A0N,90");
/// assert_eq!(font(&Font::Builtin('U'), Orientation::Normal, None, None), "^AUN");
/// assert_eq!(
///     font(&Font::stored("Ravie", "ttf"), Orientation::Normal, Some(45), Some(24)),
///     "^A@N,45,24,E:RAVIE.TTF"
/// );
/// ```
pub fn font(font: &Font, orientation: Orientation, height: Option<i32>, width: Option<i32>) -> String {
    match font {
        Font::Builtin(id) => {
            let mut out = format!("^A{}{}", id, orientation.code());
            match (height, width) {
                (None, None) => {}
                (Some(h), None) => out.push_str(&format!(",{}", h)),
                (h, Some(w)) => out.push_str(&format!(",{},{}", optional(h), w)),
            }
            out
        }
        Font::Stored(path) => format!(
            "^A@{},{},{},{}",
            orientation.code(),
            optional(height),
            optional(width),
            path
        ),
    }
}

// ============================================================================
// FIELD BLOCK
// ============================================================================

/// Text justification inside a field block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextJustification {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

impl TextJustification {
    /// ZPL parameter letter.
    pub fn code(self) -> char {
        match self {
            TextJustification::Left => 'L',
            TextJustification::Center => 'C',
            TextJustification::Right => 'R',
            TextJustification::Justified => 'J',
        }
    }
}

/// # Field Block (^FBw,l,s,j)
///
/// Word-wraps the current field's text.
///
/// ## Parameters
///
/// - `max_width`: block width in dots
/// - `max_lines`: lines before text overwrites the last line
/// - `line_spacing`: extra dots between lines (may be negative)
/// - `justification`: L, C, R or J
///
/// ## Example
///
/// ```
/// use zebrella::protocol::text::{field_block, TextJustification};
///
/// assert_eq!(field_block(700, 8, 0, TextJustification::Center), "^FB700,8,0,C");
/// ```
#[inline]
pub fn field_block(
    max_width: i32,
    max_lines: u32,
    line_spacing: i32,
    justification: TextJustification,
) -> String {
    format!(
        "^FB{},{},{},{}",
        max_width,
        max_lines,
        line_spacing,
        justification.code()
    )
}

// ============================================================================
// FIELD DATA
// ============================================================================

/// Indicator character used with `^FH`.
pub const HEX_INDICATOR: char = '_';

/// Whether text must go through `^FH` to be printed literally.
#[inline]
pub fn needs_escape(text: &str) -> bool {
    text.contains([CARET, TILDE])
}

/// Encode reserved characters as `_XX` hex escapes.
///
/// ```
/// use zebrella::protocol::text::hex_escape;
///
/// assert_eq!(hex_escape("A^B~C_D"), "A_5EB_7EC_5FD");
/// ```
pub fn hex_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            CARET | TILDE | HEX_INDICATOR => out.push_str(&format!("{}{:02X}", HEX_INDICATOR, c as u32)),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a field payload (`^FD...^FS`), escaping when required.
pub(crate) fn data_payload(prefix: &str, text: &str) -> String {
    let mut out = if needs_escape(text) {
        format!("^FH{}^FD{}{}", HEX_INDICATOR, prefix, hex_escape(text))
    } else {
        format!("^FD{}{}", prefix, text)
    };
    out.push_str(&commands::field_separator());
    out
}

/// # Field Data (^FD...^FS)
///
/// Supplies the text of the current field and closes it.
///
/// ## Example
///
/// ```
/// use zebrella::protocol::text::field_data;
///
/// assert_eq!(field_data("Ada"), "^FDAda^FS");
/// assert_eq!(field_data("R&D ^ Ops"), "^FH_^FDR&D _5E Ops^FS");
/// ```
#[inline]
pub fn field_data(text: &str) -> String {
    data_payload("", text)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_builtin_variants() {
        let f = Font::Builtin('D');
        assert_eq!(font(&f, Orientation::Normal, None, None), "^ADN");
        assert_eq!(font(&f, Orientation::Rotated, Some(24), None), "^ADR,24");
        assert_eq!(font(&f, Orientation::Normal, Some(24), Some(14)), "^ADN,24,14");
        assert_eq!(font(&f, Orientation::Bottom, None, Some(14)), "^ADB,,14");
    }

    #[test]
    fn test_font_stored() {
        let f = Font::Stored("E:ARIAL.TTF".into());
        assert_eq!(
            font(&f, Orientation::Inverted, None, None),
            "^A@I,,,E:ARIAL.TTF"
        );
    }

    #[test]
    fn test_stored_font_name() {
        assert_eq!(Font::stored("ravie", "ttf"), Font::Stored("E:RAVIE.TTF".into()));
    }

    #[test]
    fn test_field_block() {
        assert_eq!(field_block(406, 2, -5, TextJustification::Justified), "^FB406,2,-5,J");
    }

    #[test]
    fn test_field_data_plain_text_verbatim() {
        assert_eq!(field_data("snake_case"), "^FDsnake_case^FS");
        assert_eq!(field_data(""), "^FD^FS");
    }

    #[test]
    fn test_field_data_escapes_reserved() {
        assert_eq!(field_data("~JA"), "^FH_^FD_7EJA^FS");
        assert_eq!(field_data("a_^b"), "^FH_^FDa_5F_5Eb^FS");
    }

    #[test]
    fn test_orientation_codes() {
        let codes: String = [
            Orientation::Normal,
            Orientation::Rotated,
            Orientation::Inverted,
            Orientation::Bottom,
        ]
        .iter()
        .map(|o| o.code())
        .collect();
        assert_eq!(codes, "NRIB");
    }
}
