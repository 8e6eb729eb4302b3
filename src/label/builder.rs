//! # Label Builder
//!
//! Fluent accumulator of label directives.

use super::codegen;
use super::directive::Directive;
use crate::error::{Result, ZebrellaError};
use crate::protocol::commands::FieldJustification;
use crate::protocol::text::{Font, Orientation, TextJustification};

/// Output of [`Label::end`]: the ZPL text plus the directives it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCommand {
    /// Complete `^XA ... ^XZ` label format
    pub text: String,
    /// Directives in recording order
    pub directives: Vec<Directive>,
}

/// A label under construction.
///
/// Every operation returns `Result<&mut Label>` so calls chain with `?`.
/// [`end`](Label::end) finalizes the label; any later call fails with
/// [`ZebrellaError::BuilderAlreadyFinalized`].
///
/// ## Example
///
/// ```
/// use zebrella::label::Label;
/// use zebrella::protocol::commands::FieldJustification;
/// use zebrella::protocol::text::{Font, Orientation, TextJustification};
///
/// let label = Label::new()
///     .label_home(20, 20)?
///     .field_origin(20, 71, FieldJustification::Left)?
///     .set_font(Font::SCALABLE, Orientation::Normal, Some(61), None)?
///     .field_block(700, 8, 0, TextJustification::Center)?
///     .field_data("Eric Kachelmeyer")?
///     .end()?;
///
/// assert!(label.text.starts_with("^XA^LH20,20"));
/// assert_eq!(label.directives.len(), 5);
/// # Ok::<(), zebrella::ZebrellaError>(())
/// ```
#[derive(Debug, Default)]
pub struct Label {
    directives: Vec<Directive>,
    finalized: bool,
}

impl Label {
    /// Create an empty, open label.
    pub fn new() -> Self {
        Self::default()
    }

    /// Directives recorded so far.
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Whether [`end`](Label::end) has been called.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    fn ensure_open(&self) -> Result<()> {
        if self.finalized {
            return Err(ZebrellaError::BuilderAlreadyFinalized);
        }
        Ok(())
    }

    fn record(&mut self, directive: Directive) -> Result<&mut Self> {
        self.ensure_open()?;
        self.directives.push(directive);
        Ok(self)
    }

    /// Set the origin for all subsequent fields, in dots.
    ///
    /// Allowed once, before any field directive.
    pub fn label_home(&mut self, x: i32, y: i32) -> Result<&mut Self> {
        self.ensure_open()?;
        if self
            .directives
            .iter()
            .any(|d| matches!(d, Directive::LabelHome { .. }))
        {
            return Err(ZebrellaError::DirectiveOrder(
                "label home is already set".to_string(),
            ));
        }
        if self.directives.iter().any(Directive::is_field) {
            return Err(ZebrellaError::DirectiveOrder(
                "label home must precede all field directives".to_string(),
            ));
        }
        self.record(Directive::LabelHome { x, y })
    }

    /// Begin a new field at a dot offset from the label home.
    pub fn field_origin(
        &mut self,
        x: i32,
        y: i32,
        justification: FieldJustification,
    ) -> Result<&mut Self> {
        self.record(Directive::FieldOrigin {
            x,
            y,
            justification,
        })
    }

    /// Select a font, rotation and optional size for the current field.
    pub fn set_font(
        &mut self,
        font: impl Into<Font>,
        orientation: Orientation,
        height: Option<i32>,
        width: Option<i32>,
    ) -> Result<&mut Self> {
        self.record(Directive::SetFont {
            font: font.into(),
            orientation,
            height,
            width,
        })
    }

    /// Select a font file stored on drive `E:` by name and extension.
    pub fn set_font_by_name(
        &mut self,
        orientation: Orientation,
        height: i32,
        width: i32,
        name: &str,
        extension: &str,
    ) -> Result<&mut Self> {
        self.set_font(
            Font::stored(name, extension),
            orientation,
            Some(height),
            Some(width),
        )
    }

    /// Declare word-wrap geometry for the current field's text.
    pub fn field_block(
        &mut self,
        max_width: i32,
        max_lines: u32,
        line_spacing: i32,
        justification: TextJustification,
    ) -> Result<&mut Self> {
        self.record(Directive::FieldBlock {
            max_width,
            max_lines,
            line_spacing,
            justification,
        })
    }

    /// Text payload for the current field.
    pub fn field_data(&mut self, text: impl Into<String>) -> Result<&mut Self> {
        self.record(Directive::FieldData(text.into()))
    }

    /// Print a stored graphic (e.g. `E:CAI.GRF`) at the current field origin.
    pub fn image_load(&mut self, reference: impl Into<String>) -> Result<&mut Self> {
        self.record(Directive::ImageLoad(reference.into()))
    }

    /// Print a QR code at the current field origin.
    pub fn qr_code(&mut self, data: impl Into<String>, magnification: u8) -> Result<&mut Self> {
        self.record(Directive::QrCode {
            data: data.into(),
            magnification,
        })
    }

    /// Finalize the label and serialize it.
    pub fn end(&mut self) -> Result<LabelCommand> {
        self.ensure_open()?;
        self.finalized = true;
        let directives = std::mem::take(&mut self.directives);
        Ok(LabelCommand {
            text: codegen::to_zpl(&directives),
            directives,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
