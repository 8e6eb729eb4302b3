//! # Built-in Badge Templates
//!
//! Coordinates are given in inches and converted with the target printer's
//! resolution, so the same template lays out identically at 203 and 300 DPI.

use serde::{Deserialize, Serialize};

use super::{Content, LabelTemplate, parse_content, to_content};
use crate::error::Result;
use crate::label::{Label, LabelCommand};
use crate::printer::{Axis, PrinterProfile};
use crate::protocol::commands::FieldJustification;
use crate::protocol::text::{Font, Orientation, TextJustification};

/// Stored logo recalled by the basic name badge.
pub const LOGO: &str = "E:CAI.GRF";

// ============================================================================
// NAME BADGE
// ============================================================================

/// Fields of the four-line name badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NameBadgeContent {
    pub first_name: String,
    pub last_name: String,
    pub region: String,
    pub team: String,
}

/// First name large, last name below it, region and team on the bottom row.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameBadge;

impl NameBadge {
    /// Render typed content.
    pub fn build(content: &NameBadgeContent, printer: &PrinterProfile) -> Result<LabelCommand> {
        let x = |inches| printer.dots(inches);
        let y = |inches| printer.dots_along(inches, Axis::Y);

        Label::new()
            .label_home(x(0.1), y(0.1))?
            // First name
            .field_origin(x(0.1), y(0.15), FieldJustification::Left)?
            .set_font(Font::SCALABLE, Orientation::Normal, Some(y(0.3)), None)?
            .field_block(x(3.5), 1, 0, TextJustification::Center)?
            .field_data(content.first_name.as_str())?
            // Last name
            .field_origin(x(0.1), y(0.5), FieldJustification::Left)?
            .set_font(Font::SCALABLE, Orientation::Normal, Some(y(0.22)), None)?
            .field_block(x(3.5), 1, 0, TextJustification::Center)?
            .field_data(content.last_name.as_str())?
            // Region
            .field_origin(x(0.1), y(0.85), FieldJustification::Left)?
            .set_font('U', Orientation::Normal, None, None)?
            .field_data(content.region.as_str())?
            // Team
            .field_origin(x(2.6), y(0.85), FieldJustification::Left)?
            .set_font(Font::SCALABLE, Orientation::Normal, Some(y(0.15)), None)?
            .field_data(content.team.as_str())?
            .end()
    }
}

impl LabelTemplate for NameBadge {
    fn name(&self) -> &str {
        "nameBadge"
    }

    fn description(&self) -> &str {
        "First/last name badge with region and team"
    }

    fn default_content(&self) -> Content {
        to_content(&NameBadgeContent {
            first_name: "Eric".to_string(),
            last_name: "Kachelmeyer".to_string(),
            region: "Midwest".to_string(),
            team: "1".to_string(),
        })
    }

    fn render(&self, content: &Content, printer: &PrinterProfile) -> Result<LabelCommand> {
        let content: NameBadgeContent = parse_content(self.name(), content)?;
        Self::build(&content, printer)
    }
}

// ============================================================================
// BASIC NAME BADGE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BasicNameBadgeContent {
    pub full_name: String,
    pub region: String,
}

/// Full name, region, and the stored logo underneath.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicNameBadge;

impl LabelTemplate for BasicNameBadge {
    fn name(&self) -> &str {
        "basicNameBadge"
    }

    fn description(&self) -> &str {
        "Full name and region with logo"
    }

    fn default_content(&self) -> Content {
        to_content(&BasicNameBadgeContent {
            full_name: "Eric Kachelmeyer".to_string(),
            region: "Midwest".to_string(),
        })
    }

    fn render(&self, content: &Content, printer: &PrinterProfile) -> Result<LabelCommand> {
        let content: BasicNameBadgeContent = parse_content(self.name(), content)?;
        let x = |inches| printer.dots(inches);
        let y = |inches| printer.dots_along(inches, Axis::Y);

        Label::new()
            .label_home(x(0.1), y(0.1))?
            // Full name
            .field_origin(x(0.1), y(0.35), FieldJustification::Left)?
            .set_font(Font::SCALABLE, Orientation::Normal, Some(y(0.3)), None)?
            .field_block(700, 8, 0, TextJustification::Center)?
            .field_data(content.full_name)?
            // Region
            .field_origin(x(0.1), y(0.85), FieldJustification::Left)?
            .set_font('U', Orientation::Normal, None, None)?
            .field_block(700, 8, 0, TextJustification::Center)?
            .field_data(content.region)?
            // Logo
            .field_origin(x(0.1), y(1.3), FieldJustification::Left)?
            .image_load(LOGO)?
            .end()
    }
}

// ============================================================================
// TEST LABEL
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestLabelContent {
    pub text: String,
}

/// Two copies of a short string side by side, for checking alignment.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestLabel;

impl LabelTemplate for TestLabel {
    fn name(&self) -> &str {
        "basic"
    }

    fn description(&self) -> &str {
        "Printer test label"
    }

    fn default_content(&self) -> Content {
        to_content(&TestLabelContent {
            text: "TEST LABEL".to_string(),
        })
    }

    fn render(&self, content: &Content, printer: &PrinterProfile) -> Result<LabelCommand> {
        let content: TestLabelContent = parse_content(self.name(), content)?;
        let x = |inches| printer.dots(inches);
        let y = |inches| printer.dots_along(inches, Axis::Y);

        Label::new()
            .field_origin(x(0.1), 0, FieldJustification::Left)?
            .set_font('D', Orientation::Normal, Some(y(0.12)), Some(x(0.067)))?
            .field_data(content.text.as_str())?
            .field_origin(x(0.6), 0, FieldJustification::Left)?
            .set_font('D', Orientation::Normal, Some(y(0.12)), Some(x(0.067)))?
            .field_data(content.text.as_str())?
            .end()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ZebrellaError;
    use crate::label::Directive;
    use crate::printer::PrinterModel;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn gk420() -> PrinterProfile {
        PrinterModel::ZEBRA_GK420T.profile("127.0.0.1")
    }

    fn content(value: serde_json::Value) -> Content {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_basic_name_badge_at_203_dpi() {
        let label = BasicNameBadge
            .render(&BasicNameBadge.default_content(), &gk420())
            .unwrap();
        assert_eq!(
            label.text,
            "^XA^LH20,20\
             ^FO20,71,0^A0N,61^FB700,8,0,C^FDEric Kachelmeyer^FS\
             ^FO20,173,0^AUN^FB700,8,0,C^FDMidwest^FS\
             ^FO20,264,0^XGE:CAI.GRF,1,1^FS^XZ"
        );
    }

    #[test]
    fn test_basic_name_badge_scales_with_resolution() {
        let printer = PrinterModel::ZEBRA_GX430T.profile("127.0.0.1");
        let label = BasicNameBadge
            .render(&BasicNameBadge.default_content(), &printer)
            .unwrap();
        assert!(label.text.starts_with("^XA^LH30,30^FO30,105,0^A0N,90"));
    }

    #[test]
    fn test_name_badge_field_order() {
        let content = content(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "region": "East",
            "team": "1"
        }));
        let label = NameBadge.render(&content, &gk420()).unwrap();

        let data: Vec<&str> = label.directives.iter().filter_map(Directive::text).collect();
        assert_eq!(data, vec!["Ada", "Lovelace", "East", "1"]);

        // Every field data is preceded by an origin and a font
        for (i, directive) in label.directives.iter().enumerate() {
            if let Directive::FieldData(_) = directive {
                let before = &label.directives[..i];
                let origin = before
                    .iter()
                    .rposition(|d| matches!(d, Directive::FieldOrigin { .. }))
                    .unwrap();
                assert!(before[origin..]
                    .iter()
                    .any(|d| matches!(d, Directive::SetFont { .. })));
            }
        }
    }

    #[test]
    fn test_name_badge_rejects_missing_field() {
        let content = content(json!({"firstName": "Ada", "lastName": "Lovelace", "region": "East"}));
        let err = NameBadge.render(&content, &gk420()).unwrap_err();
        assert!(matches!(err, ZebrellaError::InvalidContent { .. }));
    }

    #[test]
    fn test_name_badge_rejects_unknown_field() {
        let mut content = NameBadge.default_content();
        content.insert("nickname".into(), json!("Countess"));
        let err = NameBadge.render(&content, &gk420()).unwrap_err();
        assert!(matches!(err, ZebrellaError::InvalidContent { .. }));
    }

    #[test]
    fn test_test_label() {
        let label = TestLabel.render(&TestLabel.default_content(), &gk420()).unwrap();
        assert_eq!(
            label.text,
            "^XA^FO20,0,0^ADN,24,14^FDTEST LABEL^FS^FO122,0,0^ADN,24,14^FDTEST LABEL^FS^XZ"
        );
    }

    #[test]
    fn test_vertical_positions_use_vertical_resolution() {
        // 203 dpi across, 406 dpi along the feed
        let printer = PrinterProfile {
            resolution_y: 406,
            ..gk420()
        };

        let badge = BasicNameBadge
            .render(&BasicNameBadge.default_content(), &printer)
            .unwrap();
        assert_eq!(
            badge.text,
            "^XA^LH20,41^FO20,142,0^A0N,122^FB700,8,0,C^FDEric Kachelmeyer^FS\
             ^FO20,345,0^AUN^FB700,8,0,C^FDMidwest^FS^FO20,528,0^XGE:CAI.GRF,1,1^FS^XZ"
        );

        let test = TestLabel.render(&TestLabel.default_content(), &printer).unwrap();
        assert_eq!(
            test.text,
            "^XA^FO20,0,0^ADN,49,14^FDTEST LABEL^FS^FO122,0,0^ADN,49,14^FDTEST LABEL^FS^XZ"
        );
    }

    #[test]
    fn test_default_content_shapes() {
        let badge = NameBadge.default_content();
        assert_eq!(badge.get("firstName"), Some(&json!("Eric")));
        assert_eq!(badge.len(), 4);
        let basic = BasicNameBadge.default_content();
        assert_eq!(basic.get("fullName"), Some(&json!("Eric Kachelmeyer")));
    }
}
