//! # Printer Configuration
//!
//! This module defines the hardware specifications of supported label
//! printers and the per-run printer profile built from them.
//!
//! ## Supported Printers
//!
//! | Key | Model | Resolution | Default Port |
//! |-----|-------|------------|--------------|
//! | ZEBRA_GX430T | Zebra GX430t | 300 DPI | 9100 |
//! | ZEBRA_GK420T | Zebra GK420t | 203 DPI | 9100 |
//! | ZEBRA_ZD420 | Zebra ZD420 | 203 DPI | 9100 |
//! | ZEBRA_ZT410 | Zebra ZT410 | 203 DPI | 9100 |
//!
//! ## Usage
//!
//! ```
//! use zebrella::printer::PrinterModel;
//!
//! let model = PrinterModel::lookup("ZEBRA_GX430T")?;
//! let profile = model.profile("10.10.11.23");
//! assert_eq!(profile.resolution_x, 300);
//! assert_eq!(profile.port, 9100);
//! # Ok::<(), zebrella::ZebrellaError>(())
//! ```

use serde::{Deserialize, Serialize};

use super::units::{self, Axis};
use crate::error::{Result, ZebrellaError};

/// Raw TCP port used by Zebra print servers.
pub const DEFAULT_PORT: u16 = 9100;

/// # Printer Model
///
/// Static capability record for one printer model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterModel {
    /// Registry key
    pub key: &'static str,

    /// Human-readable model name
    pub name: &'static str,

    /// Horizontal resolution in dots per inch
    pub resolution_x: u32,

    /// Vertical resolution in dots per inch
    pub resolution_y: u32,

    /// Port the print server listens on
    pub default_port: u16,
}

impl PrinterModel {
    /// # Zebra GX430t
    ///
    /// 4" desktop thermal transfer printer, 300 DPI.
    pub const ZEBRA_GX430T: Self = Self {
        key: "ZEBRA_GX430T",
        name: "Zebra GX430t",
        resolution_x: 300,
        resolution_y: 300,
        default_port: DEFAULT_PORT,
    };

    /// # Zebra GK420t
    ///
    /// 4" desktop thermal transfer printer, 203 DPI.
    pub const ZEBRA_GK420T: Self = Self {
        key: "ZEBRA_GK420T",
        name: "Zebra GK420t",
        resolution_x: 203,
        resolution_y: 203,
        default_port: DEFAULT_PORT,
    };

    /// # Zebra ZD420
    pub const ZEBRA_ZD420: Self = Self {
        key: "ZEBRA_ZD420",
        name: "Zebra ZD420",
        resolution_x: 203,
        resolution_y: 203,
        default_port: DEFAULT_PORT,
    };

    /// # Zebra ZT410
    ///
    /// Industrial printer, 203 DPI printhead option.
    pub const ZEBRA_ZT410: Self = Self {
        key: "ZEBRA_ZT410",
        name: "Zebra ZT410",
        resolution_x: 203,
        resolution_y: 203,
        default_port: DEFAULT_PORT,
    };

    /// All registered models.
    pub const ALL: &'static [PrinterModel] = &[
        Self::ZEBRA_GX430T,
        Self::ZEBRA_GK420T,
        Self::ZEBRA_ZD420,
        Self::ZEBRA_ZT410,
    ];

    /// Look up a model by registry key or display name (case-insensitive).
    pub fn lookup(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .find(|m| m.key.eq_ignore_ascii_case(name) || m.name.eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| ZebrellaError::UnknownModel(name.to_string()))
    }

    /// Build a printer profile for this model at the given host.
    pub fn profile(&self, address: impl Into<String>) -> PrinterProfile {
        PrinterProfile {
            name: self.name.to_string(),
            address: address.into(),
            port: self.default_port,
            resolution_x: self.resolution_x,
            resolution_y: self.resolution_y,
            password: None,
        }
    }
}

impl Default for PrinterModel {
    fn default() -> Self {
        Self::ZEBRA_GX430T
    }
}

/// A concrete printer target: model capabilities plus network location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterProfile {
    /// Display name
    pub name: String,
    /// Host name or IP address
    pub address: String,
    pub port: u16,
    /// Horizontal resolution in dots per inch
    pub resolution_x: u32,
    /// Vertical resolution in dots per inch
    pub resolution_y: u32,
    /// Credential sent when the connection opens
    pub password: Option<String>,
}

impl PrinterProfile {
    /// Convert inches to dots along the horizontal axis.
    #[inline]
    pub fn dots(&self, inches: f64) -> i32 {
        self.dots_along(inches, Axis::X)
    }

    /// Convert inches to dots along the given axis.
    #[inline]
    pub fn dots_along(&self, inches: f64, axis: Axis) -> i32 {
        match axis {
            Axis::X => units::dots(inches, self.resolution_x),
            Axis::Y => units::dots(inches, self.resolution_y),
        }
    }

    /// Merge user-supplied fields onto this profile. Override fields win.
    pub fn merge(mut self, overrides: &PrinterOverride) -> Self {
        if let Some(name) = &overrides.name {
            self.name = name.clone();
        }
        if let Some(address) = &overrides.address {
            self.address = address.clone();
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(x) = overrides.resolution_x {
            self.resolution_x = x;
        }
        if let Some(y) = overrides.resolution_y {
            self.resolution_y = y;
        }
        if let Some(password) = &overrides.password {
            self.password = Some(password.clone());
        }
        self
    }
}

/// Run-time printer fields supplied by the user.
///
/// `model` selects a different base profile from the registry before the
/// remaining fields are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PrinterOverride {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub resolution_x: Option<u32>,
    #[serde(default)]
    pub resolution_y: Option<u32>,
    #[serde(default)]
    pub password: Option<String>,
}

impl PrinterOverride {
    /// Resolve against a base profile, swapping the base model first when
    /// `model` is set. A model swap replaces name and resolution only; the
    /// base address, port and password carry over.
    pub fn apply(&self, base: PrinterProfile) -> Result<PrinterProfile> {
        let base = match &self.model {
            Some(model) => {
                let model = PrinterModel::lookup(model)?;
                let mut profile = model.profile(base.address);
                profile.port = base.port;
                profile.password = base.password;
                profile
            }
            None => base,
        };
        Ok(base.merge(self))
    }
}

/// Stock dimensions of the loaded media.
///
/// Carried with each job; the builder does not consult it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSpec {
    pub width_mm: f64,
    pub length_mm: f64,
}

impl Default for MediaSpec {
    /// 2" × 1" label stock.
    fn default() -> Self {
        Self {
            width_mm: 2.0 * units::MM_PER_INCH,
            length_mm: 1.0 * units::MM_PER_INCH,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_key() {
        let model = PrinterModel::lookup("ZEBRA_GK420T").unwrap();
        assert_eq!(model.resolution_x, 203);
        assert_eq!(model.default_port, 9100);
    }

    #[test]
    fn test_lookup_by_display_name() {
        let model = PrinterModel::lookup("zebra gx430t").unwrap();
        assert_eq!(model, PrinterModel::ZEBRA_GX430T);
    }

    #[test]
    fn test_lookup_unknown() {
        let err = PrinterModel::lookup("LaserJet").unwrap_err();
        assert!(matches!(err, ZebrellaError::UnknownModel(name) if name == "LaserJet"));
    }

    #[test]
    fn test_profile_defaults() {
        let profile = PrinterModel::ZEBRA_GX430T.profile("10.10.11.23");
        assert_eq!(profile.name, "Zebra GX430t");
        assert_eq!(profile.address, "10.10.11.23");
        assert_eq!(profile.port, 9100);
        assert_eq!(profile.password, None);
    }

    #[test]
    fn test_profile_dots() {
        let profile = PrinterModel::ZEBRA_GK420T.profile("localhost");
        assert_eq!(profile.dots(0.1), 20);
        assert_eq!(profile.dots_along(1.0, Axis::Y), 203);
    }

    #[test]
    fn test_merge_override_wins() {
        let base = PrinterModel::ZEBRA_GX430T.profile("10.10.11.23");
        let overrides = PrinterOverride {
            address: Some("192.168.1.50".into()),
            password: Some("1234".into()),
            ..Default::default()
        };
        let merged = base.clone().merge(&overrides);
        assert_eq!(merged.address, "192.168.1.50");
        assert_eq!(merged.password.as_deref(), Some("1234"));
        // Untouched fields come from the base
        assert_eq!(merged.port, base.port);
        assert_eq!(merged.resolution_x, base.resolution_x);
    }

    #[test]
    fn test_override_switches_model() {
        let base = PrinterModel::ZEBRA_GX430T.profile("10.0.0.5");
        let overrides: PrinterOverride =
            serde_json::from_str(r#"{"model": "ZEBRA_ZD420", "port": 6101}"#).unwrap();
        let profile = overrides.apply(base).unwrap();
        assert_eq!(profile.name, "Zebra ZD420");
        assert_eq!(profile.address, "10.0.0.5");
        assert_eq!(profile.resolution_x, 203);
        assert_eq!(profile.port, 6101);
    }

    #[test]
    fn test_model_swap_keeps_connection_settings() {
        let mut base = PrinterModel::ZEBRA_GX430T.profile("10.0.0.5");
        base.port = 6101;
        base.password = Some("1234".into());
        let overrides: PrinterOverride =
            serde_json::from_str(r#"{"model": "ZEBRA_ZD420"}"#).unwrap();

        let profile = overrides.apply(base).unwrap();
        assert_eq!(profile.name, "Zebra ZD420");
        assert_eq!(profile.resolution_y, 203);
        assert_eq!(profile.address, "10.0.0.5");
        assert_eq!(profile.port, 6101);
        assert_eq!(profile.password.as_deref(), Some("1234"));
    }

    #[test]
    fn test_override_rejects_unknown_fields() {
        let result: std::result::Result<PrinterOverride, _> =
            serde_json::from_str(r#"{"adress": "typo"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_media_is_two_by_one_inch() {
        let media = MediaSpec::default();
        assert!((media.width_mm - 50.8).abs() < 1e-9);
        assert!((media.length_mm - 25.4).abs() < 1e-9);
    }
}
